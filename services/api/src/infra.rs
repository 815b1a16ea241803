use finfinder::checklist::{
    ChecklistId, ChecklistRepository, ChecklistRequest, RepositoryError as ChecklistRepositoryError,
};
use finfinder::conversation::{
    ConversationId, ConversationRecord, ConversationRepository,
    RepositoryError as ConversationRepositoryError,
};
use finfinder::directory::LenderRecord;
use finfinder::matching::{
    RepositoryError as SubmissionRepositoryError, SubmissionId, SubmissionRecord,
    SubmissionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Lender directory shared between the matching services and the directory
/// endpoints.
#[derive(Clone)]
pub(crate) struct SharedDirectory(pub(crate) Arc<Vec<LenderRecord>>);

/// Submissions keep insertion order so `recent` can walk newest-first.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(
        &self,
        record: SubmissionRecord,
    ) -> Result<SubmissionRecord, SubmissionRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(SubmissionRepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<SubmissionRecord>, SubmissionRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.submission_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, SubmissionRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryConversationRepository {
    records: Arc<Mutex<HashMap<ConversationId, ConversationRecord>>>,
}

impl ConversationRepository for InMemoryConversationRepository {
    fn insert(
        &self,
        record: ConversationRecord,
    ) -> Result<ConversationRecord, ConversationRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.conversation_id) {
            return Err(ConversationRepositoryError::Conflict);
        }
        guard.insert(record.conversation_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ConversationRecord) -> Result<(), ConversationRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.conversation_id) {
            guard.insert(record.conversation_id.clone(), record);
            Ok(())
        } else {
            Err(ConversationRepositoryError::NotFound)
        }
    }

    fn fetch(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, ConversationRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryChecklistRepository {
    records: Arc<Mutex<HashMap<ChecklistId, ChecklistRequest>>>,
}

impl ChecklistRepository for InMemoryChecklistRepository {
    fn insert(
        &self,
        request: ChecklistRequest,
    ) -> Result<ChecklistRequest, ChecklistRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&request.checklist_id) {
            return Err(ChecklistRepositoryError::Conflict);
        }
        guard.insert(request.checklist_id.clone(), request.clone());
        Ok(request)
    }

    fn update(&self, request: ChecklistRequest) -> Result<(), ChecklistRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&request.checklist_id) {
            guard.insert(request.checklist_id.clone(), request);
            Ok(())
        } else {
            Err(ChecklistRepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ChecklistId) -> Result<Option<ChecklistRequest>, ChecklistRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Built-in directory used when no CSV export is configured. The institutions
/// are fictional but span every category, region, and country filter so the
/// service is demonstrable out of the box.
pub(crate) fn seed_directory() -> Vec<LenderRecord> {
    vec![
        LenderRecord {
            lender_type: text("Multilateral Development Bank"),
            regions: text("Global"),
            products: text("Trade finance, project finance, sovereign guarantees"),
            performance_note: text("Anchor financier for south-south trade corridors"),
            typical_ticket: text("$10M - $500M"),
            typical_term: text("5 - 20 years"),
            website: text("https://gtdb.example.org"),
            ..LenderRecord::new("lender-gtdb", "Global Trade & Development Bank")
        },
        LenderRecord {
            lender_type: text("DFI"),
            regions: text("Africa, West Africa"),
            products: text("Trade finance, working capital, SME lending"),
            performance_note: text("Strong agricultural trade franchise across the Sahel belt"),
            typical_ticket: text("$500K - $20M"),
            typical_term: text("1 - 7 years"),
            website: text("https://sahel-dfc.example.org"),
            ..LenderRecord::new("lender-sahel", "Sahel Development Finance Corporation")
        },
        LenderRecord {
            lender_type: text("Export Credit Agency"),
            regions: text("Europe, Germany, Netherlands"),
            products: text("Export credit insurance, buyer credit, guarantees"),
            typical_ticket: text("$1M - $100M"),
            typical_term: text("2 - 10 years"),
            website: text("https://meridian-eca.example.com"),
            ..LenderRecord::new("lender-meridian", "Meridian Export Credit Agency")
        },
        LenderRecord {
            lender_type: text("Commercial Bank"),
            regions: text("US, Canada"),
            products: text("Working capital, term loans, letters of credit"),
            typical_ticket: text("$250K - $25M"),
            typical_term: text("1 - 5 years"),
            typical_ltv: text("70%"),
            website: text("https://atlanticgate.example.com"),
            ..LenderRecord::new("lender-atlanticgate", "Atlantic Gate Commercial Bank")
        },
        LenderRecord {
            lender_type: text("Global Bank"),
            regions: text("Global, Middle East, Asia"),
            products: text("Trade finance, letters of credit, supply chain finance"),
            typical_ticket: text("$1M - $250M"),
            typical_term: text("90 days - 5 years"),
            website: text("https://equatorial.example.com"),
            ..LenderRecord::new("lender-equatorial", "Equatorial Global Bank")
        },
        LenderRecord {
            lender_type: text("Bridge Lender, Specialty Finance"),
            geographic_coverage: text("UK, Europe"),
            loan_products: text("Bridge loans, asset-backed facilities"),
            typical_ticket: text("$2M - $40M"),
            typical_term: text("6 - 24 months"),
            typical_ltv: text("65%"),
            website: text("https://crossspan.example.com"),
            ..LenderRecord::new("lender-crossspan", "CrossSpan Bridge Capital")
        },
        LenderRecord {
            lender_type: text("Private Equity"),
            regions: text("Emerging markets, Africa, Latin America"),
            products: text("Growth equity, mezzanine financing"),
            performance_note: text("Operational playbook for mid-market consumer brands"),
            typical_ticket: text("$5M - $75M"),
            website: text("https://terracotta.example.com"),
            ..LenderRecord::new("lender-terracotta", "Terracotta Private Equity Partners")
        },
        LenderRecord {
            lender_type: text("Infrastructure Fund, Pension Fund"),
            regions: text("Latin America, Brazil, Colombia, Mexico"),
            products: text("Project finance, infrastructure debt"),
            typical_ticket: text("$20M - $300M"),
            typical_term: text("10 - 25 years"),
            website: text("https://andino.example.com"),
            ..LenderRecord::new("lender-andino", "Andino Infrastructure Fund")
        },
        LenderRecord {
            lender_type: text("Private Credit, Asset Manager"),
            regions: text("Global"),
            products: text("Direct lending, unitranche, equipment financing"),
            typical_ticket: text("$10M - $150M"),
            typical_ltv: text("60%"),
            website: text("https://northquay.example.com"),
            ..LenderRecord::new("lender-northquay", "North Quay Private Credit")
        },
        LenderRecord {
            lender_type: text("Fintech Lending Platform"),
            regions: text("Asia, China, India, Vietnam"),
            products: text("Invoice financing, supply chain finance, SME loans"),
            performance_note: text("Digital onboarding in under 48 hours"),
            typical_ticket: text("$50K - $5M"),
            typical_term: text("30 - 180 days"),
            website: text("https://silkbridge.example.com"),
            ..LenderRecord::new("lender-silkbridge", "SilkBridge Trade Platform")
        },
        LenderRecord {
            lender_type: text("Commercial Bank"),
            regions: text("Africa, South Africa, Nigeria"),
            products: text("Trade finance, letters of credit, export finance, invoice financing"),
            performance_note: text("Dedicated trade desk for agricultural exporters"),
            typical_ticket: text("$100K - $10M"),
            typical_term: text("90 days - 3 years"),
            website: text("https://zambesi.example.com"),
            ..LenderRecord::new("lender-zambesi", "Zambesi Trade Finance House")
        },
        LenderRecord {
            lender_type: text("DFI, Development Finance Institution"),
            regions: text("Middle East, North Africa"),
            products: text("Project finance, trade finance, working capital"),
            typical_ticket: text("$1M - $50M"),
            typical_term: text("3 - 12 years"),
            website: text("https://gulfcrescent.example.org"),
            ..LenderRecord::new("lender-gulfcrescent", "Gulf Crescent Development Finance")
        },
    ]
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}
