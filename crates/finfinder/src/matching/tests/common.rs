use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::directory::LenderRecord;
use crate::matching::repository::{
    RepositoryError, SubmissionId, SubmissionRecord, SubmissionRepository,
};
use crate::matching::{match_router, MatchService, QualificationForm};

pub(super) fn nigeria_trade_form() -> QualificationForm {
    QualificationForm {
        business_name: "Lagos Agro Exports Ltd".to_string(),
        business_type: "Corporation".to_string(),
        industry_sector: "Agriculture".to_string(),
        years_in_operation: "3-5".to_string(),
        country_of_operation: "Nigeria".to_string(),
        funding_type: vec!["Trade Finance (Import/Export)".to_string()],
        funding_amount: String::new(),
        funding_purpose: vec!["Purchase of goods/materials".to_string()],
        annual_revenue: "$100K - $500K".to_string(),
        has_existing_loans: false,
        financials_up_to_date: true,
        involved_in_trade: true,
        trading_partner_country: "China".to_string(),
        preferred_financing_instrument: Vec::new(),
        contact_name: "Adaeze Okafor".to_string(),
        contact_position: "CFO".to_string(),
        contact_email: "adaeze@lagosagro.example".to_string(),
        contact_phone: "+234 801 234 5678".to_string(),
        preferred_contact_method: "Email".to_string(),
        consent_matching: true,
        consent_contact: true,
    }
}

pub(super) fn dfi_lender() -> LenderRecord {
    LenderRecord {
        lender_type: Some("DFI".to_string()),
        regions: Some("Africa, West Africa".to_string()),
        products: Some("Trade finance, working capital".to_string()),
        website: Some("https://adf.example".to_string()),
        ..LenderRecord::new("lender-adf", "African Development Finance")
    }
}

pub(super) fn sample_directory() -> Vec<LenderRecord> {
    vec![
        LenderRecord {
            lender_type: Some("Commercial Bank".to_string()),
            regions: Some("Global".to_string()),
            products: Some("Working capital, project finance".to_string()),
            ..LenderRecord::new("lender-meridian", "Meridian Commercial Bank")
        },
        LenderRecord {
            lender_type: Some("Fintech platform".to_string()),
            regions: Some("Nigeria, Ghana".to_string()),
            products: Some("Invoice financing, SME loans".to_string()),
            ..LenderRecord::new("lender-paystream", "PayStream Capital")
        },
        dfi_lender(),
    ]
}

pub(super) fn build_service() -> (MatchService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = MatchService::new(Arc::new(sample_directory()), store.clone());
    (service, store)
}

pub(super) fn match_router_with_service(service: MatchService<MemoryStore>) -> axum::Router {
    match_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl MemoryStore {
    pub(super) fn stored(&self) -> Vec<SubmissionRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl SubmissionRepository for MemoryStore {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.submission_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableStore;

impl SubmissionRepository for UnavailableStore {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
