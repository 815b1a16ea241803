use serde::{Deserialize, Serialize};

/// One financing institution in the lender directory.
///
/// Everything except `id` and `name` comes from free-text directory exports
/// and may be missing. Matching and filtering code reads the descriptive
/// fields through the lowercasing accessors below so that an absent field
/// behaves like an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LenderRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub lender_type: Option<String>,
    pub regions: Option<String>,
    pub geographic_coverage: Option<String>,
    pub products: Option<String>,
    pub loan_products: Option<String>,
    pub performance_note: Option<String>,
    pub typical_ticket: Option<String>,
    pub typical_loan_size: Option<String>,
    pub typical_term: Option<String>,
    pub typical_ltv: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

impl LenderRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lender_type: None,
            regions: None,
            geographic_coverage: None,
            products: None,
            loan_products: None,
            performance_note: None,
            typical_ticket: None,
            typical_loan_size: None,
            typical_term: None,
            typical_ltv: None,
            website: None,
            logo_url: None,
        }
    }

    pub fn type_text(&self) -> String {
        lowered(self.lender_type.as_deref())
    }

    /// Regions column exactly as recorded, without the coverage fallback.
    /// Qualification scoring reads this so that a lender described only by
    /// `geographic_coverage` never earns region points it did not declare.
    pub fn regions_text(&self) -> String {
        lowered(self.regions.as_deref())
    }

    /// Products column exactly as recorded, without the loan-product fallback.
    pub fn products_text(&self) -> String {
        lowered(self.products.as_deref())
    }

    pub fn note_text(&self) -> String {
        lowered(self.performance_note.as_deref())
    }

    /// Regions with `geographic_coverage` as the fallback when regions is
    /// absent or blank. Directory filters and the conversational matcher use
    /// this wider view.
    pub fn coverage_text(&self) -> String {
        coalesced(self.regions.as_deref(), self.geographic_coverage.as_deref())
    }

    /// Products with `loan_products` as the fallback when products is absent
    /// or blank.
    pub fn offerings_text(&self) -> String {
        coalesced(self.products.as_deref(), self.loan_products.as_deref())
    }
}

fn lowered(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

fn coalesced(primary: Option<&str>, fallback: Option<&str>) -> String {
    let primary = primary.unwrap_or_default();
    if primary.trim().is_empty() {
        lowered(fallback)
    } else {
        primary.to_lowercase()
    }
}
