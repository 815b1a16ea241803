use serde::{Deserialize, Serialize};

/// Answers collected by the funding qualification form.
///
/// Free-text and select answers stay as strings; scoring only ever inspects
/// them as lowercased substrings, so unexpected values degrade to zero points
/// instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationForm {
    pub business_name: String,
    pub business_type: String,
    pub industry_sector: String,
    pub years_in_operation: String,
    pub country_of_operation: String,
    pub funding_type: Vec<String>,
    pub funding_amount: String,
    #[serde(default)]
    pub funding_purpose: Vec<String>,
    pub annual_revenue: String,
    #[serde(default)]
    pub has_existing_loans: bool,
    #[serde(default)]
    pub financials_up_to_date: bool,
    #[serde(default)]
    pub involved_in_trade: bool,
    #[serde(default)]
    pub trading_partner_country: String,
    #[serde(default)]
    pub preferred_financing_instrument: Vec<String>,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub preferred_contact_method: String,
    #[serde(default)]
    pub consent_matching: bool,
    #[serde(default)]
    pub consent_contact: bool,
}

/// Selectable answers offered by the form, used to build facet responses and
/// to validate nothing scoring depends on drifts away from the wording the
/// rules look for.
pub const BUSINESS_TYPES: &[&str] = &[
    "Sole Proprietorship",
    "Partnership",
    "Corporation",
    "Cooperative",
];

pub const FUNDING_TYPES: &[&str] = &[
    "Trade Finance (Import/Export)",
    "Working Capital",
    "Equipment Financing",
    "Project Finance",
    "Invoice Financing",
    "Insurance",
];

pub const FUNDING_AMOUNTS: &[&str] = &[
    "< $50,000",
    "$50,000 - $250,000",
    "$250,000 - $1M",
    "$1M+",
];

pub const FUNDING_PURPOSES: &[&str] = &[
    "Purchase of goods/materials",
    "Business expansion",
    "Contract financing",
    "Cash flow support",
    "Risk protection",
];

pub const ANNUAL_REVENUES: &[&str] = &["< $100K", "$100K - $500K", "$500K - $2M", "$2M+"];

pub const FINANCING_INSTRUMENTS: &[&str] = &[
    "Letter of Credit (LC)",
    "Bank Guarantee",
    "Open Account",
    "Documentary Collection",
];

pub const CONTACT_METHODS: &[&str] = &["Email", "Phone", "WhatsApp"];
