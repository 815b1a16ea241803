use serde::{Deserialize, Serialize};

/// The six financing needs the classification question distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    Importing,
    Exporting,
    InvoiceFinancing,
    SupplierPayment,
    PerformanceGuarantee,
    ProofOfFunds,
}

/// Facts collected about one trade so far.
///
/// Unset fields are what drive the conversation: the next question is always
/// derived from which fields are still `None` for the active trade type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeScenario {
    pub trade_type: Option<TradeType>,
    pub product: Option<String>,
    pub transaction_value: Option<String>,
    pub country: Option<String>,
    pub incoterms: Option<String>,
    pub payment_terms: Option<String>,
    pub has_outstanding_invoices: Option<bool>,
    pub needs_payment_security: Option<bool>,
    pub needs_supplier_extension: Option<bool>,
    pub needs_performance_guarantee: Option<bool>,
}

/// One parsed answer, applied as a single-field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioUpdate {
    TradeType(TradeType),
    Product(String),
    TransactionValue(String),
    Country(String),
    Incoterms(String),
    PaymentTerms(String),
    NeedsPaymentSecurity(bool),
}

impl TradeScenario {
    pub fn apply(&mut self, update: ScenarioUpdate) {
        match update {
            ScenarioUpdate::TradeType(value) => self.trade_type = Some(value),
            ScenarioUpdate::Product(value) => self.product = Some(value),
            ScenarioUpdate::TransactionValue(value) => self.transaction_value = Some(value),
            ScenarioUpdate::Country(value) => self.country = Some(value),
            ScenarioUpdate::Incoterms(value) => self.incoterms = Some(value),
            ScenarioUpdate::PaymentTerms(value) => self.payment_terms = Some(value),
            ScenarioUpdate::NeedsPaymentSecurity(value) => {
                self.needs_payment_security = Some(value)
            }
        }
    }
}
