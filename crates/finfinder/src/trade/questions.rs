use serde::{Deserialize, Serialize};

use super::scenario::{TradeScenario, TradeType};

/// Identity of every question the recommender can ask.
///
/// Answers are parsed against the question id, never against the prompt
/// wording, so prompts can be reworded without breaking the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeQuestion {
    Classify,
    TradedGoods,
    TransactionValue,
    ImportCountry,
    ExportCountry,
    Incoterms,
    PaymentTerms,
    PaymentSecurity,
    InvoiceValue,
    InvoicePaymentTerms,
    MonthlyVolume,
    GuaranteeValue,
    GuaranteeProject,
}

impl TradeQuestion {
    pub const fn prompt(self) -> &'static str {
        match self {
            TradeQuestion::Classify => {
                "What type of trade financing do you need? Are you:\n\na) Importing goods\nb) Exporting goods\nc) Financing outstanding invoices\nd) Need supplier payment extension\ne) Need a performance guarantee\nf) Need proof of funds"
            }
            TradeQuestion::TradedGoods => "What product or goods are you trading?",
            TradeQuestion::TransactionValue => {
                "What is the approximate transaction value? (in USD)"
            }
            TradeQuestion::ImportCountry => "Which country are you importing from?",
            TradeQuestion::ExportCountry => "Which country are you exporting to?",
            TradeQuestion::Incoterms => {
                "What are the INCOTERMS for this shipment? (e.g., FOB, CIF, EXW, DDP)\n\nIf you're not sure, tell me who is responsible for shipping and insurance."
            }
            TradeQuestion::PaymentTerms => {
                "What payment terms were agreed? (e.g., 30 days after shipment, advance payment, LC at sight)"
            }
            TradeQuestion::PaymentSecurity => {
                "Do you need payment security from the buyer? (yes/no)"
            }
            TradeQuestion::InvoiceValue => {
                "What is the total value of invoices you want to finance? (in USD)"
            }
            TradeQuestion::InvoicePaymentTerms => {
                "What are the typical payment terms on these invoices? (e.g., 30 days, 60 days, 90 days)"
            }
            TradeQuestion::MonthlyVolume => {
                "What is your typical monthly purchasing volume? (in USD)"
            }
            TradeQuestion::GuaranteeValue => {
                "What is the value of the guarantee required? (in USD)"
            }
            TradeQuestion::GuaranteeProject => {
                "What type of project or contract is this guarantee for?"
            }
        }
    }
}

/// The next unanswered question for the scenario, or `None` once enough is
/// known to recommend a product.
///
/// `None` strictly means "ready": the classification question for a blank
/// scenario is a `Some`. `proof_of_funds` has no follow-up questions.
pub fn next_question(scenario: &TradeScenario) -> Option<TradeQuestion> {
    let trade_type = match scenario.trade_type {
        None => return Some(TradeQuestion::Classify),
        Some(trade_type) => trade_type,
    };

    match trade_type {
        TradeType::Importing | TradeType::Exporting => {
            if scenario.product.is_none() {
                return Some(TradeQuestion::TradedGoods);
            }
            if scenario.transaction_value.is_none() {
                return Some(TradeQuestion::TransactionValue);
            }
            if scenario.country.is_none() {
                return Some(match trade_type {
                    TradeType::Importing => TradeQuestion::ImportCountry,
                    _ => TradeQuestion::ExportCountry,
                });
            }
            if scenario.incoterms.is_none() {
                return Some(TradeQuestion::Incoterms);
            }
            if scenario.payment_terms.is_none() {
                return Some(TradeQuestion::PaymentTerms);
            }
            if trade_type == TradeType::Exporting && scenario.needs_payment_security.is_none() {
                return Some(TradeQuestion::PaymentSecurity);
            }
            None
        }
        TradeType::InvoiceFinancing => {
            if scenario.transaction_value.is_none() {
                return Some(TradeQuestion::InvoiceValue);
            }
            if scenario.payment_terms.is_none() {
                return Some(TradeQuestion::InvoicePaymentTerms);
            }
            None
        }
        TradeType::SupplierPayment => {
            if scenario.transaction_value.is_none() {
                return Some(TradeQuestion::MonthlyVolume);
            }
            None
        }
        TradeType::PerformanceGuarantee => {
            if scenario.transaction_value.is_none() {
                return Some(TradeQuestion::GuaranteeValue);
            }
            if scenario.product.is_none() {
                return Some(TradeQuestion::GuaranteeProject);
            }
            None
        }
        TradeType::ProofOfFunds => None,
    }
}
