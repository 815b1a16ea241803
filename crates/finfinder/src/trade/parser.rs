use super::questions::TradeQuestion;
use super::scenario::{ScenarioUpdate, TradeType};

/// Parse a free-text reply to the given question into a scenario update.
///
/// `None` means the answer was not understood (or was blank for a question
/// that stores text); the caller re-asks the same question. The payment
/// security question is the one place a blank answer still parses, as "no".
pub fn parse_answer(question: TradeQuestion, response: &str) -> Option<ScenarioUpdate> {
    let trimmed = response.trim();
    let normalized = trimmed.to_lowercase();

    match question {
        TradeQuestion::Classify => classify(&normalized),
        TradeQuestion::PaymentSecurity => Some(ScenarioUpdate::NeedsPaymentSecurity(
            normalized.contains("yes") || normalized.contains('y'),
        )),
        _ if trimmed.is_empty() => None,
        TradeQuestion::TradedGoods | TradeQuestion::GuaranteeProject => {
            Some(ScenarioUpdate::Product(trimmed.to_string()))
        }
        TradeQuestion::TransactionValue
        | TradeQuestion::InvoiceValue
        | TradeQuestion::MonthlyVolume
        | TradeQuestion::GuaranteeValue => {
            Some(ScenarioUpdate::TransactionValue(trimmed.to_string()))
        }
        TradeQuestion::ImportCountry | TradeQuestion::ExportCountry => {
            Some(ScenarioUpdate::Country(trimmed.to_string()))
        }
        TradeQuestion::Incoterms => Some(ScenarioUpdate::Incoterms(trimmed.to_string())),
        TradeQuestion::PaymentTerms | TradeQuestion::InvoicePaymentTerms => {
            Some(ScenarioUpdate::PaymentTerms(trimmed.to_string()))
        }
    }
}

fn classify(normalized: &str) -> Option<ScenarioUpdate> {
    let trade_type = if normalized.contains("import") || normalized == "a" {
        TradeType::Importing
    } else if normalized.contains("export") || normalized == "b" {
        TradeType::Exporting
    } else if normalized.contains("invoice") || normalized.contains("factoring") || normalized == "c"
    {
        TradeType::InvoiceFinancing
    } else if normalized.contains("supplier")
        || normalized.contains("payment extension")
        || normalized == "d"
    {
        TradeType::SupplierPayment
    } else if normalized.contains("guarantee")
        || normalized.contains("performance")
        || normalized == "e"
    {
        TradeType::PerformanceGuarantee
    } else {
        return None;
    };

    Some(ScenarioUpdate::TradeType(trade_type))
}
