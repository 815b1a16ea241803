//! Single-best-match scoring for the guided assistant.
//!
//! The assistant collects short free-text answers instead of the structured
//! qualification form, so this scorer runs a smaller rule set than
//! [`score_lender`](super::rules) and keeps only the one highest-scoring
//! lender. The two scorers stay separate on purpose; folding them together
//! would quietly change conversational results.

use serde::{Deserialize, Serialize};

use crate::directory::LenderRecord;

use super::MatchResult;

/// Free-text answers gathered by the assistant, one slot per askable step.
/// A slot stays `None` until its step has been answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationAnswers {
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub country: Option<String>,
    pub years_operation: Option<String>,
    pub annual_revenue: Option<String>,
    pub funding_type: Option<String>,
    pub funding_amount: Option<String>,
    pub funding_purpose: Option<String>,
    pub has_financials: Option<String>,
    pub trade_involved: Option<String>,
}

/// Pick the single best lender for the collected answers.
///
/// Unanswered slots simply contribute no points. Ties keep the first lender
/// seen (strict `>` against the running best), and a lender only qualifies
/// with a positive score.
pub fn best_match(
    answers: &ConversationAnswers,
    directory: &[LenderRecord],
) -> Option<MatchResult> {
    let mut best: Option<MatchResult> = None;
    let mut highest = 0;

    for lender in directory {
        let mut score: u32 = 0;
        let mut reasons: Vec<String> = Vec::new();

        let coverage = lender.coverage_text();
        let offerings = lender.offerings_text();
        let lender_type = lender.type_text();

        if let Some(country) = answered(answers.country.as_deref()) {
            if coverage.contains(&country) {
                score += 30;
                reasons.push("Operates in your country".to_string());
            }
        }

        if let Some(funding_type) = answered(answers.funding_type.as_deref()) {
            if offerings.contains(&funding_type) {
                score += 25;
                reasons.push("Offers your required product".to_string());
            }
        }

        if lender_type.contains("sme") || lender_type.contains("small") {
            score += 15;
            reasons.push("Specializes in SME financing".to_string());
        }

        let trade_involved = answers
            .trade_involved
            .as_deref()
            .map(affirmative)
            .unwrap_or(false);
        if trade_involved && (offerings.contains("trade") || offerings.contains("export")) {
            score += 20;
            reasons.push("Supports international trade".to_string());
        }

        if score > highest {
            highest = score;
            best = Some(MatchResult {
                lender: lender.clone(),
                match_score: score,
                match_reasons: reasons,
            });
        }
    }

    best
}

/// One line of the quick preparation checklist in the assistant's closing
/// message. The per-product templates live in the checklist module; this
/// shorter list only needs the collected answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickDocument {
    pub name: &'static str,
    pub reason: &'static str,
}

/// Build the quick checklist: five base documents, a trade document when the
/// trade answer was affirmative, an equipment document when the stated
/// purpose mentions equipment, and the tax certificate always last.
pub fn quick_checklist(answers: &ConversationAnswers) -> Vec<QuickDocument> {
    let mut documents = vec![
        QuickDocument {
            name: "Company Registration Certificate",
            reason: "Proves legal existence",
        },
        QuickDocument {
            name: "Directors' ID Documents",
            reason: "KYC requirement",
        },
        QuickDocument {
            name: "Last 2 Years Financial Statements",
            reason: "Shows financial health",
        },
        QuickDocument {
            name: "3 Months Bank Statements",
            reason: "Demonstrates cashflow",
        },
        QuickDocument {
            name: "Business Plan",
            reason: "Explains use of funds",
        },
    ];

    let trade_involved = answers
        .trade_involved
        .as_deref()
        .map(affirmative)
        .unwrap_or(false);
    if trade_involved {
        documents.push(QuickDocument {
            name: "Export Contracts or Purchase Orders",
            reason: "Supports trade financing request",
        });
    }

    let purpose = answers
        .funding_purpose
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if purpose.contains("equipment") {
        documents.push(QuickDocument {
            name: "Equipment Quotations",
            reason: "Justifies equipment financing",
        });
    }

    documents.push(QuickDocument {
        name: "Tax Clearance Certificate",
        reason: "Proves tax compliance",
    });

    documents
}

/// An answer slot counts only once it holds non-blank text.
fn answered(slot: Option<&str>) -> Option<String> {
    slot.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

/// Loose yes test shared by the yes/no steps: any answer containing "yes" or
/// the letter y counts as affirmative.
fn affirmative(answer: &str) -> bool {
    let normalized = answer.to_lowercase();
    normalized.contains("yes") || normalized.contains('y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> ConversationAnswers {
        ConversationAnswers {
            business_name: Some("Lagos Agro Exports Ltd".to_string()),
            business_type: Some("Agriculture".to_string()),
            country: Some("Nigeria".to_string()),
            years_operation: Some("8".to_string()),
            annual_revenue: Some("USD 2,000,000".to_string()),
            funding_type: Some("Trade Finance".to_string()),
            funding_amount: Some("USD 250,000".to_string()),
            funding_purpose: Some("expand operations".to_string()),
            has_financials: Some("yes".to_string()),
            trade_involved: Some("yes".to_string()),
        }
    }

    fn lender(id: &str, name: &str) -> LenderRecord {
        LenderRecord::new(id, name)
    }

    #[test]
    fn best_match_prefers_the_highest_scorer() {
        let mut regional = lender("lender-001", "Sahel Growth Bank");
        regional.regions = Some("West Africa, Nigeria".to_string());
        regional.products = Some("Trade finance, working capital".to_string());

        let mut generic = lender("lender-002", "Plainfield Credit");
        generic.regions = Some("Nigeria".to_string());

        let result = best_match(&answers(), &[generic, regional]).expect("match");
        assert_eq!(result.lender.id, "lender-001");
        // country 30 + product 25 + trade 20
        assert_eq!(result.match_score, 75);
        assert_eq!(
            result.match_reasons,
            vec![
                "Operates in your country".to_string(),
                "Offers your required product".to_string(),
                "Supports international trade".to_string(),
            ]
        );
    }

    #[test]
    fn ties_keep_the_first_lender_seen() {
        let mut first = lender("lender-001", "First Covering");
        first.regions = Some("Nigeria".to_string());
        let mut second = lender("lender-002", "Second Covering");
        second.regions = Some("Nigeria, Ghana".to_string());

        let result = best_match(&answers(), &[first, second]).expect("match");
        assert_eq!(result.lender.id, "lender-001");
    }

    #[test]
    fn no_lender_with_points_means_no_match() {
        let silent = lender("lender-001", "Unrelated Fund");
        assert!(best_match(&answers(), &[silent]).is_none());
    }

    #[test]
    fn sme_specialists_score_even_with_empty_answers() {
        let mut boutique = lender("lender-001", "SME Growth Partners");
        boutique.lender_type = Some("SME lender".to_string());

        let result =
            best_match(&ConversationAnswers::default(), &[boutique]).expect("match");
        assert_eq!(result.match_score, 15);
        assert_eq!(
            result.match_reasons,
            vec!["Specializes in SME financing".to_string()]
        );
    }

    #[test]
    fn trade_rule_needs_an_affirmative_answer_and_trade_offerings() {
        let mut exporter_bank = lender("lender-001", "Export Partners");
        exporter_bank.products = Some("Export finance".to_string());

        let mut declined = answers();
        declined.country = None;
        declined.funding_type = None;
        declined.trade_involved = Some("no".to_string());
        assert!(best_match(&declined, &[exporter_bank.clone()]).is_none());

        declined.trade_involved = Some("Yes, mostly exports".to_string());
        let result = best_match(&declined, &[exporter_bank]).expect("match");
        assert_eq!(result.match_score, 20);
    }

    #[test]
    fn coverage_fallback_applies_when_regions_is_blank() {
        let mut fallback = lender("lender-001", "Wide Net Capital");
        fallback.regions = Some("  ".to_string());
        fallback.geographic_coverage = Some("Nigeria and Ghana".to_string());

        let result = best_match(&answers(), &[fallback]).expect("match");
        assert!(result
            .match_reasons
            .contains(&"Operates in your country".to_string()));
    }

    #[test]
    fn quick_checklist_grows_with_trade_and_equipment_answers() {
        let base = quick_checklist(&ConversationAnswers::default());
        assert_eq!(base.len(), 6);
        assert_eq!(base[0].name, "Company Registration Certificate");
        assert_eq!(base[5].name, "Tax Clearance Certificate");

        let mut replied = answers();
        replied.funding_purpose = Some("buy equipment for the mill".to_string());
        let full = quick_checklist(&replied);
        assert_eq!(full.len(), 8);
        assert_eq!(full[5].name, "Export Contracts or Purchase Orders");
        assert_eq!(full[6].name, "Equipment Quotations");
        assert_eq!(full[7].name, "Tax Clearance Certificate");
    }
}
