use serde::{Deserialize, Serialize};

/// One state of the assistant conversation.
///
/// The sequence is strictly linear: every askable step has exactly one prompt
/// and exactly one successor. `Matching` is transient (the scorer runs and the
/// session moves straight on) and `Results` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStep {
    BusinessName,
    BusinessType,
    Country,
    YearsOperation,
    AnnualRevenue,
    FundingType,
    FundingAmount,
    FundingPurpose,
    HasFinancials,
    TradeInvolved,
    Matching,
    Results,
}

impl ConversationStep {
    /// Every step in walking order.
    pub const ORDERED: [ConversationStep; 12] = [
        ConversationStep::BusinessName,
        ConversationStep::BusinessType,
        ConversationStep::Country,
        ConversationStep::YearsOperation,
        ConversationStep::AnnualRevenue,
        ConversationStep::FundingType,
        ConversationStep::FundingAmount,
        ConversationStep::FundingPurpose,
        ConversationStep::HasFinancials,
        ConversationStep::TradeInvolved,
        ConversationStep::Matching,
        ConversationStep::Results,
    ];

    pub const fn first() -> ConversationStep {
        ConversationStep::BusinessName
    }

    pub const fn next(self) -> ConversationStep {
        match self {
            ConversationStep::BusinessName => ConversationStep::BusinessType,
            ConversationStep::BusinessType => ConversationStep::Country,
            ConversationStep::Country => ConversationStep::YearsOperation,
            ConversationStep::YearsOperation => ConversationStep::AnnualRevenue,
            ConversationStep::AnnualRevenue => ConversationStep::FundingType,
            ConversationStep::FundingType => ConversationStep::FundingAmount,
            ConversationStep::FundingAmount => ConversationStep::FundingPurpose,
            ConversationStep::FundingPurpose => ConversationStep::HasFinancials,
            ConversationStep::HasFinancials => ConversationStep::TradeInvolved,
            ConversationStep::TradeInvolved => ConversationStep::Matching,
            ConversationStep::Matching | ConversationStep::Results => ConversationStep::Results,
        }
    }

    /// The question this step asks, `None` for the two non-askable states.
    pub const fn prompt(self) -> Option<&'static str> {
        match self {
            ConversationStep::BusinessName => Some(
                "Hello! I'm your FinFinder Assistant. I'll help you find the perfect \
                 financing institution and guide you through the application process. \
                 Let's start with your business. What is your company name?",
            ),
            ConversationStep::BusinessType => Some(
                "What type of business do you operate? (e.g., Manufacturing, \
                 Agriculture, Services, Retail, Technology)",
            ),
            ConversationStep::Country => {
                Some("Which country is your business registered and operating in?")
            }
            ConversationStep::YearsOperation => {
                Some("How many years has your business been operating?")
            }
            ConversationStep::AnnualRevenue => Some(
                "What is your annual revenue? (Please provide amount and currency, \
                 e.g., USD 500,000)",
            ),
            ConversationStep::FundingType => Some(
                "What type of financing are you looking for? (e.g., Working Capital \
                 Loan, Term Loan, Trade Finance, Equipment Financing)",
            ),
            ConversationStep::FundingAmount => {
                Some("How much financing do you need? (Please include currency)")
            }
            ConversationStep::FundingPurpose => Some(
                "What will you use this financing for? (e.g., expand operations, \
                 purchase inventory, buy equipment)",
            ),
            ConversationStep::HasFinancials => Some(
                "Do you have up-to-date financial statements for the last 2 years? \
                 (Yes/No)",
            ),
            ConversationStep::TradeInvolved => Some(
                "Is your business involved in international trade (import/export)? \
                 (Yes/No)",
            ),
            ConversationStep::Matching | ConversationStep::Results => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_next_covers_every_step_and_ends_at_results() {
        let mut step = ConversationStep::first();
        let mut walked = vec![step];
        while step != ConversationStep::Results {
            step = step.next();
            walked.push(step);
        }
        assert_eq!(walked, ConversationStep::ORDERED);
    }

    #[test]
    fn results_is_a_fixed_point() {
        assert_eq!(ConversationStep::Results.next(), ConversationStep::Results);
        assert_eq!(ConversationStep::Matching.next(), ConversationStep::Results);
    }

    #[test]
    fn every_askable_step_has_a_prompt() {
        for step in ConversationStep::ORDERED {
            let askable =
                !matches!(step, ConversationStep::Matching | ConversationStep::Results);
            assert_eq!(step.prompt().is_some(), askable, "{step:?}");
        }
    }

    #[test]
    fn each_prompt_asks_its_own_question() {
        let first = ConversationStep::first().prompt().expect("prompt");
        assert!(first.starts_with("Hello! I'm your FinFinder Assistant."));
        assert!(first.ends_with("What is your company name?"));
        let country = ConversationStep::Country.prompt().expect("prompt");
        assert!(country.contains("country"));
        let trade = ConversationStep::TradeInvolved.prompt().expect("prompt");
        assert!(trade.contains("international trade"));
    }
}
