use serde::{Deserialize, Serialize};

/// Inputs for one application draft: the applicant profile plus the lender
/// and product they settled on. `amount` and `revenue` arrive as display
/// strings ("USD 250,000") and are normalized into the application fields.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftParams {
    pub company_name: String,
    pub country: String,
    pub business_type: String,
    pub product_type: String,
    pub amount: String,
    pub revenue: String,
    pub financial_institution: String,
}

/// One preparation item. Drafts always start with nothing completed; ticking
/// items off is the client's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DraftChecklistItem {
    pub title: &'static str,
    pub reason: &'static str,
    pub completed: bool,
}

/// Application fields normalized for form pre-fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationFields {
    pub company_name: String,
    pub registered_country: String,
    pub product: String,
    pub requested_amount: String,
    pub currency: String,
    pub annual_revenue: String,
    pub primary_use_of_funds: String,
    pub business_type: String,
}

/// A complete drafted application package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationDraft {
    pub financial_institution: String,
    pub checklist: Vec<DraftChecklistItem>,
    pub email_subject: String,
    pub email_body: String,
    pub application: ApplicationFields,
}

const PREPARATION_ITEMS: [(&str, &str); 6] = [
    (
        "Company Registration Certificate",
        "Proves legal existence and registration status",
    ),
    (
        "Directors' ID (Passport/National ID)",
        "KYC requirement for ownership verification",
    ),
    (
        "Last 2 Years Financial Statements",
        "Shows revenue, profitability, and repayment ability",
    ),
    (
        "3 Months Bank Statements",
        "Evidence of cashflow and transaction history",
    ),
    (
        "Export Contracts / Purchase Orders",
        "Supports the stated use of proceeds",
    ),
    (
        "Tax Clearance or VAT Registration",
        "Proof of tax compliance",
    ),
];

/// Assemble the full draft package: preparation checklist, introduction
/// e-mail, and normalized application fields. Pure over the inputs.
pub fn generate_draft(params: &DraftParams) -> ApplicationDraft {
    let checklist = PREPARATION_ITEMS
        .into_iter()
        .map(|(title, reason)| DraftChecklistItem {
            title,
            reason,
            completed: false,
        })
        .collect();

    let email_subject = format!(
        "Application — {product} ({company} — {amount})",
        product = params.product_type,
        company = params.company_name,
        amount = params.amount,
    );

    let business_lower = params.business_type.to_lowercase();
    let email_body = format!(
        "Hello [Relationship Manager Name],\n\nMy name is [Your Name], [Your Title] at \
         {company}. We are a {business_lower} based in {country} and seek a {amount} \
         {product_lower} to support our growing operations.\n\nKey facts:\n\
         • Annual revenue: {revenue}\n• Purpose: {product}\n• Amount requested: {amount}\n\n\
         We have prepared all required documentation including company registration, recent \
         financials, and supporting contracts. Could we schedule a 20-minute call this week \
         to discuss eligibility and next steps?\n\nThank you for your consideration.\n\n\
         Best regards,\n[Your Name]\n[Your Phone]\n[Your Email]",
        company = params.company_name,
        country = params.country,
        amount = params.amount,
        product = params.product_type,
        product_lower = params.product_type.to_lowercase(),
        revenue = params.revenue,
    );

    let application = ApplicationFields {
        company_name: params.company_name.clone(),
        registered_country: params.country.clone(),
        product: params.product_type.clone(),
        requested_amount: digits_only(&params.amount),
        currency: extract_currency(&params.amount)
            .unwrap_or("USD")
            .to_string(),
        annual_revenue: digits_only(&params.revenue),
        primary_use_of_funds: format!(
            "{product} for {business_lower} operations",
            product = params.product_type,
        ),
        business_type: params.business_type.clone(),
    };

    ApplicationDraft {
        financial_institution: params.financial_institution.clone(),
        checklist,
        email_subject,
        email_body,
        application,
    }
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// First run of three consecutive ASCII capitals, the usual shape of a
/// currency code inside an amount string.
fn extract_currency(amount: &str) -> Option<&str> {
    let mut run = 0;
    for (index, byte) in amount.bytes().enumerate() {
        if byte.is_ascii_uppercase() {
            run += 1;
            if run == 3 {
                return Some(&amount[index - 2..=index]);
            }
        } else {
            run = 0;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kenyan_importer() -> DraftParams {
        DraftParams {
            company_name: "Savannah Imports Ltd".to_string(),
            country: "Kenya".to_string(),
            business_type: "Limited Liability Company".to_string(),
            product_type: "Letter of Credit".to_string(),
            amount: "USD 250,000".to_string(),
            revenue: "USD 1,200,000".to_string(),
            financial_institution: "African Development Finance".to_string(),
        }
    }

    #[test]
    fn draft_renders_subject_body_and_checklist() {
        let draft = generate_draft(&kenyan_importer());

        assert_eq!(
            draft.email_subject,
            "Application — Letter of Credit (Savannah Imports Ltd — USD 250,000)"
        );
        assert!(draft
            .email_body
            .starts_with("Hello [Relationship Manager Name],"));
        assert!(draft.email_body.contains(
            "We are a limited liability company based in Kenya and seek a USD 250,000 \
             letter of credit to support our growing operations."
        ));
        assert!(draft
            .email_body
            .contains("• Annual revenue: USD 1,200,000\n• Purpose: Letter of Credit"));
        assert!(draft.email_body.ends_with("[Your Phone]\n[Your Email]"));

        assert_eq!(draft.checklist.len(), 6);
        assert_eq!(
            draft.checklist[0].title,
            "Company Registration Certificate"
        );
        assert_eq!(
            draft.checklist[5].title,
            "Tax Clearance or VAT Registration"
        );
        assert!(draft.checklist.iter().all(|item| !item.completed));
        assert_eq!(
            draft.financial_institution,
            "African Development Finance"
        );
    }

    #[test]
    fn application_fields_normalize_amount_and_revenue() {
        let draft = generate_draft(&kenyan_importer());

        assert_eq!(draft.application.requested_amount, "250000");
        assert_eq!(draft.application.currency, "USD");
        assert_eq!(draft.application.annual_revenue, "1200000");
        assert_eq!(
            draft.application.primary_use_of_funds,
            "Letter of Credit for limited liability company operations"
        );
        assert_eq!(draft.application.business_type, "Limited Liability Company");
    }

    #[test]
    fn currency_extraction_needs_three_consecutive_capitals() {
        let for_amount = |amount: &str| {
            let params = DraftParams {
                amount: amount.to_string(),
                ..kenyan_importer()
            };
            generate_draft(&params).application.currency
        };

        assert_eq!(for_amount("250,000 EUR"), "EUR");
        assert_eq!(for_amount("NGN20,000,000"), "NGN");
        assert_eq!(for_amount("$1.5m"), "USD");
        assert_eq!(for_amount("Usd 300k"), "USD");
    }
}
