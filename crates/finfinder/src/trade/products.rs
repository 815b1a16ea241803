use serde::{Deserialize, Serialize};

use super::scenario::{TradeScenario, TradeType};

/// Short code identifying each recommendable product; serializes as the
/// label the rest of the platform keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCode {
    #[serde(rename = "LC")]
    Lc,
    #[serde(rename = "SBLC")]
    Sblc,
    #[serde(rename = "Export Finance")]
    ExportFinance,
    #[serde(rename = "Invoice Finance")]
    InvoiceFinance,
    #[serde(rename = "Supply Chain Finance")]
    SupplyChainFinance,
    #[serde(rename = "BG")]
    Bg,
}

impl ProductCode {
    pub const fn label(self) -> &'static str {
        match self {
            ProductCode::Lc => "LC",
            ProductCode::Sblc => "SBLC",
            ProductCode::ExportFinance => "Export Finance",
            ProductCode::InvoiceFinance => "Invoice Finance",
            ProductCode::SupplyChainFinance => "Supply Chain Finance",
            ProductCode::Bg => "BG",
        }
    }
}

/// Broad grouping for a required document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementCategory {
    #[serde(rename = "KYC")]
    Kyc,
    Financial,
    Trade,
    Company,
    Operational,
}

/// One document a bank will ask for when arranging the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub category: RequirementCategory,
}

/// Full briefing for one trade-finance product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductRecommendation {
    pub product_name: &'static str,
    pub product_code: ProductCode,
    pub reason: &'static str,
    pub description: &'static str,
    pub documents: &'static [DocumentRequirement],
    pub timeline: &'static str,
    pub estimated_fees: &'static str,
    pub risks: &'static [&'static str],
    pub best_practices: &'static [&'static str],
}

/// Pick a product for the scenario. Checked top to bottom, first match wins;
/// the standalone need flags qualify a scenario even when its trade type was
/// never classified. `None` means the conversation needs more information.
pub fn recommend_product(scenario: &TradeScenario) -> Option<&'static ProductRecommendation> {
    if scenario.trade_type == Some(TradeType::Importing) {
        return Some(&LETTER_OF_CREDIT);
    }

    if scenario.trade_type == Some(TradeType::Exporting)
        && scenario.needs_payment_security == Some(true)
    {
        return Some(&STANDBY_LETTER_OF_CREDIT);
    }

    if scenario.trade_type == Some(TradeType::Exporting) {
        return Some(&EXPORT_FINANCE);
    }

    if scenario.trade_type == Some(TradeType::InvoiceFinancing)
        || scenario.has_outstanding_invoices == Some(true)
    {
        return Some(&INVOICE_FINANCE);
    }

    if scenario.trade_type == Some(TradeType::SupplierPayment)
        || scenario.needs_supplier_extension == Some(true)
    {
        return Some(&SUPPLY_CHAIN_FINANCE);
    }

    if scenario.trade_type == Some(TradeType::PerformanceGuarantee)
        || scenario.needs_performance_guarantee == Some(true)
    {
        return Some(&BANK_GUARANTEE);
    }

    None
}

static LETTER_OF_CREDIT: ProductRecommendation = ProductRecommendation {
    product_name: "Letter of Credit (LC)",
    product_code: ProductCode::Lc,
    reason: "You are importing goods and need secure payment terms that protect both you and your supplier.",
    description: "A Letter of Credit is a payment guarantee issued by your bank to the seller's bank. It ensures the seller gets paid when they ship the goods and provide correct documents. This protects you from paying before receiving goods, and protects the seller from shipping without payment guarantee.",
    documents: &[
        DocumentRequirement {
            name: "Proforma Invoice",
            description: "Preliminary invoice showing transaction details",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Commercial Invoice",
            description: "Final invoice for goods/services",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Bill of Lading / Shipping Documents",
            description: "Proof of shipment or booking confirmation",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Purchase Contract",
            description: "Signed agreement with buyer/seller",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Company Registration Documents",
            description: "Certificate of incorporation",
            required: true,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Directors' Identification",
            description: "Valid government-issued ID",
            required: true,
            category: RequirementCategory::Kyc,
        },
        DocumentRequirement {
            name: "Bank Statements (6-12 months)",
            description: "Official bank statements showing cash flow",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "LC Application Form",
            description: "Completed application from issuing bank",
            required: true,
            category: RequirementCategory::Operational,
        },
    ],
    timeline: "3-7 working days for LC issuance (after documents submitted)",
    estimated_fees: "0.75% - 2% of transaction value + bank charges",
    risks: &[
        "Discrepancies in documents can delay payment",
        "Requires upfront collateral or cash margin (usually 100-110%)",
        "Amendment fees apply if terms need to change",
    ],
    best_practices: &[
        "Ensure INCOTERMS are clearly stated (FOB, CIF, etc.)",
        "Review LC draft before issuance to catch errors",
        "Allow extra time for document preparation",
        "Use experienced freight forwarder for shipping docs",
    ],
};

static STANDBY_LETTER_OF_CREDIT: ProductRecommendation = ProductRecommendation {
    product_name: "Standby Letter of Credit (SBLC) or LC Confirmation",
    product_code: ProductCode::Sblc,
    reason: "You are exporting goods and need payment security from the buyer. An SBLC acts as a payment guarantee if the buyer defaults.",
    description: "An SBLC is a guarantee issued by the buyer's bank. If the buyer doesn't pay, you can claim against the SBLC. Unlike a regular LC, it's only used if payment fails. For export finance, you can also request LC confirmation where your local bank guarantees payment.",
    documents: &[
        DocumentRequirement {
            name: "Company Registration Documents",
            description: "Certificate of incorporation and business license",
            required: true,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Trade Contract / Project Contract",
            description: "Underlying agreement requiring SBLC",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Corporate Profile",
            description: "Company overview and track record",
            required: true,
            category: RequirementCategory::Operational,
        },
        DocumentRequirement {
            name: "Bank Statements (12 months)",
            description: "Proof of financial capacity",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Directors' KYC Documents",
            description: "Passport/ID and proof of address",
            required: true,
            category: RequirementCategory::Kyc,
        },
        DocumentRequirement {
            name: "Proof of Ability to Pay Fees",
            description: "Bank balance or financial statements",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Term Sheet",
            description: "SBLC terms and conditions",
            required: true,
            category: RequirementCategory::Operational,
        },
    ],
    timeline: "5-10 working days depending on buyer's bank",
    estimated_fees: "1-3% per annum + issuance fees",
    risks: &[
        "Buyer must have strong banking relationship",
        "May require counter-guarantee or collateral",
        "Claiming against SBLC requires proof of default",
    ],
    best_practices: &[
        "Negotiate SBLC terms before shipping",
        "Ensure SBLC is irrevocable and confirmed",
        "Keep all transaction records for claims",
        "Use international trade lawyers for complex deals",
    ],
};

static EXPORT_FINANCE: ProductRecommendation = ProductRecommendation {
    product_name: "Export Finance (Pre/Post-Shipment)",
    product_code: ProductCode::ExportFinance,
    reason: "You need working capital to fulfill export orders or bridge the gap between shipping and receiving payment.",
    description: "Export finance provides funding at different stages: Pre-shipment finance helps you purchase materials and manufacture goods. Post-shipment finance bridges the gap from shipping to payment receipt (typically 30-90 days).",
    documents: &[
        DocumentRequirement {
            name: "Purchase Order",
            description: "Confirmed order from foreign buyer",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Export Contract",
            description: "Agreement with buyer including INCOTERMS",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Shipping Documents",
            description: "Bill of lading or booking confirmation",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Company Registration",
            description: "Business incorporation certificate",
            required: true,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Export License",
            description: "Authorization to export (if required)",
            required: false,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Financial Statements",
            description: "Last 1-2 years audited accounts",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Bank Statements (12 months)",
            description: "Showing export transaction history",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Track Record",
            description: "Previous export transactions proof",
            required: true,
            category: RequirementCategory::Operational,
        },
    ],
    timeline: "7-14 days for approval, 1-3 days for disbursement",
    estimated_fees: "Interest rates: 8-15% per annum depending on risk",
    risks: &[
        "Buyer default risk if post-shipment finance",
        "Currency fluctuation during payment period",
        "Requires proven export track record",
    ],
    best_practices: &[
        "Get export credit insurance where possible",
        "Use confirmed LCs to reduce lender risk",
        "Maintain strong relationship with export finance banks",
        "Keep detailed records of all export transactions",
    ],
};

static INVOICE_FINANCE: ProductRecommendation = ProductRecommendation {
    product_name: "Invoice Financing / Factoring",
    product_code: ProductCode::InvoiceFinance,
    reason: "You have outstanding invoices and need immediate cash flow instead of waiting 30-90 days for customer payment.",
    description: "Invoice financing advances you 70-90% of invoice value immediately. When your customer pays, you receive the remaining amount minus fees. Factoring transfers invoice ownership to the financier who collects directly from customers.",
    documents: &[
        DocumentRequirement {
            name: "List of Invoices",
            description: "Outstanding receivables to be financed",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Proof of Delivery",
            description: "Delivery notes or signed acceptance",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Debtor Information",
            description: "Customer contact details and credit history",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Aging Report",
            description: "Schedule of all receivables by age",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Bank Statements (6 months)",
            description: "Business account showing payment patterns",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Company Registration",
            description: "Business incorporation documents",
            required: true,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Purchase Orders",
            description: "Original POs matching invoices",
            required: false,
            category: RequirementCategory::Trade,
        },
    ],
    timeline: "2-5 days for approval, same-day funding after setup",
    estimated_fees: "1.5-5% per invoice + monthly service fees",
    risks: &[
        "Customer creditworthiness affects approval",
        "Factoring may impact customer relationships",
        "Recourse factoring means you must repay if customer defaults",
    ],
    best_practices: &[
        "Choose non-recourse factoring if customers are risky",
        "Verify customers are comfortable with assignment notices",
        "Keep invoice and delivery documentation perfect",
        "Monitor aging reports to avoid problematic accounts",
    ],
};

static SUPPLY_CHAIN_FINANCE: ProductRecommendation = ProductRecommendation {
    product_name: "Supply Chain Finance",
    product_code: ProductCode::SupplyChainFinance,
    reason: "You need extended payment terms from suppliers or want to unlock early payment discounts through financing.",
    description: "Supply chain finance allows suppliers to get paid early while you extend payment terms. A financier pays the supplier at a discount, and you pay the financier later at agreed terms (e.g., 90 days instead of 30).",
    documents: &[
        DocumentRequirement {
            name: "Supply Chain Agreement",
            description: "Contract with supplier or buyer",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Recent Purchase Orders",
            description: "Sample POs from supply chain",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Company Registration",
            description: "Legal incorporation documents",
            required: true,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Financial Statements (2 years)",
            description: "Business financial history",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Bank Statements",
            description: "Recent business account activity",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Inventory Reports",
            description: "Stock levels and turnover (if applicable)",
            required: false,
            category: RequirementCategory::Operational,
        },
    ],
    timeline: "10-20 days to set up program, immediate funding thereafter",
    estimated_fees: "2-4% per annum based on your credit rating",
    risks: &[
        "Requires supplier participation and onboarding",
        "Dependent on your creditworthiness",
        "May need minimum transaction volumes",
    ],
    best_practices: &[
        "Start with key suppliers first",
        "Negotiate better pricing with extended terms",
        "Ensure suppliers understand the process",
        "Monitor program usage and supplier satisfaction",
    ],
};

static BANK_GUARANTEE: ProductRecommendation = ProductRecommendation {
    product_name: "Bank Guarantee (Performance Guarantee)",
    product_code: ProductCode::Bg,
    reason: "You need to provide a guarantee to a client that you will complete a project or fulfill contractual obligations.",
    description: "A Bank Guarantee (BG) or Performance Guarantee assures your client that if you fail to perform, the bank will pay them a specified amount. Common in construction, government contracts, and large supply agreements.",
    documents: &[
        DocumentRequirement {
            name: "Company Registration",
            description: "Legal incorporation documents",
            required: true,
            category: RequirementCategory::Company,
        },
        DocumentRequirement {
            name: "Performance Contract",
            description: "Agreement requiring guarantee",
            required: true,
            category: RequirementCategory::Trade,
        },
        DocumentRequirement {
            name: "Financial Statements (2 years)",
            description: "Audited accounts or management accounts",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Bank Statements",
            description: "Recent business account statements",
            required: true,
            category: RequirementCategory::Financial,
        },
        DocumentRequirement {
            name: "Project Details",
            description: "Scope of work and timeline",
            required: true,
            category: RequirementCategory::Operational,
        },
        DocumentRequirement {
            name: "Directors' Identification",
            description: "Valid ID for all signatories",
            required: true,
            category: RequirementCategory::Kyc,
        },
    ],
    timeline: "5-10 working days for issuance",
    estimated_fees: "1-3% of guarantee amount per annum",
    risks: &[
        "Usually requires 100% cash collateral or counter-guarantee",
        "Client can call guarantee if you breach contract",
        "May tie up significant capital",
    ],
    best_practices: &[
        "Ensure BG terms match contract precisely",
        "Negotiate conditional release clauses",
        "Keep bank informed of project progress",
        "Request BG reduction as work progresses",
    ],
};
