use crate::infra::{
    seed_directory, InMemoryChecklistRepository, InMemoryConversationRepository,
    InMemorySubmissionRepository,
};
use clap::Args;
use finfinder::assistant::{generate_draft, DraftParams};
use finfinder::checklist::{ChecklistService, NewChecklist, ReviewDecision};
use finfinder::conversation::{ConversationService, ConversationStep};
use finfinder::directory::{
    count_by_category, DirectoryImporter, DirectoryQuery, LenderRecord, CATEGORY_FILTERS,
};
use finfinder::error::AppError;
use finfinder::matching::{MatchService, QualificationForm};
use finfinder::trade::{
    next_question, parse_answer, recommend_product, TradeQuestion, TradeScenario,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional lender directory CSV export to run the demo against.
    #[arg(long)]
    pub(crate) directory_csv: Option<PathBuf>,
    /// Skip the assistant journey portion of the demo.
    #[arg(long)]
    pub(crate) skip_assistant: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LendersListArgs {
    /// Optional lender directory CSV export (defaults to the built-in directory).
    #[arg(long)]
    pub(crate) directory_csv: Option<PathBuf>,
    /// Category filter name (e.g. dfi, commercial-bank)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Region filter name (e.g. africa, global)
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Country filter name (e.g. nigeria, brazil)
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Free-text search across names, products, and coverage
    #[arg(long)]
    pub(crate) search: Option<String>,
}

pub(crate) fn run_lenders_list(args: LendersListArgs) -> Result<(), AppError> {
    let LendersListArgs {
        directory_csv,
        category,
        region,
        country,
        search,
    } = args;

    let (directory, imported) = load_directory_from_path(directory_csv)?;
    let query = DirectoryQuery {
        category,
        region,
        country,
        search,
    };
    let lenders = query.apply(&directory);

    let source = if imported {
        "CSV export"
    } else {
        "built-in directory"
    };
    println!(
        "Lender directory ({source}): {} of {} lenders",
        lenders.len(),
        directory.len()
    );
    for lender in lenders {
        render_lender_line(lender);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        directory_csv,
        skip_assistant,
    } = args;

    println!("FinFinder demo");
    let (directory, imported) = load_directory_from_path(directory_csv)?;
    let directory = Arc::new(directory);

    if imported {
        println!("Data source: lender directory CSV import");
    } else {
        println!("Data source: built-in directory (no CSV provided)");
    }

    println!("\nLender directory snapshot");
    println!("- {} lenders on file", directory.len());
    for option in CATEGORY_FILTERS.iter().skip(1) {
        let count = count_by_category(&directory, option.name);
        if count > 0 {
            println!("  - {}: {}", option.label, count);
        }
    }

    println!("\nQualification matching");
    let match_service = Arc::new(MatchService::new(
        directory.clone(),
        Arc::new(InMemorySubmissionRepository::default()),
    ));
    let form = demo_qualification_form();
    println!(
        "- Applicant: {} ({}, {})",
        form.business_name, form.country_of_operation, form.industry_sector
    );
    let response = match match_service.submit(form) {
        Ok(response) => response,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Submission {} matched {} lenders",
        response.submission_id.0,
        response.matches.len()
    );
    for result in response.matches.iter().take(3) {
        println!("  - {} (score {})", result.lender.name, result.match_score);
        for reason in &result.match_reasons {
            println!("    - {}", reason);
        }
    }
    let top_match = match response.matches.first() {
        Some(result) => result.clone(),
        None => {
            println!("- No lender qualified; stopping here");
            return Ok(());
        }
    };

    println!("\nTrade finance recommendation");
    let mut scenario = TradeScenario::default();
    while let Some(question) = next_question(&scenario) {
        let answer = scripted_trade_answer(question);
        println!("- Q: {}", first_line(question.prompt()));
        println!("  A: {}", answer);
        match parse_answer(question, answer) {
            Some(update) => scenario.apply(update),
            None => {
                println!("  Answer not understood, stopping the dialogue");
                break;
            }
        }
    }
    match recommend_product(&scenario) {
        Some(recommendation) => {
            println!(
                "- Recommended product: {} ({})",
                recommendation.product_name,
                recommendation.product_code.label()
            );
            println!("  Timeline: {}", recommendation.timeline);
            println!("  Estimated fees: {}", recommendation.estimated_fees);
            println!(
                "  Required documents: {}",
                recommendation
                    .documents
                    .iter()
                    .filter(|document| document.required)
                    .count()
            );
        }
        None => println!("- No recommendation available for this scenario"),
    }

    if skip_assistant {
        return Ok(());
    }

    println!("\nGuided assistant conversation");
    let conversation_service = Arc::new(ConversationService::new(
        directory.clone(),
        Arc::new(InMemoryConversationRepository::default()),
    ));
    let mut reply = match conversation_service.start() {
        Ok(reply) => reply,
        Err(err) => {
            println!("  Conversation unavailable: {}", err);
            return Ok(());
        }
    };
    println!("- Assistant: {}", first_line(&reply.message));
    for answer in DEMO_CONVERSATION_ANSWERS {
        reply = match conversation_service.reply(&reply.conversation_id, answer) {
            Ok(reply) => reply,
            Err(err) => {
                println!("  Conversation failed: {}", err);
                return Ok(());
            }
        };
    }
    match reply.step {
        ConversationStep::Results => println!(
            "- Reached results after {} answers",
            DEMO_CONVERSATION_ANSWERS.len()
        ),
        step => println!("- Conversation stopped at step {:?}", step),
    }
    if let Some(matched) = &reply.matched_lender {
        println!(
            "- Conversational match: {} (score {}%)",
            matched.lender.name, matched.match_score
        );
        for reason in &matched.match_reasons {
            println!("  - {}", reason);
        }
    } else {
        println!("- No lender cleared the conversational match bar");
    }
    match conversation_service.get(&reply.conversation_id) {
        Ok(record) => println!("- Stored transcript: {} messages", record.transcript.len()),
        Err(err) => println!("  Conversation lookup failed: {}", err),
    }

    println!("\nDocument checklist");
    let checklist_service = Arc::new(ChecklistService::new(Arc::new(
        InMemoryChecklistRepository::default(),
    )));
    let new_checklist = NewChecklist {
        qualification_form_id: response.submission_id.0.clone(),
        lender_id: top_match.lender.id.clone(),
        lender_name: top_match.lender.name.clone(),
        product_type: "Letter of Credit".to_string(),
        amount: 120_000.0,
        currency: "USD".to_string(),
        trade_counterparty: Some("Jiangsu Solar Components Ltd".to_string()),
        company_name: "Harmattan Agro Exports".to_string(),
        country: "Nigeria".to_string(),
        industry: "Agriculture & Agro-processing".to_string(),
    };
    let checklist = match checklist_service.create(new_checklist) {
        Ok(checklist) => checklist,
        Err(err) => {
            println!("  Checklist creation failed: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Checklist {} for {} ({} documents, generated {})",
        checklist.checklist_id.0,
        checklist.lender_name,
        checklist.documents.len(),
        checklist.generated_at.format("%Y-%m-%d")
    );
    for document in checklist.documents.iter().take(3) {
        println!(
            "  - {} ({:?}, {})",
            document.document_name,
            document.category,
            if document.is_required {
                "required"
            } else {
                "optional"
            }
        );
    }

    let first_document = match checklist.documents.first() {
        Some(document) => document.clone(),
        None => {
            println!("  Checklist came back empty");
            return Ok(());
        }
    };
    let checklist = match checklist_service.record_upload(
        &checklist.checklist_id,
        first_document.order_index,
        "uploads/board-resolution.pdf".to_string(),
    ) {
        Ok(checklist) => checklist,
        Err(err) => {
            println!("  Upload failed: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Uploaded '{}', progress now {}%",
        first_document.document_name,
        checklist.progress()
    );
    let checklist = match checklist_service.review(
        &checklist.checklist_id,
        first_document.order_index,
        ReviewDecision::Verified,
    ) {
        Ok(checklist) => checklist,
        Err(err) => {
            println!("  Review failed: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Verified '{}', progress {}%",
        first_document.document_name,
        checklist.progress()
    );

    println!("\nApplication draft");
    let draft = generate_draft(&DraftParams {
        company_name: "Harmattan Agro Exports".to_string(),
        country: "Nigeria".to_string(),
        business_type: "Corporation".to_string(),
        product_type: "Letter of Credit".to_string(),
        amount: "USD 120,000".to_string(),
        revenue: "USD 800,000".to_string(),
        financial_institution: top_match.lender.name.clone(),
    });
    println!("- Email subject: {}", draft.email_subject);
    println!("- Preparation checklist: {} items", draft.checklist.len());
    match serde_json::to_string_pretty(&draft.application) {
        Ok(json) => println!("- Pre-filled application:\n{}", json),
        Err(err) => println!("- Pre-filled application unavailable: {}", err),
    }

    Ok(())
}

const DEMO_CONVERSATION_ANSWERS: [&str; 10] = [
    "Harmattan Agro Exports",
    "Limited Liability Company",
    "Nigeria",
    "6",
    "USD 800,000",
    "Trade Finance",
    "USD 120,000",
    "Export of processed cashew nuts",
    "Yes",
    "Yes",
];

fn demo_qualification_form() -> QualificationForm {
    QualificationForm {
        business_name: "Harmattan Agro Exports".to_string(),
        business_type: "Corporation".to_string(),
        industry_sector: "Agriculture & Agro-processing".to_string(),
        years_in_operation: "6".to_string(),
        country_of_operation: "Nigeria".to_string(),
        funding_type: vec![
            "Trade Finance (Import/Export)".to_string(),
            "Working Capital".to_string(),
        ],
        funding_amount: "$50,000 - $250,000".to_string(),
        funding_purpose: vec!["Purchase of goods/materials".to_string()],
        annual_revenue: "$500K - $2M".to_string(),
        has_existing_loans: false,
        financials_up_to_date: true,
        involved_in_trade: true,
        trading_partner_country: "Netherlands".to_string(),
        preferred_financing_instrument: vec!["Letter of Credit (LC)".to_string()],
        contact_name: "Amina Bello".to_string(),
        contact_position: "Finance Director".to_string(),
        contact_email: "amina@harmattan.example".to_string(),
        contact_phone: "+234 801 555 0101".to_string(),
        preferred_contact_method: "Email".to_string(),
        consent_matching: true,
        consent_contact: true,
    }
}

fn scripted_trade_answer(question: TradeQuestion) -> &'static str {
    match question {
        TradeQuestion::Classify => "a) Importing goods",
        TradeQuestion::TradedGoods => "Solar panel components",
        TradeQuestion::TransactionValue => "USD 180,000",
        TradeQuestion::ImportCountry => "China",
        TradeQuestion::ExportCountry => "Germany",
        TradeQuestion::Incoterms => "CIF",
        TradeQuestion::PaymentTerms => "30 days after shipment",
        TradeQuestion::PaymentSecurity => "yes",
        TradeQuestion::InvoiceValue => "USD 95,000",
        TradeQuestion::InvoicePaymentTerms => "60 days",
        TradeQuestion::MonthlyVolume => "USD 40,000",
        TradeQuestion::GuaranteeValue => "USD 250,000",
        TradeQuestion::GuaranteeProject => "Road construction performance bond",
    }
}

pub(crate) fn load_directory_from_path(
    directory_csv: Option<PathBuf>,
) -> Result<(Vec<LenderRecord>, bool), AppError> {
    match directory_csv {
        Some(path) => DirectoryImporter::from_path(path)
            .map(|lenders| (lenders, true))
            .map_err(AppError::from),
        None => Ok((seed_directory(), false)),
    }
}

fn render_lender_line(lender: &LenderRecord) {
    let lender_type = lender.lender_type.as_deref().unwrap_or("Unclassified");
    let coverage = lender
        .regions
        .as_deref()
        .or(lender.geographic_coverage.as_deref())
        .unwrap_or("-");
    let ticket = lender
        .typical_ticket
        .as_deref()
        .or(lender.typical_loan_size.as_deref())
        .unwrap_or("-");
    println!(
        "- {} | {} | {} | {}",
        lender.name, lender_type, coverage, ticket
    );
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text)
}
