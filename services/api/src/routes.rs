use crate::infra::{AppState, SharedDirectory};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use finfinder::assistant::{generate_draft, ApplicationDraft, DraftParams};
use finfinder::checklist::{checklist_router, ChecklistRepository, ChecklistService};
use finfinder::conversation::{conversation_router, ConversationRepository, ConversationService};
use finfinder::directory::{
    count_by_category, count_by_country, count_by_region, DirectoryQuery, FilterOption,
    LenderRecord, CATEGORY_FILTERS, COUNTRY_FILTERS, REGION_FILTERS,
};
use finfinder::matching::{match_router, MatchService, SubmissionRepository};
use finfinder::trade::{
    next_question, parse_answer, recommend_product, ProductRecommendation, TradeQuestion,
    TradeScenario,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct LendersResponse {
    pub(crate) total: usize,
    pub(crate) lenders: Vec<LenderRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FacetEntry {
    pub(crate) name: &'static str,
    pub(crate) label: &'static str,
    pub(crate) count: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct FacetsResponse {
    pub(crate) categories: Vec<FacetEntry>,
    pub(crate) regions: Vec<FacetEntry>,
    pub(crate) countries: Vec<FacetEntry>,
}

/// One turn of the product recommendation dialogue. The client holds the
/// scenario between turns; the service itself stores nothing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TradeTurnRequest {
    #[serde(default)]
    pub(crate) scenario: TradeScenario,
    #[serde(default)]
    pub(crate) question: Option<TradeQuestion>,
    #[serde(default)]
    pub(crate) answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TradeTurnResponse {
    pub(crate) scenario: TradeScenario,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) question: Option<TradeQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prompt: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) recommendation: Option<&'static ProductRecommendation>,
}

pub(crate) fn with_api_routes<S, C, K>(
    directory: Arc<Vec<LenderRecord>>,
    match_service: Arc<MatchService<S>>,
    conversation_service: Arc<ConversationService<C>>,
    checklist_service: Arc<ChecklistService<K>>,
) -> axum::Router
where
    S: SubmissionRepository + 'static,
    C: ConversationRepository + 'static,
    K: ChecklistRepository + 'static,
{
    match_router(match_service)
        .merge(conversation_router(conversation_service))
        .merge(checklist_router(checklist_service))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/lenders", axum::routing::get(lenders_endpoint))
        .route(
            "/api/v1/lenders/facets",
            axum::routing::get(facets_endpoint),
        )
        .route(
            "/api/v1/trade/turn",
            axum::routing::post(trade_turn_endpoint),
        )
        .route("/api/v1/drafts", axum::routing::post(draft_endpoint))
        .layer(Extension(SharedDirectory(directory)))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn lenders_endpoint(
    Extension(SharedDirectory(directory)): Extension<SharedDirectory>,
    Query(query): Query<DirectoryQuery>,
) -> Json<LendersResponse> {
    let lenders: Vec<LenderRecord> = query.apply(&directory).into_iter().cloned().collect();
    Json(LendersResponse {
        total: lenders.len(),
        lenders,
    })
}

pub(crate) async fn facets_endpoint(
    Extension(SharedDirectory(directory)): Extension<SharedDirectory>,
) -> Json<FacetsResponse> {
    Json(FacetsResponse {
        categories: facet_entries(CATEGORY_FILTERS, &directory, count_by_category),
        regions: facet_entries(REGION_FILTERS, &directory, count_by_region),
        countries: facet_entries(COUNTRY_FILTERS, &directory, count_by_country),
    })
}

fn facet_entries(
    options: &'static [FilterOption],
    directory: &[LenderRecord],
    count: fn(&[LenderRecord], &str) -> usize,
) -> Vec<FacetEntry> {
    options
        .iter()
        .map(|option| FacetEntry {
            name: option.name,
            label: option.label,
            count: count(directory, option.name),
        })
        .collect()
}

/// Advance the recommendation dialogue by one turn.
///
/// An answer that does not parse leaves the scenario untouched, so the same
/// question comes straight back. Once no question remains the recommendation
/// is attached.
pub(crate) async fn trade_turn_endpoint(
    Json(turn): Json<TradeTurnRequest>,
) -> Json<TradeTurnResponse> {
    let TradeTurnRequest {
        mut scenario,
        question,
        answer,
    } = turn;

    if let (Some(question), Some(answer)) = (question, answer.as_deref()) {
        if let Some(update) = parse_answer(question, answer) {
            scenario.apply(update);
        }
    }

    let question = next_question(&scenario);
    let recommendation = if question.is_none() {
        recommend_product(&scenario)
    } else {
        None
    };

    Json(TradeTurnResponse {
        question,
        prompt: question.map(TradeQuestion::prompt),
        recommendation,
        scenario,
    })
}

pub(crate) async fn draft_endpoint(Json(params): Json<DraftParams>) -> Json<ApplicationDraft> {
    Json(generate_draft(&params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed_directory;
    use finfinder::trade::ProductCode;

    #[tokio::test]
    async fn trade_turn_endpoint_asks_the_first_question() {
        let Json(body) = trade_turn_endpoint(Json(TradeTurnRequest::default())).await;

        assert_eq!(body.question, Some(TradeQuestion::Classify));
        let prompt = body.prompt.expect("prompt present");
        assert!(prompt.contains("What type of trade financing do you need?"));
        assert!(body.recommendation.is_none());
    }

    #[tokio::test]
    async fn trade_turn_endpoint_reasks_when_the_answer_is_not_understood() {
        let turn = TradeTurnRequest {
            scenario: TradeScenario::default(),
            question: Some(TradeQuestion::Classify),
            answer: Some("whatever you think is best".to_string()),
        };

        let Json(body) = trade_turn_endpoint(Json(turn)).await;

        assert_eq!(body.question, Some(TradeQuestion::Classify));
        assert!(body.scenario.trade_type.is_none());
    }

    #[tokio::test]
    async fn trade_turn_endpoint_recommends_once_the_scenario_is_complete() {
        let scenario = TradeScenario {
            trade_type: Some(finfinder::trade::TradeType::Importing),
            product: Some("Solar panel components".to_string()),
            transaction_value: Some("USD 180,000".to_string()),
            country: Some("China".to_string()),
            incoterms: Some("CIF".to_string()),
            ..TradeScenario::default()
        };
        let turn = TradeTurnRequest {
            scenario,
            question: Some(TradeQuestion::PaymentTerms),
            answer: Some("30 days after shipment".to_string()),
        };

        let Json(body) = trade_turn_endpoint(Json(turn)).await;

        assert!(body.question.is_none());
        let recommendation = body.recommendation.expect("recommendation attached");
        assert_eq!(recommendation.product_code, ProductCode::Lc);
        assert_eq!(
            body.scenario.payment_terms.as_deref(),
            Some("30 days after shipment")
        );
    }

    #[tokio::test]
    async fn lenders_endpoint_filters_by_category() {
        let directory = SharedDirectory(Arc::new(seed_directory()));
        let query = DirectoryQuery {
            category: Some("dfi".to_string()),
            ..DirectoryQuery::default()
        };

        let Json(body) = lenders_endpoint(Extension(directory), Query(query)).await;

        assert_eq!(body.total, 2);
        assert!(body
            .lenders
            .iter()
            .any(|lender| lender.name == "Sahel Development Finance Corporation"));
    }

    #[tokio::test]
    async fn facets_endpoint_counts_live_records() {
        let directory = SharedDirectory(Arc::new(seed_directory()));

        let Json(body) = facets_endpoint(Extension(directory)).await;

        assert_eq!(body.categories.len(), CATEGORY_FILTERS.len());
        let everything = body.categories.first().expect("all entry");
        assert_eq!(everything.name, "all");
        assert_eq!(everything.count, 12);

        let dfi = body
            .categories
            .iter()
            .find(|entry| entry.name == "dfi")
            .expect("dfi entry");
        assert_eq!(dfi.count, 2);

        let africa = body
            .regions
            .iter()
            .find(|entry| entry.name == "africa")
            .expect("africa entry");
        assert_eq!(africa.count, 4);

        let nigeria = body
            .countries
            .iter()
            .find(|entry| entry.name == "nigeria")
            .expect("nigeria entry");
        assert_eq!(nigeria.count, 1);
    }

    #[tokio::test]
    async fn draft_endpoint_prefills_the_application() {
        let params = DraftParams {
            company_name: "Harmattan Agro Exports".to_string(),
            country: "Nigeria".to_string(),
            business_type: "Limited Liability Company".to_string(),
            product_type: "Letter of Credit".to_string(),
            amount: "USD 120,000".to_string(),
            revenue: "USD 800,000".to_string(),
            financial_institution: "Zambesi Trade Finance House".to_string(),
        };

        let Json(body) = draft_endpoint(Json(params)).await;

        assert_eq!(
            body.email_subject,
            "Application — Letter of Credit (Harmattan Agro Exports — USD 120,000)"
        );
        assert_eq!(body.application.requested_amount, "120000");
        assert_eq!(body.application.currency, "USD");
        assert_eq!(body.checklist.len(), 6);
        assert!(body.checklist.iter().all(|item| !item.completed));
    }
}
