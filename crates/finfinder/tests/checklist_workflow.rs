mod common {
    use std::sync::{Arc, Mutex};

    use finfinder::checklist::{
        checklist_router, ChecklistId, ChecklistRepository, ChecklistRequest, ChecklistService,
        NewChecklist, RepositoryError,
    };

    pub(super) fn letter_of_credit_checklist() -> NewChecklist {
        NewChecklist {
            qualification_form_id: "sub-000001".to_string(),
            lender_id: "lender-harbor".to_string(),
            lender_name: "Harbor Trade Bank".to_string(),
            product_type: "Letter of Credit".to_string(),
            amount: 250_000.0,
            currency: "USD".to_string(),
            trade_counterparty: Some("Shenzhen Electronics Co".to_string()),
            company_name: "Savannah Imports Ltd".to_string(),
            country: "Kenya".to_string(),
            industry: "Wholesale trade".to_string(),
        }
    }

    pub(super) fn export_financing_checklist() -> NewChecklist {
        NewChecklist {
            product_type: "Export Financing".to_string(),
            trade_counterparty: None,
            ..letter_of_credit_checklist()
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryRepository {
        requests: Mutex<Vec<ChecklistRequest>>,
    }

    impl ChecklistRepository for MemoryRepository {
        fn insert(&self, request: ChecklistRequest) -> Result<ChecklistRequest, RepositoryError> {
            let mut guard = self.requests.lock().expect("lock");
            if guard
                .iter()
                .any(|existing| existing.checklist_id == request.checklist_id)
            {
                return Err(RepositoryError::Conflict);
            }
            guard.push(request.clone());
            Ok(request)
        }

        fn update(&self, request: ChecklistRequest) -> Result<(), RepositoryError> {
            let mut guard = self.requests.lock().expect("lock");
            let slot = guard
                .iter_mut()
                .find(|existing| existing.checklist_id == request.checklist_id)
                .ok_or(RepositoryError::NotFound)?;
            *slot = request;
            Ok(())
        }

        fn fetch(&self, id: &ChecklistId) -> Result<Option<ChecklistRequest>, RepositoryError> {
            let guard = self.requests.lock().expect("lock");
            Ok(guard
                .iter()
                .find(|request| &request.checklist_id == id)
                .cloned())
        }
    }

    pub(super) fn build_service() -> ChecklistService<MemoryRepository> {
        ChecklistService::new(Arc::new(MemoryRepository::default()))
    }

    pub(super) fn build_router() -> axum::Router {
        checklist_router(Arc::new(build_service()))
    }
}

mod lifecycle {
    use super::common::*;
    use finfinder::checklist::{
        ChecklistServiceError, DocumentCategory, DocumentStatus, ReviewDecision, TransitionError,
    };

    #[test]
    fn an_export_checklist_is_worked_from_pending_to_verified() {
        let service = build_service();
        let request = service
            .create(export_financing_checklist())
            .expect("create checklist");
        let id = request.checklist_id.clone();

        // Stored order is display order: category groups alphabetically,
        // template order within each group.
        let names: Vec<&str> = request
            .documents
            .iter()
            .map(|document| document.document_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Bank Statements (12 months)",
                "Certificate of Incorporation",
                "Export License",
                "Export Track Record",
                "Export Contract",
                "Proforma Invoice",
                "Shipping Documents",
            ],
        );
        assert_eq!(request.documents[0].category, DocumentCategory::Financial);
        assert_eq!(request.trade_counterparty, "Not specified");
        assert_eq!(request.progress(), 0);

        // Six of the seven documents are required; the optional shipping
        // documents never move the percentage.
        let request = service
            .record_upload(&id, 1, "https://files.example/coi.pdf".to_string())
            .expect("upload certificate");
        assert_eq!(request.progress(), 17);
        let request = service
            .record_upload(&id, 6, "https://files.example/bol.pdf".to_string())
            .expect("upload shipping documents");
        assert_eq!(request.progress(), 17);

        let request = service
            .review(&id, 1, ReviewDecision::Verified)
            .expect("verify certificate");
        assert_eq!(request.progress(), 17);
        let certificate = request
            .documents
            .iter()
            .find(|document| document.order_index == 1)
            .expect("certificate present");
        assert_eq!(certificate.status, DocumentStatus::Verified);

        let error = service
            .record_upload(&id, 1, "https://files.example/coi-v2.pdf".to_string())
            .expect_err("verified documents are frozen");
        assert!(matches!(
            error,
            ChecklistServiceError::Transition(TransitionError::AlreadyVerified)
        ));

        let request = service
            .review(&id, 6, ReviewDecision::Rejected)
            .expect("reject shipping documents");
        let shipping = request
            .documents
            .iter()
            .find(|document| document.order_index == 6)
            .expect("shipping documents present");
        assert_eq!(shipping.status, DocumentStatus::Rejected);

        // A rejected document can be replaced and goes back to uploaded.
        let request = service
            .record_upload(&id, 6, "https://files.example/bol-v2.pdf".to_string())
            .expect("replace shipping documents");
        let shipping = request
            .documents
            .iter()
            .find(|document| document.order_index == 6)
            .expect("shipping documents present");
        assert_eq!(shipping.status, DocumentStatus::Uploaded);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    async fn post_json(router: &axum::Router, uri: String, body: Value) -> axum::response::Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
            .expect("request");
        router
            .clone()
            .oneshot(request)
            .await
            .expect("router dispatch")
    }

    fn document<'a>(payload: &'a Value, order_index: u64) -> &'a Value {
        payload
            .get("documents")
            .and_then(Value::as_array)
            .expect("documents array")
            .iter()
            .find(|document| document.get("order_index").and_then(Value::as_u64) == Some(order_index))
            .expect("document present")
    }

    #[tokio::test]
    async fn a_checklist_can_be_worked_through_over_http() {
        let router = build_router();

        // The counterparty is left out of the payload entirely.
        let response = post_json(
            &router,
            "/api/v1/checklists".to_string(),
            json!({
                "qualification_form_id": "sub-000001",
                "lender_id": "lender-harbor",
                "lender_name": "Harbor Trade Bank",
                "product_type": "Letter of Credit",
                "amount": 250000.0,
                "currency": "USD",
                "company_name": "Savannah Imports Ltd",
                "country": "Kenya",
                "industry": "Wholesale trade",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let payload = read_json(response).await;
        let checklist_id = payload
            .get("checklist_id")
            .and_then(Value::as_str)
            .expect("checklist id")
            .to_string();
        assert_eq!(
            payload.get("trade_counterparty").and_then(Value::as_str),
            Some("Not specified")
        );
        assert_eq!(payload.get("progress").and_then(Value::as_u64), Some(0));

        let documents = payload
            .get("documents")
            .and_then(Value::as_array)
            .expect("documents array");
        assert_eq!(documents.len(), 10);
        assert_eq!(
            documents[0].get("document_name").and_then(Value::as_str),
            Some("Board Resolution")
        );
        assert_eq!(
            documents[0].get("category").and_then(Value::as_str),
            Some("Company")
        );
        assert_eq!(
            documents[0].get("status").and_then(Value::as_str),
            Some("pending")
        );

        let response = post_json(
            &router,
            format!("/api/v1/checklists/{checklist_id}/documents/4/upload"),
            json!({ "file_url": "https://files.example/board.pdf" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        let board = document(&payload, 4);
        assert_eq!(
            board.get("status").and_then(Value::as_str),
            Some("uploaded")
        );
        assert_eq!(
            board.get("file_url").and_then(Value::as_str),
            Some("https://files.example/board.pdf")
        );
        // Nine of the ten documents are required, one uploaded.
        assert_eq!(payload.get("progress").and_then(Value::as_u64), Some(11));

        let response = post_json(
            &router,
            format!("/api/v1/checklists/{checklist_id}/documents/4/review"),
            json!({ "decision": "verified" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(
            document(&payload, 4).get("status").and_then(Value::as_str),
            Some("verified")
        );
        assert_eq!(payload.get("progress").and_then(Value::as_u64), Some(11));

        let response = post_json(
            &router,
            format!("/api/v1/checklists/{checklist_id}/documents/4/upload"),
            json!({ "file_url": "https://files.example/board-v2.pdf" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json(response).await;
        assert_eq!(
            payload.get("error").and_then(Value::as_str),
            Some("document is already verified")
        );

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/v1/checklists/{checklist_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload.get("progress").and_then(Value::as_u64), Some(11));
    }

    #[tokio::test]
    async fn missing_resources_map_to_not_found() {
        let router = build_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/checklists/chk-999999")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json(response).await;
        assert_eq!(
            payload.get("error").and_then(Value::as_str),
            Some("checklist not found")
        );

        let fixture = letter_of_credit_checklist();
        let response = post_json(
            &router,
            "/api/v1/checklists".to_string(),
            json!({
                "qualification_form_id": fixture.qualification_form_id,
                "lender_id": fixture.lender_id,
                "lender_name": fixture.lender_name,
                "product_type": fixture.product_type,
                "amount": fixture.amount,
                "currency": fixture.currency,
                "trade_counterparty": fixture.trade_counterparty,
                "company_name": fixture.company_name,
                "country": fixture.country,
                "industry": fixture.industry,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = read_json(response).await;
        let checklist_id = payload
            .get("checklist_id")
            .and_then(Value::as_str)
            .expect("checklist id")
            .to_string();

        let response = post_json(
            &router,
            format!("/api/v1/checklists/{checklist_id}/documents/42/upload"),
            json!({ "file_url": "https://files.example/stray.pdf" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json(response).await;
        assert_eq!(
            payload.get("error").and_then(Value::as_str),
            Some("document not found")
        );
    }
}
