use std::sync::Arc;

use super::common::*;
use crate::matching::repository::RepositoryError;
use crate::matching::{MatchService, MatchServiceError, SubmissionId};

#[test]
fn submit_scores_the_directory_and_persists_the_outcome() {
    let (service, store) = build_service();

    let response = service.submit(nigeria_trade_form()).expect("submission accepted");

    assert_eq!(response.matches.len(), 3);
    assert_eq!(response.matches[0].lender.id, "lender-adf");
    assert_eq!(response.matches[0].match_score, 75);

    let stored = store.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].submission_id, response.submission_id);
    assert_eq!(stored[0].form.business_name, "Lagos Agro Exports Ltd");
    assert_eq!(stored[0].matches.len(), 3);
    assert_eq!(stored[0].matches[0].lender_id, "lender-adf");
    assert_eq!(stored[0].matches[0].match_score, 75);
}

#[test]
fn submit_still_answers_when_the_store_is_unavailable() {
    let service = MatchService::new(
        Arc::new(sample_directory()),
        Arc::new(UnavailableStore),
    );

    let response = service.submit(nigeria_trade_form()).expect("submission accepted");

    assert_eq!(response.matches.len(), 3);
    assert!(response.submission_id.0.starts_with("sub-"));
}

#[test]
fn submit_rejects_unconsented_forms_before_scoring() {
    let (service, store) = build_service();
    let mut form = nigeria_trade_form();
    form.consent_matching = false;

    match service.submit(form) {
        Err(MatchServiceError::Intake(_)) => {}
        other => panic!("expected intake rejection, got {other:?}"),
    }
    assert!(store.stored().is_empty());
}

#[test]
fn get_reports_not_found_for_unknown_submissions() {
    let (service, _) = build_service();

    match service.get(&SubmissionId("sub-999999".to_string())) {
        Err(MatchServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn recent_returns_newest_submissions_first() {
    let (service, _) = build_service();

    let first = service.submit(nigeria_trade_form()).expect("first accepted");
    let second = service.submit(nigeria_trade_form()).expect("second accepted");

    let recent = service.recent(2).expect("recent listing");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].submission_id, second.submission_id);
    assert_eq!(recent[1].submission_id, first.submission_id);
}
