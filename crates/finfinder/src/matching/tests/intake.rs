use super::common::*;
use crate::matching::{IntakeGuard, IntakeViolation};

#[test]
fn guard_accepts_a_complete_submission() {
    let guard = IntakeGuard;

    assert!(guard.validate(&nigeria_trade_form()).is_ok());
}

#[test]
fn guard_rejects_missing_matching_consent() {
    let guard = IntakeGuard;
    let mut form = nigeria_trade_form();
    form.consent_matching = false;

    match guard.validate(&form) {
        Err(IntakeViolation::MissingMatchingConsent) => {}
        other => panic!("expected consent violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_blank_required_fields() {
    let guard = IntakeGuard;
    let mut form = nigeria_trade_form();
    form.business_name = "   ".to_string();

    match guard.validate(&form) {
        Err(IntakeViolation::MissingField("business_name")) => {}
        other => panic!("expected missing field violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_undeliverable_contact_emails() {
    let guard = IntakeGuard;

    for email in ["adaeze.lagosagro.example", "@lagosagro.example", "adaeze@example"] {
        let mut form = nigeria_trade_form();
        form.contact_email = email.to_string();

        match guard.validate(&form) {
            Err(IntakeViolation::InvalidEmail(rejected)) => assert_eq!(rejected, email),
            other => panic!("expected email violation for {email}, got {other:?}"),
        }
    }
}
