use super::common::*;
use crate::directory::LenderRecord;
use crate::matching::{match_lenders, QualificationForm};

#[test]
fn nigeria_trade_dfi_scores_seventy_five_with_ordered_reasons() {
    let form = nigeria_trade_form();
    let directory = vec![dfi_lender()];

    let matches = match_lenders(&form, &directory);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_score, 75);
    assert_eq!(
        matches[0].match_reasons,
        vec![
            "Specializes in trade finance",
            "Offers trade finance products",
            "Regional focus on Africa",
            "Development finance institution",
        ]
    );
}

#[test]
fn results_sorted_descending_and_ties_keep_directory_order() {
    let form = QualificationForm {
        country_of_operation: "Mongolia".to_string(),
        consent_matching: true,
        ..QualificationForm::default()
    };
    let directory = vec![
        LenderRecord {
            regions: Some("Global".to_string()),
            lender_type: Some("Asset Manager".to_string()),
            ..LenderRecord::new("lender-alpha", "Alpha Capital")
        },
        LenderRecord {
            regions: Some("Global".to_string()),
            lender_type: Some("Asset Manager".to_string()),
            ..LenderRecord::new("lender-beta", "Beta Partners")
        },
        LenderRecord {
            regions: Some("Global".to_string()),
            lender_type: Some("DFI".to_string()),
            ..LenderRecord::new("lender-gamma", "Gamma Development Fund")
        },
    ];

    let matches = match_lenders(&form, &directory);

    let ids: Vec<&str> = matches.iter().map(|result| result.lender.id.as_str()).collect();
    assert_eq!(ids, vec!["lender-gamma", "lender-alpha", "lender-beta"]);
    assert_eq!(matches[0].match_score, 20);
    assert_eq!(matches[1].match_score, matches[2].match_score);
}

#[test]
fn lenders_without_any_earned_rule_are_excluded() {
    let form = nigeria_trade_form();
    let directory = vec![LenderRecord {
        lender_type: Some("Pension Fund".to_string()),
        regions: Some("Nordics".to_string()),
        products: Some("Infrastructure equity".to_string()),
        ..LenderRecord::new("lender-frost", "Frostholm Pension")
    }];

    assert!(match_lenders(&form, &directory).is_empty());
}

#[test]
fn exact_country_coverage_outranks_global_presence() {
    let form = nigeria_trade_form();
    let lender = LenderRecord {
        lender_type: Some("Commercial Bank".to_string()),
        regions: Some("Global, Nigeria".to_string()),
        ..LenderRecord::new("lender-union", "Union Trade Bank")
    };

    let matches = match_lenders(&form, &[lender]);

    assert_eq!(matches.len(), 1);
    let reasons = &matches[0].match_reasons;
    assert!(reasons.contains(&"Active in Nigeria".to_string()));
    assert!(!reasons.contains(&"Global presence".to_string()));
    assert!(!reasons.contains(&"Regional focus on Africa".to_string()));
}

#[test]
fn global_coverage_applies_only_without_exact_country() {
    let form = nigeria_trade_form();
    let lender = LenderRecord {
        lender_type: Some("Commercial Bank".to_string()),
        regions: Some("Global".to_string()),
        ..LenderRecord::new("lender-meridian", "Meridian Commercial Bank")
    };

    let matches = match_lenders(&form, &[lender]);

    assert!(matches[0]
        .match_reasons
        .contains(&"Global presence".to_string()));
}

#[test]
fn small_ticket_requests_favor_sme_friendly_lenders() {
    let form = QualificationForm {
        funding_amount: "< $50,000".to_string(),
        consent_matching: true,
        ..QualificationForm::default()
    };
    let lender = LenderRecord {
        lender_type: Some("Fintech".to_string()),
        products: Some("SME working capital".to_string()),
        ..LenderRecord::new("lender-paystream", "PayStream Capital")
    };

    let matches = match_lenders(&form, &[lender]);

    assert_eq!(matches[0].match_score, 15);
    assert_eq!(
        matches[0].match_reasons,
        vec!["Suitable for SME funding needs", "Digital-first platform"]
    );
}

#[test]
fn large_ticket_requests_favor_banks_and_multilaterals() {
    let form = QualificationForm {
        funding_amount: "$250,000 - $1M".to_string(),
        consent_matching: true,
        ..QualificationForm::default()
    };
    let lender = LenderRecord {
        lender_type: Some("Global Bank".to_string()),
        ..LenderRecord::new("lender-atlas", "Atlas Global Bank")
    };

    let matches = match_lenders(&form, &[lender]);

    assert_eq!(matches[0].match_score, 10);
    assert_eq!(
        matches[0].match_reasons,
        vec!["Suitable for larger ticket sizes"]
    );
}

#[test]
fn matching_is_idempotent_over_the_same_inputs() {
    let form = nigeria_trade_form();
    let directory = sample_directory();

    let first = match_lenders(&form, &directory);
    let second = match_lenders(&form, &directory);

    assert_eq!(first, second);
}
