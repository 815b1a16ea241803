use crate::directory::LenderRecord;

use super::form::QualificationForm;

/// Country keywords that map an applicant's answer onto a broad region, and
/// the region keywords a lender must advertise to earn the affinity points.
struct RegionAffinity {
    country_markers: &'static [&'static str],
    region_markers: &'static [&'static str],
    reason: &'static str,
}

static REGION_AFFINITIES: &[RegionAffinity] = &[
    RegionAffinity {
        country_markers: &["africa", "nigeria", "kenya", "ghana", "south africa"],
        region_markers: &["africa"],
        reason: "Regional focus on Africa",
    },
    RegionAffinity {
        country_markers: &["china", "india", "japan", "singapore", "asia"],
        region_markers: &["asia", "apac", "asia-pacific"],
        reason: "Regional focus on Asia-Pacific",
    },
    RegionAffinity {
        country_markers: &["europe", "uk", "france", "germany", "spain"],
        region_markers: &["europe", "emea"],
        reason: "Regional focus on Europe",
    },
    RegionAffinity {
        country_markers: &["latin", "brazil", "mexico", "argentina", "latam"],
        region_markers: &["latin", "latam", "americas"],
        reason: "Regional focus on Latin America",
    },
    RegionAffinity {
        country_markers: &["canada", "united states", "usa"],
        region_markers: &["canada", "usa", "north america"],
        reason: "Regional focus on North America",
    },
];

/// Scores one lender against the qualification answers.
///
/// Rules are additive and every earned rule appends its reason, so the reason
/// list reads in rule order and the score is exactly the sum of the points
/// behind it. Reads the lender's own `regions` and `products` columns without
/// the coverage fallbacks.
pub(crate) fn score_lender(form: &QualificationForm, lender: &LenderRecord) -> (u32, Vec<String>) {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    let lender_type = lender.type_text();
    let lender_regions = lender.regions_text();
    let lender_products = lender.products_text();
    let lender_note = lender.note_text();

    if form.involved_in_trade {
        let trade_ready = lender_type.contains("trade")
            || lender_products.contains("trade finance")
            || lender_products.contains("import")
            || lender_products.contains("export")
            || lender_products.contains("letter of credit")
            || lender_note.contains("trade");
        if trade_ready {
            score += 30;
            reasons.push("Specializes in trade finance".to_string());
        }
    }

    for funding_type in &form.funding_type {
        let funding_type = funding_type.to_lowercase();

        if funding_type.contains("trade")
            && (lender_products.contains("trade") || lender_type.contains("trade"))
        {
            score += 20;
            reasons.push("Offers trade finance products".to_string());
        }

        if funding_type.contains("working capital") && lender_products.contains("working capital") {
            score += 15;
            reasons.push("Provides working capital solutions".to_string());
        }

        if funding_type.contains("equipment") && lender_products.contains("equipment") {
            score += 15;
            reasons.push("Equipment financing available".to_string());
        }

        if funding_type.contains("project")
            && (lender_products.contains("project") || lender_type.contains("project"))
        {
            score += 15;
            reasons.push("Project finance specialist".to_string());
        }

        if funding_type.contains("invoice") && lender_products.contains("invoice") {
            score += 15;
            reasons.push("Invoice financing available".to_string());
        }

        if funding_type.contains("insurance")
            && (lender_type.contains("insurance") || lender_type.contains("eca"))
        {
            score += 20;
            reasons.push("Credit insurance and guarantees".to_string());
        }
    }

    if !form.country_of_operation.is_empty() {
        let country = form.country_of_operation.to_lowercase();

        if lender_regions.contains(&country) {
            score += 25;
            reasons.push(format!("Active in {}", form.country_of_operation));
        } else if lender_regions.contains("global") {
            score += 15;
            reasons.push("Global presence".to_string());
        } else {
            // Exact and global coverage missed; broad regional buckets may
            // still apply, and more than one can fire for a country whose
            // name straddles buckets.
            for affinity in REGION_AFFINITIES {
                let country_hit = affinity
                    .country_markers
                    .iter()
                    .any(|marker| country.contains(marker));
                let region_hit = affinity
                    .region_markers
                    .iter()
                    .any(|marker| lender_regions.contains(marker));
                if country_hit && region_hit {
                    score += 20;
                    reasons.push(affinity.reason.to_string());
                }
            }
        }
    }

    if !form.funding_amount.is_empty() {
        let amount = form.funding_amount.to_lowercase();

        if amount.contains("$1m+") || amount.contains("$250,000 - $1m") {
            let large_ticket = lender_type.contains("commercial bank")
                || lender_type.contains("global bank")
                || lender_type.contains("dfi")
                || lender_type.contains("multilateral");
            if large_ticket {
                score += 10;
                reasons.push("Suitable for larger ticket sizes".to_string());
            }
        }

        if amount.contains("< $50,000") || amount.contains("$50,000 - $250,000") {
            let sme_friendly = lender_type.contains("fintech")
                || lender_products.contains("sme")
                || lender_products.contains("small business");
            if sme_friendly {
                score += 10;
                reasons.push("Suitable for SME funding needs".to_string());
            }
        }
    }

    for instrument in &form.preferred_financing_instrument {
        let instrument = instrument.to_lowercase();

        if instrument.contains("letter of credit") && lender_products.contains("letter of credit") {
            score += 15;
            reasons.push("Issues Letters of Credit".to_string());
        }

        if instrument.contains("guarantee") && lender_products.contains("guarantee") {
            score += 15;
            reasons.push("Bank guarantees available".to_string());
        }
    }

    if lender_type.contains("dfi") || lender_type.contains("development") {
        score += 5;
        reasons.push("Development finance institution".to_string());
    }

    if lender_type.contains("fintech") || lender_type.contains("platform") {
        score += 5;
        reasons.push("Digital-first platform".to_string());
    }

    (score, reasons)
}
