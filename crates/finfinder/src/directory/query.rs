use super::catalog::{self, FilterOption, ALL_FILTER, CATEGORY_FILTERS, COUNTRY_FILTERS, REGION_FILTERS};
use super::domain::LenderRecord;
use serde::Deserialize;

/// Combined directory view: every axis is ANDed, each axis defaulting to
/// no constraint when unset or set to [`ALL_FILTER`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryQuery {
    pub category: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub search: Option<String>,
}

impl DirectoryQuery {
    pub fn apply<'a>(&self, directory: &'a [LenderRecord]) -> Vec<&'a LenderRecord> {
        directory
            .iter()
            .filter(|lender| self.matches(lender))
            .collect()
    }

    pub fn matches(&self, lender: &LenderRecord) -> bool {
        if let Some(name) = self.category.as_deref() {
            if !catalog_matches(lender, CATEGORY_FILTERS, name, LenderRecord::type_text) {
                return false;
            }
        }

        if let Some(name) = self.region.as_deref() {
            if !catalog_matches(lender, REGION_FILTERS, name, LenderRecord::coverage_text) {
                return false;
            }
        }

        if let Some(name) = self.country.as_deref() {
            if !catalog_matches(lender, COUNTRY_FILTERS, name, LenderRecord::coverage_text) {
                return false;
            }
        }

        if let Some(term) = self.search.as_deref() {
            let needle = term.trim().to_lowercase();
            if !needle.is_empty() && !search_hit(lender, &needle) {
                return false;
            }
        }

        true
    }
}

pub fn filter_by_category<'a>(directory: &'a [LenderRecord], name: &str) -> Vec<&'a LenderRecord> {
    filter_axis(directory, CATEGORY_FILTERS, name, LenderRecord::type_text)
}

pub fn filter_by_region<'a>(directory: &'a [LenderRecord], name: &str) -> Vec<&'a LenderRecord> {
    filter_axis(directory, REGION_FILTERS, name, LenderRecord::coverage_text)
}

pub fn filter_by_country<'a>(directory: &'a [LenderRecord], name: &str) -> Vec<&'a LenderRecord> {
    filter_axis(directory, COUNTRY_FILTERS, name, LenderRecord::coverage_text)
}

pub fn count_by_category(directory: &[LenderRecord], name: &str) -> usize {
    filter_by_category(directory, name).len()
}

pub fn count_by_region(directory: &[LenderRecord], name: &str) -> usize {
    filter_by_region(directory, name).len()
}

pub fn count_by_country(directory: &[LenderRecord], name: &str) -> usize {
    filter_by_country(directory, name).len()
}

/// Free-text search across the descriptive columns. A blank term selects
/// everything; otherwise any single column containing the term qualifies.
pub fn search<'a>(directory: &'a [LenderRecord], term: &str) -> Vec<&'a LenderRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return directory.iter().collect();
    }

    directory
        .iter()
        .filter(|lender| search_hit(lender, &needle))
        .collect()
}

fn filter_axis<'a>(
    directory: &'a [LenderRecord],
    options: &'static [FilterOption],
    name: &str,
    field: fn(&LenderRecord) -> String,
) -> Vec<&'a LenderRecord> {
    directory
        .iter()
        .filter(|lender| catalog_matches(lender, options, name, field))
        .collect()
}

fn catalog_matches(
    lender: &LenderRecord,
    options: &'static [FilterOption],
    name: &str,
    field: fn(&LenderRecord) -> String,
) -> bool {
    if name == ALL_FILTER {
        return true;
    }

    match catalog::find(options, name) {
        Some(option) => keyword_hit(&field(lender), option.keywords),
        None => false,
    }
}

fn keyword_hit(text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}

fn search_hit(lender: &LenderRecord, needle: &str) -> bool {
    let columns = [
        Some(lender.name.as_str()),
        lender.geographic_coverage.as_deref(),
        lender.regions.as_deref(),
        lender.typical_loan_size.as_deref(),
        lender.typical_ticket.as_deref(),
        lender.typical_term.as_deref(),
        lender.lender_type.as_deref(),
        lender.products.as_deref(),
        lender.performance_note.as_deref(),
    ];

    columns
        .iter()
        .flatten()
        .any(|column| column.to_lowercase().contains(needle))
}
