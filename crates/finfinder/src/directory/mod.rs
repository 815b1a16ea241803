//! Lender directory: records, the filter catalogs, directory queries, and
//! CSV import.

pub mod catalog;
pub mod domain;
mod import;
mod query;

pub use catalog::{FilterOption, ALL_FILTER, CATEGORY_FILTERS, COUNTRY_FILTERS, REGION_FILTERS};
pub use domain::LenderRecord;
pub use import::{DirectoryImportError, DirectoryImporter};
pub use query::{
    count_by_category, count_by_country, count_by_region, filter_by_category, filter_by_country,
    filter_by_region, search, DirectoryQuery,
};
