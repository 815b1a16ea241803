use super::domain::LenderRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum DirectoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingName { row: usize },
}

impl std::fmt::Display for DirectoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryImportError::Io(err) => {
                write!(f, "failed to read lender directory: {}", err)
            }
            DirectoryImportError::Csv(err) => {
                write!(f, "invalid lender directory CSV data: {}", err)
            }
            DirectoryImportError::MissingName { row } => {
                write!(f, "lender directory row {} has no name", row)
            }
        }
    }
}

impl std::error::Error for DirectoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryImportError::Io(err) => Some(err),
            DirectoryImportError::Csv(err) => Some(err),
            DirectoryImportError::MissingName { .. } => None,
        }
    }
}

impl From<std::io::Error> for DirectoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DirectoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads the lender directory from a CSV export. Rows keep their optional
/// descriptive columns as-is, rows without an id get a generated one, and
/// the resulting directory is ordered by lender name.
pub struct DirectoryImporter;

impl DirectoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LenderRecord>, DirectoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LenderRecord>, DirectoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut directory = Vec::new();

        for (index, record) in csv_reader.deserialize::<LenderRow>().enumerate() {
            let row = record?;
            directory.push(row.into_record(index + 1)?);
        }

        directory.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(directory)
    }
}

#[derive(Debug, Deserialize)]
struct LenderRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    lender_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    regions: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    geographic_coverage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    products: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    loan_products: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    performance_note: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    typical_ticket: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    typical_loan_size: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    typical_term: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    typical_ltv: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    logo_url: Option<String>,
}

impl LenderRow {
    fn into_record(self, row: usize) -> Result<LenderRecord, DirectoryImportError> {
        let name = self
            .name
            .ok_or(DirectoryImportError::MissingName { row })?;
        let id = self.id.unwrap_or_else(|| format!("lender-{:03}", row));

        Ok(LenderRecord {
            id,
            name,
            lender_type: self.lender_type,
            regions: self.regions,
            geographic_coverage: self.geographic_coverage,
            products: self.products,
            loan_products: self.loan_products,
            performance_note: self.performance_note,
            typical_ticket: self.typical_ticket,
            typical_loan_size: self.typical_loan_size,
            typical_term: self.typical_term,
            typical_ltv: self.typical_ltv,
            website: self.website,
            logo_url: self.logo_url,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
