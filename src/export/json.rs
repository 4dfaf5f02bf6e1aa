// JSON export - the complete dataset, and the wordlist engine's input format

use crate::dataset::Dataset;
use crate::errors::ExportError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const EXPORT_FORMAT_VERSION: &str = "OSINT_CLI_Export_v1.0";
pub const GENERATOR_NAME: &str = "OSINT Profile Generator CLI";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub exported_at: String,
    pub total_profiles: usize,
    pub total_companies: usize,
    pub format: String,
    pub generator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: ExportMetadata,
    pub data: Dataset,
}

impl ExportDocument {
    pub fn new(dataset: &Dataset, now: DateTime<Local>) -> Self {
        ExportDocument {
            metadata: ExportMetadata {
                exported_at: now.to_rfc3339(),
                total_profiles: dataset.profiles.len(),
                total_companies: dataset.companies.len(),
                format: EXPORT_FORMAT_VERSION.to_string(),
                generator: GENERATOR_NAME.to_string(),
            },
            data: dataset.clone(),
        }
    }
}

pub fn render_json(dataset: &Dataset, now: DateTime<Local>) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportDocument::new(dataset, now))?)
}
