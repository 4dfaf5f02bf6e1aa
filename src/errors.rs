// ⚠️ Error taxonomy
// Every variant here is recoverable: the caller reports it and returns to the menu.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while deriving a wordlist
#[derive(Error, Debug)]
pub enum WordlistError {
    /// Empty input, or no record in it could be used
    #[error("no usable profiles found{}", source_hint(.0))]
    NoData(Option<String>),

    #[error("source file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    #[error("malformed source '{}': {reason}", path.display())]
    MalformedSource { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn source_hint(source: &Option<String>) -> String {
    match source {
        Some(s) => format!(" in {}", s),
        None => String::new(),
    }
}

/// Errors raised by the file exporters
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no profiles available, generate profiles first")]
    NoProfiles,

    #[error("no salted hashes found, generate profiles with the salt option enabled")]
    NoSaltedHashes,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while building a dataset
#[derive(Error, Debug, PartialEq)]
pub enum GeneratorError {
    #[error("invalid generation options: {0}")]
    InvalidOptions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WordlistError::NoData(None).to_string(),
            "no usable profiles found"
        );
        assert_eq!(
            WordlistError::NoData(Some("export.json".into())).to_string(),
            "no usable profiles found in export.json"
        );
        assert_eq!(
            WordlistError::SourceNotFound(PathBuf::from("missing.json")).to_string(),
            "source file 'missing.json' not found"
        );
        let malformed = WordlistError::MalformedSource {
            path: PathBuf::from("bad.json"),
            reason: "expected value".into(),
        };
        assert_eq!(malformed.to_string(), "malformed source 'bad.json': expected value");
    }
}
