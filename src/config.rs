// ⚙️ Application configuration
// Filled from CLI flags / environment by main.rs, defaults otherwise.

use chrono::{Datelike, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory where every export and wordlist is written
    pub output_dir: PathBuf,

    /// RNG seed; None draws from OS entropy
    pub seed: Option<u64>,

    /// Year used to compute profile ages
    pub reference_year: i32,
}

impl AppConfig {
    pub fn new(output_dir: PathBuf, seed: Option<u64>) -> Self {
        AppConfig {
            output_dir,
            seed,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_dir: PathBuf::from("."),
            seed: None,
            reference_year: Utc::now().year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.seed.is_none());
        assert!(config.reference_year >= 2024);
    }

    #[test]
    fn test_new_keeps_reference_year_default() {
        let config = AppConfig::new(PathBuf::from("/tmp/out"), Some(7));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.reference_year, Utc::now().year());
    }
}
