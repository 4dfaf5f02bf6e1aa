// OSINT Profile Generator - Core Library
// Synthetic profiles for security training, their exports, and the
// wordlist engine that derives password candidates from them.

pub mod config;
pub mod dataset;
pub mod entities;
pub mod errors;
pub mod export;
pub mod hashing;
pub mod menu;
pub mod pools;
pub mod synthesizer;
pub mod wordlist;

// Re-export commonly used types
pub use config::AppConfig;
pub use dataset::{Dataset, DatasetBuilder, DatasetStats, GenerationOptions};
pub use entities::{Company, HashType, Profile, SocialLinks, SocialProfile};
pub use errors::{ExportError, GeneratorError, WordlistError};
pub use export::{write_export, ExportFormat};
pub use menu::Menu;
pub use synthesizer::ProfileSynthesizer;
pub use wordlist::{derive_candidates, Wordlist, WordlistEngine, WordlistRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
