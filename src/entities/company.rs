// 🏢 Company Entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,

    /// Headcount bracket, e.g. "51-200"
    pub size: String,
    pub location: String,
    pub website: String,

    /// Kept for export-shape compatibility, always empty
    pub employees: Vec<String>,
    pub departments: Vec<String>,
    pub generated_at: String,
    pub url: String,
}

/// Domain derived from a company name: lowercase, no spaces, commas or periods
///
/// "Global Dynamics Inc" -> "globaldynamicsinc.com"
pub fn company_domain(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | ',' | '.'))
        .collect();
    format!("{}.com", slug)
}
