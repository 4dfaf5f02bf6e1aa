// 💾 Exporters - pure renderers from a Dataset to a file format
//
// Every `render_*` takes the dataset plus the export timestamp and returns
// the full file content; `write_export` does the single whole-file write.

pub mod csv;
pub mod hashes;
pub mod html;
pub mod json;
pub mod txt;

use crate::dataset::Dataset;
use crate::errors::ExportError;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// EXPORT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Txt,
    Csv,
    Html,

    /// `username:hash` with a comment header
    Hashes,

    /// Bare hashes, one per line
    Hashcat,

    /// `hash:salt`, salted profiles only
    SaltedHashcat,

    /// `username | hash | hint | full name`
    HashReference,

    /// `username | hash | salt | hint | full name`, salted profiles only
    SaltReference,
}

impl ExportFormat {
    /// The "all standard formats" bundle
    pub const STANDARD: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Txt, ExportFormat::Csv];

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Hashes => "hashes",
            ExportFormat::Hashcat => "hashcat",
            ExportFormat::SaltedHashcat => "salted-hashcat",
            ExportFormat::HashReference => "hash-reference",
            ExportFormat::SaltReference => "salt-reference",
        }
    }

    pub fn is_hash_format(&self) -> bool {
        !matches!(
            self,
            ExportFormat::Json | ExportFormat::Txt | ExportFormat::Csv | ExportFormat::Html
        )
    }

    fn default_stem(&self) -> &'static str {
        match self {
            ExportFormat::Json | ExportFormat::Txt | ExportFormat::Csv | ExportFormat::Html => {
                "osint_profiles"
            }
            ExportFormat::Hashes => "osint_hashes",
            ExportFormat::Hashcat => "hashcat_hashes",
            ExportFormat::SaltedHashcat => "hashcat_salted",
            ExportFormat::HashReference => "osint_hash_reference",
            ExportFormat::SaltReference => "salt_reference",
        }
    }

    /// Appended to a user-supplied prefix
    fn prefix_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Hashes => "_hashes",
            ExportFormat::Hashcat => "_hashcat",
            ExportFormat::SaltedHashcat => "_salted_hashcat",
            ExportFormat::HashReference => "_hash_reference",
            ExportFormat::SaltReference => "_salt_reference",
            _ => "",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            _ => "txt",
        }
    }

    /// `<prefix><suffix>.<ext>` or `<stem>_<YYYYmmdd_HHMMSS>.<ext>`
    pub fn filename(&self, prefix: Option<&str>, now: DateTime<Local>) -> String {
        match prefix.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => format!("{}{}.{}", p, self.prefix_suffix(), self.extension()),
            None => format!(
                "{}_{}.{}",
                self.default_stem(),
                now.format("%Y%m%d_%H%M%S"),
                self.extension()
            ),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let all = [
            ExportFormat::Json,
            ExportFormat::Txt,
            ExportFormat::Csv,
            ExportFormat::Html,
            ExportFormat::Hashes,
            ExportFormat::Hashcat,
            ExportFormat::SaltedHashcat,
            ExportFormat::HashReference,
            ExportFormat::SaltReference,
        ];
        let wanted = s.trim().to_lowercase().replace('_', "-");
        all.into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = all.iter().map(|f| f.name()).collect();
                format!("unknown export format '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

// ============================================================================
// RENDER / WRITE
// ============================================================================

pub fn render(format: ExportFormat, dataset: &Dataset, now: DateTime<Local>) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => json::render_json(dataset, now),
        ExportFormat::Txt => Ok(txt::render_txt(dataset, now)),
        ExportFormat::Csv => csv::render_csv(dataset),
        ExportFormat::Html => Ok(html::render_html(dataset, now)),
        ExportFormat::Hashes => hashes::render_hashes(dataset, now),
        ExportFormat::Hashcat => hashes::render_hashcat(dataset),
        ExportFormat::SaltedHashcat => hashes::render_salted_hashcat(dataset),
        ExportFormat::HashReference => hashes::render_hash_reference(dataset, now),
        ExportFormat::SaltReference => hashes::render_salt_reference(dataset, now),
    }
}

/// Render `format` and write it under `dir`; returns the written path
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    prefix: Option<&str>,
    dataset: &Dataset,
) -> Result<PathBuf, ExportError> {
    let now = Local::now();
    let content = render(format, dataset, now)?;
    let path = dir.join(format.filename(prefix, now));

    fs::write(&path, content)?;
    log::info!("exported {} to {}", format, path.display());

    Ok(path)
}

/// Non-comment, non-blank lines of a rendered export (used for previews)
pub fn data_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dataset::Dataset;
    use crate::entities::profile::fixtures::sample_profile;
    use crate::entities::{Company, SocialProfile};
    use crate::hashing::hash_password_with_salt;
    use crate::entities::HashType;

    pub fn sample_dataset(salted: bool) -> Dataset {
        let mut alice = sample_profile();
        let mut bob = sample_profile();
        bob.id = "ID-1700000000-bbbb2222".into();
        bob.first_name = "Bob".into();
        bob.last_name = "Lee".into();
        bob.full_name = "Bob Lee".into();
        bob.email = "blee@gmail.com".into();
        bob.password_hint = "Lee199042".into();
        bob.social_profiles.github = Some("https://github.com/boblee".into());

        if salted {
            for p in [&mut alice, &mut bob] {
                let salt = "0123456789abcdef0123456789abcdef".to_string();
                p.password_hash = hash_password_with_salt(&p.password_hint, &salt);
                p.salt = Some(salt);
                p.hash_type = HashType::Sha512Salted;
            }
        }

        let social = SocialProfile {
            id: alice.id.clone(),
            person_id: alice.id.clone(),
            posts: 12,
            followers: 340,
            following: 56,
            last_active: "2025-01-02T03:04:05+00:00".into(),
        };

        let company = Company {
            id: "ID-1700000000-cccc3333".into(),
            name: "TechCorp Solutions".into(),
            industry: "Technology".into(),
            size: "51-200".into(),
            location: "Boston".into(),
            website: "https://techcorpsolutions.com".into(),
            employees: Vec::new(),
            departments: vec!["Engineering".into(), "Sales".into()],
            generated_at: "2025-01-01T00:00:00+00:00".into(),
            url: "/companies/ID-1700000000-dddd4444".into(),
        };

        Dataset {
            profiles: vec![alice, bob],
            companies: vec![company],
            social_profiles: vec![social],
            relationships: Vec::new(),
        }
    }
}
