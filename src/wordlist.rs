// 🔑 Wordlist Engine - password candidates derived from profile fields
//
// Mirrors how people actually build passwords (name+year, name+symbol,
// two-name combos) instead of expanding a charset.
//
// Output is a set: no duplicates, sorted by (char length, lowercase value).

use crate::entities::Profile;
use crate::errors::WordlistError;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffixes appended to every base element
const COMMON_SUFFIXES: [&str; 8] = ["!", "@", "#", "01", "02", "03", "99", "00"];

/// Symbols appended after the full birth year
const YEAR_SYMBOLS: [&str; 3] = ["!", "@", "#"];

/// Source label used for in-memory profiles
pub const CURRENT_DATA_SOURCE: &str = "current session data";

// ============================================================================
// WORDLIST RECORD (normalized input shape)
// ============================================================================

/// The fields derivation reads. Both sources normalize to this shape;
/// missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordlistRecord {
    pub first_name: String,
    pub last_name: String,
    pub birth_year: String,
    pub city: String,
    pub company: String,
    pub university: String,
    pub password_hint: Option<String>,
}

impl WordlistRecord {
    /// Normalize one entry of an exported `profiles` array.
    ///
    /// Returns None when the entry is not a JSON object. Unknown fields are
    /// ignored, and `birth_year` may be a number or a string.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let text = |key: &str| -> String {
            match obj.get(key) {
                Some(Value::String(s)) => s.clone(),
                _ => String::new(),
            }
        };

        let birth_year = match obj.get("birth_year") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };

        let password_hint = match obj.get("password_hint") {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };

        Some(WordlistRecord {
            first_name: text("first_name"),
            last_name: text("last_name"),
            birth_year,
            city: text("city"),
            company: text("company"),
            university: text("university"),
            password_hint,
        })
    }
}

impl From<&Profile> for WordlistRecord {
    fn from(p: &Profile) -> Self {
        WordlistRecord {
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            birth_year: p.birth_year.to_string(),
            city: p.city.clone(),
            company: p.company.clone(),
            university: p.university.clone(),
            password_hint: Some(p.password_hint.clone()),
        }
    }
}

// ============================================================================
// DERIVATION
// ============================================================================

/// First character upper-cased, the rest lower-cased ("TechCorp" -> "Techcorp")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Last two characters of the birth year, empty if shorter
fn year_suffix(birth_year: &str) -> String {
    let count = birth_year.chars().count();
    if count < 2 {
        return String::new();
    }
    birth_year.chars().skip(count - 2).collect()
}

fn insert(set: &mut HashSet<String>, candidate: String) {
    if !candidate.is_empty() {
        set.insert(candidate);
    }
}

/// Every candidate one record yields. Empty fields are skipped.
pub fn derive_candidates(record: &WordlistRecord) -> HashSet<String> {
    let mut out = HashSet::new();

    if let Some(hint) = &record.password_hint {
        insert(&mut out, hint.clone());
    }

    let birth_year = record.birth_year.as_str();
    let yy = year_suffix(birth_year);
    let company = record.company.split(' ').next().unwrap_or("");
    let university = record.university.replace(" University", "").replace(' ', "");

    let bases = [
        record.first_name.as_str(),
        record.last_name.as_str(),
        record.city.as_str(),
        company,
        university.as_str(),
    ];
    let numbers = [birth_year, yy.as_str(), "123", "1234", "12345"];

    for base in bases.iter().filter(|b| !b.is_empty()) {
        let lower = base.to_lowercase();
        let cap = capitalize(base);

        insert(&mut out, lower.clone());
        insert(&mut out, cap.clone());

        for num in numbers.iter().filter(|n| !n.is_empty()) {
            insert(&mut out, format!("{}{}", lower, num));
            insert(&mut out, format!("{}{}", cap, num));
        }

        for suffix in COMMON_SUFFIXES {
            insert(&mut out, format!("{}{}", lower, suffix));
            insert(&mut out, format!("{}{}", cap, suffix));
        }

        if !birth_year.is_empty() {
            for symbol in YEAR_SYMBOLS {
                insert(&mut out, format!("{}{}{}", lower, birth_year, symbol));
                insert(&mut out, format!("{}{}{}", cap, birth_year, symbol));
            }
        }
    }

    // Two-element combinations; inequality is checked on the raw fields
    let firsts = [record.first_name.as_str(), record.last_name.as_str()];
    let seconds = [record.last_name.as_str(), record.city.as_str(), company];
    let combo_numbers = ["", yy.as_str(), "123"];

    for base1 in firsts {
        for base2 in seconds {
            if base1.is_empty() || base2.is_empty() || base1 == base2 {
                continue;
            }
            for num in combo_numbers {
                insert(
                    &mut out,
                    format!("{}{}{}", base1.to_lowercase(), base2.to_lowercase(), num),
                );
                insert(
                    &mut out,
                    format!("{}{}{}", capitalize(base1), capitalize(base2), num),
                );
            }
        }
    }

    out
}

/// Sort by (char length, lowercase); the raw string breaks the
/// remaining ties so output never depends on hash order.
pub fn sort_candidates(entries: &mut [String]) {
    entries.sort_by_cached_key(|s| (s.chars().count(), s.to_lowercase(), s.clone()));
}

// ============================================================================
// WORDLIST
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Wordlist {
    /// Where the profiles came from (file path or session label)
    pub source: String,
    pub entries: Vec<String>,
}

impl Wordlist {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header block of `#` lines, a blank line, then one entry per line.
    ///
    /// Entries are written verbatim, so an entry may itself start with `#`.
    /// Readers should split on the first blank line (see [`entry_lines`])
    /// rather than skip `#` lines.
    pub fn render(&self, now: DateTime<Local>) -> String {
        let mut out = String::new();
        out.push_str("# OSINT Training Wordlist\n");
        out.push_str(&format!("# Generated from: {}\n", self.source));
        out.push_str(&format!("# Generated on: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
        out.push_str(&format!("# Total entries: {}\n", self.entries.len()));
        out.push_str("# Educational use only - for password security training\n");
        out.push_str(&format!("#{}\n\n", "=".repeat(60)));

        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Whole-file write of the rendered wordlist
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render(Local::now()))?;
        log::info!("wrote {} wordlist entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}

/// Entry lines of a rendered wordlist: everything after the first blank line
pub fn entry_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .skip_while(|l| !l.is_empty())
        .skip(1)
        .filter(|l| !l.is_empty())
        .collect()
}

/// `<name>.txt`, or `osint_wordlist_<YYYYmmdd_HHMMSS>.txt` when no name is given
pub fn wordlist_filename(name: Option<&str>, now: DateTime<Local>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => format!("{}.txt", n),
        None => format!("osint_wordlist_{}.txt", now.format("%Y%m%d_%H%M%S")),
    }
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct WordlistEngine;

impl WordlistEngine {
    /// Derive the deduplicated, sorted wordlist for a set of records
    pub fn derive(records: &[WordlistRecord], source: &str) -> Result<Wordlist, WordlistError> {
        if records.is_empty() {
            return Err(WordlistError::NoData(Some(source.to_string())));
        }

        let mut set: HashSet<String> = HashSet::new();
        for record in records {
            set.extend(derive_candidates(record));
        }

        let mut entries: Vec<String> = set.into_iter().collect();
        sort_candidates(&mut entries);

        log::debug!("derived {} candidates from {} records", entries.len(), records.len());

        Ok(Wordlist {
            source: source.to_string(),
            entries,
        })
    }

    /// In-memory source
    pub fn from_profiles(profiles: &[Profile]) -> Result<Wordlist, WordlistError> {
        let records: Vec<WordlistRecord> = profiles.iter().map(WordlistRecord::from).collect();
        Self::derive(&records, CURRENT_DATA_SOURCE)
    }

    /// Previously exported JSON (`{ "data": { "profiles": [...] } }`)
    pub fn from_json_file(path: &Path) -> Result<Wordlist, WordlistError> {
        let records = load_records(path)?;
        Self::derive(&records, &path.display().to_string())
    }
}

/// Read the `data.profiles` array of an export and normalize each entry
pub fn load_records(path: &Path) -> Result<Vec<WordlistRecord>, WordlistError> {
    // Invalid UTF-8 is reported by serde_json, so it lands in MalformedSource
    let content = match fs::read(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(WordlistError::SourceNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(WordlistError::Io(e)),
    };

    parse_records(&content, path)
}

fn malformed(path: &Path, reason: impl Into<String>) -> WordlistError {
    WordlistError::MalformedSource {
        path: PathBuf::from(path),
        reason: reason.into(),
    }
}

fn parse_records(content: &[u8], path: &Path) -> Result<Vec<WordlistRecord>, WordlistError> {
    let root: Value = serde_json::from_slice(content).map_err(|e| malformed(path, e.to_string()))?;
    let no_data = || WordlistError::NoData(Some(path.display().to_string()));

    let root = root
        .as_object()
        .ok_or_else(|| malformed(path, "top level is not an object"))?;

    let data = match root.get("data") {
        None | Some(Value::Null) => return Err(no_data()),
        Some(Value::Object(data)) => data,
        Some(_) => return Err(malformed(path, "`data` is not an object")),
    };

    let profiles = match data.get("profiles") {
        None | Some(Value::Null) => return Err(no_data()),
        Some(Value::Array(profiles)) => profiles,
        Some(_) => return Err(malformed(path, "`data.profiles` is not an array")),
    };

    let records: Vec<WordlistRecord> = profiles
        .iter()
        .enumerate()
        .filter_map(|(i, value)| {
            let record = WordlistRecord::from_json(value);
            if record.is_none() {
                log::warn!("skipping profile #{} in {}: not an object", i, path.display());
            }
            record
        })
        .collect();

    if records.is_empty() {
        return Err(no_data());
    }

    Ok(records)
}
