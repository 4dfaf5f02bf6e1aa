// 🔒 Hash exports for cracking drills
//
// Hashcat files carry no header so they can be fed to the tool as-is.

use crate::dataset::Dataset;
use crate::entities::Profile;
use crate::errors::ExportError;
use chrono::{DateTime, Local};

fn require_profiles(dataset: &Dataset) -> Result<(), ExportError> {
    if dataset.profiles.is_empty() {
        return Err(ExportError::NoProfiles);
    }
    Ok(())
}

fn salted_profiles(dataset: &Dataset) -> Result<Vec<&Profile>, ExportError> {
    require_profiles(dataset)?;
    let salted: Vec<&Profile> = dataset.salted_profiles().collect();
    if salted.is_empty() {
        return Err(ExportError::NoSaltedHashes);
    }
    Ok(salted)
}

fn rule(width: usize) -> String {
    format!("#{}\n", "=".repeat(width))
}

/// `username:hash`, username = email local part
pub fn render_hashes(dataset: &Dataset, now: DateTime<Local>) -> Result<String, ExportError> {
    require_profiles(dataset)?;

    let mut out = String::new();
    out.push_str("# OSINT Training Password Hashes (SHA-512)\n");
    out.push_str(&format!("# Generated: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("# Total hashes: {}\n", dataset.profiles.len()));
    out.push_str("# Educational use only - for password cracking training\n");
    out.push_str(&rule(60));
    out.push_str("# Format: username:hash\n");
    out.push_str(&rule(60));
    out.push('\n');

    for p in &dataset.profiles {
        out.push_str(&format!("{}:{}\n", p.username(), p.password_hash));
    }
    Ok(out)
}

pub fn render_hashcat(dataset: &Dataset) -> Result<String, ExportError> {
    require_profiles(dataset)?;
    Ok(dataset
        .profiles
        .iter()
        .map(|p| format!("{}\n", p.password_hash))
        .collect())
}

/// `hash:salt`, hashcat mode 1710
pub fn render_salted_hashcat(dataset: &Dataset) -> Result<String, ExportError> {
    let salted = salted_profiles(dataset)?;
    Ok(salted
        .iter()
        .map(|p| format!("{}:{}\n", p.password_hash, p.salt.as_deref().unwrap_or("")))
        .collect())
}

pub fn render_hash_reference(dataset: &Dataset, now: DateTime<Local>) -> Result<String, ExportError> {
    require_profiles(dataset)?;

    let mut out = String::new();
    out.push_str("# OSINT Training Hash Reference File\n");
    out.push_str(&format!("# Generated: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("# Total entries: {}\n", dataset.profiles.len()));
    out.push_str("# Educational use only - shows hash:password mapping for training\n");
    out.push_str(&rule(70));
    out.push_str("# Format: username | hash | password_hint | full_name\n");
    out.push_str(&rule(70));
    out.push('\n');

    for p in &dataset.profiles {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            p.username(),
            p.password_hash,
            p.password_hint,
            p.full_name
        ));
    }
    Ok(out)
}

pub fn render_salt_reference(dataset: &Dataset, now: DateTime<Local>) -> Result<String, ExportError> {
    let salted = salted_profiles(dataset)?;

    let mut out = String::new();
    out.push_str("# OSINT Training Salted Hash Reference\n");
    out.push_str(&format!("# Generated: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("# Total entries: {}\n", salted.len()));
    out.push_str("# Format: username | hash | salt | password_hint | full_name\n");
    out.push_str(&rule(80));
    out.push('\n');

    for p in salted {
        out.push_str(&format!(
            "{} | {} | {} | {} | {}\n",
            p.username(),
            p.password_hash,
            p.salt.as_deref().unwrap_or(""),
            p.password_hint,
            p.full_name
        ));
    }
    Ok(out)
}
