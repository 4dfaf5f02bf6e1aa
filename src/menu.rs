// 📋 Menu Driver - interactive text UI sequencing generation, export and wordlists
//
// Generic over input/output so sessions can be scripted in tests.
// Domain errors are reported and the menu resumes; only I/O on the
// terminal itself is fatal.

use crate::config::AppConfig;
use crate::dataset::{Dataset, DatasetBuilder, GenerationOptions, MAX_COMPANIES, MAX_PROFILES};
use crate::errors::{ExportError, WordlistError};
use crate::export::{self, data_lines, ExportFormat};
use crate::entities::HashType;
use crate::synthesizer::ProfileSynthesizer;
use crate::wordlist::{wordlist_filename, Wordlist, WordlistEngine};
use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// End of input: the session ends as if the user chose Exit
#[derive(Debug, thiserror::Error)]
#[error("input closed")]
struct InputClosed;

const PROFILE_PRESETS: [usize; 4] = [10, 25, 50, 100];
const COMPANY_PRESETS: [usize; 3] = [3, 5, 10];

pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: AppConfig,
    synth: ProfileSynthesizer,
    dataset: Dataset,

    /// Clear the terminal between screens (off when not a TTY)
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        let synth = ProfileSynthesizer::from_seed(config.seed).with_reference_year(config.reference_year);
        Menu {
            input,
            output,
            config,
            synth,
            dataset: Dataset::default(),
            clear_screen: false,
        }
    }

    pub fn with_screen_clearing(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // ========================================================================
    // MAIN LOOP
    // ========================================================================

    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.main_screen() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
                    log::debug!("input closed, leaving menu");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// One pass through the main menu; false means exit
    fn main_screen(&mut self) -> Result<bool> {
        self.clear()?;
        self.banner()?;

        if !self.dataset.is_empty() {
            writeln!(
                self.output,
                "📊 Current Data: {} profiles, {} companies\n",
                self.dataset.profiles.len(),
                self.dataset.companies.len()
            )?;
        }

        writeln!(self.output, "📋 MAIN MENU")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        writeln!(self.output, "1. Generate Profiles")?;
        writeln!(self.output, "2. Export Data")?;
        writeln!(self.output, "3. Generate HTML Visualizer")?;
        writeln!(self.output, "4. Generate Wordlist")?;
        writeln!(self.output, "5. View Statistics")?;
        writeln!(self.output, "6. Clear All Data")?;
        writeln!(self.output, "7. Exit\n")?;

        match self.ask_number("Select option (1-7): ", 1, 7)? {
            1 => self.generate_profiles_menu()?,
            2 => self.export_data_menu()?,
            3 => self.generate_html_menu()?,
            4 => self.generate_wordlist_menu()?,
            5 => self.view_statistics()?,
            6 => self.clear_data()?,
            _ => {
                writeln!(self.output, "👋 Goodbye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    // ========================================================================
    // SCREENS
    // ========================================================================

    fn generate_profiles_menu(&mut self) -> Result<()> {
        self.clear()?;
        self.banner()?;
        writeln!(self.output, "🎲 GENERATE PROFILES")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        writeln!(self.output, "📊 Profile Amount Options:")?;
        writeln!(self.output, "1. Quick Test (10 profiles)")?;
        writeln!(self.output, "2. Small Dataset (25 profiles)")?;
        writeln!(self.output, "3. Medium Dataset (50 profiles)")?;
        writeln!(self.output, "4. Large Dataset (100 profiles)")?;
        writeln!(self.output, "5. Custom Amount (up to {})\n", MAX_PROFILES)?;

        let choice = self.ask_number("Select profile amount (1-5): ", 1, 5)?;
        let num_profiles = match PROFILE_PRESETS.get(choice - 1) {
            Some(n) => *n,
            None => self.ask_number(&format!("Enter custom amount (1-{}): ", MAX_PROFILES), 1, MAX_PROFILES)?,
        };

        writeln!(self.output, "\n🏢 Company Amount Options:")?;
        writeln!(self.output, "1. Few Companies (3 companies)")?;
        writeln!(self.output, "2. Several Companies (5 companies)")?;
        writeln!(self.output, "3. Many Companies (10 companies)")?;
        writeln!(self.output, "4. Custom Amount\n")?;

        let choice = self.ask_number("Select company amount (1-4): ", 1, 4)?;
        let num_companies = match COMPANY_PRESETS.get(choice - 1) {
            Some(n) => *n,
            None => self.ask_number(&format!("Enter custom amount (1-{}): ", MAX_COMPANIES), 1, MAX_COMPANIES)?,
        };

        writeln!(self.output, "\n🧂 Password Hash Options:")?;
        writeln!(self.output, "1. Standard SHA-512 (No Salt)")?;
        writeln!(self.output, "2. Salted SHA-512 (More Realistic)\n")?;
        let use_salt = self.ask_number("Select hash type (1-2): ", 1, 2)? == 2;

        writeln!(
            self.output,
            "\n🔄 Generating {} profiles and {} companies...",
            num_profiles, num_companies
        )?;
        if num_profiles >= 500 {
            writeln!(self.output, "⏳ Large dataset selected - this may take a few moments...")?;
        }
        if use_salt {
            writeln!(self.output, "🧂 Using salted hashes for enhanced security training...")?;
        }

        let options = GenerationOptions { num_profiles, num_companies, use_salt };
        match DatasetBuilder::new(options).build(&mut self.synth) {
            Ok(dataset) => {
                self.dataset = dataset;
                let hash_type = if use_salt { "salted SHA-512" } else { "SHA-512" };
                writeln!(
                    self.output,
                    "✅ Successfully generated {} profiles and {} companies with {} hashes!",
                    num_profiles, num_companies, hash_type
                )?;

                if self.ask_yes_no("\n🌐 Generate HTML visualizer? (y/n): ")? {
                    self.write_html(None)?;
                }
            }
            Err(e) => writeln!(self.output, "❌ Error generating profiles: {}", e)?,
        }

        self.pause("\nPress Enter to continue...")
    }

    fn export_data_menu(&mut self) -> Result<()> {
        if self.dataset.is_empty() {
            writeln!(self.output, "❌ No profiles to export! Generate profiles first.")?;
            return self.pause("Press Enter to continue...");
        }

        self.clear()?;
        self.banner()?;
        writeln!(self.output, "💾 EXPORT DATA")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        writeln!(self.output, "1. JSON Format (Complete Data)")?;
        writeln!(self.output, "2. TXT Format (Human Readable)")?;
        writeln!(self.output, "3. CSV Format (Spreadsheet)")?;
        writeln!(self.output, "4. Hashes Only (With Usernames)")?;
        writeln!(self.output, "5. Hashcat Format (Clean Hashes Only)")?;
        writeln!(self.output, "6. Salted Hashcat Format (Hash:Salt)")?;
        writeln!(self.output, "7. Hash Reference (Hashes with Hints)")?;
        writeln!(self.output, "8. Salt Reference (Salted Hashes with Hints)")?;
        writeln!(self.output, "9. All Standard Formats")?;
        writeln!(self.output, "10. Back to Main Menu\n")?;

        let formats: Vec<ExportFormat> = match self.ask_number("Select export format (1-10): ", 1, 10)? {
            1 => vec![ExportFormat::Json],
            2 => vec![ExportFormat::Txt],
            3 => vec![ExportFormat::Csv],
            4 => vec![ExportFormat::Hashes],
            5 => vec![ExportFormat::Hashcat],
            6 => vec![ExportFormat::SaltedHashcat],
            7 => vec![ExportFormat::HashReference],
            8 => vec![ExportFormat::SaltReference],
            9 => ExportFormat::STANDARD.to_vec(),
            _ => return Ok(()),
        };

        let prefix = self.ask_line("📝 Custom filename prefix (optional): ")?;
        let prefix = Some(prefix.as_str()).filter(|p| !p.is_empty());

        let mut exported = 0;
        for format in &formats {
            match export::write_export(&self.config.output_dir, *format, prefix, &self.dataset) {
                Ok(path) => {
                    exported += 1;
                    writeln!(self.output, "✅ {} exported: {}", format_label(*format), path.display())?;
                    if format.is_hash_format() {
                        self.preview_hash_export(*format, &path)?;
                    }
                }
                Err(ExportError::NoSaltedHashes) => {
                    writeln!(self.output, "❌ {}", ExportError::NoSaltedHashes)?;
                    writeln!(self.output, "💡 Generate profiles with salt option enabled first!")?;
                }
                Err(e) => writeln!(self.output, "❌ Export error: {}", e)?,
            }
        }

        writeln!(self.output, "\n🎉 Successfully exported {} file(s)!", exported)?;

        if formats.iter().any(ExportFormat::is_hash_format) {
            writeln!(self.output, "\n⚠️  EDUCATIONAL USE ONLY")?;
            writeln!(self.output, "These hash files are for password security training and ethical testing only.")?;
            writeln!(self.output, "Use responsibly on systems you own or have explicit permission to test.")?;
        }

        self.pause("\nPress Enter to continue...")
    }

    fn preview_hash_export(&mut self, format: ExportFormat, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading back {}", path.display()))?;
        let lines = data_lines(&content);

        let (title, mode) = match format {
            ExportFormat::Hashes => ("password hashes (with usernames)", None),
            ExportFormat::Hashcat => ("clean SHA-512 hashes", Some(HashType::Sha512)),
            ExportFormat::SaltedHashcat => ("salted SHA-512 hashes", Some(HashType::Sha512Salted)),
            ExportFormat::HashReference => ("hash references", None),
            _ => ("salted hash references", None),
        };

        writeln!(self.output, "\n🔒 Generated {} {}", lines.len(), title)?;
        writeln!(self.output, "🔍 Preview (first 3 entries):")?;
        for (i, line) in lines.iter().take(3).enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, abbreviate(line))?;
        }

        if let Some(hash_type) = mode {
            writeln!(self.output, "\n💡 Hashcat Usage:")?;
            writeln!(
                self.output,
                "   hashcat -m {} {} wordlist.txt",
                hash_type.hashcat_mode(),
                path.display()
            )?;
            writeln!(
                self.output,
                "   (Mode {} = {})",
                hash_type.hashcat_mode(),
                hash_type.as_str()
            )?;
        }
        Ok(())
    }

    fn generate_html_menu(&mut self) -> Result<()> {
        if self.dataset.is_empty() {
            writeln!(self.output, "❌ No profiles to visualize! Generate profiles first.")?;
            return self.pause("Press Enter to continue...");
        }

        self.clear()?;
        self.banner()?;
        writeln!(self.output, "🌐 GENERATE HTML VISUALIZER")?;
        writeln!(self.output, "{}", "-".repeat(30))?;

        let name = self.ask_line("📝 Custom filename (optional): ")?;
        self.write_html(Some(name.as_str()).filter(|n| !n.is_empty()))?;

        self.pause("\nPress Enter to continue...")
    }

    fn write_html(&mut self, prefix: Option<&str>) -> Result<()> {
        match export::write_export(&self.config.output_dir, ExportFormat::Html, prefix, &self.dataset) {
            Ok(path) => writeln!(self.output, "📄 HTML visualizer saved as: {}", path.display())?,
            Err(e) => writeln!(self.output, "❌ Error generating HTML: {}", e)?,
        }
        Ok(())
    }

    fn generate_wordlist_menu(&mut self) -> Result<()> {
        self.clear()?;
        self.banner()?;
        writeln!(self.output, "📝 GENERATE WORDLIST")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        writeln!(self.output, "1. Generate from current profiles")?;
        writeln!(self.output, "2. Generate from existing JSON file")?;
        writeln!(self.output, "3. Back to Main Menu\n")?;

        let choice = self.ask_number("Select option (1-3): ", 1, 3)?;
        if choice == 3 {
            return Ok(());
        }

        let name = self.ask_line("📝 Custom wordlist filename (optional): ")?;
        let target = self
            .config
            .output_dir
            .join(wordlist_filename(Some(name.as_str()), Local::now()));

        let result = if choice == 1 {
            if self.dataset.is_empty() {
                writeln!(self.output, "❌ No profiles loaded! Generate profiles first.")?;
                return self.pause("Press Enter to continue...");
            }
            WordlistEngine::from_profiles(&self.dataset.profiles)
        } else {
            let source = self.ask_line("📁 Enter JSON filename: ")?;
            if source.is_empty() {
                writeln!(self.output, "❌ No filename provided!")?;
                return self.pause("Press Enter to continue...");
            }
            WordlistEngine::from_json_file(&PathBuf::from(source))
        };

        let written = result.and_then(|wordlist| {
            wordlist.write_to(&target)?;
            Ok(wordlist)
        });

        match written {
            Ok(wordlist) => self.report_wordlist(&wordlist, &target)?,
            Err(e @ WordlistError::SourceNotFound(_)) => writeln!(self.output, "❌ File error: {}", e)?,
            Err(e @ (WordlistError::NoData(_) | WordlistError::MalformedSource { .. })) => {
                writeln!(self.output, "❌ Data error: {}", e)?
            }
            Err(e) => writeln!(self.output, "❌ Unexpected error: {}", e)?,
        }

        writeln!(self.output, "\n⚠️  EDUCATIONAL USE ONLY")?;
        writeln!(self.output, "This wordlist is for password security training and ethical penetration testing.")?;
        writeln!(self.output, "Use responsibly and only on systems you own or have explicit permission to test.")?;

        self.pause("\nPress Enter to continue...")
    }

    fn report_wordlist(&mut self, wordlist: &Wordlist, path: &Path) -> Result<()> {
        writeln!(self.output, "✅ Wordlist generated: {}", path.display())?;
        writeln!(self.output, "\n📊 Generated {} unique password candidates", wordlist.len())?;
        writeln!(self.output, "🔍 Preview (first 10 entries):")?;
        for (i, entry) in wordlist.entries.iter().take(10).enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, entry)?;
        }
        if wordlist.len() > 10 {
            writeln!(self.output, "  ... and {} more entries", wordlist.len() - 10)?;
        }
        Ok(())
    }

    fn view_statistics(&mut self) -> Result<()> {
        self.clear()?;
        self.banner()?;
        writeln!(self.output, "📊 DATA STATISTICS")?;
        writeln!(self.output, "{}", "-".repeat(30))?;

        let stats = self.dataset.stats();
        writeln!(self.output, "👥 Total Profiles: {}", stats.total_profiles)?;
        writeln!(self.output, "🏢 Total Companies: {}", stats.total_companies)?;
        writeln!(self.output, "📱 Social Profiles: {}", stats.total_social_profiles)?;

        match self.dataset.profiles.first() {
            Some(sample) => {
                writeln!(self.output, "\n🔍 PROFILE BREAKDOWN")?;
                writeln!(self.output, "{}", "-".repeat(20))?;
                if let Some(avg) = stats.average_age {
                    writeln!(self.output, "📈 Average Age: {:.1} years", avg)?;
                }
                if let Some((company, count)) = &stats.most_popular_company {
                    writeln!(self.output, "🏆 Most Popular Company: {} ({} employees)", company, count)?;
                }

                writeln!(self.output, "\n👤 SAMPLE PROFILE")?;
                writeln!(self.output, "{}", "-".repeat(20))?;
                writeln!(self.output, "Name: {}", sample.full_name)?;
                writeln!(self.output, "Email: {}", sample.email)?;
                writeln!(self.output, "Company: {}", sample.company)?;
                writeln!(self.output, "City: {}", sample.city)?;
            }
            None => writeln!(self.output, "\n❌ No data available. Generate profiles first!")?,
        }

        self.pause("\nPress Enter to continue...")
    }

    fn clear_data(&mut self) -> Result<()> {
        if self.dataset.is_empty() {
            writeln!(self.output, "❌ No data to clear!")?;
            return self.pause("Press Enter to continue...");
        }

        if self.ask_yes_no("⚠️  Are you sure you want to clear all data? (y/n): ")? {
            self.dataset.clear();
            writeln!(self.output, "✅ All data cleared!")?;
        } else {
            writeln!(self.output, "❌ Clear cancelled.")?;
        }

        self.pause("Press Enter to continue...")
    }

    // ========================================================================
    // TERMINAL HELPERS
    // ========================================================================

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "🔍 OSINT PROFILE GENERATOR CLI")?;
        writeln!(self.output, "Educational Synthetic Data Generator for OSINT Training")?;
        writeln!(self.output, "{}\n", rule)?;
        Ok(())
    }

    /// Prompt and read one trimmed line; end of input is `InputClosed`
    fn ask_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompts until the answer is a number within `min..=max`
    fn ask_number(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            let answer = self.ask_line(prompt)?;
            match answer.parse::<usize>() {
                Ok(n) if n < min => writeln!(self.output, "❌ Value must be at least {}", min)?,
                Ok(n) if n > max => writeln!(self.output, "❌ Value must be no more than {}", max)?,
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "❌ Please enter a valid number")?,
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask_line(prompt)?.eq_ignore_ascii_case("y"))
    }

    fn pause(&mut self, prompt: &str) -> Result<()> {
        self.ask_line(prompt).map(|_| ())
    }
}

fn format_label(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Json => "JSON",
        ExportFormat::Txt => "TXT",
        ExportFormat::Csv => "CSV",
        ExportFormat::Html => "HTML",
        ExportFormat::Hashes => "Hashes with usernames",
        ExportFormat::Hashcat => "Hashcat format",
        ExportFormat::SaltedHashcat => "Salted Hashcat format",
        ExportFormat::HashReference => "Hash reference",
        ExportFormat::SaltReference => "Salt reference",
    }
}

/// Shortens 128-char hex hashes inside a preview line
fn abbreviate(line: &str) -> String {
    line.split(" | ")
        .map(|field| {
            field
                .split(':')
                .map(|part| {
                    if part.len() == 128 && part.chars().all(|c| c.is_ascii_hexdigit()) {
                        format!("{}...{}", &part[..20], &part[118..])
                    } else {
                        part.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(":")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, dir: &Path) -> (String, Dataset) {
        let config = AppConfig {
            output_dir: dir.to_path_buf(),
            seed: Some(42),
            reference_year: 2025,
        };
        let mut menu = Menu::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), config);
        menu.run().unwrap();
        let dataset = menu.dataset().clone();
        (String::from_utf8(menu.into_output()).unwrap(), dataset)
    }

    /// Main menu 1, 10 profiles, 3 companies, given hash choice, no HTML, pause
    fn generate(hash_choice: u8) -> String {
        format!("1\n1\n1\n{}\nn\n\n", hash_choice)
    }

    #[test]
    fn test_exit_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let (out, dataset) = run_script("7\n", dir.path());
        assert!(out.contains("📋 MAIN MENU"));
        assert!(out.contains("👋 Goodbye!"));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_end_of_input_leaves_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _) = run_script("", dir.path());
        assert!(out.contains("Select option (1-7): "));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_invalid_numbers_are_reprompted() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _) = run_script("abc\n0\n9\n7\n", dir.path());
        assert!(out.contains("❌ Please enter a valid number"));
        assert!(out.contains("❌ Value must be at least 1"));
        assert!(out.contains("❌ Value must be no more than 7"));
        assert!(out.contains("👋 Goodbye!"));
    }

    #[test]
    fn test_generate_then_wordlist_session() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("{}4\n1\nwords\n\n7\n", generate(1));
        let (out, dataset) = run_script(&script, dir.path());

        assert_eq!(dataset.profiles.len(), 10);
        assert_eq!(dataset.companies.len(), 3);
        assert!(out.contains("✅ Successfully generated 10 profiles and 3 companies with SHA-512 hashes!"));
        assert!(out.contains("unique password candidates"));
        assert!(out.contains("... and "));

        let content = fs::read_to_string(dir.path().join("words.txt")).unwrap();
        assert!(content.starts_with("# OSINT Training Wordlist"));
        assert!(content.contains("# Generated from: current session data"));
        for profile in &dataset.profiles {
            assert!(content.lines().any(|l| l == profile.password_hint));
        }
    }

    #[test]
    fn test_custom_amounts() {
        let dir = tempfile::tempdir().unwrap();
        let (_, dataset) = run_script("1\n5\n7\n4\n2\n2\nn\n\n7\n", dir.path());
        assert_eq!(dataset.profiles.len(), 7);
        assert_eq!(dataset.companies.len(), 2);
        assert_eq!(dataset.salted_profiles().count(), 7);
    }

    #[test]
    fn test_export_all_standard_formats() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("{}2\n9\ndrill\n\n7\n", generate(1));
        let (out, _) = run_script(&script, dir.path());

        assert!(out.contains("🎉 Successfully exported 3 file(s)!"));
        for name in ["drill.json", "drill.txt", "drill.csv"] {
            assert!(dir.path().join(name).exists(), "{} missing", name);
        }
        assert!(!out.contains("EDUCATIONAL USE ONLY"));
    }

    #[test]
    fn test_salted_export_on_unsalted_data_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("{}2\n6\n\n\n7\n", generate(1));
        let (out, _) = run_script(&script, dir.path());

        assert!(out.contains("💡 Generate profiles with salt option enabled first!"));
        assert!(out.contains("🎉 Successfully exported 0 file(s)!"));
        assert!(out.contains("👋 Goodbye!"));
    }

    #[test]
    fn test_salted_hashcat_export_preview() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("{}2\n6\nlab\n\n7\n", generate(2));
        let (out, _) = run_script(&script, dir.path());

        assert!(dir.path().join("lab_salted_hashcat.txt").exists());
        assert!(out.contains("🔒 Generated 10 salted SHA-512 hashes"));
        assert!(out.contains("hashcat -m 1710"));
        assert!(out.contains("EDUCATIONAL USE ONLY"));
    }

    #[test]
    fn test_export_without_data() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _) = run_script("2\n\n3\n\n7\n", dir.path());
        assert!(out.contains("❌ No profiles to export! Generate profiles first."));
        assert!(out.contains("❌ No profiles to visualize! Generate profiles first."));
    }

    #[test]
    fn test_wordlist_from_missing_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _) = run_script("4\n2\n\n/no/such/export.json\n\n7\n", dir.path());
        assert!(out.contains("❌ File error: source file '/no/such/export.json' not found"));
        assert!(out.contains("👋 Goodbye!"));
    }

    #[test]
    fn test_wordlist_from_current_without_data() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _) = run_script("4\n1\n\n\n7\n", dir.path());
        assert!(out.contains("❌ No profiles loaded! Generate profiles first."));
    }

    #[test]
    fn test_statistics_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("{}5\n\n6\nn\n\n6\ny\n\n5\n\n7\n", generate(1));
        let (out, dataset) = run_script(&script, dir.path());

        assert!(out.contains("👥 Total Profiles: 10"));
        assert!(out.contains("📈 Average Age: "));
        assert!(out.contains("🏆 Most Popular Company: "));
        assert!(out.contains("❌ Clear cancelled."));
        assert!(out.contains("✅ All data cleared!"));
        assert!(out.contains("❌ No data available. Generate profiles first!"));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_abbreviate() {
        let hash = "a".repeat(128);
        assert_eq!(abbreviate(&format!("bob:{}", hash)), format!("bob:{}...{}", "a".repeat(20), "a".repeat(10)));
        assert_eq!(abbreviate("short | line"), "short | line");
    }
}
