use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use osint_profile_gen::{
    wordlist::wordlist_filename, write_export, AppConfig, DatasetBuilder, ExportFormat,
    GenerationOptions, Menu, ProfileSynthesizer, WordlistEngine,
};

/// Educational synthetic data generator for OSINT training
#[derive(Parser, Debug)]
#[command(name = "osint-profile-gen", version, about)]
struct Cli {
    /// Directory for exports and wordlists
    #[arg(long, global = true, env = "OSINT_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Seed for reproducible datasets
    #[arg(long, global = true, env = "OSINT_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Menu,

    /// Generate a dataset and export it without prompts
    Generate {
        #[arg(long, default_value_t = 20)]
        profiles: usize,

        #[arg(long, default_value_t = 5)]
        companies: usize,

        /// Salted SHA-512 instead of plain SHA-512
        #[arg(long)]
        salt: bool,

        /// Output format; repeat for several (json, txt, csv, html, hashes,
        /// hashcat, salted-hashcat, hash-reference, salt-reference)
        #[arg(long = "format", default_value = "json")]
        formats: Vec<ExportFormat>,

        /// Filename prefix instead of the timestamped default
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Derive a password wordlist from a JSON export
    Wordlist {
        #[arg(long)]
        from_json: PathBuf,

        /// Wordlist file name (without .txt)
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::new(cli.output_dir, cli.seed);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(config),
        Command::Generate { profiles, companies, salt, formats, prefix } => {
            let options = GenerationOptions {
                num_profiles: profiles,
                num_companies: companies,
                use_salt: salt,
            };
            run_generate(&config, options, &formats, prefix.as_deref())
        }
        Command::Wordlist { from_json, output } => run_wordlist(&config, &from_json, output.as_deref()),
    }
}

fn run_menu(config: AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();

    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config).with_screen_clearing(interactive);
    if let Err(e) = menu.run() {
        eprintln!("\n❌ Unexpected error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run_generate(
    config: &AppConfig,
    options: GenerationOptions,
    formats: &[ExportFormat],
    prefix: Option<&str>,
) -> Result<()> {
    let mut synth = ProfileSynthesizer::from_seed(config.seed).with_reference_year(config.reference_year);

    println!(
        "🔄 Generating {} profiles and {} companies...",
        options.num_profiles, options.num_companies
    );
    let dataset = DatasetBuilder::new(options).build(&mut synth)?;

    for format in formats {
        let path = write_export(&config.output_dir, *format, prefix, &dataset)
            .with_context(|| format!("exporting {}", format))?;
        println!("✅ {} exported: {}", format, path.display());
    }

    Ok(())
}

fn run_wordlist(config: &AppConfig, source: &Path, output: Option<&str>) -> Result<()> {
    let wordlist = WordlistEngine::from_json_file(source)?;

    let target = config.output_dir.join(wordlist_filename(output, chrono::Local::now()));
    wordlist
        .write_to(&target)
        .with_context(|| format!("writing {}", target.display()))?;

    println!("✅ Wordlist generated: {}", target.display());
    println!("📊 {} unique password candidates", wordlist.len());

    Ok(())
}
