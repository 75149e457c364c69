//! Site Composer CLI
//!
//! Usage:
//!   site-composer [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list        List templates in the catalog
//!   categories  List distinct template categories
//!   show        Instantiate a template and print it as JSON
//!   lint        Check every template for data defects

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{debug, info};

use site_composer::config::LogFormat;
use site_composer::template::lint;
use site_composer::{EngineConfig, IdStrategy, SiteComposer};

#[derive(Parser)]
#[command(name = "site-composer")]
#[command(about = "Instantiate and inspect site templates")]
struct Cli {
    /// Engine configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Additional directory of template blueprints (repeatable)
    #[arg(long = "catalog", value_name = "DIR", global = true)]
    catalogs: Vec<PathBuf>,

    /// Use reproducible `prefix-N` ids
    #[arg(long, global = true)]
    sequential_ids: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List templates in the catalog
    List {
        /// Only templates in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// List distinct template categories
    Categories,
    /// Instantiate a template and print it as JSON
    Show {
        /// Template id
        id: String,
        /// Print the pages as seen in this language
        #[arg(short, long, value_name = "CODE")]
        lang: Option<String>,
    },
    /// Check every template for data defects
    Lint,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] site_composer::Error),

    #[error(transparent)]
    Config(#[from] site_composer::ConfigError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("template '{id}' does not support language '{lang}'")]
    UnsupportedLanguage { id: String, lang: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&cli, &config);

    match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Config file (if any) with command-line overrides applied
fn load_config(cli: &Cli) -> Result<EngineConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    for dir in &cli.catalogs {
        config = config.with_directory(dir);
    }
    if cli.sequential_ids {
        config = config.with_id_strategy(IdStrategy::Sequential);
    }
    if let Some(format) = cli.log_format {
        config = config.with_log_format(format.into());
    }
    Ok(config)
}

fn init_tracing(cli: &Cli, config: &EngineConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match cli.verbose {
        0 => format!("site_composer={}", config.logging.level),
        1 => "site_composer=debug".to_string(),
        _ => "site_composer=trace".to_string(),
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match config.logging.format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run(cli: &Cli, config: &EngineConfig) -> Result<ExitCode, CliError> {
    let composer = SiteComposer::from_config(config)?;
    debug!(templates = composer.registry().len(), "catalog loaded");

    match &cli.command {
        Command::List { category } => {
            let templates: Vec<_> = match category {
                Some(category) => composer.registry().in_category(category).collect(),
                None => composer.registry().iter().collect(),
            };
            for template in templates {
                println!(
                    "{:<14} {:<24} {} ({} pages)",
                    template.id, template.category, template.name, template.page_count
                );
            }
        }
        Command::Categories => {
            for category in composer.categories() {
                println!("{}", category);
            }
        }
        Command::Show { id, lang } => {
            let site = composer
                .instantiate(id)
                .ok_or_else(|| CliError::UnknownTemplate(id.clone()))?;
            let json = match lang {
                Some(lang) => {
                    let pages = site.localized(lang).ok_or_else(|| CliError::UnsupportedLanguage {
                        id: id.clone(),
                        lang: lang.clone(),
                    })?;
                    serde_json::to_string_pretty(&pages)?
                }
                None => serde_json::to_string_pretty(&site)?,
            };
            println!("{}", json);
        }
        Command::Lint => {
            let warnings = lint::check_registry(composer.registry(), composer.id_generator());
            for warning in &warnings {
                println!("{}", warning);
            }
            info!(
                templates = composer.registry().len(),
                warnings = warnings.len(),
                "lint finished"
            );
            if !warnings.is_empty() {
                return Ok(ExitCode::from(1));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
