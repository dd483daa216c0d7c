//! Organization Audit CLI
//!
//! Reads an employee file, prints salary and reporting-line findings to
//! stdout. Diagnostics go to stderr through `tracing`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use org_audit::{AuditConfig, AuditContext, OrganizationAnalyzer, ReportFormat, Reporter};

// ──────────────────────────────────────────────────────────────────────────────
// ARGUMENTS
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "org-audit", version)]
#[command(about = "Check manager salaries and reporting line lengths in an employee file")]
struct Args {
    /// Employee CSV: a header line, then id,firstName,lastName,salary[,managerId]
    input: Option<PathBuf>,

    /// JSON file with audit thresholds
    #[arg(long, env = "ORG_AUDIT_CONFIG")]
    config: Option<PathBuf>,

    /// Most managers allowed between an employee and the CEO
    #[arg(long, env = "ORG_AUDIT_MAX_DEPTH")]
    max_depth: Option<u32>,

    /// Lowest manager salary as a multiple of the reports' average
    #[arg(long, env = "ORG_AUDIT_MIN_MULTIPLIER")]
    min_multiplier: Option<f64>,

    /// Highest manager salary as a multiple of the reports' average
    #[arg(long, env = "ORG_AUDIT_MAX_MULTIPLIER")]
    max_multiplier: Option<f64>,

    #[arg(long, value_enum, env = "ORG_AUDIT_FORMAT", default_value_t)]
    format: ReportFormat,
}

impl Args {
    /// Defaults, then the config file, then explicit flags
    fn audit_config(&self) -> Result<AuditConfig> {
        let mut config = match &self.config {
            Some(path) => AuditConfig::load(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => AuditConfig::default(),
        };
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        if let Some(multiplier) = self.min_multiplier {
            config = config.with_min_multiplier(multiplier);
        }
        if let Some(multiplier) = self.max_multiplier {
            config = config.with_max_multiplier(multiplier);
        }
        config.validate()?;
        Ok(config)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let Some(input) = args.input.clone() else {
        error!("Usage: org-audit <path_to_csv_file>");
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::SUCCESS;
    };

    match run(&args, &input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, input: &Path) -> Result<()> {
    let config = args.audit_config()?;
    info!(
        "Auditing with salary band [{:.2}x, {:.2}x], max depth {}",
        config.salary_band.min_multiplier, config.salary_band.max_multiplier, config.max_depth
    );

    let report = OrganizationAnalyzer::new(AuditContext::new(config))
        .analyze_file(input)
        .with_context(|| format!("Failed to analyze '{}'", input.display()))?;
    info!("Data loaded successfully.");

    let stdout = io::stdout();
    Reporter::new(args.format)
        .write(&report, &mut stdout.lock())
        .context("Failed to write report")?;
    Ok(())
}
