//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lspe validate <RANKS>` | Validate a rank set snapshot, optionally applying auto-fixes |
//! | `lspe rules` | List the registered validation rules |

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lspe_domain::ReferenceDataProvider;
use lspe_infrastructure::EditorConfig;
use lspe_infrastructure::link_station_references;
use lspe_infrastructure::snapshot::{load_game_data, load_rank_set, save_rank_set};
use lspe_validate::{ValidationContext, ValidationResult, ValidationService, ValidationSeverity};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Command line interface for the LSPDFR Enhanced rank editor
#[derive(Parser, Debug)]
#[command(name = "lspe")]
#[command(about = "LSPDFR Enhanced rank configuration validator")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a rank set snapshot
    Validate(ValidateArgs),

    /// List registered validation rules
    Rules {
        /// Only rules that run in this context
        #[arg(long)]
        context: Option<ValidationContext>,
    },
}

/// Arguments of `lspe validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Rank set JSON file
    pub ranks: PathBuf,

    /// Game data JSON file used for reference checks
    #[arg(long)]
    pub game_data: Option<PathBuf>,

    /// Validation context (defaults to the configured one)
    #[arg(long)]
    pub context: Option<ValidationContext>,

    /// Least severe level to report: error, warning or advisory
    #[arg(long)]
    pub min_severity: Option<ValidationSeverity>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Apply every available auto-fix and write the result to `--output`
    #[arg(long, requires = "output")]
    pub fix: bool,

    /// Where the fixed rank set is written
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report rendering
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-line report grouped by severity
    Text,
    /// One line of counts
    Compact,
    /// Pretty JSON
    Json,
}

/// What a validation run produced
#[derive(Debug)]
pub struct ValidationReport {
    /// Issues at or above the requested severity, after any fixes
    pub result: ValidationResult,
    /// Auto-fixes applied
    pub fixes_applied: usize,
    /// Station assignments the game data did not resolve
    pub unresolved_stations: usize,
}

impl ValidationReport {
    /// Whether the run should fail the process
    pub fn failed(&self) -> bool {
        self.result.has_errors()
    }
}

/// Validation service with the configured rules removed
pub fn build_service(config: &EditorConfig) -> ValidationService {
    let mut service = ValidationService::new();
    config.validation.apply(&mut service);
    service
}

/// Run `lspe validate`
pub fn validate(args: &ValidateArgs, config: &EditorConfig) -> Result<ValidationReport> {
    let mut ranks = load_rank_set(&args.ranks)
        .with_context(|| format!("Cannot load rank set {}", args.ranks.display()))?;
    let mut service = build_service(config);

    let mut unresolved_stations = 0;
    if let Some(path) = &args.game_data {
        let catalog = load_game_data(path)
            .with_context(|| format!("Cannot load game data {}", path.display()))?;
        unresolved_stations = link_station_references(&mut ranks, &catalog);
        if unresolved_stations > 0 {
            warn!(unresolved_stations, "Some station assignments are not in the game data");
        }
        let provider: Arc<dyn ReferenceDataProvider> = Arc::new(catalog);
        service.set_data_provider(Some(provider));
    }

    let context = args.context.unwrap_or(config.validation.context);
    let minimum = args.min_severity.unwrap_or(config.validation.minimum_severity);
    let mut result = service.validate_ranks(&ranks, context);

    let mut fixes_applied = 0;
    if args.fix
        && let Some(output) = &args.output
    {
        fixes_applied = result.apply_auto_fixes(&mut ranks)?;
        save_rank_set(output, &ranks)
            .with_context(|| format!("Cannot write fixed rank set {}", output.display()))?;
        info!(fixes_applied, output = %output.display(), "Wrote fixed rank set");
        result = service.validate_ranks(&ranks, context);
    }

    Ok(ValidationReport {
        result: result.filter_by_severity(minimum),
        fixes_applied,
        unresolved_stations,
    })
}

/// Render a report in the requested format
pub fn render(report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            if report.fixes_applied > 0 {
                let _ = writeln!(output, "Applied {} auto-fix(es).", report.fixes_applied);
            }
            output.push_str(&report.result.summary());
            output
        }
        OutputFormat::Compact => report.result.compact_summary(),
        OutputFormat::Json => report.result.to_json(),
    }
}

/// One line per rule: id, name and contexts
pub fn list_rules(service: &ValidationService, context: Option<ValidationContext>) -> String {
    let rules = match context {
        Some(context) => service.rules_for_context(context),
        None => service.registered_rules(),
    };

    let mut output = String::new();
    for rule in rules {
        let contexts: Vec<String> = rule
            .applicable_contexts()
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(
            output,
            "{:<22} {:<20} {}",
            rule.rule_id(),
            rule.rule_name(),
            contexts.join(", ")
        );
    }
    output
}

/// Dispatch a parsed command line; returns whether the run succeeded
pub fn run(cli: &Cli, config: &EditorConfig) -> Result<bool> {
    match &cli.command {
        Command::Validate(args) => {
            let report = validate(args, config)?;
            println!("{}", render(&report, args.format));
            Ok(!report.failed())
        }
        Command::Rules { context } => {
            print!("{}", list_rules(&build_service(config), *context));
            Ok(true)
        }
    }
}
