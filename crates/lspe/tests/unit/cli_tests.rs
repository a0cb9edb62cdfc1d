//! Command line tests

use clap::Parser;
use lspe::cli::{Cli, Command, OutputFormat, ValidateArgs, list_rules, render, validate};
use lspe::infrastructure::snapshot::{load_rank_set, save_game_data, save_rank_set};
use lspe::infrastructure::{EditorConfig, GameDataCatalog};
use lspe::{
    OutfitVariation, RankHierarchy, Station, StationAssignment, ValidationContext,
    ValidationService, ValidationSeverity, Vehicle,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn rank(name: &str, required_points: i32, salary: i32) -> RankHierarchy {
    RankHierarchy::new(name, required_points, salary)
        .with_id(name.to_lowercase())
        .with_station(StationAssignment::new("Mission Row"))
        .with_vehicle(Vehicle::new("police", "Police Cruiser"))
        .with_outfit("LSPD.Class A")
}

fn catalog() -> GameDataCatalog {
    GameDataCatalog::new()
        .with_station(Station::new("Mission Row", "LSPD"))
        .with_vehicle(Vehicle::new("police", "Police Cruiser"))
        .with_outfit(OutfitVariation::new("LSPD", "Class A"))
}

fn write_ranks(dir: &TempDir, ranks: &[RankHierarchy]) -> PathBuf {
    let path = dir.path().join("ranks.json");
    save_rank_set(&path, ranks).unwrap();
    path
}

fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("game-data.json");
    save_game_data(&path, &catalog()).unwrap();
    path
}

fn args(ranks: &Path) -> ValidateArgs {
    ValidateArgs {
        ranks: ranks.to_path_buf(),
        game_data: None,
        context: None,
        min_severity: None,
        format: OutputFormat::Text,
        fix: false,
        output: None,
    }
}

#[test]
fn test_parse_validate_command() {
    let cli = Cli::try_parse_from([
        "lspe",
        "validate",
        "ranks.json",
        "--context",
        "pre-generate",
        "--min-severity",
        "warning",
        "--format",
        "json",
    ])
    .unwrap();

    let Command::Validate(args) = cli.command else {
        panic!("expected validate");
    };
    assert_eq!(args.ranks, PathBuf::from("ranks.json"));
    assert_eq!(args.context, Some(ValidationContext::PreGenerate));
    assert_eq!(args.min_severity, Some(ValidationSeverity::Warning));
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn test_fix_requires_output() {
    assert!(Cli::try_parse_from(["lspe", "validate", "ranks.json", "--fix"]).is_err());
    assert!(
        Cli::try_parse_from(["lspe", "validate", "ranks.json", "--fix", "-o", "out.json"]).is_ok()
    );
}

#[test]
fn test_invalid_context_is_rejected() {
    assert!(Cli::try_parse_from(["lspe", "rules", "--context", "sometimes"]).is_err());
}

#[test]
fn test_valid_rank_set_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_ranks(&dir, &[rank("Officer", 0, 1000), rank("Detective", 250, 2000)]);

    let report = validate(&args(&path), &EditorConfig::default()).unwrap();

    assert!(!report.failed());
    assert!(report.result.is_empty());
    assert_eq!(render(&report, OutputFormat::Compact), "No issues");
}

#[test]
fn test_progression_error_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_ranks(&dir, &[rank("Officer", 0, 1000), rank("Detective", 0, 2000)]);

    let report = validate(&args(&path), &EditorConfig::default()).unwrap();

    assert!(report.failed());
    assert!(render(&report, OutputFormat::Text).contains("Errors (1):"));
}

#[test]
fn test_min_severity_hides_advisories() {
    let dir = TempDir::new().unwrap();
    let bare = RankHierarchy::new("Officer", 0, 1000)
        .with_station(StationAssignment::new("Mission Row"));
    let path = write_ranks(&dir, &[bare]);
    let mut validate_args = args(&path);

    let all = validate(&validate_args, &EditorConfig::default()).unwrap();
    validate_args.min_severity = Some(ValidationSeverity::Warning);
    let filtered = validate(&validate_args, &EditorConfig::default()).unwrap();

    assert!(all.result.has_advisories());
    assert!(filtered.result.is_empty());
}

#[test]
fn test_game_data_enables_reference_checks() {
    let dir = TempDir::new().unwrap();
    let ghost = rank("Officer", 0, 1000).with_vehicle(Vehicle::new("ghost", "Ghost Car"));
    let path = write_ranks(&dir, &[ghost]);
    let mut validate_args = args(&path);

    let without = validate(&validate_args, &EditorConfig::default()).unwrap();
    validate_args.game_data = Some(write_catalog(&dir));
    let with = validate(&validate_args, &EditorConfig::default()).unwrap();

    assert!(without.result.issues_by_category("Vehicle").is_empty());
    assert_eq!(with.result.issues_by_category("Vehicle").len(), 1);
    assert_eq!(with.unresolved_stations, 0);
}

#[test]
fn test_fix_writes_repaired_rank_set() {
    let dir = TempDir::new().unwrap();
    let ghost = rank("Officer", 0, 1000).with_vehicle(Vehicle::new("ghost", "Ghost Car"));
    let path = write_ranks(&dir, &[ghost]);
    let output = dir.path().join("fixed.json");
    let mut validate_args = args(&path);
    validate_args.game_data = Some(write_catalog(&dir));
    validate_args.fix = true;
    validate_args.output = Some(output.clone());

    let report = validate(&validate_args, &EditorConfig::default()).unwrap();
    let fixed = load_rank_set(&output).unwrap();

    assert_eq!(report.fixes_applied, 1);
    assert!(report.result.is_empty());
    assert_eq!(fixed[0].vehicles.len(), 1);
    assert_eq!(fixed[0].vehicles[0].model, "police");
    assert!(render(&report, OutputFormat::Text).starts_with("Applied 1 auto-fix(es)."));
}

#[test]
fn test_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let path = write_ranks(&dir, &[rank("Officer", 5, 1000)]);

    let report = validate(&args(&path), &EditorConfig::default()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();

    assert!(json.is_object());
    assert!(report.failed());
}

#[test]
fn test_disabled_rules_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_ranks(&dir, &[rank("Officer", 0, 1000), rank("Detective", 0, 2000)]);
    let mut config = EditorConfig::default();
    config.validation.disabled_rules = vec!["RANK_PROGRESSION".to_string()];

    let report = validate(&args(&path), &config).unwrap();

    assert!(!report.failed());
}

#[test]
fn test_missing_rank_set_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = validate(&args(&dir.path().join("absent.json")), &EditorConfig::default())
        .unwrap_err();

    assert!(err.to_string().contains("Cannot load rank set"));
}

#[test]
fn test_list_rules_by_context() {
    let service = ValidationService::new();

    let all = list_rules(&service, None);
    let advisory_only = list_rules(&service, Some(ValidationContext::AdvisoryOnly));

    assert_eq!(all.lines().count(), 4);
    assert_eq!(advisory_only.lines().count(), 1);
    assert!(advisory_only.starts_with("ADVISORY"));
}
