use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;
use pretty_assertions::assert_eq;
use tally_core::models::{Tag, TimeEntry, UserId, WorkspaceId};
use tally_core::time::parse_timestamp;
use tally_core::{AnyRecord, MergeRequest, RecordKind};

use crate::cli::{Cli, Commands};
use crate::commands::completions::{run_completions, write_completions};
use crate::commands::config::apply_config_update;
use crate::commands::merge::{load_request, render_record, run_merge, MergeInput};
use crate::config::CliConfig;
use crate::error::CliError;

fn write_record(dir: &Path, name: &str, record: impl Into<AnyRecord>) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string(&record.into()).unwrap();
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn merge_input_requires_some_source() {
    assert!(matches!(
        MergeInput::from_args(None, None, Vec::new()),
        Err(CliError::MissingInput)
    ));
    assert_eq!(
        MergeInput::from_args(Some(PathBuf::from("req.json")), None, Vec::new()).unwrap(),
        MergeInput::Request(PathBuf::from("req.json"))
    );
}

#[test]
fn cli_parses_candidate_files_in_order() {
    let cli = Cli::try_parse_from([
        "tally",
        "merge",
        "--baseline",
        "base.json",
        "--candidate",
        "a.json",
        "--candidate",
        "b.json",
        "--compact",
    ])
    .unwrap();

    let Commands::Merge {
        request,
        baseline,
        candidates,
        compact,
        ..
    } = cli.command
    else {
        panic!("expected merge command");
    };
    assert_eq!(request, None);
    assert_eq!(baseline, Some(PathBuf::from("base.json")));
    assert_eq!(
        candidates,
        vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
    );
    assert!(compact);
}

#[test]
fn cli_rejects_request_with_baseline() {
    assert!(Cli::try_parse_from(["tally", "merge", "req.json", "--baseline", "b.json"]).is_err());
}

#[test]
fn load_request_from_separate_files() {
    let dir = tempfile::tempdir().unwrap();
    let workspace_id = WorkspaceId::new();
    let base = Tag::new(workspace_id, "ops");
    let mut renamed = base.clone();
    renamed.name = "operations".to_string();

    let baseline = write_record(dir.path(), "base.json", base);
    let candidate = write_record(dir.path(), "a.json", renamed.clone());

    let request = load_request(&MergeInput::Files {
        baseline,
        candidates: vec![candidate],
    })
    .unwrap();
    assert_eq!(request.candidates.len(), 1);
    assert_eq!(request.resolve().unwrap(), AnyRecord::Tag(renamed));
}

#[test]
fn load_request_reports_bad_record_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"kind": "invoice"}"#).unwrap();

    let error = load_request(&MergeInput::Files {
        baseline: path.clone(),
        candidates: Vec::new(),
    })
    .unwrap_err();
    match error {
        CliError::InvalidRecord { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn run_merge_writes_resolved_record() {
    let dir = tempfile::tempdir().unwrap();
    let workspace_id = WorkspaceId::new();
    let mut base = TimeEntry::start(workspace_id, UserId::new(), "Draft");
    base.sync.modified_at = parse_timestamp("2024-01-01T09:00:00Z").unwrap();

    let mut described = base.clone();
    described.description = "Quarterly report".to_string();
    described.sync.modified_at = parse_timestamp("2024-01-01T10:00:00Z").unwrap();
    let mut billed = base.clone();
    billed.is_billable = true;
    billed.sync.remote_rejected = true;
    billed.sync.modified_at = parse_timestamp("2024-01-01T11:00:00Z").unwrap();

    let request = MergeRequest {
        baseline: base.into(),
        candidates: vec![described.into(), billed.into()],
    };
    let request_path = dir.path().join("request.json");
    std::fs::write(&request_path, serde_json::to_string(&request).unwrap()).unwrap();
    let output_path = dir.path().join("out.json");

    run_merge(&MergeInput::Request(request_path), Some(&output_path), false).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(!written.contains('\n'));
    let AnyRecord::TimeEntry(merged) = serde_json::from_str(&written).unwrap() else {
        panic!("expected a time entry");
    };
    assert_eq!(merged.description, "Quarterly report");
    assert!(merged.is_billable);
    assert!(!merged.sync.remote_rejected);
    assert_eq!(
        merged.sync.modified_at,
        parse_timestamp("2024-01-01T11:00:00Z").unwrap()
    );
}

#[test]
fn run_merge_surfaces_kind_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let workspace_id = WorkspaceId::new();
    let baseline = write_record(dir.path(), "base.json", Tag::new(workspace_id, "ops"));
    let candidate = write_record(
        dir.path(),
        "entry.json",
        TimeEntry::start(workspace_id, UserId::new(), "x"),
    );

    let error = run_merge(
        &MergeInput::Files {
            baseline,
            candidates: vec![candidate],
        },
        None,
        true,
    )
    .unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(tally_core::Error::KindMismatch {
            expected: RecordKind::Tag,
            found: RecordKind::TimeEntry,
            index: 0,
        })
    ));
}

#[test]
fn render_record_pretty_and_compact() {
    let record = AnyRecord::from(Tag::new(WorkspaceId::new(), "ops"));
    assert!(render_record(&record, true).unwrap().contains('\n'));
    assert!(!render_record(&record, false).unwrap().contains('\n'));
}

#[test]
fn config_update_clears_blank_filter() {
    let config = CliConfig {
        log_filter: Some("tally=debug".to_string()),
        ..CliConfig::default()
    };
    let updated = apply_config_update(config, Some(false), Some("  ".to_string()));
    assert!(!updated.pretty_output);
    assert_eq!(updated.log_filter, None);
}

#[test]
fn completions_mention_binary_name() {
    let mut script = Vec::new();
    write_completions(Shell::Bash, &mut script);
    let script = String::from_utf8(script).unwrap();
    assert!(script.contains("tally"));
    assert!(script.contains("merge"));
}

#[test]
fn completions_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.fish");
    run_completions(Shell::Fish, Some(&path)).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("tally"));
}

#[test]
fn cli_parses_completion_shell() {
    let cli = Cli::try_parse_from(["tally", "completions", "zsh"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Completions {
            shell: Shell::Zsh,
            output: None
        }
    ));
}
