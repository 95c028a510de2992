// tests/cli_run.rs
mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use ramos::cli::{CliArgs, Command};
use ramos::run;
use tempfile::TempDir;

type TestResult<T = ()> = Result<T, Box<dyn Error>>;

const MALLA: &str = r#"
[storage]
key = "malla"

[[course]]
id = "A"
name = "Anatomía"
semester = 1

[[course]]
id = "B"
name = "Bioquímica"
semester = 2
requires = "A"
"#;

fn write_curriculum(dir: &TempDir, contents: &str) -> TestResult<PathBuf> {
    let path = dir.path().join("Malla.toml");
    fs::write(&path, contents)?;
    Ok(path)
}

fn args(curriculum: &Path, memory: bool, command: Option<Command>) -> CliArgs {
    CliArgs {
        curriculum: curriculum.to_path_buf(),
        log_level: None,
        memory,
        command,
    }
}

fn click(ids: &[&str]) -> Option<Command> {
    Some(Command::Click {
        ids: ids.iter().map(|s| s.to_string()).collect(),
    })
}

fn stored(dir: &TempDir) -> TestResult<Vec<String>> {
    let raw = fs::read_to_string(dir.path().join(".ramos").join("malla.json"))?;
    Ok(serde_json::from_str(&raw)?)
}

#[test]
fn click_persists_next_to_the_curriculum_file() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = write_curriculum(&dir, MALLA)?;

    run(args(&path, false, click(&["B", "A", "B"])))?;

    // First B was blocked; A then B completed.
    assert_eq!(stored(&dir)?, vec!["A".to_string(), "B".to_string()]);
    Ok(())
}

#[test]
fn progress_carries_over_between_runs_and_reset_clears_it() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = write_curriculum(&dir, MALLA)?;

    run(args(&path, false, click(&["A"])))?;
    run(args(&path, false, click(&["B"])))?;
    assert_eq!(stored(&dir)?, vec!["A".to_string(), "B".to_string()]);

    run(args(&path, false, Some(Command::Reset)))?;
    assert!(stored(&dir)?.is_empty());
    Ok(())
}

#[test]
fn show_is_the_default_and_persists_the_recomputed_set() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = write_curriculum(&dir, MALLA)?;
    fs::create_dir_all(dir.path().join(".ramos"))?;
    fs::write(dir.path().join(".ramos").join("malla.json"), r#"["B"]"#)?;

    run(args(&path, false, None))?;

    // B was stored without A; the recompute on load evicts it.
    assert!(stored(&dir)?.is_empty());
    Ok(())
}

#[test]
fn check_touches_no_storage() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = write_curriculum(&dir, MALLA)?;

    run(args(&path, false, Some(Command::Check)))?;

    assert!(!dir.path().join(".ramos").exists());
    Ok(())
}

#[test]
fn memory_flag_overrides_file_mode() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = write_curriculum(&dir, MALLA)?;

    run(args(&path, true, click(&["A"])))?;

    assert!(!dir.path().join(".ramos").exists());
    Ok(())
}

#[test]
fn memory_mode_from_the_curriculum_file() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let contents = MALLA.replace("[storage]\n", "[storage]\nmode = \"memory\"\n");
    let path = write_curriculum(&dir, &contents)?;

    run(args(&path, false, click(&["A"])))?;

    assert!(!dir.path().join(".ramos").exists());
    Ok(())
}

#[test]
fn invalid_curriculum_is_a_fatal_error() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = write_curriculum(&dir, "[storage]\nkey = \"a/b\"\n\n[[course]]\nid = \"A\"\n")?;

    let err = run(args(&path, false, click(&["A"]))).unwrap_err();
    assert!(err.to_string().contains("file name"), "{err}");
    assert!(!dir.path().join(".ramos").exists());

    let missing = run(args(&dir.path().join("Nope.toml"), false, None));
    assert!(missing.is_err());
    Ok(())
}
