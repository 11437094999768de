use hash_test::cli::Cli;
use hash_test::run_with_cli;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_file_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    let ts_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    let counter = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "hash-test-run-{}-{ts_nanos}-{counter}.txt",
        std::process::id()
    ));
    path
}

fn base_cli() -> Cli {
    Cli {
        help: false,
        hashes: false,
        describe: false,
        input: None,
        hash_name: None,
    }
}

#[test]
fn help_short_circuits_before_test_mode() {
    let mut cli = base_cli();
    cli.help = true;
    cli.input = Some(PathBuf::from("/definitely/not/here"));
    cli.hash_name = Some("nonexistent".to_string());
    assert_eq!(run_with_cli(cli), 0);
}

#[test]
fn hash_list_short_circuits_before_test_mode() {
    let mut cli = base_cli();
    cli.hashes = true;
    cli.hash_name = Some("nonexistent".to_string());
    assert_eq!(run_with_cli(cli), 0);
}

#[test]
fn describe_short_circuits_before_test_mode() {
    let mut cli = base_cli();
    cli.describe = true;
    cli.input = Some(PathBuf::from("/definitely/not/here"));
    assert_eq!(run_with_cli(cli), 0);
}

#[test]
fn missing_positionals_are_a_usage_error() {
    assert_eq!(run_with_cli(base_cli()), 2);

    let mut only_input = base_cli();
    only_input.input = Some(PathBuf::from("words.txt"));
    assert_eq!(run_with_cli(only_input), 2);
}

#[test]
fn unknown_hash_name_is_a_runtime_error() {
    let path = temp_file_path();
    std::fs::write(&path, b"alpha\n").expect("write temp file");

    let mut cli = base_cli();
    cli.input = Some(path.clone());
    cli.hash_name = Some("nonexistent".to_string());
    assert_eq!(run_with_cli(cli), 1);

    let _ = std::fs::remove_file(path);
}

#[test]
fn unreadable_file_is_a_runtime_error() {
    let mut cli = base_cli();
    cli.input = Some(temp_file_path());
    cli.hash_name = Some("acc".to_string());
    assert_eq!(run_with_cli(cli), 1);
}

#[test]
fn test_mode_over_a_real_file_succeeds() {
    let path = temp_file_path();
    std::fs::write(&path, b"alpha\nbeta\ngamma\n").expect("write temp file");

    let mut cli = base_cli();
    cli.input = Some(path.clone());
    cli.hash_name = Some("djb2".to_string());
    assert_eq!(run_with_cli(cli), 0);

    let _ = std::fs::remove_file(path);
}
