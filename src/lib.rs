#![forbid(unsafe_code)]

use clap::Parser;

pub mod cli;
pub mod driver;
pub mod hash;
pub mod registry;

use cli::{Outcome, exit_code};

/// Name the program announces itself under in help, usage, and error output.
pub const PROG_NAME: &str = "hash-test";

/// Main entry point that handles all errors internally and returns exit code
pub fn run() -> u8 {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage_hint();
            return exit_code(Outcome::UsageError);
        }
    };

    run_with_cli(cli)
}

/// Dispatch a parsed invocation to one of the terminal modes.
pub fn run_with_cli(cli: cli::Cli) -> u8 {
    if cli.help {
        print_help();
        return exit_code(Outcome::Success);
    }

    if cli.hashes {
        print_hash_list();
        return exit_code(Outcome::Success);
    }

    if cli.describe {
        print_operator_json();
        return exit_code(Outcome::Success);
    }

    match (&cli.input, &cli.hash_name) {
        (Some(input), Some(hash_name)) => handle_test_mode(input, hash_name),
        _ => {
            print_usage_hint();
            exit_code(Outcome::UsageError)
        }
    }
}

fn usage_line() -> String {
    format!("Use: {PROG_NAME} [option] <input-file> <hash-name>")
}

fn print_usage_hint() {
    println!("{}", usage_line());
    println!("Try: {PROG_NAME} --help");
}

fn print_help() {
    println!("{PROG_NAME} -- hash function test driver");
    println!();
    println!("{}", usage_line());
    println!();
    println!("Runs each line of <input-file> through <hash-name>; prints");
    println!("<string>    <hash>");
    println!();
    println!("Options:");
    println!("    --hashes - print the list of supported hash functions");
    println!("    --help   - print this screen");
}

fn print_hash_list() {
    for entry in registry::entries() {
        println!("{} -- {}", entry.name, entry.description);
    }
}

fn print_operator_json() {
    let operator = serde_json::json!({
        "name": PROG_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Runs each line of an input file through a named hash function",
        "hashes": registry::entries(),
        "exit_codes": {
            "0": "success",
            "1": "runtime error",
            "2": "usage error"
        }
    });

    println!("{}", serde_json::to_string_pretty(&operator).unwrap());
}

fn handle_test_mode(input: &std::path::Path, hash_name: &str) -> u8 {
    match driver::run_file(input, hash_name) {
        Ok(()) => exit_code(Outcome::Success),
        Err(err) => {
            eprintln!("{PROG_NAME}: error: {err}");
            exit_code(Outcome::RunError)
        }
    }
}
