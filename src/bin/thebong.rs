//! Command-line interface for thebong
//! This binary transpiles a TheBong (`.bong`) file into Python next to it.
//!
//! Usage:
//!   thebong `<path>` [-v]          - Transpile a file into its sibling `.py`
//!   thebong --list-vocabulary      - Show keyword and type tables

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use thebong::bong::loader::{output_path_for, write_output, SourceLoader};
use thebong::bong::vocabulary::Vocabulary;

fn main() {
    let matches = Command::new("thebong")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transpile TheBong (Bengali-keyword Python) into Python")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the .bong file")
                .required_unless_present("list-vocabulary")
                .index(1),
        )
        .arg(
            Arg::new("list-vocabulary")
                .long("list-vocabulary")
                .help("List the keyword and type tables in application order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-vocabulary") {
        handle_list_vocabulary_command();
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: a .bong file path is required");
        std::process::exit(2);
    };
    handle_transpile_command(path);
}

/// Route `log` output to stderr; `-v` raises the default level, `RUST_LOG` still wins
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Handle the transpile command
fn handle_transpile_command(path: &str) {
    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let python = loader.transpile().unwrap_or_else(|e| {
        eprintln!("Transpile error: {}", e);
        std::process::exit(1);
    });

    let out_path = output_path_for(Path::new(path));

    if let Err(e) = write_output(&out_path, &python) {
        eprintln!("Error writing file: {}", e);
        std::process::exit(1);
    }

    println!("✅ Transpiled {} → {}", path, out_path.display());
}

/// Handle the list-vocabulary command
fn handle_list_vocabulary_command() {
    let vocabulary = Vocabulary::bengali();
    println!("Keywords:\n");
    for mapping in vocabulary.keywords() {
        println!("  {}  →  {}", mapping.source, mapping.target);
    }
    println!("\nTypes (any of these adds the numeric import):\n");
    for mapping in vocabulary.types() {
        println!("  {}  →  {}", mapping.source, mapping.target);
    }
}
