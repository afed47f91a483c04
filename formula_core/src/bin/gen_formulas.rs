//! Render the formula registry to `FORMULAS.md`.
//!
//! ```bash
//! cargo run --bin gen-formulas                   # write formula_core/FORMULAS.md
//! cargo run --bin gen-formulas -- docs/out.md    # write elsewhere
//! cargo run --bin gen-formulas -- --check        # exit 1 if the file is stale
//! ```
//!
//! Paths are relative to the workspace root.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use formula_core::registry::{generate_formulas_markdown, ALL_FORMULAS};

const DEFAULT_OUTPUT: &str = "formula_core/FORMULAS.md";

fn main() -> ExitCode {
    let mut check = false;
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            flag if flag.starts_with('-') => {
                eprintln!("unknown flag: {}", flag);
                return ExitCode::FAILURE;
            }
            path => output = PathBuf::from(path),
        }
    }

    let markdown = generate_formulas_markdown();

    if check {
        return match fs::read_to_string(&output) {
            Ok(current) if current == markdown => {
                println!("{} is up to date", output.display());
                ExitCode::SUCCESS
            }
            Ok(_) => {
                eprintln!("{} is stale; rerun gen-formulas", output.display());
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("cannot read {}: {}", output.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = fs::write(&output, &markdown) {
        eprintln!("cannot write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }
    println!("wrote {} formulas ({} bytes) to {}", ALL_FORMULAS.len(), markdown.len(), output.display());
    ExitCode::SUCCESS
}
