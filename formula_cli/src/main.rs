//! # Formula CLI
//!
//! Terminal front end for `formula_core`: list the registered formulas, show
//! how a formula's symbols bind to its parameters, and evaluate one.
//!
//! ```text
//! formula_cli list
//! formula_cli show springEnergy
//! formula_cli eval gravitational_force 5.972e24 7.348e22 3.844e8
//! formula_cli eval pendulum_period          # prompts for `length`
//! formula_cli eval resistance 10 0 --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`) or
//! `--verbose` (`debug`).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formula_core::registry::VariableRole;
use formula_core::{evaluate, Evaluation, Formula};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formula_cli")]
#[command(about = "Evaluate physics and finance formulas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all formulas grouped by domain
    List,

    /// Show a formula's symbols, bindings and assumptions
    Show {
        /// Formula name (snake_case, camelCase or kebab-case)
        formula: String,

        /// Print the metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a formula; missing arguments are prompted for
    Eval {
        /// Formula name (snake_case, camelCase or kebab-case)
        formula: String,

        /// Positional arguments, in parameter order
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,

        /// Print the result (or error) as JSON only
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::List => list(),
        Commands::Show { formula, json } => show(&formula, json),
        Commands::Eval { formula, args, json } => eval(&formula, args, json),
    }
}

fn list() -> Result<()> {
    for domain in Formula::all_domains() {
        println!("{}", domain.display_name());
        for formula in Formula::in_domain(domain) {
            let meta = formula.metadata();
            println!("  {:<22} {}", formula.key(), meta.formula_plain);
        }
        println!();
    }
    Ok(())
}

fn show(name: &str, json: bool) -> Result<()> {
    let formula: Formula = name.parse()?;
    let meta = formula.metadata();

    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
    }

    println!("{} ({})", meta.name, formula.key());
    println!("  {}", meta.description);
    println!();
    println!("  Formula: {}", meta.formula_plain);
    println!();
    println!("  Symbols:");
    for var in &meta.variables {
        let binding = match var.role {
            VariableRole::Input { parameter } if parameter == var.symbol => "input".to_string(),
            VariableRole::Input { parameter } => format!("input as `{}`", parameter),
            VariableRole::Output => "result".to_string(),
            VariableRole::Constant { value } => format!("fixed at {}", value),
            VariableRole::Unsupported => "not supported".to_string(),
        };
        println!("    {:<4} {:<32} [{}] {}", var.symbol, var.description, var.units, binding);
    }
    if !meta.assumptions.is_empty() {
        println!();
        println!("  Assumptions:");
        for assumption in &meta.assumptions {
            println!("    - {}", assumption);
        }
    }
    println!();
    println!("  Source: {} in {}", meta.source_function, meta.source_module);
    Ok(())
}

fn eval(name: &str, mut args: Vec<f64>, json: bool) -> Result<()> {
    let formula: Formula = name.parse()?;
    let meta = formula.metadata();

    // Prompt for whatever was not given on the command line
    let inputs: Vec<_> = meta.inputs().collect();
    for var in inputs.iter().skip(args.len()) {
        let parameter = var.parameter().unwrap_or(var.symbol);
        let value = prompt_f64(&format!("{} ({}) [{}]: ", parameter, var.description, var.units))?;
        args.push(value);
    }

    let request = Evaluation::new(formula, args);
    tracing::debug!(formula = formula.key(), args = ?request.args, "evaluating");

    match evaluate(&request) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let symbol = meta
                    .variables
                    .iter()
                    .find(|v| v.role == VariableRole::Output)
                    .map_or("result", |v| v.symbol);
                println!("{} = {} {}", symbol, result.value, result.units);
            }
            Ok(())
        }
        Err(e) => {
            if json {
                eprintln!("{}", serde_json::to_string_pretty(&e)?);
            } else {
                eprintln!("Error [{}]: {}", e.error_code(), e);
            }
            std::process::exit(1);
        }
    }
}

fn prompt_f64(prompt: &str) -> Result<f64> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let trimmed = input.trim();
    trimmed
        .parse()
        .with_context(|| format!("'{}' is not a number", trimmed))
}
