mod clipboard;
mod config;
mod debounce;
mod domain;
mod error;
mod estimate;
mod format;
mod formulas;
mod session;
mod table;

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::config::{DEBOUNCE_MS, DEFAULT_FORMULA, DEFAULT_REPS, DEFAULT_WEIGHT_KG};
use crate::domain::InputState;
use crate::estimate::{coerce_number, estimate_raw};
use crate::format::render_view;
use crate::formulas::Formula;
use crate::session::Session;
use crate::table::{PercentageRow, build_table};

/// One-rep max calculator with a percentage-based training table.
#[derive(Parser, Debug)]
#[command(name = "onerepmax")]
#[command(about = "Estimate a one-rep max and derive training percentages")]
#[command(version)]
struct Args {
    /// Weight lifted, in kilograms. Blank counts as 0.
    #[arg(long, env = "ONEREPMAX_WEIGHT", default_value_t = DEFAULT_WEIGHT_KG.to_string(), allow_hyphen_values = true)]
    weight: String,

    /// Repetitions performed (clamped to 1-30).
    #[arg(long, env = "ONEREPMAX_REPS", default_value_t = DEFAULT_REPS)]
    reps: u32,

    /// Estimation formula: epley, brzycki, lombardi or mayhew.
    #[arg(long, env = "ONEREPMAX_FORMULA", default_value = DEFAULT_FORMULA)]
    formula: String,

    /// Quiet period before weight/reps changes are applied, in milliseconds.
    #[arg(long, env = "ONEREPMAX_DEBOUNCE_MS", default_value_t = DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Print the view for the given inputs and exit.
    #[arg(long)]
    once: bool,

    /// Print a JSON report for the given inputs and exit.
    #[arg(long, conflicts_with = "once")]
    json: bool,
}

/// JSON report of one calculation.
#[derive(Serialize)]
struct Report {
    formula: &'static str,
    weight: f64,
    reps: u32,
    estimate: f64,
    table: Vec<PercentageRow>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let input = InputState::new(
        coerce_number(&args.weight),
        args.reps,
        Formula::lookup(&args.formula),
    );
    if input.reps != args.reps {
        log::warn!("Reps {} out of range, using {}", args.reps, input.reps);
    }

    if args.json || args.once {
        let one_rep_max = estimate_raw(&args.weight, &input.reps.to_string(), input.formula.id());
        let table = build_table(one_rep_max);

        if args.json {
            let report = Report {
                formula: input.formula.id(),
                weight: input.weight_kg,
                reps: input.reps,
                estimate: one_rep_max,
                table,
            };
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        } else {
            print!("{}", render_view(&input, one_rep_max, &table));
        }
        return Ok(());
    }

    let clipboard_available = std::io::stdout().is_terminal();
    let mut session = Session::new(
        input,
        Duration::from_millis(args.debounce_ms),
        clipboard_available,
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session
        .run(stdin, &mut stdout)
        .await
        .context("Interactive session failed")?;

    let last = session.settled();
    log::debug!(
        "Last estimate {} kg ({} x {}, {}) after {} recomputation(s)",
        session.estimate(),
        last.weight_kg,
        last.reps,
        last.formula.id(),
        session.recomputations()
    );

    Ok(())
}
