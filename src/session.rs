//! Interactive calculator session.
//!
//! Reads one command per line, routes weight and reps changes through the
//! debouncer, and re-renders the view whenever the settled inputs change.

use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::clipboard::{SHARE_PROMPT, copy_to_clipboard};
use crate::config::{MAX_REPS, MIN_REPS, MIN_WEIGHT_KG, WEIGHT_STEP_KG};
use crate::debounce::{Commit, InputDebouncer};
use crate::domain::InputState;
use crate::error::{ClipboardError, CommandError};
use crate::estimate::{coerce_number, estimate};
use crate::format::{copy_text, render_view};
use crate::formulas::Formula;
use crate::table::build_table;

/// A parsed interactive command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Weight(f64),
    Reps(u32),
    Formula(Formula),
    Copy,
    Share,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let value = parts.next();

        match name.as_str() {
            // A cleared weight field coerces to 0
            "weight" | "w" => Ok(Command::Weight(coerce_number(value.unwrap_or_default()))),
            "reps" | "r" => {
                let value = value.ok_or(CommandError::MissingValue("reps"))?;
                let reps = coerce_number(value);
                if reps.is_nan() {
                    return Err(CommandError::InvalidReps(value.to_string()));
                }
                // The slider only lands on whole reps inside its range
                Ok(Command::Reps(
                    reps.round().clamp(MIN_REPS as f64, MAX_REPS as f64) as u32,
                ))
            }
            "formula" | "f" => {
                let value = value.ok_or(CommandError::MissingValue("formula"))?;
                Ok(Command::Formula(Formula::lookup(value)))
            }
            "copy" => Ok(Command::Copy),
            "share" => Ok(Command::Share),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State of one interactive calculator view.
pub struct Session {
    /// Raw control values, updated on every command.
    input: InputState,
    /// Debounced weight/reps plus the current formula; the estimate is derived from this.
    settled: InputState,
    debouncer: InputDebouncer,
    clipboard_available: bool,
    estimate: f64,
    recomputations: usize,
}

impl Session {
    pub fn new(input: InputState, debounce: Duration, clipboard_available: bool) -> Self {
        let mut session = Self {
            input,
            settled: input,
            debouncer: InputDebouncer::new(debounce),
            clipboard_available,
            estimate: 0.0,
            recomputations: 0,
        };
        session.recompute();
        session
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn settled(&self) -> &InputState {
        &self.settled
    }

    /// Number of times the estimate has been computed, including the initial one.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    fn recompute(&mut self) {
        self.estimate = estimate(
            self.settled.weight_kg,
            self.settled.reps as f64,
            self.settled.formula,
        );
        self.recomputations += 1;
        log::debug!(
            "Recomputed 1RM: {} kg ({} x {} reps, {})",
            self.estimate,
            self.settled.weight_kg,
            self.settled.reps,
            self.settled.formula.id()
        );
    }

    /// Writes the current view: live control values beside the settled estimate.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let table = build_table(self.estimate);
        writeln!(out, "{}", render_view(&self.input, self.estimate, &table))?;
        out.flush()
    }

    /// Applies a settled input value, recomputing only when it changed.
    pub fn commit<W: Write>(&mut self, commit: Commit, out: &mut W) -> io::Result<()> {
        let changed = match commit {
            Commit::Weight(weight) => {
                // Bitwise so that NaN → NaN counts as unchanged
                let changed = weight.to_bits() != self.settled.weight_kg.to_bits();
                self.settled.weight_kg = weight;
                changed
            }
            Commit::Reps(reps) => {
                let changed = reps != self.settled.reps;
                self.settled.reps = reps;
                changed
            }
        };

        if changed {
            self.recompute();
            self.render(out)?;
        }
        Ok(())
    }

    /// Applies a parsed command.
    pub fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Weight(weight) => {
                self.input.weight_kg = weight;
                self.debouncer.push_weight(weight);
            }
            Command::Reps(reps) => {
                self.input.set_reps(reps);
                self.debouncer.push_reps(self.input.reps);
            }
            Command::Formula(formula) => {
                self.input.formula = formula;
                if self.settled.formula != formula {
                    self.settled.formula = formula;
                    self.recompute();
                    self.render(out)?;
                }
            }
            Command::Copy => self.copy(out)?,
            Command::Share => writeln!(out, "{}", SHARE_PROMPT)?,
            Command::Show => self.render(out)?,
            Command::Help => write_help(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn copy<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let text = copy_text(self.estimate);
        match copy_to_clipboard(out, &text, self.clipboard_available) {
            Ok(()) => writeln!(out, "Copied: {}", text),
            Err(ClipboardError::Unavailable) => {
                writeln!(out, "Clipboard not available, copy manually: {}", text)
            }
            Err(e) => {
                log::warn!("Clipboard copy failed: {}", e);
                writeln!(out, "Clipboard not available, copy manually: {}", text)
            }
        }
    }

    /// Parses and applies one input line. Bad commands are reported, not fatal.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<Command>() {
            Ok(command) => self.apply(command, out),
            Err(e) => {
                writeln!(out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Drops pending input so nothing commits after the view is gone.
    pub fn teardown(&mut self) {
        let canceled = self.debouncer.cancel_all();
        log::info!("Session closed ({} pending change(s) discarded)", canceled);
    }

    /// Runs the command loop until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        self.render(out)?;
        writeln!(out, "Type `help` for commands.")?;

        let result = loop {
            tokio::select! {
                line = lines.next_line() => {
                    let line = match line {
                        Ok(Some(line)) => line,
                        Ok(None) => break Ok(()),
                        Err(e) => break Err(e),
                    };
                    match self.handle_line(&line, out) {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Quit) => break Ok(()),
                        Err(e) => break Err(e),
                    }
                }
                commit = self.debouncer.settled() => {
                    if let Err(e) = self.commit(commit, out) {
                        break Err(e);
                    }
                }
            }
        };

        self.teardown();
        result
    }
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(
        out,
        "  weight <kg>     set the weight lifted (min {}, step {})",
        MIN_WEIGHT_KG, WEIGHT_STEP_KG
    )?;
    writeln!(
        out,
        "  reps <n>        set repetitions ({}-{})",
        MIN_REPS, MAX_REPS
    )?;
    let ids: Vec<&str> = Formula::all().iter().map(|f| f.id()).collect();
    writeln!(out, "  formula <id>    one of: {}", ids.join(", "))?;
    writeln!(out, "  copy            copy the estimate to the clipboard")?;
    writeln!(out, "  share           how to share the estimate")?;
    writeln!(out, "  show            print the table again")?;
    writeln!(out, "  quit            exit")
}
