//! Display formatting for estimates and the training table.

use std::fmt::Write as _;

use crate::domain::InputState;
use crate::table::PercentageRow;

/// Placeholder shown instead of a zero estimate.
pub const NO_VALUE: &str = "—";

const BAR_WIDTH: usize = 20;

/// Formats a weight for display.
///
/// Exactly zero (and anything non-finite) renders as [`NO_VALUE`]. Other
/// values are rounded to one decimal and grouped by thousands; whole numbers
/// drop the decimal.
pub fn format_kg(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return NO_VALUE.to_string();
    }

    // Half rounds up, not away from zero. Past 1e15 there is no fraction left
    let rounded = if value.abs() >= 1e15 {
        value
    } else {
        (value * 10.0 + 0.5).floor() / 10.0
    };
    let text = format!("{:.1}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if frac_part != "0" {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Returns "1 rep" or "N reps".
pub fn rep_label(reps: u32) -> String {
    if reps > 1 {
        format!("{} reps", reps)
    } else {
        format!("{} rep", reps)
    }
}

/// Text placed on the clipboard by the copy action.
pub fn copy_text(estimate: f64) -> String {
    format!("{} kg", format_kg(estimate))
}

/// Renders the full calculator view.
pub fn render_view(input: &InputState, estimate: f64, table: &[PercentageRow]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Estimated 1-Rep Max: {}", copy_text(estimate));
    let _ = writeln!(
        out,
        "Formula: {}   Weight: {} kg   Reps: {}",
        input.formula,
        format_kg(input.weight_kg),
        rep_label(input.reps)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Percentage of 1RM");

    for row in table {
        let filled = (row.percentage as usize * BAR_WIDTH).div_ceil(100);
        let _ = writeln!(
            out,
            "  {:>4} — {:<8} {:>10} kg  {}{}",
            format!("{}%", row.percentage),
            rep_label(row.suggested_reps),
            format_kg(row.derived_weight),
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Notes");
    let _ = writeln!(out, "  - Estimates are approximations; individual variance exists.");
    let _ = writeln!(
        out,
        "  - Use lower reps/weights and proper warm-up when testing maxes."
    );
    out
}
