//! Normalized 1RM estimation.
//!
//! Degenerate input never fails: NaN weights or reps, and formulas that
//! produce a non-finite or non-positive value, all estimate to exactly 0.

use crate::formulas::Formula;

/// Estimates a one-rep max in kilograms.
///
/// # Returns
/// A finite value `> 0`, or exactly `0.0` when the inputs cannot produce one.
pub fn estimate(weight_kg: f64, reps: f64, formula: Formula) -> f64 {
    if weight_kg.is_nan() || reps.is_nan() {
        return 0.0;
    }

    let value = formula.apply(weight_kg, reps);
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Estimates from raw field text, coercing it like a numeric form field.
///
/// Unknown formula identifiers fall back to Brzycki.
pub fn estimate_raw(weight: &str, reps: &str, formula_id: &str) -> f64 {
    estimate(
        coerce_number(weight),
        coerce_number(reps),
        Formula::lookup(formula_id),
    )
}

/// Coerces field text to a number, the way a numeric form field does.
///
/// Blank text is 0; anything that does not parse is NaN.
pub fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}
