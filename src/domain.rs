//! Calculator input state.

use crate::config::{DEFAULT_REPS, DEFAULT_WEIGHT_KG, MAX_REPS, MIN_REPS};
use crate::formulas::Formula;

/// Current values of the calculator controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Coerced weight field value; may be NaN for unparsable text.
    pub weight_kg: f64,
    /// Slider position, always within `MIN_REPS..=MAX_REPS`.
    pub reps: u32,
    pub formula: Formula,
}

impl InputState {
    /// Creates an input state, clamping reps to the slider range.
    pub fn new(weight_kg: f64, reps: u32, formula: Formula) -> Self {
        Self {
            weight_kg,
            reps: clamp_reps(reps),
            formula,
        }
    }

    /// Moves the reps slider, clamping to its range.
    pub fn set_reps(&mut self, reps: u32) {
        self.reps = clamp_reps(reps);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT_KG, DEFAULT_REPS, Formula::default())
    }
}

/// Clamps a repetition count to the slider range.
pub fn clamp_reps(reps: u32) -> u32 {
    reps.clamp(MIN_REPS, MAX_REPS)
}
