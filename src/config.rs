//! Defaults and limits for the calculator inputs.

/// Quiet window before a weight or reps change is committed.
pub const DEBOUNCE_MS: u64 = 220;

// Default values for input fields
pub const DEFAULT_WEIGHT_KG: f64 = 100.0;
pub const DEFAULT_REPS: u32 = 5;
pub const DEFAULT_FORMULA: &str = "brzycki";

// Min/Max limits for input fields
pub const MIN_WEIGHT_KG: f64 = 0.0;
pub const WEIGHT_STEP_KG: f64 = 0.5;
pub const MIN_REPS: u32 = 1;
pub const MAX_REPS: u32 = 30;
