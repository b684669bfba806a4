//! One-rep max estimation formulas.

use std::str::FromStr;

use crate::error::FormulaError;

/// Regression formulas for estimating a 1RM from a sub-maximal set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Formula {
    Epley,
    #[default]
    Brzycki,
    Lombardi,
    Mayhew,
}

impl Formula {
    /// Returns all formulas in selector order.
    pub fn all() -> &'static [Formula] {
        &[
            Formula::Epley,
            Formula::Brzycki,
            Formula::Lombardi,
            Formula::Mayhew,
        ]
    }

    /// Resolves a formula identifier, falling back to Brzycki for anything unknown.
    pub fn lookup(id: &str) -> Formula {
        id.parse().unwrap_or_else(|e| {
            log::warn!("{}, using {}", e, Formula::default());
            Formula::default()
        })
    }

    /// Returns the identifier accepted by [`Formula::lookup`].
    pub fn id(&self) -> &'static str {
        match self {
            Formula::Epley => "epley",
            Formula::Brzycki => "brzycki",
            Formula::Lombardi => "lombardi",
            Formula::Mayhew => "mayhew",
        }
    }

    /// Returns the display name for the formula.
    pub fn display_name(&self) -> &'static str {
        match self {
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lombardi => "Lombardi",
            Formula::Mayhew => "Mayhew",
        }
    }

    /// Applies the formula to a weight/reps pair.
    ///
    /// Returns 0 for `reps <= 0`. Other degenerate inputs are passed through
    /// as-is (Brzycki diverges at 37 reps); use [`crate::estimate::estimate`]
    /// for a normalized result.
    ///
    /// # Arguments
    /// * `weight_kg` - Weight lifted in kilograms
    /// * `reps` - Number of repetitions performed
    pub fn apply(&self, weight_kg: f64, reps: f64) -> f64 {
        if reps <= 0.0 {
            return 0.0;
        }

        let w = weight_kg;
        let r = reps;

        match self {
            // w × (1 + r/30)
            Formula::Epley => w * (1.0 + r / 30.0),
            // w × 36 / (37 - r)
            Formula::Brzycki => w * (36.0 / (37.0 - r)),
            // w × r^0.1
            Formula::Lombardi => w * r.powf(0.1),
            // 100 × w / (52.2 + 41.9 × e^(-0.055 × r))
            Formula::Mayhew => 100.0 * w / (52.2 + 41.9 * (-0.055 * r).exp()),
        }
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "epley" => Ok(Formula::Epley),
            "brzycki" => Ok(Formula::Brzycki),
            "lombardi" => Ok(Formula::Lombardi),
            "mayhew" => Ok(Formula::Mayhew),
            _ => Err(FormulaError::Unknown(s.to_string())),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to check floating point equality with tolerance
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_epley_five_reps() {
        // 100 × (1 + 5/30) = 116.67
        assert!(approx_eq(Formula::Epley.apply(100.0, 5.0), 116.67, 0.01));
    }

    #[test]
    fn test_brzycki_five_reps() {
        // 100 × 36 / 32 = 112.5
        assert!(approx_eq(Formula::Brzycki.apply(100.0, 5.0), 112.5, 1e-9));
    }

    #[test]
    fn test_lombardi_ten_reps() {
        // 100 × 10^0.1 = 125.89
        assert!(approx_eq(Formula::Lombardi.apply(100.0, 10.0), 125.89, 0.01));
    }

    #[test]
    fn test_mayhew_five_reps() {
        // 100 × 100 / (52.2 + 41.9 × e^-0.275) = 100 × 100 / 84.02 = 119.02
        assert!(approx_eq(Formula::Mayhew.apply(100.0, 5.0), 119.02, 0.05));
    }

    #[test]
    fn test_zero_and_negative_reps_yield_zero() {
        for formula in Formula::all() {
            assert_eq!(formula.apply(100.0, 0.0), 0.0, "{formula}");
            assert_eq!(formula.apply(100.0, -3.0), 0.0, "{formula}");
        }
    }

    #[test]
    fn test_brzycki_diverges_past_37_reps() {
        assert!(Formula::Brzycki.apply(100.0, 37.0).is_infinite());
        assert!(Formula::Brzycki.apply(100.0, 40.0) < 0.0);
    }

    #[test]
    fn test_parse_known_ids() {
        assert_eq!("epley".parse::<Formula>().unwrap(), Formula::Epley);
        assert_eq!(" Mayhew ".parse::<Formula>().unwrap(), Formula::Mayhew);
        assert_eq!("LOMBARDI".parse::<Formula>().unwrap(), Formula::Lombardi);
    }

    #[test]
    fn test_parse_unknown_id_errors() {
        assert!(matches!(
            "wathan".parse::<Formula>(),
            Err(FormulaError::Unknown(id)) if id == "wathan"
        ));
    }

    #[test]
    fn test_lookup_falls_back_to_brzycki() {
        assert_eq!(Formula::lookup("wathan"), Formula::Brzycki);
        assert_eq!(Formula::lookup(""), Formula::Brzycki);
        assert_eq!(Formula::lookup("epley"), Formula::Epley);
    }

    #[test]
    fn test_ids_round_trip_through_lookup() {
        for formula in Formula::all() {
            assert_eq!(Formula::lookup(formula.id()), *formula);
        }
    }
}
