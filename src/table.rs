//! Percentage-of-1RM training table.

use serde::Serialize;

/// Percentage of 1RM paired with the reps conventionally achievable at that load.
pub const TRAINING_SCHEDULE: [(u32, u32); 11] = [
    (100, 1),
    (95, 2),
    (90, 4),
    (85, 6),
    (80, 8),
    (75, 10),
    (70, 12),
    (65, 16),
    (60, 20),
    (55, 24),
    (50, 30),
];

/// A single row of the training table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentageRow {
    pub percentage: u32,
    pub suggested_reps: u32,
    pub derived_weight: f64,
}

/// Builds the training table for an estimated max, highest percentage first.
pub fn build_table(estimate: f64) -> Vec<PercentageRow> {
    TRAINING_SCHEDULE
        .iter()
        .map(|&(percentage, suggested_reps)| PercentageRow {
            percentage,
            suggested_reps,
            derived_weight: estimate * percentage as f64 / 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape_and_order() {
        let table = build_table(100.0);
        assert_eq!(table.len(), 11);
        assert_eq!(table[0].percentage, 100);
        assert_eq!(table[0].suggested_reps, 1);
        assert_eq!(table[10].percentage, 50);
        assert_eq!(table[10].suggested_reps, 30);
        assert!(table.windows(2).all(|w| w[0].percentage > w[1].percentage));
    }

    #[test]
    fn test_eighty_percent_of_112_5() {
        let table = build_table(112.5);
        let row = table.iter().find(|r| r.percentage == 80).unwrap();
        assert_eq!(row.suggested_reps, 8);
        assert_eq!(row.derived_weight, 90.0);
    }

    #[test]
    fn test_derived_weight_consistent_with_estimate() {
        for estimate in [0.0, 1.0, 72.5, 112.5, 103.333, 400.0] {
            for row in build_table(estimate) {
                let expected = estimate * row.percentage as f64 / 100.0;
                assert!((row.derived_weight - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_estimate_zero_rows() {
        assert!(build_table(0.0).iter().all(|r| r.derived_weight == 0.0));
    }

    #[test]
    fn test_full_row_equals_estimate() {
        assert_eq!(build_table(137.5)[0].derived_weight, 137.5);
    }
}
