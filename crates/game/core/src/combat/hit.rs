//! Accuracy checks.

/// An attack hits unless the `[0, 100)` roll exceeds its accuracy.
///
/// Accuracy 100 therefore never misses.
pub fn check_hit(accuracy: u32, roll: f64) -> bool {
    roll <= f64::from(accuracy)
}
