mod cartographic;
mod epsilon;

pub use cartographic::*;
pub use epsilon::*;

/// Compares two floats with a relative and/or absolute tolerance.
///
/// When only `relative_epsilon` is given it is also used as the absolute
/// tolerance, which keeps comparisons near zero from failing spuriously.
pub fn equals_epsilon(
    left: f64,
    right: f64,
    relative_epsilon: Option<f64>,
    absolute_epsilon: Option<f64>,
) -> bool {
    let relative_epsilon = relative_epsilon.unwrap_or(0.0);
    let absolute_epsilon = absolute_epsilon.unwrap_or(relative_epsilon);
    let diff = (left - right).abs();
    diff <= absolute_epsilon || diff <= relative_epsilon * left.abs().max(right.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_epsilon_relative_and_absolute() {
        assert!(equals_epsilon(1.0, 1.0, None, None));
        assert!(equals_epsilon(1.0, 1.0 + EPSILON10, Some(EPSILON9), None));
        assert!(!equals_epsilon(1.0, 1.0 + EPSILON7, Some(EPSILON10), None));
        assert!(equals_epsilon(3000000.0, 3000000.2, Some(EPSILON7), None));
        assert!(equals_epsilon(0.0, EPSILON14, None, Some(EPSILON10)));
    }
}
