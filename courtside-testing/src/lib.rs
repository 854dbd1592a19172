//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Compares optional statistics: both absent, or both present and within `epsilon` of each other
/// (relative).
pub fn assert_opt_f64_relative(expected: Option<f64>, actual: Option<f64>, epsilon: f64) {
    match (expected, actual) {
        (None, None) => {}
        (Some(expected), Some(actual)) => {
            if actual != expected {
                assert_float_relative_eq!(expected, actual, epsilon);
            }
        }
        (expected, actual) => panic!("expected {expected:?}, got {actual:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_within_epsilon() {
        assert_slice_f64_relative(&[1.0, 100.0], &[1.0, 100.000_001], 1e-6);
    }

    #[test]
    #[should_panic(expected = "lengths do not match")]
    fn slices_of_different_length() {
        assert_slice_f64_relative(&[1.0], &[1.0, 2.0], 1e-6);
    }

    #[test]
    fn options() {
        assert_opt_f64_relative(None, None, 1e-6);
        assert_opt_f64_relative(Some(105.5), Some(105.5), 1e-6);
    }

    #[test]
    #[should_panic(expected = "expected None, got Some(1.0)")]
    fn option_presence_mismatch() {
        assert_opt_f64_relative(None, Some(1.0), 1e-6);
    }
}
