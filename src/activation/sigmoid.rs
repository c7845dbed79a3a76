use std::f64::consts::E;

/// Logistic sigmoid, `1 / (1 + e^-x)`.
///
/// Total over the reals: large negative inputs underflow toward 0 and large
/// positive inputs round to 1. NaN passes through as NaN.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn midpoint_is_one_half() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn strictly_increasing_and_bounded() {
        let xs: Vec<f64> = (-30..=30).map(|i| i as f64 * 0.5).collect();
        for pair in xs.windows(2) {
            let (a, b) = (sigmoid(pair[0]), sigmoid(pair[1]));
            assert!(a < b, "sigmoid({}) = {a} not below sigmoid({}) = {b}", pair[0], pair[1]);
            assert!(a > 0.0 && a < 1.0);
        }
    }

    #[test]
    fn saturates_without_panicking() {
        assert_abs_diff_eq!(sigmoid(-1000.0), 0.0, epsilon = 1e-300);
        assert_eq!(sigmoid(1000.0), 1.0);
    }

    #[test]
    fn symmetric_around_midpoint() {
        for x in [0.1, 0.7, 2.5, 6.0] {
            assert_abs_diff_eq!(sigmoid(x) + sigmoid(-x), 1.0, epsilon = 1e-12);
        }
    }
}
