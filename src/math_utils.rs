//! Numeric helpers shared by the calculators and their tests.

/// Assert that the deviation between two values is less than a threshold
///
/// Calculates the percentage deviation between `actual` and `expected`, then
/// asserts that this deviation is less than the specified `max_deviation`.
///
/// # Examples
/// See the test cases below for usage examples.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

const ROUNDING_SCALE: f64 = 100.0;

/// Round down to two decimal places
///
/// Used for limits such as MOD or best mix, where rounding up would report
/// a value past the safe limit.
///
/// # Examples
/// ```
/// use scuba_calc_rust::math_utils::round_floor;
///
/// assert_eq!(round_floor(33.4499), 33.44);
/// assert_eq!(round_floor(-1.001), -1.01);
/// ```
pub fn round_floor(value: f64) -> f64 {
    (value * ROUNDING_SCALE).floor() / ROUNDING_SCALE
}

/// Round up to two decimal places
///
/// # Examples
/// ```
/// use scuba_calc_rust::math_utils::round_ceil;
///
/// assert_eq!(round_ceil(2.341), 2.35);
/// ```
pub fn round_ceil(value: f64) -> f64 {
    (value * ROUNDING_SCALE).ceil() / ROUNDING_SCALE
}

/// Calculate the percentage deviation between two values
///
/// Uses the expected value as the reference (base) for the percentage calculation.
///
/// # Examples
/// ```
/// use scuba_calc_rust::math_utils::deviation;
///
/// // 105 is 5% higher than 100
/// assert_eq!(deviation(105.0, 100.0), 5.0);
///
/// // MOD of EAN32 at 1.4 bar against a table value
/// let dev = deviation(33.37, 33.4);
/// assert!(dev < 1.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}
