pub const EPSILON: f64 = 1.0e-6;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, other: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

/// Rounds to the nearest whole number, half away from zero.
/// `None` for values that don't fit into an index (negative or not finite).
pub fn round_to_index(value: f64) -> Option<usize> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0. || rounded > usize::MAX as f64 {
        return None;
    }
    Some(rounded as usize)
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !$crate::math::approx_eq::ApproxEq::approx_eq(left_val, right_val) {
                    panic!(
                        "assertion `left ~= right` failed\n  left: {:?}\n right: {:?}",
                        left_val, right_val
                    );
                }
            }
        }
    };
}
