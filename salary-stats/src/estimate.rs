use crate::types::SalaryBounds;

const LOWER_BOUND_MARKUP: f64 = 1.2;
const UPPER_BOUND_DISCOUNT: f64 = 0.8;

/// Predict a single salary figure from the bounds a vacancy states.
///
/// With both bounds known the midpoint is used. With only one bound the
/// figure is shifted toward where real salaries tend to sit relative to a
/// stated floor or ceiling. No bounds means no estimate.
pub fn estimate_salary(bounds: &SalaryBounds) -> Option<f64> {
    match (bounds.lower, bounds.upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * LOWER_BOUND_MARKUP),
        (None, Some(upper)) => Some(upper * UPPER_BOUND_DISCOUNT),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bounds(lower: Option<f64>, upper: Option<f64>) -> SalaryBounds {
        SalaryBounds::from_reported(lower, upper)
    }

    #[test]
    fn no_bounds_gives_no_estimate() {
        assert_eq!(estimate_salary(&bounds(None, None)), None);
    }

    #[test]
    fn both_bounds_give_midpoint() {
        assert_eq!(estimate_salary(&bounds(Some(100.0), Some(200.0))), Some(150.0));
    }

    #[test]
    fn lower_bound_only_is_marked_up() {
        assert_eq!(estimate_salary(&bounds(Some(100.0), None)), Some(120.0));
    }

    #[test]
    fn upper_bound_only_is_discounted() {
        assert_eq!(estimate_salary(&bounds(None, Some(100.0))), Some(80.0));
    }

    #[test]
    fn zero_bound_counts_as_absent() {
        // 0 means "unset" on both boards, so this is an upper-bound-only
        // vacancy, not a 0..100 range.
        assert_eq!(estimate_salary(&bounds(Some(0.0), Some(100.0))), Some(80.0));
        assert_eq!(estimate_salary(&bounds(Some(0.0), Some(0.0))), None);
    }
}
