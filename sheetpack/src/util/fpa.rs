use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use float_cmp::F64Margin;

/// Tolerance for comparing sheet coordinates in mm.
/// Grid positions are built by repeated addition of the step, so they drift by a few ulps.
const MM_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-9,
    ulps: 4,
};

/// Millimetre value compared with [`MM_MARGIN`] tolerance.
/// Values within the margin of each other order as `Equal`.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, MM_MARGIN)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulated_grid_steps_compare_equal() {
        let walked = (0..10).fold(0.0, |acc, _| acc + 0.1);
        assert_ne!(walked, 1.0);
        assert!(FPA(walked) == FPA(1.0));
        assert!(FPA(walked) <= FPA(1.0));
        assert!(FPA(walked) >= FPA(1.0));
    }

    #[test]
    fn distinct_positions_keep_their_order() {
        assert!(FPA(4.5) < FPA(5.0));
        assert!(FPA(330.0) > FPA(329.999));
    }
}
