//! Tentative distance used by the path search.

use std::num::NonZeroU32;
use std::ops::Add;

/// Distance from the search origin, in segments.
///
/// Every finite distance orders below `Infinite`; two `Infinite` distances are equal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(super) enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl Add<NonZeroU32> for Distance {
    type Output = Distance;

    fn add(self, weight: NonZeroU32) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(weight.get()))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

#[test]
fn test_distance_order() {
    use Distance::*;
    assert!(Finite(0) < Finite(1));
    assert!(Finite(u64::MAX) < Infinite);
    assert_eq!(Infinite, Infinite);
    assert_eq!(Infinite.cmp(&Infinite), std::cmp::Ordering::Equal);
    assert_eq!(Finite(3).max(Infinite), Infinite);
}

#[test]
fn test_distance_add() {
    let w = |w: u32| NonZeroU32::new(w).expect("bad test weight");
    assert_eq!(Distance::ZERO + w(2), Distance::Finite(2));
    assert_eq!(Distance::Finite(5) + w(3), Distance::Finite(8));
    assert_eq!(Distance::Infinite + w(3), Distance::Infinite);
    assert_eq!(Distance::Finite(u64::MAX) + w(1), Distance::Finite(u64::MAX));
    assert_eq!(Distance::Finite(7).finite(), Some(7));
    assert_eq!(Distance::Infinite.finite(), None);
}
