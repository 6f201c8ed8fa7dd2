//! Ordinal severity scales for damage and mortality.
//!
//! Both classifiers count how many ascending thresholds a value strictly
//! exceeds. A value sitting exactly on a threshold therefore falls into the
//! lower bucket:
//!
//! | Scale | Damage (US$)        | Deaths          |
//! |-------|---------------------|-----------------|
//! | 0     | ≤ 0                 | 0               |
//! | 1     | ≤ 100 million       | ≤ 100           |
//! | 2     | ≤ 1 billion         | ≤ 500           |
//! | 3     | ≤ 10 billion        | ≤ 1,000         |
//! | 4     | ≤ 50 billion        | ≤ 10,000        |
//! | 5     | > 50 billion        | > 10,000        |

use serde::{Serialize, Serializer};

use crate::damage::{Damage, NOT_RECORDED};

/// Upper bounds (inclusive) of damage scales 0 through 4.
pub const DAMAGE_THRESHOLDS: [f64; 5] = [0.0, 1e8, 1e9, 1e10, 5e10];

/// Upper bounds (inclusive) of mortality scales 0 through 4.
pub const MORTALITY_THRESHOLDS: [u32; 5] = [0, 100, 500, 1000, 10000];

/// A severity bucket from 0 to 5.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, Serialize,
)]
pub struct Scale(u8);

impl Scale {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(5);

    /// Returns the scale for `level`, or `None` if it is above 5.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Damage severity, or the not-recorded marker carried over from [`Damage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DamageScale {
    #[display("{_0}")]
    Rated(Scale),
    #[display("Damages not recorded")]
    NotRecorded,
}

impl DamageScale {
    #[must_use]
    pub fn scale(self) -> Option<Scale> {
        match self {
            DamageScale::Rated(scale) => Some(scale),
            DamageScale::NotRecorded => None,
        }
    }
}

impl Serialize for DamageScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DamageScale::Rated(scale) => scale.serialize(serializer),
            DamageScale::NotRecorded => serializer.serialize_str(NOT_RECORDED),
        }
    }
}

fn bucket<T>(value: T, thresholds: &[T; 5]) -> Scale
where
    T: PartialOrd,
{
    let mut level = 0;
    for threshold in thresholds {
        if value > *threshold {
            level += 1;
        } else {
            break;
        }
    }
    Scale(level)
}

/// Classifies a damage figure. Unrecorded damage stays unrecorded.
#[must_use]
pub fn damage_scale(damage: Damage) -> DamageScale {
    match damage {
        Damage::Recorded(value) => DamageScale::Rated(bucket(value, &DAMAGE_THRESHOLDS)),
        Damage::NotRecorded => DamageScale::NotRecorded,
    }
}

/// Classifies a death count.
#[must_use]
pub fn mortality_scale(deaths: u32) -> Scale {
    bucket(deaths, &MORTALITY_THRESHOLDS)
}

#[must_use]
pub fn damage_scales(damages: &[Damage]) -> Vec<DamageScale> {
    damages.iter().copied().map(damage_scale).collect()
}

#[must_use]
pub fn mortality_scales(deaths: &[u32]) -> Vec<Scale> {
    deaths.iter().copied().map(mortality_scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(level: u8) -> DamageScale {
        DamageScale::Rated(Scale::new(level).unwrap())
    }

    #[test]
    fn test_damage_thresholds_are_exclusive() {
        assert_eq!(damage_scale(Damage::Recorded(0.0)), rated(0));
        assert_eq!(damage_scale(Damage::Recorded(1.0)), rated(1));
        assert_eq!(damage_scale(Damage::Recorded(1e8)), rated(1));
        assert_eq!(damage_scale(Damage::Recorded(1e8 + 1.0)), rated(2));
        assert_eq!(damage_scale(Damage::Recorded(1e9)), rated(2));
        assert_eq!(damage_scale(Damage::Recorded(1e10)), rated(3));
        assert_eq!(damage_scale(Damage::Recorded(5e10)), rated(4));
        assert_eq!(damage_scale(Damage::Recorded(5e10 + 1.0)), rated(5));
        assert_eq!(damage_scale(Damage::Recorded(125e9)), rated(5));
    }

    #[test]
    fn test_negative_damage_is_scale_zero() {
        assert_eq!(damage_scale(Damage::Recorded(-10.0)), rated(0));
    }

    #[test]
    fn test_unrecorded_damage_passes_through() {
        assert_eq!(damage_scale(Damage::NotRecorded), DamageScale::NotRecorded);
        assert_eq!(DamageScale::NotRecorded.to_string(), NOT_RECORDED);
        assert_eq!(DamageScale::NotRecorded.scale(), None);
    }

    #[test]
    fn test_damage_scale_is_monotonic() {
        let mut previous = Scale::MIN;
        let mut value = 1.0;
        while value < 1e12 {
            let scale = damage_scale(Damage::Recorded(value)).scale().unwrap();
            assert!(scale >= previous, "scale dropped at {value}");
            previous = scale;
            value *= 1.7;
        }
        assert_eq!(previous, Scale::MAX);
    }

    #[test]
    fn test_mortality_thresholds_are_exclusive() {
        let cases = [
            (0, 0),
            (1, 1),
            (100, 1),
            (101, 2),
            (500, 2),
            (501, 3),
            (1000, 3),
            (1001, 4),
            (10000, 4),
            (10001, 5),
            (19325, 5),
        ];
        for (deaths, level) in cases {
            assert_eq!(mortality_scale(deaths).get(), level, "deaths = {deaths}");
        }
    }

    #[test]
    fn test_sequence_helpers() {
        let damages = [
            Damage::Recorded(5e7),
            Damage::NotRecorded,
            Damage::Recorded(2e9),
        ];
        assert_eq!(
            damage_scales(&damages),
            [rated(1), DamageScale::NotRecorded, rated(3)]
        );
        let levels = mortality_scales(&[90, 4000, 16])
            .into_iter()
            .map(Scale::get)
            .collect::<Vec<_>>();
        assert_eq!(levels, [1, 4, 1]);
    }

    #[test]
    fn test_scale_bounds() {
        assert_eq!(Scale::new(5), Some(Scale::MAX));
        assert_eq!(Scale::new(6), None);
    }
}
