//! Normalization of human-readable damage figures.
//!
//! Damage is recorded as text such as `"1.5B"` or `"200M"`, or as the fixed
//! marker [`NOT_RECORDED`]. This module turns that text into [`Damage`] values.
//!
//! # Parse Modes
//!
//! - [`NormalizeMode::Lenient`]: text without a `B`/`M` suffix becomes
//!   `Recorded(0.0)`. Callers must read such a zero as "unparsed", not as a
//!   storm that caused no damage.
//! - [`NormalizeMode::Strict`]: text without a `B`/`M` suffix is rejected with
//!   [`ParseDamageError::MalformedMagnitude`].
//!
//! In both modes a suffixed value whose number part does not parse is rejected
//! with [`ParseDamageError::InvalidNumber`].

use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Marker used in place of a damage figure that was never recorded.
pub const NOT_RECORDED: &str = "Damages not recorded";

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// A normalized damage figure in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum Damage {
    #[display("{_0}")]
    Recorded(f64),
    #[display("Damages not recorded")]
    NotRecorded,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDamageError {
    #[display("invalid damage amount '{input}'")]
    InvalidNumber { input: String },
    #[display("damage '{input}' has no recognized magnitude suffix (expected 'M' or 'B')")]
    MalformedMagnitude { input: String },
}

/// A damage figure in a sequence that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid damage at position {index}")]
pub struct NormalizeDamagesError {
    pub index: usize,
    pub source: ParseDamageError,
}

/// How unsuffixed damage text is treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Unsuffixed text silently becomes zero.
    #[default]
    Lenient,
    /// Unsuffixed text is an error.
    Strict,
}

impl Damage {
    /// Parses damage text, mapping unsuffixed text to `Recorded(0.0)`.
    pub fn parse_lenient(input: &str) -> Result<Self, ParseDamageError> {
        Self::parse(input, NormalizeMode::Lenient)
    }

    pub fn parse(input: &str, mode: NormalizeMode) -> Result<Self, ParseDamageError> {
        if input == NOT_RECORDED {
            return Ok(Damage::NotRecorded);
        }

        let multiplier = match input.chars().last() {
            Some('B') => BILLION,
            Some('M') => MILLION,
            // unsuffixed figures are unparsed, not zero damage
            Some(_) if mode == NormalizeMode::Lenient => return Ok(Damage::Recorded(0.0)),
            Some(_) => {
                return Err(ParseDamageError::MalformedMagnitude {
                    input: input.to_owned(),
                });
            }
            None => {
                return Err(ParseDamageError::InvalidNumber {
                    input: input.to_owned(),
                });
            }
        };

        let number = input[..input.len() - 1].trim();
        let value = number
            .parse::<f64>()
            .map_err(|_| ParseDamageError::InvalidNumber {
                input: input.to_owned(),
            })?;
        Ok(Damage::Recorded(value * multiplier))
    }

    #[must_use]
    pub fn is_recorded(self) -> bool {
        matches!(self, Damage::Recorded(_))
    }
}

impl FromStr for Damage {
    type Err = ParseDamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, NormalizeMode::Strict)
    }
}

impl Serialize for Damage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Damage::Recorded(value) => serializer.serialize_f64(*value),
            Damage::NotRecorded => serializer.serialize_str(NOT_RECORDED),
        }
    }
}

/// Normalizes a sequence of damage strings, keeping the input order.
///
/// Stops at the first figure that fails to parse and reports its position.
pub fn normalize_damages<I, S>(
    damages: I,
    mode: NormalizeMode,
) -> Result<Vec<Damage>, NormalizeDamagesError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    damages
        .into_iter()
        .enumerate()
        .map(|(index, damage)| {
            Damage::parse(damage.as_ref(), mode)
                .map_err(|source| NormalizeDamagesError { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_recorded(damage: Damage, expected: f64) {
        let Damage::Recorded(value) = damage else {
            panic!("expected a recorded damage, got {damage:?}");
        };
        assert!(
            (value - expected).abs() <= expected.abs() * 1e-12,
            "{value} != {expected}"
        );
    }

    #[test]
    fn test_magnitude_suffixes() {
        assert_recorded(Damage::parse_lenient("1.5B").unwrap(), 1.5e9);
        assert_recorded(Damage::parse_lenient("200M").unwrap(), 2.0e8);
        assert_recorded(Damage::parse_lenient("27.9M").unwrap(), 27.9e6);
        assert_recorded("125B".parse().unwrap(), 125e9);
    }

    #[test]
    fn test_suffix_scaling_matches_parsed_number() {
        for number in ["0.5", "1", "7.1", "91.6", "306"] {
            let n = number.parse::<f64>().unwrap();
            assert_eq!(
                Damage::parse_lenient(&format!("{number}B")).unwrap(),
                Damage::Recorded(n * 1e9)
            );
            assert_eq!(
                Damage::parse_lenient(&format!("{number}M")).unwrap(),
                Damage::Recorded(n * 1e6)
            );
        }
    }

    #[test]
    fn test_sentinel_passes_through() {
        assert_eq!(Damage::parse_lenient(NOT_RECORDED).unwrap(), Damage::NotRecorded);
        assert_eq!(NOT_RECORDED.parse::<Damage>().unwrap(), Damage::NotRecorded);
        assert_eq!(Damage::NotRecorded.to_string(), NOT_RECORDED);
    }

    #[test]
    fn test_unrecognized_suffix_becomes_zero_when_lenient() {
        // Legacy behavior: the zero here means "unparsed", not "no damage".
        assert_eq!(Damage::parse_lenient("500K").unwrap(), Damage::Recorded(0.0));
        assert_eq!(Damage::parse_lenient("1234").unwrap(), Damage::Recorded(0.0));
    }

    #[test]
    fn test_unrecognized_suffix_rejected_when_strict() {
        assert_eq!(
            "500K".parse::<Damage>(),
            Err(ParseDamageError::MalformedMagnitude {
                input: "500K".to_owned()
            })
        );
    }

    #[test]
    fn test_invalid_number_rejected() {
        for input in ["", "B", "abcM", "1.2.3B"] {
            assert!(
                matches!(
                    Damage::parse_lenient(input),
                    Err(ParseDamageError::InvalidNumber { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_keeps_length_and_order() {
        let damages =
            normalize_damages(["100M", NOT_RECORDED, "1.42B"], NormalizeMode::Lenient).unwrap();
        assert_eq!(damages.len(), 3);
        assert_recorded(damages[0], 1e8);
        assert_eq!(damages[1], Damage::NotRecorded);
        assert_recorded(damages[2], 1.42e9);
    }

    #[test]
    fn test_normalize_stops_at_first_error() {
        let err = normalize_damages(["100M", "12", "3B"], NormalizeMode::Strict).unwrap_err();
        assert_eq!(
            err,
            NormalizeDamagesError {
                index: 1,
                source: ParseDamageError::MalformedMagnitude {
                    input: "12".to_owned()
                },
            }
        );
        assert_eq!(err.to_string(), "invalid damage at position 1");
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Damage::Recorded(5e6)).unwrap(), "5000000.0");
        assert_eq!(
            serde_json::to_string(&Damage::NotRecorded).unwrap(),
            format!("\"{NOT_RECORDED}\"")
        );
    }
}
