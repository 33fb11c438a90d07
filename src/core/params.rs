use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::GroupingMode;

/// Number of input lines per group. Always at least 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSize(NonZeroUsize);

impl GroupSize {
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(GroupSize)
            .ok_or_else(|| Error::ZeroGroupSize {
                value: size.to_string(),
            })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for GroupSize {
    type Err = Error;

    /// Parses a base-10 integer with an optional sign. Zero and negative values
    /// are reported as out of range rather than as malformed; positive values
    /// beyond `usize::MAX` saturate.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidGroupSize {
                value: s.to_string(),
            });
        }
        if negative || digits.bytes().all(|b| b == b'0') {
            return Err(Error::ZeroGroupSize {
                value: trimmed.to_string(),
            });
        }

        GroupSize::new(digits.parse::<usize>().unwrap_or(usize::MAX))
    }
}

impl std::fmt::Display for GroupSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grouping parameters, recorded verbatim in run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingParams {
    pub group_size: GroupSize,
    #[serde(default)]
    pub mode: GroupingMode,
}

impl GroupingParams {
    pub fn new(group_size: GroupSize) -> Self {
        Self {
            group_size,
            mode: GroupingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: GroupingMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!("3".parse::<GroupSize>().unwrap().get(), 3);
        assert_eq!(" 12\n".parse::<GroupSize>().unwrap().get(), 12);
    }

    #[test]
    fn test_parse_zero_and_negative_rejected() {
        for input in ["0", "-0", "000", "-3", "-99999999999999999999"] {
            match input.parse::<GroupSize>() {
                Err(Error::ZeroGroupSize { value }) => assert_eq!(value, input),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_oversized_integer_saturates() {
        let size: GroupSize = "18446744073709551616".parse().unwrap();
        assert_eq!(size.get(), usize::MAX);
        let size: GroupSize = "99999999999999999999999999".parse().unwrap();
        assert_eq!(size.get(), usize::MAX);
        assert_eq!("+7".parse::<GroupSize>().unwrap().get(), 7);
    }

    #[test]
    fn test_parse_non_integer_rejected() {
        for input in ["", "-", "+", "abc", "2.5", "0x10", "3 lines", "--3", "1_000"] {
            let err = input.parse::<GroupSize>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidGroupSize { .. }),
                "{input:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(GroupSize::new(0).is_err());
        assert_eq!(GroupSize::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_params_json_shape() {
        let params = GroupingParams::new(GroupSize::new(4).unwrap()).with_mode(GroupingMode::Flush);
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(json, serde_json::json!({ "group_size": 4, "mode": "flush" }));

        let back: GroupingParams = serde_json::from_str(r#"{"group_size": 2}"#).unwrap();
        assert_eq!(back.mode, GroupingMode::Faithful);
        assert!(serde_json::from_str::<GroupingParams>(r#"{"group_size": 0}"#).is_err());
    }
}
