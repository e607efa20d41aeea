// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Byte ranges like `0-31,127` for selecting rows of the character table.

use std::num::ParseIntError;
use std::ops::{RangeFrom, RangeInclusive, RangeTo};
use std::str::FromStr;

#[derive(Debug, PartialEq)]
struct Range {
    start: Option<u8>,
    end: Option<u8>,
}

impl Range {
    fn new(start: Option<u8>, end: Option<u8>) -> Self {
        Self { start, end }
    }

    fn contains(&self, item: u8) -> bool {
        self.start.is_none_or(|start| item >= start) && self.end.is_none_or(|end| item <= end)
    }
}

impl From<RangeInclusive<u8>> for Range {
    fn from(item: RangeInclusive<u8>) -> Self {
        Self {
            start: Some(*item.start()),
            end: Some(*item.end()),
        }
    }
}

impl From<RangeFrom<u8>> for Range {
    fn from(item: RangeFrom<u8>) -> Self {
        Self {
            start: Some(item.start),
            end: None,
        }
    }
}

// The end is inclusive as well: `-4` selects 0 to 4.
impl From<RangeTo<u8>> for Range {
    fn from(item: RangeTo<u8>) -> Self {
        Self {
            start: None,
            end: Some(item.end),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Ranges(Vec<Range>);

impl Ranges {
    #[cfg(test)]
    fn new(ranges: Vec<Range>) -> Self {
        Self(ranges)
    }

    pub fn contains(&self, item: u8) -> bool {
        self.0.iter().any(|range| range.contains(item))
    }

    /// Iterate over all bytes in ascending order that are in one of the ranges.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&c| self.contains(c))
    }
}

impl Default for Ranges {
    fn default() -> Self {
        Self(vec![Range::new(None, None)])
    }
}

fn parse_bound(s: &str) -> Result<Option<u8>, ParseIntError> {
    if s.is_empty() {
        return Ok(None);
    }
    let value = match s.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16)?,
        None => s.parse()?,
    };
    Ok(Some(value))
}

impl FromStr for Ranges {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ranges = Vec::new();
        for range_str in s.split(",") {
            if let Some((start, end)) = range_str.split_once("-") {
                ranges.push(Range::new(parse_bound(start)?, parse_bound(end)?));
            } else {
                let start = parse_bound(range_str)?;
                if start.is_none() {
                    // Let the parser produce the error for the empty string.
                    range_str.parse::<u8>()?;
                }
                ranges.push(Range::new(start, start));
            }
        }
        Ok(Self(ranges))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_parse_ranges_error_single() {
        for s in ["str", "1-str", "str-5"] {
            let got = s.parse::<Ranges>().unwrap_err();
            assert_eq!(got.to_string(), "invalid digit found in string");
        }
    }

    #[test]
    fn test_parse_ranges_error_too_large() {
        let got = "0-256".parse::<Ranges>().unwrap_err();
        assert_eq!(got.to_string(), "number too large to fit in target type");
    }

    #[test]
    fn test_parse_ranges_error_empty() {
        let got = "1,".parse::<Ranges>().unwrap_err();
        assert_eq!(got.to_string(), "cannot parse integer from empty string");
    }

    #[test]
    fn test_parse_ranges_single() {
        assert_eq!("3".parse::<Ranges>(), Ok(Ranges::new(vec![(3..=3).into()])))
    }

    #[test]
    fn test_parse_ranges_hex() {
        assert_eq!(
            "0x41-0x46".parse::<Ranges>(),
            Ok(Ranges::new(vec![(0x41..=0x46).into()]))
        )
    }

    #[test]
    fn test_parse_ranges_multiple() {
        assert_eq!(
            "1,3-5".parse::<Ranges>(),
            Ok(Ranges::new(vec![(1..=1).into(), (3..=5).into()]))
        )
    }

    #[test]
    fn test_parse_ranges_open_end() {
        assert_eq!(
            "200-".parse::<Ranges>(),
            Ok(Ranges::new(vec![(200..).into()]))
        )
    }

    #[test]
    fn test_parse_ranges_open_start() {
        assert_eq!("-4".parse::<Ranges>(), Ok(Ranges::new(vec![(..4).into()])))
    }

    #[test]
    fn test_ranges_contains() {
        let ranges = "1-3,5".parse::<Ranges>().unwrap();
        assert!(ranges.contains(2));
        assert!(!ranges.contains(4));
    }

    #[test]
    fn test_ranges_bytes() {
        let ranges = "250-,5,-2,4".parse::<Ranges>().unwrap();
        let bytes: Vec<u8> = ranges.bytes().collect();
        assert_eq!(bytes, [0, 1, 2, 4, 5, 250, 251, 252, 253, 254, 255]);
    }

    #[test]
    fn test_ranges_default_covers_all_bytes() {
        assert_eq!(Ranges::default().bytes().count(), 256);
    }
}
