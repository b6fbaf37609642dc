//! # IPv4 Sort Key
//!
//! Dotted strings are ordered by their numeric segments rather than by their
//! text, so `2.0.0.1` comes before `10.0.0.1`.
//!
//! The key does not validate addresses. Any number of segments is accepted
//! and segments may exceed 255; only the ordering matters here.

use std::str::FromStr;

use crate::error::OrderingError;

/// Segment-wise numeric key of a dotted string.
///
/// Keys compare lexicographically by segment, so a shorter key that is a
/// prefix of a longer one sorts first (`1.2.3` < `1.2.3.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Key(Vec<u64>);

impl Ipv4Key {
    pub fn parse(value: &str) -> Result<Self, OrderingError> {
        value
            .split('.')
            .map(|segment| parse_segment(value, segment))
            .collect::<Result<Vec<u64>, _>>()
            .map(Ipv4Key)
    }

    pub fn segments(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for Ipv4Key {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Key::parse(s)
    }
}

/// Strings containing a dot are treated as IPv4, everything else as IPv6 or other.
pub fn looks_like_ipv4(value: &str) -> bool {
    value.contains('.')
}

fn parse_segment(value: &str, segment: &str) -> Result<u64, OrderingError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric(value, segment));
    }
    segment.parse::<u64>().map_err(|_| non_numeric(value, segment))
}

fn non_numeric(value: &str, segment: &str) -> OrderingError {
    OrderingError::NonNumericSegment {
        value: value.to_string(),
        segment: segment.to_string(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
