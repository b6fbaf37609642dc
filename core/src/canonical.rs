//! # Canonical Sorter
//!
//! Deduplicates and orders collections of domains and IP addresses.
//!
//! * **Domains** are ordered lexically.
//! * **IP addresses** are split into IPv4-like values (containing a `.`) and
//!   everything else. IPv4 values are ordered by their numeric segments and
//!   come first. The rest follow in lexical order.
//!
//! A dotted value whose segments are not all numeric (`1.2.x.4`) cannot be
//! keyed. It falls back to the lexical partition instead of aborting the sort.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use logcmp_common::category::{Category, CategoryKind};
use logcmp_common::error::OrderingError;
use logcmp_common::ipv4::{self, Ipv4Key};
use tracing::debug;

/// Sort key of a single value. Variant order puts IPv4 ahead of the rest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Ipv4(Ipv4Key),
    Lexical,
}

/// Errors only for IPv4-like values that cannot be keyed.
fn try_sort_key(kind: CategoryKind, value: &str) -> Result<SortKey, OrderingError> {
    if kind == CategoryKind::Domain || !ipv4::looks_like_ipv4(value) {
        return Ok(SortKey::Lexical);
    }
    Ipv4Key::parse(value).map(SortKey::Ipv4)
}

fn sort_key(kind: CategoryKind, value: &str) -> SortKey {
    try_sort_key(kind, value).unwrap_or(SortKey::Lexical)
}

/// Total order used for every collection of `kind`.
///
/// Values with equal numeric keys (`1.2.3.4` and `01.2.3.4`) are ordered by
/// their text.
pub fn canonical_cmp(kind: CategoryKind, a: &str, b: &str) -> Ordering {
    sort_key(kind, a)
        .cmp(&sort_key(kind, b))
        .then_with(|| a.cmp(b))
}

/// A deduplicated collection in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSet {
    kind: CategoryKind,
    values: Vec<String>,
}

impl CanonicalSet {
    pub fn new<I, S>(kind: CategoryKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keyed: Vec<(SortKey, String)> = values
            .into_iter()
            .map(Into::into)
            .map(|value: String| match try_sort_key(kind, &value) {
                Ok(key) => (key, value),
                Err(e) => {
                    debug!("Ordering {value} lexically: {e}");
                    (SortKey::Lexical, value)
                }
            })
            .collect();

        keyed.sort_unstable();
        keyed.dedup_by(|a, b| a.1 == b.1);

        Self {
            kind,
            values: keyed.into_iter().map(|(_, value)| value).collect(),
        }
    }

    pub fn empty(kind: CategoryKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values
            .binary_search_by(|probe| canonical_cmp(self.kind, probe, value))
            .is_ok()
    }

    /// Values of `self` that are not in `other`, unsorted.
    pub fn difference<'a>(&'a self, other: &'a CanonicalSet) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |value| !other.contains(value))
    }

    /// Values present in both sets, unsorted.
    pub fn intersection<'a>(&'a self, other: &'a CanonicalSet) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |value| other.contains(value))
    }
}

impl<'a> IntoIterator for &'a CanonicalSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Canonicalizes every collection of a mapping, keeping its keys.
///
/// The ordering of each value is taken from its category's kind.
pub fn canonicalize_all<I, S>(collections: BTreeMap<Category, I>) -> BTreeMap<Category, CanonicalSet>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    collections
        .into_iter()
        .map(|(category, values)| (category, CanonicalSet::new(category.kind(), values)))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
