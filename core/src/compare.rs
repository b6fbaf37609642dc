//! # Set Comparator
//!
//! Computes what changed between an old and a new [`Snapshot`].
//!
//! Results are passed back through the canonical sorter, so they are ordered
//! exactly like the snapshots they came from.

use std::collections::BTreeMap;

use logcmp_common::category::{Category, CategoryKind};

use crate::canonical::{self, CanonicalSet};
use crate::snapshot::Snapshot;

/// The six derived sets of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub old_only_domains: CanonicalSet,
    pub new_only_domains: CanonicalSet,
    pub old_only_ips: CanonicalSet,
    pub new_only_ips: CanonicalSet,
    pub consistent_domains: CanonicalSet,
    pub consistent_ips: CanonicalSet,
}

impl ComparisonResult {
    pub fn get(&self, category: Category) -> Option<&CanonicalSet> {
        match category {
            Category::OldOnlyDomains => Some(&self.old_only_domains),
            Category::NewOnlyDomains => Some(&self.new_only_domains),
            Category::OldOnlyIps => Some(&self.old_only_ips),
            Category::NewOnlyIps => Some(&self.new_only_ips),
            Category::ConsistentDomains => Some(&self.consistent_domains),
            Category::ConsistentIps => Some(&self.consistent_ips),
            _ => None,
        }
    }

    pub fn categories(&self) -> [(Category, &CanonicalSet); 6] {
        [
            (Category::OldOnlyDomains, &self.old_only_domains),
            (Category::NewOnlyDomains, &self.new_only_domains),
            (Category::OldOnlyIps, &self.old_only_ips),
            (Category::NewOnlyIps, &self.new_only_ips),
            (Category::ConsistentDomains, &self.consistent_domains),
            (Category::ConsistentIps, &self.consistent_ips),
        ]
    }
}

pub fn compare(old: &Snapshot, new: &Snapshot) -> ComparisonResult {
    let mut raw: BTreeMap<Category, Vec<&str>> = BTreeMap::new();

    for kind in [CategoryKind::Domain, CategoryKind::IpAddress] {
        let (old_set, new_set) = (old.get(kind), new.get(kind));
        let (old_only, new_only, consistent) = match kind {
            CategoryKind::Domain => (
                Category::OldOnlyDomains,
                Category::NewOnlyDomains,
                Category::ConsistentDomains,
            ),
            CategoryKind::IpAddress => (
                Category::OldOnlyIps,
                Category::NewOnlyIps,
                Category::ConsistentIps,
            ),
        };

        raw.insert(old_only, old_set.difference(new_set).collect());
        raw.insert(new_only, new_set.difference(old_set).collect());
        raw.insert(consistent, old_set.intersection(new_set).collect());
    }

    let mut sorted = canonical::canonicalize_all(raw);
    let mut take = |category: Category| {
        sorted
            .remove(&category)
            .unwrap_or_else(|| CanonicalSet::empty(category.kind()))
    };

    ComparisonResult {
        old_only_domains: take(Category::OldOnlyDomains),
        new_only_domains: take(Category::NewOnlyDomains),
        old_only_ips: take(Category::OldOnlyIps),
        new_only_ips: take(Category::NewOnlyIps),
        consistent_domains: take(Category::ConsistentDomains),
        consistent_ips: take(Category::ConsistentIps),
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
