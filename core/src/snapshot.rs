use logcmp_common::category::{Category, CategoryKind, SnapshotLabel};

use crate::canonical::CanonicalSet;

/// The canonical domains and IPs of one side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    label: SnapshotLabel,
    domains: CanonicalSet,
    ips: CanonicalSet,
}

impl Snapshot {
    /// # Panics
    ///
    /// Panics in debug builds if a set's kind does not match its slot.
    pub fn new(label: SnapshotLabel, domains: CanonicalSet, ips: CanonicalSet) -> Self {
        debug_assert_eq!(domains.kind(), CategoryKind::Domain);
        debug_assert_eq!(ips.kind(), CategoryKind::IpAddress);
        Self { label, domains, ips }
    }

    pub fn label(&self) -> SnapshotLabel {
        self.label
    }

    pub fn domains(&self) -> &CanonicalSet {
        &self.domains
    }

    pub fn ips(&self) -> &CanonicalSet {
        &self.ips
    }

    pub fn get(&self, kind: CategoryKind) -> &CanonicalSet {
        match kind {
            CategoryKind::Domain => &self.domains,
            CategoryKind::IpAddress => &self.ips,
        }
    }

    /// Both sets, keyed by their category (`OldDomains`, `OldIps`, ...).
    pub fn categories(&self) -> [(Category, &CanonicalSet); 2] {
        [
            (self.label.category(CategoryKind::Domain), &self.domains),
            (self.label.category(CategoryKind::IpAddress), &self.ips),
        ]
    }
}
