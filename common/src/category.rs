//! # Category Model
//!
//! Every collection the pipeline produces is one of ten [`Category`] values.
//! A category carries its [`CategoryKind`], which decides how its values are
//! ordered, so no caller ever has to guess from a name.

use std::fmt;

/// What a collection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryKind {
    Domain,
    IpAddress,
}

/// Which side of the comparison a snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnapshotLabel {
    Old,
    New,
}

impl SnapshotLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotLabel::Old => "old",
            SnapshotLabel::New => "new",
        }
    }

    /// The category holding this snapshot's values of `kind`.
    pub fn category(&self, kind: CategoryKind) -> Category {
        match (self, kind) {
            (SnapshotLabel::Old, CategoryKind::Domain) => Category::OldDomains,
            (SnapshotLabel::Old, CategoryKind::IpAddress) => Category::OldIps,
            (SnapshotLabel::New, CategoryKind::Domain) => Category::NewDomains,
            (SnapshotLabel::New, CategoryKind::IpAddress) => Category::NewIps,
        }
    }
}

impl fmt::Display for SnapshotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    OldDomains,
    OldIps,
    NewDomains,
    NewIps,
    OldOnlyDomains,
    NewOnlyDomains,
    OldOnlyIps,
    NewOnlyIps,
    ConsistentDomains,
    ConsistentIps,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::OldDomains,
        Category::OldIps,
        Category::NewDomains,
        Category::NewIps,
        Category::OldOnlyDomains,
        Category::NewOnlyDomains,
        Category::OldOnlyIps,
        Category::NewOnlyIps,
        Category::ConsistentDomains,
        Category::ConsistentIps,
    ];

    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::OldDomains
            | Category::NewDomains
            | Category::OldOnlyDomains
            | Category::NewOnlyDomains
            | Category::ConsistentDomains => CategoryKind::Domain,
            Category::OldIps
            | Category::NewIps
            | Category::OldOnlyIps
            | Category::NewOnlyIps
            | Category::ConsistentIps => CategoryKind::IpAddress,
        }
    }

    /// Stable machine-readable name.
    pub fn key(&self) -> &'static str {
        match self {
            Category::OldDomains => "old_domains",
            Category::OldIps => "old_ips",
            Category::NewDomains => "new_domains",
            Category::NewIps => "new_ips",
            Category::OldOnlyDomains => "old_domains_not_in_new_domains",
            Category::NewOnlyDomains => "new_domains_not_in_old_domains",
            Category::OldOnlyIps => "old_ips_not_in_new_ips",
            Category::NewOnlyIps => "new_ips_not_in_old_ips",
            Category::ConsistentDomains => "consistent_domains",
            Category::ConsistentIps => "consistent_ips",
        }
    }

    /// Heading used in reports.
    pub fn title(&self) -> &'static str {
        match self {
            Category::OldDomains => "Old Domains",
            Category::OldIps => "Old IPs",
            Category::NewDomains => "New Domains",
            Category::NewIps => "New IPs",
            Category::OldOnlyDomains => "Domains Only in Old",
            Category::NewOnlyDomains => "Domains Only in New",
            Category::OldOnlyIps => "IPs Only in Old",
            Category::NewOnlyIps => "IPs Only in New",
            Category::ConsistentDomains => "Consistent Domains",
            Category::ConsistentIps => "Consistent IPs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
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
