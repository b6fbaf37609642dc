use std::collections::BTreeMap;
use std::path::Path;

use logcmp_common::category::{Category, SnapshotLabel};
use logcmp_common::error::FileError;
use tracing::info;

use crate::canonical::CanonicalSet;
use crate::compare::{self, ComparisonResult};
use crate::extract;
use crate::snapshot::Snapshot;

/// Everything a run produces.
#[derive(Debug)]
pub struct Comparison {
    pub old: Snapshot,
    pub new: Snapshot,
    pub result: ComparisonResult,
    /// Files that could not be read, old snapshot first.
    pub issues: Vec<FileError>,
    pub malformed_records: usize,
}

impl Comparison {
    /// The four snapshot sets keyed by category.
    pub fn data(&self) -> BTreeMap<Category, &CanonicalSet> {
        self.old
            .categories()
            .into_iter()
            .chain(self.new.categories())
            .collect()
    }

    /// Any category, snapshot or derived.
    pub fn get(&self, category: Category) -> &CanonicalSet {
        match category {
            Category::OldDomains => self.old.domains(),
            Category::OldIps => self.old.ips(),
            Category::NewDomains => self.new.domains(),
            Category::NewIps => self.new.ips(),
            Category::OldOnlyDomains => &self.result.old_only_domains,
            Category::NewOnlyDomains => &self.result.new_only_domains,
            Category::OldOnlyIps => &self.result.old_only_ips,
            Category::NewOnlyIps => &self.result.new_only_ips,
            Category::ConsistentDomains => &self.result.consistent_domains,
            Category::ConsistentIps => &self.result.consistent_ips,
        }
    }

    pub fn has_data_loss(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Reads both sets of files and compares them.
///
/// Both path lists are expected to be non-empty; that is checked during setup.
pub fn run<P: AsRef<Path>>(old_paths: &[P], new_paths: &[P]) -> Comparison {
    let old = extract::extract_snapshot(old_paths, SnapshotLabel::Old);
    let new = extract::extract_snapshot(new_paths, SnapshotLabel::New);

    info!(
        "Read {} old and {} new data files",
        old.files_read, new.files_read
    );

    let result = compare::compare(&old.snapshot, &new.snapshot);

    let mut issues = old.issues;
    issues.extend(new.issues);

    Comparison {
        old: old.snapshot,
        new: new.snapshot,
        result,
        issues,
        malformed_records: old.malformed_records + new.malformed_records,
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
