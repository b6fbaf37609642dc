//! # Record Extractor
//!
//! Reads tab-separated log files and builds a [`Snapshot`] from their first
//! two columns.
//!
//! * Column 1 is the domain.
//! * Column 2 holds one or more IP addresses, possibly decorated as
//!   `[ip1,ip2]` or `"ip"`.
//!
//! Placeholder values (`Name`, `IP`, `N/A`) are dropped. Lines with fewer than
//! two fields are skipped and counted. A file that cannot be read or decoded
//! contributes nothing, and the failure is returned to the caller as a
//! possible data loss.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use logcmp_common::category::{CategoryKind, SnapshotLabel};
use logcmp_common::error::FileError;
use tracing::{debug, warn};

use crate::canonical::CanonicalSet;
use crate::snapshot::Snapshot;

/// Header and placeholder values that never count as data.
pub const SENTINELS: [&str; 3] = ["Name", "IP", "N/A"];

const FIELD_SEPARATOR: char = '\t';
const LINE_TERMINATORS: [char; 2] = ['\r', '\n'];
const IP_SEPARATOR: char = ',';
const IP_DECORATION: [char; 3] = ['[', ']', '"'];
const BYTE_ORDER_MARK: &str = "\u{feff}";

pub fn is_sentinel(value: &str) -> bool {
    SENTINELS.contains(&value)
}

/// The usable content of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub domain: Option<&'a str>,
    pub ips: Vec<&'a str>,
}

/// A line with fewer than two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedRecord {
    pub fields: usize,
}

/// Parses one line. Blank lines yield `Ok(None)`.
///
/// Fields are trimmed individually so an empty column keeps its position.
pub fn parse_record(line: &str) -> Result<Option<Record<'_>>, MalformedRecord> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line
        .trim_end_matches(LINE_TERMINATORS)
        .split(FIELD_SEPARATOR)
        .map(str::trim);
    let (Some(domain), Some(ip_field)) = (fields.next(), fields.next()) else {
        return Err(MalformedRecord { fields: 1 });
    };

    let domain = Some(domain).filter(|d| !d.is_empty() && !is_sentinel(d));

    Ok(Some(Record {
        domain,
        ips: split_ip_field(ip_field).collect(),
    }))
}

/// Splits an IP column such as `"[1.2.3.4, 5.6.7.8]"` into its addresses.
pub fn split_ip_field(field: &str) -> impl Iterator<Item = &str> {
    field
        .trim_matches(IP_DECORATION)
        .split(IP_SEPARATOR)
        .map(str::trim)
        .filter(|ip| !ip.is_empty() && !is_sentinel(ip))
}

/// Everything one file contributed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileRecords {
    pub domains: Vec<String>,
    pub ips: Vec<String>,
    /// 1-based line numbers of skipped lines.
    pub malformed_lines: Vec<usize>,
}

/// Reads a single data file.
///
/// Either the whole file is returned or none of it.
pub fn read_records(path: &Path) -> Result<FileRecords, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| FileError::Decode {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    Ok(records_from_str(&text, path))
}

fn records_from_str(text: &str, path: &Path) -> FileRecords {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut records = FileRecords::default();

    for (idx, line) in text.lines().enumerate() {
        match parse_record(line) {
            Ok(Some(record)) => {
                records.domains.extend(record.domain.map(str::to_string));
                records.ips.extend(record.ips.into_iter().map(str::to_string));
            }
            Ok(None) => {}
            Err(malformed) => {
                debug!(
                    "Skipping {}:{}: {} field(s), need at least 2",
                    path.display(),
                    idx + 1,
                    malformed.fields
                );
                records.malformed_lines.push(idx + 1);
            }
        }
    }

    records
}

/// Outcome of reading all files of one snapshot.
#[derive(Debug)]
pub struct Extraction {
    pub snapshot: Snapshot,
    /// Files whose data is missing from `snapshot`.
    pub issues: Vec<FileError>,
    pub malformed_records: usize,
    pub files_read: usize,
}

/// Builds the snapshot `label` from `paths`.
///
/// Never fails: unreadable files end up in [`Extraction::issues`].
pub fn extract_snapshot<I, P>(paths: I, label: SnapshotLabel) -> Extraction
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut domains: HashSet<String> = HashSet::new();
    let mut ips: HashSet<String> = HashSet::new();
    let mut issues: Vec<FileError> = Vec::new();
    let mut malformed_records: usize = 0;
    let mut files_read: usize = 0;

    for path in paths {
        let path = path.as_ref();
        match read_records(path) {
            Ok(records) => {
                if !records.malformed_lines.is_empty() {
                    warn!(
                        "Skipped {} malformed line(s) in {}",
                        records.malformed_lines.len(),
                        path.display()
                    );
                }
                malformed_records += records.malformed_lines.len();
                domains.extend(records.domains);
                ips.extend(records.ips);
                files_read += 1;
            }
            Err(e) => {
                warn!("POSSIBLE DATA LOSS ({label} logs) - {e}");
                issues.push(e);
            }
        }
    }

    let snapshot = Snapshot::new(
        label,
        CanonicalSet::new(CategoryKind::Domain, domains),
        CanonicalSet::new(CategoryKind::IpAddress, ips),
    );

    Extraction {
        snapshot,
        issues,
        malformed_records,
        files_read,
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
