use std::path::PathBuf;

use logcmp_common::category::Category;
use logcmp_common::error::{FileError, SetupError};
use logcmp_core::discovery::{self, LogDir};
use logcmp_core::pipeline::{self, Comparison};
use tempfile::TempDir;

use super::{two_snapshot_logs, write_file};

fn values(comparison: &Comparison, category: Category) -> Vec<String> {
    comparison.get(category).iter().map(str::to_string).collect()
}

fn run_dirs(old: &LogDir, new: &LogDir) -> Comparison {
    let old_paths: Vec<PathBuf> = discovery::require_data_files(&old.path, ".tsv").unwrap();
    let new_paths: Vec<PathBuf> = discovery::require_data_files(&new.path, ".tsv").unwrap();
    pipeline::run(&old_paths, &new_paths)
}

#[test]
fn discovery_finds_snapshots_and_data_files() {
    let root = two_snapshot_logs();

    let dirs = discovery::list_log_dirs(root.path()).unwrap();
    let names: Vec<&str> = dirs.iter().map(|dir| dir.name.as_str()).collect();
    assert_eq!(names, ["2024-01", "2024-02"]);

    let new_files: Vec<String> = discovery::data_file_paths(&dirs[1].path, ".tsv")
        .iter()
        .map(|path| discovery::display_relative(path, root.path()))
        .collect();
    assert_eq!(
        new_files,
        [
            PathBuf::from("2024-02/nested/extra.tsv").display().to_string(),
            PathBuf::from("2024-02/resolver.tsv").display().to_string(),
        ]
    );
}

#[test]
fn comparison_end_to_end() {
    let root = two_snapshot_logs();
    let dirs = discovery::list_log_dirs(root.path()).unwrap();

    let comparison = run_dirs(&dirs[0], &dirs[1]);

    assert!(!comparison.has_data_loss());
    assert_eq!(comparison.malformed_records, 1);

    assert_eq!(values(&comparison, Category::OldDomains), ["a.com", "b.com"]);
    assert_eq!(values(&comparison, Category::NewDomains), ["b.com", "c.com"]);
    assert_eq!(values(&comparison, Category::OldOnlyDomains), ["a.com"]);
    assert_eq!(values(&comparison, Category::NewOnlyDomains), ["c.com"]);
    assert_eq!(values(&comparison, Category::ConsistentDomains), ["b.com"]);

    assert_eq!(
        values(&comparison, Category::OldIps),
        ["1.1.1.1", "2.2.2.2", "10.0.0.1"]
    );
    assert_eq!(values(&comparison, Category::OldOnlyIps), ["1.1.1.1"]);
    assert_eq!(values(&comparison, Category::NewOnlyIps), ["3.3.3.3"]);
    assert_eq!(
        values(&comparison, Category::ConsistentIps),
        ["2.2.2.2", "10.0.0.1"]
    );
}

#[test]
fn comparing_a_snapshot_with_itself_has_no_differences() {
    let root = two_snapshot_logs();
    let dirs = discovery::list_log_dirs(root.path()).unwrap();

    let comparison = run_dirs(&dirs[1], &dirs[1]);

    for category in [
        Category::OldOnlyDomains,
        Category::NewOnlyDomains,
        Category::OldOnlyIps,
        Category::NewOnlyIps,
    ] {
        assert!(comparison.get(category).is_empty(), "{category} is not empty");
    }
    assert_eq!(
        values(&comparison, Category::ConsistentDomains),
        values(&comparison, Category::NewDomains)
    );
    assert_eq!(
        values(&comparison, Category::ConsistentIps),
        values(&comparison, Category::NewIps)
    );
}

#[test]
fn undecodable_file_is_reported_and_contributes_nothing() {
    let root = two_snapshot_logs();
    let bad = write_file(root.path(), "2024-02/corrupt.tsv", b"d.com\t4.4.4.4\n\xff\xfe\n");
    let dirs = discovery::list_log_dirs(root.path()).unwrap();

    let comparison = run_dirs(&dirs[0], &dirs[1]);

    assert!(comparison.has_data_loss());
    assert_eq!(comparison.issues.len(), 1);
    assert!(matches!(&comparison.issues[0], FileError::Decode { .. }));
    assert_eq!(comparison.issues[0].path(), &bad);

    assert!(!comparison.get(Category::NewDomains).contains("d.com"));
    assert!(!comparison.get(Category::NewIps).contains("4.4.4.4"));
    assert_eq!(values(&comparison, Category::NewOnlyDomains), ["c.com"]);
}

#[test]
fn empty_logs_root_is_a_setup_error() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "stray.tsv", b"a.com\t1.1.1.1\n");

    let result = discovery::list_log_dirs(root.path());
    assert!(matches!(result, Err(SetupError::NoLogDirectories(_))));
}

#[test]
fn snapshot_without_data_files_is_a_setup_error() {
    let root = two_snapshot_logs();
    write_file(root.path(), "2024-03/readme.md", b"nothing here\n");
    let dirs = discovery::list_log_dirs(root.path()).unwrap();

    let result = discovery::require_data_files(&dirs[2].path, ".tsv");
    assert!(matches!(result, Err(SetupError::NoDataFiles { .. })));
}
