mod integration;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A logs root with two snapshots, `2024-01` (old) and `2024-02` (new).
pub fn two_snapshot_logs() -> TempDir {
    let root = TempDir::new().unwrap();

    write_file(
        root.path(),
        "2024-01/resolver.tsv",
        b"Name\tIP\na.com\t1.1.1.1\nb.com\t[2.2.2.2,10.0.0.1]\n",
    );
    write_file(root.path(), "2024-01/notes.txt", b"not\tdata\n");

    write_file(
        root.path(),
        "2024-02/resolver.tsv",
        b"Name\tIP\nb.com\t\"2.2.2.2\"\nc.com\t3.3.3.3\n",
    );
    write_file(root.path(), "2024-02/nested/extra.tsv", b"c.com\t10.0.0.1\nbroken\n");

    root
}
