use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use logcmp_core::discovery;
use logcmp_core::pipeline;
use logcmp_core::report::{
    self, Include, Report, ReportContext, ReportSelection, Section, Separator,
};
use tempfile::TempDir;

use super::two_snapshot_logs;

fn context(root: &TempDir, old: &[PathBuf], new: &[PathBuf]) -> ReportContext {
    let relative = |paths: &[PathBuf]| -> Vec<String> {
        paths
            .iter()
            .map(|path| discovery::display_relative(path, root.path()))
            .collect()
    };

    ReportContext {
        old_name: "2024-01".to_string(),
        new_name: "2024-02".to_string(),
        old_files: relative(old),
        new_files: relative(new),
        generated_at: NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(16, 5, 9)
            .unwrap(),
    }
}

#[test]
fn report_is_written_to_a_new_output_directory() -> anyhow::Result<()> {
    let root = two_snapshot_logs();
    let dirs = discovery::list_log_dirs(root.path())?;
    let old = discovery::require_data_files(&dirs[0].path, ".tsv")?;
    let new = discovery::require_data_files(&dirs[1].path, ".tsv")?;

    let comparison = pipeline::run(&old, &new);
    let text = Report::build(
        &context(&root, &old, &new),
        &comparison,
        &ReportSelection::default(),
    )
    .render(Separator::Newline);

    let output = root.path().join("output").join("reports");
    let file_name = report::output_file_name("2024-01", "2024-02");
    let path = report::write_report(&output, &file_name, &text)?;

    assert_eq!(path, output.join("2024-01_2024-02.txt"));
    let written = fs::read_to_string(&path)?;
    assert_eq!(written, text);

    assert!(written.contains("Timestamp: February 29, 2024 at 04:05:09 PM\n"));
    assert!(written.contains("Output: Domains and IPs (All Old/New Data, Similarities, Differences)\n"));
    assert!(written.contains("Consistent IPs (2)\n"));
    assert!(written.contains("\n2.2.2.2\n10.0.0.1\n"));
    assert!(written.contains("Domains Only in Old (1)\n"));
    Ok(())
}

#[test]
fn report_honours_the_selection() -> anyhow::Result<()> {
    let root = two_snapshot_logs();
    let dirs = discovery::list_log_dirs(root.path())?;
    let old = discovery::require_data_files(&dirs[0].path, ".tsv")?;
    let new = discovery::require_data_files(&dirs[1].path, ".tsv")?;
    let comparison = pipeline::run(&old, &new);

    let selection = ReportSelection {
        include: Include::Ips,
        sections: BTreeSet::from([Section::Differences]),
    };
    let text = Report::build(&context(&root, &old, &new), &comparison, &selection)
        .render(Separator::Comma);

    assert!(text.contains("Output: IPs (Differences)\n"));
    assert!(text.contains("IPs Only in Old (1)\n"));
    assert!(text.contains("IPs Only in New (1)\n"));
    assert!(!text.contains("Domains Only"));
    assert!(!text.contains("Consistent"));
    assert!(!text.contains("a.com"));
    Ok(())
}
