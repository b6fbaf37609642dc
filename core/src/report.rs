//! # Report
//!
//! Turns a [`Comparison`] into the flat text report handed to the operator.
//!
//! The operator picks which record kinds to include ([`Include`]) and which
//! parts of the comparison to show ([`Section`]). Values are written either
//! one per line or comma separated ([`Separator`]).
//!
//! Every selection type parses from the numeric IDs shown in prompts as well
//! as from plain names, so prompts and command-line flags share one parser.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDateTime;
use logcmp_common::category::{Category, CategoryKind};
use logcmp_common::error::SelectionError;

use crate::canonical::CanonicalSet;
use crate::pipeline::Comparison;

pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M:%S %p";
const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Include {
    Domains,
    Ips,
    #[default]
    Both,
}

impl Include {
    pub fn covers(&self, kind: CategoryKind) -> bool {
        match self {
            Include::Domains => kind == CategoryKind::Domain,
            Include::Ips => kind == CategoryKind::IpAddress,
            Include::Both => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Include::Domains => "Domains",
            Include::Ips => "IPs",
            Include::Both => "Domains and IPs",
        }
    }
}

impl FromStr for Include {
    type Err = SelectionError;

    /// Accepts `1`/`domains`, `2`/`ips`, `3`/`both`. Empty input means both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "3" | "both" => Ok(Include::Both),
            "1" | "domains" | "domain" => Ok(Include::Domains),
            "2" | "ips" | "ip" => Ok(Include::Ips),
            other => Err(SelectionError::Invalid(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    AllData,
    Similarities,
    Differences,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::AllData, Section::Similarities, Section::Differences];

    pub fn title(&self) -> &'static str {
        match self {
            Section::AllData => "All Data",
            Section::Similarities => "Similarities",
            Section::Differences => "Differences",
        }
    }

    /// Name used when describing the operator's choice.
    pub fn option_label(&self) -> &'static str {
        match self {
            Section::AllData => "All Old/New Data",
            Section::Similarities => "Similarities",
            Section::Differences => "Differences",
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        match self {
            Section::AllData => &[
                Category::OldDomains,
                Category::NewDomains,
                Category::OldIps,
                Category::NewIps,
            ],
            Section::Similarities => &[Category::ConsistentDomains, Category::ConsistentIps],
            Section::Differences => &[
                Category::OldOnlyDomains,
                Category::NewOnlyDomains,
                Category::OldOnlyIps,
                Category::NewOnlyIps,
            ],
        }
    }

    fn from_id(id: u32) -> Option<Section> {
        match id {
            1 => Some(Section::AllData),
            2 => Some(Section::Similarities),
            3 => Some(Section::Differences),
            _ => None,
        }
    }
}

const EVERYTHING_ID: u32 = 4;

/// Parses a section choice.
///
/// Digit input (`"23"`, `"1, 3"`) picks sections by ID and ignores anything
/// that is not a digit. Named input (`"similarities differences"`) is split on
/// commas and whitespace. Empty input, `4` or `everything` selects all.
pub fn parse_sections(input: &str) -> Result<BTreeSet<Section>, SelectionError> {
    let input = input.trim();
    if input.chars().any(|c| c.is_ascii_alphabetic()) {
        return parse_section_names(input);
    }

    let ids: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if ids.is_empty() || ids.contains(&EVERYTHING_ID) {
        return Ok(Section::ALL.into_iter().collect());
    }

    ids.into_iter()
        .map(|id| Section::from_id(id).ok_or_else(|| SelectionError::Invalid(id.to_string())))
        .collect()
}

fn parse_section_names(input: &str) -> Result<BTreeSet<Section>, SelectionError> {
    let mut sections = BTreeSet::new();
    for name in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
    {
        match name.to_ascii_lowercase().as_str() {
            "everything" | "4" => return Ok(Section::ALL.into_iter().collect()),
            "all" | "data" | "1" => sections.insert(Section::AllData),
            "similarities" | "similar" | "2" => sections.insert(Section::Similarities),
            "differences" | "diff" | "3" => sections.insert(Section::Differences),
            other => return Err(SelectionError::Invalid(other.to_string())),
        };
    }
    Ok(sections)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Newline,
    Comma,
}

impl FromStr for Separator {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "1" | "newline" => Ok(Separator::Newline),
            "2" | "comma" => Ok(Separator::Comma),
            other => Err(SelectionError::Invalid(other.to_string())),
        }
    }
}

/// What the operator asked to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSelection {
    pub include: Include,
    pub sections: BTreeSet<Section>,
}

impl Default for ReportSelection {
    fn default() -> Self {
        Self {
            include: Include::Both,
            sections: Section::ALL.into_iter().collect(),
        }
    }
}

impl ReportSelection {
    /// e.g. `Domains and IPs (All Old/New Data, Differences)`
    pub fn describe(&self) -> String {
        let sections: Vec<&str> = self.sections.iter().map(Section::option_label).collect();
        format!("{} ({})", self.include.label(), sections.join(", "))
    }
}

/// Where the compared data came from.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub old_name: String,
    pub new_name: String,
    /// Data files, relative to the logs root.
    pub old_files: Vec<String>,
    pub new_files: Vec<String>,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct ReportSection<'a> {
    pub section: Section,
    pub entries: Vec<(Category, &'a CanonicalSet)>,
}

#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub summary: Vec<(&'static str, String)>,
    pub sections: Vec<ReportSection<'a>>,
}

impl<'a> Report<'a> {
    pub fn build(
        context: &ReportContext,
        comparison: &'a Comparison,
        selection: &ReportSelection,
    ) -> Self {
        let sections: Vec<ReportSection<'a>> = selection
            .sections
            .iter()
            .map(|section| ReportSection {
                section: *section,
                entries: section
                    .categories()
                    .iter()
                    .filter(|category| selection.include.covers(category.kind()))
                    .map(|category| (*category, comparison.get(*category)))
                    .collect(),
            })
            .collect();

        let summary = vec![
            (
                "Timestamp",
                context.generated_at.format(TIMESTAMP_FORMAT).to_string(),
            ),
            ("Old Folder", folder_line(&context.old_name, &context.old_files)),
            ("New Folder", folder_line(&context.new_name, &context.new_files)),
            ("Output", selection.describe()),
            ("Table of Contents", table_of_contents(&sections)),
        ];

        Self { summary, sections }
    }

    pub fn render(&self, separator: Separator) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\nSummary:\n", "~".repeat(RULE_WIDTH)));
        for (key, value) in &self.summary {
            out.push_str(&format!("{key}: {value}\n"));
        }
        out.push_str(&format!("{}\n\n", "~".repeat(RULE_WIDTH)));

        for section in &self.sections {
            let rule = "=".repeat(RULE_WIDTH);
            out.push_str(&format!("{rule}\n{}\n{rule}", section.section.title()));

            for (category, values) in &section.entries {
                out.push_str(&format!(
                    "\n{} ({})\n{}\n",
                    category.title(),
                    values.len(),
                    "-".repeat(RULE_WIDTH)
                ));
                match separator {
                    Separator::Comma => {
                        out.push_str(&values.iter().collect::<Vec<_>>().join(", "));
                        out.push('\n');
                    }
                    Separator::Newline => {
                        for value in values.iter() {
                            out.push_str(value);
                            out.push('\n');
                        }
                    }
                }
            }
            out.push('\n');
        }

        out
    }
}

fn folder_line(name: &str, files: &[String]) -> String {
    let files: Vec<String> = files.iter().map(|f| format!("'{f}'")).collect();
    format!("{name} - Data Files: [{}]", files.join(", "))
}

fn table_of_contents(sections: &[ReportSection<'_>]) -> String {
    sections
        .iter()
        .map(|section| {
            let titles: Vec<&str> = section.entries.iter().map(|(c, _)| c.title()).collect();
            format!("{} - {}", section.section.title(), titles.join(" , "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn output_file_name(old_name: &str, new_name: &str) -> String {
    format!("{old_name}_{new_name}.txt")
}

/// Writes `text` to `dir/file_name`, creating `dir` if needed.
pub fn write_report(dir: &Path, file_name: &str, text: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, text)?;
    Ok(path)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sections(list: &[Section]) -> BTreeSet<Section> {
        list.iter().copied().collect()
    }

    fn comparison(dir: &TempDir) -> Comparison {
        let old = dir.path().join("old.tsv");
        let new = dir.path().join("new.tsv");
        fs::write(&old, "a.com\t1.1.1.1\nb.com\t2.2.2.2\n").unwrap();
        fs::write(&new, "b.com\t2.2.2.2\nc.com\t[3.3.3.3,10.0.0.1]\n").unwrap();
        pipeline::run(&[old], &[new])
    }

    fn context() -> ReportContext {
        ReportContext {
            old_name: "jan".to_string(),
            new_name: "feb".to_string(),
            old_files: vec!["jan/old.tsv".to_string()],
            new_files: vec!["feb/new.tsv".to_string(), "feb/more.tsv".to_string()],
            generated_at: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 7, 9)
                .unwrap(),
        }
    }

    #[test]
    fn test_include_from_str() {
        assert_eq!("".parse::<Include>(), Ok(Include::Both));
        assert_eq!("3".parse::<Include>(), Ok(Include::Both));
        assert_eq!(" 1 ".parse::<Include>(), Ok(Include::Domains));
        assert_eq!("IPs".parse::<Include>(), Ok(Include::Ips));
        assert_eq!("4".parse::<Include>(), Err(SelectionError::Invalid("4".to_string())));
    }

    #[test]
    fn test_separator_from_str() {
        assert_eq!("".parse::<Separator>(), Ok(Separator::Newline));
        assert_eq!("2".parse::<Separator>(), Ok(Separator::Comma));
        assert_eq!("Comma".parse::<Separator>(), Ok(Separator::Comma));
        assert!("3".parse::<Separator>().is_err());
    }

    #[test]
    fn test_parse_sections_digits() {
        assert_eq!(parse_sections("32"), Ok(sections(&[Section::Similarities, Section::Differences])));
        assert_eq!(parse_sections("1, 3"), Ok(sections(&[Section::AllData, Section::Differences])));
        assert_eq!(parse_sections("2 2"), Ok(sections(&[Section::Similarities])));
    }

    #[test]
    fn test_parse_sections_everything() {
        let all = sections(&Section::ALL);
        assert_eq!(parse_sections(""), Ok(all.clone()));
        assert_eq!(parse_sections("4"), Ok(all.clone()));
        assert_eq!(parse_sections("14"), Ok(all.clone()));
        assert_eq!(parse_sections("everything"), Ok(all));
    }

    #[test]
    fn test_parse_sections_invalid() {
        assert_eq!(parse_sections("5"), Err(SelectionError::Invalid("5".to_string())));
        assert_eq!(parse_sections("10"), Err(SelectionError::Invalid("0".to_string())));
        assert!(parse_sections("bogus").is_err());
    }

    #[test]
    fn test_parse_sections_names() {
        assert_eq!(
            parse_sections("differences, all"),
            Ok(sections(&[Section::AllData, Section::Differences]))
        );
        assert_eq!(parse_sections("Similarities"), Ok(sections(&[Section::Similarities])));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            ReportSelection::default().describe(),
            "Domains and IPs (All Old/New Data, Similarities, Differences)"
        );
        let selection = ReportSelection {
            include: Include::Ips,
            sections: sections(&[Section::Differences]),
        };
        assert_eq!(selection.describe(), "IPs (Differences)");
    }

    #[test]
    fn test_build_filters_by_selection() {
        let dir = TempDir::new().unwrap();
        let comparison = comparison(&dir);
        let selection = ReportSelection {
            include: Include::Domains,
            sections: sections(&[Section::Differences, Section::Similarities]),
        };

        let report = Report::build(&context(), &comparison, &selection);

        let layout: Vec<(Section, Vec<Category>)> = report
            .sections
            .iter()
            .map(|s| (s.section, s.entries.iter().map(|(c, _)| *c).collect()))
            .collect();
        assert_eq!(
            layout,
            vec![
                (Section::Similarities, vec![Category::ConsistentDomains]),
                (
                    Section::Differences,
                    vec![Category::OldOnlyDomains, Category::NewOnlyDomains]
                ),
            ]
        );
    }

    #[test]
    fn test_summary() {
        let dir = TempDir::new().unwrap();
        let comparison = comparison(&dir);
        let report = Report::build(&context(), &comparison, &ReportSelection::default());

        let summary: Vec<(&str, &str)> = report
            .summary
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        assert_eq!(summary[0], ("Timestamp", "March 05, 2024 at 02:07:09 PM"));
        assert_eq!(summary[1], ("Old Folder", "jan - Data Files: ['jan/old.tsv']"));
        assert_eq!(
            summary[2],
            ("New Folder", "feb - Data Files: ['feb/new.tsv', 'feb/more.tsv']")
        );
        assert_eq!(
            summary[3],
            ("Output", "Domains and IPs (All Old/New Data, Similarities, Differences)")
        );
        assert_eq!(
            summary[4],
            (
                "Table of Contents",
                "All Data - Old Domains , New Domains , Old IPs , New IPs | \
                 Similarities - Consistent Domains , Consistent IPs | \
                 Differences - Domains Only in Old , Domains Only in New , IPs Only in Old , IPs Only in New"
            )
        );
    }

    #[test]
    fn test_render_newline() {
        let dir = TempDir::new().unwrap();
        let comparison = comparison(&dir);
        let selection = ReportSelection {
            include: Include::Ips,
            sections: sections(&[Section::Differences]),
        };
        let text = Report::build(&context(), &comparison, &selection).render(Separator::Newline);

        let tilde = "~".repeat(50);
        let equals = "=".repeat(50);
        let dash = "-".repeat(50);
        let expected = format!(
            "{tilde}\nSummary:\n\
             Timestamp: March 05, 2024 at 02:07:09 PM\n\
             Old Folder: jan - Data Files: ['jan/old.tsv']\n\
             New Folder: feb - Data Files: ['feb/new.tsv', 'feb/more.tsv']\n\
             Output: IPs (Differences)\n\
             Table of Contents: Differences - IPs Only in Old , IPs Only in New\n\
             {tilde}\n\n\
             {equals}\nDifferences\n{equals}\
             \nIPs Only in Old (1)\n{dash}\n1.1.1.1\n\
             \nIPs Only in New (2)\n{dash}\n3.3.3.3\n10.0.0.1\n\
             \n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_comma() {
        let dir = TempDir::new().unwrap();
        let comparison = comparison(&dir);
        let selection = ReportSelection {
            include: Include::Domains,
            sections: sections(&[Section::AllData]),
        };
        let text = Report::build(&context(), &comparison, &selection).render(Separator::Comma);

        assert!(text.contains("\nOld Domains (2)\n"));
        assert!(text.contains("a.com, b.com\n"));
        assert!(text.contains("b.com, c.com\n"));
        assert!(!text.contains("IPs ("));
    }

    #[test]
    fn test_write_report_creates_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("output");
        let name = output_file_name("jan", "feb");

        let path = write_report(&out, &name, "hello").unwrap();

        assert_eq!(path, out.join("jan_feb.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
