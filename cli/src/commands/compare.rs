use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use chrono::Local;
use colored::*;
use console::Term;
use tracing::{info, warn};

use crate::commands::CompareArgs;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::prompt::{self, NEW_LOGS_PROMPT, OLD_LOGS_PROMPT};
use crate::terminal::{colors, spinner};
use logcmp_common::category::{Category, CategoryKind};
use logcmp_common::config::Config;
use logcmp_common::error::SetupError;
use logcmp_core::discovery::{self, LogDir};
use logcmp_core::pipeline::{self, Comparison};
use logcmp_core::report::{
    self, Include, Report, ReportContext, ReportSelection, Separator, parse_sections,
};

/// Order of the count lines printed after a comparison.
const SUMMARY_ORDER: [Category; 10] = [
    Category::OldDomains,
    Category::NewDomains,
    Category::ConsistentDomains,
    Category::OldOnlyDomains,
    Category::NewOnlyDomains,
    Category::OldIps,
    Category::NewIps,
    Category::ConsistentIps,
    Category::OldOnlyIps,
    Category::NewOnlyIps,
];

pub fn compare(args: CompareArgs, cfg: &Config) -> anyhow::Result<()> {
    let term: Term = Term::stdout();
    let dirs: Vec<LogDir> = discovery::list_log_dirs(&cfg.logs_dir)
        .with_context(|| format!("listing log directories in {}", cfg.logs_dir.display()))?;

    let (old, new) = select_log_dirs(&term, &dirs, &args, cfg)?;
    info!("Comparing {} (old) with {} (new)", old.name.bold(), new.name.bold());

    let old_paths: Vec<PathBuf> = discovery::require_data_files(&old.path, &cfg.extension)?;
    let new_paths: Vec<PathBuf> = discovery::require_data_files(&new.path, &cfg.extension)?;

    let start_time: Instant = Instant::now();
    let comparison: Comparison = {
        let _spinner = spinner::start("Reading log files...");
        pipeline::run(&old_paths, &new_paths)
    };

    report_issues(&comparison, cfg);
    print::header("comparison results");
    print_counts(&comparison);

    let (selection, separator) = select_report(&term, &args, cfg)?;
    info!("Outputting: {}", selection.describe());

    let context = ReportContext {
        old_name: old.name.clone(),
        new_name: new.name.clone(),
        old_files: relative_paths(&old_paths, cfg),
        new_files: relative_paths(&new_paths, cfg),
        generated_at: Local::now().naive_local(),
    };
    let text: String = Report::build(&context, &comparison, &selection).render(separator);

    if args.stdout {
        term.write_str(&text)?;
    } else {
        let file_name: String = report::output_file_name(&old.name, &new.name);
        let path: PathBuf = report::write_report(&cfg.output_dir, &file_name, &text)
            .with_context(|| format!("writing report to {}", cfg.output_dir.display()))?;
        info!("Text file created: {}", path.display());
    }

    print_summary(&comparison, start_time.elapsed());
    Ok(())
}

/// Resolves `--old`/`--new`, prompting for whichever is missing.
fn select_log_dirs<'a>(
    term: &Term,
    dirs: &'a [LogDir],
    args: &CompareArgs,
    cfg: &Config,
) -> anyhow::Result<(&'a LogDir, &'a LogDir)> {
    let from_flag = |value: &Option<String>| -> Result<Option<usize>, SetupError> {
        value
            .as_deref()
            .map(|name| {
                prompt::parse_log_choice(name, dirs)
                    .map_err(|_| SetupError::UnknownLogDirectory(name.to_string()))
            })
            .transpose()
    };

    let old_idx: Option<usize> = from_flag(&args.old)?;
    let new_idx: Option<usize> = from_flag(&args.new)?;

    if let (Some(old), Some(new)) = (old_idx, new_idx) {
        if old == new {
            bail!(SetupError::SameLogDirectory(dirs[old].name.clone()));
        }
    }

    if (old_idx.is_none() || new_idx.is_none()) && cfg.disable_input {
        bail!("both --old and --new are required when input is disabled");
    }

    if old_idx.is_none() || new_idx.is_none() {
        prompt::show_log_dirs(term, dirs)?;
    }

    let old: usize = match old_idx {
        Some(idx) => idx,
        None => prompt::ask(term, OLD_LOGS_PROMPT, |input| {
            prompt::parse_distinct_log_choice(input, dirs, new_idx)
        })?,
    };
    let new: usize = match new_idx {
        Some(idx) => idx,
        None => prompt::ask(term, NEW_LOGS_PROMPT, |input| {
            prompt::parse_distinct_log_choice(input, dirs, Some(old))
        })?,
    };

    Ok((&dirs[old], &dirs[new]))
}

/// Flags win, then prompts. With input disabled, missing choices use defaults.
fn select_report(
    term: &Term,
    args: &CompareArgs,
    cfg: &Config,
) -> anyhow::Result<(ReportSelection, Separator)> {
    let defaults = ReportSelection::default();

    let include: Include = match args.include {
        Some(include) => include,
        None if cfg.disable_input => defaults.include,
        None => prompt::ask(term, prompt::INCLUDE_PROMPT, |input| input.parse::<Include>())?,
    };

    let sections = match &args.sections {
        Some(sections) => sections.clone(),
        None if cfg.disable_input => defaults.sections,
        None => prompt::ask(term, prompt::SECTIONS_PROMPT, parse_sections)?,
    };

    let separator: Separator = match args.separator {
        Some(separator) => separator,
        None if cfg.disable_input => Separator::default(),
        None => prompt::ask(term, prompt::SEPARATOR_PROMPT, |input| {
            input.parse::<Separator>()
        })?,
    };

    Ok((ReportSelection { include, sections }, separator))
}

fn report_issues(comparison: &Comparison, cfg: &Config) {
    if comparison.has_data_loss() {
        warn!(
            "POSSIBLE DATA LOSS: {} file(s) contributed nothing to the comparison",
            comparison.issues.len()
        );
        for issue in &comparison.issues {
            warn!("Skipped {}", discovery::display_relative(issue.path(), &cfg.logs_dir));
        }
    }

    if comparison.malformed_records > 0 {
        info!(
            "Ignored {} malformed records with fewer than two fields",
            comparison.malformed_records
        );
    }
}

fn print_counts(comparison: &Comparison) {
    let key_width: usize = SUMMARY_ORDER
        .iter()
        .map(|category| category.title().len())
        .max()
        .unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(key_width);

    for category in SUMMARY_ORDER {
        let count: String = comparison.get(category).len().to_string();
        let value: ColoredString = match category {
            Category::OldOnlyDomains | Category::OldOnlyIps => count.color(colors::REMOVED),
            Category::NewOnlyDomains | Category::NewOnlyIps => count.color(colors::ADDED),
            _ if category.kind() == CategoryKind::Domain => count.color(colors::DOMAIN),
            _ => count.color(colors::IP_ADDR),
        };
        print::aligned_line(category.title(), value);
    }
}

fn print_summary(comparison: &Comparison, total_time: Duration) {
    let changed: usize = [
        Category::OldOnlyDomains,
        Category::NewOnlyDomains,
        Category::OldOnlyIps,
        Category::NewOnlyIps,
    ]
    .into_iter()
    .map(|category| comparison.get(category).len())
    .sum();

    let changed: ColoredString = format!("{changed} differences").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Comparison Complete: {changed} found in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}

fn relative_paths(paths: &[PathBuf], cfg: &Config) -> Vec<String> {
    paths
        .iter()
        .map(|path| discovery::display_relative(path, &cfg.logs_dir))
        .collect()
}
