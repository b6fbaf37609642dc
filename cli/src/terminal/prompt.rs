//! Interactive questions.
//!
//! Each question loops until its parser accepts the answer. Parsers are
//! plain functions returning `Result`, so they are shared with the
//! command-line flags and tested without a terminal.

use std::io::{self, BufRead};

use colored::*;
use console::Term;
use logcmp_common::error::SelectionError;
use logcmp_core::discovery::LogDir;

use crate::terminal::colors;

pub const OLD_LOGS_PROMPT: &str = "Enter ID of OLD logs > ";
pub const NEW_LOGS_PROMPT: &str = "Enter ID of NEW logs > ";
pub const INCLUDE_PROMPT: &str =
    "\nInclude Domains (1), IPs (2), or Both (3)?\nEnter ID (Default: Both) > ";
pub const SECTIONS_PROMPT: &str = "\nInclude All Old/New Data (1), Similarities (2), Differences (3), or Everything (4)?\nEnter 1 or more IDs (Default: Everything) > ";
pub const SEPARATOR_PROMPT: &str =
    "\nSeparate values using Newline (1), or Comma (2)?\nEnter ID (Default: Newline) > ";

/// Resolves a log directory given by 1-based ID or by name.
pub fn parse_log_choice(input: &str, dirs: &[LogDir]) -> Result<usize, SelectionError> {
    let input = input.trim();

    if let Some(idx) = dirs.iter().position(|dir| dir.name == input) {
        return Ok(idx);
    }

    match input.parse::<usize>() {
        Ok(id) if (1..=dirs.len()).contains(&id) => Ok(id - 1),
        _ => Err(SelectionError::OutOfRange { max: dirs.len() }),
    }
}

/// Like [`parse_log_choice`], but refuses an index that was already picked.
pub fn parse_distinct_log_choice(
    input: &str,
    dirs: &[LogDir],
    taken: Option<usize>,
) -> Result<usize, SelectionError> {
    let idx = parse_log_choice(input, dirs)?;
    if taken == Some(idx) {
        return Err(SelectionError::AlreadyChosen);
    }
    Ok(idx)
}

pub fn show_log_dirs(term: &Term, dirs: &[LogDir]) -> io::Result<()> {
    term.write_line("Available log directories:")?;
    for (idx, dir) in dirs.iter().enumerate() {
        let id = format!("{}", idx + 1).color(colors::ACCENT);
        term.write_line(&format!("{}: {}", id, dir.name.color(colors::PRIMARY)))?;
    }
    Ok(())
}

/// Asks `prompt` until `parse` accepts the answer.
pub fn ask<T, F>(term: &Term, prompt: &str, parse: F) -> io::Result<T>
where
    F: Fn(&str) -> Result<T, SelectionError>,
{
    loop {
        let answer = read_answer(term, prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => term.write_line(&format!("{} {}", "Invalid input:".yellow().bold(), e))?,
        }
    }
}

fn read_answer(term: &Term, prompt: &str) -> io::Result<String> {
    term.write_str(prompt)?;
    term.flush()?;

    if term.is_term() {
        return term.read_line();
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a valid answer was given",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
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
    use std::path::PathBuf;

    fn dirs() -> Vec<LogDir> {
        ["2024-01", "2024-02", "42"]
            .iter()
            .map(|name| LogDir {
                name: name.to_string(),
                path: PathBuf::from("logs").join(name),
            })
            .collect()
    }

    #[test]
    fn test_parse_log_choice_by_id() {
        assert_eq!(parse_log_choice("1", &dirs()), Ok(0));
        assert_eq!(parse_log_choice(" 2 ", &dirs()), Ok(1));
    }

    #[test]
    fn test_parse_log_choice_by_name() {
        assert_eq!(parse_log_choice("2024-02", &dirs()), Ok(1));
        // A name wins over an ID
        assert_eq!(parse_log_choice("42", &dirs()), Ok(2));
    }

    #[test]
    fn test_parse_log_choice_out_of_range() {
        let expected = Err(SelectionError::OutOfRange { max: 3 });
        assert_eq!(parse_log_choice("0", &dirs()), expected);
        assert_eq!(parse_log_choice("4", &dirs()), expected);
        assert_eq!(parse_log_choice("-1", &dirs()), expected);
        assert_eq!(parse_log_choice("", &dirs()), expected);
        assert_eq!(parse_log_choice("2024-03", &dirs()), expected);
    }

    #[test]
    fn test_parse_distinct_log_choice() {
        assert_eq!(parse_distinct_log_choice("1", &dirs(), None), Ok(0));
        assert_eq!(parse_distinct_log_choice("1", &dirs(), Some(1)), Ok(0));
        assert_eq!(
            parse_distinct_log_choice("2024-01", &dirs(), Some(0)),
            Err(SelectionError::AlreadyChosen)
        );
    }
}
