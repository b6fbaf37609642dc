pub mod compare;
pub mod list;

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use logcmp_common::config::{Config, DEFAULT_EXTENSION, DEFAULT_LOGS_DIR, DEFAULT_OUTPUT_DIR};
use logcmp_core::report::{Include, Section, Separator, parse_sections};

#[derive(Parser)]
#[command(name = "logcmp")]
#[command(version)]
#[command(about = "Compare the domains and IP addresses recorded in two sets of logs.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding one sub-directory per log snapshot
    #[arg(long, global = true, default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,

    /// Directory reports are written to
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name suffix of data files
    #[arg(long, global = true, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Less output (-q warnings and errors, -qq errors only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Never prompt; missing choices use their defaults
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available log directories
    #[command(alias = "l")]
    List,
    /// Compare two log directories (default)
    #[command(alias = "c")]
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Old log directory, by ID or name
    #[arg(long)]
    pub old: Option<String>,

    /// New log directory, by ID or name
    #[arg(long)]
    pub new: Option<String>,

    /// domains (1), ips (2) or both (3)
    #[arg(long)]
    pub include: Option<Include>,

    /// Any of: all (1), similarities (2), differences (3), everything (4)
    #[arg(long, value_parser = parse_sections)]
    pub sections: Option<BTreeSet<Section>>,

    /// newline (1) or comma (2)
    #[arg(long)]
    pub separator: Option<Separator>,

    /// Print the report instead of writing it to the output directory
    #[arg(long)]
    pub stdout: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            logs_dir: self.logs_dir.clone(),
            output_dir: self.output_dir.clone(),
            extension: self.ext.clone(),
            quiet: self.quiet,
            no_banner: self.no_banner,
            disable_input: self.no_input,
        }
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
