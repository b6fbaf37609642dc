use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};
use logcmp_common::config::Config;
use logcmp_core::discovery::{self, LogDir};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let dirs: Vec<LogDir> = discovery::list_log_dirs(&cfg.logs_dir)
        .with_context(|| format!("listing log directories in {}", cfg.logs_dir.display()))?;

    for (idx, dir) in dirs.iter().enumerate() {
        print_dir_tree(dir, idx + 1, cfg);
        if idx + 1 != dirs.len() {
            print::print("");
        }
    }

    print::fat_separator();
    let total: ColoredString = format!("{} log directories", dirs.len()).bold().green();
    print::centerln(&format!("Found {total} in {}", cfg.logs_dir.display()));
    Ok(())
}

fn print_dir_tree(dir: &LogDir, id: usize, cfg: &Config) {
    print::tree_head(id, &dir.name);

    let file_count: usize = discovery::data_file_paths(&dir.path, &cfg.extension).len();
    let files: ColoredString = match file_count {
        0 => format!("none ending in {}", cfg.extension).color(colors::REMOVED),
        n => n.to_string().color(colors::ACCENT),
    };

    print::as_tree_one_level(&[
        ("Path", dir.path.display().to_string().normal()),
        ("Files", files),
    ]);
}
