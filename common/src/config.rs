use std::path::PathBuf;

pub const DEFAULT_LOGS_DIR: &str = "logs";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_EXTENSION: &str = ".tsv";

#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory holding one sub-directory per log snapshot.
    pub logs_dir: PathBuf,
    /// Where generated reports are written.
    pub output_dir: PathBuf,
    /// Only files whose name ends with this are read as data files.
    pub extension: String,
    pub quiet: u8,
    pub no_banner: bool,
    /// Never prompt. Missing selections fall back to their defaults.
    pub disable_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            quiet: 0,
            no_banner: false,
            disable_input: false,
        }
    }
}
