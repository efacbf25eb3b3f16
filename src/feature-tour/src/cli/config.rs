use crate::cli::args::{Args, Command, FileConfig, LogFormat};
use crate::cli::errors::CliError;
use crate::lessons::DEFAULT_SEED;
use crate::tour::Selection;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "feature-tour";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Run,
    List,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub selection: Selection,
    pub seed: u64,
    pub log_format: LogFormat,
}

impl Config {
    /// Builds the effective configuration. Command-line values win over the
    /// config file, which wins over the defaults.
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let file_config = match &args.config {
            Some(path) => Self::read_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::read_file(&path)?,
                _ => FileConfig::default(),
            },
        };

        Ok(Self::merge(args, file_config))
    }

    pub fn merge(args: &Args, file_config: FileConfig) -> Self {
        let (mode, cli_lessons, cli_seed) = match &args.command {
            None => (Mode::Run, Vec::new(), None),
            Some(Command::Run(run)) => (Mode::Run, run.lessons.clone(), run.seed),
            Some(Command::List) => (Mode::List, Vec::new(), None),
        };

        let lessons = if cli_lessons.is_empty() {
            file_config.lessons.unwrap_or_default()
        } else {
            cli_lessons
        };

        Config {
            mode,
            selection: Selection::from_names(lessons),
            seed: cli_seed.or(file_config.seed).unwrap_or(DEFAULT_SEED),
            log_format: args
                .log_format
                .or(file_config.log_format)
                .unwrap_or_default(),
        }
    }

    pub fn read_file(path: &Path) -> Result<FileConfig, CliError> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// `<config dir>/feature-tour/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn describe_selection(&self) -> String {
        match &self.selection {
            Selection::All => "Running all lessons".to_string(),
            Selection::Only(names) => format!("Running lessons: {}", names.join(", ")),
        }
    }
}
