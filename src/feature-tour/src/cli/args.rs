use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feature-tour")]
#[command(version)]
#[command(about = "A console walkthrough of basic language features")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_enum,
        value_name = "FORMAT",
        help = "Diagnostic log format written to stderr"
    )]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Run the tour, or only the named lessons")]
    Run(RunArgs),

    #[command(about = "List the lessons in tour order")]
    List,
}

#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    #[arg(
        short = 'l',
        long = "lesson",
        value_name = "NAME",
        help = "Lesson to run; repeat to run several (default: all)"
    )]
    pub lessons: Vec<String>,

    #[arg(long, value_name = "N", help = "Seed for the random number lesson")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub lessons: Option<Vec<String>>,
    pub log_format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_no_subcommand() {
        let args = Args::try_parse_from(["feature-tour"]).unwrap();

        assert!(args.command.is_none());
        assert!(args.config.is_none());
        assert!(args.log_format.is_none());
    }

    #[test]
    fn test_run_with_repeated_lessons() {
        let args = Args::try_parse_from([
            "feature-tour",
            "run",
            "--lesson",
            "defer",
            "-l",
            "loops",
            "--seed",
            "9",
        ])
        .unwrap();

        match args.command {
            Some(Command::Run(run)) => {
                assert_eq!(run.lessons, vec!["defer", "loops"]);
                assert_eq!(run.seed, Some(9));
            }
            other => panic!("expected run command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "feature-tour",
            "list",
            "--config",
            "tour.toml",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert!(matches!(args.command, Some(Command::List)));
        assert_eq!(args.config, Some(PathBuf::from("tour.toml")));
        assert_eq!(args.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        let result: Result<FileConfig, _> = toml::from_str("colour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_file_config_parses_all_keys() {
        let config: FileConfig = toml::from_str(
            "seed = 3\nlessons = [\"defer\"]\nlog_format = \"json\"\n",
        )
        .unwrap();

        assert_eq!(
            config,
            FileConfig {
                seed: Some(3),
                lessons: Some(vec!["defer".to_string()]),
                log_format: Some(LogFormat::Json),
            }
        );
    }
}
