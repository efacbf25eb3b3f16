use crate::cli::config::{Config, Mode};
use crate::cli::errors::CliError;
use crate::console::Console;
use crate::lessons::Environment;
use crate::tour::Tour;
use std::rc::Rc;

pub struct App;

impl App {
    pub fn run(config: &Config, console: Rc<dyn Console>) -> Result<(), CliError> {
        let tour = Tour::standard();

        match config.mode {
            Mode::List => {
                for (name, summary) in tour.list_lessons() {
                    console.print_line(&format!("{} - {}", name, summary));
                }
                Ok(())
            }
            Mode::Run => {
                tracing::info!(seed = config.seed, "{}", config.describe_selection());
                let env = Environment::new(console).with_seed(config.seed);
                tour.run(&env, &config.selection)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::LogFormat;
    use crate::console::RecordingConsole;
    use crate::tour::{Selection, TourError};

    fn config(mode: Mode, selection: Selection) -> Config {
        Config {
            mode,
            selection,
            seed: 1,
            log_format: LogFormat::Text,
        }
    }

    #[test]
    fn test_list_prints_one_line_per_lesson() {
        let console = RecordingConsole::new();

        App::run(&config(Mode::List, Selection::All), Rc::new(console.clone())).unwrap();

        let lines = console.lines();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("packages - "));
        assert!(lines[7].starts_with("defer - "));
    }

    #[test]
    fn test_run_selected_lesson() {
        let console = RecordingConsole::new();
        let selection = Selection::Only(vec!["loops".to_string()]);

        App::run(&config(Mode::Run, selection), Rc::new(console.clone())).unwrap();

        assert_eq!(console.lines(), vec!["45", "1024"]);
    }

    #[test]
    fn test_run_unknown_lesson_is_an_error() {
        let console = RecordingConsole::new();
        let selection = Selection::Only(vec!["goto".to_string()]);

        let result = App::run(&config(Mode::Run, selection), Rc::new(console.clone()));

        match result {
            Err(CliError::TourError(TourError::UnknownLesson(name))) => assert_eq!(name, "goto"),
            other => panic!("expected unknown lesson error, got {:?}", other),
        }
        assert!(console.lines().is_empty());
    }
}
