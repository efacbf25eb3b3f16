use super::{Environment, Lesson};
use crate::console::Console;
use crate::defer::scoped;

/// Defers `world`, then prints `hello` straight away. `world` appears once
/// the function returns.
pub fn deferred_greeting(console: &dyn Console) {
    scoped(|defers| {
        defers.defer_with("world", move |word| console.print_line(word));

        console.print_line("hello");
    });
}

/// Defers one print per loop value. Each print keeps the value it was
/// registered with, and they come out in reverse after `done`.
pub fn stacked_countdown(console: &dyn Console) {
    scoped(|defers| {
        console.print_line("counting");

        for i in 0..10 {
            defers.defer_with(i, move |i: i32| console.print_line(&i.to_string()));
        }

        console.print_line("done");
    });
}

#[derive(Debug, Default)]
pub struct DeferralLesson;

impl Lesson for DeferralLesson {
    fn name(&self) -> &str {
        "defer"
    }

    fn summary(&self) -> &str {
        "deferred calls run last-in-first-out when their scope ends"
    }

    fn run(&self, env: &Environment) {
        deferred_greeting(env.console());
        stacked_countdown(env.console());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use crate::lessons::test_support::recording_env;

    #[test]
    fn test_deferred_greeting_prints_hello_first() {
        let console = RecordingConsole::new();

        deferred_greeting(&console);

        assert_eq!(console.lines(), vec!["hello", "world"]);
    }

    #[test]
    fn test_stacked_countdown_order() {
        let console = RecordingConsole::new();

        stacked_countdown(&console);

        assert_eq!(
            console.lines(),
            vec!["counting", "done", "9", "8", "7", "6", "5", "4", "3", "2", "1", "0"]
        );
    }

    #[test]
    fn test_deferral_lesson_runs_both_scopes_in_turn() {
        let (env, console) = recording_env();

        DeferralLesson.run(&env);

        let lines = console.lines();
        assert_eq!(&lines[..2], &["hello", "world"]);
        assert_eq!(lines[2], "counting");
        assert_eq!(lines.len(), 14);
    }
}
