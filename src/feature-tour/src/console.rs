use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Destination for lesson output, one message per line.
pub trait Console {
    fn print_line(&self, line: &str);
}

/// Writes to standard output. A closed stdout is fatal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every printed line in memory. Clones share the same buffer.
#[derive(Default, Clone)]
pub struct RecordingConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Console for RecordingConsole {
    fn print_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl fmt::Debug for RecordingConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingConsole")
            .field("lines", &self.lines.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_console_keeps_order() {
        let console = RecordingConsole::new();
        console.print_line("one");
        console.print_line("two");

        assert_eq!(console.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_recording_console_clones_share_buffer() {
        let console = RecordingConsole::new();
        let shared = console.clone();
        shared.print_line("from clone");

        console.print_line("from original");
        assert_eq!(shared.lines(), vec!["from clone", "from original"]);
    }

    #[test]
    fn test_stdout_console_through_trait_object() {
        let console: &dyn Console = &StdoutConsole;
        console.print_line("stdout console test line");
    }
}
