use super::{Environment, Lesson};
use std::f64::consts::PI;

/// Using items brought in from other crates and modules: the clock, the
/// random source and the float math in `std`.
#[derive(Debug, Default)]
pub struct PackagesLesson;

impl Lesson for PackagesLesson {
    fn name(&self) -> &str {
        "packages"
    }

    fn summary(&self) -> &str {
        "printing, time, random numbers and math from imported modules"
    }

    fn run(&self, env: &Environment) {
        let console = env.console();

        console.print_line("println! prints a line");
        console.print_line(&format!("Date and time: {}", env.clock().now()));
        console.print_line(&format!(
            "random_below(upper) returns an integer in [0, upper). random_below(100) = {}",
            env.random_below(100)
        ));
        console.print_line(&format!("The square root of 7 is {}", 7f64.sqrt()));
        console.print_line(&format!("Pi is {}", PI));
    }
}
