use super::{Environment, Lesson, spaced};

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// Returns its arguments in reverse order.
pub fn swap<'a>(x: &'a str, y: &'a str) -> (&'a str, &'a str) {
    (y, x)
}

/// Splits `sum` into two parts, the first being four ninths of it.
pub fn split(sum: i64) -> (i64, i64) {
    let x = sum * 4 / 9;
    let y = sum - x;
    (x, y)
}

#[derive(Debug, Default)]
pub struct FunctionsLesson;

impl Lesson for FunctionsLesson {
    fn name(&self) -> &str {
        "functions"
    }

    fn summary(&self) -> &str {
        "parameters, multiple results and tuple destructuring"
    }

    fn run(&self, env: &Environment) {
        let console = env.console();

        console.print_line(&format!("add(42, 13) = {}", add(42, 13)));

        let (a, b) = swap("hello", "world");
        console.print_line(&spaced(&[&a, &b]));

        let (x, y) = split(17);
        console.print_line(&spaced(&[&x, &y]));
    }
}
