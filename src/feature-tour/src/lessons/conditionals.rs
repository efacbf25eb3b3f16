use super::{Environment, Lesson, spaced};

/// Square root rendered as text; negative inputs come back imaginary.
pub fn sqrt_string(x: f64) -> String {
    if x < 0.0 {
        return sqrt_string(-x) + "i";
    }
    x.sqrt().to_string()
}

/// `x` to the power `n`, capped at `lim`.
pub fn pow(x: f64, n: f64, lim: f64) -> f64 {
    let v = x.powf(n);
    if v < lim {
        return v;
    }
    lim
}

/// Like [`pow`], but reports through `report` when the cap applies.
pub fn pow_verbose(x: f64, n: f64, lim: f64, report: impl FnOnce(String)) -> f64 {
    let v = x.powf(n);
    if v < lim {
        v
    } else {
        report(format!("{} >= {}", v, lim));
        lim
    }
}

#[derive(Debug, Default)]
pub struct ConditionalsLesson;

impl Lesson for ConditionalsLesson {
    fn name(&self) -> &str {
        "conditionals"
    }

    fn summary(&self) -> &str {
        "if with a short statement, else branches and recursion"
    }

    fn run(&self, env: &Environment) {
        let console = env.console();

        console.print_line(&spaced(&[&sqrt_string(2.0), &sqrt_string(-4.0)]));

        console.print_line(&spaced(&[&pow(3.0, 2.0, 10.0), &pow(3.0, 3.0, 20.0)]));

        // Both arguments are evaluated before the line is printed.
        let report = |line: String| console.print_line(&line);
        let first = pow_verbose(3.0, 2.0, 10.0, report);
        let second = pow_verbose(3.0, 3.0, 20.0, report);
        console.print_line(&spaced(&[&first, &second]));
    }
}
