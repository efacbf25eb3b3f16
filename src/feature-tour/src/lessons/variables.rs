use super::{Environment, Lesson, spaced};
use std::fmt;

// Module-level declarations start at their zero value unless initialised.
static C: bool = false;
static PYTHON: bool = false;
static JAVA: bool = false;
static J: i64 = 2;

static TO_BE: bool = false;
static MAX_INT: u64 = u64::MAX;

/// A complex number, just enough of one to print the square root of a
/// negative-real-part value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Principal square root.
    pub fn sqrt(self) -> Self {
        let modulus = self.re.hypot(self.im);
        let re = ((modulus + self.re) / 2.0).sqrt();
        let im = ((modulus - self.re) / 2.0).sqrt().copysign(self.im);
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Formats a value as `type(value)`.
pub fn typed_value<T: fmt::Display>(value: &T) -> String {
    format!("{}({})", short_type_name::<T>(), value)
}

#[derive(Debug, Default)]
pub struct VariablesLesson;

impl VariablesLesson {
    fn declarations(&self, env: &Environment) {
        let console = env.console();

        let i = i64::default();
        console.print_line(&spaced(&[&i, &C, &PYTHON, &JAVA]));

        // Shadowing replaces the module-level names with inferred locals.
        let (c, python, java) = (true, false, "no!");
        console.print_line(&spaced(&[&i, &J, &c, &python, &java]));

        let k = 3;
        console.print_line(&spaced(&[&i, &k, &c, &python, &java]));
    }

    fn typed_values(&self, env: &Environment) {
        let console = env.console();
        let z = Complex::new(-5.0, 12.0).sqrt();

        console.print_line(&typed_value(&TO_BE));
        console.print_line(&typed_value(&MAX_INT));
        console.print_line(&typed_value(&z));
    }

    fn zero_values(&self, env: &Environment) {
        let i = i64::default();
        let f = f64::default();
        let b = bool::default();
        let s = String::default();
        env.console().print_line(&format!("{} {} {} {:?}", i, f, b, s));
    }

    fn conversions(&self, env: &Environment) {
        let (x, y): (i64, i64) = (3, 4);
        let f = ((x * x + y * y) as f64).sqrt();
        let z = f as u32;
        env.console().print_line(&spaced(&[&x, &y, &z]));
    }

    fn inference(&self, env: &Environment) {
        let v = 42;
        env.console().print_line(&format!("v is of type {}", short_type_name_of(&v)));
    }
}

fn short_type_name_of<T>(_: &T) -> &'static str {
    short_type_name::<T>()
}

impl Lesson for VariablesLesson {
    fn name(&self) -> &str {
        "variables"
    }

    fn summary(&self) -> &str {
        "declarations, zero values, explicit conversions and type inference"
    }

    fn run(&self, env: &Environment) {
        self.declarations(env);
        self.typed_values(env);
        self.zero_values(env);
        self.conversions(env);
        self.inference(env);
    }
}
