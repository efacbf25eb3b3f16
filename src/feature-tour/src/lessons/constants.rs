use super::{Environment, Lesson};

pub const PI_APPROX: f64 = 3.14;

/// One followed by a hundred zero bits.
pub const BIG: u128 = 1 << 100;
/// `BIG` shifted back down to two.
pub const SMALL: u128 = BIG >> 99;

pub fn need_int(x: i64) -> i64 {
    x * 10 + 1
}

pub fn need_float(x: f64) -> f64 {
    x * 0.1
}

#[derive(Debug, Default)]
pub struct ConstantsLesson;

impl Lesson for ConstantsLesson {
    fn name(&self) -> &str {
        "constants"
    }

    fn summary(&self) -> &str {
        "character, string, boolean and high-precision numeric constants"
    }

    fn run(&self, env: &Environment) {
        const WORLD: &str = "世界";
        const TRUTH: bool = true;

        let console = env.console();
        console.print_line(&format!("Hello {}", WORLD));
        console.print_line(&format!("Happy {} Day", PI_APPROX));
        console.print_line(&format!("Rust rules? {}", TRUTH));

        console.print_line(&need_int(SMALL as i64).to_string());
        console.print_line(&need_float(SMALL as f64).to_string());
        console.print_line(&format!("{:e}", need_float(BIG as f64)));
    }
}
