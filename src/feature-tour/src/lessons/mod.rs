//! Demonstration lessons. Each one illustrates a single language feature and
//! reports what it did through the [`Console`] in its [`Environment`].

mod conditionals;
mod constants;
mod deferral;
mod functions;
mod loops;
mod packages;
mod switch;
mod variables;

pub use conditionals::{ConditionalsLesson, pow, pow_verbose, sqrt_string};
pub use constants::{BIG, ConstantsLesson, SMALL, need_float, need_int};
pub use deferral::{DeferralLesson, deferred_greeting, stacked_countdown};
pub use functions::{FunctionsLesson, add, split, swap};
pub use loops::{LoopsLesson, doubling_until, sum_below};
pub use packages::PackagesLesson;
pub use switch::{SwitchLesson, greeting_for_hour, platform_line, saturday_distance};
pub use variables::{Complex, VariablesLesson, typed_value};

use crate::clock::{Clock, SystemClock};
use crate::console::{Console, StdoutConsole};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

pub const DEFAULT_SEED: u64 = 1;

pub trait Lesson {
    fn name(&self) -> &str;

    fn summary(&self) -> &str;

    fn run(&self, env: &Environment);
}

/// The collaborators a lesson may touch: where output goes, what time it is,
/// a seeded random source and the platform identifier.
pub struct Environment {
    console: Rc<dyn Console>,
    clock: Rc<dyn Clock>,
    rng: RefCell<StdRng>,
    platform: String,
}

impl Environment {
    pub fn new(console: Rc<dyn Console>) -> Self {
        Self {
            console,
            clock: Rc::new(SystemClock),
            rng: RefCell::new(StdRng::seed_from_u64(DEFAULT_SEED)),
            platform: std::env::consts::OS.to_string(),
        }
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RefCell::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn console(&self) -> &dyn Console {
        &*self.console
    }

    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Uniform integer in `[0, upper)`.
    pub fn random_below(&self, upper: u32) -> u32 {
        use rand::Rng;
        self.rng.borrow_mut().gen_range(0..upper)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Rc::new(StdoutConsole))
    }
}

/// Joins displayable values with single spaces, one console line's worth.
pub(crate) fn spaced(values: &[&dyn std::fmt::Display]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::clock::FixedClock;
    use crate::console::RecordingConsole;
    use chrono::{Local, TimeZone};

    pub fn recording_env() -> (Environment, RecordingConsole) {
        recording_env_at(2024, 3, 6, 9)
    }

    /// 2024-03-06 is a Wednesday.
    pub fn recording_env_at(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> (Environment, RecordingConsole) {
        let console = RecordingConsole::new();
        let instant = Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap();
        let env = Environment::new(Rc::new(console.clone()))
            .with_clock(Rc::new(FixedClock::new(instant)))
            .with_platform("linux");
        (env, console)
    }
}
