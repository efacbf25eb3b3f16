use super::{Environment, Lesson};

/// Sum of every integer in `0..limit`.
pub fn sum_below(limit: i64) -> i64 {
    let mut sum = 0;
    for i in 0..limit {
        sum += i;
    }
    sum
}

/// Doubles `start` until it reaches `limit`. A loop with only a condition.
pub fn doubling_until(start: i64, limit: i64) -> i64 {
    let mut sum = start;
    while sum < limit {
        sum += sum;
    }
    sum
}

#[derive(Debug, Default)]
pub struct LoopsLesson;

impl Lesson for LoopsLesson {
    fn name(&self) -> &str {
        "loops"
    }

    fn summary(&self) -> &str {
        "counted loops and condition-only loops"
    }

    fn run(&self, env: &Environment) {
        let console = env.console();
        console.print_line(&sum_below(10).to_string());
        console.print_line(&doubling_until(1, 1000).to_string());
    }
}
