use super::{Environment, Lesson};
use chrono::{Datelike, Timelike, Weekday};

pub fn platform_line(os: &str) -> String {
    let name = match os {
        "macos" => "OS X",
        "linux" => "Linux",
        other => other,
    };
    format!("Runs on {}.", name)
}

/// Days from `today` until the coming Saturday, counting weeks from Sunday.
pub fn saturday_distance(today: Weekday) -> u32 {
    Weekday::Sat.num_days_from_sunday() - today.num_days_from_sunday()
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => "Good morning!",
        h if h < 17 => "Good afternoon.",
        _ => "Good evening.",
    }
}

#[derive(Debug, Default)]
pub struct SwitchLesson;

impl Lesson for SwitchLesson {
    fn name(&self) -> &str {
        "switch"
    }

    fn summary(&self) -> &str {
        "match on values, on computed offsets and on guards"
    }

    fn run(&self, env: &Environment) {
        let console = env.console();
        let now = env.clock().now();

        console.print_line(&platform_line(env.platform()));

        console.print_line("When's Saturday?");
        let answer = match saturday_distance(now.weekday()) {
            0 => "Today.",
            1 => "Tomorrow.",
            2 => "In two days.",
            _ => "Too far away.",
        };
        console.print_line(answer);

        console.print_line(greeting_for_hour(now.hour()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::test_support::recording_env_at;
    use rstest::rstest;

    #[rstest]
    #[case("linux", "Runs on Linux.")]
    #[case("macos", "Runs on OS X.")]
    #[case("freebsd", "Runs on freebsd.")]
    fn test_platform_line(#[case] os: &str, #[case] expected: &str) {
        assert_eq!(platform_line(os), expected);
    }

    #[rstest]
    #[case(Weekday::Sat, 0)]
    #[case(Weekday::Fri, 1)]
    #[case(Weekday::Thu, 2)]
    #[case(Weekday::Sun, 6)]
    fn test_saturday_distance(#[case] today: Weekday, #[case] expected: u32) {
        assert_eq!(saturday_distance(today), expected);
    }

    #[rstest]
    #[case(0, "Good morning!")]
    #[case(11, "Good morning!")]
    #[case(12, "Good afternoon.")]
    #[case(16, "Good afternoon.")]
    #[case(17, "Good evening.")]
    #[case(23, "Good evening.")]
    fn test_greeting_for_hour(#[case] hour: u32, #[case] expected: &str) {
        assert_eq!(greeting_for_hour(hour), expected);
    }

    // 2024-03-08 is a Friday, 2024-03-09 a Saturday, 2024-03-06 a Wednesday.
    #[rstest]
    #[case(8, 9, "Tomorrow.", "Good morning!")]
    #[case(9, 13, "Today.", "Good afternoon.")]
    #[case(6, 20, "Too far away.", "Good evening.")]
    fn test_switch_lesson_output(
        #[case] day: u32,
        #[case] hour: u32,
        #[case] saturday: &str,
        #[case] greeting: &str,
    ) {
        let (env, console) = recording_env_at(2024, 3, day, hour);

        SwitchLesson.run(&env);

        assert_eq!(
            console.lines(),
            vec!["Runs on Linux.", "When's Saturday?", saturday, greeting]
        );
    }
}
