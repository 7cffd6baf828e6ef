//! Formatting utilities for durations and plan summaries.

use console::Term;
use owo_colors::OwoColorize;
use pagewait::{WaitOutcome, WaitSpec};
use std::time::Duration;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pagewait_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{total_ms}ms")
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print one line per completed step, plus the total, to stderr.
pub fn print_plan_summary(steps: &[WaitSpec], outcomes: &[WaitOutcome]) {
    let width = usize::from(Term::stderr().size().1).min(80);

    eprintln!("\n{}", "Wait Summary".bold().underline());
    eprintln!("{}", "─".repeat(width));

    for (spec, outcome) in steps.iter().zip(outcomes) {
        let polls = match outcome.evaluations {
            0 => String::new(),
            1 => ", 1 evaluation".to_string(),
            n => format!(", {n} evaluations"),
        };
        eprintln!(
            "  {} {} {}",
            "▸".blue(),
            spec.to_string().bright_white().bold(),
            format!("({}{polls})", format_duration(outcome.elapsed)).dimmed()
        );
    }

    eprintln!("{}", "─".repeat(width));

    let total: Duration = outcomes.iter().map(|o| o.elapsed).sum();
    eprintln!(
        "  {} {} steps in {}",
        "Total:".bold(),
        outcomes.len().green(),
        format_duration(total).green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sub_second_as_millis() {
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn formats_seconds_with_two_decimals() {
        assert_eq!(format_duration(Duration::from_secs(1)), "1.00s");
    }
}
