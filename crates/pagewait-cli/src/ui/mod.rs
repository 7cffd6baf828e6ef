//! Terminal output: status lines and formatting.
//!
//! Everything is written to stderr so stdout stays free for scripting.

mod format;
mod messages;

pub use format::{format_duration, print_plan_summary};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Apply the color decision to owo-colors output.
pub fn init_colors() {
    owo_colors::set_override(should_use_color());
}
