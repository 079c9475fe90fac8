//! Elapsed-time formatting.
//!
//! Rounds are timed in whole seconds and shown as `HH:MM:SS`. Formatting
//! never fails: input that cannot be a second count renders as `00:00:00`.

use serde::{Deserialize, Serialize};

const DEFAULT_DISPLAY: &str = "00:00:00";

/// Format a second count as `HH:MM:SS`.
///
/// Negative input yields `"00:00:00"`. Hours are not truncated, so very long
/// rounds render with more than two hour digits.
///
/// ```
/// use memory_match::core::format_elapsed;
///
/// assert_eq!(format_elapsed(70), "00:01:10");
/// assert_eq!(format_elapsed(5400), "01:30:00");
/// assert_eq!(format_elapsed(-1), "00:00:00");
/// ```
#[must_use]
pub fn format_elapsed(seconds: i64) -> String {
    if seconds < 0 {
        return DEFAULT_DISPLAY.to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a floating-point second count.
///
/// Hosts that keep time as `f64` get the same output as [`format_elapsed`]
/// for whole, non-negative values; anything else renders as `"00:00:00"`.
#[must_use]
pub fn format_elapsed_secs_f64(seconds: f64) -> String {
    if !seconds.is_finite() || seconds.fract() != 0.0 || seconds < 0.0 || seconds > i64::MAX as f64 {
        return DEFAULT_DISPLAY.to_string();
    }
    format_elapsed(seconds as i64)
}

/// Whole seconds elapsed in a round.
///
/// Displays as `HH:MM:SS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Elapsed(pub u64);

impl Elapsed {
    /// Zero seconds.
    pub const ZERO: Self = Self(0);

    /// Get the second count.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seconds = i64::try_from(self.0).unwrap_or(i64::MAX);
        f.write_str(&format_elapsed(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_elapsed(0), "00:00:00");
    }

    #[test]
    fn test_format_seconds_only() {
        assert_eq!(format_elapsed(59), "00:00:59");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_elapsed(70), "00:01:10");
        assert_eq!(format_elapsed(119), "00:01:59");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_elapsed(5400), "01:30:00");
        assert_eq!(format_elapsed(3661), "01:01:01");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_elapsed(-1), "00:00:00");
        assert_eq!(format_elapsed(i64::MIN), "00:00:00");
    }

    #[test]
    fn test_format_hours_not_truncated() {
        assert_eq!(format_elapsed(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_format_f64() {
        assert_eq!(format_elapsed_secs_f64(70.0), "00:01:10");
        assert_eq!(format_elapsed_secs_f64(1.5), "00:00:00");
        assert_eq!(format_elapsed_secs_f64(-3.0), "00:00:00");
        assert_eq!(format_elapsed_secs_f64(f64::NAN), "00:00:00");
        assert_eq!(format_elapsed_secs_f64(f64::INFINITY), "00:00:00");
    }

    #[test]
    fn test_elapsed_display() {
        assert_eq!(Elapsed(2).to_string(), "00:00:02");
        assert_eq!(Elapsed::ZERO.to_string(), "00:00:00");
        assert_eq!(Elapsed(u64::MAX).seconds(), u64::MAX);
    }
}
