//! Daily target times.
//!
//! A [`TimeOfDay`] is a configured hour/minute pair plus a display label,
//! representing a daily recurring target ("take a rest at 11:30", "go home
//! at 16:00"). Values are validated at construction so the evaluator in
//! [`crate::clock`] never sees out-of-range input.

use serde::Serialize;

use crate::error::ShiftError;

/// Default rest-break target, `HH:MM`.
pub const DEFAULT_REST: &str = "11:30";

/// Default home-departure target, `HH:MM`.
pub const DEFAULT_HOME: &str = "16:00";

/// Which schedule a target belongs to.
///
/// Only the home schedule is subject to the Saturday early-departure
/// override; the rest schedule runs unchanged on Saturdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Rest,
    Home,
}

/// A configured daily target: hour, minute, and a display label.
///
/// Immutable once constructed. `hours` is always in `0..=23` and `minutes`
/// in `0..=59` — both constructors enforce the ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
    pub label: String,
}

impl TimeOfDay {
    /// Create a target from numeric components.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidTimeOfDay`] if `hours > 23` or
    /// `minutes > 59`.
    pub fn new(hours: u32, minutes: u32, label: impl Into<String>) -> Result<Self, ShiftError> {
        if hours > 23 || minutes > 59 {
            return Err(ShiftError::InvalidTimeOfDay(format!(
                "{hours:02}:{minutes:02} is out of range"
            )));
        }
        Ok(Self {
            hours,
            minutes,
            label: label.into(),
        })
    }

    /// Parse an externally-supplied `HH:MM` string.
    ///
    /// This is the configuration boundary: exactly two digits, a colon, and
    /// two more digits are accepted (`"11:30"`, not `"9:30"` or
    /// `"11:30:00"`), and the components must be a valid time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidTimeOfDay`] for any other shape or for
    /// out-of-range components.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::TimeOfDay;
    ///
    /// let target = TimeOfDay::parse("16:00", "Home").unwrap();
    /// assert_eq!(target.hours, 16);
    /// assert_eq!(target.minutes, 0);
    ///
    /// assert!(TimeOfDay::parse("9:30", "Rest").is_err());
    /// assert!(TimeOfDay::parse("24:00", "Rest").is_err());
    /// ```
    pub fn parse(s: &str, label: impl Into<String>) -> Result<Self, ShiftError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit();
        if !well_formed {
            return Err(ShiftError::InvalidTimeOfDay(format!(
                "'{s}' does not match HH:MM"
            )));
        }

        let hours: u32 = s[0..2]
            .parse()
            .map_err(|_| ShiftError::InvalidTimeOfDay(format!("'{s}'")))?;
        let minutes: u32 = s[3..5]
            .parse()
            .map_err(|_| ShiftError::InvalidTimeOfDay(format!("'{s}'")))?;

        Self::new(hours, minutes, label)
    }

    /// Seconds since midnight of this target.
    pub(crate) fn seconds_of_day(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_time() {
        let t = TimeOfDay::parse("11:30", "Rest").unwrap();
        assert_eq!(t.hours, 11);
        assert_eq!(t.minutes, 30);
        assert_eq!(t.label, "Rest");
    }

    #[test]
    fn test_parse_midnight_and_last_minute() {
        assert!(TimeOfDay::parse("00:00", "x").is_ok());
        assert!(TimeOfDay::parse("23:59", "x").is_ok());
    }

    #[test]
    fn test_parse_rejects_single_digit_hour() {
        let err = TimeOfDay::parse("9:30", "Rest").unwrap_err();
        assert!(err.to_string().contains("does not match HH:MM"), "got: {err}");
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(TimeOfDay::parse("24:00", "x").is_err());
        assert!(TimeOfDay::parse("11:60", "x").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_shapes() {
        for bad in ["1130", "11:3", "11:300", "aa:bb", "11-30", "", " 11:30"] {
            assert!(TimeOfDay::parse(bad, "x").is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0, "x").is_err());
        assert!(TimeOfDay::new(0, 60, "x").is_err());
        assert!(TimeOfDay::new(23, 59, "x").is_ok());
    }

    #[test]
    fn test_seconds_of_day() {
        let t = TimeOfDay::new(16, 0, "Home").unwrap();
        assert_eq!(t.seconds_of_day(), 16 * 3600);
        let t = TimeOfDay::new(11, 30, "Rest").unwrap();
        assert_eq!(t.seconds_of_day(), 11 * 3600 + 30 * 60);
    }
}
