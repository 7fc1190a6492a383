//! The persisted configuration record.
//!
//! A flat record holding the two schedule times as `HH:MM` strings plus the
//! IANA timezone name. Where the record lives (a config file, a key-value
//! store) is the caller's concern; this module owns the shape, the defaults,
//! and the validation that keeps malformed input away from the evaluator.
//!
//! Records written before the `timezone` field existed deserialize with the
//! default zone.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ShiftError;
use crate::schedule::{ScheduleKind, TimeOfDay, DEFAULT_HOME, DEFAULT_REST};

/// Default timezone: the fixed UTC+8 zone of the original display.
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Display labels for the two schedules.
const REST_LABEL: &str = "Rest";
const HOME_LABEL: &str = "Home";

/// The two configured targets plus the zone they are interpreted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Rest-break target, `HH:MM`.
    pub rest: String,
    /// Home-departure target, `HH:MM`.
    pub home: String,
    /// IANA timezone name the targets are evaluated in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            rest: DEFAULT_REST.to_string(),
            home: DEFAULT_HOME.to_string(),
            timezone: default_timezone(),
        }
    }
}

impl ShiftConfig {
    /// Deserialize and validate a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidConfig`] if the JSON does not parse, or
    /// the validation error for a field that parses but is malformed.
    pub fn from_json(s: &str) -> Result<Self, ShiftError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ShiftError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ShiftError> {
        serde_json::to_string_pretty(self).map_err(|e| ShiftError::InvalidConfig(e.to_string()))
    }

    /// Check every field without converting.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidTimeOfDay`] for a malformed time string
    /// or [`ShiftError::InvalidTimezone`] for an unknown zone name.
    pub fn validate(&self) -> Result<(), ShiftError> {
        self.rest_schedule()?;
        self.home_schedule()?;
        self.tz()?;
        Ok(())
    }

    /// The configured timezone.
    pub fn tz(&self) -> Result<Tz, ShiftError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ShiftError::InvalidTimezone(format!("'{}'", self.timezone)))
    }

    /// The rest-break target as a validated [`TimeOfDay`].
    pub fn rest_schedule(&self) -> Result<TimeOfDay, ShiftError> {
        TimeOfDay::parse(&self.rest, REST_LABEL)
    }

    /// The home-departure target as a validated [`TimeOfDay`].
    pub fn home_schedule(&self) -> Result<TimeOfDay, ShiftError> {
        TimeOfDay::parse(&self.home, HOME_LABEL)
    }

    /// Update one schedule's time, rejecting the value before storing it.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidTimeOfDay`] if `value` is not a valid
    /// `HH:MM` string; the config is left unchanged.
    pub fn set(&mut self, kind: ScheduleKind, value: &str) -> Result<(), ShiftError> {
        match kind {
            ScheduleKind::Rest => {
                TimeOfDay::parse(value, REST_LABEL)?;
                self.rest = value.to_string();
            }
            ScheduleKind::Home => {
                TimeOfDay::parse(value, HOME_LABEL)?;
                self.home = value.to_string();
            }
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
