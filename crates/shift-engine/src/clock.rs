//! The countdown evaluator.
//!
//! [`evaluate`] is a pure transition function: configured target + explicit
//! `now` anchor → [`ClockState`] snapshot. The caller (a once-per-second
//! driver, a test) owns the clock; re-invoking with the same anchor yields
//! an identical snapshot, and a skipped tick self-corrects on the next one
//! because every invocation starts from the true current instant.
//!
//! # Weekend Policy
//!
//! - **Sunday** is a holiday: no target, no countdown, a terminal
//!   [`ClockStatus::Holiday`] state with a zero display.
//! - **Saturday** moves the home departure up to 14:00 and marks the label
//!   with a `" (Saturday)"` qualifier. Rest breaks are unaffected.

use chrono::{DateTime, Datelike, Timelike, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

use crate::schedule::{ScheduleKind, TimeOfDay};

/// Hour of the fixed day-start anchor used for progress computation.
///
/// Progress runs from 0% at 08:00 to 100% at the target. Assumed to mean
/// "start of workday"; kept as a constant rather than made configurable.
pub const PROGRESS_ANCHOR_HOUR: u32 = 8;

/// Saturday home-departure override: everyone leaves at 14:00.
const SATURDAY_HOME_HOURS: u32 = 14;
const SATURDAY_HOME_MINUTES: u32 = 0;

/// Qualifier appended to the home label when the Saturday override applies.
const SATURDAY_SUFFIX: &str = " (Saturday)";

// ── ClockState ──────────────────────────────────────────────────────────────

/// The display state of one schedule at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockStatus {
    /// Counting down toward today's target.
    Counting,
    /// Today's target has passed.
    Completed,
    /// Sunday — the countdown is suspended for the day.
    Holiday,
}

/// A snapshot of one schedule's countdown, recomputed per tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockState {
    /// Schedule label, with `" (Saturday)"` appended under the override.
    pub label: String,
    /// Where the countdown stands.
    pub status: ClockStatus,
    /// Remaining duration as zero-padded `HH:MM:SS` (`"00:00:00"` once
    /// completed or on holiday).
    pub diff_text: String,
    /// `max(0, target - now)` in whole seconds.
    pub remaining_seconds: i64,
    /// Percentage in `[0, 100]` of the anchor-to-target span already elapsed.
    pub progress: f64,
    /// True iff `now >= target` (also true in the holiday state).
    pub is_completed: bool,
    /// Today's concrete target as `YYYY-MM-DD HH:MM`; `None` on holiday.
    pub target_local: Option<String>,
}

// ── evaluate ────────────────────────────────────────────────────────────────

/// Evaluate one schedule against an explicit `now` anchor.
///
/// Pure and total: weekend policy is applied first, then the target is
/// constructed as today's date combined with the schedule's hours/minutes
/// (seconds zeroed), and the remaining duration and anchored progress are
/// derived from seconds-of-day arithmetic. The system clock is never read.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
/// use shift_engine::{evaluate, ClockStatus, ScheduleKind, TimeOfDay};
///
/// let tz: Tz = "Asia/Shanghai".parse().unwrap();
/// let home = TimeOfDay::new(16, 0, "Home").unwrap();
///
/// // Wednesday, one second before the target.
/// let now = tz.with_ymd_and_hms(2026, 2, 18, 15, 59, 59).unwrap();
/// let state = evaluate(&home, ScheduleKind::Home, now);
/// assert_eq!(state.diff_text, "00:00:01");
/// assert_eq!(state.status, ClockStatus::Counting);
/// ```
pub fn evaluate(schedule: &TimeOfDay, kind: ScheduleKind, now: DateTime<Tz>) -> ClockState {
    if now.weekday() == Weekday::Sun {
        return holiday_state(&schedule.label);
    }

    let saturday_home = now.weekday() == Weekday::Sat && kind == ScheduleKind::Home;
    let (target_secs, label) = if saturday_home {
        (
            i64::from(SATURDAY_HOME_HOURS) * 3600 + i64::from(SATURDAY_HOME_MINUTES) * 60,
            format!("{}{}", schedule.label, SATURDAY_SUFFIX),
        )
    } else {
        (schedule.seconds_of_day(), schedule.label.clone())
    };

    let now_secs = i64::from(now.num_seconds_from_midnight());
    let remaining = (target_secs - now_secs).max(0);
    let completed = remaining == 0;

    let progress = if completed {
        100.0
    } else {
        progress_percent(target_secs, remaining)
    };

    let target_local = format!(
        "{} {:02}:{:02}",
        now.date_naive(),
        target_secs / 3600,
        (target_secs % 3600) / 60,
    );

    ClockState {
        label,
        status: if completed {
            ClockStatus::Completed
        } else {
            ClockStatus::Counting
        },
        diff_text: format_countdown(remaining),
        remaining_seconds: remaining,
        progress,
        is_completed: completed,
        target_local: Some(target_local),
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// The Sunday state: no target, zero display, completed-equivalent.
fn holiday_state(label: &str) -> ClockState {
    ClockState {
        label: label.to_string(),
        status: ClockStatus::Holiday,
        diff_text: format_countdown(0),
        remaining_seconds: 0,
        progress: 100.0,
        is_completed: true,
        target_local: None,
    }
}

/// Progress of the anchor→target span, in percent.
///
/// 0% at or before the 08:00 anchor, 100% at the target. A non-positive
/// span (target at or before the anchor) is substituted with 1 second to
/// guard the division; such targets sit at 0% until they complete.
fn progress_percent(target_secs: i64, remaining: i64) -> f64 {
    let anchor_secs = i64::from(PROGRESS_ANCHOR_HOUR) * 3600;
    let span = (target_secs - anchor_secs).max(1);
    let pending = remaining.clamp(0, span);
    let fraction = (span - pending) as f64 / span as f64;
    (fraction * 100.0).clamp(0.0, 100.0)
}

/// Decompose non-negative seconds as zero-padded `HH:MM:SS`.
///
/// Targets are always same-day, so the hours component stays below 24.
fn format_countdown(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

// ── Tests ───────────────────────────────────────────────────────────────────
