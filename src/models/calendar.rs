//! Match-day calendar: times of day and per-day kickoff windows.
//!
//! # Time Model
//! Times are whole minutes since midnight of the match day. Arithmetic never
//! wraps, so a cursor pushed past midnight still compares as later than any
//! time earlier that day. Such times render with an hour of 24 or more
//! (`24:15`), so the text form stays ordered and round-trips.
//!
//! # Windows
//! A [`DayWindow`] is the half-open interval `[start, end)` of allowed kickoff
//! times. A match may start at `start`; a match starting at `end` or later
//! belongs to the next day.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A kickoff time, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Creates a time from hours and minutes. Values are not range-checked.
    pub const fn hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    /// Parses a 24-hour `HH:MM` string.
    ///
    /// ```
    /// use fixture_schedule::models::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("13:30").unwrap();
    /// assert_eq!(t.minutes(), 13 * 60 + 30);
    /// assert!(TimeOfDay::parse("25:00").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|source| {
            FixtureError::InvalidTime {
                input: input.to_string(),
                source,
            }
        })?;
        Ok(Self(time.hour() * 60 + time.minute()))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// This time shifted later by `minutes`.
    #[inline]
    pub fn plus_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Whether the time has been pushed past midnight.
    pub fn is_past_midnight(&self) -> bool {
        self.0 >= MINUTES_PER_DAY
    }

    /// Parses `HH:MM`, also accepting hours of 24 and above for times
    /// carried past midnight.
    fn parse_extended(input: &str) -> Result<Self> {
        let err = match Self::parse(input) {
            Ok(time) => return Ok(time),
            Err(err) => err,
        };
        if let Some((hours, minutes)) = input.trim().split_once(':') {
            if let (Ok(h), Ok(m)) = (hours.parse::<u32>(), minutes.parse::<u32>()) {
                if h >= 24 && minutes.len() == 2 && m < 60 {
                    return Ok(Self::hm(h, m));
                }
            }
        }
        Err(err)
    }

    /// Wall-clock time (wraps past midnight).
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt((self.0 % MINUTES_PER_DAY) * 60, 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = FixtureError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_extended(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Allowed kickoff interval for one match day, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// First allowed kickoff (inclusive).
    pub start: TimeOfDay,
    /// Kickoff cutoff (exclusive).
    pub end: TimeOfDay,
}

impl DayWindow {
    /// Creates a new window.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses a window from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?))
    }

    /// Whether a kickoff at `time` is allowed.
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether no kickoff is possible in this window.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Number of kickoff slots of `match_duration_min` that fit in the window.
    pub fn slot_count(&self, match_duration_min: u32) -> u32 {
        if self.is_empty() || match_duration_min == 0 {
            return 0;
        }
        let span = self.end.minutes() - self.start.minutes();
        span.div_ceil(match_duration_min)
    }
}

/// The ordered match days of a tournament, one window per day.
///
/// Day indices are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDays {
    windows: Vec<DayWindow>,
}

impl MatchDays {
    /// Creates a calendar from explicit windows (one per day).
    pub fn new(windows: Vec<DayWindow>) -> Self {
        Self { windows }
    }

    /// Creates a calendar of `day_count` days.
    ///
    /// Missing windows are padded with `default`; windows beyond `day_count`
    /// are ignored.
    pub fn padded(day_count: u32, windows: &[DayWindow], default: DayWindow) -> Self {
        let windows = (0..day_count as usize)
            .map(|i| windows.get(i).copied().unwrap_or(default))
            .collect();
        Self { windows }
    }

    /// Adds a day at the end.
    pub fn with_day(mut self, window: DayWindow) -> Self {
        self.windows.push(window);
        self
    }

    /// Number of match days.
    pub fn day_count(&self) -> u32 {
        self.windows.len() as u32
    }

    /// Window for a 1-based day index.
    pub fn window(&self, day: u32) -> Option<&DayWindow> {
        if day == 0 {
            return None;
        }
        self.windows.get(day as usize - 1)
    }

    /// All windows in day order.
    pub fn windows(&self) -> &[DayWindow] {
        &self.windows
    }

    /// Whether there are no match days.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Upper bound on kickoff slots across all days.
    pub fn total_slots(&self, match_duration_min: u32) -> u32 {
        self.windows
            .iter()
            .map(|w| w.slot_count(match_duration_min))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t = TimeOfDay::parse("09:05").unwrap();
        assert_eq!(t, TimeOfDay::hm(9, 5));
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(TimeOfDay::parse(" 17:00 ").unwrap(), TimeOfDay::hm(17, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "noon", "24:00", "12:60", "12-30"] {
            let err = TimeOfDay::parse(bad).unwrap_err();
            assert!(matches!(err, FixtureError::InvalidTime { .. }), "{bad}");
        }
    }

    #[test]
    fn test_past_midnight_keeps_ordering() {
        let late = TimeOfDay::hm(23, 45).plus_minutes(30);
        assert!(late > TimeOfDay::hm(23, 45));
        assert!(late.is_past_midnight());
        assert_eq!(late.to_string(), "24:15");
        assert_eq!(late.to_naive_time(), NaiveTime::from_hms_opt(0, 15, 0).unwrap());
    }

    #[test]
    fn test_past_midnight_serde_roundtrip() {
        let late = TimeOfDay::hm(23, 30).plus_minutes(30);
        let json = serde_json::to_string(&late).unwrap();
        assert_eq!(json, "\"24:00\"");
        assert_eq!(serde_json::from_str::<TimeOfDay>(&json).unwrap(), late);

        // Entered windows stay strict
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(serde_json::from_str::<TimeOfDay>("\"24:5\"").is_err());
        assert!(serde_json::from_str::<TimeOfDay>("\"23:60\"").is_err());
    }

    #[test]
    fn test_window_is_half_open() {
        let w = DayWindow::parse("09:00", "09:30").unwrap();
        assert!(w.contains(TimeOfDay::hm(9, 0)));
        assert!(w.contains(TimeOfDay::hm(9, 29)));
        assert!(!w.contains(TimeOfDay::hm(9, 30)));
        assert!(!w.contains(TimeOfDay::hm(8, 59)));
    }

    #[test]
    fn test_slot_count() {
        let w = DayWindow::new(TimeOfDay::hm(13, 0), TimeOfDay::hm(17, 0));
        assert_eq!(w.slot_count(30), 8);
        assert_eq!(w.slot_count(45), 6); // 13:00 .. 16:45
        assert_eq!(DayWindow::new(TimeOfDay::hm(10, 0), TimeOfDay::hm(10, 0)).slot_count(30), 0);

        let days = MatchDays::new(vec![w, DayWindow::parse("09:00", "17:00").unwrap()]);
        assert_eq!(days.total_slots(30), 24);
    }

    #[test]
    fn test_padded_days() {
        let first = DayWindow::parse("13:00", "17:00").unwrap();
        let default = DayWindow::parse("09:00", "17:00").unwrap();
        let days = MatchDays::padded(3, &[first], default);

        assert_eq!(days.day_count(), 3);
        assert_eq!(days.window(1), Some(&first));
        assert_eq!(days.window(3), Some(&default));
        assert!(days.window(0).is_none());
        assert!(days.window(4).is_none());
    }

    #[test]
    fn test_padded_ignores_extra_windows() {
        let w = DayWindow::parse("09:00", "10:00").unwrap();
        let days = MatchDays::padded(1, &[w, w, w], w);
        assert_eq!(days.day_count(), 1);
    }

    #[test]
    fn test_time_serde_as_string() {
        let json = serde_json::to_string(&TimeOfDay::hm(8, 0)).unwrap();
        assert_eq!(json, "\"08:00\"");
        let back: TimeOfDay = serde_json::from_str("\"16:30\"").unwrap();
        assert_eq!(back, TimeOfDay::hm(16, 30));
        assert!(serde_json::from_str::<TimeOfDay>("\"4pm\"").is_err());
    }
}
