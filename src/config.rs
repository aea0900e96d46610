//! Tournament configuration.
//!
//! Everything a scheduling run needs, passed explicitly into each call.
//! Unset fields take the defaults below; nothing is shared between runs.
//!
//! | Field | Default |
//! |-------|---------|
//! | `pitches` | 3 |
//! | `match_duration_min` | 30 |
//! | `days` | 2 |
//! | `seed` | 42 |
//! | `day_windows` | 13:00–17:00, 09:00–17:00 |
//! | `two_legs` / `add_final` | false |
//!
//! Days without a window use [`DEFAULT_WINDOW_START`]–[`DEFAULT_WINDOW_END`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fixture::{expected_match_count, FixtureGenerator};
use crate::models::{DayWindow, MatchDays, Schedule};
use crate::scheduler::{ScheduleRequest, SlotScheduler};

/// Start of the window used for days without one.
pub const DEFAULT_WINDOW_START: &str = "09:00";
/// End of the window used for days without one.
pub const DEFAULT_WINDOW_END: &str = "17:00";

/// A day window as entered, in `HH:MM` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// First kickoff.
    pub start: String,
    /// Kickoff cutoff (exclusive).
    pub end: String,
}

impl WindowSpec {
    /// Creates a window spec.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses into a [`DayWindow`].
    pub fn parse(&self) -> Result<DayWindow> {
        DayWindow::parse(&self.start, &self.end)
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_START, DEFAULT_WINDOW_END)
    }
}

/// Parameters of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Competitor names, in entry order.
    pub competitors: Vec<String>,
    /// Kit colours by competitor, for printed fixtures. Not used for scheduling.
    pub kit_colors: BTreeMap<String, String>,
    /// Shuffle seed.
    pub seed: u64,
    /// Number of pitches.
    pub pitches: u32,
    /// Match duration and slot length (minutes).
    pub match_duration_min: u32,
    /// Number of match days.
    pub days: u32,
    /// Kickoff window per day; missing days use the default window.
    pub day_windows: Vec<WindowSpec>,
    /// Play every pair twice with home and away reversed.
    pub two_legs: bool,
    /// Append a final after the last group match.
    pub add_final: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            competitors: Vec::new(),
            kit_colors: BTreeMap::new(),
            seed: 42,
            pitches: 3,
            match_duration_min: 30,
            days: 2,
            day_windows: vec![
                WindowSpec::new("13:00", "17:00"),
                WindowSpec::new("09:00", "17:00"),
            ],
            two_legs: false,
            add_final: false,
        }
    }
}

impl TournamentConfig {
    /// Creates a config with default settings and the given competitors.
    pub fn new<S: Into<String>>(competitors: impl IntoIterator<Item = S>) -> Self {
        Self {
            competitors: competitors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Reads a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use fixture_schedule::config::TournamentConfig;
    ///
    /// let config = TournamentConfig::from_json_str(
    ///     r#"{ "competitors": ["A", "B", "C"], "pitches": 1 }"#,
    /// ).unwrap();
    /// assert_eq!(config.pitches, 1);
    /// assert_eq!(config.match_duration_min, 30);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of pitches.
    pub fn with_pitches(mut self, pitches: u32) -> Self {
        self.pitches = pitches;
        self
    }

    /// Sets the match duration (minutes).
    pub fn with_match_duration(mut self, minutes: u32) -> Self {
        self.match_duration_min = minutes;
        self
    }

    /// Sets the number of days and replaces the day windows.
    pub fn with_days(mut self, days: u32, windows: Vec<WindowSpec>) -> Self {
        self.days = days;
        self.day_windows = windows;
        self
    }

    /// Enables or disables the return leg.
    pub fn with_two_legs(mut self, two_legs: bool) -> Self {
        self.two_legs = two_legs;
        self
    }

    /// Enables or disables the final.
    pub fn with_final(mut self, add_final: bool) -> Self {
        self.add_final = add_final;
        self
    }

    /// Records a competitor's kit colours.
    pub fn with_kit_color(mut self, competitor: impl Into<String>, colors: impl Into<String>) -> Self {
        self.kit_colors.insert(competitor.into(), colors.into());
        self
    }

    /// Kit colours for a competitor.
    pub fn kit_color(&self, competitor: &str) -> Option<&str> {
        self.kit_colors.get(competitor).map(String::as_str)
    }

    /// Parses the day windows, padding missing days with the default window.
    pub fn match_days(&self) -> Result<MatchDays> {
        let windows = self
            .day_windows
            .iter()
            .take(self.days as usize)
            .map(WindowSpec::parse)
            .collect::<Result<Vec<_>>>()?;
        let default = WindowSpec::default().parse()?;
        Ok(MatchDays::padded(self.days, &windows, default))
    }

    /// Fixture generator for this config.
    pub fn fixture_generator(&self) -> FixtureGenerator {
        FixtureGenerator::new()
            .with_seed(self.seed)
            .with_two_legs(self.two_legs)
    }

    /// Slot scheduler for this config.
    pub fn slot_scheduler(&self) -> SlotScheduler {
        SlotScheduler::new()
            .with_venues(self.pitches)
            .with_match_duration(self.match_duration_min)
            .with_final(self.add_final)
    }

    /// Generates the rounds and parses the calendar.
    pub fn to_request(&self) -> Result<ScheduleRequest> {
        let days = self.match_days()?;
        let rounds = self.fixture_generator().generate(&self.competitors);
        Ok(ScheduleRequest::new(rounds, days))
    }

    /// Theoretical group match count for this config.
    pub fn expected_matches(&self) -> usize {
        expected_match_count(self.competitors.len(), self.two_legs)
    }
}

/// Runs fixture generation and slot scheduling for `config`.
///
/// ```
/// use fixture_schedule::config::{generate_schedule, TournamentConfig};
///
/// let config = TournamentConfig::new(["A", "B", "C", "D"]).with_seed(1);
/// let schedule = generate_schedule(&config).unwrap();
/// assert_eq!(schedule.group_match_count(), 6);
/// ```
pub fn generate_schedule(config: &TournamentConfig) -> Result<Schedule> {
    let request = config.to_request()?;
    config.slot_scheduler().schedule_request(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use crate::models::TimeOfDay;

    fn youth_cup() -> TournamentConfig {
        TournamentConfig::new([
            "Wargrave Wolves",
            "Oakfield Eagles",
            "Wollaston Blue",
            "Parkfield Youth",
            "Ware Lions",
            "Ware FC",
            "West Wight Youth",
            "Brading Youth",
            "Brockworth Albion",
            "Gurnard Rockets",
        ])
    }

    #[test]
    fn test_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.pitches, 3);
        assert_eq!(config.match_duration_min, 30);
        assert_eq!(config.days, 2);
        assert_eq!(config.seed, 42);
        assert!(!config.two_legs);
        assert!(!config.add_final);

        let days = config.match_days().unwrap();
        assert_eq!(days.window(1).unwrap().start, TimeOfDay::hm(13, 0));
        assert_eq!(days.window(2).unwrap().start, TimeOfDay::hm(9, 0));
    }

    #[test]
    fn test_missing_windows_padded() {
        let config = youth_cup().with_days(3, vec![WindowSpec::new("10:00", "12:00")]);
        let days = config.match_days().unwrap();
        assert_eq!(days.day_count(), 3);
        assert_eq!(days.window(1).unwrap().end, TimeOfDay::hm(12, 0));
        assert_eq!(days.window(3).unwrap(), &WindowSpec::default().parse().unwrap());
    }

    #[test]
    fn test_malformed_window_is_error() {
        let config = youth_cup().with_days(1, vec![WindowSpec::new("9am", "17:00")]);
        let err = generate_schedule(&config).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidTime { ref input, .. } if input == "9am"));
    }

    #[test]
    fn test_json_roundtrip_and_defaults() {
        let config = TournamentConfig::from_json_str(
            r#"{
                "competitors": ["A", "B"],
                "kit_colors": { "A": "Green" },
                "day_windows": [{ "start": "08:00", "end": "12:00" }],
                "days": 1,
                "two_legs": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.kit_color("A"), Some("Green"));
        assert_eq!(config.kit_color("B"), None);
        assert_eq!(config.pitches, 3);
        assert!(config.two_legs);

        let back = TournamentConfig::from_json_str(&config.to_json_string().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_bad_json() {
        let err = TournamentConfig::from_json_str("{ \"pitches\": -1 }").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }

    #[test]
    fn test_default_youth_cup_is_truncated() {
        // 45 matches, 3 pitches, 8 + 16 slots across two days
        let config = youth_cup();
        let schedule = generate_schedule(&config).unwrap();
        assert_eq!(schedule.expected_group_matches, config.expected_matches());
        assert_eq!(config.expected_matches(), 45);
        assert!(schedule.group_match_count() <= 45);
        assert!(schedule.group_match_count() > 0);
    }

    #[test]
    fn test_same_config_same_schedule() {
        let config = youth_cup().with_two_legs(true).with_final(true);
        assert_eq!(
            generate_schedule(&config).unwrap(),
            generate_schedule(&config).unwrap()
        );
    }

    #[test]
    fn test_ample_calendar_schedules_everything() {
        let config = youth_cup()
            .with_pitches(5)
            .with_days(2, vec![WindowSpec::new("08:00", "20:00"); 2])
            .with_final(true);
        let schedule = generate_schedule(&config).unwrap();
        assert!(!schedule.is_truncated());
        assert_eq!(schedule.group_match_count(), 45);
        assert!(schedule.final_match().is_some());
    }

    #[test]
    fn test_zero_days_is_error() {
        let config = youth_cup().with_days(0, Vec::new());
        assert!(matches!(
            generate_schedule(&config),
            Err(FixtureError::InvalidConfig(_))
        ));
    }
}
