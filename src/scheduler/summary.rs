//! Schedule summary metrics.
//!
//! Computes what an organiser checks before publishing a fixture.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Expected | Group matches the fixture called for |
//! | Scheduled | Group matches actually placed |
//! | Completion Rate | scheduled / expected |
//! | Matches per Day | Placed matches (final included) by day |
//! | Matches per Competitor | Group matches each competitor plays |
//! | Slots Used | Distinct (day, time) kickoffs |
//! | Last Kickoff | Latest (day, time) in the schedule |
//! | Final Overrun | Final starts outside its day window |

use std::collections::BTreeMap;

use crate::models::{MatchDays, Schedule, TimeOfDay};

/// Schedule summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    /// Group matches the fixture called for.
    pub expected_matches: usize,
    /// Group matches placed.
    pub scheduled_matches: usize,
    /// scheduled / expected (1.0 when nothing was expected).
    pub completion_rate: f64,
    /// Matches per day, final included.
    pub matches_per_day: BTreeMap<u32, usize>,
    /// Group matches per competitor.
    pub matches_per_competitor: BTreeMap<String, usize>,
    /// Distinct kickoff slots used.
    pub slots_used: usize,
    /// Latest kickoff as (day, time).
    pub last_kickoff: Option<(u32, TimeOfDay)>,
    /// Whether the final kicks off outside its day window.
    pub final_overruns_window: bool,
}

impl ScheduleSummary {
    /// Computes the summary of a schedule against its calendar.
    ///
    /// `matches_per_competitor` only lists names found in the schedule; use
    /// [`ScheduleSummary::with_competitors`] to count idle competitors too.
    pub fn calculate(schedule: &Schedule, days: &MatchDays) -> Self {
        let expected = schedule.expected_group_matches;
        let scheduled = schedule.group_match_count();

        let mut matches_per_day: BTreeMap<u32, usize> = BTreeMap::new();
        for m in &schedule.matches {
            *matches_per_day.entry(m.day).or_insert(0) += 1;
        }

        let mut matches_per_competitor: BTreeMap<String, usize> = BTreeMap::new();
        for m in schedule.group_matches() {
            *matches_per_competitor.entry(m.home.clone()).or_insert(0) += 1;
            *matches_per_competitor.entry(m.away.clone()).or_insert(0) += 1;
        }

        let final_overruns_window = schedule.final_match().is_some_and(|f| {
            days.window(f.day).map_or(true, |window| !window.contains(f.time))
        });

        let completion_rate = if expected == 0 {
            1.0
        } else {
            scheduled as f64 / expected as f64
        };

        Self {
            expected_matches: expected,
            scheduled_matches: scheduled,
            completion_rate,
            matches_per_day,
            matches_per_competitor,
            slots_used: schedule.slots().len(),
            last_kickoff: schedule.matches.iter().map(|m| m.slot()).max(),
            final_overruns_window,
        }
    }

    /// Adds `competitors` with zero matches where the schedule never placed them.
    pub fn with_competitors<S: AsRef<str>>(mut self, competitors: &[S]) -> Self {
        for c in competitors {
            self.matches_per_competitor.entry(c.as_ref().to_string()).or_insert(0);
        }
        self
    }

    /// Whether every expected group match was placed.
    pub fn is_complete(&self) -> bool {
        self.scheduled_matches >= self.expected_matches
    }

    /// Human-readable warning for a truncated schedule.
    pub fn shortfall_warning(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        Some(format!(
            "only {} of {} matches could be scheduled; add days, pitches or time",
            self.scheduled_matches, self.expected_matches
        ))
    }

    /// Difference between the busiest and quietest competitor.
    pub fn match_count_spread(&self) -> usize {
        let max = self.matches_per_competitor.values().max().copied().unwrap_or(0);
        let min = self.matches_per_competitor.values().min().copied().unwrap_or(0);
        max - min
    }
}
