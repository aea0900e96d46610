//! Schedule (solution) model.
//!
//! A schedule is the chronological list of matches placed on a
//! (day, time, pitch) triple, together with the number of group matches
//! the fixture called for. A schedule holding fewer group matches than
//! expected is truncated: the calendar ran out of room.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::TimeOfDay;

/// Home label of the appended final.
pub const FINAL_HOME_LABEL: &str = "Ranked #1 Team";
/// Away label of the appended final.
pub const FINAL_AWAY_LABEL: &str = "Ranked #2 Team";

/// Classification of scheduled matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Round-robin group match.
    Group,
    /// Championship final between placeholder finalists.
    Final,
}

/// A match placed on a day, kickoff time and pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// Match day (1-based).
    pub day: u32,
    /// Kickoff time.
    pub time: TimeOfDay,
    /// Pitch (1-based).
    pub venue: u32,
    /// Home competitor.
    pub home: String,
    /// Away competitor.
    pub away: String,
    /// Group or final.
    pub match_type: MatchType,
}

impl ScheduledMatch {
    /// Creates a group match.
    pub fn group(
        day: u32,
        time: TimeOfDay,
        venue: u32,
        home: impl Into<String>,
        away: impl Into<String>,
    ) -> Self {
        Self {
            day,
            time,
            venue,
            home: home.into(),
            away: away.into(),
            match_type: MatchType::Group,
        }
    }

    /// Creates the final on pitch 1 with placeholder finalists.
    pub fn final_match(day: u32, time: TimeOfDay) -> Self {
        Self {
            day,
            time,
            venue: 1,
            home: FINAL_HOME_LABEL.to_string(),
            away: FINAL_AWAY_LABEL.to_string(),
            match_type: MatchType::Final,
        }
    }

    /// The (day, time) slot this match occupies.
    #[inline]
    pub fn slot(&self) -> (u32, TimeOfDay) {
        (self.day, self.time)
    }

    /// Whether `competitor` plays in this match.
    pub fn involves(&self, competitor: &str) -> bool {
        self.home == competitor || self.away == competitor
    }

    /// Whether this is a round-robin match.
    pub fn is_group(&self) -> bool {
        self.match_type == MatchType::Group
    }
}

/// A complete match schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Matches in chronological order.
    pub matches: Vec<ScheduledMatch>,
    /// Group matches the fixture called for.
    pub expected_group_matches: usize,
}

impl Schedule {
    /// Creates an empty schedule expecting `expected_group_matches`.
    pub fn new(expected_group_matches: usize) -> Self {
        Self {
            matches: Vec::new(),
            expected_group_matches,
        }
    }

    /// Appends a match.
    pub fn push(&mut self, m: ScheduledMatch) {
        self.matches.push(m);
    }

    /// Total matches, final included.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Group matches actually scheduled.
    pub fn group_match_count(&self) -> usize {
        self.group_matches().count()
    }

    /// Group matches that could not be placed.
    pub fn missing_match_count(&self) -> usize {
        self.expected_group_matches.saturating_sub(self.group_match_count())
    }

    /// Whether fewer group matches were placed than expected.
    ///
    /// Callers should surface this as a warning to the organiser.
    pub fn is_truncated(&self) -> bool {
        self.missing_match_count() > 0
    }

    /// Iterates over group matches.
    pub fn group_matches(&self) -> impl Iterator<Item = &ScheduledMatch> {
        self.matches.iter().filter(|m| m.is_group())
    }

    /// The appended final, if any.
    pub fn final_match(&self) -> Option<&ScheduledMatch> {
        self.matches.iter().find(|m| m.match_type == MatchType::Final)
    }

    /// The last scheduled group match.
    pub fn last_group_match(&self) -> Option<&ScheduledMatch> {
        self.matches.iter().rev().find(|m| m.is_group())
    }

    /// Returns all matches for a competitor.
    pub fn matches_for(&self, competitor: &str) -> Vec<&ScheduledMatch> {
        self.matches.iter().filter(|m| m.involves(competitor)).collect()
    }

    /// Returns all matches on a day.
    pub fn matches_on_day(&self, day: u32) -> Vec<&ScheduledMatch> {
        self.matches.iter().filter(|m| m.day == day).collect()
    }

    /// Returns all matches kicking off in a (day, time) slot.
    pub fn matches_in_slot(&self, day: u32, time: TimeOfDay) -> Vec<&ScheduledMatch> {
        self.matches.iter().filter(|m| m.slot() == (day, time)).collect()
    }

    /// Distinct (day, time) slots in use, in chronological order.
    pub fn slots(&self) -> Vec<(u32, TimeOfDay)> {
        self.matches
            .iter()
            .map(ScheduledMatch::slot)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
