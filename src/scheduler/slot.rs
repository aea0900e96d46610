//! Greedy pitch/time-slot scheduler.
//!
//! # Algorithm
//!
//! Rounds are placed in order, pairings within a round in order. A cursor
//! tracks (day, kickoff time, next free pitch) plus the competitors already
//! playing in the current slot. For each pairing:
//!
//! 1. If the kickoff time has left the day's window, move to the next day's
//!    start (pitch 1, empty slot). Past the last day, scheduling stops.
//! 2. If a pitch is free and neither side already plays in this slot, place
//!    the match and take the pitch.
//! 3. Once every pitch is taken, open the next slot one match duration later.
//!
//! A pairing that clashes with the current slot while pitches remain is
//! dropped, not retried. Every round ends by opening a fresh slot.
//!
//! # Complexity
//! O(p) for p pairings.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{FixtureError, Result};
use crate::models::{MatchDays, Pairing, Round, Schedule, ScheduledMatch, TimeOfDay};

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Rounds to place, in order.
    pub rounds: Vec<Round>,
    /// Match days and their kickoff windows.
    pub days: MatchDays,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(rounds: Vec<Round>, days: MatchDays) -> Self {
        Self { rounds, days }
    }

    /// Total pairings across all rounds.
    pub fn pairing_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }
}

/// Greedy slot scheduler.
///
/// # Example
///
/// ```
/// use fixture_schedule::fixture::generate_rounds;
/// use fixture_schedule::models::{DayWindow, MatchDays};
/// use fixture_schedule::scheduler::SlotScheduler;
///
/// let rounds = generate_rounds(&["A", "B", "C", "D"], 1, false);
/// let days = MatchDays::default().with_day(DayWindow::parse("09:00", "17:00").unwrap());
///
/// let schedule = SlotScheduler::new().with_venues(2).schedule(&rounds, &days).unwrap();
/// assert_eq!(schedule.group_match_count(), 6);
/// assert!(!schedule.is_truncated());
/// ```
#[derive(Debug, Clone)]
pub struct SlotScheduler {
    venues: u32,
    match_duration_min: u32,
    add_final: bool,
}

impl SlotScheduler {
    /// Creates a scheduler with one pitch, 30-minute matches and no final.
    pub fn new() -> Self {
        Self {
            venues: 1,
            match_duration_min: 30,
            add_final: false,
        }
    }

    /// Sets the number of pitches.
    pub fn with_venues(mut self, venues: u32) -> Self {
        self.venues = venues;
        self
    }

    /// Sets the match duration (minutes), which is also the slot length.
    pub fn with_match_duration(mut self, minutes: u32) -> Self {
        self.match_duration_min = minutes;
        self
    }

    /// Appends a final after the last group match when `true`.
    pub fn with_final(mut self, add_final: bool) -> Self {
        self.add_final = add_final;
        self
    }

    /// Places `rounds` onto the calendar.
    ///
    /// Fails only for zero pitches, zero-length matches or an empty
    /// calendar. Running out of room is reported through
    /// [`Schedule::is_truncated`], not as an error.
    pub fn schedule(&self, rounds: &[Round], days: &MatchDays) -> Result<Schedule> {
        self.check()?;
        let first = days
            .window(1)
            .ok_or_else(|| FixtureError::InvalidConfig("at least one match day is required".into()))?;

        let expected: usize = rounds.iter().map(Round::len).sum();
        let mut schedule = Schedule::new(expected);
        let mut cursor = SlotCursor::new(first.start);

        'rounds: for round in rounds {
            for pairing in &round.pairings {
                if !cursor.settle_day(days) {
                    warn!(
                        round = round.number,
                        day_count = days.day_count(),
                        "calendar exhausted; remaining pairings dropped"
                    );
                    break 'rounds;
                }

                if cursor.venue <= self.venues && !cursor.clashes(pairing) {
                    schedule.push(ScheduledMatch::group(
                        cursor.day,
                        cursor.time,
                        cursor.venue,
                        &pairing.home,
                        &pairing.away,
                    ));
                    cursor.occupy(pairing);
                } else if cursor.venue <= self.venues {
                    debug!(
                        home = %pairing.home,
                        away = %pairing.away,
                        day = cursor.day,
                        time = %cursor.time,
                        "pairing clashes with current slot; dropped"
                    );
                }

                if cursor.venue > self.venues {
                    cursor.next_slot(self.match_duration_min);
                }
            }
            cursor.next_slot(self.match_duration_min);
        }

        if self.add_final {
            self.append_final(&mut schedule, days);
        }

        if schedule.is_truncated() {
            warn!(
                scheduled = schedule.group_match_count(),
                expected = schedule.expected_group_matches,
                "schedule truncated: not enough days, pitches or time"
            );
        } else {
            info!(
                scheduled = schedule.group_match_count(),
                expected = schedule.expected_group_matches,
                "schedule complete"
            );
        }

        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<Schedule> {
        self.schedule(&request.rounds, &request.days)
    }

    fn check(&self) -> Result<()> {
        if self.venues == 0 {
            return Err(FixtureError::InvalidConfig("venue count must be at least 1".into()));
        }
        if self.match_duration_min == 0 {
            return Err(FixtureError::InvalidConfig(
                "match duration must be at least 1 minute".into(),
            ));
        }
        Ok(())
    }

    /// Adds the final one match duration after the last group match, on
    /// the same day. The day window is not enforced for the final.
    fn append_final(&self, schedule: &mut Schedule, days: &MatchDays) {
        let Some(last) = schedule.last_group_match() else {
            return;
        };
        let day = last.day;
        let time = last.time.plus_minutes(self.match_duration_min);

        if days.window(day).is_some_and(|w| !w.contains(time)) {
            warn!(day, time = %time, "final kicks off outside the day window");
        }
        schedule.push(ScheduledMatch::final_match(day, time));
    }
}

impl Default for SlotScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-run placement state.
struct SlotCursor<'a> {
    day: u32,
    time: TimeOfDay,
    venue: u32,
    active: HashSet<&'a str>,
}

impl<'a> SlotCursor<'a> {
    fn new(start: TimeOfDay) -> Self {
        Self {
            day: 1,
            time: start,
            venue: 1,
            active: HashSet::new(),
        }
    }

    /// Rolls forward to the first day whose window still admits the
    /// cursor. Returns `false` once past the last day.
    fn settle_day(&mut self, days: &MatchDays) -> bool {
        loop {
            let Some(window) = days.window(self.day) else {
                return false;
            };
            if self.time < window.end {
                return true;
            }

            self.day += 1;
            let Some(next) = days.window(self.day) else {
                return false;
            };
            debug!(day = self.day, start = %next.start, "rolling over to next day");
            self.time = next.start;
            self.venue = 1;
            self.active.clear();
        }
    }

    fn clashes(&self, pairing: &Pairing) -> bool {
        self.active.contains(pairing.home.as_str()) || self.active.contains(pairing.away.as_str())
    }

    fn occupy(&mut self, pairing: &'a Pairing) {
        self.active.insert(&pairing.home);
        self.active.insert(&pairing.away);
        self.venue += 1;
    }

    fn next_slot(&mut self, match_duration_min: u32) {
        self.time = self.time.plus_minutes(match_duration_min);
        self.venue = 1;
        self.active.clear();
    }
}
