//! Tournament scheduling domain models.
//!
//! Provides the data types passed between fixture generation and slot
//! scheduling, and the schedule handed to the presentation layer.
//!
//! # Domain Mappings
//!
//! | fixture-schedule | Football | Tennis | Esports |
//! |------------------|----------|--------|---------|
//! | Competitor | Team | Player | Team/Player |
//! | Venue | Pitch | Court | Station |
//! | Round | Matchday | Round | Round |
//! | Slot | Kickoff | Session | Time block |

mod calendar;
mod pairing;
mod schedule;

pub use calendar::{DayWindow, MatchDays, TimeOfDay};
pub use pairing::{Leg, Pairing, Round};
pub use schedule::{MatchType, Schedule, ScheduledMatch, FINAL_AWAY_LABEL, FINAL_HOME_LABEL};
