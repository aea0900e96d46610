//! Round-robin fixture generation and pitch scheduling.
//!
//! Turns a list of competitors into a timetable of matches across a fixed
//! number of days and pitches. Presentation (forms, tables, spreadsheet or
//! document export) is left to the caller, which supplies a
//! [`config::TournamentConfig`] and reads back a [`models::Schedule`].
//!
//! # Modules
//!
//! - **`fixture`**: Seeded circle-method round-robin (`FixtureGenerator`)
//! - **`scheduler`**: Greedy day/time/pitch placement (`SlotScheduler`) and
//!   `ScheduleSummary`
//! - **`models`**: Domain types — `Pairing`, `Round`, `TimeOfDay`,
//!   `DayWindow`, `MatchDays`, `ScheduledMatch`, `Schedule`
//! - **`config`**: Explicit per-run configuration and the end-to-end
//!   `generate_schedule` pipeline
//! - **`validation`**: Opt-in input checks (zero counts, bad windows,
//!   duplicate names)
//!
//! # Pipeline
//!
//! ```
//! use fixture_schedule::config::{generate_schedule, TournamentConfig, WindowSpec};
//! use fixture_schedule::scheduler::ScheduleSummary;
//!
//! let config = TournamentConfig::new(["Eagles", "Wolves", "Lions", "Rockets", "Albion"])
//!     .with_pitches(2)
//!     .with_days(1, vec![WindowSpec::new("09:00", "14:00")])
//!     .with_final(true);
//!
//! let schedule = generate_schedule(&config).unwrap();
//! let summary = ScheduleSummary::calculate(&schedule, &config.match_days().unwrap());
//! assert_eq!(summary.expected_matches, 10);
//! assert!(summary.is_complete());
//! ```
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

pub mod config;
pub mod error;
pub mod fixture;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{FixtureError, Result};
