//! Slot scheduling and schedule summaries.
//!
//! Places generated rounds onto match days, kickoff times and pitches.
//!
//! # Algorithm
//!
//! `SlotScheduler` is greedy and never backtracks: pairings are placed in
//! fixture order into the current slot while pitches remain, a pairing that
//! clashes with the slot is dropped, and each round starts a fresh slot.
//! It is not optimal, but it is predictable and preserves round order.
//!
//! # Summary
//!
//! `ScheduleSummary` compares placed against expected matches and reports
//! per-day and per-competitor load, for surfacing a truncation warning.

mod slot;
mod summary;

pub use slot::{ScheduleRequest, SlotScheduler};
pub use summary::ScheduleSummary;
