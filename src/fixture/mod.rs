//! Round-robin fixture generation.
//!
//! Turns a list of competitors into ordered rounds of pairings using the
//! circle method. Rounds carry no times or pitches; placing them is the
//! job of [`crate::scheduler`].
//!
//! # Determinism
//!
//! The competitor order is shuffled by a ChaCha8 stream seeded from the
//! caller's seed. ChaCha8 output is stable across platforms and releases,
//! so a published seed reproduces the same fixture.

mod circle;

pub use circle::{expected_match_count, generate_rounds, FixtureGenerator};
