//! Pairings and rounds produced by fixture generation.

use serde::{Deserialize, Serialize};

/// One home/away meeting between two competitors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    /// Home competitor.
    pub home: String,
    /// Away competitor.
    pub away: String,
}

impl Pairing {
    /// Creates a new pairing.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// The same meeting with home and away swapped.
    pub fn reversed(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }

    /// Whether `competitor` plays in this pairing.
    pub fn involves(&self, competitor: &str) -> bool {
        self.home == competitor || self.away == competitor
    }

    /// Order-independent key, for comparing meetings regardless of venue side.
    pub fn unordered_key(&self) -> (&str, &str) {
        if self.home <= self.away {
            (&self.home, &self.away)
        } else {
            (&self.away, &self.home)
        }
    }
}

/// Which pass of the round-robin a round belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leg {
    /// First meeting of every pair.
    First,
    /// Return meeting with home and away reversed.
    Second,
}

/// Pairings produced by one rotation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number across both legs.
    pub number: usize,
    /// Leg this round belongs to.
    pub leg: Leg,
    /// Pairings in generation order.
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// Creates a first-leg round.
    pub fn new(number: usize, pairings: Vec<Pairing>) -> Self {
        Self {
            number,
            leg: Leg::First,
            pairings,
        }
    }

    /// The return round: every pairing reversed, renumbered.
    pub fn return_leg(&self, number: usize) -> Self {
        Self {
            number,
            leg: Leg::Second,
            pairings: self.pairings.iter().map(Pairing::reversed).collect(),
        }
    }

    /// Number of pairings.
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether the round has no pairings.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Whether `competitor` plays in this round.
    pub fn involves(&self, competitor: &str) -> bool {
        self.pairings.iter().any(|p| p.involves(competitor))
    }
}
