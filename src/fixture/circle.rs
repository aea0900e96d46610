//! Circle-method round-robin generator.
//!
//! # Algorithm
//!
//! 1. Shuffle the competitors with a ChaCha8 generator seeded from `seed`.
//! 2. For an odd count, add an empty seat (the bye) to make the count even.
//! 3. Seat 0 stays fixed; seats 1..n form a ring.
//! 4. Each round pairs seat `i` with seat `n - 1 - i`, drops the pairing
//!    holding the bye, then rotates the ring one step clockwise (the last
//!    seat moves to seat 1).
//! 5. With two legs, every round is repeated with home and away swapped.
//!
//! # Complexity
//! O(n²) pairings for n competitors.
//!
//! # Reference
//! Kirkman (1847), "On a problem in combinations"; the "circle method"
//! as described in de Werra (1981), "Scheduling in sports".

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::models::{Pairing, Round};

/// Deterministic round-robin fixture generator.
///
/// The same competitor list, seed and leg setting always produce the same
/// rounds: the shuffle draws from a generator built fresh for each call.
///
/// # Example
///
/// ```
/// use fixture_schedule::fixture::FixtureGenerator;
///
/// let teams = ["A", "B", "C", "D"];
/// let rounds = FixtureGenerator::new().with_seed(1).generate(&teams);
///
/// assert_eq!(rounds.len(), 3);
/// assert!(rounds.iter().all(|r| r.len() == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator {
    seed: u64,
    two_legs: bool,
}

impl FixtureGenerator {
    /// Creates a single-leg generator with seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables the return leg.
    pub fn with_two_legs(mut self, two_legs: bool) -> Self {
        self.two_legs = two_legs;
        self
    }

    /// The shuffle seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether a return leg is generated.
    pub fn two_legs(&self) -> bool {
        self.two_legs
    }

    /// Generates all rounds for `competitors`.
    ///
    /// Fewer than two competitors yields no rounds. Names are not checked
    /// for uniqueness.
    pub fn generate<S: AsRef<str>>(&self, competitors: &[S]) -> Vec<Round> {
        if competitors.len() < 2 {
            return Vec::new();
        }

        let mut seats: Vec<Option<&str>> = competitors.iter().map(|c| Some(c.as_ref())).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        seats.shuffle(&mut rng);

        if seats.len() % 2 != 0 {
            seats.push(None);
        }
        let n = seats.len();

        let mut rounds = Vec::with_capacity(if self.two_legs { 2 * (n - 1) } else { n - 1 });
        for round_idx in 0..n - 1 {
            let pairings: Vec<Pairing> = (0..n / 2)
                .filter_map(|i| match (seats[i], seats[n - 1 - i]) {
                    (Some(home), Some(away)) => Some(Pairing::new(home, away)),
                    _ => None,
                })
                .collect();

            debug!(round = round_idx + 1, pairings = pairings.len(), "generated round");
            rounds.push(Round::new(round_idx + 1, pairings));

            // [fixed] + [last] + [1..n-1]
            seats[1..].rotate_right(1);
        }

        if self.two_legs {
            let first_leg = rounds.len();
            let return_rounds: Vec<Round> = rounds
                .iter()
                .enumerate()
                .map(|(i, r)| r.return_leg(first_leg + i + 1))
                .collect();
            rounds.extend(return_rounds);
        }

        rounds
    }
}

/// Generates rounds for `competitors` with the given seed and leg setting.
pub fn generate_rounds<S: AsRef<str>>(competitors: &[S], seed: u64, two_legs: bool) -> Vec<Round> {
    FixtureGenerator::new()
        .with_seed(seed)
        .with_two_legs(two_legs)
        .generate(competitors)
}

/// Theoretical number of group matches: C(n, 2), doubled for two legs.
pub fn expected_match_count(competitors: usize, two_legs: bool) -> usize {
    let single = competitors * competitors.saturating_sub(1) / 2;
    if two_legs {
        single * 2
    } else {
        single
    }
}
