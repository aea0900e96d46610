//! Property tests for fixture generation and slot scheduling.

use std::collections::{HashMap, HashSet};

use fixture_schedule::fixture::{expected_match_count, generate_rounds};
use fixture_schedule::models::{DayWindow, MatchDays, MatchType, TimeOfDay};
use fixture_schedule::scheduler::SlotScheduler;
use proptest::prelude::*;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Club {i}")).collect()
}

fn calendar(days: u32, start_h: u32, span_h: u32) -> MatchDays {
    let window = DayWindow::new(TimeOfDay::hm(start_h, 0), TimeOfDay::hm(start_h + span_h, 0));
    MatchDays::new(vec![window; days as usize])
}

proptest! {
    #[test]
    fn single_leg_meets_every_pair_once(n in 2usize..16, seed in any::<u64>()) {
        let rounds = generate_rounds(&names(n), seed, false);
        let mut seen = HashSet::new();
        for p in rounds.iter().flat_map(|r| &r.pairings) {
            let (a, b) = p.unordered_key();
            prop_assert!(seen.insert((a.to_string(), b.to_string())));
        }
        prop_assert_eq!(seen.len(), expected_match_count(n, false));
    }

    #[test]
    fn two_legs_meet_once_per_orientation(n in 2usize..12, seed in any::<u64>()) {
        let rounds = generate_rounds(&names(n), seed, true);
        let mut ordered = HashSet::new();
        for p in rounds.iter().flat_map(|r| &r.pairings) {
            prop_assert!(ordered.insert((p.home.clone(), p.away.clone())));
        }
        prop_assert_eq!(ordered.len(), expected_match_count(n, true));
        for (home, away) in &ordered {
            prop_assert!(ordered.contains(&(away.clone(), home.clone())));
        }
    }

    #[test]
    fn rounds_are_bounded_and_disjoint(n in 2usize..16, seed in any::<u64>()) {
        let rounds = generate_rounds(&names(n), seed, false);
        for r in &rounds {
            prop_assert!(r.len() <= n / 2);
            let mut teams = HashSet::new();
            for p in &r.pairings {
                prop_assert!(teams.insert(p.home.as_str()));
                prop_assert!(teams.insert(p.away.as_str()));
            }
        }
    }

    #[test]
    fn generation_is_reproducible(n in 0usize..14, seed in any::<u64>(), two_legs in any::<bool>()) {
        let teams = names(n);
        prop_assert_eq!(
            generate_rounds(&teams, seed, two_legs),
            generate_rounds(&teams, seed, two_legs)
        );
    }

    #[test]
    fn schedule_respects_slots_and_order(
        n in 2usize..14,
        seed in any::<u64>(),
        two_legs in any::<bool>(),
        venues in 1u32..5,
        duration in prop::sample::select(vec![15u32, 20, 30, 45, 60]),
        days in 1u32..4,
        span_h in 1u32..9,
        add_final in any::<bool>(),
    ) {
        let rounds = generate_rounds(&names(n), seed, two_legs);
        let calendar = calendar(days, 9, span_h);
        let schedule = SlotScheduler::new()
            .with_venues(venues)
            .with_match_duration(duration)
            .with_final(add_final)
            .schedule(&rounds, &calendar)
            .unwrap();

        prop_assert_eq!(schedule.expected_group_matches, expected_match_count(n, two_legs));
        prop_assert!(schedule.group_match_count() <= schedule.expected_group_matches);

        let mut by_slot: HashMap<(u32, TimeOfDay), (HashSet<u32>, HashSet<String>)> = HashMap::new();
        for m in schedule.group_matches() {
            prop_assert!(m.venue >= 1 && m.venue <= venues);
            prop_assert!(calendar.window(m.day).unwrap().contains(m.time));
            let (used_venues, teams) = by_slot.entry(m.slot()).or_default();
            prop_assert!(used_venues.insert(m.venue));
            prop_assert!(teams.insert(m.home.clone()));
            prop_assert!(teams.insert(m.away.clone()));
        }

        for pair in schedule.matches.windows(2) {
            prop_assert!(pair[0].slot() <= pair[1].slot());
        }

        let finals = schedule
            .matches
            .iter()
            .filter(|m| m.match_type == MatchType::Final)
            .count();
        let expect_final = add_final && schedule.group_match_count() > 0;
        prop_assert_eq!(finals, usize::from(expect_final));
    }
}
