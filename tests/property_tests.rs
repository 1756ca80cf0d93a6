//! Property-based tests for challenge selection and grading.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{Duration, NaiveDate};
use daily_swipe::core::{
    judge, next_challenge_id, todays_challenge_id, Guess, ResultLog, TriviaItem, UserResult,
};
use proptest::prelude::*;
use std::num::NonZeroU32;

fn item(proposed: f64, actual: f64) -> TriviaItem {
    TriviaItem {
        id: "p-1".to_string(),
        name: "Probe".to_string(),
        proposed_value: proposed,
        actual_value: actual,
        unit: "Units".to_string(),
        context: "Context".to_string(),
        fact: "Fact".to_string(),
        emoji: "🎲".to_string(),
    }
}

prop_compose! {
    fn arbitrary_date()(offset in 0i64..36_500) -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    }
}

prop_compose! {
    fn arbitrary_size()(n in 1u32..500) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }
}

fn arbitrary_guess() -> impl Strategy<Value = Guess> {
    prop_oneof![Just(Guess::Higher), Just(Guess::Lower)]
}

proptest! {
    #[test]
    fn todays_id_is_in_range(date in arbitrary_date(), size in arbitrary_size()) {
        let id = todays_challenge_id(date, size);
        prop_assert!((1..=size.get()).contains(&id));
    }

    #[test]
    fn todays_id_is_stable_within_a_day(date in arbitrary_date(), size in arbitrary_size()) {
        prop_assert_eq!(todays_challenge_id(date, size), todays_challenge_id(date, size));
    }

    #[test]
    fn consecutive_days_advance_like_next_id(date in arbitrary_date(), size in arbitrary_size()) {
        let tomorrow = date + Duration::days(1);
        // Holds within a year; New Year resets the ordinal.
        prop_assume!(date.format("%Y").to_string() == tomorrow.format("%Y").to_string());
        prop_assert_eq!(
            todays_challenge_id(tomorrow, size),
            next_challenge_id(todays_challenge_id(date, size), size)
        );
    }

    #[test]
    fn next_id_stays_in_range(size in arbitrary_size(), seed in any::<u32>()) {
        let current = seed % size.get() + 1;
        let next = next_challenge_id(current, size);
        prop_assert!((1..=size.get()).contains(&next));
    }

    #[test]
    fn next_id_wraps_at_catalog_end(size in arbitrary_size()) {
        prop_assert_eq!(next_challenge_id(size.get(), size), 1);
    }

    #[test]
    fn cycling_visits_every_challenge(size in 1u32..60) {
        let size = NonZeroU32::new(size).unwrap();
        let mut id = 1;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..size.get() {
            seen.insert(id);
            id = next_challenge_id(id, size);
        }
        prop_assert_eq!(seen.len() as u32, size.get());
        prop_assert_eq!(id, 1);
    }

    #[test]
    fn at_most_one_guess_is_correct(
        proposed in 0.0f64..1e9,
        actual in 0.0f64..1e9,
    ) {
        let item = item(proposed, actual);
        let higher = judge(&item, Guess::Higher);
        let lower = judge(&item, Guess::Lower);
        prop_assert!(!(higher && lower));
        prop_assert_eq!(higher || lower, proposed != actual);
    }

    #[test]
    fn equal_values_are_never_correct(value in 0.0f64..1e9, guess in arbitrary_guess()) {
        prop_assert!(!judge(&item(value, value), guess));
    }

    #[test]
    fn score_counts_correct_results(
        answers in prop::collection::vec((0.0f64..1e6, 0.0f64..1e6, arbitrary_guess()), 0..12)
    ) {
        let mut log = ResultLog::new();
        let mut expected = 0;
        for (proposed, actual, guess) in answers {
            let result = UserResult::grade(&item(proposed, actual), guess);
            if result.correct() {
                expected += 1;
            }
            log = log.record(result);
        }
        prop_assert_eq!(log.score(), expected);
    }
}
