//! Property tests for the training formulas.

use fitness_tracker_core::{Running, SportsWalking, Swimming, Training};
use proptest::prelude::*;

fn decimals_per_field(message: &str) -> Vec<usize> {
    message
        .split(|c: char| c == ' ' || c == ';')
        .filter(|token| token.contains('.') && token.chars().next().map_or(false, |c| c.is_ascii_digit()))
        .map(|token| {
            let token = token.trim_end_matches('.');
            token.split_once('.').map_or(0, |(_, frac)| frac.len())
        })
        .collect()
}

proptest! {
    #[test]
    fn running_metrics_are_finite_and_non_negative(
        action in 0u32..100_000,
        duration in 0.01f64..24.0,
        weight in 20.0f64..250.0,
    ) {
        let run = Running::new(action, duration, weight).unwrap();
        for value in [run.distance_km(), run.mean_speed_kmh(), run.spent_calories()] {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn walking_metrics_are_finite_and_non_negative(
        action in 0u32..100_000,
        duration in 0.01f64..24.0,
        weight in 20.0f64..250.0,
        height in 50.0f64..250.0,
    ) {
        let walk = SportsWalking::new(action, duration, weight, height).unwrap();
        for value in [walk.distance_km(), walk.mean_speed_kmh(), walk.spent_calories()] {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn swimming_speed_ignores_strokes(
        strokes_a in 0u32..10_000,
        strokes_b in 0u32..10_000,
        duration in 0.01f64..10.0,
        length in 1u32..100,
        laps in 0u32..500,
    ) {
        let a = Swimming::new(strokes_a, duration, 70.0, length, laps).unwrap();
        let b = Swimming::new(strokes_b, duration, 70.0, length, laps).unwrap();
        prop_assert_eq!(a.mean_speed_kmh(), b.mean_speed_kmh());
        prop_assert_eq!(a.spent_calories(), b.spent_calories());
    }

    #[test]
    fn message_has_three_decimals_per_number(
        action in 0u32..100_000,
        duration in 0.01f64..24.0,
        weight in 20.0f64..250.0,
    ) {
        let info = Running::new(action, duration, weight).unwrap().show_training_info();
        let message = info.get_message();
        prop_assert_eq!(&message, &info.get_message());
        prop_assert_eq!(decimals_per_field(&message), vec![3, 3, 3, 3]);
    }
}
