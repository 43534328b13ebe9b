//! Invariants every generated question must satisfy, swept across
//! many cooldown magnitudes and seeds.

use cooldown_quiz_core::{
    profile::AbilityCooldownProfile,
    question::{assemble_question, QuestionOptions},
    range_options::range_options,
    rng::QuizRng,
};

const SEEDS: u64 = 40;

fn sample_cooldowns() -> Vec<f64> {
    let mut values: Vec<f64> = (1..=200).map(|v| v as f64).collect();
    values.extend((0..=80).map(|v| v as f64 + 0.5));
    values.extend([0.75, 4.75, 5.25, 7.25, 13.75, 82.5, 147.5]);
    values
}

fn single_rank(value: f64) -> AbilityCooldownProfile {
    AbilityCooldownProfile::new(vec![value], 1).expect("valid profile")
}

fn distinct(values: &[f64]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, a)| values[i + 1..].iter().all(|b| a != b))
}

fn build(value: f64, seed: u64) -> QuestionOptions {
    let mut rng = QuizRng::new(seed, 1);
    assemble_question(&single_rank(value), 1, &mut rng).expect("question")
}

#[test]
fn ranges_never_overlap() {
    for value in sample_cooldowns() {
        let mut rng = QuizRng::new(7, 1);
        let ranges = range_options(value, &mut rng);
        assert_eq!(ranges.len(), 3, "value {value}");
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                assert!(!a.overlaps(b), "{value}: {a:?} overlaps {b:?}");
                assert_ne!(a.label, b.label, "{value}: duplicate label");
            }
        }
    }
}

#[test]
fn exactly_one_range_contains_the_answer() {
    for value in sample_cooldowns() {
        for seed in 0..SEEDS {
            let q = build(value, seed);
            let holders: Vec<_> = q.phase1_options.iter().filter(|r| r.contains(value)).collect();
            assert_eq!(holders.len(), 1, "value {value}: {:?}", q.phase1_options);
            assert_eq!(holders[0], &q.correct_range);
        }
    }
}

#[test]
fn ranges_are_never_negative() {
    for value in sample_cooldowns() {
        let mut rng = QuizRng::new(3, 1);
        for r in range_options(value, &mut rng) {
            assert!(r.min >= 0.0, "{value}: {r:?}");
            assert!(r.min < r.max);
        }
    }
}

#[test]
fn every_phase_has_three_distinct_positive_options() {
    for value in sample_cooldowns() {
        for seed in 0..SEEDS {
            let q = build(value, seed);
            assert_eq!(q.phase2_options.len(), 3);
            assert_eq!(q.phase3_options.len(), 3);
            assert!(distinct(&q.phase2_options), "{value}: {:?}", q.phase2_options);
            assert!(distinct(&q.phase3_options), "{value}: {:?}", q.phase3_options);
            assert!(q.phase2_options.contains(&q.correct_phase2));
            assert!(q.phase3_options.contains(&q.correct_phase3));
            for v in q.phase2_options.iter().chain(&q.phase3_options) {
                assert!(*v > 0.0, "{value}: non-positive option {v}");
            }
        }
    }
}

/// Bounds printed in a label such as `"6-8s"`.
fn shown_bounds(label: &str) -> (f64, f64) {
    let (lo, hi) = label
        .strip_suffix('s')
        .and_then(|l| l.split_once('-'))
        .expect("label shape");
    (lo.parse().expect("low bound"), hi.parse().expect("high bound"))
}

#[test]
fn correct_label_shows_the_answer() {
    for value in sample_cooldowns() {
        let q = build(value, 0);
        let (lo, hi) = shown_bounds(&q.correct_range.label);
        assert!(lo <= value && value <= hi, "{value} outside {}", q.correct_range.label);
    }
}

#[test]
fn exact_options_sit_inside_the_picked_label() {
    for value in sample_cooldowns() {
        for seed in 0..SEEDS {
            let q = build(value, seed);
            let r = &q.correct_range;
            let (lo, hi) = shown_bounds(&r.label);
            for v in &q.phase2_options {
                if r.width() < 3.0 {
                    // A 2s tile holds too few grid slots, so the window
                    // grows past its top edge.
                    assert!(*v >= r.min && *v <= r.max + 1.0, "{value}: {v} outside {r:?}");
                } else {
                    assert!(*v >= lo && *v <= hi, "{value}: {v} outside {}", r.label);
                    assert!(r.contains(*v), "{value}: {v} outside {r:?}");
                }
            }
        }
    }
}

#[test]
fn exact_options_match_precision() {
    for value in sample_cooldowns() {
        for seed in 0..SEEDS {
            let q = build(value, seed);
            for v in q.phase2_options.iter().filter(|v| **v != value) {
                if value.fract() == 0.0 {
                    assert_eq!(v.fract(), 0.0, "{value}: {v}");
                } else {
                    assert_eq!(v.fract(), 0.5, "{value}: {v}");
                }
            }
        }
    }
}

#[test]
fn phase3_always_offers_both_anchors() {
    let tables: [&[f64]; 5] = [
        &[8.0, 7.0, 6.0, 5.0, 4.0],
        &[130.0, 105.0, 80.0],
        &[26.0, 23.0, 20.0, 17.0, 14.0],
        &[5.5, 5.25, 5.0, 4.75, 4.5],
        &[12.0, 12.0, 12.0, 12.0, 12.0],
    ];
    for table in tables {
        let profile = AbilityCooldownProfile::new(table.to_vec(), table.len()).unwrap();
        for seed in 0..SEEDS {
            let mut rng = QuizRng::new(seed, 1);
            let q = assemble_question(&profile, 1, &mut rng).unwrap();
            assert!(q.phase3_options.contains(&profile.max_rank_cooldown()));
            assert!(q.phase3_options.contains(&profile.rank_one()));
        }
    }
}

#[test]
fn asked_rank_must_exist() {
    let profile = AbilityCooldownProfile::new(vec![10.0, 9.0, 8.0], 3).unwrap();
    let mut rng = QuizRng::new(1, 1);
    assert!(assemble_question(&profile, 0, &mut rng).is_err());
    assert!(assemble_question(&profile, 4, &mut rng).is_err());
    assert!(assemble_question(&profile, 3, &mut rng).is_ok());
}
