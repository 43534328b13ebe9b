//! Worked examples with known answers.

use cooldown_quiz_core::{
    bucketing::bucket_width,
    profile::AbilityCooldownProfile,
    question::assemble_question,
    rng::{QuizRng, RngBank, RngSlot},
};

#[test]
fn standard_ability_rank_one() {
    let profile = AbilityCooldownProfile::new(vec![8.0, 7.0, 6.0, 5.0, 4.0], 5).unwrap();
    let mut rng = RngBank::new(2024).for_slot(RngSlot::Question);
    let q = assemble_question(&profile, 1, &mut rng).unwrap();

    assert_eq!(bucket_width(8.0), 3.0);
    assert_eq!(q.correct_range.min, 6.0);
    assert_eq!(q.correct_range.max, 9.0);
    assert_eq!(q.correct_range.label, "6-8s");
    assert_eq!(q.correct_phase2, 8.0);
    assert_eq!(q.correct_phase3, 4.0);

    let mut labels: Vec<_> = q.phase1_options.iter().map(|r| r.label.as_str()).collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["3-5s", "6-8s", "9-11s"]);
}

#[test]
fn capstone_single_rank() {
    let profile = AbilityCooldownProfile::new(vec![130.0], 1).unwrap();
    let mut rng = QuizRng::new(9, 1);
    let q = assemble_question(&profile, 1, &mut rng).unwrap();

    assert_eq!(q.correct_range.min, 120.0);
    assert_eq!(q.correct_range.max, 140.0);
    assert_eq!(q.correct_range.min % 30.0, 0.0);
    assert_eq!(q.correct_range.label, "120-140s");

    let mut bounds: Vec<_> = q.phase1_options.iter().map(|r| (r.min, r.max)).collect();
    bounds.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in bounds.windows(2) {
        assert_eq!(pair[1].0 - pair[0].1, 10.0, "gap between {pair:?}");
    }
}

#[test]
fn capstone_text_example_tiles() {
    // 115s rounds to 120 but the 120-140 window would miss it.
    let profile = AbilityCooldownProfile::new(vec![115.0], 1).unwrap();
    let mut rng = QuizRng::new(1, 1);
    let q = assemble_question(&profile, 1, &mut rng).unwrap();
    assert_eq!((q.correct_range.min, q.correct_range.max), (100.0, 120.0));
    assert!(q.phase1_options.iter().any(|r| r.min == 130.0 && r.max == 150.0));
}

#[test]
fn fractional_cooldown_uses_half_seconds() {
    let profile = AbilityCooldownProfile::new(vec![6.5, 6.0, 5.5], 3).unwrap();
    for seed in 0..25 {
        let mut rng = QuizRng::new(seed, 1);
        let q = assemble_question(&profile, 1, &mut rng).unwrap();
        assert!(
            q.phase2_options.iter().all(|v| v.fract() == 0.5),
            "{:?}",
            q.phase2_options
        );
        let mut sorted = q.phase2_options.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(sorted, vec![6.5, 7.5, 8.5]);
    }
}

#[test]
fn max_rank_question_on_ultimate() {
    let profile = AbilityCooldownProfile::new(vec![130.0, 105.0, 80.0], 3).unwrap();
    let mut rng = QuizRng::new(77, 1);
    let q = assemble_question(&profile, 2, &mut rng).unwrap();
    assert_eq!(q.correct_phase2, 105.0);
    assert_eq!(q.correct_phase3, 80.0);
    assert!(q.phase3_options.contains(&130.0));
    // 80 is in the ≤80 band, so distractors sit within ±10.
    let distractor = q
        .phase3_options
        .iter()
        .find(|v| **v != 80.0 && **v != 130.0)
        .copied()
        .unwrap();
    assert!((70.0..=90.0).contains(&distractor));
}
