//! Phase 3: three candidates for the cooldown at maximum rank.
//!
//! The true max-rank value and the rank-1 value are always offered; the
//! rest are whole-second offsets from the max-rank value within one
//! bucket width.

use crate::{
    bucketing::bucket_width,
    error::{QuizError, QuizResult},
    profile::AbilityCooldownProfile,
    rng::QuizRng,
    types::Seconds,
};

pub const MAX_RANK_OPTION_COUNT: usize = 3;

pub fn max_rank_options(
    profile: &AbilityCooldownProfile,
    rng: &mut QuizRng,
) -> QuizResult<Vec<Seconds>> {
    let max_rank_cd = profile.max_rank_cooldown();
    let rank_one_cd = profile.rank_one();

    let mut options = Vec::with_capacity(MAX_RANK_OPTION_COUNT);
    options.push(max_rank_cd);
    if rank_one_cd != max_rank_cd {
        options.push(rank_one_cd);
    }

    let width = bucket_width(max_rank_cd) as i64;
    let mut pool: Vec<Seconds> = (-width..=width)
        .filter(|&offset| offset != 0)
        .map(|offset| max_rank_cd + offset as Seconds)
        .filter(|&candidate| candidate > 0.0 && candidate != rank_one_cd)
        .collect();

    while options.len() < MAX_RANK_OPTION_COUNT {
        if pool.is_empty() {
            return Err(QuizError::InvariantViolation {
                detail: format!("no max-rank distractor available around {max_rank_cd}"),
            });
        }
        let idx = rng.index_below(pool.len());
        options.push(pool.swap_remove(idx));
    }

    rng.shuffle(&mut options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cds: &[Seconds]) -> AbilityCooldownProfile {
        AbilityCooldownProfile::new(cds.to_vec(), cds.len()).unwrap()
    }

    #[test]
    fn both_anchors_present() {
        let p = profile(&[8.0, 7.0, 6.0, 5.0, 4.0]);
        for seed in 0..50 {
            let mut rng = QuizRng::new(seed, 1);
            let options = max_rank_options(&p, &mut rng).unwrap();
            assert!(options.contains(&4.0));
            assert!(options.contains(&8.0));
        }
    }

    #[test]
    fn flat_cooldown_gets_two_distractors() {
        let p = profile(&[10.0, 10.0, 10.0]);
        let mut rng = QuizRng::new(5, 1);
        let options = max_rank_options(&p, &mut rng).unwrap();
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|&v| (7.0..=13.0).contains(&v)));
    }

    #[test]
    fn tiny_cooldown_distractors_stay_positive() {
        let p = profile(&[1.0, 0.5]);
        for seed in 0..50 {
            let mut rng = QuizRng::new(seed, 1);
            let options = max_rank_options(&p, &mut rng).unwrap();
            assert!(options.iter().all(|&v| v > 0.0), "{options:?}");
        }
    }
}
