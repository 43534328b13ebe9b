//! Question assembly: the engine's single entry point.
//!
//! ORDER (fixed):
//!   1. Look up the asked rank's cooldown.
//!   2. Phase 1 ranges, then find the one holding the answer.
//!   3. Phase 2 exact values inside that range.
//!   4. Phase 3 max-rank values, independent of 2–3.
//!
//! Every draw comes from the caller's QuizRng, so a fixed seed
//! reproduces the whole question.

use crate::{
    error::{QuizError, QuizResult},
    exact_options::exact_options,
    max_rank_options::max_rank_options,
    profile::AbilityCooldownProfile,
    range_options::{range_options, RangeOption},
    rng::QuizRng,
    types::{Rank, Seconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOptions {
    pub phase1_options: Vec<RangeOption>,
    pub phase2_options: Vec<Seconds>,
    pub phase3_options: Vec<Seconds>,
    pub correct_range:  RangeOption,
    pub correct_phase2: Seconds,
    pub correct_phase3: Seconds,
}

pub fn assemble_question(
    profile: &AbilityCooldownProfile,
    asked_rank: Rank,
    rng: &mut QuizRng,
) -> QuizResult<QuestionOptions> {
    let true_value = profile.at_rank(asked_rank)?;

    let phase1_options = range_options(true_value, rng);
    let correct_range = phase1_options
        .iter()
        .find(|range| range.contains(true_value))
        .cloned()
        .ok_or_else(|| QuizError::InvariantViolation {
            detail: format!("no generated range contains {true_value}"),
        })?;

    let phase2_options = exact_options(true_value, correct_range.min, correct_range.max, rng)?;
    let phase3_options = max_rank_options(profile, rng)?;

    log::debug!(
        "question rank={asked_rank}/{} cd={true_value} range={} phase3={}",
        profile.max_rank(),
        correct_range.label,
        profile.max_rank_cooldown()
    );

    Ok(QuestionOptions {
        phase1_options,
        phase2_options,
        phase3_options,
        correct_range,
        correct_phase2: true_value,
        correct_phase3: profile.max_rank_cooldown(),
    })
}
