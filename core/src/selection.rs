//! Choosing which champion, ability and rank to quiz.

use crate::{
    champion::{ChampionDetail, ChampionSummary, Spell},
    config::{QuizConfig, RankPolicy},
    error::{QuizError, QuizResult},
    profile::AbilityCooldownProfile,
    rng::QuizRng,
    types::{Rank, SpellSlot},
};

const KEYBINDS: [char; 4] = ['Q', 'W', 'E', 'R'];

pub fn select_champion<'a>(
    champions: &[&'a ChampionSummary],
    rng: &mut QuizRng,
) -> QuizResult<&'a ChampionSummary> {
    if champions.is_empty() {
        return Err(QuizError::NoChampions);
    }
    Ok(champions[rng.index_below(champions.len())])
}

#[derive(Debug, Clone, Copy)]
pub struct SpellPick<'a> {
    pub spell: &'a Spell,
    pub slot:  SpellSlot,
}

/// The ultimate slot is picked with `ultimate_chance`; the other slots
/// split the remainder evenly. A slot the champion doesn't have falls
/// back to a uniform pick.
pub fn select_spell<'a>(
    detail: &'a ChampionDetail,
    config: &QuizConfig,
    rng: &mut QuizRng,
) -> QuizResult<SpellPick<'a>> {
    if detail.spells.is_empty() {
        return Err(QuizError::NoSpells {
            champion: detail.id.clone(),
        });
    }

    let roll = rng.next_f64();
    let mut slot = if roll < config.ultimate_chance || config.ultimate_slot == 0 {
        config.ultimate_slot
    } else {
        let basic_share = (1.0 - config.ultimate_chance) / config.ultimate_slot as f64;
        let basic = ((roll - config.ultimate_chance) / basic_share) as usize;
        basic.min(config.ultimate_slot - 1)
    };

    if slot >= detail.spells.len() {
        let fallback = rng.index_below(detail.spells.len());
        log::warn!(
            "{} has no spell slot {slot}; using slot {fallback}",
            detail.id
        );
        slot = fallback;
    }

    Ok(SpellPick {
        spell: &detail.spells[slot],
        slot,
    })
}

pub fn select_rank(profile: &AbilityCooldownProfile, policy: RankPolicy, rng: &mut QuizRng) -> Rank {
    match policy {
        RankPolicy::FirstRank => 1,
        RankPolicy::AnyRank => 1 + rng.index_below(profile.max_rank()),
    }
}

pub fn keybind(slot: SpellSlot) -> char {
    KEYBINDS.get(slot).copied().unwrap_or('?')
}
