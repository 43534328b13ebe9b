//! Champion data as served by the game-data CDN.
//!
//! Only the fields the quiz uses are modelled; everything else in the
//! payload is ignored.

use crate::{
    error::{QuizError, QuizResult},
    profile::AbilityCooldownProfile,
    types::{ChampionId, Rank, Seconds},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    pub full: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChampionSummary {
    pub id: ChampionId,
    pub name: String,
    pub image: ImageRef,
}

/// `champion.json`: every champion, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionList {
    pub version: String,
    pub data: BTreeMap<ChampionId, ChampionSummary>,
}

impl ChampionList {
    /// Summaries in id order, so seeded selection is stable.
    pub fn champions(&self) -> Vec<&ChampionSummary> {
        self.data.values().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spell {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tooltip: String,
    pub cooldown: Vec<Seconds>,
    #[serde(rename = "cooldownBurn", default)]
    pub cooldown_burn: String,
    #[serde(rename = "maxrank")]
    pub max_rank: Rank,
    pub image: ImageRef,
}

impl Spell {
    pub fn cooldown_profile(&self) -> QuizResult<AbilityCooldownProfile> {
        AbilityCooldownProfile::new(self.cooldown.clone(), self.max_rank)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChampionDetail {
    pub id: ChampionId,
    pub name: String,
    pub image: ImageRef,
    #[serde(rename = "allytips", default)]
    pub ally_tips: Vec<String>,
    #[serde(rename = "enemytips", default)]
    pub enemy_tips: Vec<String>,
    #[serde(default)]
    pub spells: Vec<Spell>,
}

/// `champion/{id}.json`: a single-entry map around the detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionDetailResponse {
    pub data: BTreeMap<ChampionId, ChampionDetail>,
}

impl ChampionDetailResponse {
    pub fn into_detail(mut self, id: &str) -> QuizResult<ChampionDetail> {
        if let Some(detail) = self.data.remove(id) {
            return Ok(detail);
        }
        // Keys are occasionally cased differently from the requested id.
        self.data
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .map(|(_, detail)| detail)
            .ok_or_else(|| QuizError::ChampionNotFound { id: id.to_string() })
    }
}
