//! Per-ability cooldown table, indexed by upgrade rank.

use crate::{
    error::{QuizError, QuizResult},
    types::{Rank, Seconds},
};
use serde::{Deserialize, Serialize};

/// One ability's cooldown-by-rank table.
///
/// Validated once at construction and immutable afterwards:
/// at least one rank, one value per rank, every value finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityCooldownProfile {
    cooldown_by_rank: Vec<Seconds>,
}

impl AbilityCooldownProfile {
    pub fn new(cooldown_by_rank: Vec<Seconds>, max_rank: Rank) -> QuizResult<Self> {
        if cooldown_by_rank.is_empty() || max_rank == 0 {
            return Err(QuizError::EmptyProfile);
        }
        if cooldown_by_rank.len() != max_rank {
            return Err(QuizError::RankCountMismatch {
                max_rank,
                actual: cooldown_by_rank.len(),
            });
        }
        if let Some((idx, &value)) = cooldown_by_rank
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(QuizError::InvalidCooldown { rank: idx + 1, value });
        }
        Ok(Self { cooldown_by_rank })
    }

    pub fn max_rank(&self) -> Rank {
        self.cooldown_by_rank.len()
    }

    pub fn cooldowns(&self) -> &[Seconds] {
        &self.cooldown_by_rank
    }

    /// Cooldown at a 1-based rank.
    pub fn at_rank(&self, rank: Rank) -> QuizResult<Seconds> {
        if rank == 0 || rank > self.max_rank() {
            return Err(QuizError::InvalidRank {
                asked: rank,
                max_rank: self.max_rank(),
            });
        }
        Ok(self.cooldown_by_rank[rank - 1])
    }

    pub fn rank_one(&self) -> Seconds {
        self.cooldown_by_rank[0]
    }

    pub fn max_rank_cooldown(&self) -> Seconds {
        self.cooldown_by_rank[self.cooldown_by_rank.len() - 1]
    }
}

impl<'de> Deserialize<'de> for AbilityCooldownProfile {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            cooldown_by_rank: Vec<Seconds>,
        }
        let raw = Raw::deserialize(deserializer)?;
        let max_rank = raw.cooldown_by_rank.len();
        Self::new(raw.cooldown_by_rank, max_rank).map_err(serde::de::Error::custom)
    }
}
