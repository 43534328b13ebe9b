use crate::types::SpellSlot;
use serde::{Deserialize, Serialize};

/// Which rank a question asks about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankPolicy {
    /// Always rank 1, so phase 3 contrasts rank 1 with max rank.
    #[default]
    FirstRank,
    /// Uniform over every rank the ability has.
    AnyRank,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    /// Probability of quizzing the ultimate instead of a basic ability.
    pub ultimate_chance: f64,
    /// Spell index of the ultimate (R).
    pub ultimate_slot: SpellSlot,
    pub rank_policy: RankPolicy,
    pub questions_per_run: usize,
    pub locale: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            ultimate_chance: 0.10,
            ultimate_slot: 3,
            rank_policy: RankPolicy::FirstRank,
            questions_per_run: 10,
            locale: "en_US".into(),
        }
    }
}

impl QuizConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    /// In tests, use QuizConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: QuizConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.ultimate_chance) {
            anyhow::bail!(
                "ultimate_chance must be within [0, 1], got {}",
                self.ultimate_chance
            );
        }
        if self.questions_per_run == 0 {
            anyhow::bail!("questions_per_run must be at least 1");
        }
        Ok(())
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            questions_per_run: 3,
            ..Self::default()
        }
    }
}
