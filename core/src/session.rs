//! The three-phase quiz flow around one generated question.
//!
//! RULES:
//!   - Phases are answered in order: range, exact value, max rank.
//!   - Each phase is answered once; the first answer stands.
//!   - Correctness is exact equality against the question's keys.

use crate::{
    config::QuizConfig,
    error::{QuizError, QuizResult},
    question::{assemble_question, QuestionOptions},
    rng::QuizRng,
    selection::{keybind, select_champion, select_rank, select_spell},
    source::ChampionSource,
    types::{ChampionId, Rank, Seconds, SpellSlot},
};
use serde::{Deserialize, Serialize};

/// Champion/spell draws skipped because their data can't form a question.
pub const MAX_DRAW_ATTEMPTS: usize = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    Range,
    Exact,
    MaxRank,
    Complete,
}

impl QuizPhase {
    pub fn number(self) -> u8 {
        match self {
            Self::Range => 1,
            Self::Exact => 2,
            Self::MaxRank => 3,
            Self::Complete => 4,
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Range => Self::Exact,
            Self::Exact => Self::MaxRank,
            Self::MaxRank | Self::Complete => Self::Complete,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveQuestion {
    pub champion_id:   ChampionId,
    pub champion_name: String,
    pub spell_name:    String,
    /// Icon file name under the CDN's spell image directory.
    pub spell_image:   String,
    pub slot:          SpellSlot,
    pub keybind:       char,
    pub asked_rank:    Rank,
    pub max_rank:      Rank,
    /// Full table, shown once the question is complete.
    pub cooldowns:     Vec<Seconds>,
    pub options:       QuestionOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PhaseAnswers {
    pub phase1: Option<String>,
    pub phase2: Option<Seconds>,
    pub phase3: Option<Seconds>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseOutcome {
    pub phase:    u8,
    pub correct:  bool,
    pub expected: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scoreboard {
    pub questions_started:   u32,
    pub questions_completed: u32,
    pub phase_correct:       [u32; 3],
    /// Questions with all three phases right.
    pub perfect:             u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    question:   Option<ActiveQuestion>,
    phase:      QuizPhase,
    answers:    PhaseAnswers,
    correct:    [Option<bool>; 3],
    scoreboard: Scoreboard,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            question:   None,
            phase:      QuizPhase::Range,
            answers:    PhaseAnswers::default(),
            correct:    [None; 3],
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn question(&self) -> Option<&ActiveQuestion> {
        self.question.as_ref()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn answers(&self) -> &PhaseAnswers {
        &self.answers
    }

    pub fn correctness(&self) -> [Option<bool>; 3] {
        self.correct
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Replace the current question and reset to phase 1.
    pub fn start(&mut self, question: ActiveQuestion) {
        log::debug!(
            "start question: {} {} rank {}",
            question.champion_id,
            question.keybind,
            question.asked_rank
        );
        self.question = Some(question);
        self.phase = QuizPhase::Range;
        self.answers = PhaseAnswers::default();
        self.correct = [None; 3];
        self.scoreboard.questions_started += 1;
    }

    /// Draw and start a fresh question from `source`.
    pub fn next_question(
        &mut self,
        source: &mut dyn ChampionSource,
        config: &QuizConfig,
        selection_rng: &mut QuizRng,
        question_rng: &mut QuizRng,
    ) -> QuizResult<&ActiveQuestion> {
        let question = draw_question(source, config, selection_rng, question_rng)?;
        self.start(question);
        self.question.as_ref().ok_or(QuizError::NoActiveQuestion)
    }

    pub fn answer_phase1(&mut self, label: &str) -> QuizResult<PhaseOutcome> {
        let expected = self.open(QuizPhase::Range)?.options.correct_range.label.clone();
        let correct = label == expected;
        self.answers.phase1 = Some(label.to_string());
        Ok(self.record(QuizPhase::Range, correct, expected))
    }

    pub fn answer_phase2(&mut self, value: Seconds) -> QuizResult<PhaseOutcome> {
        let expected = self.open(QuizPhase::Exact)?.options.correct_phase2;
        self.answers.phase2 = Some(value);
        Ok(self.record(QuizPhase::Exact, value == expected, expected.to_string()))
    }

    pub fn answer_phase3(&mut self, value: Seconds) -> QuizResult<PhaseOutcome> {
        let expected = self.open(QuizPhase::MaxRank)?.options.correct_phase3;
        self.answers.phase3 = Some(value);
        Ok(self.record(QuizPhase::MaxRank, value == expected, expected.to_string()))
    }

    /// The full cooldown table, once every phase is answered.
    pub fn reveal(&self) -> Option<&[Seconds]> {
        match (&self.question, self.phase) {
            (Some(q), QuizPhase::Complete) => Some(&q.cooldowns),
            _ => None,
        }
    }

    fn open(&self, phase: QuizPhase) -> QuizResult<&ActiveQuestion> {
        let question = self.question.as_ref().ok_or(QuizError::NoActiveQuestion)?;
        if phase.number() < self.phase.number() {
            return Err(QuizError::AlreadyAnswered {
                phase: phase.number(),
            });
        }
        if phase != self.phase {
            return Err(QuizError::PhaseOutOfOrder {
                expected: self.phase.number(),
                actual: phase.number(),
            });
        }
        Ok(question)
    }

    fn record(&mut self, phase: QuizPhase, correct: bool, expected: String) -> PhaseOutcome {
        let idx = (phase.number() - 1) as usize;
        self.correct[idx] = Some(correct);
        if correct {
            self.scoreboard.phase_correct[idx] += 1;
        }
        self.phase = phase.next();
        if self.phase == QuizPhase::Complete {
            self.scoreboard.questions_completed += 1;
            if self.correct.iter().all(|c| *c == Some(true)) {
                self.scoreboard.perfect += 1;
            }
        }
        PhaseOutcome {
            phase: phase.number(),
            correct,
            expected,
        }
    }
}

/// Pick a champion, spell and rank, then assemble the question.
///
/// Draws that can't form a question are skipped and redrawn: a champion
/// missing from the mirror, one with no spells, or a spell whose cooldown
/// data can't form a profile (toggles with a 0s cooldown, mismatched
/// rank counts).
pub fn draw_question(
    source: &mut dyn ChampionSource,
    config: &QuizConfig,
    selection_rng: &mut QuizRng,
    question_rng: &mut QuizRng,
) -> QuizResult<ActiveQuestion> {
    let list = source.champion_list()?;
    let champions = list.champions();

    let mut last_err = QuizError::NoChampions;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let summary = select_champion(&champions, selection_rng)?;
        let detail = match source.champion_detail(&summary.id) {
            Ok(d) => d,
            Err(e @ QuizError::ChampionNotFound { .. }) => {
                log::warn!("skipping {}: {e}", summary.id);
                last_err = e;
                continue;
            }
            Err(e) => return Err(e),
        };
        let pick = match select_spell(&detail, config, selection_rng) {
            Ok(p) => p,
            Err(e @ QuizError::NoSpells { .. }) => {
                log::warn!("skipping {}: {e}", detail.id);
                last_err = e;
                continue;
            }
            Err(e) => return Err(e),
        };

        let profile = match pick.spell.cooldown_profile() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("skipping {} {}: {e}", detail.id, pick.spell.id);
                last_err = e;
                continue;
            }
        };

        let asked_rank = select_rank(&profile, config.rank_policy, selection_rng);
        let options = assemble_question(&profile, asked_rank, question_rng)?;

        return Ok(ActiveQuestion {
            champion_id: detail.id.clone(),
            champion_name: detail.name.clone(),
            spell_name: pick.spell.name.clone(),
            spell_image: pick.spell.image.full.clone(),
            slot: pick.slot,
            keybind: keybind(pick.slot),
            asked_rank,
            max_rank: profile.max_rank(),
            cooldowns: profile.cooldowns().to_vec(),
            options,
        });
    }
    Err(last_err)
}
