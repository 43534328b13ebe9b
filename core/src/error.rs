use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cooldown profile has no ranks")]
    EmptyProfile,

    #[error("Cooldown profile lists {actual} values but max rank is {max_rank}")]
    RankCountMismatch { max_rank: usize, actual: usize },

    #[error("Invalid cooldown {value} at rank {rank}: must be finite and positive")]
    InvalidCooldown { rank: usize, value: f64 },

    #[error("Invalid rank: asked {asked}, ability has ranks 1..={max_rank}")]
    InvalidRank { asked: usize, max_rank: usize },

    #[error("Question invariant violated: {detail}")]
    InvariantViolation { detail: String },

    #[error("Champion '{id}' not found")]
    ChampionNotFound { id: String },

    #[error("Champion list is empty")]
    NoChampions,

    #[error("Champion '{champion}' has no spells")]
    NoSpells { champion: String },

    #[error("Version list is empty")]
    NoVersions,

    #[error("Answered phase {actual} while phase {expected} is open")]
    PhaseOutOfOrder { expected: u8, actual: u8 },

    #[error("Phase {phase} already answered")]
    AlreadyAnswered { phase: u8 },

    #[error("No active question")]
    NoActiveQuestion,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
