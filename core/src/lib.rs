//! Cooldown quiz: question generation for ability-cooldown trivia.
//!
//! Given one ability's cooldown-by-rank table, the engine builds a
//! three-phase multiple-choice question:
//!
//!   1. Which range holds the cooldown?   ([`range_options`])
//!   2. What exactly is it?               ([`exact_options`])
//!   3. What is it at max rank?           ([`max_rank_options`])
//!
//! [`question::assemble_question`] is the single entry point. Everything
//! around it (data loading, picking what to ask, the answer flow) lives in
//! [`source`], [`selection`] and [`session`].

pub mod bucketing;
pub mod champion;
pub mod config;
pub mod error;
pub mod exact_options;
pub mod max_rank_options;
pub mod profile;
pub mod question;
pub mod range_options;
pub mod rng;
pub mod selection;
pub mod session;
pub mod source;
pub mod types;
