//! Shared primitive types used across the quiz engine.

/// A cooldown in seconds.
pub type Seconds = f64;

/// An ability upgrade rank, 1-based.
pub type Rank = usize;

/// The data service's stable champion key (e.g. "Ahri").
pub type ChampionId = String;

/// Index into a champion's spell list: 0=Q, 1=W, 2=E, 3=R.
pub type SpellSlot = usize;
