//! Range bucketing: how coarse the phase-1 ranges are for a cooldown.
//!
//! Granularity grows with magnitude. Thresholds are tuned for quiz
//! difficulty; changing them changes what players see.

use crate::types::Seconds;

pub const SMALL_MAX: Seconds = 6.0;
pub const MEDIUM_MAX: Seconds = 15.0;
pub const LARGE_MAX: Seconds = 40.0;
pub const VERY_LARGE_MAX: Seconds = 80.0;

/// Capstone tiles repeat every 30s.
pub const CAPSTONE_STRIDE: Seconds = 30.0;
/// Each capstone tile covers 20s, leaving a 10s gap to the next one.
pub const CAPSTONE_WINDOW: Seconds = 20.0;
/// Capstone cooldowns are aligned on the nearest 10s before tiling.
pub const CAPSTONE_ROUNDING: Seconds = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bucket {
    /// Contiguous tiles of a fixed width.
    Flat { width: Seconds },
    /// Gapped tiles for ultimate-scale cooldowns.
    Capstone,
}

pub fn bucket_for(value: Seconds) -> Bucket {
    if value <= SMALL_MAX {
        Bucket::Flat { width: 2.0 }
    } else if value <= MEDIUM_MAX {
        Bucket::Flat { width: 3.0 }
    } else if value <= LARGE_MAX {
        Bucket::Flat { width: 5.0 }
    } else if value <= VERY_LARGE_MAX {
        Bucket::Flat { width: 10.0 }
    } else {
        Bucket::Capstone
    }
}

/// Width of the tile a value falls in. Capstone values report their
/// window width.
pub fn bucket_width(value: Seconds) -> Seconds {
    match bucket_for(value) {
        Bucket::Flat { width } => width,
        Bucket::Capstone => CAPSTONE_WINDOW,
    }
}
