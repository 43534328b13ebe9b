//! Phase 1: three non-overlapping candidate ranges, one holding the answer.
//!
//! Ranges are half-open `[min, max)`. Flat tiles sit edge to edge;
//! capstone tiles are 20s windows every 30s. Construction is pure tile
//! arithmetic, so no collision check is needed.
//!
//! A label always covers every value the tile can hand to phase 2.

use crate::{
    bucketing::{bucket_for, Bucket, CAPSTONE_ROUNDING, CAPSTONE_STRIDE, CAPSTONE_WINDOW},
    exact_options::Granularity,
    rng::QuizRng,
    types::Seconds,
};
use serde::{Deserialize, Serialize};

pub const RANGE_OPTION_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeOption {
    pub min: Seconds,
    pub max: Seconds,
    pub label: String,
}

impl RangeOption {
    /// Tile `[min, max)` printed as `min-shown_max`.
    fn labelled(min: Seconds, max: Seconds, shown_max: Seconds) -> Self {
        Self {
            min,
            max,
            label: format!("{min}-{shown_max}s"),
        }
    }

    pub fn contains(&self, value: Seconds) -> bool {
        value >= self.min && value < self.max
    }

    pub fn overlaps(&self, other: &RangeOption) -> bool {
        self.min < other.max && other.min < self.max
    }

    pub fn width(&self) -> Seconds {
        self.max - self.min
    }
}

/// Tiling parameters: tiles of `window` seconds starting every `stride`.
/// Labels stop `label_inset` short of the tile's upper bound.
struct Tiling {
    stride:      Seconds,
    window:      Seconds,
    label_inset: Seconds,
}

impl Tiling {
    fn tile(&self, min: Seconds) -> RangeOption {
        let max = min + self.window;
        RangeOption::labelled(min, max, max - self.label_inset)
    }

    /// Correct tile, then the nearest neighbours that stay non-negative.
    fn around(&self, correct_min: Seconds) -> Vec<RangeOption> {
        let mut tiles = vec![self.tile(correct_min)];

        if correct_min >= self.stride {
            tiles.push(self.tile(correct_min - self.stride));
        }
        tiles.push(self.tile(correct_min + self.stride));

        if tiles.len() < RANGE_OPTION_COUNT {
            if correct_min >= self.stride * 2.0 {
                tiles.push(self.tile(correct_min - self.stride * 2.0));
            } else {
                tiles.push(self.tile(correct_min + self.stride * 2.0));
            }
        }

        tiles.truncate(RANGE_OPTION_COUNT);
        tiles
    }
}

/// Start of the 20s capstone window holding `value`.
///
/// The value is first rounded to the nearest 10s and aligned to the 30s
/// grid. If that window misses the true value (rounding crossed a grid
/// line, or the value sits in a gap) the window slides to the lowest
/// 10s-aligned start that still contains it.
pub fn capstone_min(value: Seconds) -> Seconds {
    let rounded = (value / CAPSTONE_ROUNDING).round() * CAPSTONE_ROUNDING;
    let aligned = (rounded / CAPSTONE_STRIDE).floor() * CAPSTONE_STRIDE;
    if value >= aligned && value < aligned + CAPSTONE_WINDOW {
        return aligned;
    }
    ((value - CAPSTONE_WINDOW) / CAPSTONE_ROUNDING).floor() * CAPSTONE_ROUNDING + CAPSTONE_ROUNDING
}

/// Three ranges around `true_value`, shuffled.
pub fn range_options(true_value: Seconds, rng: &mut QuizRng) -> Vec<RangeOption> {
    let mut options = match bucket_for(true_value) {
        Bucket::Flat { width } => {
            // Whole answers name the last whole second, so edge-to-edge
            // neighbours never print the same number. A fractional answer
            // can sit past it, so those labels run to the tile's edge.
            let label_inset = match Granularity::of(true_value) {
                Granularity::Whole => 1.0,
                Granularity::Half => 0.0,
            };
            let tiling = Tiling {
                stride: width,
                window: width,
                label_inset,
            };
            tiling.around((true_value / width).floor() * width)
        }
        Bucket::Capstone => {
            // Neighbours are 10s apart, so both bounds are shown.
            let tiling = Tiling {
                stride:      CAPSTONE_STRIDE,
                window:      CAPSTONE_WINDOW,
                label_inset: 0.0,
            };
            tiling.around(capstone_min(true_value))
        }
    };
    rng.shuffle(&mut options);
    options
}
