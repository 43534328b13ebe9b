//! Phase 2: three exact cooldowns inside the correct range.
//!
//! Whole-second answers get whole-second distractors; fractional answers
//! get `n.5` distractors, matching how real cooldowns are written.

use crate::{
    error::{QuizError, QuizResult},
    rng::QuizRng,
    types::Seconds,
};

pub const EXACT_OPTION_COUNT: usize = 3;

/// How many times the search window may grow by one second, alternating
/// upper and lower edge, before giving up.
pub const MAX_WIDEN_STEPS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Whole,
    Half,
}

impl Granularity {
    pub fn of(value: Seconds) -> Self {
        if value.fract() == 0.0 {
            Self::Whole
        } else {
            Self::Half
        }
    }

    fn offset(self) -> Seconds {
        match self {
            Self::Whole => 0.0,
            Self::Half => 0.5,
        }
    }
}

/// Every positive grid value in `[lo, hi)`, excluding `exclude`.
fn grid(lo: Seconds, hi: Seconds, granularity: Granularity, exclude: Seconds) -> Vec<Seconds> {
    let offset = granularity.offset();
    let mut out = Vec::new();
    let mut candidate = (lo - offset).ceil() + offset;
    while candidate < hi {
        if candidate > 0.0 && candidate != exclude {
            out.push(candidate);
        }
        candidate += 1.0;
    }
    out
}

/// Three distinct values, one of them `true_value`, shuffled.
///
/// Distractors are drawn without replacement from the grid inside
/// `[range_min, range_max)`, the same values the range's label covers.
/// A window too narrow to hold two distractors (2s tiles) is widened a
/// second at a time, upper edge first, which may place a distractor just
/// outside the range.
pub fn exact_options(
    true_value: Seconds,
    range_min: Seconds,
    range_max: Seconds,
    rng: &mut QuizRng,
) -> QuizResult<Vec<Seconds>> {
    let granularity = Granularity::of(true_value);
    let needed = EXACT_OPTION_COUNT - 1;

    let (mut lo, mut hi) = (range_min, range_max);
    let mut pool = grid(lo, hi, granularity, true_value);
    let mut steps = 0;
    while pool.len() < needed {
        if steps == MAX_WIDEN_STEPS {
            return Err(QuizError::InvariantViolation {
                detail: format!(
                    "no room for {needed} distractors around {true_value} in [{range_min}, {range_max}]"
                ),
            });
        }
        if steps % 2 == 0 {
            hi += 1.0;
        } else {
            lo = (lo - 1.0).max(0.0);
        }
        steps += 1;
        pool = grid(lo, hi, granularity, true_value);
    }
    if steps > 0 {
        log::warn!(
            "exact options for {true_value}: widened [{range_min}, {range_max}] to [{lo}, {hi}]"
        );
    }

    let mut options = Vec::with_capacity(EXACT_OPTION_COUNT);
    options.push(true_value);
    while options.len() < EXACT_OPTION_COUNT {
        let idx = rng.index_below(pool.len());
        options.push(pool.swap_remove(idx));
    }
    rng.shuffle(&mut options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularity_follows_fraction() {
        assert_eq!(Granularity::of(8.0), Granularity::Whole);
        assert_eq!(Granularity::of(6.5), Granularity::Half);
        assert_eq!(Granularity::of(0.25), Granularity::Half);
    }

    #[test]
    fn whole_grid_excludes_upper_bound() {
        assert_eq!(grid(6.0, 9.0, Granularity::Whole, 8.0), vec![6.0, 7.0]);
    }

    #[test]
    fn whole_answer_never_offers_next_tile_start() {
        for seed in 0..50 {
            let mut rng = QuizRng::new(seed, 1);
            let mut options = exact_options(8.0, 6.0, 9.0, &mut rng).unwrap();
            options.sort_by(f64::total_cmp);
            assert_eq!(options, vec![6.0, 7.0, 8.0]);
        }
    }

    #[test]
    fn half_grid_stays_inside_bounds() {
        assert_eq!(grid(6.0, 9.0, Granularity::Half, 6.5), vec![7.5, 8.5]);
    }

    #[test]
    fn grid_skips_zero() {
        assert_eq!(grid(0.0, 3.0, Granularity::Whole, 1.0), vec![2.0]);
    }

    #[test]
    fn narrow_half_window_widens_upward() {
        // [4, 6) holds only 4.5 and 5.5.
        let mut rng = QuizRng::new(11, 1);
        let mut options = exact_options(5.5, 4.0, 6.0, &mut rng).unwrap();
        options.sort_by(f64::total_cmp);
        assert_eq!(options, vec![4.5, 5.5, 6.5]);
    }

    #[test]
    fn window_next_to_zero_widens_past_the_top() {
        let mut rng = QuizRng::new(5, 1);
        let mut options = exact_options(1.0, 0.0, 2.0, &mut rng).unwrap();
        options.sort_by(f64::total_cmp);
        assert_eq!(options, vec![1.0, 2.0, 3.0]);
    }
}
