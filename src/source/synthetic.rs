use chrono::{Duration, NaiveDate};

use crate::foundation::error::ZombieResult;
use crate::foundation::math::Rng64;
use crate::grid::model::{Cell, Grid};
use crate::source::ContributionSource;

/// Deterministic fallback source producing a synthetic calendar.
///
/// Used when the remote API is unreachable, unauthenticated, or returns no
/// data. The grid is a pure function of the seed: the same seed always
/// yields the same calendar, so regenerating the SVG in CI is reproducible.
pub struct SyntheticSource {
    seed: u64,
    width: u32,
    height: u32,
}

impl SyntheticSource {
    /// Create a synthetic source for a `width x height` calendar.
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        Self {
            seed,
            width,
            height,
        }
    }
}

impl ContributionSource for SyntheticSource {
    #[tracing::instrument(skip(self), fields(seed = self.seed))]
    fn fetch(&self) -> ZombieResult<Grid> {
        let mut rng = Rng64::new(self.seed);
        // Date labels count back from a fixed anchor so output is stable.
        let anchor = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap_or_default();
        let total_days = i64::from(self.width) * i64::from(self.height);

        let mut cells = Vec::with_capacity(total_days as usize);
        for x in 0..self.width {
            for y in 0..self.height {
                let intensity = rng.next_f64_01();
                let level: u8 = if intensity > 0.75 {
                    4
                } else if intensity > 0.55 {
                    3
                } else if intensity > 0.35 {
                    2
                } else if intensity > 0.15 {
                    1
                } else {
                    0
                };
                let day_offset =
                    total_days - 1 - (i64::from(x) * i64::from(self.height) + i64::from(y));
                let date = anchor - Duration::days(day_offset);
                cells.push(Cell {
                    x,
                    y,
                    level,
                    count: u32::from(level) * 2,
                    date: Some(date.format("%Y-%m-%d").to_string()),
                });
            }
        }

        Grid::new(self.width, self.height, cells)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/synthetic.rs"]
mod tests;
