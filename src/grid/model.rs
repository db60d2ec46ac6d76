use crate::foundation::error::{ZombieError, ZombieResult};

/// Number of weekday rows in a contribution calendar.
pub const GRID_HEIGHT: u32 = 7;

/// Default number of week columns (GitHub renders 52 or 53 depending on the year).
pub const DEFAULT_GRID_WIDTH: u32 = 53;

/// One day's activity record on the calendar grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    /// Week index, `0 <= x < width`.
    pub x: u32,
    /// Weekday index, `0 <= y < height`.
    pub y: u32,
    /// Quantized activity intensity, `0..=4` (0 = inactive).
    pub level: u8,
    /// Raw activity count (informational only).
    #[serde(default)]
    pub count: u32,
    /// Calendar date associated with the cell (informational only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Cell {
    /// Whether this cell counts as active for path planning.
    pub fn is_active(&self) -> bool {
        self.level > 0
    }
}

/// A validated contribution grid: `width` week columns by `height` weekday rows.
///
/// A `Grid` can only be obtained through [`Grid::new`], which enforces the
/// input invariants (positive dimensions, in-bounds coordinates, levels in
/// `0..=4`, at most one cell per `(x, y)` pair). Downstream consumers — the
/// planner and the renderer — rely on those invariants and never re-validate.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawGrid", into = "RawGrid")]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

/// Serde-facing shape of [`Grid`]; conversion re-runs validation on decode.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct RawGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ZombieError;

    fn try_from(raw: RawGrid) -> ZombieResult<Self> {
        Grid::new(raw.width, raw.height, raw.cells)
    }
}

impl From<Grid> for RawGrid {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: grid.cells,
        }
    }
}

impl Grid {
    /// Validate and construct a grid.
    ///
    /// Fails with [`ZombieError::InvalidGrid`] when `width` or `height` is
    /// zero, a cell lies outside the grid, a level exceeds 4, or two cells
    /// share the same `(x, y)` pair.
    pub fn new(width: u32, height: u32, cells: Vec<Cell>) -> ZombieResult<Self> {
        if width == 0 || height == 0 {
            return Err(ZombieError::invalid_grid(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        let mut seen = vec![false; (width as usize) * (height as usize)];
        for cell in &cells {
            if cell.x >= width || cell.y >= height {
                return Err(ZombieError::invalid_grid(format!(
                    "cell ({}, {}) outside {width}x{height} grid",
                    cell.x, cell.y
                )));
            }
            if cell.level > 4 {
                return Err(ZombieError::invalid_grid(format!(
                    "cell ({}, {}) has level {} (max 4)",
                    cell.x, cell.y, cell.level
                )));
            }
            let idx = (cell.x as usize) * (height as usize) + (cell.y as usize);
            if seen[idx] {
                return Err(ZombieError::invalid_grid(format!(
                    "duplicate cell at ({}, {})",
                    cell.x, cell.y
                )));
            }
            seen[idx] = true;
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Week-column count.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Weekday-row count.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cells, in input order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells with `level > 0`.
    pub fn active_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_active())
    }

    /// Total of the raw activity counts across the grid.
    pub fn total_count(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.count)).sum()
    }
}

/// Quantize a raw contribution count into an activity level bucket (0–4).
///
/// Thresholds follow the GitHub-calendar convention used by the fetcher:
/// 15+ → 4, 10+ → 3, 5+ → 2, 1+ → 1, otherwise 0.
pub fn quantize_level(count: u32) -> u8 {
    match count {
        15.. => 4,
        10.. => 3,
        5.. => 2,
        1.. => 1,
        0 => 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
