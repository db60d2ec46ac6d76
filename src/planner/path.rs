use std::collections::BTreeMap;

use crate::grid::model::{Cell, Grid};

/// One step of the traversal path, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PathPoint {
    /// Week index.
    pub x: u32,
    /// Weekday index.
    pub y: u32,
}

/// First-visit timing for one active cell, derived from a traversal path.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisitRecord {
    /// Week index of the cell.
    pub x: u32,
    /// Weekday index of the cell.
    pub y: u32,
    /// Normalized first-visit time in `[0, 1)`, or `None` if the path never
    /// reaches the cell (a data-integrity condition; see
    /// [`annotate_visit_times`]).
    pub t: Option<f64>,
}

/// Plan a deterministic traversal that visits every active cell of `grid`.
///
/// With no active cells, the result is a full boustrophedon sweep of the
/// grid: week columns left to right, even columns top-down, odd columns
/// bottom-up, so consecutive steps are vertically adjacent and horizontal
/// moves happen only at column boundaries. Length is exactly
/// `width * height`.
///
/// With active cells present, the same serpentine principle is restricted to
/// the non-empty columns: active cells are grouped by week, columns are
/// concatenated in ascending week order, and the within-column direction
/// alternates by the column's rank among the weeks that actually have
/// activity (rank 0 ascending, rank 1 descending, and so on). Ranking by
/// presence rather than raw week parity keeps the zigzag continuous when
/// idle weeks are skipped.
///
/// The output is pure and deterministic for a given grid; the two modes are
/// never mixed within one run.
pub fn build_path(grid: &Grid) -> Vec<PathPoint> {
    let mut by_week: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for cell in grid.active_cells() {
        by_week.entry(cell.x).or_default().push(cell.y);
    }

    if by_week.is_empty() {
        return sweep_path(grid.width(), grid.height());
    }

    let mut path = Vec::new();
    for (rank, (&x, days)) in by_week.iter_mut().enumerate() {
        if rank % 2 == 0 {
            days.sort_unstable();
        } else {
            days.sort_unstable_by(|a, b| b.cmp(a));
        }
        path.extend(days.iter().map(|&y| PathPoint { x, y }));
    }
    path
}

/// Full-grid snake sweep used when there is nothing to chase.
fn sweep_path(width: u32, height: u32) -> Vec<PathPoint> {
    let mut path = Vec::with_capacity((width as usize) * (height as usize));
    for x in 0..width {
        if x % 2 == 0 {
            for y in 0..height {
                path.push(PathPoint { x, y });
            }
        } else {
            for y in (0..height).rev() {
                path.push(PathPoint { x, y });
            }
        }
    }
    path
}

/// Record when the traversal first reaches each active cell.
///
/// `t` is `first-index / path-length`, so values fall in `[0, 1)`. An active
/// cell the path never touches yields `t = None` and a `tracing` warning —
/// it is reported rather than dropped, since it indicates a planner/grid
/// mismatch upstream. [`build_path`] output never produces one.
///
/// Records come out in the grid's cell order; consumers index by coordinate.
pub fn annotate_visit_times(path: &[PathPoint], grid: &Grid) -> Vec<VisitRecord> {
    let mut first_index: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for (i, p) in path.iter().enumerate() {
        first_index.entry((p.x, p.y)).or_insert(i);
    }

    grid.active_cells()
        .map(|cell: &Cell| {
            let t = first_index
                .get(&(cell.x, cell.y))
                .map(|&i| i as f64 / path.len() as f64);
            if t.is_none() {
                tracing::warn!(
                    x = cell.x,
                    y = cell.y,
                    level = cell.level,
                    "active cell never visited by traversal path"
                );
            }
            VisitRecord {
                x: cell.x,
                y: cell.y,
                t,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/planner/path.rs"]
mod tests;
