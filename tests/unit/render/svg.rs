use super::*;

use crate::grid::model::Cell;
use crate::planner::path::{annotate_visit_times, build_path};

fn sample_grid() -> Grid {
    let mut cells = Vec::new();
    for x in 0..3u32 {
        for y in 0..7u32 {
            let level = match (x, y) {
                (0, 2) => 2,
                (1, 4) => 4,
                _ => 0,
            };
            cells.push(Cell {
                x,
                y,
                level,
                count: u32::from(level) * 3,
                date: None,
            });
        }
    }
    Grid::new(3, 7, cells).unwrap()
}

fn render_sample() -> String {
    let grid = sample_grid();
    let path = build_path(&grid);
    let visits = annotate_visit_times(&path, &grid);
    render_svg(
        &grid,
        &path,
        &visits,
        &Theme::dark(),
        &RenderOptions::default(),
    )
}

#[test]
fn document_shape_is_complete() {
    let svg = render_sample();
    assert!(svg.starts_with("<svg viewBox=\"0 0 60 144\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("@keyframes zombieMove"));
    assert!(svg.contains("\u{1f9df}"));
}

#[test]
fn one_rect_per_grid_cell() {
    let svg = render_sample();
    let rects = svg.matches("<rect class=\"c").count();
    assert_eq!(rects, 21);
}

#[test]
fn visited_cells_get_infection_keyframes() {
    let svg = render_sample();
    // Two active cells, both visited.
    assert!(svg.contains("@keyframes infected0"));
    assert!(svg.contains("@keyframes infected1"));
    assert!(!svg.contains("@keyframes infected2"));
    assert!(svg.contains("@keyframes infection0"));
    assert!(svg.contains("@keyframes skull1"));
    assert_eq!(svg.matches("<circle class=\"infection").count(), 2);
}

#[test]
fn zombie_track_has_one_stop_per_path_point() {
    let grid = sample_grid();
    let path = build_path(&grid);
    assert_eq!(path.len(), 2);
    let svg = render_sample();
    assert!(svg.contains("0.00% { transform: translate(0px, 24px); }"));
    assert!(svg.contains("100.00% { transform: translate(12px, 48px); }"));
}

#[test]
fn stats_footer_counts_infections_and_commits() {
    let svg = render_sample();
    assert!(svg.contains("systems: 2/2"));
    assert!(svg.contains("commits: 18"));
}

#[test]
fn duration_flows_into_animations() {
    let grid = sample_grid();
    let path = build_path(&grid);
    let visits = annotate_visit_times(&path, &grid);
    let opts = RenderOptions {
        duration_ms: 9_000,
        ..RenderOptions::default()
    };
    let svg = render_svg(&grid, &path, &visits, &Theme::dark(), &opts);
    assert!(svg.contains("zombieMove 9000ms"));
    assert!(svg.contains("infected0 9000ms"));
}

#[test]
fn output_is_stable_across_calls() {
    assert_eq!(render_sample(), render_sample());
}

#[test]
fn empty_active_set_still_renders_full_sweep() {
    let cells = (0..2u32)
        .flat_map(|x| (0..3u32).map(move |y| (x, y)))
        .map(|(x, y)| Cell {
            x,
            y,
            level: 0,
            count: 0,
            date: None,
        })
        .collect();
    let grid = Grid::new(2, 3, cells).unwrap();
    let path = build_path(&grid);
    assert_eq!(path.len(), 6);
    let visits = annotate_visit_times(&path, &grid);
    let svg = render_svg(
        &grid,
        &path,
        &visits,
        &Theme::light(),
        &RenderOptions::default(),
    );
    assert!(svg.contains("@keyframes zombieMove"));
    assert!(!svg.contains("@keyframes infected0"));
    assert!(svg.contains("systems: 0/0"));
}
