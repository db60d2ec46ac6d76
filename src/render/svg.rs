use std::collections::BTreeMap;

use crate::grid::model::Grid;
use crate::planner::path::{PathPoint, VisitRecord};
use crate::render::theme::Theme;

/// Geometry and timing knobs for the rendered SVG.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderOptions {
    /// Grid pitch in SVG units.
    pub cell_size: u32,
    /// Rendered square size (leaves a gutter inside the pitch).
    pub dot_size: u32,
    /// One animation loop, in milliseconds.
    pub duration_ms: u32,
    /// Title drawn above the grid.
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 12,
            dot_size: 10,
            duration_ms: 16_000,
            title: "\u{1f9df} Zombie GitHub Infiltration".to_string(),
        }
    }
}

/// Emit the animated SVG document.
///
/// `path` and `visits` must come from the planner run on the same `grid`;
/// the renderer itself is a pure string emitter and produces identical
/// output for identical inputs. Cells the zombie reaches flip to the
/// infected color at their visit time, grow a short infection pulse, and
/// keep a skull marker for the rest of the loop; the zombie glyph follows
/// the traversal path via a CSS keyframe track.
#[tracing::instrument(skip_all, fields(cells = grid.cells().len(), steps = path.len()))]
pub fn render_svg(
    grid: &Grid,
    path: &[PathPoint],
    visits: &[VisitRecord],
    theme: &Theme,
    opts: &RenderOptions,
) -> String {
    let cell = opts.cell_size;
    let dot = opts.dot_size;
    let width = (grid.width() + 2) * cell;
    let height = (grid.height() + 5) * cell;

    // Visit time per coordinate; only cells with a concrete time animate.
    let visit_at: BTreeMap<(u32, u32), f64> = visits
        .iter()
        .filter_map(|v| v.t.map(|t| ((v.x, v.y), t)))
        .collect();

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));
    svg.push_str("  <defs>\n    <style>\n");
    svg.push_str(&format!(
        "      :root {{\n        --cb: {};\n        --ce: {};\n        --c1: {};\n        --c2: {};\n        --c3: {};\n        --c4: {};\n        --infected: {};\n      }}\n",
        theme.border,
        theme.empty,
        theme.levels[0],
        theme.levels[1],
        theme.levels[2],
        theme.levels[3],
        theme.infected,
    ));
    svg.push_str(&format!("      .bg {{ fill: {}; }}\n", theme.bg));
    svg.push_str(&format!(
        "      .c {{\n        shape-rendering: geometricPrecision;\n        fill: var(--ce);\n        stroke-width: 1px;\n        stroke: var(--cb);\n        width: {dot}px;\n        height: {dot}px;\n      }}\n"
    ));
    svg.push_str(&format!(
        "      .zombie {{\n        font-size: {cell}px;\n        text-anchor: middle;\n        dominant-baseline: middle;\n        animation: zombieMove {}ms linear infinite;\n      }}\n",
        opts.duration_ms
    ));
    svg.push_str("      .infection { fill: var(--infected); opacity: 0; }\n");
    svg.push_str("      .skull { opacity: 0; }\n");

    svg.push_str(&infected_cell_rules(grid, &visit_at, opts));

    svg.push_str("      @keyframes zombieMove {\n");
    svg.push_str(&zombie_keyframes(path, cell));
    svg.push_str("      }\n");
    svg.push_str("    </style>\n  </defs>\n");

    svg.push_str(&format!(
        "  <rect class=\"bg\" width=\"{width}\" height=\"{height}\"/>\n"
    ));
    svg.push_str(&format!(
        "  <g transform=\"translate({cell}, {})\">\n",
        cell * 2
    ));

    let inset = (cell - dot) / 2;
    let mut infected_index = 0usize;
    for c in grid.cells() {
        let x = c.x * cell + inset;
        let y = c.y * cell + inset;
        let fill = theme.level_fill(c.level);
        let visited = visit_at.contains_key(&(c.x, c.y));
        let class = if visited {
            let s = format!("c c{infected_index}");
            infected_index += 1;
            s
        } else {
            "c".to_string()
        };
        svg.push_str(&format!(
            "    <rect class=\"{class}\" x=\"{x}\" y=\"{y}\" width=\"{dot}\" height=\"{dot}\" rx=\"2\" ry=\"2\" style=\"fill: {fill}\"/>\n"
        ));
        if visited {
            let cx = c.x * cell + cell / 2;
            let cy = c.y * cell + cell / 2;
            let idx = infected_index - 1;
            svg.push_str(&format!(
                "    <circle class=\"infection inf{idx}\" cx=\"{cx}\" cy=\"{cy}\" r=\"4\"/>\n"
            ));
            svg.push_str(&format!(
                "    <text class=\"skull skull{idx}\" x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-size=\"8\">\u{1f480}</text>\n",
                cy + 1
            ));
        }
    }

    let (zx, zy) = match path.first() {
        Some(p) => (p.x * cell + cell / 2, p.y * cell + cell / 2),
        None => (cell / 2, cell / 2),
    };
    svg.push_str(&format!(
        "    <text class=\"zombie\" x=\"{zx}\" y=\"{zy}\">\u{1f9df}</text>\n  </g>\n"
    ));

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"20\" text-anchor=\"middle\" fill=\"{}\" font-family=\"monospace\" font-size=\"14\">{}</text>\n",
        width / 2,
        theme.text,
        opts.title
    ));

    let active = grid.active_cells().count();
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-family=\"monospace\" font-size=\"9\">systems: {}/{active} \u{b7} commits: {}</text>\n",
        width / 2,
        height - 8,
        theme.text,
        visit_at.len(),
        grid.total_count()
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Per-infected-cell animation rules: fill flip, infection pulse, skull reveal.
///
/// Indices are assigned in grid cell order over visited cells, matching the
/// class names emitted for the `<rect>`/`<circle>`/`<text>` elements.
fn infected_cell_rules(
    grid: &Grid,
    visit_at: &BTreeMap<(u32, u32), f64>,
    opts: &RenderOptions,
) -> String {
    let dur = opts.duration_ms;
    let mut rules = String::new();
    let mut idx = 0usize;
    for c in grid.cells() {
        let Some(&t) = visit_at.get(&(c.x, c.y)) else {
            continue;
        };
        let start = t * 100.0;
        let pulse_mid = (start + 2.0).min(100.0);
        let end = (start + 5.0).min(100.0);

        rules.push_str(&format!(
            "      .c{idx} {{ animation: infected{idx} {dur}ms linear infinite; }}\n      @keyframes infected{idx} {{\n        0%, {start:.2}% {{ fill: var(--c{}); }}\n        {start:.2}%, 100% {{ fill: var(--infected); }}\n      }}\n",
            c.level.max(1)
        ));
        rules.push_str(&format!(
            "      .inf{idx} {{ animation: infection{idx} {dur}ms linear infinite; }}\n      @keyframes infection{idx} {{\n        0%, {start:.2}% {{ opacity: 0; transform: scale(0); }}\n        {start:.2}% {{ opacity: 0.9; transform: scale(1.5); }}\n        {pulse_mid:.2}% {{ opacity: 0.6; transform: scale(2.5); }}\n        {end:.2}% {{ opacity: 0; transform: scale(0); }}\n        100% {{ opacity: 0; transform: scale(0); }}\n      }}\n"
        ));
        rules.push_str(&format!(
            "      .skull{idx} {{ animation: skull{idx} {dur}ms linear infinite; }}\n      @keyframes skull{idx} {{\n        0%, {end:.2}% {{ opacity: 0; transform: scale(0); }}\n        {end:.2}%, 100% {{ opacity: 1; transform: scale(1); }}\n      }}\n"
        ));
        idx += 1;
    }
    rules
}

/// Keyframe stops for the zombie glyph, one per path point.
fn zombie_keyframes(path: &[PathPoint], cell: u32) -> String {
    if path.len() < 2 {
        let (x, y) = match path.first() {
            Some(p) => (p.x * cell, p.y * cell),
            None => (0, 0),
        };
        return format!(
            "        0% {{ transform: translate({x}px, {y}px); }}\n        100% {{ transform: translate({x}px, {y}px); }}\n"
        );
    }
    let mut frames = String::new();
    let last = (path.len() - 1) as f64;
    for (i, p) in path.iter().enumerate() {
        let pct = i as f64 / last * 100.0;
        frames.push_str(&format!(
            "        {pct:.2}% {{ transform: translate({}px, {}px); }}\n",
            p.x * cell,
            p.y * cell
        ));
    }
    frames
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
