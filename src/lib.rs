//! Zombiegrid generates a decorative animated SVG that visualizes a GitHub
//! user's contribution calendar: a zombie shambles across the activity grid
//! and infects every cell with contributions on it.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: a [`ContributionSource`] produces a validated [`Grid`]
//!    (remote GraphQL API, or the deterministic synthetic fallback)
//! 2. **Plan**: [`build_path`] turns the grid into a traversal and
//!    [`annotate_visit_times`] derives per-cell first-visit times
//! 3. **Render**: [`render_svg`] emits the SVG document with CSS keyframe
//!    animations synchronized to the traversal
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: planning and rendering are pure and
//!   stable for a given input; the synthetic source is a pure function of
//!   its seed.
//! - **No IO past the source**: fetching is front-loaded in the
//!   [`ContributionSource`]; the planner and renderer never touch the
//!   network or filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod grid;
mod planner;
mod render;
mod source;

pub use foundation::error::{ZombieError, ZombieResult};
pub use grid::model::{Cell, DEFAULT_GRID_WIDTH, GRID_HEIGHT, Grid, quantize_level};
pub use planner::path::{PathPoint, VisitRecord, annotate_visit_times, build_path};
pub use render::svg::{RenderOptions, render_svg};
pub use render::theme::Theme;
pub use source::github::GithubSource;
pub use source::synthetic::SyntheticSource;
pub use source::{ContributionSource, SourceConfig};
