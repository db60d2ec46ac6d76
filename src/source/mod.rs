pub(crate) mod github;
pub(crate) mod synthetic;

use crate::foundation::error::ZombieResult;
use crate::grid::model::Grid;

/// Supplies the contribution grid the pipeline runs on.
///
/// The planner and renderer are agnostic to which implementation populated
/// the grid; fetching is front-loaded here so everything downstream stays
/// pure.
pub trait ContributionSource {
    /// Produce a validated contribution grid.
    fn fetch(&self) -> ZombieResult<Grid>;
}

/// Configuration for the remote contribution source.
///
/// Passed explicitly at construction time; no implementation reads the
/// process environment itself.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SourceConfig {
    /// GitHub login to fetch the calendar for.
    pub username: String,
    /// API token with `read:user` scope.
    #[serde(skip_serializing)]
    pub token: String,
}
