use crate::foundation::error::{ZombieError, ZombieResult};
use crate::grid::model::{Cell, Grid, GRID_HEIGHT, quantize_level};
use crate::source::{ContributionSource, SourceConfig};

const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

const CALENDAR_QUERY: &str = "\
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        weeks {
          contributionDays {
            contributionCount
            weekday
            date
          }
        }
      }
    }
  }
}";

/// Fetches the contribution calendar from the GitHub GraphQL API.
pub struct GithubSource {
    config: SourceConfig,
}

impl GithubSource {
    /// Create a source for the given account/token configuration.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl ContributionSource for GithubSource {
    #[tracing::instrument(skip(self), fields(user = %self.config.username))]
    fn fetch(&self) -> ZombieResult<Grid> {
        let request = GraphqlRequest {
            query: CALENDAR_QUERY,
            variables: Variables {
                login: &self.config.username,
            },
        };

        let mut response = ureq::post(GRAPHQL_ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .header("User-Agent", "zombiegrid")
            .send_json(&request)
            .map_err(|e| ZombieError::source(format!("github graphql request failed: {e}")))?;

        let body: GraphqlResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| ZombieError::source(format!("github graphql response malformed: {e}")))?;

        grid_from_response(&body)
    }
}

#[derive(serde::Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(serde::Serialize)]
struct Variables<'a> {
    login: &'a str,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, serde::Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Debug, serde::Deserialize)]
struct User {
    #[serde(rename = "contributionsCollection")]
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, serde::Deserialize)]
struct ContributionsCollection {
    #[serde(rename = "contributionCalendar")]
    contribution_calendar: ContributionCalendar,
}

#[derive(Debug, serde::Deserialize)]
struct ContributionCalendar {
    weeks: Vec<Week>,
}

#[derive(Debug, serde::Deserialize)]
struct Week {
    #[serde(rename = "contributionDays")]
    contribution_days: Vec<Day>,
}

#[derive(Debug, serde::Deserialize)]
struct Day {
    #[serde(rename = "contributionCount")]
    contribution_count: u32,
    weekday: u32,
    date: String,
}

/// Map a decoded GraphQL payload into a validated grid.
///
/// Week index becomes `x`, GitHub's `weekday` becomes `y`, and the raw
/// count is quantized into a level bucket. A payload with GraphQL errors,
/// no matching user, or an empty calendar maps to [`ZombieError::Source`].
pub(crate) fn grid_from_response(response: &GraphqlResponse) -> ZombieResult<Grid> {
    if let Some(first) = response.errors.first() {
        return Err(ZombieError::source(format!(
            "github graphql error: {}",
            first.message
        )));
    }

    let user = response
        .data
        .as_ref()
        .and_then(|d| d.user.as_ref())
        .ok_or_else(|| ZombieError::source("github graphql response has no user"))?;

    let weeks = &user
        .contributions_collection
        .contribution_calendar
        .weeks;
    if weeks.is_empty() {
        return Err(ZombieError::source("contribution calendar is empty"));
    }

    let mut cells = Vec::with_capacity(weeks.len() * GRID_HEIGHT as usize);
    for (week_index, week) in weeks.iter().enumerate() {
        for day in &week.contribution_days {
            cells.push(Cell {
                x: week_index as u32,
                y: day.weekday,
                level: quantize_level(day.contribution_count),
                count: day.contribution_count,
                date: Some(day.date.clone()),
            });
        }
    }

    Grid::new(weeks.len() as u32, GRID_HEIGHT, cells)
}

#[cfg(test)]
#[path = "../../tests/unit/source/github.rs"]
mod tests;
