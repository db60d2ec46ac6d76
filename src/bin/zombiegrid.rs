use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use zombiegrid::{
    ContributionSource, DEFAULT_GRID_WIDTH, GRID_HEIGHT, GithubSource, Grid, RenderOptions,
    SourceConfig, SyntheticSource, Theme, annotate_visit_times, build_path, render_svg,
};

#[derive(Parser, Debug)]
#[command(name = "zombiegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch contributions, plan the traversal, and write the animated SVG.
    Generate(GenerateArgs),
    /// Fetch a contribution grid and write it as JSON.
    Fetch(FetchArgs),
    /// Render an SVG from a previously fetched grid JSON.
    Render(RenderArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SourceMode {
    /// GitHub when a user and token are available, synthetic otherwise.
    Auto,
    /// GitHub GraphQL API only; fails without credentials.
    Github,
    /// Deterministic synthetic calendar.
    Synthetic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    fn theme(self) -> Theme {
        match self {
            Self::Dark => Theme::dark(),
            Self::Light => Theme::light(),
        }
    }
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// GitHub login to fetch the calendar for.
    #[arg(long)]
    user: Option<String>,

    /// API token; defaults to the GITHUB_TOKEN environment variable.
    #[arg(long)]
    token: Option<String>,

    /// Which contribution source to use.
    #[arg(long, value_enum, default_value_t = SourceMode::Auto)]
    source: SourceMode,

    /// Seed for the synthetic source.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Week columns for the synthetic source.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    weeks: u32,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeKind::Dark)]
    theme: ThemeKind,

    /// Animation loop duration in milliseconds.
    #[arg(long, default_value_t = 16_000)]
    duration_ms: u32,

    /// Output SVG path.
    #[arg(long, default_value = "dist/zombie-hacker.svg")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FetchArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output grid JSON path.
    #[arg(long, default_value = "dist/contributions.json")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input grid JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeKind::Dark)]
    theme: ThemeKind,

    /// Animation loop duration in milliseconds.
    #[arg(long, default_value_t = 16_000)]
    duration_ms: u32,

    /// Output SVG path.
    #[arg(long, default_value = "dist/zombie-hacker.svg")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Fetch(args) => cmd_fetch(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let grid = fetch_grid(&args.source)?;
    let path = build_path(&grid);
    let visits = annotate_visit_times(&path, &grid);

    let opts = RenderOptions {
        duration_ms: args.duration_ms,
        ..RenderOptions::default()
    };
    let svg = render_svg(&grid, &path, &visits, &args.theme.theme(), &opts);

    write_output(&args.out, svg.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let grid = fetch_grid(&args.source)?;
    let json = serde_json::to_string_pretty(&grid).context("serialize grid")?;

    write_output(&args.out, json.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read grid json '{}'", args.in_path.display()))?;
    let grid: Grid = serde_json::from_str(&json)
        .with_context(|| format!("parse grid json '{}'", args.in_path.display()))?;

    let path = build_path(&grid);
    let visits = annotate_visit_times(&path, &grid);

    let opts = RenderOptions {
        duration_ms: args.duration_ms,
        ..RenderOptions::default()
    };
    let svg = render_svg(&grid, &path, &visits, &args.theme.theme(), &opts);

    write_output(&args.out, svg.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Resolve and run the contribution source selected on the command line.
///
/// In auto mode a failed GitHub fetch degrades to the synthetic calendar
/// with a warning instead of aborting, so a profile README keeps rendering
/// even when the API is down or the token is missing.
fn fetch_grid(args: &SourceArgs) -> anyhow::Result<Grid> {
    let token = args
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let github_config = match (&args.user, &token) {
        (Some(user), Some(token)) => Some(SourceConfig {
            username: user.clone(),
            token: token.clone(),
        }),
        _ => None,
    };

    let synthetic = SyntheticSource::new(args.seed, args.weeks, GRID_HEIGHT);

    match args.source {
        SourceMode::Github => {
            let config = github_config
                .ok_or_else(|| anyhow::anyhow!("github source requires --user and a token"))?;
            Ok(GithubSource::new(config).fetch()?)
        }
        SourceMode::Synthetic => Ok(synthetic.fetch()?),
        SourceMode::Auto => match github_config {
            Some(config) => match GithubSource::new(config).fetch() {
                Ok(grid) => Ok(grid),
                Err(err) => {
                    tracing::warn!(error = %err, "github fetch failed, using synthetic calendar");
                    Ok(synthetic.fetch()?)
                }
            },
            None => {
                tracing::warn!("no github credentials, using synthetic calendar");
                Ok(synthetic.fetch()?)
            }
        },
    }
}

fn write_output(out: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("write '{}'", out.display()))
}
