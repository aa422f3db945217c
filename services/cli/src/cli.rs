use crate::infra::{load_roster, parse_category};
use crate::render::{render_breakdown, render_categories, render_rankings, OutputFormat};
use clap::{Args, Parser, Subcommand};
use skillboard::config::AppConfig;
use skillboard::error::AppError;
use skillboard::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Skillboard",
    about = "Rank marketplace students by their skills, achievements and work samples",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the student leaderboard (default command)
    Rankings(RankingsArgs),
    /// Explain how a single user's score is made up
    Breakdown(BreakdownArgs),
    /// List catalog categories with the number of ranked students in each
    Categories(RosterArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// JSON roster snapshot (overrides APP_ROSTER_PATH; defaults to the sample roster)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RankingsArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Category to rank within, or "all" (overrides APP_DEFAULT_CATEGORY)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Only print the first N rows
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct BreakdownArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// User id to explain
    #[arg(long)]
    pub(crate) user: String,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Rankings(RankingsArgs::default()));
    let stdout = std::io::stdout();

    match command {
        Command::Rankings(args) => {
            let roster = load_roster(args.roster.roster.as_deref(), &config)?;
            let raw_category = args
                .category
                .as_deref()
                .unwrap_or(&config.roster.default_category);
            let selection = parse_category(raw_category)?;
            render_rankings(&roster, &selection, args.format, args.limit, stdout.lock())
        }
        Command::Breakdown(args) => {
            let roster = load_roster(args.roster.roster.as_deref(), &config)?;
            render_breakdown(&roster, &args.user, stdout.lock())
        }
        Command::Categories(args) => {
            let roster = load_roster(args.roster.as_deref(), &config)?;
            render_categories(&roster, stdout.lock())
        }
    }
}
