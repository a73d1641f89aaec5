//! Crossover Roster CLI
//!
//! Loads the roster, applies the selections given on the command line and
//! prints the resulting view as text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crossover_roster::{
    view::{MetricsPanel, OptionsListing},
    RegionFilter, RoleFilter, RoleMatch, RosterConfig, TrophyMatch, ViewSession, VERSION,
};

#[derive(Parser)]
#[command(version, about = "Valorant pros with tier-one Counter-Strike careers")]
struct Cli {
    /// Dataset file; overrides ROSTER_DATA
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Role matching: substring | token
    #[arg(long, global = true)]
    role_match: Option<RoleMatch>,

    /// Trophy counting: substring | word
    #[arg(long, global = true)]
    trophy_match: Option<TrophyMatch>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the filtered roster
    List(ListArgs),
    /// Show region, role and tag choices
    Options,
    /// Show the career counters
    Stats,
}

#[derive(Args, Default)]
struct ListArgs {
    /// Free-text search
    #[arg(short, long, default_value = "")]
    search: String,

    /// "All regions", "North America" (na) or "EMEA"
    #[arg(short, long)]
    region: Option<RegionFilter>,

    /// Role from the role list
    #[arg(long)]
    role: Option<String>,

    /// Tag from the tag list
    #[arg(short, long)]
    tag: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Crossover Roster v{}", VERSION);

    let mut config = RosterConfig::from_env().context("Invalid environment configuration")?;
    if let Some(path) = cli.data {
        config.data_path = Some(path);
    }
    if let Some(policy) = cli.role_match {
        config.role_match = policy;
    }
    if let Some(policy) = cli.trophy_match {
        config.trophy_match = policy;
    }

    let roster = config.load_roster().context("Failed to load roster dataset")?;
    info!("Roster ready: {} players", roster.len());

    let mut session = ViewSession::with_config(&roster, &config);

    match cli.command.unwrap_or(Command::List(ListArgs::default())) {
        Command::List(args) => {
            session.set_query(args.search);
            if let Some(region) = args.region {
                session.select_region(region);
            }
            if let Some(role) = args.role.as_deref() {
                session.select_role(RoleFilter::from(role));
            }
            if let Some(tag) = args.tag.as_deref() {
                session.toggle_tag(tag);
            }

            let view = session.snapshot();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{view}");
            }
        }
        Command::Options => {
            let view = session.snapshot();
            if cli.json {
                let options = serde_json::json!({
                    "regions": view.region_options,
                    "roles": view.role_options,
                    "tags": view.tag_options,
                });
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", OptionsListing(&view));
            }
        }
        Command::Stats => {
            let aggregates = session.aggregates();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&aggregates)?);
            } else {
                print!("{}", MetricsPanel(&aggregates));
            }
        }
    }

    Ok(())
}
