mod cache;
mod engine;
mod error;
mod logging;
mod model;
mod pipeline;
mod report;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::engine::AqrEngine;
use crate::error::AqrError;
use crate::model::profile::RatingProfile;
use crate::store::DefenseRatingTable;
use crate::store::file::FileShotStore;

/// Assist Quality Rating: score assisted shots from a shot log.
#[derive(Debug, Parser)]
#[command(name = "assist-aqr", version, about)]
struct Cli {
    /// Shot log, JSON or gzipped JSON
    #[arg(long)]
    shots: PathBuf,

    /// Team defensive ratings, JSON or gzipped JSON
    #[arg(long)]
    defense: Option<PathBuf>,

    /// Season label, e.g. 2024-25
    #[arg(long, default_value = "2024-25")]
    season: String,

    /// Parameter profile version
    #[arg(long, value_enum, default_value_t = ProfileArg::V1)]
    profile: ProfileArg,

    /// Emit JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    V1,
    V0,
}

impl ProfileArg {
    fn to_profile(self) -> RatingProfile {
        match self {
            ProfileArg::V1 => RatingProfile::default_v1(),
            ProfileArg::V0 => RatingProfile::legacy_v0(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Factor breakdown of one assist in a game
    Breakdown {
        /// Passer player id
        assister: u64,
        /// Passer's team abbreviation
        team: String,
        /// Game id
        game: String,
        /// Which of the passer's assists in the game, 1-based
        #[arg(long, default_value_t = 1)]
        pick: usize,
    },
    /// Average AQR of a passer's assists in one game
    Game {
        assister: u64,
        team: String,
        game: String,
    },
    /// Season average AQR for a passer
    Season { assister: u64, team: String },
    /// Full assister profile: zone mix, top assists, connections
    Analyze { assister: u64, team: String },
    /// Side-by-side comparison of passers on one team
    Compare {
        team: String,
        /// Passer player ids
        #[arg(required = true, num_args = 2..)]
        assisters: Vec<u64>,
    },
    /// League-wide passer rankings
    Rankings {
        /// Minimum assists to qualify (defaults to the profile's threshold)
        #[arg(long)]
        min_assists: Option<usize>,
        /// Rows to print
        #[arg(long, default_value_t = 50)]
        limit: usize,
        /// Rebuild population statistics even if cached
        #[arg(long)]
        force_refresh: bool,
    },
}

fn emit<T: Serialize>(json: bool, data: &T, text: impl FnOnce(&T) -> String) -> Result<(), AqrError> {
    if json {
        println!("{}", report::json::render(data)?);
    } else {
        print!("{}", text(data));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), AqrError> {
    let store = FileShotStore::load(&cli.shots)?;
    let defense = match &cli.defense {
        Some(path) => DefenseRatingTable::load(path)?,
        None => DefenseRatingTable::empty(),
    };
    let mut engine = AqrEngine::new(store, defense, cli.profile.to_profile());
    let season = cli.season.as_str();

    match cli.command {
        Command::Breakdown {
            assister,
            team,
            game,
            pick,
        } => {
            let out = engine.assist_breakdown(assister, &team, &game, pick, season)?;
            emit(cli.json, &out, report::text::render_breakdown)
        }
        Command::Game {
            assister,
            team,
            game,
        } => {
            let out = engine.game_average(assister, &team, &game, season)?;
            emit(cli.json, &out, report::text::render_game)
        }
        Command::Season { assister, team } => {
            let out = engine.season_average(assister, &team, season)?;
            emit(cli.json, &out, report::text::render_season)
        }
        Command::Analyze { assister, team } => {
            let out = engine.analyze_assister(assister, &team, season)?;
            emit(cli.json, &out, report::text::render_analysis)
        }
        Command::Compare { team, assisters } => {
            let out = engine.compare_assisters(&assisters, &team, season)?;
            emit(cli.json, &out, report::text::render_compare)
        }
        Command::Rankings {
            min_assists,
            limit,
            force_refresh,
        } => {
            let out = engine.rankings(season, min_assists, limit, force_refresh)?;
            emit(cli.json, &out, report::text::render_rankings)
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
