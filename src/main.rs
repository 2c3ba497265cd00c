use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

use tourney_board::config::{Config, ConfigError};
use tourney_board::leaderboard::TournamentLeaderboard;
use tourney_board::records::{MatchForm, Tournament, TournamentForm};
use tourney_board::registry::{RecentEntry, Registry, RegistryError};
use tourney_board::session::{self, SessionError};
use tourney_board::store::{DiskStore, Store, StoreError};
use tourney_board::subscriber::{self, LoggingError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Admin login required (run `tourney-board login`)")]
    NotLoggedIn,
}

/// Output format for the leaderboard.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Parser)]
#[command(name = "tourney-board")]
#[command(about = "Record tournament match results and show ranked leaderboards")]
struct Cli {
    /// Store path (overrides the config file)
    #[arg(long, global = true, env = "TOURNEY_BOARD_PATH")]
    path: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "TOURNEY_BOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new store
    Init,

    /// Start an admin session
    Login {
        username: String,
        password: String,
    },

    /// End the admin session
    Logout,

    /// Show whether an admin session is active
    Status,

    /// Create a tournament (admin)
    CreateTournament {
        /// Display name
        #[arg(long)]
        name: String,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Expected number of matches
        #[arg(long, default_value = "0")]
        matches: String,
    },

    /// Delete a tournament and all of its match data (admin)
    DeleteTournament {
        /// Tournament id
        id: String,
    },

    /// Record one team's result for one match (admin)
    AddMatch {
        /// Tournament id
        #[arg(long, default_value = "")]
        tournament: String,

        #[arg(long, default_value = "")]
        match_number: String,

        #[arg(long)]
        team: String,

        /// Finishing position (informational)
        #[arg(long, default_value = "")]
        position: String,

        #[arg(long, default_value = "")]
        placement_points: String,

        #[arg(long, default_value = "")]
        kill_points: String,
    },

    /// Show the most recently added match data (admin)
    Recent {
        /// Number of entries (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List tournaments, most recent date first
    Tournaments,

    /// Show the leaderboard for a tournament
    Leaderboard {
        /// Tournament id
        id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    subscriber::init(&config.logging)?;

    let path = cli.path.unwrap_or_else(|| config.store.path.clone());

    match cli.command {
        Commands::Init => {
            let store = DiskStore::init(&path)?;
            drop(store);
            println!("Initialized store at {}", path.display());
            Ok(())
        }

        Commands::Login { username, password } => {
            let mut store = DiskStore::open(&path)?;
            session::login(&mut store, &config.admin, &username, &password)?;
            println!("Login successful!");
            Ok(())
        }

        Commands::Logout => {
            let mut store = DiskStore::open(&path)?;
            session::logout(&mut store)?;
            println!("Logged out");
            Ok(())
        }

        Commands::Status => {
            let store = DiskStore::open(&path)?;
            if session::is_logged_in(&store)? {
                println!("Admin session active");
            } else {
                println!("Not logged in");
            }
            Ok(())
        }

        Commands::CreateTournament {
            name,
            date,
            matches,
        } => {
            let mut registry = admin_registry(&path)?;
            let form = TournamentForm {
                name,
                date,
                total_matches: matches,
            };
            let tournament = registry.create_tournament(form.parse().map_err(RegistryError::from)?)?;
            println!("Tournament created successfully! ({})", tournament.id);
            Ok(())
        }

        Commands::DeleteTournament { id } => {
            let mut registry = admin_registry(&path)?;
            let deleted = registry.delete_tournament(&id)?;
            println!(
                "Tournament '{}' deleted successfully! ({} match records removed)",
                deleted.tournament.name, deleted.removed_matches
            );
            Ok(())
        }

        Commands::AddMatch {
            tournament,
            match_number,
            team,
            position,
            placement_points,
            kill_points,
        } => {
            let mut registry = admin_registry(&path)?;
            let form = MatchForm {
                tournament_id: tournament,
                match_number,
                team_name: team,
                placement_position: position,
                placement_points,
                kill_points,
            };
            let record = registry.create_match(form.parse())?;
            println!(
                "Match data added successfully! (total {} points)",
                record.total_points()
            );
            Ok(())
        }

        Commands::Recent { limit } => {
            let registry = admin_registry(&path)?;
            let entries = registry.recent_matches(limit.unwrap_or(config.admin.recent_limit))?;
            print_recent(&entries);
            Ok(())
        }

        Commands::Tournaments => {
            let registry = Registry::new(DiskStore::open(&path)?);
            print_tournaments(&registry.tournaments_by_date()?);
            Ok(())
        }

        Commands::Leaderboard { id, format } => {
            let registry = Registry::new(DiskStore::open(&path)?);
            let board = registry.leaderboard(&id)?;
            match format {
                OutputFormat::Text => print_leaderboard(&board),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&board)?),
            }
            Ok(())
        }
    }
}

/// Open the store for an admin command, refusing without a session.
fn admin_registry(path: &std::path::Path) -> Result<Registry<DiskStore>, AppError> {
    let store = DiskStore::open(path)?;
    require_admin(&store)?;
    Ok(Registry::new(store))
}

fn require_admin(store: &impl Store) -> Result<(), AppError> {
    if session::is_logged_in(store)? {
        Ok(())
    } else {
        Err(AppError::NotLoggedIn)
    }
}

fn print_tournaments(tournaments: &[Tournament]) {
    if tournaments.is_empty() {
        println!("No Tournaments Yet");
        println!("Tournaments will appear here once created by admin");
        return;
    }

    for t in tournaments {
        println!(
            "{}  {}  {}  {} Matches",
            t.id,
            t.name,
            t.display_date(),
            t.total_matches
        );
    }
}

fn print_recent(entries: &[RecentEntry]) {
    if entries.is_empty() {
        println!("No match data added yet");
        return;
    }

    for entry in entries {
        let record = &entry.record;
        println!(
            "{} - Match {} | Team: {} | Position: {} | Placement Pts: {} | Kill Pts: {} | Total: {}",
            entry.tournament_name,
            record.match_number(),
            record.team_name(),
            record.placement_position(),
            record.placement_points(),
            record.kill_points(),
            record.total_points()
        );
    }
}

fn print_leaderboard(board: &TournamentLeaderboard) {
    let t = &board.tournament;
    println!("{} | {} | {} Matches", t.name, t.display_date(), t.total_matches);
    println!();

    if !board.has_match_data() {
        println!("No Match Data");
        println!("Match data will appear here once added by admin");
        return;
    }

    let team_width = board
        .standings
        .iter()
        .map(|s| s.team_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("TEAM".len());

    println!(
        "{:>5} {:<team_width$} {:>7} {:>5} {:>9} {:>5}",
        "RANK", "TEAM", "MATCHES", "KILLS", "PLACEMENT", "TOTAL"
    );
    for s in &board.standings {
        let badge = if s.is_podium() { "*" } else { " " };
        println!(
            "{:>4}{} {:<team_width$} {:>7} {:>5} {:>9} {:>5}",
            s.rank,
            badge,
            s.team_name,
            s.matches_played,
            s.total_kills,
            s.total_placement_points,
            s.total_points
        );
    }
}
