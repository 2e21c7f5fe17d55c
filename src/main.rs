//! Drag Table - Entry Point

use chrono::Utc;
use clap::Parser;
use dragtable::model::{user_schema, LoadError, Table, User};
use dragtable::source::LoadState;
use std::path::PathBuf;
use tracing::{info, warn};

/// Drag Table - interactive terminal table with draggable columns
#[derive(Parser, Debug)]
#[command(name = "dragtable")]
#[command(version)]
#[command(about = "Browse user records in a sortable, paginated table with draggable columns")]
pub struct Args {
    /// JSON file of users to show as-is (uses the generated cache if not provided)
    pub file: Option<PathBuf>,

    /// Cache file for generated users
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Rows per page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Number of users to generate when the cache is missing or too small
    #[arg(short, long)]
    pub records: Option<usize>,

    /// Seed for generated users
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that override the configuration file and environment.
    fn overrides(&self) -> dragtable::config::CliOverrides {
        dragtable::config::CliOverrides {
            page_size: self.page_size.map(|n| n as usize),
            record_count: self.records,
            data_file: self.data.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = dragtable::config::resolve(args.config.clone(), args.overrides())?;

    dragtable::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let provider = dragtable::source::select_provider(
        args.file.clone(),
        config.data_file.clone(),
        config.record_count,
        config.seed,
    );
    let data = into_table(dragtable::source::load(provider.as_ref()))?;

    dragtable::view::run_with_data(data, config.page_size)?;

    Ok(())
}

/// Build the table once records are in hand.
///
/// `today` for the derived columns is captured here, once per run.
/// Records that cannot form a table (duplicate ids and the like) are shown
/// as a failed load; only a broken column declaration is an error.
fn into_table(
    loaded: LoadState<Vec<User>>,
) -> Result<LoadState<Table<User>>, dragtable::model::AppError> {
    Ok(match loaded {
        LoadState::Ready(users) => {
            info!(count = users.len(), "Building table");
            match Table::new(user_schema(Utc::now())?, users) {
                Ok(table) => LoadState::Ready(table),
                Err(e) if e.is_record_error() => {
                    warn!(error = %e, "Loaded records rejected");
                    LoadState::Failed(LoadError::InvalidRecords(e))
                }
                Err(e) => return Err(e.into()),
            }
        }
        LoadState::Loading => LoadState::Loading,
        LoadState::Empty => LoadState::Empty,
        LoadState::Failed(error) => LoadState::Failed(error),
    })
}
