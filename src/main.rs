//! Quoteboard CLI - serve the backend, seed demo data, inspect the database

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quoteboard::server::{self, AppState};
use quoteboard::storage::SqliteStore;
use quoteboard::{config, covid, joke, player, user};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "quoteboard")]
#[command(version)]
#[command(about = "Demo portfolio backend - quotes, jokes, users, players and covid stats")]
#[command(long_about = r#"
Quoteboard serves a handful of demo resources over a shared SQLite database:
  • The quote repository consumed by the GitHub Pages frontend
  • Joke, user, player and covid snapshot APIs
  • A few static HTML pages with a custom 404

Example usage:
  quoteboard generate-data
  quoteboard serve --port 8086
  quoteboard stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an optional quoteboard.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Directory holding the HTML pages and static assets
        #[arg(short, long)]
        site: Option<PathBuf>,
    },

    /// Seed demo users, players, jokes and the covid snapshot
    GenerateData {
        /// Path to the database file
        #[arg(short, long, default_value = "quoteboard.db")]
        database: PathBuf,
    },

    /// Show row counts for the database
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "quoteboard.db")]
        database: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, database, site } => {
            let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

            // CLI flags win over the config file over built-in defaults
            let port = port.or(config.port).unwrap_or(8086);
            let database = database
                .or_else(|| config.database.clone().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("quoteboard.db"));
            let site = site
                .or_else(|| config.site.clone().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("site"));

            config::ensure_db_dir(&database)?;
            let store = SqliteStore::open(&database)?;
            tracing::info!("Opened database {:?}", database);

            let state = AppState::new(store, site);
            server::start_server(port, state).await?;
        }

        Commands::GenerateData { database } => {
            config::ensure_db_dir(&database)?;
            let store = SqliteStore::open(&database)?;

            println!("🚀 Seeding demo data into {:?}", database);

            let users = store.seed_users(&user::default_users())?;
            let players = store.seed_players(&player::default_players())?;
            let jokes = store.seed_jokes(&joke::default_jokes())?;
            let covid = store.seed_covid(&covid::snapshot())?;

            println!(
                "✅ Inserted {} users, {} players, {} jokes, {} covid records",
                users, players, jokes, covid
            );
            println!("{}", store.stats()?);
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;
            let stats = store.stats()?;

            println!("📊 Quoteboard Statistics ({:?})", database);
            println!("------------------------------------");
            println!("{}", stats);
        }
    }

    Ok(())
}
