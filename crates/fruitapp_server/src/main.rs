//! Server process bootstrap.
//!
//! # Responsibility
//! - Parse CLI configuration, initialize logging, open storage.
//! - Compose repository → service → router explicitly and serve.

use clap::Parser;
use fruitapp_core::db::{open_db, open_db_in_memory};
use fruitapp_core::{default_log_level, init_logging, FruitService, SqliteFruitRepository};
use fruitapp_server::router;
use log::info;
use std::error::Error;
use std::process::ExitCode;

/// Default HTTP bind address.
const HTTP_BIND_ADDRESS_DEFAULT: &str = "127.0.0.1:8080";

/// Fruit CRUD service over SQLite.
#[derive(Parser, Debug)]
#[command(name = "fruitapp_server")]
#[command(about = "Fruit CRUD HTTP service")]
#[command(version)]
struct Cli {
    /// HTTP bind address.
    #[arg(short, long, default_value = HTTP_BIND_ADDRESS_DEFAULT)]
    bind: String,

    /// SQLite database path, or `:memory:` for an ephemeral store.
    #[arg(long, default_value = "fruitapp.db")]
    db: String,

    /// Log directory (absolute). Defaults to `<cwd>/logs`.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace/debug/info/warn/error). Defaults per build mode.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fruitapp_server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?
            .join("logs")
            .to_string_lossy()
            .into_owned(),
    };
    let log_level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&log_level, &log_dir)?;

    let conn = if cli.db == ":memory:" {
        open_db_in_memory()?
    } else {
        open_db(&cli.db)?
    };

    let repo = SqliteFruitRepository::new(conn);
    let service = FruitService::new(repo);
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    info!(
        "event=http_serve module=server status=start bind={} db={}",
        cli.bind, cli.db
    );
    axum::serve(listener, app).await?;

    Ok(())
}
