use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use numble::{args::Args, db, engine::Numble, ui::run_ui};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a daily file.
    let file_appender = tracing_appender::rolling::daily("logs", "numble.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("Starting numble with {:?}", args);

    let db_pool = if args.no_db {
        None
    } else {
        let pool = match &args.db_path {
            Some(path) => db::create_pool_at(path).await,
            None => db::create_pool().await,
        };
        match pool {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("Continuing without persistence: {:#}", e);
                None
            }
        }
    };

    let game = Numble::new(args.session_config())
        .with_par(args.par)
        .with_timer_seconds(args.timer_seconds);

    run_ui(game, db_pool)
}
