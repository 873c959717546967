mod game_session;
mod identity;
mod protocol;
mod score_store;
mod server_config;
mod web_server;
mod ws_handler;

use std::sync::Arc;

use clap::Parser;
use common::{log, logger};

use score_store::InMemoryScoreStore;
use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "viper_venture_server")]
struct Args {
    /// Path to a YAML config file; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match &args.config {
        Some(path) => ServerConfig::from_yaml_file(path)?,
        None => ServerConfig::default(),
    };

    let score_store = Arc::new(InMemoryScoreStore::new());

    log!("Viper Venture server starting");
    web_server::run_web_server(&config, score_store).await?;
    log!("Server shut down gracefully");

    Ok(())
}
