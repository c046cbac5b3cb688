use clap::Parser;
use env_logger::Env;
use log::error;

use gacor_bot::bot::Bot;
use gacor_bot::client::WebSocketGameClient;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Websocket URI of the game server.
    #[arg(long, default_value = "ws://127.0.0.1:8765")]
    uri: String,

    /// Seed for the no-target fallback RNG. Seeded from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Name to register with when no TOKEN is configured.
    #[arg(long, default_value = "Gacor")]
    name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    // Init logger with default value of info
    // This can be overriden with RUST_LOG env var
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let bot = Bot::new(cli.seed);
    let token = dotenvy::var("TOKEN").ok();

    if let Err(err) = WebSocketGameClient::new(bot, token, cli.uri, cli.name)
        .run()
        .await
    {
        error!("Error while running bot with underlying error:");
        error!("  {}", err);
    }
}
