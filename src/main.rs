use clanboard::server::{config::Config, error::Error, model::app::AppState, router, startup};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = serve(config).await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let clash_client = startup::build_clash_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    if !clash_client.has_token() {
        tracing::warn!("COC_API_TOKEN is not set, live player name lookups are disabled");
    }

    let state = AppState {
        db,
        clash_client,
        settings: config.player_database_settings(),
    };
    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        address = %config.bind_address,
        home_clan_tag = %config.home_clan_tag,
        "Starting server"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
