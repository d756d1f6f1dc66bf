use hornets_dashboard::{build_router, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hornets_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hornets dashboard backend");

    let config = AppConfig::from_env();
    let bind_address = config.bind_address.clone();
    info!(
        api_key_present = config.api_key.is_some(),
        team = %config.tracked_team_name,
        season = config.season,
        "Loaded configuration"
    );

    let app_state = AppState::from_config(config).expect("Failed to build upstream client");
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .expect("Failed to bind listener");
    info!("Server running on http://{}", bind_address);
    axum::serve(listener, app).await.expect("Server error");
}
