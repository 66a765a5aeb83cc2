use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use company_api::api::{self, AppState};
use company_api::config::{AppConfig, StorageBackend};
use company_api::infrastructure::database;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let state = match config.storage {
        StorageBackend::Postgres => {
            // Connect to database
            tracing::info!("Connecting to database...");
            let pool = database::connect(&config.database_url, config.max_connections)
                .await
                .expect("Failed to connect to database");

            database::run_migrations(&pool)
                .await
                .expect("Failed to run migrations");

            tracing::info!("Database connected successfully");
            AppState::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records will not survive a restart");
            AppState::in_memory()
        }
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
