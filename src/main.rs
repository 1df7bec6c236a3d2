mod books;
mod error;
mod settings;
mod sqlite;

use error::AppResult;
use settings::Settings;

use anyhow::Result;
use sqlx::SqlitePool;
use tokio::{net::TcpListener, time::Instant};

use axum::{
    routing::{get, post, put},
    serve, Router,
};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    db: SqlitePool,
}

async fn create_app(db_settings: &sqlite::Settings) -> Result<Router> {
    let db = sqlite::create_pool(db_settings).await?;
    let app_state = AppState { db };

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/books", post(books::create_book))
        .route("/api/books", get(books::list_books))
        .route("/api/books/{id}", get(books::get_book_by_id))
        .route("/api/books/{id}", put(books::update_book))
        .with_state(app_state);

    Ok(app)
}

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenv::dotenv().ok();

    let start = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::load()?;
    let app = create_app(&settings.sqlite).await?;

    let listener = TcpListener::bind(format!("0.0.0.0:{}", settings.api.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    // Create a shutdown signal handler
    let shutdown = async move {
        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = terminate => {},
        }
        let duration = start.elapsed();
        info!("Shutting down gracefully... in {:?}", duration);
    };

    // Start the server with graceful shutdown
    let server = serve(listener, app).with_graceful_shutdown(shutdown);

    if let Err(e) = server.await {
        eprintln!("Server error: {}", e);
    }

    Ok(())
}
