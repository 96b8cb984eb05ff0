use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_backend::api::router;
use attendance_backend::config::AppConfig;
use attendance_backend::db::SqliteCourseStore;
use attendance_backend::services::RosterSession;
use attendance_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "attendance_backend=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let store = Arc::new(SqliteCourseStore::new(pool));
    let mut session = RosterSession::new(store, config.instructor.clone());

    // the shell shows its database alert and retries via POST /reload
    match session.load().await {
        Ok(stats) => info!(
            "signed in as {} with {} courses",
            config.instructor, stats.courses
        ),
        Err(err) => warn!("initial load failed, creation disabled: {}", err),
    }

    let state = AppState {
        session: Arc::new(Mutex::new(session)),
    };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
