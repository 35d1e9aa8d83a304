pub mod api;
pub mod modules;
mod schema;
pub mod shared;

use api::router::{build_router, AppState};
use modules::content::{application::service::ContentService, infrastructure::ContentRepositoryImpl, ContentRepository};
use modules::feature::{application::service::FeatureService, infrastructure::FeatureRepositoryImpl, FeatureRepository};
use modules::import::application::service::ImportService;
use modules::layer::{application::service::LayerService, infrastructure::LayerRepositoryImpl, LayerRepository};
use shared::errors::AppError;
use shared::Database;
use std::sync::Arc;

/// Wire repositories and services onto one database handle.
pub fn build_state(database: Arc<Database>) -> AppState {
    let layer_repo: Arc<dyn LayerRepository> =
        Arc::new(LayerRepositoryImpl::new(Arc::clone(&database)));
    let feature_repo: Arc<dyn FeatureRepository> =
        Arc::new(FeatureRepositoryImpl::new(Arc::clone(&database)));
    let content_repo: Arc<dyn ContentRepository> =
        Arc::new(ContentRepositoryImpl::new(Arc::clone(&database)));

    let layer_service = Arc::new(LayerService::new(
        Arc::clone(&layer_repo),
        Arc::clone(&feature_repo),
    ));
    let feature_service = Arc::new(FeatureService::new(
        Arc::clone(&feature_repo),
        Arc::clone(&layer_repo),
        Arc::clone(&content_repo),
    ));
    let content_service = Arc::new(ContentService::new(
        Arc::clone(&content_repo),
        Arc::clone(&layer_repo),
    ));
    let import_service = Arc::new(ImportService::new(
        Arc::clone(&feature_repo),
        Arc::clone(&layer_repo),
    ));

    AppState {
        layer_service,
        feature_service,
        content_service,
        import_service,
    }
}

fn run_migrations(database: &Database) {
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    match database.get_connection() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run database migrations: {}", e);
                log::warn!("Continuing with the existing schema");
            } else {
                log::info!("Database migrations completed");
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection for migrations: {}", e);
        }
    }
}

pub async fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();

    let database = Arc::new(Database::new()?);
    run_migrations(&database);

    let state = build_state(database);
    let app = build_router(state);

    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    log::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", addr, e)))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
