use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod db;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors are reported in color
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(database) => {
            let db = db::connect(database)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
            db::migrate(&db, database)
                .await
                .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;
            Some(db)
        }
        None => None,
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(db.as_ref()), &config.server)?;

    // /health: liveness with app name/version
    let app = router.merge(health_router(config.app));

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting accounts API (30s shutdown timeout)"
    );

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = db {
                info!("Shutting down: closing database connections");
                match db.close().await {
                    Ok(_) => info!("PostgreSQL connection closed successfully"),
                    Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::server::ServerConfig;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        create_router::<openapi::ApiDoc>(api::routes(None), &ServerConfig::default())
            .unwrap()
            .merge(health_router(core_config::app_info!()))
    }

    #[tokio::test]
    async fn test_accounts_mounted_under_api() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/accounts")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"John","email":"john@example.com","password":"Password123"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], "accounts_api");
    }

    #[test]
    fn test_openapi_document_lists_account_paths() {
        use utoipa::OpenApi;

        let doc = openapi::ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.iter().any(|p| p == "/accounts/{id}"), "paths: {:?}", paths);
    }
}
