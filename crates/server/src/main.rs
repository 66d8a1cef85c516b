use axum::{Router, routing::get};
use database::{clock::SystemClock, db::create_connection};
use log::info;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod error;
mod principal;
mod routes;
mod state;
mod utils;

use doc::ApiDoc;
use state::AppState;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let issuer_url = std::env::var("OIDC_ISSUER_URL").expect("OIDC_ISSUER_URL is not set");
    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(&issuer_url)
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");

    let state = AppState {
        db,
        clock: Arc::new(SystemClock),
    };

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health))
        .nest(
            "/registration",
            routes::registration_routes()
                .layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer())),
        )
        .layer(CompressionLayer::new())
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Running axum on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
