//! # schemaform - preview host
//!
//! Ships the schema form builder UI as a single binary. The browser does all
//! of the parsing, rendering and submission work through `schemaform-core`;
//! this crate only serves the compiled assets and a health endpoint.
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = schemaform::create_app();
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Builds the router: health check, with the embedded UI as catch-all.
pub fn create_app() -> Router {
    let health_handler = Arc::new(HealthHandler::new());

    Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .fallback(UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
