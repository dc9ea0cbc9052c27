//! Backend for a restaurant ordering demo.
//!
//! Serves a single menu over a JSON API. The menu lives in memory and is
//! reseeded with six sample dishes every time the server starts.
//!
//!
//!
//! # Routes
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | /api/menu | 200, every item | |
//! | GET | /api/menu/{id} | 200, the item | 404 |
//! | POST | /api/menu | 201, the created item | 400 with every violation |
//! | PUT | /api/menu/{id} | 200, the updated item | 404, then 400 |
//! | DELETE | /api/menu/{id} | 200, the removed item | 404 |
//!
//!
//!
//! # Setup
//!
//! Run with request logging.
//! ```sh
//! RUST_LOG=info cargo run -p restaurant
//! ```
//!
//! Change the port.
//! ```sh
//! RUST_PORT=8080 cargo run -p restaurant
//! ```
//!
//! Try it.
//! ```sh
//! curl http://localhost:3000/api/menu/1
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    middleware::from_fn,
    routing::get,
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod routes;
pub mod state;
pub mod utils;
pub mod validation;

use config::Config;
use routes::{
    MENU, MENU_ITEM, create_handler, delete_handler, get_handler, list_handler, update_handler,
};
use state::State;
use utils::log_request;

pub async fn start_server() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Initializing state...");
    let state = State::new(Config::load()?);

    info!("Starting server...");
    let app = router(state.clone());

    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(address).await?;
    info!(
        "Restaurant API running at http://localhost:{}",
        state.config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(MENU, get(list_handler).post(create_handler))
        .route(
            MENU_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
