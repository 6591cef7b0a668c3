//! HTTP front door for the webstream platform: router, controllers, typed
//! request/response DTOs and the error-to-status mapping.

use domain::error::SetupErrorKind;
use log::*;
use service::AppState;
use tokio::net::TcpListener;

pub mod controller;
pub(crate) mod error;
pub mod params;
pub mod response;
pub mod router;

pub use error::{Error, Result};

/// Bind the configured address and serve the API until the process shuts
/// down. A failed bind is a setup error: fatal to this subsystem and
/// reported to the caller rather than panicking the worker.
pub async fn init_server(app_state: AppState) -> domain::Result<()> {
    let host = app_state.config.host.clone();
    let port = app_state.config.port;
    let router = router::define_routes(app_state);

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| domain::Error::setup(SetupErrorKind::Bind, e))?;

    info!("Server starting... listening for requests on http://{host}:{port}");

    axum::serve(listener, router)
        .await
        .map_err(|e| domain::Error::internal(format!("server error: {e}")))?;

    Ok(())
}
