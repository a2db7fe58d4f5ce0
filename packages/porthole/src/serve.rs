//! Adapts the embedded asset store to Axum.
//!
//! The handler only sees the virtual filesystem: open the requested path
//! (the store handles the directory index fallback), stat the handle for
//! size and name, and stream the bytes back.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use porthole_assets::{AssetFile, VirtualFile};
use tracing::debug;

/// Create a router that serves the embedded UI bundle.
pub fn ui_router() -> Router {
    Router::new()
        .route("/", get(serve_index))
        .fallback(serve_asset)
}

/// Serve the root HTML shell.
async fn serve_index() -> impl IntoResponse {
    match porthole_ui::open("/") {
        Ok(file) => asset_response(file),
        Err(err) => {
            debug!("index open failed: {err}");
            not_found_response()
        }
    }
}

/// Serve any embedded asset by its request path.
async fn serve_asset(req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path();
    match porthole_ui::open(path) {
        Ok(file) => asset_response(file),
        Err(err) => {
            debug!("{err}");
            not_found_response()
        }
    }
}

fn asset_response(file: AssetFile) -> Response<Body> {
    let meta = file.metadata();
    let mime = mime_guess::from_path(&meta.name).first_or_octet_stream();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CONTENT_LENGTH, meta.size)
        .body(Body::from(file.content()))
        .unwrap_or_else(|_| not_found_response())
}

/// Helper to create a 404 response without unwrap
fn not_found_response() -> Response<Body> {
    let mut response = Response::new(Body::from("Not Found"));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}
