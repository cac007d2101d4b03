use axum::routing::get;
use axum::Router;

use crate::handlers::clima;
use crate::state::AppState;

/// Weather lookup routes.
///
/// ```text
/// GET /api/clima            -> get_clima
/// GET /api/clima/{ciudad}   -> get_clima_by_path
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/clima", get(clima::get_clima))
        .route("/api/clima/{ciudad}", get(clima::get_clima_by_path))
}
