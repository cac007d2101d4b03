pub mod clima;
pub mod health;
pub mod info;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route table.
///
/// Paths are registered in full rather than nested so `/api` and `/api/`
/// both resolve to the info handler.
///
/// ```text
/// GET /api, /api/             info
/// GET /api/clima?ciudad=      weather by query parameter
/// GET /api/clima/{ciudad}     weather by path segment
/// GET /api/health             upstream probe
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(info::router())
        .merge(clima::router())
        .merge(health::router())
}
