use axum::routing::get;
use axum::Router;

use crate::handlers::info;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(info::info))
        .route("/api/", get(info::info))
}
