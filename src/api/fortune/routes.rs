use crate::api::fortune::handlers::fortune_handler;
use crate::api::models::AppState;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new().route("/fortune", post(fortune_handler))
}
