use crate::api::models::AppState;
use crate::api::pro::handlers::fortune_pro_handler;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new().route("/fortune/pro", post(fortune_pro_handler))
}
