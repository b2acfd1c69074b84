pub mod fortune;
pub mod models;
pub mod pro;

// Re-exports
pub use models::*;

// Base routes (simple, keep here)
use axum::{Json, extract::Path};

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, your API is running!".to_string(),
    })
}

pub async fn hello_handler(Path(name): Path<String>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("Hello, {name}! Welcome to your API."),
    })
}
