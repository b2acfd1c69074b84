use crate::auth::ApiKeySet;
use crate::catalog::Catalog;
use crate::config::{AppConfig, PromoConfig};
use crate::render::Personalization;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub const POWERED_BY: &str = "Fortune Cookie API v1.2";
pub const PRO_NOTE: &str =
    "Pass X-API-Key header. Replace DEMO-KEY-123 with your real key when deploying.";
pub const AUTH_DETAIL: &str = "Invalid or missing API key. Use header X-API-Key.";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub api_keys: Arc<ApiKeySet>,
    pub promo: Arc<PromoConfig>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            catalog: Arc::new(Catalog::new()),
            api_keys: Arc::new(ApiKeySet::new(config.auth.api_keys.iter().cloned())),
            promo: Arc::new(config.promo.clone()),
        }
    }
}

/// Body of `POST /fortune`
#[derive(Debug, Default, Deserialize)]
pub struct FortuneRequest {
    pub name: Option<String>,
    pub vibe: Option<String>,
    pub topic: Option<String>,
}

impl FortuneRequest {
    pub fn personalization(&self) -> Personalization<'_> {
        Personalization {
            name: self.name.as_deref(),
            vibe: self.vibe.as_deref(),
            topic: self.topic.as_deref(),
        }
    }
}

/// Body of `POST /fortune/pro`
#[derive(Debug, Deserialize)]
pub struct ProRequest {
    #[serde(flatten)]
    pub base: FortuneRequest,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    3
}

impl ProRequest {
    /// Clamp the requested batch size into the allowed range.
    pub fn clamped_count(&self) -> usize {
        self.count.clamp(1, 5) as usize
    }
}

/// Response from the free fortune endpoint
#[derive(Debug, Serialize)]
pub struct FortuneResponse {
    pub fortune: String,
    pub cta_url: String,
    pub cta_short: String,
    pub powered_by: String,
}

/// Response from the pro fortune endpoint
#[derive(Debug, Serialize)]
pub struct ProResponse {
    pub fortunes: Vec<String>,
    pub plan: String,
    pub note: String,
    pub cta_url: String,
    pub cta_short: String,
}

/// Plain message wrapper for the base routes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub detail: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(detail) => (
                StatusCode::UNAUTHORIZED,
                Json(AuthErrorBody {
                    detail: detail.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pro_request_count_defaults_to_three() {
        let req: ProRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.count, 3);
        assert_eq!(req.clamped_count(), 3);
    }

    #[test]
    fn pro_request_flattens_fortune_fields() {
        let req: ProRequest =
            serde_json::from_str(r#"{"name":"Alex","vibe":"funny","topic":"ai","count":2}"#)
                .unwrap();
        assert_eq!(req.base.name.as_deref(), Some("Alex"));
        assert_eq!(req.base.vibe.as_deref(), Some("funny"));
        assert_eq!(req.base.topic.as_deref(), Some("ai"));
        assert_eq!(req.count, 2);
    }

    #[test]
    fn count_clamps_into_allowed_range() {
        let low: ProRequest = serde_json::from_str(r#"{"count":0}"#).unwrap();
        assert_eq!(low.clamped_count(), 1);

        let negative: ProRequest = serde_json::from_str(r#"{"count":-7}"#).unwrap();
        assert_eq!(negative.clamped_count(), 1);

        let high: ProRequest = serde_json::from_str(r#"{"count":10}"#).unwrap();
        assert_eq!(high.clamped_count(), 5);

        let in_range: ProRequest = serde_json::from_str(r#"{"count":4}"#).unwrap();
        assert_eq!(in_range.clamped_count(), 4);
    }

    #[test]
    fn unauthorized_error_renders_401_with_detail() {
        let response = ApiError::Unauthorized(AUTH_DETAIL).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
