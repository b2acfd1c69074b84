use crate::api::models::*;
use crate::render;
use axum::{Json, extract::State, http::HeaderMap};
use tracing::{info, warn};

const API_KEY_HEADER: &str = "x-api-key";

/// Credential-gated multi-fortune endpoint.
pub async fn fortune_pro_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ProRequest>,
) -> Result<Json<ProResponse>, ApiError> {
    let api_key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if !state.api_keys.validate(api_key) {
        warn!("Rejected pro request with missing or invalid API key");
        return Err(ApiError::Unauthorized(AUTH_DETAIL));
    }

    let n = request.clamped_count();
    info!(count = n, "Rendering pro fortunes");

    // Each fortune is an independent pick and an independent topic roll.
    let mut rng = rand::rng();
    let fortunes = (0..n)
        .map(|_| {
            let template = state.catalog.pick(&mut rng);
            render::render(template, request.base.personalization(), &mut rng)
        })
        .collect();

    Ok(Json(ProResponse {
        fortunes,
        plan: "pro".to_string(),
        note: PRO_NOTE.to_string(),
        cta_url: state.promo.cta_url.clone(),
        cta_short: state.promo.cta_short.clone(),
    }))
}
