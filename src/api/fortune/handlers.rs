use crate::api::models::*;
use crate::render;
use axum::{Json, extract::State};
use tracing::info;

/// Free fortune endpoint. Always succeeds for a well-formed body.
pub async fn fortune_handler(
    State(state): State<AppState>,
    Json(request): Json<FortuneRequest>,
) -> Json<FortuneResponse> {
    let mut rng = rand::rng();
    let template = state.catalog.pick(&mut rng);
    let fortune = render::render(template, request.personalization(), &mut rng);

    info!(vibe = ?request.vibe, topic = ?request.topic, "Rendered fortune");

    Json(FortuneResponse {
        fortune,
        cta_url: state.promo.cta_url.clone(),
        cta_short: state.promo.cta_short.clone(),
        powered_by: POWERED_BY.to_string(),
    })
}
