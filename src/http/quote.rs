use axum::{
    extract::{Path, State},
    Json,
};

use crate::http::server::AppState;
use crate::quoting::{QuoteId, QuoteResource};

pub async fn list_quotes(State(state): State<AppState>) -> Json<Vec<QuoteResource>> {
    Json(state.service.list_all())
}

/// Misses are answered with 200 and an explanatory status, never 404.
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<QuoteId>,
) -> Json<QuoteResource> {
    Json(state.service.get_by_id(id))
}

pub async fn random_quote(State(state): State<AppState>) -> Json<QuoteResource> {
    Json(state.service.get_random())
}

pub async fn ping(State(state): State<AppState>) -> &'static str {
    state.service.ping().await
}
