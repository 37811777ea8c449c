use crate::error::{ApiError, Result};
use crate::model::{ShortenRequest, ShortenResponse, StatsResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use lariat_shortener::ShortCode;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let shortened = state.shortener().shorten(request.url).await?;

    let response = ShortenResponse {
        short_url: shortened.code.to_url(state.base_url()),
        code: shortened.code.as_str().to_owned(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = ShortCode::new(code);
    let record = state
        .shortener()
        .resolve(&code)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Click accounting is best-effort bookkeeping; a lost count must not
    // fail the redirect.
    let _ = state.shortener().record_click(&code).await;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}

pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>> {
    let code = ShortCode::new(code);
    let record = state
        .shortener()
        .resolve(&code)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(StatsResponse {
        code: code.as_str().to_owned(),
        original_url: record.original_url,
        clicks: record.clicks,
        created_at: record.created_at,
    }))
}
