use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tickerbridge_core::FilingsBatch;

use crate::dto::{parse_body, FilingsSearchBody};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn search(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<FilingsBatch>> {
    let request = parse_body::<FilingsSearchBody>(&body)?.validate()?;
    let adapter = state.filings()?;

    tracing::info!(ticker = %request.ticker, forms = ?request.forms, limit = request.limit, "filings search");
    Ok(Json(adapter.search(&request).await?))
}
