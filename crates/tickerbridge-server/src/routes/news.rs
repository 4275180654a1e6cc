use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tickerbridge_core::NewsBatch;

use crate::dto::{parse_body, NewsSearchBody};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn search(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<NewsBatch>> {
    let request = parse_body::<NewsSearchBody>(&body)?.validate(state.now())?;
    let adapter = state.market()?;

    tracing::info!(ticker = %request.ticker, days = request.days, "news search");
    Ok(Json(adapter.company_news(&request).await?))
}
