use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tickerbridge_core::OhlcvSeries;

use crate::dto::{parse_body, OhlcvBody};
use crate::error::ApiResult;
use crate::state::AppState;

/// Daily candles. A provider `no_data` answer is `200` with an empty `ohlcv`.
pub async fn ohlcv(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<OhlcvSeries>> {
    let request = parse_body::<OhlcvBody>(&body)?.validate()?;
    let adapter = state.market()?;

    tracing::info!(
        ticker = %request.ticker,
        from = %request.from.format_date(),
        to = %request.to.format_date(),
        "ohlcv lookup"
    );
    Ok(Json(adapter.candles(&request).await?))
}
