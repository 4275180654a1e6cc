//! # Domain Models
//!
//! Response shapes served by tickerbridge and the UTC time type used to move
//! between calendar dates and provider epoch seconds.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FilingResult`] | Filing record mapped from the filings provider |
//! | [`OhlcvBar`] | Daily OHLCV row zipped from candle arrays |
//! | [`NewsItem`] | Company news headline |
//! | [`UtcDateTime`] | UTC instant with date/ISO-8601 rendering |
//!
//! Every value is built per request and dropped once the response is sent.

mod models;
mod timestamp;

pub use models::{FilingResult, NewsItem, OhlcvBar};
pub use timestamp::UtcDateTime;
