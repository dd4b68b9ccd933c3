// Std library crates
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

// External crates
use anyhow::Result;
use async_trait::async_trait;
use binance_sdk::config::ConfigurationRestApi;
use binance_sdk::errors::ConnectorError;
use binance_sdk::spot::{
    SpotRestApi,
    rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
};

// Local crates
use crate::config::binance::BinanceApiConfig;
use crate::data::FetchCandles;
use crate::domain::Interval;

/// One kline row as fetched, before series assembly. Only the open time is
/// mandatory; price and volume cells the exchange sent in an unparsable form
/// are carried as None rather than failing the whole response.
#[derive(Debug, Clone, PartialEq)]
pub struct RawKline {
    pub open_timestamp_ms: i64,
    pub open_price: Option<f64>,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    pub close_price: Option<f64>,
    pub base_asset_volume: Option<f64>,
}

impl RawKline {
    /// True when any price field failed to parse (the row is a gap for the
    /// indicator passes).
    pub fn has_gap(&self) -> bool {
        self.open_price.is_none()
            || self.high_price.is_none()
            || self.low_price.is_none()
            || self.close_price.is_none()
    }
}

// Custom error type for kline handling, for better error messages.
#[derive(Debug)]
pub enum RawKlineError {
    InvalidLength,
    InvalidType(String),
    ConnectionFailed(String),
}

impl fmt::Display for RawKlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RawKlineError::InvalidLength => write!(f, "Invalid length"),
            RawKlineError::InvalidType(string) => write!(f, "Invalid type: {}", string),
            RawKlineError::ConnectionFailed(msg) => {
                write!(f, "Binance API connection failed: {}.", msg)
            }
        }
    }
}

impl Error for RawKlineError {}

/// Extract a float from the SDK's heterogeneous cell type. Some(f64) only
/// when the cell was the String variant and parsed cleanly; any other
/// variant or an unparsable string becomes None.
fn convert_kline_item_inner_string_to_float(cell: Option<KlinesItemInner>) -> Option<f64> {
    cell.and_then(|inner| {
        if let KlinesItemInner::String(s) = inner {
            s.parse::<f64>().ok()
        } else {
            None
        }
    })
}

// Implement the conversion using the iterator pattern.
impl TryFrom<Vec<KlinesItemInner>> for RawKline {
    type Error = RawKlineError;

    fn try_from(cells: Vec<KlinesItemInner>) -> Result<Self, Self::Error> {
        // Binance kline rows are 12-ary; we consume the first six cells and
        // ignore the trailer fields
        debug_assert_eq!(12, cells.len());

        let mut items = cells.into_iter();
        let open_timestamp_ms = match items.next().ok_or(RawKlineError::InvalidLength)? {
            KlinesItemInner::Integer(a) => a,
            _ => return Err(RawKlineError::InvalidType("open_time".to_string())),
        };

        let open_price = convert_kline_item_inner_string_to_float(items.next());
        let high_price = convert_kline_item_inner_string_to_float(items.next());
        let low_price = convert_kline_item_inner_string_to_float(items.next());
        let close_price = convert_kline_item_inner_string_to_float(items.next());
        let base_asset_volume = convert_kline_item_inner_string_to_float(items.next());

        Ok(RawKline {
            open_timestamp_ms,
            open_price,
            high_price,
            low_price,
            close_price,
            base_asset_volume,
        })
    }
}

fn convert_klines(data: Vec<Vec<KlinesItemInner>>) -> Result<Vec<RawKline>, RawKlineError> {
    data.into_iter().map(Vec::try_into).collect()
}

async fn configure_binance_client() -> Result<RestApi, anyhow::Error> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    // Create the Spot REST API client
    let rest_client = SpotRestApi::production(rest_conf);
    Ok(rest_client)
}

fn to_sdk_interval(interval: Interval) -> KlinesIntervalEnum {
    match interval {
        Interval::Minute1 => KlinesIntervalEnum::Interval1m,
        Interval::Minute15 => KlinesIntervalEnum::Interval15m,
        Interval::Hour1 => KlinesIntervalEnum::Interval1h,
        Interval::Hour4 => KlinesIntervalEnum::Interval4h,
        Interval::Day1 => KlinesIntervalEnum::Interval1d,
    }
}

/// Log what went wrong at the transport level and wrap it for the caller.
/// Failures here are expected operating conditions (flaky networks, rate
/// limits); the pipeline degrades them to a retryable "not ready" outcome.
fn describe_connector_error(e: anyhow::Error, symbol: &str) -> anyhow::Error {
    if let Some(conn_err) = e.downcast_ref::<ConnectorError>() {
        match conn_err {
            ConnectorError::ConnectorClientError(msg) => {
                log::error!("{} Client error: Check the request parameters. {}", symbol, msg);
            }
            ConnectorError::TooManyRequestsError(msg) => {
                log::error!("{} Rate limit exceeded. Please wait and try again. {}", symbol, msg);
            }
            ConnectorError::RateLimitBanError(msg) => {
                log::error!("{} IP address banned due to excessive rate limits. {}", symbol, msg);
            }
            ConnectorError::ServerError { msg, status_code } => {
                log::error!("{} Server error: {} (status code: {:?})", symbol, msg, status_code);
            }
            ConnectorError::NetworkError(msg) => {
                log::error!("{} Network error: Check your internet connection. {}", symbol, msg);
            }
            ConnectorError::NotFoundError(msg) => {
                log::error!("{} Resource not found. {}", symbol, msg);
            }
            ConnectorError::BadRequestError(msg) => {
                log::error!("{} Bad request: Verify the input parameters. {}", symbol, msg);
            }
            other => {
                log::error!("{} Unexpected connector error: {:?}", symbol, other);
            }
        }
        anyhow::Error::new(RawKlineError::ConnectionFailed(conn_err.to_string()))
            .context(format!("Binance API call failed for {}", symbol))
    } else {
        log::error!("An unexpected error occurred for {}: {:#}", symbol, e);
        anyhow::Error::new(RawKlineError::ConnectionFailed(e.to_string()))
            .context(format!("Unexpected error during API call for {}", symbol))
    }
}

/// The production candle source: one GET against the spot klines endpoint.
pub struct BinanceKlineSource;

#[async_trait]
impl FetchCandles for BinanceKlineSource {
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: Interval,
        limit: i32,
    ) -> Result<Vec<RawKline>> {
        let rest_client = configure_binance_client().await?;

        let params = KlinesParams::builder(symbol.to_string(), to_sdk_interval(interval))
            .limit(limit)
            .build()?;

        // Make the call. Exactly one request: the client is configured with
        // zero retries and a hard timeout, and refresh is user-driven.
        let response = match rest_client.klines(params).await {
            Ok(response) => response,
            Err(e) => return Err(describe_connector_error(e, symbol)),
        };

        let rows = response.data().await?;
        let klines = convert_klines(rows).map_err(|e| {
            anyhow::Error::new(e).context(format!("{} kline row conversion failed", symbol))
        })?;

        #[cfg(debug_assertions)]
        log::info!("{} fetched {} klines ({})", symbol, klines.len(), interval);

        Ok(klines)
    }

    fn signature(&self) -> &'static str {
        "binance-spot-rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(open_time: i64, ohlcv: [&str; 5]) -> Vec<KlinesItemInner> {
        let mut cells = vec![KlinesItemInner::Integer(open_time)];
        cells.extend(ohlcv.iter().map(|s| KlinesItemInner::String(s.to_string())));
        // Trailer: close time + six ignored fields
        cells.push(KlinesItemInner::Integer(open_time + 1));
        for _ in 0..5 {
            cells.push(KlinesItemInner::String("0".to_string()));
        }
        cells
    }

    #[test]
    fn test_row_converts_with_all_fields_parsed() {
        let kline =
            RawKline::try_from(row(1_000, ["1.0", "2.0", "0.5", "1.5", "10.0"])).expect("valid row");
        assert_eq!(kline.open_timestamp_ms, 1_000);
        assert_eq!(kline.open_price, Some(1.0));
        assert_eq!(kline.high_price, Some(2.0));
        assert_eq!(kline.low_price, Some(0.5));
        assert_eq!(kline.close_price, Some(1.5));
        assert_eq!(kline.base_asset_volume, Some(10.0));
        assert!(!kline.has_gap());
    }

    #[test]
    fn test_unparsable_price_becomes_a_gap_not_an_error() {
        let kline = RawKline::try_from(row(1_000, ["1.0", "2.0", "0.5", "garbage", "10.0"]))
            .expect("row still converts");
        assert_eq!(kline.close_price, None);
        assert!(kline.has_gap());
    }

    #[test]
    fn test_non_string_price_cell_becomes_a_gap() {
        let mut cells = row(1_000, ["1.0", "2.0", "0.5", "1.5", "10.0"]);
        cells[4] = KlinesItemInner::Integer(7); // close cell with the wrong variant
        let kline = RawKline::try_from(cells).expect("row still converts");
        assert_eq!(kline.close_price, None);
    }

    #[test]
    fn test_non_integer_open_time_is_rejected() {
        let mut cells = row(1_000, ["1.0", "2.0", "0.5", "1.5", "10.0"]);
        cells[0] = KlinesItemInner::String("not-a-time".to_string());
        let err = RawKline::try_from(cells).expect_err("open time is mandatory");
        assert!(matches!(err, RawKlineError::InvalidType(field) if field == "open_time"));
    }

    #[test]
    fn test_convert_klines_keeps_row_order() {
        let rows = vec![
            row(1_000, ["1.0", "2.0", "0.5", "1.5", "10.0"]),
            row(2_000, ["1.5", "2.5", "1.0", "2.0", "11.0"]),
        ];
        let klines = convert_klines(rows).expect("both rows valid");
        assert_eq!(klines.len(), 2);
        assert_eq!(klines[0].open_timestamp_ms, 1_000);
        assert_eq!(klines[1].open_timestamp_ms, 2_000);
    }

    #[test]
    fn test_every_supported_interval_maps_to_an_sdk_interval() {
        assert!(matches!(to_sdk_interval(Interval::Minute1), KlinesIntervalEnum::Interval1m));
        assert!(matches!(to_sdk_interval(Interval::Minute15), KlinesIntervalEnum::Interval15m));
        assert!(matches!(to_sdk_interval(Interval::Hour1), KlinesIntervalEnum::Interval1h));
        assert!(matches!(to_sdk_interval(Interval::Hour4), KlinesIntervalEnum::Interval4h));
        assert!(matches!(to_sdk_interval(Interval::Day1), KlinesIntervalEnum::Interval1d));
    }
}
