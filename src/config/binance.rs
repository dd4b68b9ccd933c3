//! Binance-specific configuration constants and types.

/// Configuration for Binance REST API client
/// (This is the runtime struct used by the Http Client)
pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
        }
    }
}

/// Configuration for REST API Limits
pub struct RestLimits {
    /// Default number of klines requested in a single call
    pub default_klines_limit: i32,
    /// Hard cap on klines per call; larger requests are clamped to this
    pub klines_limit_cap: i32,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Configuration Struct
pub struct BinanceConfig {
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    limits: RestLimits {
        default_klines_limit: 100,
        klines_limit_cap: 100,
    },
    client: ClientDefaults {
        // A stalled endpoint must not hang a run; on timeout the call
        // degrades to a "not ready" result
        timeout_ms: 5000,
        // Zero client-level retries: a failed fetch is reported as not ready
        // and retried only when the user re-runs
        retries: 0,
        backoff_ms: 0,
    },
};
