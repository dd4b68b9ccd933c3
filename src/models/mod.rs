// Pipeline models: the candle series, its derived indicator columns, and the
// snapshot handed to the presentation side. Pure data, no I/O.

pub mod indicators;
pub mod series;
pub mod snapshot;

// Re-export key types for convenience
pub use indicators::IndicatorSet;
pub use series::CandleSeries;
pub use snapshot::{MarketSnapshot, SignalState};
