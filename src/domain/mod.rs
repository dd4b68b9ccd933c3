// Domain types and value objects
pub mod candle;
pub mod instrument;
pub mod interval;
pub mod signal;

// Re-export commonly used types
pub use candle::Candle;
pub use instrument::Instrument;
pub use interval::Interval;
pub use signal::{MomentumSignal, TrendSignal};
