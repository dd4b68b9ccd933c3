// Define the CandleType enum
#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

// Define the Candle struct with all its properties
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open_timestamp_ms: i64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub base_volume: f64,
}

// Implement methods for the Candle struct
impl Candle {
    // A constructor for convenience
    pub fn new(
        open_timestamp_ms: i64,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        base_volume: f64,
    ) -> Self {
        Candle {
            open_timestamp_ms,
            open_price,
            high_price,
            low_price,
            close_price,
            base_volume,
        }
    }

    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_type_from_open_close() {
        let up = Candle::new(0, 100.0, 110.0, 99.0, 105.0, 1.0);
        let down = Candle::new(0, 100.0, 101.0, 90.0, 95.0, 1.0);
        assert_eq!(up.get_type(), CandleType::Bullish);
        assert_eq!(down.get_type(), CandleType::Bearish);
    }
}
