use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The instruments the pipeline supports, in display order.
/// Labels are the dashed USD-quoted form shown to the user; the exchange
/// trades the USDT-settled pair, so the canonical symbol is derived by
/// stripping the separator and swapping the quote token.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Instrument {
    #[default]
    Btc,
    Eth,
    Sol,
    Bnb,
    Xrp,
    Doge,
    Shib,
}

impl Instrument {
    /// The user-facing label, e.g. "BTC-USD".
    pub fn label(&self) -> &'static str {
        match self {
            Instrument::Btc => "BTC-USD",
            Instrument::Eth => "ETH-USD",
            Instrument::Sol => "SOL-USD",
            Instrument::Bnb => "BNB-USD",
            Instrument::Xrp => "XRP-USD",
            Instrument::Doge => "DOGE-USD",
            Instrument::Shib => "SHIB-USD",
        }
    }

    /// Look up an instrument by its display label. Total over the supported
    /// set; anything else is None (the caller reports it as invalid).
    pub fn from_label(label: &str) -> Option<Self> {
        Instrument::iter().find(|instrument| instrument.label() == label)
    }

    /// The symbol the exchange API expects: separator stripped, USD quote
    /// mapped to the USDT-settled pair (e.g. "BTC-USD" -> "BTCUSDT").
    pub fn canonical_symbol(&self) -> String {
        let compact = self.label().replace('-', "");
        match compact.strip_suffix("USD") {
            Some(base) => format!("{base}USDT"),
            None => compact,
        }
    }

    /// All supported labels, comma-separated (for error messages and help text).
    pub fn supported_labels() -> String {
        Instrument::iter()
            .map(|instrument| instrument.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_label_round_trips() {
        for instrument in Instrument::iter() {
            assert_eq!(
                Instrument::from_label(instrument.label()),
                Some(instrument),
                "label {} should map back to its instrument",
                instrument.label()
            );
        }
    }

    #[test]
    fn test_canonical_symbol_strips_separator_and_swaps_quote() {
        assert_eq!(Instrument::Btc.canonical_symbol(), "BTCUSDT");
        assert_eq!(Instrument::Doge.canonical_symbol(), "DOGEUSDT");
        assert_eq!(Instrument::Shib.canonical_symbol(), "SHIBUSDT");
    }

    #[test]
    fn test_unsupported_labels_are_rejected() {
        assert_eq!(Instrument::from_label("ADA-USD"), None);
        assert_eq!(Instrument::from_label("btc-usd"), None, "labels are case-sensitive");
        assert_eq!(Instrument::from_label("BTCUSDT"), None, "canonical form is not a label");
        assert_eq!(Instrument::from_label(""), None);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        // Same label in, same symbol out, every time
        let first = Instrument::from_label("ETH-USD").map(|i| i.canonical_symbol());
        let second = Instrument::from_label("ETH-USD").map(|i| i.canonical_symbol());
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("ETHUSDT"));
    }
}
