//! RSI vs price divergence.

use serde::{Deserialize, Serialize};

use super::Rsi;
use crate::types::{closes, Candle};

/// Bars compared for the price and RSI trends.
const LOOKBACK: usize = 5;
/// Minimum RSI move (points) against price to call a divergence.
const RSI_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Divergence {
    Bullish,
    Bearish,
    #[default]
    None,
}

/// Compares the price trend over the last 5 bars with the RSI trend over
/// the same bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivergenceDetector {
    rsi: Rsi,
}

impl DivergenceDetector {
    pub fn new(rsi_period: usize) -> Self {
        Self {
            rsi: Rsi::new(rsi_period),
        }
    }

    pub fn min_periods(&self) -> usize {
        self.rsi.period() + LOOKBACK
    }

    /// Bearish when price rises while RSI drops more than 3 points, bullish
    /// on the mirror image.
    pub fn detect(&self, candles: &[Candle]) -> Divergence {
        if candles.len() < self.min_periods() {
            return Divergence::None;
        }

        let closes = closes(candles);
        let n = closes.len();
        let first_rsi = self.rsi.calculate(&closes[..n - LOOKBACK + 1]);
        let last_rsi = self.rsi.calculate(&closes);

        let price_trend = closes[n - 1] - closes[n - LOOKBACK];
        let rsi_trend = last_rsi - first_rsi;

        if price_trend > 0.0 && rsi_trend < -RSI_THRESHOLD {
            Divergence::Bearish
        } else if price_trend < 0.0 && rsi_trend > RSI_THRESHOLD {
            Divergence::Bullish
        } else {
            Divergence::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .map(|c| Candle::new(*c, c + 1.0, c - 1.0, *c, 1000.0))
            .collect()
    }

    #[test]
    fn test_divergence_short_history() {
        let candles = from_closes(&[100.0; 18]);
        assert_eq!(DivergenceDetector::default().detect(&candles), Divergence::None);
    }

    #[test]
    fn test_steady_uptrend_has_no_divergence() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        assert_eq!(
            DivergenceDetector::default().detect(&from_closes(&closes)),
            Divergence::None
        );
    }

    #[test]
    fn test_bearish_divergence_on_fading_rally() {
        // Unbroken rally, then a sharp dip and a recovery to a marginal new high
        let mut closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 2.0).collect();
        closes.extend([160.0, 150.0, 152.0, 155.0, 161.0]);
        let candles = from_closes(&closes);
        // price: 161 > 160, RSI falls from 100 to roughly 80
        assert_eq!(DivergenceDetector::default().detect(&candles), Divergence::Bearish);
    }

    #[test]
    fn test_bullish_divergence_on_fading_selloff() {
        let mut closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64 * 2.0).collect();
        closes.extend([140.0, 150.0, 148.0, 145.0, 139.0]);
        let candles = from_closes(&closes);
        assert_eq!(DivergenceDetector::default().detect(&candles), Divergence::Bullish);
    }
}
