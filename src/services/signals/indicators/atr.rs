//! Average True Range (ATR) indicator.

use crate::types::Candle;

/// ATR (Average True Range) indicator.
///
/// Measures market volatility by calculating the average of true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
///
/// Higher ATR = higher volatility
/// Lower ATR = lower volatility
#[derive(Debug, Clone, Copy)]
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate True Range.
    pub fn true_range(current: &Candle, previous: &Candle) -> f64 {
        let hl = current.high - current.low;
        let hc = (current.high - previous.close).abs();
        let lc = (current.low - previous.close).abs();
        hl.max(hc).max(lc)
    }

    /// Wilder-smoothed ATR in price units.
    ///
    /// With fewer than `period + 1` candles this falls back to the mean
    /// high-low range of the trailing window, and to 0.0 below two candles.
    pub fn calculate(&self, candles: &[Candle]) -> f64 {
        if self.period == 0 || candles.len() < 2 {
            return 0.0;
        }

        if candles.len() < self.period + 1 {
            let window = candles.len().min(self.period);
            let ranges = &candles[candles.len() - window..];
            return ranges.iter().map(|c| c.high - c.low).sum::<f64>() / window as f64;
        }

        let true_ranges: Vec<f64> = candles
            .windows(2)
            .map(|pair| Self::true_range(&pair[1], &pair[0]))
            .collect();

        // Calculate ATR using Wilder's smoothing
        let mut atr = true_ranges.iter().take(self.period).sum::<f64>() / self.period as f64;
        for tr in true_ranges.iter().skip(self.period) {
            atr = (atr * (self.period - 1) as f64 + tr) / self.period as f64;
        }

        atr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_uptrend_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 1.5;
                Candle::new(base, base + 2.0, base - 1.0, base + 1.0, 1000.0)
            })
            .collect()
    }

    #[test]
    fn test_atr_under_two_candles_is_zero() {
        let atr = Atr::default();
        assert_eq!(atr.calculate(&[]), 0.0);
        assert_eq!(atr.calculate(&create_uptrend_candles(1)), 0.0);
    }

    #[test]
    fn test_atr_short_history_uses_mean_range() {
        let atr = Atr::default();
        // Every candle spans 3.0 high-to-low
        let value = atr.calculate(&create_uptrend_candles(5));
        assert!((value - 3.0).abs() < 1e-12, "got {}", value);
    }

    #[test]
    fn test_true_range_uses_gap() {
        let prev = Candle::new(10.0, 11.0, 9.0, 10.0, 1.0);
        let gap_up = Candle::new(15.0, 16.0, 14.0, 15.0, 1.0);
        assert_eq!(Atr::true_range(&gap_up, &prev), 6.0);
    }

    #[test]
    fn test_atr_positive_value() {
        let value = Atr::default().calculate(&create_uptrend_candles(30));
        // Each bar: H-L = 3, |H - prevC| = 2.5, so TR = 3
        assert!((value - 3.0).abs() < 1e-9, "got {}", value);
    }
}
