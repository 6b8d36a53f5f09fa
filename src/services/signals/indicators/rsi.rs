//! Relative Strength Index (RSI) indicator.

/// RSI value returned when there is not enough history.
pub const NEUTRAL_RSI: f64 = 50.0;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Minimum closes for a real (non-neutral) reading.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Wilder-smoothed RSI of the whole series.
    ///
    /// Returns 50.0 with fewer than `period + 1` closes and 100.0 when the
    /// smoothed average loss is zero.
    pub fn calculate(&self, closes: &[f64]) -> f64 {
        let period = self.period;
        if period == 0 || closes.len() < period + 1 {
            return NEUTRAL_RSI;
        }

        let mut gains = 0.0;
        let mut losses = 0.0;
        for i in 1..=period {
            let change = closes[i] - closes[i - 1];
            if change > 0.0 {
                gains += change;
            } else {
                losses -= change;
            }
        }

        let mut avg_gain = gains / period as f64;
        let mut avg_loss = losses / period as f64;
        let smoothing = (period - 1) as f64;

        for i in (period + 1)..closes.len() {
            let change = closes[i] - closes[i - 1];
            let (gain, loss) = if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            };
            avg_gain = (avg_gain * smoothing + gain) / period as f64;
            avg_loss = (avg_loss * smoothing + loss) / period as f64;
        }

        if avg_loss == 0.0 {
            return 100.0;
        }

        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}
