//! Exponential Moving Average (EMA) indicator.

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. Seeded with the SMA of
/// the first `period` values.
#[derive(Debug, Clone, Copy)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// EMA at the end of the series.
    ///
    /// A series shorter than the period yields its last value (0.0 if empty).
    pub fn calculate(&self, values: &[f64]) -> f64 {
        if self.period == 0 || values.len() < self.period {
            return values.last().copied().unwrap_or(0.0);
        }

        let k = self.multiplier();

        // First EMA is SMA
        let mut ema = values.iter().take(self.period).sum::<f64>() / self.period as f64;
        for value in values.iter().skip(self.period) {
            ema = value * k + ema * (1.0 - k);
        }

        ema
    }
}
