//! Simple Moving Average (SMA) indicator.

/// SMA (Simple Moving Average) indicator.
///
/// Calculates the average of the trailing `period` values.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// SMA of the trailing window; falls back to the last value (or 0.0).
    pub fn calculate(&self, values: &[f64]) -> f64 {
        if self.period == 0 || values.len() < self.period {
            return values.last().copied().unwrap_or(0.0);
        }

        values.iter().rev().take(self.period).sum::<f64>() / self.period as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_trailing_window() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((Sma::new(2).calculate(&values) - 4.5).abs() < 1e-12);
        assert!((Sma::new(5).calculate(&values) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sma_short_series_returns_last() {
        assert_eq!(Sma::new(20).calculate(&[7.0, 8.0]), 8.0);
        assert_eq!(Sma::new(20).calculate(&[]), 0.0);
    }
}
