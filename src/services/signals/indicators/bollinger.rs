//! Bollinger Bands indicator.

use serde::{Deserialize, Serialize};

/// Band levels at the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// Band width as a percentage of the middle band.
    pub width: f64,
}

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(period)
/// - Upper band: SMA + multiplier * StdDev
/// - Lower band: SMA - multiplier * StdDev
#[derive(Debug, Clone, Copy)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period,
            std_dev_multiplier,
        }
    }

    /// Calculate population standard deviation.
    fn std_dev(values: &[f64], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let variance: f64 =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    /// Bands over the trailing window; a flat band at the last close when
    /// history is shorter than the period.
    pub fn calculate(&self, closes: &[f64]) -> BollingerOutput {
        if self.period == 0 || closes.len() < self.period {
            let p = closes.last().copied().unwrap_or(0.0);
            return BollingerOutput {
                upper: p,
                middle: p,
                lower: p,
                width: 0.0,
            };
        }

        let window = &closes[closes.len() - self.period..];
        let middle = window.iter().sum::<f64>() / self.period as f64;
        let spread = Self::std_dev(window, middle) * self.std_dev_multiplier;

        let width = if middle > 0.0 {
            (2.0 * spread) / middle * 100.0
        } else {
            0.0
        };

        BollingerOutput {
            upper: middle + spread,
            middle,
            lower: middle - spread,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_short_history_is_flat() {
        let out = BollingerBands::default().calculate(&[1.0, 2.0, 3.0]);
        assert_eq!(out.upper, 3.0);
        assert_eq!(out.middle, 3.0);
        assert_eq!(out.lower, 3.0);
        assert_eq!(out.width, 0.0);
    }

    #[test]
    fn test_bollinger_known_values() {
        // mean 5, population std dev 2
        let closes = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let out = BollingerBands::new(8, 2.0).calculate(&closes);
        assert!((out.middle - 5.0).abs() < 1e-12);
        assert!((out.upper - 9.0).abs() < 1e-12);
        assert!((out.lower - 1.0).abs() < 1e-12);
        assert!((out.width - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_bollinger_uses_trailing_window() {
        let mut closes = vec![1000.0; 10];
        closes.extend(vec![10.0; 20]);
        let out = BollingerBands::default().calculate(&closes);
        assert!((out.middle - 10.0).abs() < 1e-12);
        assert!(out.width.abs() < 1e-12);
    }
}
