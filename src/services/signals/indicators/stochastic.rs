//! Stochastic Oscillator indicator.

use serde::{Deserialize, Serialize};

use crate::types::Candle;

/// %K and %D at the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticOutput {
    pub k: f64,
    pub d: f64,
}

impl Default for StochasticOutput {
    fn default() -> Self {
        Self { k: 50.0, d: 50.0 }
    }
}

/// Stochastic Oscillator.
///
/// Compares closing price to price range over a period:
/// %K = (Current Close - Lowest Low) / (Highest High - Lowest Low) * 100
///
/// Signals:
/// - Below 20: Oversold
/// - Above 80: Overbought
#[derive(Debug, Clone, Copy)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
        }
    }
}

impl Stochastic {
    pub fn new(k_period: usize, d_period: usize) -> Self {
        Self { k_period, d_period }
    }

    /// Returns 50/50 with fewer than `k_period` candles.
    pub fn calculate(&self, candles: &[Candle]) -> StochasticOutput {
        if self.k_period == 0 || self.d_period == 0 || candles.len() < self.k_period {
            return StochasticOutput::default();
        }

        let k_values: Vec<f64> = candles
            .windows(self.k_period)
            .map(|window| {
                let lowest_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
                let highest_high = window
                    .iter()
                    .map(|c| c.high)
                    .fold(f64::NEG_INFINITY, f64::max);
                let current_close = window[window.len() - 1].close;

                if highest_high != lowest_low {
                    ((current_close - lowest_low) / (highest_high - lowest_low)) * 100.0
                } else {
                    50.0
                }
            })
            .collect();

        let k = k_values.last().copied().unwrap_or(50.0);
        let take = self.d_period.min(k_values.len());
        let d = k_values.iter().rev().take(take).sum::<f64>() / take as f64;

        StochasticOutput { k, d }
    }
}
