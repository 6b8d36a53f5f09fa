//! MACD (Moving Average Convergence Divergence) indicator.

use serde::{Deserialize, Serialize};

use crate::types::MacdParams;

/// MACD line, signal line and histogram at the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(fast) - EMA(slow)
/// - Signal Line = EMA(signal) of MACD Line
/// - Histogram = MACD Line - Signal Line
#[derive(Debug, Clone, Copy, Default)]
pub struct Macd {
    params: MacdParams,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self {
            params: MacdParams::new(fast, slow, signal),
        }
    }

    pub fn from_params(params: MacdParams) -> Self {
        Self { params }
    }

    /// Minimum closes for a non-zero result.
    pub fn min_periods(&self) -> usize {
        self.params.slow + self.params.signal
    }

    /// Both EMAs are seeded with their own SMA and advanced together from
    /// the `slow`-th close, so the MACD series starts where the slow EMA does.
    fn macd_series(&self, closes: &[f64]) -> Vec<f64> {
        let MacdParams { fast, slow, .. } = self.params;
        let k_fast = 2.0 / (fast as f64 + 1.0);
        let k_slow = 2.0 / (slow as f64 + 1.0);

        let mut ema_fast = closes.iter().take(fast).sum::<f64>() / fast as f64;
        let mut ema_slow = closes.iter().take(slow).sum::<f64>() / slow as f64;

        closes
            .iter()
            .skip(slow)
            .map(|close| {
                ema_fast = close * k_fast + ema_fast * (1.0 - k_fast);
                ema_slow = close * k_slow + ema_slow * (1.0 - k_slow);
                ema_fast - ema_slow
            })
            .collect()
    }

    /// All-zero output with fewer than `slow + signal` closes.
    pub fn calculate(&self, closes: &[f64]) -> MacdOutput {
        let MacdParams { fast, slow, signal } = self.params;
        if fast == 0 || slow == 0 || signal == 0 || closes.len() < self.min_periods() {
            return MacdOutput::default();
        }

        let series = self.macd_series(closes);
        let macd = match series.last() {
            Some(v) => *v,
            None => return MacdOutput::default(),
        };
        if series.len() < signal {
            return MacdOutput {
                macd,
                ..MacdOutput::default()
            };
        }

        let k_sig = 2.0 / (signal as f64 + 1.0);
        let mut signal_line = series.iter().take(signal).sum::<f64>() / signal as f64;
        for value in series.iter().skip(signal) {
            signal_line = value * k_sig + signal_line * (1.0 - k_sig);
        }

        MacdOutput {
            macd,
            signal: signal_line,
            histogram: macd - signal_line,
        }
    }
}
