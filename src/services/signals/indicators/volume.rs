//! Relative volume analysis.

use serde::{Deserialize, Serialize};

use crate::types::Candle;

/// Volume regime of the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTrend {
    Spike,
    High,
    Low,
    Normal,
}

impl VolumeTrend {
    /// Classify a latest/average volume ratio; first matching threshold wins.
    pub fn classify(ratio: f64) -> Self {
        if ratio > 3.0 {
            VolumeTrend::Spike
        } else if ratio > 1.5 {
            VolumeTrend::High
        } else if ratio < 0.5 {
            VolumeTrend::Low
        } else {
            VolumeTrend::Normal
        }
    }
}

/// Latest volume relative to the trailing average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeOutput {
    pub ratio: f64,
    pub trend: VolumeTrend,
}

impl Default for VolumeOutput {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            trend: VolumeTrend::Normal,
        }
    }
}

/// Compares the latest bar's volume to the trailing `period`-bar average
/// (the window includes the latest bar).
#[derive(Debug, Clone, Copy)]
pub struct VolumeAnalysis {
    period: usize,
}

impl Default for VolumeAnalysis {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl VolumeAnalysis {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Trailing average volume, `None` when history is short.
    pub fn average(&self, candles: &[Candle]) -> Option<f64> {
        if self.period == 0 || candles.len() < self.period {
            return None;
        }
        let window = &candles[candles.len() - self.period..];
        Some(window.iter().map(|c| c.volume).sum::<f64>() / self.period as f64)
    }

    /// Ratio 1.0 / normal when history is short or the average is zero.
    pub fn calculate(&self, candles: &[Candle]) -> VolumeOutput {
        let (avg, current) = match (self.average(candles), candles.last()) {
            (Some(avg), Some(last)) => (avg, last.volume),
            _ => return VolumeOutput::default(),
        };

        let ratio = if avg > 0.0 { current / avg } else { 1.0 };
        VolumeOutput {
            ratio,
            trend: VolumeTrend::classify(ratio),
        }
    }
}
