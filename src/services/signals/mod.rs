//! Technical indicators and the snapshot reported next to a decision.

pub mod indicators;

use serde::{Deserialize, Serialize};

use crate::types::{closes, Candle, Interval};
use indicators::{
    BollingerBands, BollingerOutput, Divergence, DivergenceDetector, Ema, Macd, MacdOutput, Rsi,
    Stochastic, StochasticOutput, VolumeAnalysis, VolumeOutput,
};

/// Clamp a value to the 0-100 score range.
pub fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Indicator readings for one candle sequence, using the periods of the
/// requested timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub ema9: f64,
    pub ema21: f64,
    pub macd: MacdOutput,
    pub bollinger: BollingerOutput,
    pub stochastic: StochasticOutput,
    pub volume: VolumeOutput,
    pub divergence: Divergence,
}

impl IndicatorSnapshot {
    pub fn compute(candles: &[Candle], interval: Interval) -> Self {
        let profile = interval.profile();
        let closes = closes(candles);

        Self {
            rsi: Rsi::new(profile.rsi_period).calculate(&closes),
            ema9: Ema::new(9).calculate(&closes),
            ema21: Ema::new(21).calculate(&closes),
            macd: Macd::from_params(profile.macd).calculate(&closes),
            bollinger: BollingerBands::new(profile.bb_period, 2.0).calculate(&closes),
            stochastic: Stochastic::default().calculate(candles),
            volume: VolumeAnalysis::default().calculate(candles),
            divergence: DivergenceDetector::new(profile.rsi_period).detect(candles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0);
        assert_eq!(clamp_score(55.4), 55);
        assert_eq!(clamp_score(240.0), 100);
    }

    #[test]
    fn test_snapshot_of_empty_history_is_neutral() {
        let snap = IndicatorSnapshot::compute(&[], Interval::FifteenMinutes);
        assert_eq!(snap.rsi, 50.0);
        assert_eq!(snap.ema9, 0.0);
        assert_eq!(snap.macd, MacdOutput::default());
        assert_eq!(snap.stochastic, StochasticOutput::default());
        assert_eq!(snap.volume, VolumeOutput::default());
        assert_eq!(snap.divergence, Divergence::None);
    }
}
