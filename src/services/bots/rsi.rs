//! RSI zone bot.

use super::ScoringBot;
use crate::services::signals::indicators::Rsi;
use crate::types::{closes, AnalysisContext, Direction, SignalLight, Verdict};

/// Grades the RSI zone for the proposed direction using the timeframe's
/// RSI period. Extreme readings against the trade are a critical RED.
pub struct RsiBot;

impl RsiBot {
    /// (signal, score, description) for an RSI reading.
    pub fn classify(rsi: f64, direction: Direction) -> (SignalLight, u8, &'static str) {
        match direction {
            Direction::Long => {
                if rsi > 80.0 {
                    (SignalLight::Red, 0, "extreme overbought")
                } else if rsi > 70.0 {
                    (SignalLight::Yellow, 30, "overbought")
                } else if rsi < 25.0 {
                    (SignalLight::Green, 100, "strong oversold - bounce likely")
                } else if rsi < 35.0 {
                    (SignalLight::Green, 90, "low zone - favorable")
                } else if rsi < 55.0 {
                    (SignalLight::Green, 80, "neutral-low")
                } else {
                    (SignalLight::Yellow, 55, "neutral-high")
                }
            }
            Direction::Short => {
                if rsi < 20.0 {
                    (SignalLight::Red, 0, "extreme oversold")
                } else if rsi < 30.0 {
                    (SignalLight::Yellow, 30, "oversold")
                } else if rsi > 75.0 {
                    (SignalLight::Green, 100, "strong overbought - drop likely")
                } else if rsi > 65.0 {
                    (SignalLight::Green, 90, "high zone - favorable")
                } else if rsi > 45.0 {
                    (SignalLight::Green, 80, "neutral-high")
                } else {
                    (SignalLight::Yellow, 55, "neutral-low")
                }
            }
        }
    }
}

impl ScoringBot for RsiBot {
    fn name(&self) -> &str {
        "RSI"
    }

    fn weight(&self) -> f64 {
        2.0
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let rsi = Rsi::new(ctx.interval.profile().rsi_period);
        if ctx.candles.len() < rsi.min_periods() {
            return None;
        }

        let value = rsi.calculate(&closes(ctx.candles));
        let (signal, score, description) = Self::classify(value, ctx.direction);

        Some(
            Verdict::new(self.name(), signal, score, self.weight())
                .critical()
                .reason(format!("RSI {} ({:.0})", description, value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::Interval;

    #[test]
    fn test_rsi_bot_abstains_on_short_history() {
        let candles = uptrend(14);
        assert!(RsiBot.evaluate(&context("ETH", Direction::Long, &candles)).is_none());
    }

    #[test]
    fn test_rsi_bot_period_follows_interval() {
        let candles = uptrend(8);
        let mut ctx = context("ETH", Direction::Long, &candles);
        ctx.interval = Interval::OneMinute;
        assert!(RsiBot.evaluate(&ctx).is_some());
    }

    #[test]
    fn test_long_table() {
        let long = |rsi| RsiBot::classify(rsi, Direction::Long);
        assert_eq!((long(81.0).0, long(81.0).1), (SignalLight::Red, 0));
        assert_eq!((long(80.0).0, long(80.0).1), (SignalLight::Yellow, 30));
        assert_eq!((long(24.9).0, long(24.9).1), (SignalLight::Green, 100));
        assert_eq!((long(25.0).0, long(25.0).1), (SignalLight::Green, 90));
        assert_eq!((long(35.0).0, long(35.0).1), (SignalLight::Green, 80));
        assert_eq!((long(55.0).0, long(55.0).1), (SignalLight::Yellow, 55));
    }

    #[test]
    fn test_short_table() {
        let short = |rsi| RsiBot::classify(rsi, Direction::Short);
        assert_eq!((short(19.0).0, short(19.0).1), (SignalLight::Red, 0));
        assert_eq!((short(20.0).0, short(20.0).1), (SignalLight::Yellow, 30));
        assert_eq!((short(76.0).0, short(76.0).1), (SignalLight::Green, 100));
        assert_eq!((short(75.0).0, short(75.0).1), (SignalLight::Green, 90));
        assert_eq!((short(65.0).0, short(65.0).1), (SignalLight::Green, 80));
        assert_eq!((short(45.0).0, short(45.0).1), (SignalLight::Yellow, 55));
    }

    #[test]
    fn test_uptrend_long_is_critical_red() {
        // Pure gains put RSI at 100
        let candles = uptrend(40);
        let v = RsiBot.evaluate(&context("ETH", Direction::Long, &candles)).unwrap();
        assert_eq!(v.signal, SignalLight::Red);
        assert_eq!(v.score, 0);
        assert!(v.is_critical_red());
    }
}
