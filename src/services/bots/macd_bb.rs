//! MACD + Bollinger Bands bot.

use super::ScoringBot;
use crate::services::signals::indicators::{BollingerBands, Macd};
use crate::types::{closes, AnalysisContext, Direction, SignalLight, Verdict};

/// Band-width percentage above which a high-volatility note is added.
const WIDE_BAND_PCT: f64 = 3.0;

/// Combines MACD momentum with the close's position inside the Bollinger
/// envelope. Periods come from the timeframe profile.
pub struct MacdBollingerBot;

impl MacdBollingerBot {
    pub fn min_candles(ctx: &AnalysisContext<'_>) -> usize {
        let profile = ctx.interval.profile();
        profile.bb_period.max(profile.macd.slow + profile.macd.signal) + 5
    }
}

impl ScoringBot for MacdBollingerBot {
    fn name(&self) -> &str {
        "MACD+BB"
    }

    fn weight(&self) -> f64 {
        1.5
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        if ctx.candles.len() < Self::min_candles(ctx) {
            return None;
        }

        let profile = ctx.interval.profile();
        let closes = closes(ctx.candles);
        let price = *closes.last()?;
        let macd = Macd::from_params(profile.macd).calculate(&closes);
        let bb = BollingerBands::new(profile.bb_period, 2.0).calculate(&closes);

        let mut score = 0u8;
        let mut reasons = Vec::new();
        let mut add = |points: u8, reason: &str| {
            score += points;
            reasons.push(reason.to_string());
        };

        match ctx.direction {
            Direction::Long => {
                if macd.histogram > 0.0 {
                    add(35, "MACD positive");
                }
                if macd.macd > macd.signal {
                    add(25, "MACD > signal");
                }
                if price <= bb.lower * 1.01 {
                    add(25, "Price at lower BB");
                } else if price < bb.middle {
                    add(15, "Price below BB middle");
                }
            }
            Direction::Short => {
                if macd.histogram < 0.0 {
                    add(35, "MACD negative");
                }
                if macd.macd < macd.signal {
                    add(25, "MACD < signal");
                }
                if price >= bb.upper * 0.99 {
                    add(25, "Price at upper BB");
                } else if price > bb.middle {
                    add(15, "Price above BB middle");
                }
            }
        }

        if bb.width > WIDE_BAND_PCT {
            reasons.push(format!("Wide BB ({:.1}%) - high volatility", bb.width));
        }
        if reasons.is_empty() {
            reasons.push("No clear signal".to_string());
        }

        let score = score.min(100);
        let signal = SignalLight::from_score(score, 60, 30);
        Some(Verdict::new(self.name(), signal, score, self.weight()).with_reasons(reasons))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::{Candle, Interval};

    #[test]
    fn test_min_candles_per_interval() {
        let ctx = context("ETH", Direction::Long, &[]);
        assert_eq!(MacdBollingerBot::min_candles(&ctx), 40);

        let mut ctx = context("ETH", Direction::Long, &[]);
        ctx.interval = Interval::OneMinute;
        assert_eq!(MacdBollingerBot::min_candles(&ctx), 23);
    }

    #[test]
    fn test_abstains_on_short_history() {
        let candles = uptrend(39);
        let ctx = context("ETH", Direction::Long, &candles);
        assert!(MacdBollingerBot.evaluate(&ctx).is_none());
    }

    #[test]
    fn test_uptrend_long_has_momentum_points() {
        let candles = uptrend(80);
        let v = MacdBollingerBot
            .evaluate(&context("ETH", Direction::Long, &candles))
            .unwrap();
        // Price rides the upper band so only the MACD legs score
        assert_eq!(v.score, 60);
        assert_eq!(v.signal, SignalLight::Green);
    }

    #[test]
    fn test_flat_market_short_is_red() {
        let candles = vec![Candle::new(100.0, 100.5, 99.5, 100.0, 1000.0); 60];
        let v = MacdBollingerBot
            .evaluate(&context("ETH", Direction::Short, &candles))
            .unwrap();
        // Zero-width band: close sits on the upper band (100 >= 99)
        assert_eq!(v.score, 25);
        assert_eq!(v.signal, SignalLight::Red);
    }
}
