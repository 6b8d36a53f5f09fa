//! EMA trend alignment bot.

use super::ScoringBot;
use crate::services::signals::indicators::Ema;
use crate::types::{closes, AnalysisContext, Direction, SignalLight, Verdict};

const MIN_CANDLES: usize = 21;

/// Scores how well the current price and the EMA9/21/50 stack line up with
/// the proposed direction. Each aligned condition adds a fixed amount.
pub struct TrendBot;

impl ScoringBot for TrendBot {
    fn name(&self) -> &str {
        "Trend"
    }

    fn weight(&self) -> f64 {
        1.5
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        if ctx.candles.len() < MIN_CANDLES {
            return None;
        }

        let closes = closes(ctx.candles);
        let price = ctx.current_price;
        let ema9 = Ema::new(9).calculate(&closes);
        let ema21 = Ema::new(21).calculate(&closes);
        let ema50 = if closes.len() >= 50 {
            Ema::new(50).calculate(&closes)
        } else {
            ema21
        };

        let checks: [(bool, u8, &str); 4] = match ctx.direction {
            Direction::Long => [
                (ema9 > ema21, 35, "EMA9 > EMA21"),
                (price > ema9, 25, "Price > EMA9"),
                (price > ema21, 20, "Price > EMA21"),
                (ema21 > ema50, 20, "Macro uptrend"),
            ],
            Direction::Short => [
                (ema9 < ema21, 35, "EMA9 < EMA21"),
                (price < ema9, 25, "Price < EMA9"),
                (price < ema21, 20, "Price < EMA21"),
                (ema21 < ema50, 20, "Macro downtrend"),
            ],
        };

        let mut score = 0u8;
        let mut reasons = Vec::new();
        for (passed, points, reason) in checks {
            if passed {
                score += points;
                reasons.push(reason.to_string());
            }
        }
        if reasons.is_empty() {
            reasons.push("No trend signal".to_string());
        }

        let signal = SignalLight::from_score(score, 70, 40);
        Some(Verdict::new(self.name(), signal, score, self.weight()).with_reasons(reasons))
    }
}
