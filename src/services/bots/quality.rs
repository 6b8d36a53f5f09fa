//! Liquidity tier bot.

use super::ScoringBot;
use crate::types::{AnalysisContext, SignalLight, Verdict};

/// Deep, liquid majors.
pub const GRADE_A: &[&str] = &[
    "BTC", "ETH", "BNB", "SOL", "XRP", "ADA", "DOGE", "AVAX", "DOT", "LINK", "POL", "LTC",
];

/// Established alts with moderate liquidity.
pub const GRADE_B: &[&str] = &[
    "ARB", "OP", "INJ", "SUI", "APT", "SEI", "TIA", "JUP", "WLD", "FET", "NEAR", "FIL", "ATOM",
    "UNI", "AAVE",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    A,
    B,
    C,
}

impl QualityTier {
    pub fn of(symbol: &str) -> Self {
        let symbol = symbol.to_uppercase();
        if GRADE_A.contains(&symbol.as_str()) {
            QualityTier::A
        } else if GRADE_B.contains(&symbol.as_str()) {
            QualityTier::B
        } else {
            QualityTier::C
        }
    }
}

/// Grades the symbol by its curated liquidity tier.
pub struct QualityBot;

impl ScoringBot for QualityBot {
    fn name(&self) -> &str {
        "Quality"
    }

    fn weight(&self) -> f64 {
        1.3
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let (signal, score, reason) = match QualityTier::of(ctx.symbol) {
            QualityTier::A => (SignalLight::Green, 100, "Grade A token - high liquidity"),
            QualityTier::B => (SignalLight::Yellow, 70, "Grade B token - moderate liquidity"),
            QualityTier::C => (SignalLight::Yellow, 55, "Grade C token - check liquidity"),
        };
        Some(Verdict::new(self.name(), signal, score, self.weight()).reason(reason))
    }
}
