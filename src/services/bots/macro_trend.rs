//! Macro momentum bot built on the two reference assets.

use super::ScoringBot;
use crate::config::ReferenceAssets;
use crate::services::signals::clamp_score;
use crate::types::{AnalysisContext, Direction, SignalLight, Verdict};

/// Opposing points that force a RED regardless of score.
const OPPOSING_LIMIT: u32 = 3;

/// Bullish and bearish momentum points from the reference assets' 24h moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroPoints {
    pub positive: u32,
    pub negative: u32,
}

impl MacroPoints {
    /// +2/+1 for strong/moderate gains, mirrored for losses.
    fn add(&mut self, symbol: &str, change: f64, reasons: &mut Vec<String>) {
        if change > 3.0 {
            self.positive += 2;
            reasons.push(format!("{} strong ({:+.1}%)", symbol, change));
        } else if change > 1.0 {
            self.positive += 1;
            reasons.push(format!("{} positive ({:+.1}%)", symbol, change));
        } else if change < -3.0 {
            self.negative += 2;
            reasons.push(format!("{} falling ({:+.1}%)", symbol, change));
        } else if change < -1.0 {
            self.negative += 1;
            reasons.push(format!("{} weak ({:+.1}%)", symbol, change));
        }
    }

    /// (points with the trade, points against it)
    fn aligned(&self, direction: Direction) -> (u32, u32) {
        match direction {
            Direction::Long => (self.positive, self.negative),
            Direction::Short => (self.negative, self.positive),
        }
    }
}

/// Scores broad market momentum for the proposed direction. Always critical.
pub struct MacroBot {
    primary: String,
    secondary: String,
}

impl MacroBot {
    pub fn new(references: &ReferenceAssets) -> Self {
        Self {
            primary: references.primary.to_uppercase(),
            secondary: references.secondary.to_uppercase(),
        }
    }
}

impl ScoringBot for MacroBot {
    fn name(&self) -> &str {
        "Macro"
    }

    fn weight(&self) -> f64 {
        1.5
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let mut points = MacroPoints::default();
        let mut reasons = Vec::new();
        points.add(&self.primary, ctx.reference_change, &mut reasons);
        points.add(&self.secondary, ctx.secondary_reference_change, &mut reasons);

        let (with, against) = points.aligned(ctx.direction);
        let score = clamp_score(50.0 + with as f64 * 15.0 - against as f64 * 20.0);

        let (signal, fallback) = if against >= OPPOSING_LIMIT {
            (SignalLight::Red, "Unfavorable macro")
        } else if score >= 65 {
            (SignalLight::Green, "Favorable macro")
        } else {
            (SignalLight::Yellow, "Neutral macro")
        };
        if reasons.is_empty() {
            reasons.push(fallback.to_string());
        }

        Some(
            Verdict::new(self.name(), signal, score, self.weight())
                .critical()
                .with_reasons(reasons),
        )
    }
}
