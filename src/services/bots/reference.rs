//! Reference-asset volatility bot.

use super::ScoringBot;
use crate::config::ReferenceAssets;
use crate::types::{AnalysisContext, SignalLight, Verdict};

/// Vetoes alt trades while the reference asset (BTC by default) is swinging
/// hard. Direction does not matter, only the size of the 24h move.
pub struct ReferenceAssetBot {
    symbol: String,
    label: String,
}

impl ReferenceAssetBot {
    pub fn new(references: &ReferenceAssets) -> Self {
        Self {
            symbol: references.primary.to_uppercase(),
            label: references.primary_label.clone(),
        }
    }
}

impl ScoringBot for ReferenceAssetBot {
    fn name(&self) -> &str {
        &self.label
    }

    fn weight(&self) -> f64 {
        1.2
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let verdict =
            |signal, score| Verdict::new(self.name(), signal, score, self.weight()).critical();

        if ctx.symbol.eq_ignore_ascii_case(&self.symbol) {
            return Some(
                verdict(SignalLight::Green, 100)
                    .reason(format!("Trading {} directly", self.symbol)),
            );
        }

        let change = ctx.reference_change;
        let magnitude = change.abs();
        let v = if magnitude > 8.0 {
            verdict(SignalLight::Red, 0).reason(format!(
                "{} very volatile ({:.1}%) - dangerous for alts",
                self.symbol, magnitude
            ))
        } else if magnitude > 5.0 {
            verdict(SignalLight::Yellow, 40)
                .reason(format!("{} volatile ({:.1}%) - caution", self.symbol, magnitude))
        } else {
            verdict(SignalLight::Green, 100)
                .reason(format!("{} stable ({:+.1}%)", self.symbol, change))
        };

        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::Direction;

    fn bot() -> ReferenceAssetBot {
        ReferenceAssetBot::new(&ReferenceAssets::default())
    }

    #[test]
    fn test_reference_asset_itself_is_green() {
        let mut ctx = context("BTC", Direction::Long, &[]);
        ctx.reference_change = -15.0;
        let v = bot().evaluate(&ctx).unwrap();
        assert_eq!(v.signal, SignalLight::Green);
        assert_eq!(v.score, 100);
        assert!(v.critical);
    }

    #[test]
    fn test_reference_thresholds() {
        let cases = [
            (8.5, SignalLight::Red, 0),
            (-8.01, SignalLight::Red, 0),
            (8.0, SignalLight::Yellow, 40),
            (-5.5, SignalLight::Yellow, 40),
            (5.0, SignalLight::Green, 100),
            (-1.0, SignalLight::Green, 100),
        ];
        for (change, signal, score) in cases {
            let mut ctx = context("SOL", Direction::Short, &[]);
            ctx.reference_change = change;
            let v = bot().evaluate(&ctx).unwrap();
            assert_eq!(v.signal, signal, "change {}", change);
            assert_eq!(v.score, score, "change {}", change);
            assert!(v.critical);
            assert_eq!(v.name, "Bitcoin");
        }
    }
}
