//! Scoring panel.
//!
//! Seven independent bots each grade the proposed trade. A bot that lacks
//! the history it needs abstains (returns `None`) instead of voting RED.

pub mod macd_bb;
pub mod macro_trend;
pub mod quality;
pub mod reference;
pub mod rsi;
pub mod trend;
pub mod whales;

pub use macd_bb::MacdBollingerBot;
pub use macro_trend::MacroBot;
pub use quality::QualityBot;
pub use reference::ReferenceAssetBot;
pub use rsi::RsiBot;
pub use trend::TrendBot;
pub use whales::WhaleBot;

use tracing::debug;

use crate::config::ReferenceAssets;
use crate::types::{AnalysisContext, Verdict};

/// A single member of the scoring panel.
pub trait ScoringBot: Send + Sync {
    /// Name reported on the verdict.
    fn name(&self) -> &str;

    /// Weight of this bot in the confidence average.
    fn weight(&self) -> f64;

    /// Grade the context, or `None` to abstain.
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict>;
}

/// The ordered set of bots consulted for every evaluation.
pub struct Panel {
    bots: Vec<Box<dyn ScoringBot>>,
}

impl Panel {
    pub fn new(references: &ReferenceAssets) -> Self {
        Self {
            bots: vec![
                Box::new(TrendBot),
                Box::new(ReferenceAssetBot::new(references)),
                Box::new(RsiBot),
                Box::new(WhaleBot),
                Box::new(QualityBot),
                Box::new(MacdBollingerBot),
                Box::new(MacroBot::new(references)),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    /// Run every bot in panel order, dropping abstentions.
    pub fn run(&self, ctx: &AnalysisContext<'_>) -> Vec<Verdict> {
        self.bots
            .iter()
            .filter_map(|bot| {
                let verdict = bot.evaluate(ctx);
                match &verdict {
                    Some(v) => debug!(
                        bot = bot.name(),
                        signal = v.signal.label(),
                        score = v.score,
                        "verdict: {}",
                        v.rationale()
                    ),
                    None => debug!(bot = bot.name(), candles = ctx.candles.len(), "abstained"),
                }
                verdict
            })
            .collect()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(&ReferenceAssets::default())
    }
}
