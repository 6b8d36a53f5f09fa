pub mod analysis;
pub mod bots;
pub mod decision;
pub mod risk;
pub mod signals;

pub use analysis::{analyze, evaluate, evaluate_with, AnalysisReport, AnalysisRequest};
pub use bots::{Panel, ScoringBot};
pub use decision::decide;
pub use risk::{compute_risk_levels, price_precision, round_price};
pub use signals::IndicatorSnapshot;
