//! Augur - technical-analysis signal engine for leveraged crypto entries

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::{Config, ReferenceAssets};
pub use error::{AppError, Result};
pub use services::{
    analyze, compute_risk_levels, decide, evaluate, evaluate_with, AnalysisReport,
    AnalysisRequest, IndicatorSnapshot, Panel, ScoringBot,
};
pub use types::*;
