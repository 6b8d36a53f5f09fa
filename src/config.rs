use std::env;

use crate::types::Interval;

/// Reference assets whose 24h moves gate every evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAssets {
    /// Primary reference symbol (default: BTC).
    pub primary: String,
    /// Display name of the primary reference bot (default: "Bitcoin").
    pub primary_label: String,
    /// Secondary reference symbol (default: ETH).
    pub secondary: String,
}

impl Default for ReferenceAssets {
    fn default() -> Self {
        Self {
            primary: "BTC".to_string(),
            primary_label: "Bitcoin".to_string(),
            secondary: "ETH".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base leverage when a request does not name one.
    pub default_leverage: u32,
    /// Timeframe when a request does not name one.
    pub default_interval: Interval,
    /// Period of the ATR that sizes take-profit and stop-loss.
    pub atr_period: usize,
    /// Reference assets for the macro and reference-asset bots.
    pub references: ReferenceAssets,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ReferenceAssets::default();

        Self {
            default_leverage: env::var("DEFAULT_LEVERAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(50),
            default_interval: env::var("DEFAULT_INTERVAL")
                .ok()
                .and_then(|v| Interval::from_str(&v))
                .unwrap_or_default(),
            atr_period: env::var("ATR_PERIOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(14),
            references: ReferenceAssets {
                primary: env::var("REFERENCE_SYMBOL")
                    .map(|s| s.to_uppercase())
                    .unwrap_or(defaults.primary),
                primary_label: env::var("REFERENCE_LABEL").unwrap_or(defaults.primary_label),
                secondary: env::var("SECONDARY_REFERENCE_SYMBOL")
                    .map(|s| s.to_uppercase())
                    .unwrap_or(defaults.secondary),
            },
        }
    }

    pub fn reference_assets(&self) -> &ReferenceAssets {
        &self.references
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
