use serde::{Deserialize, Serialize};

use super::{Candle, Interval};

/// Proposed trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Long,
    Short,
}

impl Direction {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "LONG" => Some(Self::Long),
            "SHORT" => Some(Self::Short),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "LONG",
            Self::Short => "SHORT",
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic-light verdict of a scoring bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalLight {
    Green,
    Yellow,
    Red,
}

impl SignalLight {
    /// Map a score onto a light using GREEN and YELLOW floors.
    pub fn from_score(score: u8, green_at: u8, yellow_at: u8) -> Self {
        match score {
            s if s >= green_at => SignalLight::Green,
            s if s >= yellow_at => SignalLight::Yellow,
            _ => SignalLight::Red,
        }
    }

    /// Get display label for this light.
    pub fn label(&self) -> &'static str {
        match self {
            SignalLight::Green => "GREEN",
            SignalLight::Yellow => "YELLOW",
            SignalLight::Red => "RED",
        }
    }
}

/// Output of one scoring bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Bot name (e.g. "RSI", "Macro").
    pub name: String,
    pub signal: SignalLight,
    /// Score from 0 (worst) to 100 (best) for the proposed direction.
    pub score: u8,
    /// Relative weight in the confidence average, always > 0.
    pub weight: f64,
    /// Ordered rationale clauses.
    pub reasons: Vec<String>,
    /// A critical RED can veto the trade on its own.
    #[serde(default)]
    pub critical: bool,
}

impl Verdict {
    pub fn new(name: &str, signal: SignalLight, score: u8, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            signal,
            score: score.min(100),
            weight,
            reasons: Vec::new(),
            critical: false,
        }
    }

    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    pub fn with_reasons(mut self, reasons: Vec<String>) -> Self {
        self.reasons = reasons;
        self
    }

    /// Rationale clauses joined for display.
    pub fn rationale(&self) -> String {
        self.reasons.join(" | ")
    }

    pub fn is_critical_red(&self) -> bool {
        self.critical && self.signal == SignalLight::Red
    }
}

/// Final recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecisionKind {
    Enter,
    Wait,
    Cancel,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Enter => "ENTER",
            DecisionKind::Wait => "WAIT",
            DecisionKind::Cancel => "CANCEL",
        }
    }
}

/// Aggregated decision with the verdicts that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub decision: DecisionKind,
    /// Weighted confidence, 0-100.
    pub confidence: u8,
    /// Suggested leverage, 0 unless entering.
    pub leverage: u32,
    /// Short summary such as "Good signal" or "STOP".
    pub headline: String,
    /// Supporting clauses, in order.
    pub details: Vec<String>,
    pub bots: Vec<Verdict>,
}

impl Decision {
    /// Headline and details joined for display.
    pub fn rationale(&self) -> String {
        if self.details.is_empty() {
            self.headline.clone()
        } else {
            format!("{} - {}", self.headline, self.details.join(" + "))
        }
    }
}

/// Take-profit and stop-loss levels for an entry at the current price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevels {
    pub take_profit: f64,
    pub stop_loss: f64,
    /// Reward:risk, rounded to 2 decimals, never below 2.0.
    pub reward_risk: f64,
}

/// Inputs for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub symbol: &'a str,
    pub direction: Direction,
    pub candles: &'a [Candle],
    pub current_price: f64,
    /// 24h % change of the primary reference asset (e.g. BTC).
    pub reference_change: f64,
    /// 24h % change of the secondary reference asset (e.g. ETH).
    pub secondary_reference_change: f64,
    pub base_leverage: u32,
    pub interval: Interval,
}
