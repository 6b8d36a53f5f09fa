//! Evaluation pipeline and the request/report boundary around it.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::bots::Panel;
use crate::services::decision::decide;
use crate::services::risk::{compute_risk_levels, round_price, round_to};
use crate::services::signals::indicators::Atr;
use crate::services::signals::IndicatorSnapshot;
use crate::types::{
    AnalysisContext, Candle, Decision, DecisionKind, Direction, Interval, Verdict,
};

/// Quote asset stripped from incoming symbols.
const QUOTE_ASSET: &str = "USDT";

/// Run the default panel over `ctx` and aggregate its verdicts.
pub fn evaluate(ctx: &AnalysisContext<'_>) -> Decision {
    evaluate_with(&Panel::default(), ctx)
}

/// Run `panel` over `ctx` and aggregate its verdicts.
pub fn evaluate_with(panel: &Panel, ctx: &AnalysisContext<'_>) -> Decision {
    let verdicts = panel.run(ctx);
    let decision = decide(verdicts, ctx.base_leverage);

    info!(
        symbol = ctx.symbol,
        direction = %ctx.direction,
        interval = %ctx.interval,
        decision = decision.decision.as_str(),
        confidence = decision.confidence,
        leverage = decision.leverage,
        "{}",
        decision.rationale()
    );
    decision
}

/// Analysis request as received from a caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub leverage: Option<u32>,
    #[serde(default)]
    pub interval: Option<String>,
    pub candles: Vec<Candle>,
    /// Current price; the last close when absent.
    #[serde(default)]
    pub price: Option<f64>,
    /// 24h % change of the primary reference asset.
    #[serde(default)]
    pub reference_change: f64,
    /// 24h % change of the secondary reference asset.
    #[serde(default)]
    pub secondary_reference_change: f64,
}

/// A request with every default resolved and every field checked.
#[derive(Debug, Clone)]
pub struct ValidatedRequest<'a> {
    pub symbol: String,
    pub direction: Direction,
    pub leverage: u32,
    pub interval: Interval,
    pub candles: &'a [Candle],
    pub price: f64,
    pub reference_change: f64,
    pub secondary_reference_change: f64,
}

impl ValidatedRequest<'_> {
    pub fn context(&self) -> AnalysisContext<'_> {
        AnalysisContext {
            symbol: &self.symbol,
            direction: self.direction,
            candles: self.candles,
            current_price: self.price,
            reference_change: self.reference_change,
            secondary_reference_change: self.secondary_reference_change,
            base_leverage: self.leverage,
            interval: self.interval,
        }
    }
}

/// Upper-case a symbol and strip a trailing quote asset: `solusdt` -> `SOL`.
pub fn normalize_symbol(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    match upper.strip_suffix(QUOTE_ASSET) {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => upper,
    }
}

impl AnalysisRequest {
    /// Resolve defaults from `config` and reject anything the engine can't use.
    pub fn validate(&self, config: &Config) -> Result<ValidatedRequest<'_>> {
        let validated = self.resolve(config);
        if let Err(e) = &validated {
            warn!("Rejected analysis request: {}", e);
        }
        validated
    }

    fn resolve(&self, config: &Config) -> Result<ValidatedRequest<'_>> {
        let symbol = match self.symbol.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => normalize_symbol(s),
            _ => config.references.primary.clone(),
        };

        let direction = match self.direction.as_deref() {
            Some(d) => Direction::from_str(d)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid direction: {}", d)))?,
            None => Direction::Long,
        };

        let interval = match self.interval.as_deref() {
            Some(i) => Interval::from_str(i)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid interval: {}", i)))?,
            None => config.default_interval,
        };

        let last = self
            .candles
            .last()
            .ok_or_else(|| AppError::BadRequest(format!("No candles for {}", symbol)))?;

        let price = self.price.unwrap_or(last.close);
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::BadRequest(format!("Invalid price: {}", price)));
        }

        Ok(ValidatedRequest {
            symbol,
            direction,
            leverage: self
                .leverage
                .filter(|l| *l > 0)
                .unwrap_or(config.default_leverage),
            interval,
            candles: &self.candles,
            price,
            reference_change: self.reference_change,
            secondary_reference_change: self.secondary_reference_change,
        })
    }
}

/// Decision merged with risk levels and indicator readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub decision: DecisionKind,
    pub confidence: u8,
    pub leverage: u32,
    pub reason: String,
    pub bots: Vec<Verdict>,
    pub tp: f64,
    pub sl: f64,
    pub rr_ratio: f64,
    pub price: f64,
    pub direction: Direction,
    pub symbol: String,
    pub atr: f64,
    pub atr_pct: f64,
    pub interval: Interval,
    pub indicators: IndicatorSnapshot,
}

/// Validate, evaluate and size one request.
pub fn analyze(request: &AnalysisRequest, config: &Config) -> Result<AnalysisReport> {
    let req = request.validate(config)?;
    let ctx = req.context();

    let decision = evaluate_with(&Panel::new(config.reference_assets()), &ctx);
    let atr = Atr::new(config.atr_period).calculate(req.candles);
    let levels = compute_risk_levels(req.price, req.direction, atr, req.interval);
    let atr_pct = if req.price > 0.0 {
        round_to(atr / req.price * 100.0, 4)
    } else {
        0.0
    };

    Ok(AnalysisReport {
        reason: decision.rationale(),
        decision: decision.decision,
        confidence: decision.confidence,
        leverage: decision.leverage,
        bots: decision.bots,
        tp: levels.take_profit,
        sl: levels.stop_loss,
        rr_ratio: levels.reward_risk,
        price: round_price(req.price, req.price),
        direction: req.direction,
        symbol: req.symbol.clone(),
        atr: round_price(atr, req.price),
        atr_pct,
        interval: req.interval,
        indicators: IndicatorSnapshot::compute(req.candles, req.interval),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferenceAssets;
    use crate::services::bots::test_support::{context, uptrend};

    fn config() -> Config {
        Config {
            default_leverage: 50,
            default_interval: Interval::FifteenMinutes,
            atr_period: 14,
            references: ReferenceAssets::default(),
        }
    }

    fn request(candles: Vec<Candle>) -> AnalysisRequest {
        AnalysisRequest {
            candles,
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("solusdt"), "SOL");
        assert_eq!(normalize_symbol(" Eth "), "ETH");
        assert_eq!(normalize_symbol("USDT"), "USDT");
    }

    #[test]
    fn test_validate_applies_defaults() {
        let req = request(uptrend(30));
        let v = req.validate(&config()).unwrap();
        assert_eq!(v.symbol, "BTC");
        assert_eq!(v.direction, Direction::Long);
        assert_eq!(v.leverage, 50);
        assert_eq!(v.interval, Interval::FifteenMinutes);
        assert_eq!(v.price, req.candles[29].close);
    }

    #[test]
    fn test_validate_parses_case_insensitively() {
        let req = AnalysisRequest {
            symbol: Some("arbusdt".into()),
            direction: Some("short".into()),
            interval: Some("4H".into()),
            leverage: Some(0),
            price: Some(1.25),
            ..request(uptrend(5))
        };
        let v = req.validate(&config()).unwrap();
        assert_eq!(v.symbol, "ARB");
        assert_eq!(v.direction, Direction::Short);
        assert_eq!(v.interval, Interval::FourHours);
        assert_eq!(v.leverage, 50);
        assert_eq!(v.price, 1.25);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let cfg = config();

        let req = AnalysisRequest {
            direction: Some("UP".into()),
            ..request(uptrend(5))
        };
        assert!(matches!(req.validate(&cfg), Err(AppError::BadRequest(_))));

        let req = AnalysisRequest {
            interval: Some("7m".into()),
            ..request(uptrend(5))
        };
        assert!(matches!(req.validate(&cfg), Err(AppError::BadRequest(_))));

        assert!(matches!(
            request(Vec::new()).validate(&cfg),
            Err(AppError::BadRequest(_))
        ));

        let req = AnalysisRequest {
            price: Some(0.0),
            ..request(uptrend(5))
        };
        assert!(matches!(req.validate(&cfg), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let candles = uptrend(100);
        let ctx = context("ETH", Direction::Long, &candles);
        assert_eq!(evaluate(&ctx), evaluate(&ctx));
    }

    #[test]
    fn test_analyze_merges_decision_and_levels() {
        let report = analyze(&request(uptrend(100)), &config()).unwrap();
        assert_eq!(report.symbol, "BTC");
        assert_eq!(report.bots.len(), 7);
        assert!(report.tp > report.price);
        assert!(report.sl < report.price);
        assert!(report.rr_ratio >= 2.0);
        assert!(report.atr > 0.0);
        assert!(report.reason.starts_with(match report.decision {
            DecisionKind::Enter => "",
            DecisionKind::Wait => "Wait",
            DecisionKind::Cancel => "STOP",
        }));
    }
}
