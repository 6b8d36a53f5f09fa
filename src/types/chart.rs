use serde::{Deserialize, Serialize};

/// Candle timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[default]
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
}

impl Interval {
    /// Every supported timeframe, shortest first.
    pub const ALL: [Interval; 10] = [
        Interval::OneMinute,
        Interval::ThreeMinutes,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::ThirtyMinutes,
        Interval::OneHour,
        Interval::TwoHours,
        Interval::FourHours,
        Interval::OneDay,
        Interval::OneWeek,
    ];

    /// Get the interval from its exchange code.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1m" => Some(Interval::OneMinute),
            "3m" => Some(Interval::ThreeMinutes),
            "5m" => Some(Interval::FiveMinutes),
            "15m" => Some(Interval::FifteenMinutes),
            "30m" => Some(Interval::ThirtyMinutes),
            "1h" => Some(Interval::OneHour),
            "2h" => Some(Interval::TwoHours),
            "4h" => Some(Interval::FourHours),
            "1d" => Some(Interval::OneDay),
            "1w" => Some(Interval::OneWeek),
            _ => None,
        }
    }

    /// Exchange code for this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::ThreeMinutes => "3m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneHour => "1h",
            Interval::TwoHours => "2h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
            Interval::OneWeek => "1w",
        }
    }

    /// Indicator periods and risk multipliers tuned for this timeframe.
    ///
    /// Shorter timeframes use shorter, more sensitive periods and tighter
    /// targets; daily and weekly candles use longer periods to cut noise.
    pub fn profile(&self) -> TimeframeProfile {
        let (rsi_period, bb_period, macd) = match self {
            Interval::OneMinute => (7, 12, MacdParams::new(6, 13, 5)),
            Interval::ThreeMinutes => (9, 15, MacdParams::new(8, 17, 6)),
            Interval::FiveMinutes => (10, 18, MacdParams::new(9, 21, 7)),
            Interval::FifteenMinutes
            | Interval::ThirtyMinutes
            | Interval::OneHour
            | Interval::TwoHours
            | Interval::FourHours => (14, 20, MacdParams::default()),
            Interval::OneDay => (21, 25, MacdParams::default()),
            Interval::OneWeek => (21, 30, MacdParams::default()),
        };

        // (tp, sl) as ATR multiples and as fallback fractions of price
        let (atr_multipliers, fallback_pct) = match self {
            Interval::OneMinute => ((2.0, 0.8), (0.004, 0.0015)),
            Interval::ThreeMinutes => ((2.2, 0.9), (0.006, 0.0025)),
            Interval::FiveMinutes => ((2.5, 1.0), (0.009, 0.004)),
            Interval::FifteenMinutes => ((2.8, 1.2), (0.015, 0.007)),
            Interval::ThirtyMinutes => ((3.0, 1.4), (0.022, 0.010)),
            Interval::OneHour => ((3.2, 1.6), (0.030, 0.015)),
            Interval::TwoHours => ((3.5, 1.8), (0.040, 0.020)),
            Interval::FourHours => ((3.8, 2.0), (0.055, 0.028)),
            Interval::OneDay => ((4.0, 2.2), (0.080, 0.045)),
            Interval::OneWeek => ((5.0, 2.8), (0.120, 0.065)),
        };

        TimeframeProfile {
            rsi_period,
            bb_period,
            macd,
            tp_atr_mult: atr_multipliers.0,
            sl_atr_mult: atr_multipliers.1,
            tp_fallback_pct: fallback_pct.0,
            sl_fallback_pct: fallback_pct.1,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MACD periods (fast EMA, slow EMA, signal EMA).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl MacdParams {
    pub const fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }
}

impl Default for MacdParams {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

/// Per-timeframe indicator and risk configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeframeProfile {
    pub rsi_period: usize,
    pub bb_period: usize,
    pub macd: MacdParams,
    /// Take-profit distance as a multiple of ATR.
    pub tp_atr_mult: f64,
    /// Stop-loss distance as a multiple of ATR.
    pub sl_atr_mult: f64,
    /// Take-profit distance as a fraction of price when ATR is unusable.
    pub tp_fallback_pct: f64,
    /// Stop-loss distance as a fraction of price when ATR is unusable.
    pub sl_fallback_pct: f64,
}

/// OHLCV candle, oldest first in any sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    #[serde(alias = "o")]
    pub open: f64,
    #[serde(alias = "h")]
    pub high: f64,
    #[serde(alias = "l")]
    pub low: f64,
    #[serde(alias = "c")]
    pub close: f64,
    #[serde(alias = "v")]
    pub volume: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Extract closing prices from a candle sequence.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
