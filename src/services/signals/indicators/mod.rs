//! Technical indicator implementations.
//!
//! Every indicator degrades to a neutral value instead of failing when the
//! candle history is shorter than its period.

pub mod atr;
pub mod bollinger;
pub mod divergence;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod volume;

pub use atr::Atr;
pub use bollinger::{BollingerBands, BollingerOutput};
pub use divergence::{Divergence, DivergenceDetector};
pub use ema::Ema;
pub use macd::{Macd, MacdOutput};
pub use rsi::{Rsi, NEUTRAL_RSI};
pub use sma::Sma;
pub use stochastic::{Stochastic, StochasticOutput};
pub use volume::{VolumeAnalysis, VolumeOutput, VolumeTrend};
