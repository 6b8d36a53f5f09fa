//! Take-profit / stop-loss sizing.
//!
//! Levels are sized from ATR multiples of the timeframe profile, fall back to
//! fixed percentages of price when ATR is negligible, and always come out with
//! a reward:risk of at least [`MIN_REWARD_RISK`].

use tracing::debug;

use crate::types::{Direction, Interval, RiskLevels};

/// Minimum reward:risk of any emitted recommendation.
pub const MIN_REWARD_RISK: f64 = 2.0;

/// ATR below this fraction of price is treated as noise.
const MEANINGFUL_ATR_RATIO: f64 = 0.0001;

/// Take-profit offset bounds as fractions of price.
const TP_OFFSET_BOUNDS: (f64, f64) = (0.001, 0.15);
/// Stop-loss offset bounds as fractions of price.
const SL_OFFSET_BOUNDS: (f64, f64) = (0.0005, 0.08);

/// Decimal places used for a price of this magnitude.
pub fn price_precision(price: f64) -> u32 {
    if price.is_nan() || price <= 0.0 || price >= 1000.0 {
        2
    } else if price >= 100.0 {
        3
    } else if price >= 1.0 {
        4
    } else if price >= 0.01 {
        5
    } else if price >= 0.001 {
        6
    } else {
        8
    }
}

/// Round `value` to the precision of the reference `price`.
pub fn round_price(value: f64, price: f64) -> f64 {
    round_to(value, price_precision(price))
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn signed(direction: Direction, offset: f64) -> f64 {
    if direction.is_long() {
        offset
    } else {
        -offset
    }
}

/// Compute take-profit, stop-loss and reward:risk for an entry at `price`.
///
/// Never fails. A non-positive or non-finite `price` yields zeroed levels
/// with the minimum reward:risk.
pub fn compute_risk_levels(
    price: f64,
    direction: Direction,
    atr: f64,
    interval: Interval,
) -> RiskLevels {
    if !price.is_finite() || price <= 0.0 {
        debug!(price, "No usable price, returning empty risk levels");
        return RiskLevels {
            take_profit: 0.0,
            stop_loss: 0.0,
            reward_risk: MIN_REWARD_RISK,
        };
    }

    let profile = interval.profile();
    let atr_meaningful = atr > 0.0 && atr / price > MEANINGFUL_ATR_RATIO;

    let (tp_offset, sl_offset) = if atr_meaningful {
        (atr * profile.tp_atr_mult, atr * profile.sl_atr_mult)
    } else {
        (
            price * profile.tp_fallback_pct,
            price * profile.sl_fallback_pct,
        )
    };
    let tp_offset = tp_offset.clamp(price * TP_OFFSET_BOUNDS.0, price * TP_OFFSET_BOUNDS.1);
    let sl_offset = sl_offset.clamp(price * SL_OFFSET_BOUNDS.0, price * SL_OFFSET_BOUNDS.1);

    // TP moves with the trade, SL against it
    let mut take_profit = round_price(price + signed(direction, tp_offset), price);
    let mut stop_loss = round_price(price - signed(direction, sl_offset), price);

    let tp_wrong_side = match direction {
        Direction::Long => take_profit <= price,
        Direction::Short => take_profit >= price,
    };
    if tp_wrong_side {
        let fallback = price * profile.tp_fallback_pct;
        let corrected = round_price(price + signed(direction, fallback), price);
        debug!(
            price,
            take_profit,
            corrected,
            "Take-profit rounded onto the wrong side, using fallback offset"
        );
        take_profit = corrected;
    }

    let sl_wrong_side = match direction {
        Direction::Long => stop_loss >= price,
        Direction::Short => stop_loss <= price,
    };
    if sl_wrong_side {
        let fallback = price * profile.sl_fallback_pct;
        let corrected = round_price(price - signed(direction, fallback), price);
        debug!(
            price,
            stop_loss,
            corrected,
            "Stop-loss rounded onto the wrong side, using fallback offset"
        );
        stop_loss = corrected;
    }

    let tp_dist = (take_profit - price).abs();
    let sl_dist = (stop_loss - price).abs();
    if sl_dist <= 0.0 {
        return RiskLevels {
            take_profit,
            stop_loss,
            reward_risk: MIN_REWARD_RISK,
        };
    }

    let ratio = tp_dist / sl_dist;
    if ratio < MIN_REWARD_RISK {
        let widened = round_price(price + signed(direction, sl_dist * MIN_REWARD_RISK), price);
        debug!(
            ratio,
            take_profit,
            widened,
            "Reward:risk below minimum, widening take-profit"
        );
        return RiskLevels {
            take_profit: widened,
            stop_loss,
            reward_risk: MIN_REWARD_RISK,
        };
    }

    RiskLevels {
        take_profit,
        stop_loss,
        reward_risk: round_to(ratio, 2),
    }
}
