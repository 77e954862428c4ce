//! 數量換算
//!
//! 所有換算都飽和到 `0..=u32::MAX`，不會因溢位而歸零或 panic。

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 四捨五入為整數件數（.5 進位），負數視為 0，超出上限取 `u32::MAX`
pub fn round_to_count(value: Decimal) -> u32 {
    saturate(value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// 無條件進位為整數件數，負數視為 0，超出上限取 `u32::MAX`
pub fn ceil_to_count(value: Decimal) -> u32 {
    saturate(value.ceil())
}

/// round(數量 × 倍數)，乘法溢位時取 `u32::MAX`
pub fn scale_round(count: u32, factor: Decimal) -> u32 {
    match Decimal::from(count).checked_mul(factor) {
        Some(product) => round_to_count(product),
        None => overflowed(factor),
    }
}

/// ceil(數量 × 倍數)，乘法溢位時取 `u32::MAX`
pub fn scale_ceil(count: u32, factor: Decimal) -> u32 {
    match Decimal::from(count).checked_mul(factor) {
        Some(product) => ceil_to_count(product),
        None => overflowed(factor),
    }
}

fn saturate(whole: Decimal) -> u32 {
    if whole <= Decimal::ZERO {
        0
    } else {
        whole.to_u32().unwrap_or(u32::MAX)
    }
}

fn overflowed(factor: Decimal) -> u32 {
    if factor.is_sign_negative() {
        0
    } else {
        u32::MAX
    }
}
