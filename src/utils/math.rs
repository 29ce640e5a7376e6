//! Mathematical utility functions

use alloy::primitives::U256;
use rust_decimal::prelude::*;
use crate::errors::{FarmError, FarmResult};

/// Largest mantissa a `Decimal` can hold (2^96 - 1).
const MAX_MANTISSA: u128 = (1u128 << 96) - 1;
const MAX_SCALE: u32 = 28;

/// Converts a raw on-chain integer into a decimal amount, i.e. `value / 10^decimals`.
///
/// Exact while `value` fits the 96-bit mantissa. Larger values lose their least
/// significant digits as long as there is fractional scale left to give up; an
/// integer part beyond `Decimal::MAX` is an error.
pub fn u256_to_decimal(value: U256, decimals: u32) -> FarmResult<Decimal> {
    let max_mantissa = U256::from(MAX_MANTISSA);
    let ten = U256::from(10u8);

    let mut mantissa = value;
    let mut scale = decimals;
    while scale > MAX_SCALE || (mantissa > max_mantissa && scale > 0) {
        mantissa /= ten;
        scale -= 1;
    }

    let mantissa = u128::try_from(mantissa)
        .ok()
        .filter(|m| *m <= MAX_MANTISSA)
        .ok_or_else(|| {
            FarmError::parsing(
                format!("{} with {} decimals", value, decimals),
                anyhow::anyhow!("value exceeds decimal range"),
            )
        })?;

    Ok(Decimal::from_i128_with_scale(mantissa as i128, scale).normalize())
}

/// `numerator / denominator` for raw integers, `0` when the denominator is zero.
///
/// Both sides are shifted down by the same power of ten until they fit a decimal,
/// so the quotient keeps its leading digits even for very large supplies. A
/// quotient beyond the decimal range saturates at `Decimal::MAX`.
pub fn u256_ratio(numerator: U256, denominator: U256) -> FarmResult<Decimal> {
    if denominator.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let max_mantissa = U256::from(MAX_MANTISSA);
    let ten = U256::from(10u8);
    let (mut num, mut den) = (numerator, denominator);
    while num > max_mantissa || den > max_mantissa {
        num /= ten;
        den /= ten;
    }

    if den.is_zero() {
        return Ok(Decimal::MAX);
    }

    let num = u256_to_decimal(num, 0)?;
    let den = u256_to_decimal(den, 0)?;
    Ok(div_or_zero(num, den))
}

/// Division that never fails: a zero divisor gives zero, an overflowing
/// quotient saturates at `Decimal::MAX` (or `MIN` when the signs differ).
pub fn div_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .unwrap_or_else(|| saturated(numerator.is_sign_negative() != denominator.is_sign_negative()))
        .normalize()
}

/// Multiplication that saturates at the decimal range instead of failing.
pub fn mul_saturating(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs)
        .unwrap_or_else(|| saturated(lhs.is_sign_negative() != rhs.is_sign_negative()))
        .normalize()
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}
