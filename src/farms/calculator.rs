//! Farm metric derivation from raw on-chain reads

use alloy::primitives::U256;
use rust_decimal_macros::dec;
use crate::{
    errors::FarmResult,
    types::FarmMetrics,
    utils::{div_or_zero, mul_saturating, u256_ratio, u256_to_decimal},
};

/// Allocation points are expressed in hundredths of a reward multiplier.
const ALLOC_POINT_DECIMALS: u32 = 2;

/// ERC-20 reads for one LP pair.
#[derive(Debug, Clone, Default)]
pub struct LpTokenReads {
    /// Pool token held by the LP contract
    pub token_balance: U256,
    /// Quote token held by the LP contract
    pub quote_token_balance: U256,
    /// LP tokens held by the staking contract
    pub lp_balance_staked: U256,
    pub lp_total_supply: U256,
    pub token_decimals: u32,
    pub quote_token_decimals: u32,
}

/// Staking contract reads for one pool id.
#[derive(Debug, Clone, Default)]
pub struct PoolAllocation {
    pub alloc_point: U256,
    pub total_alloc_point: U256,
}

/// Derives the farm snapshot. Without an allocation the pool weight is zero and
/// the multiplier is `0X`.
pub fn calculate_farm_metrics(
    lp: &LpTokenReads,
    allocation: Option<&PoolAllocation>,
) -> FarmResult<FarmMetrics> {
    // Share of all LP tokens that sit in the staking contract
    let staked_ratio = u256_ratio(lp.lp_balance_staked, lp.lp_total_supply)?;

    let token_amount_total = u256_to_decimal(lp.token_balance, lp.token_decimals)?;
    let quote_token_amount_total = u256_to_decimal(lp.quote_token_balance, lp.quote_token_decimals)?;

    let token_amount_in_pool = mul_saturating(token_amount_total, staked_ratio);
    let quote_token_amount_in_pool = mul_saturating(quote_token_amount_total, staked_ratio);

    // Both sides of a constant-product pair hold equal value
    let lp_total_value_in_quote_token = mul_saturating(quote_token_amount_in_pool, dec!(2));

    let token_price_vs_quote = div_or_zero(quote_token_amount_total, token_amount_total);

    let PoolAllocation { alloc_point, total_alloc_point } = allocation.cloned().unwrap_or_default();
    let pool_weight = u256_ratio(alloc_point, total_alloc_point)?;

    Ok(FarmMetrics {
        token_amount_in_pool,
        quote_token_amount_in_pool,
        token_amount_total,
        quote_token_amount_total,
        lp_total_supply: lp.lp_total_supply,
        lp_total_value_in_quote_token,
        token_price_vs_quote,
        pool_weight,
        multiplier: format_multiplier(alloc_point)?,
        alloc_point,
    })
}

/// `allocPoint / 100` with an `X` suffix, e.g. `1.5X`.
pub fn format_multiplier(alloc_point: U256) -> FarmResult<String> {
    let multiplier = u256_to_decimal(alloc_point, ALLOC_POINT_DECIMALS)?;
    Ok(format!("{}X", multiplier))
}
