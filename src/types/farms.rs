//! Farm descriptors and derived metrics

use alloy::primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use super::AddressMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    pub symbol: String,
    pub address: AddressMap,
}

/// A farm as configured by the caller. `pid` is `None` for farms that are not
/// registered with the staking contract; pool id 0 is a real pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmDescriptor {
    #[serde(default)]
    pub pid: Option<u32>,
    pub lp_symbol: String,
    pub lp_addresses: AddressMap,
    pub token: TokenDescriptor,
    pub quote_token: TokenDescriptor,
}

/// Snapshot of one farm. Amounts are in whole tokens, `lp_total_supply` is raw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmMetrics {
    pub token_amount_in_pool: Decimal,
    pub quote_token_amount_in_pool: Decimal,
    pub token_amount_total: Decimal,
    pub quote_token_amount_total: Decimal,
    #[serde(serialize_with = "serialize_integer")]
    pub lp_total_supply: U256,
    pub lp_total_value_in_quote_token: Decimal,
    pub token_price_vs_quote: Decimal,
    pub pool_weight: Decimal,
    pub multiplier: String,
    #[serde(skip)]
    pub alloc_point: U256,
}

fn serialize_integer<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
