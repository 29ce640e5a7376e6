//! Chain-keyed contract addresses

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::{
    config::BSC_MAINNET_CHAIN_ID,
    errors::{FarmError, FarmResult},
};

pub const BSC_TESTNET_CHAIN_ID: u64 = 97;

/// Addresses of one contract across chains, keyed by chain id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressMap(pub BTreeMap<u64, Address>);

impl AddressMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, chain_id: u64, address: Address) -> Self {
        self.0.insert(chain_id, address);
        self
    }

    /// Address for `chain_id`, falling back to the mainnet entry.
    pub fn resolve(&self, chain_id: u64) -> FarmResult<Address> {
        self.0
            .get(&chain_id)
            .or_else(|| self.0.get(&BSC_MAINNET_CHAIN_ID))
            .copied()
            .ok_or(FarmError::AddressResolution { chain_id })
    }
}

impl From<Address> for AddressMap {
    fn from(address: Address) -> Self {
        AddressMap::new().with(BSC_MAINNET_CHAIN_ID, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const MAINNET: Address = address!("0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82");
    const TESTNET: Address = address!("0000000000000000000000000000000000000097");

    #[test]
    fn resolves_configured_chain() {
        let map = AddressMap::new()
            .with(BSC_MAINNET_CHAIN_ID, MAINNET)
            .with(BSC_TESTNET_CHAIN_ID, TESTNET);
        assert_eq!(map.resolve(BSC_TESTNET_CHAIN_ID).unwrap(), TESTNET);
    }

    #[test]
    fn falls_back_to_mainnet() {
        let map = AddressMap::from(MAINNET);
        assert_eq!(map.resolve(BSC_TESTNET_CHAIN_ID).unwrap(), MAINNET);
    }

    #[test]
    fn missing_address_is_an_error() {
        let map = AddressMap::new().with(BSC_TESTNET_CHAIN_ID, TESTNET);
        assert!(matches!(
            map.resolve(1),
            Err(FarmError::AddressResolution { chain_id: 1 })
        ));
    }

    #[test]
    fn deserializes_from_chain_keyed_json() {
        let json = r#"{"56":"0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82","97":"0x0000000000000000000000000000000000000097"}"#;
        let map: AddressMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.resolve(BSC_MAINNET_CHAIN_ID).unwrap(), MAINNET);
        assert_eq!(map.resolve(BSC_TESTNET_CHAIN_ID).unwrap(), TESTNET);
    }
}
