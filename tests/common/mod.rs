#![allow(dead_code)]

use alloy::primitives::{address, keccak256, Address, Bytes, U256};
use alloy::sol_types::SolValue;
use farm_metrics::{
    multicall::{Aggregator, IMulticall},
    AddressMap, FarmDescriptor, FarmError, FarmResult, TokenDescriptor,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const LP: Address = address!("0000000000000000000000000000000000000010");
pub const TOKEN: Address = address!("0000000000000000000000000000000000000020");
pub const QUOTE_TOKEN: Address = address!("0000000000000000000000000000000000000030");
pub const MASTERCHEF: Address = address!("0000000000000000000000000000000000000040");

pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature);
    [hash[0], hash[1], hash[2], hash[3]]
}

pub fn units(amount: u64, decimals: u32) -> U256 {
    U256::from(amount) * U256::from(10u8).pow(U256::from(decimals))
}

/// Canned aggregator keyed by call target and selector.
#[derive(Clone, Default)]
pub struct MockAggregator {
    responses: HashMap<(Address, [u8; 4]), Bytes>,
    delay: Option<Duration>,
    fail: bool,
    batches: Arc<Mutex<Vec<Vec<IMulticall::Call>>>>,
}

impl MockAggregator {
    pub fn respond(mut self, target: Address, signature: &str, data: Vec<u8>) -> Self {
        self.responses.insert((target, selector(signature)), data.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn batches(&self) -> Vec<Vec<IMulticall::Call>> {
        self.batches.lock().unwrap().clone()
    }

    /// LP pair with the given raw balances, 18 decimals on both tokens.
    pub fn lp_pair(token_balance: U256, quote_balance: U256, staked: U256, supply: U256) -> Self {
        Self::default()
            .respond(TOKEN, "balanceOf(address)", token_balance.abi_encode())
            .respond(QUOTE_TOKEN, "balanceOf(address)", quote_balance.abi_encode())
            .respond(LP, "balanceOf(address)", staked.abi_encode())
            .respond(LP, "totalSupply()", supply.abi_encode())
            .respond(TOKEN, "decimals()", U256::from(18u8).abi_encode())
            .respond(QUOTE_TOKEN, "decimals()", U256::from(18u8).abi_encode())
    }

    pub fn with_pool(self, alloc_point: u64, total_alloc_point: u64) -> Self {
        let pool_info = (Address::ZERO, U256::from(alloc_point), U256::ZERO, U256::ZERO);
        self.respond(MASTERCHEF, "poolInfo(uint256)", pool_info.abi_encode())
            .respond(MASTERCHEF, "totalAllocPoint()", U256::from(total_alloc_point).abi_encode())
    }
}

impl Aggregator for MockAggregator {
    async fn aggregate(&self, calls: Vec<IMulticall::Call>) -> FarmResult<Vec<Bytes>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.batches.lock().unwrap().push(calls.clone());

        if self.fail {
            return Err(FarmError::Network {
                message: "mock aggregator unavailable".to_string(),
                source: None,
            });
        }

        calls
            .iter()
            .map(|call| {
                let selector: [u8; 4] = call.callData[..4].try_into().unwrap();
                self.responses
                    .get(&(call.target, selector))
                    .cloned()
                    .ok_or_else(|| FarmError::Contract {
                        contract: call.target,
                        message: "no canned response".to_string(),
                        source: anyhow::anyhow!("unexpected call"),
                    })
            })
            .collect()
    }
}

pub fn farm(pid: Option<u32>) -> FarmDescriptor {
    FarmDescriptor {
        pid,
        lp_symbol: "TOKEN-QUOTE LP".to_string(),
        lp_addresses: AddressMap::from(LP),
        token: TokenDescriptor {
            symbol: "TOKEN".to_string(),
            address: AddressMap::from(TOKEN),
        },
        quote_token: TokenDescriptor {
            symbol: "QUOTE".to_string(),
            address: AddressMap::from(QUOTE_TOKEN),
        },
    }
}
