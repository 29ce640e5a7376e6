//! Aggregator contract binding and transports

use alloy::{
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol,
    sol_types::SolCall,
};
use std::future::Future;
use std::sync::Arc;
use tracing::debug;
use crate::{
    errors::{FarmError, FarmResult},
    ConcreteProvider,
};

sol! {
    // Multicall / Multicall3 `aggregate`: reverts unless every call succeeds.
    interface IMulticall {
        struct Call {
            address target;
            bytes callData;
        }

        function aggregate(Call[] calls)
            external
            returns (uint256 blockNumber, bytes[] returnData);
    }
}

/// Submits one batch of encoded calls and returns their raw return data, in order.
pub trait Aggregator: Send + Sync + 'static {
    fn aggregate(
        &self,
        calls: Vec<IMulticall::Call>,
    ) -> impl Future<Output = FarmResult<Vec<Bytes>>> + Send;
}

/// Aggregator backed by an RPC provider, executed as a read-only `eth_call`.
#[derive(Clone)]
pub struct ProviderAggregator {
    provider: Arc<ConcreteProvider>,
    address: Address,
}

impl ProviderAggregator {
    pub fn new(provider: Arc<ConcreteProvider>, address: Address) -> Self {
        Self { provider, address }
    }
}

impl Aggregator for ProviderAggregator {
    async fn aggregate(&self, calls: Vec<IMulticall::Call>) -> FarmResult<Vec<Bytes>> {
        let call_count = calls.len();
        let data = IMulticall::aggregateCall { calls }.abi_encode();
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(data.into());

        let result = self.provider.call(&tx).await
            .map_err(|e| FarmError::Network {
                message: format!("aggregate call with {} reads failed", call_count),
                source: Some(e.into()),
            })?;

        let decoded = IMulticall::aggregateCall::abi_decode_returns(&result, true)
            .map_err(|e| FarmError::Contract {
                contract: self.address,
                message: "Failed to decode aggregate return data".to_string(),
                source: e.into(),
            })?;

        debug!(
            block = %decoded.blockNumber,
            reads = call_count,
            "Aggregated batch"
        );
        Ok(decoded.returnData)
    }
}
