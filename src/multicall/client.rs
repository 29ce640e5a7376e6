//! Batched contract reads through an aggregator contract

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::{Function, JsonAbi},
    primitives::Address,
};
use tracing::debug;
use super::{Aggregator, IMulticall};
use crate::errors::{FarmError, FarmResult};

/// One read-only contract call, encoded by method name against an ABI.
#[derive(Debug, Clone)]
pub struct Call {
    pub target: Address,
    pub method: String,
    pub params: Vec<DynSolValue>,
}

impl Call {
    pub fn new(target: Address, method: impl Into<String>) -> Self {
        Self {
            target,
            method: method.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, value: DynSolValue) -> Self {
        self.params.push(value);
        self
    }
}

pub struct MulticallClient<A> {
    aggregator: A,
}

impl<A: Aggregator> MulticallClient<A> {
    pub fn new(aggregator: A) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Runs `calls` as a single aggregated read and decodes each return value.
    ///
    /// `result[i]` holds the decoded outputs of `calls[i]`. The batch succeeds or
    /// fails as a whole.
    pub async fn multicall(&self, abi: &JsonAbi, calls: &[Call]) -> FarmResult<Vec<Vec<DynSolValue>>> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let functions = calls
            .iter()
            .map(|call| resolve_function(abi, call))
            .collect::<FarmResult<Vec<_>>>()?;

        let encoded = calls
            .iter()
            .zip(&functions)
            .map(|(call, function)| {
                let data = function.abi_encode_input(&call.params).map_err(|e| FarmError::Abi {
                    method: call.method.clone(),
                    message: e.to_string(),
                })?;
                Ok(IMulticall::Call {
                    target: call.target,
                    callData: data.into(),
                })
            })
            .collect::<FarmResult<Vec<_>>>()?;

        debug!(reads = calls.len(), "Submitting multicall batch");
        let return_data = self.aggregator.aggregate(encoded).await?;

        if return_data.len() != calls.len() {
            return Err(FarmError::Contract {
                contract: calls[0].target,
                message: format!(
                    "aggregator returned {} results for {} calls",
                    return_data.len(),
                    calls.len()
                ),
                source: anyhow::anyhow!("result count mismatch"),
            });
        }

        calls
            .iter()
            .zip(&functions)
            .zip(&return_data)
            .map(|((call, function), data)| {
                function.abi_decode_output(data, true).map_err(|e| FarmError::Contract {
                    contract: call.target,
                    message: format!("Failed to decode `{}` result", call.method),
                    source: e.into(),
                })
            })
            .collect()
    }
}

fn resolve_function<'a>(abi: &'a JsonAbi, call: &Call) -> FarmResult<&'a Function> {
    abi.function(&call.method)
        .and_then(|overloads| {
            overloads
                .iter()
                .find(|function| function.inputs.len() == call.params.len())
        })
        .ok_or_else(|| FarmError::Abi {
            method: call.method.clone(),
            message: format!("no function taking {} parameters in ABI", call.params.len()),
        })
}
