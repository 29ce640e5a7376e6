//! Contract ABIs used by the farm fetcher

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::U256,
};
use crate::errors::{FarmError, FarmResult};

const ERC20_ABI_JSON: &str = include_str!("erc20.json");
const MASTERCHEF_ABI_JSON: &str = include_str!("masterchef.json");

pub fn erc20_abi() -> FarmResult<JsonAbi> {
    parse_abi("ERC-20", ERC20_ABI_JSON)
}

pub fn masterchef_abi() -> FarmResult<JsonAbi> {
    parse_abi("MasterChef", MASTERCHEF_ABI_JSON)
}

pub fn parse_abi(name: &str, json: &str) -> FarmResult<JsonAbi> {
    serde_json::from_str(json)
        .map_err(|e| FarmError::parsing(format!("{} ABI", name), e))
}

/// Position of the named output of `method`, for reading struct-like returns.
pub fn output_position(abi: &JsonAbi, method: &str, output: &str) -> FarmResult<usize> {
    abi.function(method)
        .and_then(|overloads| overloads.first())
        .and_then(|function| function.outputs.iter().position(|param| param.name == output))
        .ok_or_else(|| FarmError::Abi {
            method: method.to_string(),
            message: format!("no output named `{}`", output),
        })
}

/// Reads the unsigned integer at `index` of a decoded call result.
pub fn uint_at(values: &[DynSolValue], index: usize, method: &str) -> FarmResult<U256> {
    values
        .get(index)
        .and_then(DynSolValue::as_uint)
        .map(|(value, _bits)| value)
        .ok_or_else(|| FarmError::Abi {
            method: method.to_string(),
            message: format!("expected an unsigned integer at output {}", index),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_abis_parse() {
        let erc20 = erc20_abi().unwrap();
        let methods: Vec<_> = erc20.functions.keys().map(String::as_str).collect();
        assert_eq!(methods, ["balanceOf", "decimals", "totalSupply"]);

        let masterchef = masterchef_abi().unwrap();
        let methods: Vec<_> = masterchef.functions.keys().map(String::as_str).collect();
        assert_eq!(methods, ["poolInfo", "totalAllocPoint"]);
    }

    #[test]
    fn finds_alloc_point_output() {
        let masterchef = masterchef_abi().unwrap();
        assert_eq!(output_position(&masterchef, "poolInfo", "allocPoint").unwrap(), 1);
        assert!(output_position(&masterchef, "poolInfo", "missing").is_err());
        assert!(output_position(&masterchef, "nope", "allocPoint").is_err());
    }

    #[test]
    fn reads_uints_and_rejects_other_types() {
        let values = vec![
            DynSolValue::Bool(true),
            DynSolValue::Uint(U256::from(42u8), 256),
        ];
        assert_eq!(uint_at(&values, 1, "test").unwrap(), U256::from(42u8));
        assert!(uint_at(&values, 0, "test").is_err());
        assert!(uint_at(&values, 2, "test").is_err());
    }

    #[test]
    fn malformed_abi_is_a_parsing_error() {
        assert!(matches!(
            parse_abi("broken", "{not json"),
            Err(FarmError::DataParsing { .. })
        ));
    }
}
