//! Error types for farm fetching

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("ABI error for `{method}`: {message}")]
    Abi {
        method: String,
        message: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("No address configured for chain {chain_id} or the mainnet fallback")]
    AddressResolution {
        chain_id: u64,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("Farm fetch task failed")]
    Task(#[from] tokio::task::JoinError),
}

pub type FarmResult<T> = Result<T, FarmError>;

impl FarmError {
    pub(crate) fn parsing(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        FarmError::DataParsing {
            context: context.into(),
            source: source.into(),
        }
    }
}
