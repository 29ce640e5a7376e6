//! Network provider setup

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use crate::{
    config::Config,
    ConcreteProvider,
};

pub fn build_provider(rpc_url: &str) -> Result<Arc<ConcreteProvider>> {
    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(rpc_url.parse().context("Invalid RPC_URL")?)
            .boxed()
    );
    Ok(provider)
}

pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let rpc_url = config.rpc_url.as_deref()
        .context("RPC_URL is required")?;
    let provider = build_provider(rpc_url)?;

    info!("🔗 Testing connection to chain {}...", config.chain_id);
    let block = provider.get_block_number().await
        .map_err(|e| {
            warn!("⚠️ Network connection attempt failed: {}", e);
            anyhow::anyhow!("Network connection failed: {}", e)
        })?;

    info!("✅ Connected at block {}", block);
    Ok(provider)
}
