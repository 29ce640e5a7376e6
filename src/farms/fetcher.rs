//! Farm fetching: two multicall batches raced against a timeout

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{Address, U256},
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use crate::{
    abi::{erc20_abi, masterchef_abi, output_position, uint_at},
    config::Config,
    errors::{FarmError, FarmResult},
    farms::{calculate_farm_metrics, LpTokenReads, PoolAllocation},
    multicall::{Aggregator, Call, MulticallClient},
    types::{FarmDescriptor, FarmMetrics},
};

struct FetcherInner<A> {
    multicall: MulticallClient<A>,
    erc20_abi: JsonAbi,
    masterchef_abi: JsonAbi,
    masterchef: Address,
    chain_id: u64,
}

/// Fetches farm snapshots. Cheap to clone; every fetch is independent.
pub struct FarmFetcher<A> {
    inner: Arc<FetcherInner<A>>,
    timeout: Duration,
}

impl<A> Clone for FarmFetcher<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            timeout: self.timeout,
        }
    }
}

impl<A: Aggregator> FarmFetcher<A> {
    pub fn new(
        multicall: MulticallClient<A>,
        masterchef: Address,
        chain_id: u64,
        timeout: Duration,
    ) -> FarmResult<Self> {
        Ok(Self {
            inner: Arc::new(FetcherInner {
                multicall,
                erc20_abi: erc20_abi()?,
                masterchef_abi: masterchef_abi()?,
                masterchef,
                chain_id,
            }),
            timeout,
        })
    }

    pub fn from_config(multicall: MulticallClient<A>, config: &Config) -> FarmResult<Self> {
        let masterchef = config.masterchef_address.ok_or_else(|| FarmError::Config {
            message: "MASTERCHEF_ADDRESS is required".to_string(),
        })?;
        Self::new(multicall, masterchef, config.chain_id, config.farm_fetch_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches one farm, giving up after the configured timeout.
    ///
    /// Returns `Ok(None)` when the timer wins. The fetch keeps running on the
    /// runtime in that case and its result is dropped.
    pub async fn fetch_farm(&self, farm: &FarmDescriptor) -> FarmResult<Option<FarmMetrics>> {
        let fetcher = self.clone();
        let descriptor = farm.clone();
        let mut task = tokio::spawn(async move { fetcher.fetch_farm_metrics(&descriptor).await });

        tokio::select! {
            biased;
            joined = &mut task => Ok(Some(joined??)),
            _ = tokio::time::sleep(self.timeout) => {
                warn!(
                    farm = %farm.lp_symbol,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Farm fetch timed out, returning empty snapshot"
                );
                Ok(None)
            }
        }
    }

    /// Fetches every farm concurrently. Outcomes are in input order.
    pub async fn fetch_farms(&self, farms: &[FarmDescriptor]) -> Vec<FarmResult<Option<FarmMetrics>>> {
        let handles: Vec<_> = farms
            .iter()
            .cloned()
            .map(|farm| {
                let fetcher = self.clone();
                tokio::spawn(async move { fetcher.fetch_farm(&farm).await })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            outcomes.push(handle.await.map_err(FarmError::from).and_then(|outcome| outcome));
        }
        outcomes
    }

    /// Fetches one farm without a time limit.
    pub async fn fetch_farm_metrics(&self, farm: &FarmDescriptor) -> FarmResult<FarmMetrics> {
        let start = Instant::now();
        let lp = self.fetch_lp_reads(farm).await?;
        let allocation = match farm.pid {
            Some(pid) => Some(self.fetch_pool_allocation(pid).await?),
            None => None,
        };

        let metrics = calculate_farm_metrics(&lp, allocation.as_ref())?;
        info!(
            farm = %farm.lp_symbol,
            pid = ?farm.pid,
            elapsed_ms = start.elapsed().as_millis() as u64,
            multiplier = %metrics.multiplier,
            "Fetched farm"
        );
        Ok(metrics)
    }

    async fn fetch_lp_reads(&self, farm: &FarmDescriptor) -> FarmResult<LpTokenReads> {
        let chain_id = self.inner.chain_id;
        let lp_address = farm.lp_addresses.resolve(chain_id)?;
        let token_address = farm.token.address.resolve(chain_id)?;
        let quote_token_address = farm.quote_token.address.resolve(chain_id)?;

        let calls = [
            Call::new(token_address, "balanceOf").param(DynSolValue::Address(lp_address)),
            Call::new(quote_token_address, "balanceOf").param(DynSolValue::Address(lp_address)),
            Call::new(lp_address, "balanceOf").param(DynSolValue::Address(self.inner.masterchef)),
            Call::new(lp_address, "totalSupply"),
            Call::new(token_address, "decimals"),
            Call::new(quote_token_address, "decimals"),
        ];

        debug!(farm = %farm.lp_symbol, lp = %lp_address, "Fetching LP balances");
        let results = self.inner.multicall.multicall(&self.inner.erc20_abi, &calls).await?;
        let uint = |i: usize| uint_at(&results[i], 0, &calls[i].method);

        Ok(LpTokenReads {
            token_balance: uint(0)?,
            quote_token_balance: uint(1)?,
            lp_balance_staked: uint(2)?,
            lp_total_supply: uint(3)?,
            token_decimals: decimals(uint(4)?)?,
            quote_token_decimals: decimals(uint(5)?)?,
        })
    }

    async fn fetch_pool_allocation(&self, pid: u32) -> FarmResult<PoolAllocation> {
        let masterchef = self.inner.masterchef;
        let calls = [
            Call::new(masterchef, "poolInfo").param(DynSolValue::Uint(U256::from(pid), 256)),
            Call::new(masterchef, "totalAllocPoint"),
        ];

        debug!(pid, "Fetching pool allocation");
        let results = self.inner.multicall.multicall(&self.inner.masterchef_abi, &calls).await?;
        let alloc_point_index = output_position(&self.inner.masterchef_abi, "poolInfo", "allocPoint")?;

        Ok(PoolAllocation {
            alloc_point: uint_at(&results[0], alloc_point_index, "poolInfo")?,
            total_alloc_point: uint_at(&results[1], 0, "totalAllocPoint")?,
        })
    }
}

fn decimals(value: U256) -> FarmResult<u32> {
    u32::try_from(value).map_err(|_| {
        FarmError::parsing(
            format!("token decimals {}", value),
            anyhow::anyhow!("decimals out of range"),
        )
    })
}
