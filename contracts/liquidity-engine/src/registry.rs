//! Registered base assets, their price-feed bindings and the shared quote side.

use cosmwasm_std::{Addr, Api, Deps, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{Pool, CONFIG, FEEDS, POOLS};

pub(crate) const DEFAULT_LIMIT: u32 = 10;
pub(crate) const MAX_LIMIT: u32 = 30;

/// Validated registry input, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Registration {
    pub quote_asset: Addr,
    pub quote_feed: Addr,
    pub bindings: Vec<(Addr, Addr)>,
}

/// Validates the construction-time registry arrays. Lengths are checked
/// before any address so a mismatch is always reported as such.
pub(crate) fn validate_registration(
    api: &dyn Api,
    base_assets: &[String],
    base_feeds: &[String],
    quote_asset: &str,
    quote_feed: &str,
) -> Result<Registration, ContractError> {
    if base_assets.len() != base_feeds.len() {
        return Err(ContractError::LengthMismatch {
            assets: base_assets.len(),
            feeds: base_feeds.len(),
        });
    }
    let quote_asset = api.addr_validate(quote_asset)?;
    let quote_feed = api.addr_validate(quote_feed)?;

    let bindings = base_assets
        .iter()
        .zip(base_feeds)
        .map(|(asset, feed)| {
            let asset = api.addr_validate(asset)?;
            if asset == quote_asset {
                return Err(ContractError::IdenticalAssets {
                    asset: asset.into_string(),
                });
            }
            Ok((asset, api.addr_validate(feed)?))
        })
        .collect::<Result<Vec<_>, ContractError>>()?;

    Ok(Registration {
        quote_asset,
        quote_feed,
        bindings,
    })
}

/// Writes feed bindings and creates zero-valued pools for new base assets.
/// A repeated base asset keeps its pool record and takes the later feed.
pub(crate) fn register(
    storage: &mut dyn Storage,
    registration: &Registration,
) -> Result<(), ContractError> {
    FEEDS.save(
        storage,
        &registration.quote_asset,
        &registration.quote_feed,
    )?;
    for (asset, feed) in &registration.bindings {
        FEEDS.save(storage, asset, feed)?;
        if !POOLS.has(storage, asset) {
            POOLS.save(storage, asset, &Pool::default())?;
        }
    }
    Ok(())
}

pub(crate) fn exists(storage: &dyn Storage, base_asset: &Addr) -> bool {
    POOLS.has(storage, base_asset)
}

/// Resolves a caller-supplied base asset to its pool, or `PoolNotFound`.
pub(crate) fn load_pool(
    deps: Deps,
    base_asset: &str,
) -> Result<(Addr, Pool), ContractError> {
    let not_found = || ContractError::PoolNotFound {
        base_asset: base_asset.to_string(),
    };
    let asset = deps.api.addr_validate(base_asset).map_err(|_| not_found())?;
    if !exists(deps.storage, &asset) {
        return Err(not_found());
    }
    let pool = POOLS.load(deps.storage, &asset)?;
    Ok((asset, pool))
}

/// Feed bindings for a pool: `(base_feed, quote_feed)`.
pub(crate) fn feeds_for(
    storage: &dyn Storage,
    base_asset: &Addr,
) -> Result<(Addr, Addr), ContractError> {
    let cfg = CONFIG.load(storage)?;
    let base_feed = FEEDS.load(storage, base_asset)?;
    Ok((base_feed, cfg.quote_feed))
}

pub(crate) fn list_pools(
    storage: &dyn Storage,
    start_after: Option<&Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<(Addr, Pool)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    POOLS
        .range(storage, start_after.map(Bound::exclusive), None, Order::Ascending)
        .take(limit)
        .collect()
}
