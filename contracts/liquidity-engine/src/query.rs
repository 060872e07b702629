use crate::error::ContractError;
use crate::execute::quote_deposit;
use crate::msg::{
    ConfigResponse, PoolResponse, PoolValueResponse, PoolsResponse, ShareBalanceResponse,
    SimulateDepositResponse,
};
use crate::oracle::usd_value;
use crate::registry::{feeds_for, list_pools, load_pool};
use crate::state::{Pool, CONFIG, FEEDS, SHARE_BALANCES};
use crate::validation::validate_deposit_amounts;
use cosmwasm_std::{to_json_binary, Addr, Binary, Deps, StdError, StdResult, Uint128};

// --- Query Handler Implementations ---

pub(crate) fn query_config(deps: Deps) -> StdResult<Binary> {
    let cfg = CONFIG.load(deps.storage)?;
    to_json_binary(&ConfigResponse {
        quote_asset: cfg.quote_asset,
        quote_feed: cfg.quote_feed,
        share_token: cfg.share_token,
    })
}

pub(crate) fn query_pool(deps: Deps, base_asset: String) -> StdResult<Binary> {
    let (base_asset, pool) = load_pool(deps, &base_asset).map_err(into_std)?;
    to_json_binary(&pool_response(deps, base_asset, pool)?)
}

pub(crate) fn query_pools(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let pools = list_pools(deps.storage, start_after.as_ref(), limit)?
        .into_iter()
        .map(|(base_asset, pool)| pool_response(deps, base_asset, pool))
        .collect::<StdResult<Vec<_>>>()?;
    to_json_binary(&PoolsResponse { pools })
}

pub(crate) fn query_share_balance(
    deps: Deps,
    base_asset: String,
    holder: String,
) -> StdResult<Binary> {
    let (base_asset, _) = load_pool(deps, &base_asset).map_err(into_std)?;
    let holder = deps.api.addr_validate(&holder)?;
    let balance = SHARE_BALANCES
        .may_load(deps.storage, (&base_asset, &holder))?
        .unwrap_or_default();
    to_json_binary(&ShareBalanceResponse { balance })
}

pub(crate) fn query_pool_value(deps: Deps, base_asset: String) -> StdResult<Binary> {
    let resp = pool_value(deps, &base_asset).map_err(into_std)?;
    to_json_binary(&resp)
}

pub(crate) fn query_simulate_deposit(
    deps: Deps,
    base_asset: String,
    base_amount: Uint128,
    quote_amount: Uint128,
) -> StdResult<Binary> {
    let simulate = || -> Result<SimulateDepositResponse, ContractError> {
        validate_deposit_amounts(base_amount, quote_amount)?;
        let (base_asset, pool) = load_pool(deps, &base_asset)?;
        let quote = quote_deposit(deps, &base_asset, &pool, base_amount, quote_amount)?;
        Ok(SimulateDepositResponse {
            value_base: quote.value_base,
            value_quote: quote.value_quote,
            shares: quote.shares,
        })
    };
    to_json_binary(&simulate().map_err(into_std)?)
}

// --- Internal Helpers ---

fn pool_value(deps: Deps, base_asset: &str) -> Result<PoolValueResponse, ContractError> {
    let (base_asset, pool) = load_pool(deps, base_asset)?;
    let (base_feed, quote_feed) = feeds_for(deps.storage, &base_asset)?;
    let base_reserve_usd = usd_value(&deps.querier, &base_feed, pool.base_reserve)?;
    let quote_reserve_usd = usd_value(&deps.querier, &quote_feed, pool.quote_reserve)?;
    Ok(PoolValueResponse {
        base_reserve_usd,
        quote_reserve_usd,
        total_usd: base_reserve_usd.checked_add(quote_reserve_usd)?,
    })
}

fn pool_response(deps: Deps, base_asset: Addr, pool: Pool) -> StdResult<PoolResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let base_feed = FEEDS.load(deps.storage, &base_asset)?;
    Ok(PoolResponse {
        base_asset,
        base_feed,
        quote_asset: cfg.quote_asset,
        base_reserve: pool.base_reserve,
        quote_reserve: pool.quote_reserve,
        total_shares: pool.total_shares,
        last_observed_share_supply: pool.last_observed_share_supply,
    })
}

fn into_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        other => StdError::generic_err(other.to_string()),
    }
}
