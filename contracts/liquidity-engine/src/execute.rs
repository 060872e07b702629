// contracts/liquidity-engine/src/execute.rs

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Deps, DepsMut, Env, MessageInfo, QueryRequest, Response,
    Storage, SubMsg, Uint128, WasmQuery,
};
use cw20::Cw20ReceiveMsg;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::events::{DepositRecordedEvent, WithdrawalRecordedEvent};
use crate::msg::{Cw20HookMsg, InstantiateMsg};
use crate::oracle::{usd_value, PairPrices};
use crate::registry::{feeds_for, load_pool, register, validate_registration};
use crate::state::{
    AccountingGuard, Config, Pool, ACCOUNTING_GUARD, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    POOLS, SHARE_BALANCES, TOTAL_ISSUED,
};

use crate::calculations::*;
use crate::messaging::*;
use crate::validation::*;

// --- Instantiate Handler ---
pub(crate) fn execute_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let registration = validate_registration(
        deps.api,
        &msg.base_assets,
        &msg.base_feeds,
        &msg.quote_asset,
        &msg.quote_feed,
    )?;
    register(deps.storage, &registration)?;

    let cfg = Config {
        quote_asset: registration.quote_asset.clone(),
        quote_feed: registration.quote_feed.clone(),
        share_token: None,
    };
    CONFIG.save(deps.storage, &cfg)?;
    TOTAL_ISSUED.save(deps.storage, &Uint128::zero())?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let sub_msg = create_share_token_instantiate_submsg(msg.share_token_code_id, &env)?;

    Ok(Response::new()
        .add_submessage(sub_msg)
        .add_attribute("action", "instantiate_liquidity_engine")
        .add_attribute("quote_asset", cfg.quote_asset)
        .add_attribute("quote_feed", cfg.quote_feed)
        .add_attribute("pools_registered", registration.bindings.len().to_string())
        .add_attribute("share_token_code_id", msg.share_token_code_id.to_string()))
}

// --- Execute Handler Implementations ---

/// Result of valuing a deposit against a pool, before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DepositQuote {
    pub value_base: Uint128,
    pub value_quote: Uint128,
    pub shares: Uint128,
    /// Pool record with reserves and issued shares already updated
    pub pool_after: Pool,
}

/// Values both legs at fresh prices, applies the tolerance band and works out
/// issuance against the post-deposit reserves. Read-only.
pub(crate) fn quote_deposit(
    deps: Deps,
    base_asset: &Addr,
    pool: &Pool,
    base_amount: Uint128,
    quote_amount: Uint128,
) -> Result<DepositQuote, ContractError> {
    let (base_feed, quote_feed) = feeds_for(deps.storage, base_asset)?;
    let prices = PairPrices::fetch(&deps.querier, &base_feed, &quote_feed)?;

    let (value_base, value_quote) = prices.value_of(base_amount, quote_amount)?;
    validate_tolerance(value_base, value_quote)?;

    let mut pool_after = pool.clone();
    pool_after.base_reserve = pool.base_reserve.checked_add(base_amount)?;
    pool_after.quote_reserve = pool.quote_reserve.checked_add(quote_amount)?;

    let (base_reserve_usd, quote_reserve_usd) =
        prices.value_of(pool_after.base_reserve, pool_after.quote_reserve)?;
    let pool_value_after = base_reserve_usd.checked_add(quote_reserve_usd)?;

    let shares =
        calculate_shares_to_mint(value_base, value_quote, pool.total_shares, pool_value_after)?;
    if shares.is_zero() {
        return Err(ContractError::MintFailed {
            reason: "deposit too small to mint any shares".to_string(),
        });
    }
    pool_after.total_shares = pool.total_shares.checked_add(shares)?;

    Ok(DepositQuote {
        value_base,
        value_quote,
        shares,
        pool_after,
    })
}

pub(crate) fn execute_deposit_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    base_asset: String,
    base_amount: Uint128,
    quote_amount: Uint128,
) -> Result<Response, ContractError> {
    // Checks
    ensure_not_reentrant(deps.storage)?;
    nonpayable(&info)?;
    validate_deposit_amounts(base_amount, quote_amount)?;
    let (base_asset, pool) = load_pool(deps.as_ref(), &base_asset)?;

    let cfg = CONFIG.load(deps.storage)?;
    let share_token = cfg.share_token.clone().ok_or(ContractError::NotInitialized {})?;
    let issued = synced_share_supply(deps.as_ref(), &share_token)?;

    let quote = quote_deposit(deps.as_ref(), &base_asset, &pool, base_amount, quote_amount)?;

    // Effects
    let mut pool = quote.pool_after;
    pool.last_observed_share_supply = issued;
    POOLS.save(deps.storage, &base_asset, &pool)?;
    SHARE_BALANCES.update(
        deps.storage,
        (&base_asset, &info.sender),
        |balance| -> Result<_, ContractError> {
            Ok(balance.unwrap_or_default().checked_add(quote.shares)?)
        },
    )?;
    TOTAL_ISSUED.save(deps.storage, &issued.checked_add(quote.shares)?)?;

    // Interactions: mint first, custody last
    let submsgs = vec![
        create_mint_submsg(&share_token, &info.sender, quote.shares)?,
        create_pull_submsg(&base_asset, &info.sender, &env, base_amount)?,
        create_pull_submsg(&cfg.quote_asset, &info.sender, &env, quote_amount)?,
    ];
    arm_guard(deps.storage, &submsgs)?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_event(DepositRecordedEvent {
            sender: info.sender.clone(),
            base_asset: base_asset.clone(),
            quote_asset: cfg.quote_asset,
            base_amount,
            quote_amount,
            shares_minted: quote.shares,
        })
        .add_attribute("action", "deposit_liquidity")
        .add_attribute("sender", info.sender)
        .add_attribute("base_asset", base_asset)
        .add_attribute("value_base", quote.value_base.to_string())
        .add_attribute("value_quote", quote.value_quote.to_string())
        .add_attribute("shares_minted", quote.shares.to_string()))
}

pub(crate) fn execute_withdraw_liquidity(
    deps: DepsMut,
    info: MessageInfo,
    base_asset: String,
    share_amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let holder = info.sender;
    withdraw_liquidity(
        deps,
        holder.clone(),
        base_asset,
        share_amount,
        BurnSource::Holder(holder),
    )
}

pub(crate) fn execute_cw20_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let share_token = cfg.share_token.ok_or(ContractError::NotInitialized {})?;
    if info.sender != share_token {
        return Err(ContractError::UnauthorizedShareToken {
            expected: share_token,
        });
    }

    match from_json(&cw20_msg.msg)? {
        Cw20HookMsg::WithdrawLiquidity { base_asset } => {
            let holder = deps.api.addr_validate(&cw20_msg.sender)?;
            withdraw_liquidity(
                deps,
                holder,
                base_asset,
                cw20_msg.amount,
                BurnSource::EngineHeld,
            )
        }
    }
}

fn withdraw_liquidity(
    deps: DepsMut,
    holder: Addr,
    base_asset: String,
    share_amount: Uint128,
    source: BurnSource,
) -> Result<Response, ContractError> {
    // Checks
    ensure_not_reentrant(deps.storage)?;
    // Claims only exist for registered pools, so an unknown asset reads as
    // an empty claim.
    let recorded_balance = match deps.api.addr_validate(&base_asset) {
        Ok(asset) => SHARE_BALANCES
            .may_load(deps.storage, (&asset, &holder))?
            .unwrap_or_default(),
        Err(_) => Uint128::zero(),
    };
    validate_withdraw_amount(share_amount, recorded_balance)?;
    let (base_asset, mut pool) = load_pool(deps.as_ref(), &base_asset)?;

    let cfg = CONFIG.load(deps.storage)?;
    let share_token = cfg.share_token.clone().ok_or(ContractError::NotInitialized {})?;
    let issued = synced_share_supply(deps.as_ref(), &share_token)?;

    let (base_out, quote_out) = calculate_withdraw_amounts(
        share_amount,
        pool.base_reserve,
        pool.quote_reserve,
        pool.total_shares,
    )?;
    let (base_feed, quote_feed) = feeds_for(deps.storage, &base_asset)?;
    let redeemed_usd = usd_value(&deps.querier, &base_feed, base_out)?
        .checked_add(usd_value(&deps.querier, &quote_feed, quote_out)?)?;

    // Effects
    pool.base_reserve = pool.base_reserve.checked_sub(base_out)?;
    pool.quote_reserve = pool.quote_reserve.checked_sub(quote_out)?;
    pool.total_shares = pool.total_shares.checked_sub(share_amount)?;
    pool.last_observed_share_supply = issued;
    POOLS.save(deps.storage, &base_asset, &pool)?;
    SHARE_BALANCES.save(
        deps.storage,
        (&base_asset, &holder),
        &recorded_balance.checked_sub(share_amount)?,
    )?;
    TOTAL_ISSUED.save(deps.storage, &issued.checked_sub(share_amount)?)?;

    // Interactions: burn first, then release custody. Zero legs are skipped
    // since cw20 rejects empty transfers.
    let mut submsgs = vec![create_burn_submsg(&share_token, &source, share_amount)?];
    if !base_out.is_zero() {
        submsgs.push(create_push_submsg(&base_asset, &holder, base_out)?);
    }
    if !quote_out.is_zero() {
        submsgs.push(create_push_submsg(&cfg.quote_asset, &holder, quote_out)?);
    }
    arm_guard(deps.storage, &submsgs)?;

    Ok(Response::new()
        .add_submessages(submsgs)
        .add_event(WithdrawalRecordedEvent {
            sender: holder.clone(),
            base_asset: base_asset.clone(),
            quote_asset: cfg.quote_asset,
            shares_burned: share_amount,
            base_amount: base_out,
            quote_amount: quote_out,
            redeemed_usd,
        })
        .add_attribute("action", "withdraw_liquidity")
        .add_attribute("sender", holder)
        .add_attribute("base_asset", base_asset)
        .add_attribute("shares_burned", share_amount.to_string())
        .add_attribute("base_out", base_out.to_string())
        .add_attribute("quote_out", quote_out.to_string()))
}

// --- Internal Helpers ---

/// Holds the guard until every outbound accounting message has settled.
fn arm_guard(storage: &mut dyn Storage, submsgs: &[SubMsg]) -> Result<(), ContractError> {
    let pending_steps =
        u8::try_from(submsgs.len()).map_err(|_| ContractError::ArithmeticOverflow {})?;
    ACCOUNTING_GUARD.save(storage, &AccountingGuard { pending_steps })?;
    Ok(())
}

/// Reads the ledger supply and checks it against everything the engine has
/// issued. Returns the agreed supply.
fn synced_share_supply(deps: Deps, share_token: &Addr) -> Result<Uint128, ContractError> {
    let ledger = query_share_supply(deps, share_token)?;
    let recorded = TOTAL_ISSUED.load(deps.storage)?;
    if let Err(err) = ensure_ledger_in_sync(recorded, ledger) {
        deps.api.debug(&format!("liquidity-engine: {err}"));
        return Err(err);
    }
    Ok(ledger)
}

/// Helper function to query the share ledger's total supply.
pub(crate) fn query_share_supply(deps: Deps, share_token: &Addr) -> Result<Uint128, ContractError> {
    use cw20::{Cw20QueryMsg, TokenInfoResponse};
    let token_info: TokenInfoResponse = deps
        .querier
        .query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: share_token.to_string(),
            msg: to_json_binary(&Cw20QueryMsg::TokenInfo {})?,
        }))
        .map_err(|error| ContractError::TokenQueryFailed {
            contract: share_token.clone(),
            error,
        })?;
    Ok(token_info.total_supply)
}
