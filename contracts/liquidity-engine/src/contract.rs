use crate::execute::{
    execute_cw20_receive, execute_deposit_liquidity, execute_instantiate,
    execute_withdraw_liquidity,
};
use crate::query::{
    query_config, query_pool, query_pool_value, query_pools, query_share_balance,
    query_simulate_deposit,
};
use crate::reply::handle_reply;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

// --- Entry Points ---

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    execute_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositLiquidity {
            base_asset,
            base_amount,
            quote_amount,
        } => execute_deposit_liquidity(deps, env, info, base_asset, base_amount, quote_amount),
        ExecuteMsg::WithdrawLiquidity {
            base_asset,
            share_amount,
        } => execute_withdraw_liquidity(deps, info, base_asset, share_amount),
        ExecuteMsg::Receive(cw20_msg) => execute_cw20_receive(deps, info, cw20_msg),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Pool { base_asset } => query_pool(deps, base_asset),
        QueryMsg::Pools { start_after, limit } => query_pools(deps, start_after, limit),
        QueryMsg::ShareBalance { base_asset, holder } => {
            query_share_balance(deps, base_asset, holder)
        }
        QueryMsg::PoolValue { base_asset } => query_pool_value(deps, base_asset),
        QueryMsg::SimulateDeposit {
            base_asset,
            base_amount,
            quote_amount,
        } => query_simulate_deposit(deps, base_asset, base_amount, quote_amount),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_reply(deps, msg)
}
