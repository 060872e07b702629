#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult};
use cw20_base::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use cw20_base::state::TOKEN_INFO;
use cw20_base::ContractError;

const CONTRACT_NAME: &str = "crates.io:cw-share-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Entry Points ---

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.mint.is_none() {
        return Err(StdError::generic_err("share ledger requires a minter").into());
    }
    let res = cw20_base::contract::instantiate(deps.branch(), env, info, msg)?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if matches!(msg, ExecuteMsg::Burn { .. } | ExecuteMsg::BurnFrom { .. }) {
        ensure_minter(deps.as_ref(), &info)?;
    }
    cw20_base::contract::execute(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    cw20_base::contract::query(deps, env, msg)
}

/// Supply only shrinks through the minter, so it always matches what the
/// minter has accounted for.
fn ensure_minter(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    match token_info.mint {
        Some(minter) if minter.minter == info.sender => Ok(()),
        _ => Err(ContractError::Unauthorized {}),
    }
}
