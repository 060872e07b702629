use crate::state::{
    BURN_SHARES_REPLY_ID, CUSTODY_TRANSFER_REPLY_ID, INSTANTIATE_SHARE_TOKEN_REPLY_ID,
    MINT_SHARES_REPLY_ID,
};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Env, StdResult, SubMsg, Uint128, WasmMsg};
use cw20::{Cw20ExecuteMsg, MinterResponse};

pub(crate) const SHARE_TOKEN_NAME: &str = "Liquidity Engine Share";
pub(crate) const SHARE_TOKEN_SYMBOL: &str = "LESHARE";
pub(crate) const SHARE_TOKEN_DECIMALS: u8 = 18;

fn cw20_execute(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }
    .into())
}

/// Mint on the share ledger. Settled through the mint reply.
pub(crate) fn create_mint_submsg(
    share_token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<SubMsg> {
    let msg = cw20_execute(
        share_token,
        &Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        },
    )?;
    Ok(SubMsg::reply_always(msg, MINT_SHARES_REPLY_ID))
}

/// Where the shares being redeemed currently sit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BurnSource {
    /// Sent to the engine through the cw20 `Send` hook.
    EngineHeld,
    /// Still with the holder; burned through the allowance they granted.
    Holder(Addr),
}

/// Burn on the share ledger. Settled through the burn reply.
pub(crate) fn create_burn_submsg(
    share_token: &Addr,
    source: &BurnSource,
    amount: Uint128,
) -> StdResult<SubMsg> {
    let burn = match source {
        BurnSource::EngineHeld => Cw20ExecuteMsg::Burn { amount },
        BurnSource::Holder(owner) => Cw20ExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount,
        },
    };
    let msg = cw20_execute(share_token, &burn)?;
    Ok(SubMsg::reply_always(msg, BURN_SHARES_REPLY_ID))
}

/// Pulls `amount` of `asset` from `owner` into engine custody. Needs a prior allowance.
pub(crate) fn create_pull_submsg(
    asset: &Addr,
    owner: &Addr,
    env: &Env,
    amount: Uint128,
) -> StdResult<SubMsg> {
    let msg = cw20_execute(
        asset,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        },
    )?;
    Ok(SubMsg::reply_always(msg, CUSTODY_TRANSFER_REPLY_ID))
}

/// Pushes `amount` of `asset` out of engine custody to `recipient`.
pub(crate) fn create_push_submsg(
    asset: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<SubMsg> {
    let msg = cw20_execute(
        asset,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    )?;
    Ok(SubMsg::reply_always(msg, CUSTODY_TRANSFER_REPLY_ID))
}

/// Creates the SubMsg used to instantiate the share token, with this contract as sole minter.
pub(crate) fn create_share_token_instantiate_submsg(
    share_token_code_id: u64,
    env: &Env,
) -> StdResult<SubMsg> {
    let share_instantiate_msg = cw20_base::msg::InstantiateMsg {
        name: SHARE_TOKEN_NAME.to_string(),
        symbol: SHARE_TOKEN_SYMBOL.to_string(),
        decimals: SHARE_TOKEN_DECIMALS,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: env.contract.address.to_string(),
            cap: None,
        }),
        marketing: None,
    };
    let submsg = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: share_token_code_id,
        msg: to_json_binary(&share_instantiate_msg)?,
        funds: vec![],
        label: format!("{} ({})", SHARE_TOKEN_NAME, env.contract.address),
    };
    Ok(SubMsg::reply_on_success(
        submsg,
        INSTANTIATE_SHARE_TOKEN_REPLY_ID,
    ))
}
