use cosmwasm_std::{DepsMut, Reply, Response, StdError, SubMsgResult};
use cw_utils::parse_instantiate_response_data;

use crate::error::ContractError;
use crate::state::{
    AccountingGuard, ACCOUNTING_GUARD, BURN_SHARES_REPLY_ID, CONFIG, CUSTODY_TRANSFER_REPLY_ID,
    INSTANTIATE_SHARE_TOKEN_REPLY_ID, MINT_SHARES_REPLY_ID,
};

pub fn handle_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_SHARE_TOKEN_REPLY_ID => handle_share_token_instantiate_reply(deps, msg),
        MINT_SHARES_REPLY_ID | BURN_SHARES_REPLY_ID | CUSTODY_TRANSFER_REPLY_ID => {
            settle_accounting_step(deps, msg)
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn handle_share_token_instantiate_reply(
    deps: DepsMut,
    msg: Reply,
) -> Result<Response, ContractError> {
    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    #[allow(deprecated)]
    let data = result.data.ok_or(ContractError::MissingReplyData {})?;
    let res = parse_instantiate_response_data(&data)?;
    let share_token = deps.api.addr_validate(&res.contract_address)?;

    CONFIG.update(deps.storage, |mut cfg| -> Result<_, ContractError> {
        if cfg.share_token.is_some() {
            return Err(ContractError::ShareTokenAlreadySet {});
        }
        cfg.share_token = Some(share_token.clone());
        Ok(cfg)
    })?;

    Ok(Response::new()
        .add_attribute("action", "share_token_instantiated")
        .add_attribute("share_token_address", share_token))
}

/// A failed mint, burn or custody transfer aborts the whole operation under
/// its own error. A successful one counts down the guard.
fn settle_accounting_step(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if let SubMsgResult::Err(reason) = msg.result {
        return Err(match msg.id {
            MINT_SHARES_REPLY_ID => ContractError::MintFailed { reason },
            BURN_SHARES_REPLY_ID => ContractError::BurnFailed { reason },
            _ => ContractError::TransferFailed { reason },
        });
    }

    let remaining = match ACCOUNTING_GUARD.may_load(deps.storage)? {
        Some(guard) if guard.pending_steps > 1 => {
            let pending_steps = guard.pending_steps - 1;
            ACCOUNTING_GUARD.save(deps.storage, &AccountingGuard { pending_steps })?;
            pending_steps
        }
        _ => {
            ACCOUNTING_GUARD.remove(deps.storage);
            deps.api.debug("liquidity-engine: accounting guard released");
            0
        }
    };

    Ok(Response::new()
        .add_attribute("action", "settle_accounting_step")
        .add_attribute("pending_steps", remaining.to_string()))
}
