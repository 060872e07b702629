//! A cw20 stand-in that accepts every transfer and, once armed, calls back
//! into a target contract from inside the transfer. It never moves balances.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, SubMsg,
    SubMsgResult, Uint128, WasmMsg,
};
use cw_storage_plus::Item;

const REENTRY_REPLY_ID: u64 = 1;

#[cw_serde]
struct Trap {
    target: String,
    payload: Binary,
}

const TRAP: Item<Trap> = Item::new("trap");
const OUTCOME: Item<String> = Item::new("outcome");

/// Recorded when the callback succeeded.
pub const REENTRY_ACCEPTED: &str = "accepted";

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// The next transfer replays `payload` against `target`, once.
    Arm { target: String, payload: Binary },
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Error text of the rejected callback, or `accepted`.
    #[returns(Option<String>)]
    ReentryOutcome {},
}

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Arm { target, payload } => {
            TRAP.save(deps.storage, &Trap { target, payload })?;
            Ok(Response::new().add_attribute("action", "arm"))
        }
        ExecuteMsg::Transfer { .. } | ExecuteMsg::TransferFrom { .. } => {
            let Some(trap) = TRAP.may_load(deps.storage)? else {
                return Ok(Response::new().add_attribute("action", "transfer"));
            };
            TRAP.remove(deps.storage);
            let callback = WasmMsg::Execute {
                contract_addr: trap.target,
                msg: trap.payload,
                funds: vec![],
            };
            Ok(Response::new()
                .add_submessage(SubMsg::reply_always(callback, REENTRY_REPLY_ID))
                .add_attribute("action", "transfer_with_callback"))
        }
    }
}

pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> StdResult<Response> {
    let outcome = match msg.result {
        SubMsgResult::Ok(_) => REENTRY_ACCEPTED.to_string(),
        SubMsgResult::Err(err) => err,
    };
    OUTCOME.save(deps.storage, &outcome)?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ReentryOutcome {} => to_json_binary(&OUTCOME.may_load(deps.storage)?),
    }
}
