use crate::error::ContractError;
use crate::events::PriceUpdatedEvent;
use crate::msg::InstantiateMsg;
use crate::query::normalize_answer;
use crate::state::{
    Config, Observation, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LATEST, MAX_DECIMALS,
};
use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

pub(crate) fn execute_instantiate(
    deps: DepsMut,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::UnsupportedDecimals {
            decimals: msg.decimals,
            max: MAX_DECIMALS,
        });
    }
    if msg.max_age_seconds == 0 {
        return Err(ContractError::ZeroMaxAge {});
    }
    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };

    let cfg = Config {
        admin: admin.clone(),
        decimals: msg.decimals,
        max_age_seconds: msg.max_age_seconds,
    };
    CONFIG.save(deps.storage, &cfg)?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin.to_string())
        .add_attribute("decimals", cfg.decimals.to_string())
        .add_attribute("max_age_seconds", cfg.max_age_seconds.to_string()))
}

// --- Admin Handlers ---

pub(crate) fn execute_update_price(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    answer: Uint128,
) -> Result<Response, ContractError> {
    let cfg = load_as_admin(deps.storage, &info.sender)?;
    if answer.is_zero() {
        return Err(ContractError::ZeroAnswer {});
    }

    let price = normalize_answer(answer, cfg.decimals)?;
    let observation = Observation {
        answer,
        updated_at: env.block.time,
    };
    LATEST.save(deps.storage, &observation)?;

    Ok(Response::new()
        .add_event(PriceUpdatedEvent {
            admin: info.sender,
            answer,
            price,
            updated_at: observation.updated_at,
        })
        .add_attribute("action", "update_price"))
}

pub(crate) fn execute_update_max_age(
    deps: DepsMut,
    info: MessageInfo,
    max_age_seconds: u64,
) -> Result<Response, ContractError> {
    let mut cfg = load_as_admin(deps.storage, &info.sender)?;
    if max_age_seconds == 0 {
        return Err(ContractError::ZeroMaxAge {});
    }
    cfg.max_age_seconds = max_age_seconds;
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new()
        .add_attribute("action", "update_max_age")
        .add_attribute("max_age_seconds", max_age_seconds.to_string()))
}

pub(crate) fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: Option<String>,
) -> Result<Response, ContractError> {
    let mut cfg = load_as_admin(deps.storage, &info.sender)?;

    let new_admin = new_admin.ok_or(ContractError::AdminCannotBeNone {})?;
    cfg.admin = deps.api.addr_validate(&new_admin)?;

    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("new_admin", cfg.admin))
}

fn load_as_admin(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let cfg = CONFIG.load(storage)?;
    if cfg.admin != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(cfg)
}
