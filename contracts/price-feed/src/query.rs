use crate::msg::PriceResponse;
use crate::state::{Config, CONFIG, LATEST};
use cosmwasm_std::{
    to_json_binary, Binary, Decimal, DecimalRangeExceeded, Deps, Env, StdResult, Uint128,
};

// --- Query Handlers ---

pub(crate) fn query_latest_price(deps: Deps, env: Env) -> StdResult<Binary> {
    to_json_binary(&latest_price(deps, &env)?)
}

pub(crate) fn query_config(deps: Deps) -> StdResult<Binary> {
    let cfg: Config = CONFIG.load(deps.storage)?;
    to_json_binary(&cfg)
}

/// Builds the normalised reading. A feed that never received an answer
/// reports a zero price that is not fresh.
pub(crate) fn latest_price(deps: Deps, env: &Env) -> StdResult<PriceResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let Some(observation) = LATEST.may_load(deps.storage)? else {
        return Ok(PriceResponse {
            price: Decimal::zero(),
            is_fresh: false,
            updated_at: None,
        });
    };

    let price = normalize_answer(observation.answer, cfg.decimals)
        .map_err(|e| cosmwasm_std::StdError::generic_err(e.to_string()))?;
    let now = env.block.time;
    // An answer stamped in the future is as untrustworthy as an old one.
    let is_fresh = !price.is_zero()
        && observation.updated_at <= now
        && now.seconds() - observation.updated_at.seconds() <= cfg.max_age_seconds;

    Ok(PriceResponse {
        price,
        is_fresh,
        updated_at: Some(observation.updated_at),
    })
}

/// Rescales a raw answer with `decimals` places into an 18-decimal `Decimal`.
pub(crate) fn normalize_answer(
    answer: Uint128,
    decimals: u8,
) -> Result<Decimal, DecimalRangeExceeded> {
    Decimal::from_atomics(answer, decimals as u32)
}
