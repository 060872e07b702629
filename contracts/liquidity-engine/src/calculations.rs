use crate::error::ContractError;
use cosmwasm_std::{Decimal, DivideByZeroError, Uint128};

/// Converts an asset amount into USD at an 18-decimal price, rounding down.
pub(crate) fn value_in_usd(price: Decimal, amount: Uint128) -> Result<Uint128, ContractError> {
    Ok(amount.checked_mul_floor(price)?)
}

/// Shares for the first deposit into an empty pool: one share per USD deposited.
pub(crate) fn calculate_bootstrap_shares(
    value_base: Uint128,
    value_quote: Uint128,
) -> Result<Uint128, ContractError> {
    Ok(value_base.checked_add(value_quote)?)
}

/// Shares for a deposit into a pool that already has holders:
/// `deposit_value * existing_supply / pool_value_after`, rounded down.
/// `pool_value_after` already includes the deposit.
pub(crate) fn calculate_proportional_shares(
    deposit_value: Uint128,
    existing_supply: Uint128,
    pool_value_after: Uint128,
) -> Result<Uint128, ContractError> {
    if pool_value_after.is_zero() {
        return Err(DivideByZeroError {}.into());
    }
    Ok(deposit_value.checked_multiply_ratio(existing_supply, pool_value_after)?)
}

/// Picks the bootstrap or proportional rule depending on existing supply.
pub(crate) fn calculate_shares_to_mint(
    value_base: Uint128,
    value_quote: Uint128,
    existing_supply: Uint128,
    pool_value_after: Uint128,
) -> Result<Uint128, ContractError> {
    let deposit_value = calculate_bootstrap_shares(value_base, value_quote)?;
    if existing_supply.is_zero() {
        return Ok(deposit_value);
    }
    calculate_proportional_shares(deposit_value, existing_supply, pool_value_after)
}

/// Calculates the base and quote amounts released for redeeming `share_amount`
/// out of `total_shares`. Both legs round down.
pub(crate) fn calculate_withdraw_amounts(
    share_amount: Uint128,
    base_reserve: Uint128,
    quote_reserve: Uint128,
    total_shares: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    if total_shares.is_zero() {
        return Err(DivideByZeroError {}.into());
    }
    let base_out = base_reserve.checked_multiply_ratio(share_amount, total_shares)?;
    let quote_out = quote_reserve.checked_multiply_ratio(share_amount, total_shares)?;
    Ok((base_out, quote_out))
}
