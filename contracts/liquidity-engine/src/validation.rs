use crate::error::ContractError;
use cosmwasm_std::{Storage, Uint128};

use crate::state::ACCOUNTING_GUARD;

/// Allowed deviation between the two sides of a deposit, in basis points.
pub(crate) const TOLERANCE_BPS: u128 = 100;
const BPS_DENOMINATOR: u128 = 10_000;

/// Both deposit legs must be non-zero.
pub(crate) fn validate_deposit_amounts(
    base_amount: Uint128,
    quote_amount: Uint128,
) -> Result<(), ContractError> {
    if base_amount.is_zero() || quote_amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    Ok(())
}

/// Rejects a deposit unless
/// `value_quote * 0.99 <= value_base <= value_quote * 1.01`.
/// Compared in 256-bit integers, so neither bound is rounded.
pub(crate) fn validate_tolerance(
    value_base: Uint128,
    value_quote: Uint128,
) -> Result<(), ContractError> {
    let scaled_base = value_base.full_mul(BPS_DENOMINATOR);
    let lower = value_quote.full_mul(BPS_DENOMINATOR - TOLERANCE_BPS);
    let upper = value_quote.full_mul(BPS_DENOMINATOR + TOLERANCE_BPS);
    if scaled_base < lower || scaled_base > upper {
        return Err(ContractError::ToleranceBreached {
            value_base,
            value_quote,
        });
    }
    Ok(())
}

/// Checks a redemption request against the holder's recorded claim.
pub(crate) fn validate_withdraw_amount(
    share_amount: Uint128,
    recorded_balance: Uint128,
) -> Result<(), ContractError> {
    if share_amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    if recorded_balance < share_amount {
        return Err(ContractError::InsufficientShares {
            requested: share_amount,
            available: recorded_balance,
        });
    }
    Ok(())
}

/// The ledger supply must equal everything this engine ever issued minus
/// what it redeemed. Any drift is fatal for the operation.
pub(crate) fn ensure_ledger_in_sync(
    recorded: Uint128,
    ledger: Uint128,
) -> Result<(), ContractError> {
    if recorded != ledger {
        return Err(ContractError::BookkeepingDesync { recorded, ledger });
    }
    Ok(())
}

/// Fails while another accounting operation still has messages in flight.
pub(crate) fn ensure_not_reentrant(storage: &dyn Storage) -> Result<(), ContractError> {
    if ACCOUNTING_GUARD.exists(storage) {
        return Err(ContractError::Reentrancy {});
    }
    Ok(())
}
