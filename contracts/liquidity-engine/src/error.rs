use cosmwasm_std::{
    Addr, CheckedMultiplyFractionError, CheckedMultiplyRatioError, DivideByZeroError,
    OverflowError, StdError, Uint128,
};
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    DivideByZeroError(#[from] DivideByZeroError),

    #[error("{0}")]
    ConversionOverflowError(#[from] cosmwasm_std::ConversionOverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Amounts must be greater than zero")]
    ZeroAmount {},

    #[error("No pool registered for base asset {base_asset}")]
    PoolNotFound { base_asset: String },

    #[error("Price feed {feed} returned a stale or invalid reading")]
    StalePrice { feed: Addr },

    #[error("Deposit sides out of tolerance: base worth {value_base}, quote worth {value_quote}")]
    ToleranceBreached {
        value_base: Uint128,
        value_quote: Uint128,
    },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow {},

    #[error("Share mint failed: {reason}")]
    MintFailed { reason: String },

    #[error("Share burn failed: {reason}")]
    BurnFailed { reason: String },

    #[error("Asset transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Insufficient shares: requested {requested}, recorded {available}")]
    InsufficientShares {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Base asset list has {assets} entries but feed list has {feeds}")]
    LengthMismatch { assets: usize, feeds: usize },

    #[error("Bookkeeping desync: engine recorded {recorded} shares, ledger reports {ledger}")]
    BookkeepingDesync { recorded: Uint128, ledger: Uint128 },

    #[error("Reentrant call rejected: an accounting operation is already in flight")]
    Reentrancy {},

    #[error("Base asset {asset} cannot be the quote asset")]
    IdenticalAssets { asset: String },

    #[error(
        "Unauthorized (expected share token: {expected}) - Only the share token can trigger withdraw"
    )]
    UnauthorizedShareToken { expected: Addr },

    #[error("Engine is not initialized with a share token address yet")]
    NotInitialized {},

    #[error("Share token address already set")]
    ShareTokenAlreadySet {},

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Missing reply data")]
    MissingReplyData {},

    #[error("Error parsing instantiate reply: {0}")]
    ParseInstantiateReplyError(#[from] ParseReplyError),

    #[error("CW20 token query failed for contract {contract}: {error}")]
    TokenQueryFailed { contract: Addr, error: StdError },
}

impl From<OverflowError> for ContractError {
    fn from(_: OverflowError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}

impl From<CheckedMultiplyFractionError> for ContractError {
    fn from(_: CheckedMultiplyFractionError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}

impl From<CheckedMultiplyRatioError> for ContractError {
    fn from(_: CheckedMultiplyRatioError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}
