use cosmwasm_std::{DecimalRangeExceeded, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    DecimalRangeExceeded(#[from] DecimalRangeExceeded),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Admin cannot be set to None.")]
    AdminCannotBeNone {},

    #[error("Feed precision {decimals} exceeds the supported maximum of {max}")]
    UnsupportedDecimals { decimals: u8, max: u8 },

    #[error("Maximum answer age must be positive")]
    ZeroMaxAge {},

    #[error("Price answer must be positive")]
    ZeroAnswer {},
}
