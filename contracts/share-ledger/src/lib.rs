//! cw20 share ledger whose burns are reserved to the minter.

pub mod contract;
