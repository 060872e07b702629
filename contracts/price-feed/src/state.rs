use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:cw-price-feed";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest native precision that still fits an 18-decimal `Decimal`.
pub const MAX_DECIMALS: u8 = 18;

#[cw_serde]
pub struct Config {
    /// Address allowed to push answers and reconfigure the feed
    pub admin: Addr,
    /// Precision of the raw answers pushed by the admin
    pub decimals: u8,
    /// How long an answer stays usable, in seconds
    pub max_age_seconds: u64,
}

/// Last raw answer, kept in the feed's native precision.
#[cw_serde]
pub struct Observation {
    pub answer: Uint128,
    pub updated_at: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const LATEST: Item<Observation> = Item::new("latest");
