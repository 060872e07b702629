use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The one quote asset every pool trades against
    pub quote_asset: Addr,
    /// Price feed for the quote asset
    pub quote_feed: Addr,
    /// Share token (cw20) minted by this contract; unset until the
    /// instantiate reply lands
    pub share_token: Option<Addr>,
}

/// Per-pool accounting record, keyed by base asset.
#[cw_serde]
#[derive(Default)]
pub struct Pool {
    pub base_reserve: Uint128,
    pub quote_reserve: Uint128,
    /// Shares issued against this pool and not yet redeemed
    pub total_shares: Uint128,
    /// Ledger-wide share supply seen by the last operation on this pool
    pub last_observed_share_supply: Uint128,
}

/// Held while an accounting operation still has outbound messages in flight.
#[cw_serde]
pub struct AccountingGuard {
    pub pending_steps: u8,
}

pub const CONFIG: Item<Config> = Item::new("config");
// Key: asset address, Value: price feed address. Holds the quote binding too.
pub const FEEDS: Map<&Addr, Addr> = Map::new("feeds");
// Key: base asset
pub const POOLS: Map<&Addr, Pool> = Map::new("pools");
// Key: (base asset, holder)
pub const SHARE_BALANCES: Map<(&Addr, &Addr), Uint128> = Map::new("share_balances");
/// Sum of `Pool::total_shares` across every pool. Must match the ledger supply.
pub const TOTAL_ISSUED: Item<Uint128> = Item::new("total_issued");
pub const ACCOUNTING_GUARD: Item<AccountingGuard> = Item::new("accounting_guard");

pub const INSTANTIATE_SHARE_TOKEN_REPLY_ID: u64 = 1;
pub const MINT_SHARES_REPLY_ID: u64 = 2;
pub const BURN_SHARES_REPLY_ID: u64 = 3;
pub const CUSTODY_TRANSFER_REPLY_ID: u64 = 4;

pub const CONTRACT_NAME: &str = "crates.io:cw-liquidity-engine";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
