use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

/// Construction-time registry population plus the share token code to instantiate.
#[cw_serde]
pub struct InstantiateMsg {
    pub base_assets: Vec<String>,
    /// One price feed per entry in `base_assets`, same order
    pub base_feeds: Vec<String>,
    pub quote_asset: String,
    pub quote_feed: String,
    /// Code ID of the cw20 contract used as share ledger
    pub share_token_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit both sides of a pool. The engine must hold cw20 allowances
    /// for both amounts.
    DepositLiquidity {
        base_asset: String,
        base_amount: Uint128,
        quote_amount: Uint128,
    },
    /// Redeem shares still held by the caller. The engine must hold a share
    /// allowance for `share_amount`.
    WithdrawLiquidity {
        base_asset: String,
        share_amount: Uint128,
    },
    Receive(Cw20ReceiveMsg),
}

// Hook message for shares sent to the engine
#[cw_serde]
pub enum Cw20HookMsg {
    WithdrawLiquidity { base_asset: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PoolResponse)]
    Pool { base_asset: String },
    #[returns(PoolsResponse)]
    Pools {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ShareBalanceResponse)]
    ShareBalance { base_asset: String, holder: String },
    /// USD value of a pool's reserves at current fresh prices.
    #[returns(PoolValueResponse)]
    PoolValue { base_asset: String },
    /// Shares a deposit would mint right now, without side effects.
    #[returns(SimulateDepositResponse)]
    SimulateDeposit {
        base_asset: String,
        base_amount: Uint128,
        quote_amount: Uint128,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub quote_asset: Addr,
    pub quote_feed: Addr,
    pub share_token: Option<Addr>,
}

#[cw_serde]
pub struct PoolResponse {
    pub base_asset: Addr,
    pub base_feed: Addr,
    pub quote_asset: Addr,
    pub base_reserve: Uint128,
    pub quote_reserve: Uint128,
    pub total_shares: Uint128,
    pub last_observed_share_supply: Uint128,
}

#[cw_serde]
pub struct PoolsResponse {
    pub pools: Vec<PoolResponse>,
}

#[cw_serde]
pub struct ShareBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct PoolValueResponse {
    pub base_reserve_usd: Uint128,
    pub quote_reserve_usd: Uint128,
    pub total_usd: Uint128,
}

#[cw_serde]
pub struct SimulateDepositResponse {
    pub value_base: Uint128,
    pub value_quote: Uint128,
    pub shares: Uint128,
}
