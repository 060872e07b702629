use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Timestamp, Uint128};

use crate::state::Config;

/// Instantiate message for a single-asset price feed.
#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating address.
    pub admin: Option<String>,
    pub decimals: u8,
    pub max_age_seconds: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Push a new raw answer expressed in the feed's native precision.
    UpdatePrice { answer: Uint128 },
    /// Change how long an answer is considered fresh.
    UpdateMaxAge { max_age_seconds: u64 },
    /// Update admin.
    UpdateAdmin { new_admin: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Latest answer normalised to 18 decimals, with its freshness verdict.
    #[returns(PriceResponse)]
    LatestPrice {},
    #[returns(Config)]
    Config {},
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Decimal,
    pub is_fresh: bool,
    pub updated_at: Option<Timestamp>,
}
