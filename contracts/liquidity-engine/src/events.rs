use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};

#[cw_serde]
pub struct DepositRecordedEvent {
    pub sender: Addr,
    pub base_asset: Addr,
    pub quote_asset: Addr,
    pub base_amount: Uint128,
    pub quote_amount: Uint128,
    pub shares_minted: Uint128,
}

impl From<DepositRecordedEvent> for Event {
    fn from(val: DepositRecordedEvent) -> Self {
        Event::new("deposit_recorded")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("base_asset", val.base_asset.into_string())
            .add_attribute("quote_asset", val.quote_asset.into_string())
            .add_attribute("base_amount", val.base_amount.to_string())
            .add_attribute("quote_amount", val.quote_amount.to_string())
            .add_attribute("shares_minted", val.shares_minted.to_string())
    }
}

#[cw_serde]
pub struct WithdrawalRecordedEvent {
    pub sender: Addr,
    pub base_asset: Addr,
    pub quote_asset: Addr,
    pub shares_burned: Uint128,
    pub base_amount: Uint128,
    pub quote_amount: Uint128,
    /// USD value of the released amounts at the prices used for the withdrawal
    pub redeemed_usd: Uint128,
}

impl From<WithdrawalRecordedEvent> for Event {
    fn from(val: WithdrawalRecordedEvent) -> Self {
        Event::new("withdrawal_recorded")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("base_asset", val.base_asset.into_string())
            .add_attribute("quote_asset", val.quote_asset.into_string())
            .add_attribute("shares_burned", val.shares_burned.to_string())
            .add_attribute("base_amount", val.base_amount.to_string())
            .add_attribute("quote_amount", val.quote_amount.to_string())
            .add_attribute("redeemed_usd", val.redeemed_usd.to_string())
    }
}
