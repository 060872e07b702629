//! Contract wrappers shared by the integration suite.

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub mod hostile_token;

pub fn engine_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        liquidity_engine::contract::execute,
        liquidity_engine::contract::instantiate,
        liquidity_engine::contract::query,
    )
    .with_reply(liquidity_engine::contract::reply);
    Box::new(contract)
}

pub fn price_feed_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        price_feed::contract::execute,
        price_feed::contract::instantiate,
        price_feed::contract::query,
    );
    Box::new(contract)
}

pub fn share_ledger_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        share_ledger::contract::execute,
        share_ledger::contract::instantiate,
        share_ledger::contract::query,
    );
    Box::new(contract)
}

// Use cw20-base's contract for the pooled assets
pub fn cw20_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn hostile_token_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        hostile_token::execute,
        hostile_token::instantiate,
        hostile_token::query,
    )
    .with_reply(hostile_token::reply);
    Box::new(contract)
}
