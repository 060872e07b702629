use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Event, Timestamp, Uint128};

#[cw_serde]
pub struct PriceUpdatedEvent {
    pub admin: Addr,
    pub answer: Uint128,
    pub price: Decimal,
    pub updated_at: Timestamp,
}

impl From<PriceUpdatedEvent> for Event {
    fn from(val: PriceUpdatedEvent) -> Self {
        Event::new("price_updated")
            .add_attribute("admin", val.admin.into_string())
            .add_attribute("answer", val.answer.to_string())
            .add_attribute("price", val.price.to_string())
            .add_attribute("updated_at", val.updated_at.seconds().to_string())
    }
}
