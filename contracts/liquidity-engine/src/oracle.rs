use cosmwasm_std::{Addr, Decimal, QuerierWrapper, Uint128};
use price_feed::msg::{PriceResponse, QueryMsg as FeedQueryMsg};

use crate::calculations::value_in_usd;
use crate::error::ContractError;

/// Fetches a fresh price from a feed. Stale or zero readings are a hard
/// failure; there is no fallback price.
pub(crate) fn fresh_price(
    querier: &QuerierWrapper,
    feed: &Addr,
) -> Result<Decimal, ContractError> {
    let reading: PriceResponse = querier
        .query_wasm_smart(feed, &FeedQueryMsg::LatestPrice {})
        .map_err(|_| ContractError::StalePrice { feed: feed.clone() })?;
    if !reading.is_fresh || reading.price.is_zero() {
        return Err(ContractError::StalePrice { feed: feed.clone() });
    }
    Ok(reading.price)
}

/// USD value of `amount` units priced by `feed`.
pub(crate) fn usd_value(
    querier: &QuerierWrapper,
    feed: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let price = fresh_price(querier, feed)?;
    value_in_usd(price, amount)
}

/// Both prices of a pool, read once per operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PairPrices {
    pub base: Decimal,
    pub quote: Decimal,
}

impl PairPrices {
    pub(crate) fn fetch(
        querier: &QuerierWrapper,
        base_feed: &Addr,
        quote_feed: &Addr,
    ) -> Result<Self, ContractError> {
        Ok(PairPrices {
            base: fresh_price(querier, base_feed)?,
            quote: fresh_price(querier, quote_feed)?,
        })
    }

    /// USD value of a `(base, quote)` amount pair.
    pub(crate) fn value_of(
        &self,
        base_amount: Uint128,
        quote_amount: Uint128,
    ) -> Result<(Uint128, Uint128), ContractError> {
        Ok((
            value_in_usd(self.base, base_amount)?,
            value_in_usd(self.quote, quote_amount)?,
        ))
    }
}
