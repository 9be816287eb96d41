use rayon::prelude::*;

use crate::analytic::black_scholes::price;
use crate::common::error::PricingError;
use crate::common::models::{OptionPricingRequest, OptionPricingResult};

/// Prices independent requests in parallel. The output lines up with the input;
/// a rejected request only affects its own slot.
pub fn price_batch(
    requests: &[OptionPricingRequest],
) -> Vec<Result<OptionPricingResult, PricingError>> {
    tracing::debug!(requests = requests.len(), "pricing batch");
    requests.par_iter().map(price).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    pub strike: f64,
    pub maturity: f64,
    pub result: Result<OptionPricingResult, PricingError>,
}

/// Prices `base` at every strike and maturity combination, row-major by strike.
pub fn price_grid(
    base: &OptionPricingRequest,
    strikes: &[f64],
    maturities: &[f64],
) -> Vec<GridPoint> {
    let requests: Vec<OptionPricingRequest> = strikes
        .iter()
        .flat_map(|&strike| {
            maturities.iter().map(move |&maturity| OptionPricingRequest {
                strike_price: strike,
                time_to_maturity: maturity,
                ..*base
            })
        })
        .collect();

    requests
        .into_par_iter()
        .map(|request| GridPoint {
            strike: request.strike_price,
            maturity: request.time_to_maturity,
            result: price(&request),
        })
        .collect()
}
