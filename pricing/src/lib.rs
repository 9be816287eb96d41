pub mod analytic;
pub mod common;

pub use analytic::{
    price, price_batch, price_grid, quote, BlackScholesMerton, GridPoint, OptionPricer,
    OptionQuote, QuoteInputs,
};
pub use common::error::{Field, InvalidReason, PricingError};
pub use common::models::{OptionPricingRequest, OptionPricingResult, OptionType};
