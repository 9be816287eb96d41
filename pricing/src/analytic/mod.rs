mod batch;
mod black_scholes;
mod quote;

pub use batch::{price_batch, price_grid, GridPoint};
pub use black_scholes::{cdf, pdf, price, BlackScholesMerton, OptionPricer};
pub use quote::{quote, OptionQuote, QuoteInputs};
