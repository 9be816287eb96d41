use std::fmt;

use risk::PriceHistory;

use crate::analytic::black_scholes::price;
use crate::common::error::PricingError;
use crate::common::models::{OptionPricingRequest, OptionPricingResult, OptionType};

/// Call and put of the same strike and maturity, priced from one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionQuote {
    pub call: OptionPricingResult,
    pub put: OptionPricingResult,
}

/// Prices both legs; the option type carried by `request` is ignored.
pub fn quote(request: &OptionPricingRequest) -> Result<OptionQuote, PricingError> {
    Ok(OptionQuote {
        call: price(&request.with_option_type(OptionType::Call))?,
        put: price(&request.with_option_type(OptionType::Put))?,
    })
}

impl fmt::Display for OptionQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Call Option Price: {:.2}", self.call.price)?;
        writeln!(f, "Put Option Price: {:.2}", self.put.price)?;
        writeln!(f)?;
        writeln!(
            f,
            "Call Delta: {:.2}, Call Vega: {:.2}",
            self.call.delta, self.call.vega
        )?;
        write!(
            f,
            "Put Delta: {:.2}, Put Vega: {:.2}",
            self.put.delta, self.put.vega
        )
    }
}

/// Contract parameters as typed by a user, next to the underlying price the
/// caller has on hand (if any).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteInputs {
    pub underlying_price: Option<f64>,
    pub strike_price: String,
    pub time_to_maturity: String,
    pub risk_free_rate: String,
    pub volatility: String,
}

impl QuoteInputs {
    pub fn new(
        underlying_price: Option<f64>,
        strike_price: impl Into<String>,
        time_to_maturity: impl Into<String>,
        risk_free_rate: impl Into<String>,
        volatility: impl Into<String>,
    ) -> Self {
        Self {
            underlying_price,
            strike_price: strike_price.into(),
            time_to_maturity: time_to_maturity.into(),
            risk_free_rate: risk_free_rate.into(),
            volatility: volatility.into(),
        }
    }

    /// Takes the underlying price from the latest close of `history`.
    pub fn with_history(
        history: &PriceHistory,
        strike_price: impl Into<String>,
        time_to_maturity: impl Into<String>,
        risk_free_rate: impl Into<String>,
        volatility: impl Into<String>,
    ) -> Self {
        Self::new(
            history.last_close(),
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
        )
    }

    pub fn request(&self, option_type: OptionType) -> Result<OptionPricingRequest, PricingError> {
        OptionPricingRequest::from_text(
            self.underlying_price,
            &self.strike_price,
            &self.time_to_maturity,
            &self.risk_free_rate,
            &self.volatility,
            option_type,
        )
    }

    pub fn quote(&self) -> Result<OptionQuote, PricingError> {
        let quoted = self.request(OptionType::Call).and_then(|request| quote(&request));
        if let Err(err) = &quoted {
            tracing::warn!(error = %err, "option quote rejected");
        }
        quoted
    }
}
