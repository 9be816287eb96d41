use std::fmt;
use std::str::FromStr;

use crate::common::error::{Field, InvalidReason, PricingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn other(self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid(
                Field::OptionType,
                InvalidReason::Unrecognized(s.to_string()),
            )),
        }
    }
}

/// Market and contract parameters of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionPricingRequest {
    /// the asset's price at time t
    pub underlying_price: f64,
    /// the strike or exercise price of the asset
    pub strike_price: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_maturity: f64,
    /// the annualized risk-free interest rate, as a decimal
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the stock's returns, as a decimal
    pub volatility: f64,
    pub option_type: OptionType,
}

impl OptionPricingRequest {
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            underlying_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        }
    }

    /// Builds a request from user-entered text. The underlying price comes from the
    /// caller (usually the latest close of a price history) and is checked first.
    pub fn from_text(
        underlying_price: Option<f64>,
        strike_price: &str,
        time_to_maturity: &str,
        risk_free_rate: &str,
        volatility: &str,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let underlying_price = underlying_price.ok_or(PricingError::MissingUnderlyingPrice)?;
        let request = Self::new(
            underlying_price,
            parse_field(Field::StrikePrice, strike_price)?,
            parse_field(Field::TimeToMaturity, time_to_maturity)?,
            parse_field(Field::RiskFreeRate, risk_free_rate)?,
            parse_field(Field::Volatility, volatility)?,
            option_type,
        );
        request.validate()?;
        Ok(request)
    }

    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Checks the model's domain: S, K and σ strictly positive, T not negative, all finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        positive(Field::UnderlyingPrice, self.underlying_price)?;
        positive(Field::StrikePrice, self.strike_price)?;
        finite(Field::TimeToMaturity, self.time_to_maturity)?;
        if self.time_to_maturity < 0.0 {
            return Err(PricingError::invalid(
                Field::TimeToMaturity,
                InvalidReason::Negative(self.time_to_maturity),
            ));
        }
        finite(Field::RiskFreeRate, self.risk_free_rate)?;
        positive(Field::Volatility, self.volatility)?;
        Ok(())
    }

    /// Strike discounted to today, `K * exp(-rT)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike_price * (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64, PricingError> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| PricingError::invalid(field, InvalidReason::NotANumber(text.to_string())))
}

fn finite(field: Field, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(field, InvalidReason::NotFinite(value)))
    }
}

fn positive(field: Field, value: f64) -> Result<(), PricingError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(field, InvalidReason::NonPositive(value)))
    }
}

/// Theoretical value and first-order sensitivities of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionPricingResult {
    pub price: f64,
    /// ∂price/∂S
    pub delta: f64,
    /// ∂price/∂σ
    pub vega: f64,
}
