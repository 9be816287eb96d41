use std::fmt;

use thiserror::Error;

/// Input fields of a pricing request, used to point at the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UnderlyingPrice,
    StrikePrice,
    TimeToMaturity,
    RiskFreeRate,
    Volatility,
    OptionType,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::UnderlyingPrice => "underlying price",
            Field::StrikePrice => "strike price",
            Field::TimeToMaturity => "time to maturity",
            Field::RiskFreeRate => "risk-free rate",
            Field::Volatility => "volatility",
            Field::OptionType => "option type",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidReason {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is not positive")]
    NonPositive(f64),
    #[error("{0} is negative")]
    Negative(f64),
    #[error("{0} is not finite")]
    NotFinite(f64),
    #[error("'{0}' is not recognized")]
    Unrecognized(String),
}

impl InvalidReason {
    /// True when the text could not be read at all, as opposed to a value outside the model's domain.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, InvalidReason::NotANumber(_) | InvalidReason::Unrecognized(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("underlying price not available")]
    MissingUnderlyingPrice,
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: InvalidReason },
}

impl PricingError {
    pub(crate) fn invalid(field: Field, reason: InvalidReason) -> Self {
        PricingError::InvalidInput { field, reason }
    }
}
