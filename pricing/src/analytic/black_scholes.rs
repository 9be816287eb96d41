use std::f64::consts::SQRT_2;

use probability::distribution::{Continuous, Gaussian};

use crate::common::error::PricingError;
use crate::common::models::{OptionPricingRequest, OptionPricingResult, OptionType};

/// Standard normal cumulative distribution function.
/// Evaluated through the complementary error function, which keeps its
/// relative accuracy deep in the lower tail where `1 + erf(x)` cancels.
pub fn cdf(d: f64) -> f64 {
    0.5 * libm::erfc(-d / SQRT_2)
}

/// Standard normal probability density function.
pub fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPricer {
    type Request;
    fn price(request: &Self::Request) -> Result<OptionPricingResult, PricingError>;
}

/// European Put and Call option prices, delta and vega for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPricer for BlackScholesMerton {
    type Request = OptionPricingRequest;

    fn price(request: &OptionPricingRequest) -> Result<OptionPricingResult, PricingError> {
        request.validate()?;

        let sigma_exp = request.volatility * request.time_to_maturity.sqrt();
        // d1 and d2 are undefined without time value; expiry pays out intrinsically
        if sigma_exp == 0.0 {
            tracing::debug!(
                underlying_price = request.underlying_price,
                strike_price = request.strike_price,
                option_type = %request.option_type,
                "no time value left, pricing at intrinsic value"
            );
            return Ok(Self::intrinsic(request));
        }
        Ok(Self::closed_form(request, sigma_exp))
    }
}

impl BlackScholesMerton {
    /// `d1` and `d2` for a request with positive `σ√T`.
    pub fn d1_d2(request: &OptionPricingRequest, sigma_exp: f64) -> (f64, f64) {
        let d1 = ((request.underlying_price / request.strike_price).ln()
            + (request.risk_free_rate + request.volatility.powi(2) / 2.0)
                * request.time_to_maturity)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }

    fn closed_form(request: &OptionPricingRequest, sigma_exp: f64) -> OptionPricingResult {
        let (d1, d2) = Self::d1_d2(request, sigma_exp);
        let spot = request.underlying_price;
        let discounted_strike = request.discounted_strike();

        let (price, delta) = match request.option_type {
            OptionType::Call => (cdf(d1) * spot - cdf(d2) * discounted_strike, cdf(d1)),
            OptionType::Put => (cdf(-d2) * discounted_strike - cdf(-d1) * spot, -cdf(-d1)),
        };
        let vega = spot * pdf(d1) * request.time_to_maturity.sqrt();

        OptionPricingResult { price, delta, vega }
    }

    /// Payoff at expiry: the price is the exercise value, delta jumps between 0 and ±1.
    fn intrinsic(request: &OptionPricingRequest) -> OptionPricingResult {
        let spot = request.underlying_price;
        let strike = request.strike_price;

        let (price, delta) = match request.option_type {
            OptionType::Call if spot > strike => (spot - strike, 1.0),
            OptionType::Call => (0.0, 0.0),
            OptionType::Put if spot < strike => (strike - spot, -1.0),
            OptionType::Put => (0.0, 0.0),
        };

        OptionPricingResult {
            price,
            delta,
            vega: 0.0,
        }
    }
}

/// Prices a single request with the Black-Scholes-Merton model.
pub fn price(request: &OptionPricingRequest) -> Result<OptionPricingResult, PricingError> {
    BlackScholesMerton::price(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::{Field, InvalidReason};
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    fn call(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> OptionPricingResult {
        price(&OptionPricingRequest::new(s, k, t, r, sigma, OptionType::Call)).unwrap()
    }

    fn put(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> OptionPricingResult {
        price(&OptionPricingRequest::new(s, k, t, r, sigma, OptionType::Put)).unwrap()
    }

    #[test]
    fn normal_cdf() {
        let center_value = cdf(0.0);
        assert_eq!(center_value, 0.5);

        let sigma_top = cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413, 0.0001); // table value for 1.0

        // lower tail keeps relative precision
        assert_approx_eq!(cdf(-10.0) / 7.619853024160527e-24, 1.0, 1e-9);
        assert_eq!(cdf(40.0), 1.0);
    }

    #[test]
    fn normal_pdf() {
        assert_approx_eq!(pdf(0.0), 0.398942, 1e-6);
        assert_approx_eq!(pdf(1.0), pdf(-1.0), 1e-15);
    }

    #[test]
    fn european_call() {
        assert_approx_eq!(call(300.0, 250.0, 1.0, 0.03, 0.15).price, 58.8197, TOLERANCE);
        assert_approx_eq!(call(310.0, 250.0, 3.5, 0.05, 0.25).price, 113.4155, TOLERANCE);
        assert_approx_eq!(call(100.0, 95.0, 1.0, 0.05, 0.2).price, 13.3465, TOLERANCE);
    }

    #[test]
    fn european_put() {
        assert_approx_eq!(put(300.0, 250.0, 1.0, 0.03, 0.15).price, 1.4311, TOLERANCE);
        assert_approx_eq!(put(310.0, 250.0, 3.5, 0.05, 0.25).price, 13.2797, TOLERANCE);
        assert_approx_eq!(put(100.0, 95.0, 1.0, 0.05, 0.2).price, 3.7133, TOLERANCE);
    }

    #[test]
    fn at_the_money_without_rate() {
        let c = call(100.0, 100.0, 1.0, 0.0, 0.2);
        let p = put(100.0, 100.0, 1.0, 0.0, 0.2);
        assert_approx_eq!(c.price, 7.97, 0.01);
        assert_approx_eq!(c.price, p.price, 1e-12);
    }

    #[test]
    fn out_of_the_money_call() {
        let c = call(50.0, 60.0, 0.5, 0.03, 0.25);
        assert_approx_eq!(c.price, 0.8835, TOLERANCE);
        assert_approx_eq!(c.delta, 0.1954, TOLERANCE);
    }

    #[test]
    fn greeks() {
        let c = call(100.0, 95.0, 1.0, 0.05, 0.2);
        let p = put(100.0, 95.0, 1.0, 0.05, 0.2);
        assert_approx_eq!(c.delta, 0.7279, TOLERANCE);
        assert_approx_eq!(p.delta, -0.2721, TOLERANCE);
        assert_approx_eq!(c.delta - p.delta, 1.0, 1e-12);
        assert_approx_eq!(c.vega, 33.1927, TOLERANCE);
        assert_eq!(c.vega, p.vega);
    }

    #[test]
    fn european_put_call_parity() {
        let request = OptionPricingRequest::new(300.0, 250.0, 1.0, 0.03, 0.15, OptionType::Call);
        let call_price = price(&request).unwrap().price;
        let put_price = price(&request.with_option_type(OptionType::Put)).unwrap().price;
        assert_approx_eq!(
            call_price - put_price,
            request.underlying_price - request.discounted_strike(),
            1e-9
        );
    }

    #[test]
    fn expiry_pays_intrinsic_value() {
        let c = call(100.0, 100.0, 0.0, 0.05, 0.2);
        let p = put(100.0, 100.0, 0.0, 0.05, 0.2);
        assert_eq!(c, OptionPricingResult { price: 0.0, delta: 0.0, vega: 0.0 });
        assert_eq!(p, OptionPricingResult { price: 0.0, delta: 0.0, vega: 0.0 });

        let c = call(110.0, 100.0, 0.0, 0.05, 0.2);
        assert_eq!(c, OptionPricingResult { price: 10.0, delta: 1.0, vega: 0.0 });
        assert_eq!(put(110.0, 100.0, 0.0, 0.05, 0.2).price, 0.0);

        let p = put(90.0, 100.0, 0.0, -0.02, 0.4);
        assert_eq!(p, OptionPricingResult { price: 10.0, delta: -1.0, vega: 0.0 });
        assert_eq!(call(90.0, 100.0, 0.0, 0.05, 0.2).delta, 0.0);
    }

    #[test]
    fn results_are_finite_near_expiry() {
        let c = call(100.0, 100.0, 1e-12, 0.05, 0.2);
        assert!(c.price.is_finite() && c.delta.is_finite() && c.vega.is_finite());
        assert_approx_eq!(c.price, 0.0, 1e-4);
    }

    #[test]
    fn invalid_volatility_is_rejected() {
        let request = OptionPricingRequest::new(100.0, 95.0, 1.0, 0.05, -0.1, OptionType::Call);
        assert_eq!(
            price(&request),
            Err(PricingError::InvalidInput {
                field: Field::Volatility,
                reason: InvalidReason::NonPositive(-0.1)
            })
        );
        assert!(price(&request.with_option_type(OptionType::Put)).is_err());
    }

    #[test]
    fn negative_maturity_is_rejected() {
        let request = OptionPricingRequest::new(100.0, 95.0, -1.0, 0.05, 0.2, OptionType::Put);
        assert!(matches!(
            BlackScholesMerton::price(&request),
            Err(PricingError::InvalidInput {
                field: Field::TimeToMaturity,
                ..
            })
        ));
    }
}
