use crate::error::RiskError;

/// Continuously compounded returns `ln(p_i / p_{i-1})` of a price series.
/// The result is one element shorter than the input.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, RiskError> {
    if let Some((index, &price)) = prices.iter().enumerate().find(|(_, p)| !(**p > 0.0)) {
        return Err(RiskError::NonPositivePrice { index, price });
    }
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction.
pub(crate) fn sample_std(values: &[f64]) -> Result<f64, RiskError> {
    if values.len() < 2 {
        return Err(RiskError::ZeroDivision);
    }
    let mu = mean(values);
    let sum_sq = values.iter().map(|x| (x - mu).powi(2)).sum::<f64>();
    Ok((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Annualized historical volatility over the whole series: the sample standard
/// deviation of the log returns scaled by `sqrt(periods_per_year)`.
/// See https://en.wikipedia.org/wiki/Volatility_(finance)
pub fn historical_volatility(prices: &[f64], periods_per_year: f64) -> Result<f64, RiskError> {
    if prices.len() < 3 {
        return Err(RiskError::InsufficientData {
            required: 3,
            available: prices.len(),
        });
    }
    let returns = log_returns(prices)?;
    Ok(sample_std(&returns)? * periods_per_year.sqrt())
}

/// Annualized volatility over a rolling window of `window` log returns.
///
/// The output is aligned with `prices`: entry `i` covers the returns ending at
/// price `i` and is `None` until `window` returns are available.
pub fn rolling_volatility(
    prices: &[f64],
    window: usize,
    periods_per_year: f64,
) -> Result<Vec<Option<f64>>, RiskError> {
    if window < 2 {
        return Err(RiskError::InvalidWindow);
    }
    let returns = log_returns(prices)?;
    let annualization = periods_per_year.sqrt();

    let mut vola = Vec::with_capacity(prices.len());
    if !prices.is_empty() {
        vola.push(None);
    }
    for end in 1..=returns.len() {
        if end < window {
            vola.push(None);
            continue;
        }
        let std = sample_std(&returns[end - window..end])?;
        vola.push(Some(std * annualization));
    }
    tracing::debug!(window, observations = prices.len(), "rolling volatility");
    Ok(vola)
}

/// Simple moving average aligned with `values`; the first `window - 1` entries are `None`.
/// See https://en.wikipedia.org/wiki/Moving_average
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<Option<f64>>, RiskError> {
    if window == 0 {
        return Err(RiskError::InvalidWindow);
    }
    let incomplete = (window - 1).min(values.len());
    let averages: Vec<Option<f64>> = std::iter::repeat(None)
        .take(incomplete)
        .chain(values.windows(window).map(|w| Some(mean(w))))
        .collect();
    Ok(averages)
}
