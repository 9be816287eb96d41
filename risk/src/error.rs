use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("division by 0")]
    ZeroDivision,
    #[error("window length must be at least 1")]
    InvalidWindow,
    #[error("need at least {required} observations, got {available}")]
    InsufficientData { required: usize, available: usize },
    #[error("price {price} at index {index} is not positive")]
    NonPositivePrice { index: usize, price: f64 },
}
