pub mod config;
pub mod error;
pub mod market;
pub mod risk_figures;

pub use config::{AnalyticsConfig, ConfigError};
pub use error::RiskError;
pub use market::{DailyBar, PriceField, PriceHistory};
pub use risk_figures::{historical_volatility, log_returns, moving_average, rolling_volatility};
