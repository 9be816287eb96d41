use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of a ticker as delivered by a market-data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn field(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

/// Time-ordered daily bars of a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    symbol: String,
    bars: Vec<DailyBar>,
}

impl PriceHistory {
    /// Bars are sorted by date on construction, oldest first.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<DailyBar>) -> Self {
        bars.sort_by_key(|bar| bar.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The latest closing price, which serves as the current underlying price.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.close)
    }

    pub fn series(&self, field: PriceField) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.field(field)).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.series(PriceField::Close)
    }

    pub fn opens(&self) -> Vec<f64> {
        self.series(PriceField::Open)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|bar| bar.date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> DailyBar {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        DailyBar::new(date, close - 1.0, close + 1.0, close - 2.0, close, 1_000)
    }

    #[test]
    fn bars_are_sorted_by_date() {
        let history = PriceHistory::new("AAPL", vec![bar(5, 105.0), bar(1, 100.0), bar(3, 103.0)]);

        assert_eq!(history.closes(), vec![100.0, 103.0, 105.0]);
        assert_eq!(history.last_close(), Some(105.0));
        assert_eq!(history.symbol(), "AAPL");
    }

    #[test]
    fn empty_history_has_no_close() {
        let history = PriceHistory::new("SPY", vec![]);
        assert!(history.is_empty());
        assert_eq!(history.last_close(), None);
    }

    #[test]
    fn series_selects_field() {
        let history = PriceHistory::new("QQQ", vec![bar(1, 100.0), bar(2, 102.0)]);
        assert_eq!(history.opens(), vec![99.0, 101.0]);
        assert_eq!(history.series(PriceField::High), vec![101.0, 103.0]);
        assert_eq!(history.len(), 2);
    }
}
