use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::style::Color;
use std::collections::HashMap;

use crate::config::Config;
use crate::host::CalendarDataSource;

/// Calendar data source backed by the configuration file
///
/// Weekend days come from `weekend`, indicator badges from `[[indicators]]`.
/// Several entries for the same date are concatenated in file order.
#[derive(Debug, Clone, Default)]
pub struct ConfigDataProvider {
    weekend: Vec<Weekday>,
    indicators: HashMap<NaiveDate, Vec<Color>>,
}

impl ConfigDataProvider {
    pub fn new(config: &Config) -> Self {
        let mut indicators: HashMap<NaiveDate, Vec<Color>> = HashMap::new();
        for entry in &config.indicators {
            indicators
                .entry(entry.date)
                .or_default()
                .extend(entry.colors.iter().copied());
        }

        Self {
            weekend: config.weekend.clone(),
            indicators,
        }
    }
}

impl CalendarDataSource for ConfigDataProvider {
    fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    fn indicator_colors(&self, date: NaiveDate) -> Vec<Color> {
        self.indicators.get(&date).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorConfig;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_weekend() {
        let provider = ConfigDataProvider::new(&Config::default());
        // 2019-03-23 was a Saturday
        assert!(provider.is_weekend(date(2019, 3, 23)));
        assert!(provider.is_weekend(date(2019, 3, 24)));
        assert!(!provider.is_weekend(date(2019, 3, 25)));
    }

    #[test]
    fn test_indicators_merge_by_date() {
        let config = Config {
            indicators: vec![
                IndicatorConfig {
                    date: date(2019, 3, 26),
                    colors: vec![Color::Red],
                },
                IndicatorConfig {
                    date: date(2019, 3, 26),
                    colors: vec![Color::Blue, Color::Green],
                },
            ],
            ..Config::default()
        };
        let provider = ConfigDataProvider::new(&config);

        assert_eq!(
            provider.indicator_colors(date(2019, 3, 26)),
            vec![Color::Red, Color::Blue, Color::Green]
        );
        assert!(provider.indicator_colors(date(2019, 3, 27)).is_empty());
    }
}
