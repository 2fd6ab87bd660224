use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::risk_of_ruin::RuinParams;
use crate::core::{DateRange, DownsideDivisor, TagCatalog};

/// Catalogs of labels the tag tables aggregate over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogs {
    pub emotions: TagCatalog,
    pub confluences_for: TagCatalog,
    pub confluences_against: TagCatalog,
}

/// Everything a statistics pass needs besides the trades themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub initial_capital: f64,
    pub date_range: Option<DateRange>,
    pub sortino_divisor: DownsideDivisor,
    pub catalogs: Catalogs,
    pub ruin: RuinParams,
    /// Trades projected forward at the observed expectancy.
    pub projection_trades: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            date_range: None,
            sortino_divisor: DownsideDivisor::AllTrades,
            catalogs: Catalogs::default(),
            ruin: RuinParams::default(),
            projection_trades: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Account
    pub initial_capital: f64,

    // Filters
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,

    // Tag tables (Observed when unset)
    pub catalogs: Catalogs,

    // Ratios
    pub sortino_divisor: DownsideDivisor,

    // Risk of ruin
    pub ruin: RuinParams,
    pub projection_trades: usize,

    // Trade source
    pub api_token: Option<String>,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };
        let date = |key: &str| -> Option<NaiveDate> {
            std::env::var(key)
                .ok()
                .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
        };

        let defaults = RuinParams::default();

        Config {
            initial_capital: finite_or(&env("JOURNAL_INITIAL_CAPITAL", "10000"), 10_000.0),
            from: date("JOURNAL_FROM"),
            to: date("JOURNAL_TO"),
            catalogs: Catalogs {
                emotions: TagCatalog::from_list(&env("JOURNAL_EMOTIONS", "")),
                confluences_for: TagCatalog::from_list(&env("JOURNAL_CONFLUENCES_FOR", "")),
                confluences_against: TagCatalog::from_list(&env("JOURNAL_CONFLUENCES_AGAINST", "")),
            },
            sortino_divisor: DownsideDivisor::parse(&env("JOURNAL_SORTINO_DIVISOR", "all"))
                .unwrap_or_default(),
            ruin: RuinParams {
                risk_fraction: finite_or(
                    &env("JOURNAL_RUIN_RISK_FRACTION", "0.01"),
                    defaults.risk_fraction,
                ),
                horizon: env("JOURNAL_RUIN_HORIZON", "250")
                    .parse()
                    .unwrap_or(defaults.horizon),
                simulations: env("JOURNAL_RUIN_SIMULATIONS", "2000")
                    .parse()
                    .unwrap_or(defaults.simulations),
                seed: env("JOURNAL_RUIN_SEED", "42").parse().unwrap_or(defaults.seed),
                threshold: finite_or(&env("JOURNAL_RUIN_THRESHOLD", "0.0"), defaults.threshold),
            }
            .validated(),
            projection_trades: env("JOURNAL_PROJECTION_TRADES", "50").parse().unwrap_or(50),
            api_token: std::env::var("JOURNAL_API_TOKEN").ok().filter(|t| !t.is_empty()),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    pub fn analytics(&self) -> AnalyticsConfig {
        let date_range = if self.from.is_some() || self.to.is_some() {
            Some(DateRange::new(self.from, self.to))
        } else {
            None
        };
        AnalyticsConfig {
            initial_capital: self.initial_capital,
            date_range,
            sortino_divisor: self.sortino_divisor,
            catalogs: self.catalogs.clone(),
            ruin: self.ruin,
            projection_trades: self.projection_trades,
        }
    }
}

/// Parsed float, or `default` when unparsable or not finite.
fn finite_or(raw: &str, default: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            initial_capital: 1000.0,
            from: None,
            to: None,
            catalogs: Catalogs::default(),
            sortino_divisor: DownsideDivisor::LosingTrades,
            ruin: RuinParams::default(),
            projection_trades: 10,
            api_token: None,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn no_dates_means_no_range() {
        let a = config().analytics();
        assert_eq!(a.date_range, None);
        assert_eq!(a.initial_capital, 1000.0);
        assert_eq!(a.sortino_divisor, DownsideDivisor::LosingTrades);
    }

    #[test]
    fn one_sided_range() {
        let mut cfg = config();
        cfg.from = NaiveDate::from_ymd_opt(2024, 6, 1);
        let range = cfg.analytics().date_range.unwrap();
        assert!(range.contains(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
    }

    #[test]
    fn non_finite_numbers_fall_back() {
        assert_eq!(finite_or("nan", 10_000.0), 10_000.0);
        assert_eq!(finite_or("inf", 10_000.0), 10_000.0);
        assert_eq!(finite_or("-infinity", 0.01), 0.01);
        assert_eq!(finite_or("abc", 0.01), 0.01);
        assert_eq!(finite_or(" 2500.5 ", 10_000.0), 2500.5);
    }
}
