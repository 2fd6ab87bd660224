use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{Direction, Outcome};

/// Canonical in-memory trade, as produced by the normalizer.
///
/// Numeric fields are always present (0 when the stored value was missing) so
/// aggregate math never has to handle absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub entry_date: NaiveDate,
    pub entry_time: Option<NaiveTime>,
    pub exit_date: Option<NaiveDate>,
    pub exit_time: Option<NaiveTime>,
    pub instrument: String,
    pub direction: Direction,
    pub target_price: f64,
    pub stop_loss_price: f64,
    pub stop_loss_pips: Option<f64>,
    pub take_profit_pips: Option<f64>,
    pub risk_reward_ratio: Option<f64>,
    pub outcome: Outcome,
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: f64,
    pub emotion: Option<String>,
    #[serde(default)]
    pub confluences_for: Vec<String>,
    #[serde(default)]
    pub confluences_against: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Trade {
    /// Sort key: entry date and time, a missing time counting as midnight.
    pub fn entry_key(&self) -> NaiveDateTime {
        self.entry_date.and_time(self.entry_time.unwrap_or(NaiveTime::MIN))
    }

    /// Exact entry instant, only when the entry time is known.
    pub fn entered_at(&self) -> Option<NaiveDateTime> {
        self.entry_time.map(|t| self.entry_date.and_time(t))
    }

    pub fn exited_at(&self) -> Option<NaiveDateTime> {
        match (self.exit_date, self.exit_time) {
            (Some(d), Some(t)) => Some(d.and_time(t)),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.exit_date.is_some() && self.exit_time.is_some()
    }

    pub fn has_confluence_for(&self, tag: &str) -> bool {
        self.confluences_for.iter().any(|c| c == tag)
    }

    pub fn has_confluence_against(&self, tag: &str) -> bool {
        self.confluences_against.iter().any(|c| c == tag)
    }
}
