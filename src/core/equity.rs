use serde::{Deserialize, Serialize};

use super::chronology::Chronological;
use crate::models::Trade;

pub const START_LABEL: &str = "start";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub label: String,
    pub equity: f64,
}

/// Running balance over chronologically ordered trades.
///
/// Nothing is materialized up front: every call to [`EquityCurve::iter`]
/// walks the trades again from the starting capital.
#[derive(Debug, Clone)]
pub struct EquityCurve<'a> {
    trades: Chronological<'a>,
    initial_capital: f64,
}

impl<'a> EquityCurve<'a> {
    pub fn new(trades: Chronological<'a>, initial_capital: f64) -> Self {
        Self {
            trades,
            initial_capital,
        }
    }

    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    pub fn iter(&self) -> EquityIter<'_> {
        EquityIter {
            trades: self.trades.as_slice(),
            pos: 0,
            equity: self.initial_capital,
            started: false,
        }
    }

    /// Equity values only, start point included.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|p| p.equity)
    }

    pub fn points(&self) -> Vec<EquityPoint> {
        self.iter().collect()
    }

    pub fn final_equity(&self) -> f64 {
        self.initial_capital + self.trades.iter().map(|t| t.realized_pnl).sum::<f64>()
    }
}

/// Convenience wrapper: sort `trades` and collect the curve.
pub fn build_curve<'a, I>(trades: I, initial_capital: f64) -> Vec<EquityPoint>
where
    I: IntoIterator<Item = &'a Trade>,
{
    EquityCurve::new(Chronological::new(trades), initial_capital).points()
}

/// Expected balance over the next `trades_ahead` trades at a fixed
/// per-trade expectancy, anchored at `start_equity`.
pub fn project_equity(start_equity: f64, expectancy: f64, trades_ahead: usize) -> Vec<EquityPoint> {
    std::iter::once(EquityPoint {
        label: "now".to_string(),
        equity: start_equity,
    })
    .chain((1..=trades_ahead).map(|n| EquityPoint {
        label: format!("+{}", n),
        equity: start_equity + expectancy * n as f64,
    }))
    .collect()
}

pub struct EquityIter<'c> {
    trades: &'c [&'c Trade],
    pos: usize,
    equity: f64,
    started: bool,
}

impl Iterator for EquityIter<'_> {
    type Item = EquityPoint;

    fn next(&mut self) -> Option<EquityPoint> {
        if !self.started {
            self.started = true;
            return Some(EquityPoint {
                label: START_LABEL.to_string(),
                equity: self.equity,
            });
        }
        let trade = self.trades.get(self.pos)?;
        self.pos += 1;
        self.equity += trade.realized_pnl;
        Some(EquityPoint {
            label: trade.entry_date.format("%m-%d").to_string(),
            equity: self.equity,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trades.len() - self.pos + usize::from(!self.started);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EquityIter<'_> {}
