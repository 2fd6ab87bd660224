use serde::{Deserialize, Serialize};

use crate::models::{Ratio, Trade};

/// Which count divides the squared losses in the downside deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownsideDivisor {
    /// Every trade, so few losses shrink the deviation like they shrink Sharpe's.
    #[default]
    AllTrades,
    /// Only the losing trades.
    LosingTrades,
}

impl DownsideDivisor {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "all" | "all_trades" => Some(DownsideDivisor::AllTrades),
            "losing" | "losing_trades" => Some(DownsideDivisor::LosingTrades),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAdjusted {
    pub sharpe: f64,
    pub sortino: Ratio,
}

fn pnls<'a, I>(trades: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Trade>,
{
    trades.into_iter().map(|t| t.realized_pnl).collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-trade Sharpe ratio: mean P&L over its population standard deviation.
/// Not annualized. 0 with fewer than two trades or zero variance.
pub fn sharpe<'a, I>(trades: I) -> f64
where
    I: IntoIterator<Item = &'a Trade>,
{
    let returns = pnls(trades);
    if returns.len() < 2 {
        return 0.0;
    }
    let avg = mean(&returns);
    let variance = returns.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / returns.len() as f64;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return 0.0;
    }
    avg / std_dev
}

/// Per-trade Sortino ratio. Unbounded when no trade lost money.
pub fn sortino<'a, I>(trades: I, divisor: DownsideDivisor) -> Ratio
where
    I: IntoIterator<Item = &'a Trade>,
{
    let returns = pnls(trades);
    if returns.len() < 2 {
        return Ratio::Finite(0.0);
    }
    let avg = mean(&returns);

    let negatives: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    if negatives.is_empty() {
        return Ratio::Infinite;
    }

    let n = match divisor {
        DownsideDivisor::AllTrades => returns.len(),
        DownsideDivisor::LosingTrades => negatives.len(),
    };
    let downside = (negatives.iter().map(|r| r * r).sum::<f64>() / n as f64).sqrt();
    if downside == 0.0 {
        return Ratio::Infinite;
    }
    Ratio::Finite(avg / downside)
}

pub fn risk_adjusted<'a, I>(trades: I, divisor: DownsideDivisor) -> RiskAdjusted
where
    I: IntoIterator<Item = &'a Trade> + Clone,
{
    RiskAdjusted {
        sharpe: sharpe(trades.clone()),
        sortino: sortino(trades, divisor),
    }
}
