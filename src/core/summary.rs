use serde::{Deserialize, Serialize};

use crate::models::{Outcome, Percent, Ratio, Trade};

/// Scalar statistics over a set of trades.
///
/// `win_rate` counts only trades that reached their target. Money figures
/// (`avg_win`, `avg_loss`, `profit_factor`) split trades by the sign of their
/// realized P&L, which is authoritative for anything monetary. `avg_loss` is a
/// positive magnitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_trades: usize,
    pub targets: usize,
    pub win_rate: Percent,
    pub total_pnl: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub profit_factor: Ratio,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub risk_reward: f64,
    pub expectancy: f64,
}

pub fn compute_summary<'a, I>(trades: I) -> Summary
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut total = 0usize;
    let mut targets = 0usize;
    let mut total_pnl = 0.0;
    let (mut gross_profit, mut winners) = (0.0, 0usize);
    let (mut gross_loss, mut losers) = (0.0, 0usize);

    for t in trades {
        total += 1;
        if t.outcome == Outcome::Target {
            targets += 1;
        }
        total_pnl += t.realized_pnl;
        if t.realized_pnl > 0.0 {
            gross_profit += t.realized_pnl;
            winners += 1;
        } else if t.realized_pnl < 0.0 {
            gross_loss += -t.realized_pnl;
            losers += 1;
        }
    }

    let win_rate = Percent::of_count(targets, total);

    let avg_win = if winners > 0 {
        gross_profit / winners as f64
    } else {
        0.0
    };
    let avg_loss = if losers > 0 {
        gross_loss / losers as f64
    } else {
        0.0
    };

    let profit_factor = if gross_loss > 0.0 {
        Ratio::Finite(gross_profit / gross_loss)
    } else if gross_profit > 0.0 {
        Ratio::Infinite
    } else {
        Ratio::Finite(0.0)
    };

    let risk_reward = if avg_loss > 0.0 { avg_win / avg_loss } else { 0.0 };

    let p = win_rate.as_fraction();
    let expectancy = p * avg_win - (1.0 - p) * avg_loss;

    Summary {
        total_trades: total,
        targets,
        win_rate,
        total_pnl,
        gross_profit,
        gross_loss,
        profit_factor,
        avg_win,
        avg_loss,
        risk_reward,
        expectancy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_series, make_trade};

    #[test]
    fn empty_list_is_all_zero() {
        let s = compute_summary(&Vec::<Trade>::new());
        assert_eq!(s.total_trades, 0);
        assert_eq!(s.win_rate, Percent::ZERO);
        assert_eq!(s.profit_factor, Ratio::Finite(0.0));
        assert_eq!(s.expectancy, 0.0);
    }

    #[test]
    fn known_mix() {
        // 2 wins of +100, 2 losses of -50
        let trades = make_series(&[100.0, -50.0, 100.0, -50.0]);
        let s = compute_summary(&trades);
        assert!((s.win_rate.value() - 50.0).abs() < 1e-9);
        assert_eq!(s.profit_factor, Ratio::Finite(2.0));
        assert!((s.avg_win - 100.0).abs() < 1e-9);
        assert!((s.avg_loss - 50.0).abs() < 1e-9);
        assert!((s.risk_reward - 2.0).abs() < 1e-9);
        // 0.5 * 100 - 0.5 * 50
        assert!((s.expectancy - 25.0).abs() < 1e-9);
        assert!((s.total_pnl - 100.0).abs() < 1e-9);
    }

    #[test]
    fn no_losses_is_infinite_profit_factor() {
        let trades = make_series(&[10.0, 20.0]);
        let s = compute_summary(&trades);
        assert!(s.profit_factor.is_infinite());
        assert_eq!(s.risk_reward, 0.0);
    }

    #[test]
    fn partial_does_not_count_toward_win_rate() {
        let trades = vec![
            make_trade("1", "2024-01-01", "09:00", Outcome::Target, 10.0),
            make_trade("2", "2024-01-02", "09:00", Outcome::Partial, 5.0),
            make_trade("3", "2024-01-03", "09:00", Outcome::Pending, 0.0),
            make_trade("4", "2024-01-04", "09:00", Outcome::StopLoss, -5.0),
        ];
        let s = compute_summary(&trades);
        assert_eq!(s.targets, 1);
        assert!((s.win_rate.value() - 25.0).abs() < 1e-9);
        assert!(s.win_rate.value() >= 0.0 && s.win_rate.value() <= 100.0);
    }
}
