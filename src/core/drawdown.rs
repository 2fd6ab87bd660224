use serde::{Deserialize, Serialize};

use super::chronology::Chronological;
use super::equity::EquityCurve;
use crate::models::Percent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawdown {
    /// Largest peak-to-trough decline, always >= 0.
    pub absolute: f64,
    pub percent: Percent,
    /// Equity peak the largest decline was measured from.
    pub peak: f64,
    pub trough: f64,
}

struct PeakScan {
    peak: f64,
    worst: Drawdown,
}

impl PeakScan {
    fn new(start: f64) -> Self {
        Self {
            peak: start,
            worst: Drawdown {
                peak: start,
                trough: start,
                ..Drawdown::default()
            },
        }
    }

    fn push(&mut self, equity: f64) {
        if equity > self.peak {
            self.peak = equity;
        }
        let dd = self.peak - equity;
        if dd > self.worst.absolute {
            self.worst.absolute = dd;
            self.worst.peak = self.peak;
            self.worst.trough = equity;
        }
    }
}

/// Cumulative P&L drawdown measured from a zero baseline.
///
/// The percent divides by the larger of the all-time P&L peak and the
/// magnitude of total P&L, so an account that only ever lost still reports a
/// bounded figure.
pub fn max_drawdown(trades: &Chronological<'_>) -> Drawdown {
    let mut scan = PeakScan::new(0.0);
    let mut equity = 0.0;
    for t in trades.iter() {
        equity += t.realized_pnl;
        scan.push(equity);
    }

    let denominator = scan.peak.max(equity.abs());
    let mut out = scan.worst;
    out.percent = Percent::of(out.absolute, denominator);
    out
}

/// Drawdown of the account balance, starting capital included.
///
/// The percent is the decline relative to the balance peak it started from.
pub fn curve_drawdown(curve: &EquityCurve<'_>) -> Drawdown {
    let mut values = curve.values();
    let Some(start) = values.next() else {
        return Drawdown::default();
    };
    let mut scan = PeakScan::new(start);
    for equity in values {
        scan.push(equity);
    }

    let mut out = scan.worst;
    out.percent = if out.peak > 0.0 {
        Percent::of(out.absolute, out.peak)
    } else {
        Percent::ZERO
    };
    out
}
