use serde::{Deserialize, Serialize};

use crate::models::{Direction, Outcome, Trade};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentStats {
    pub instrument: String,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub pnl: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionBreakdown {
    pub long_wins: usize,
    pub long_losses: usize,
    pub short_wins: usize,
    pub short_losses: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub total: usize,
    pub long: usize,
    pub short: usize,
}

/// Per-instrument totals in first-seen order.
pub fn by_instrument<'a, I>(trades: I) -> Vec<InstrumentStats>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut out: Vec<InstrumentStats> = Vec::new();
    for t in trades {
        let idx = match out.iter().position(|s| s.instrument == t.instrument) {
            Some(i) => i,
            None => {
                out.push(InstrumentStats {
                    instrument: t.instrument.clone(),
                    trades: 0,
                    wins: 0,
                    losses: 0,
                    pnl: 0.0,
                });
                out.len() - 1
            }
        };
        let entry = &mut out[idx];
        entry.trades += 1;
        entry.pnl += t.realized_pnl;
        match t.outcome {
            Outcome::Target => entry.wins += 1,
            Outcome::StopLoss => entry.losses += 1,
            _ => {}
        }
    }
    out
}

pub fn by_direction<'a, I>(trades: I) -> DirectionBreakdown
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut out = DirectionBreakdown::default();
    for t in trades {
        match (t.direction, t.outcome) {
            (Direction::Long, Outcome::Target) => out.long_wins += 1,
            (Direction::Long, Outcome::StopLoss) => out.long_losses += 1,
            (Direction::Short, Outcome::Target) => out.short_wins += 1,
            (Direction::Short, Outcome::StopLoss) => out.short_losses += 1,
            _ => {}
        }
    }
    out
}

/// One row per outcome, in [`Outcome::ALL`] order.
pub fn by_outcome<'a, I>(trades: I) -> Vec<OutcomeCount>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut rows: Vec<OutcomeCount> = Outcome::ALL
        .iter()
        .map(|&outcome| OutcomeCount {
            outcome,
            total: 0,
            long: 0,
            short: 0,
        })
        .collect();

    for t in trades {
        if let Some(row) = rows.iter_mut().find(|r| r.outcome == t.outcome) {
            row.total += 1;
            match t.direction {
                Direction::Long => row.long += 1,
                Direction::Short => row.short += 1,
            }
        }
    }
    rows
}
