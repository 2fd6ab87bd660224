use serde::{Deserialize, Serialize};

use super::chronology::Chronological;
use crate::models::StreakKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current_streak: usize,
    pub current_streak_type: StreakKind,
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
}

impl Default for Streaks {
    fn default() -> Self {
        Self {
            current_streak: 0,
            current_streak_type: StreakKind::None,
            max_win_streak: 0,
            max_loss_streak: 0,
        }
    }
}

/// Win and loss runs in chronological order. Breakeven and pending trades
/// break both runs without extending either.
pub fn streaks(trades: &Chronological<'_>) -> Streaks {
    let mut out = Streaks::default();
    let (mut wins, mut losses) = (0usize, 0usize);

    for t in trades.iter() {
        match t.outcome.streak_kind() {
            StreakKind::Win => {
                wins += 1;
                losses = 0;
                out.max_win_streak = out.max_win_streak.max(wins);
            }
            StreakKind::Loss => {
                losses += 1;
                wins = 0;
                out.max_loss_streak = out.max_loss_streak.max(losses);
            }
            StreakKind::None => {
                wins = 0;
                losses = 0;
            }
        }
    }

    if let Some(last) = trades.last() {
        out.current_streak_type = last.outcome.streak_kind();
        out.current_streak = match out.current_streak_type {
            StreakKind::Win => wins,
            StreakKind::Loss => losses,
            StreakKind::None => 0,
        };
    }
    out
}
