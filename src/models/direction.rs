use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }

    /// Lenient parse of a stored direction label.
    pub fn parse(label: &str) -> Option<Direction> {
        match label.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Some(Direction::Long),
            "short" | "sell" => Some(Direction::Short),
            _ => None,
        }
    }
}

/// How a trade ended, as recorded by the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Target,
    StopLoss,
    Breakeven,
    Partial,
    Pending,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::Target,
        Outcome::StopLoss,
        Outcome::Breakeven,
        Outcome::Partial,
        Outcome::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Target => "target",
            Outcome::StopLoss => "stop_loss",
            Outcome::Breakeven => "breakeven",
            Outcome::Partial => "partial",
            Outcome::Pending => "pending",
        }
    }

    /// Parse a stored result label. Unfilled orders (`non_fillato`) and
    /// unknown labels are treated as pending.
    pub fn parse(label: &str) -> Outcome {
        match label.trim().to_ascii_lowercase().as_str() {
            "target" | "take_profit" | "tp" => Outcome::Target,
            "stop_loss" | "stoploss" | "sl" => Outcome::StopLoss,
            "breakeven" | "be" => Outcome::Breakeven,
            "partial" | "parziale" => Outcome::Partial,
            _ => Outcome::Pending,
        }
    }

    /// Streak classification: target and partial count as wins, stop loss as a loss.
    pub fn streak_kind(self) -> StreakKind {
        match self {
            Outcome::Target | Outcome::Partial => StreakKind::Win,
            Outcome::StopLoss => StreakKind::Loss,
            Outcome::Breakeven | Outcome::Pending => StreakKind::None,
        }
    }

    pub fn is_win(self) -> bool {
        self.streak_kind() == StreakKind::Win
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Win,
    Loss,
    None,
}

impl fmt::Display for StreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreakKind::Win => write!(f, "win"),
            StreakKind::Loss => write!(f, "loss"),
            StreakKind::None => write!(f, "none"),
        }
    }
}
