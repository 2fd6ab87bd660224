use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Percent, Trade};

/// Risk fractions shown in the ruin table.
pub const DEFAULT_FRACTIONS: [f64; 5] = [0.005, 0.01, 0.02, 0.03, 0.05];

const EPSILON: f64 = 1e-9;

/// Fixed-stake model: every trade risks `risk_fraction` of the starting
/// capital, wins pay `payoff` stakes, losses cost one stake, trades are
/// independent. Ruin is reaching `threshold` of the starting capital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuinParams {
    pub risk_fraction: f64,
    pub horizon: usize,
    pub simulations: usize,
    pub seed: u64,
    pub threshold: f64,
}

impl Default for RuinParams {
    fn default() -> Self {
        Self {
            risk_fraction: 0.01,
            horizon: 250,
            simulations: 2000,
            seed: 42,
            threshold: 0.0,
        }
    }
}

impl RuinParams {
    /// Replace a `risk_fraction` outside (0, 1] or a `threshold` outside
    /// [0, 1) with the default. NaN counts as outside.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        Self {
            risk_fraction: if self.risk_fraction > 0.0 && self.risk_fraction <= 1.0 {
                self.risk_fraction
            } else {
                defaults.risk_fraction
            },
            threshold: if (0.0..1.0).contains(&self.threshold) {
                self.threshold
            } else {
                defaults.threshold
            },
            ..self
        }
    }
}

/// Win probability and payoff observed on trades with non-zero P&L.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RuinInputs {
    pub win_probability: f64,
    pub payoff: f64,
    pub sample_size: usize,
}

impl RuinInputs {
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let (mut wins, mut win_sum) = (0usize, 0.0);
        let (mut losses, mut loss_sum) = (0usize, 0.0);
        for t in trades {
            if t.realized_pnl > 0.0 {
                wins += 1;
                win_sum += t.realized_pnl;
            } else if t.realized_pnl < 0.0 {
                losses += 1;
                loss_sum += -t.realized_pnl;
            }
        }

        let sample_size = wins + losses;
        if sample_size == 0 {
            return Self::default();
        }
        let avg_win = if wins > 0 { win_sum / wins as f64 } else { 0.0 };
        let avg_loss = if losses > 0 { loss_sum / losses as f64 } else { 0.0 };

        Self {
            win_probability: wins as f64 / sample_size as f64,
            payoff: if avg_loss > 0.0 { avg_win / avg_loss } else { 0.0 },
            sample_size,
        }
    }

    /// Expected stakes won per trade.
    pub fn edge(&self) -> f64 {
        self.win_probability * self.payoff - (1.0 - self.win_probability)
    }

    fn never_loses(&self) -> bool {
        self.sample_size > 0 && self.win_probability >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuinEstimate {
    pub risk_fraction: f64,
    pub win_rate: Percent,
    pub payoff: f64,
    pub edge: f64,
    /// Losing stakes between the starting capital and the ruin threshold.
    pub capital_units: f64,
    pub closed_form: Percent,
    pub monte_carlo: Percent,
    pub sample_size: usize,
}

/// Gambler's-ruin approximation `((1 - edge) / (1 + edge)) ^ units`.
pub fn closed_form_ruin(inputs: &RuinInputs, capital_units: f64) -> f64 {
    if inputs.sample_size == 0 {
        return 0.0;
    }
    // Starting at or below the threshold.
    if capital_units.is_nan() || capital_units <= EPSILON {
        return 1.0;
    }
    if inputs.never_loses() {
        return 0.0;
    }
    let edge = inputs.edge();
    if edge <= 0.0 {
        1.0
    } else if edge >= 1.0 {
        0.0
    } else {
        ((1.0 - edge) / (1.0 + edge)).powf(capital_units)
    }
}

/// Share of simulated paths that hit the ruin threshold within `horizon` trades.
pub fn simulate_ruin(inputs: &RuinInputs, params: &RuinParams) -> f64 {
    if inputs.sample_size == 0 {
        return 0.0;
    }
    let units = capital_units(params);
    if units <= EPSILON {
        return 1.0;
    }
    if inputs.never_loses() || params.simulations == 0 {
        return 0.0;
    }
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut ruined = 0usize;

    for _ in 0..params.simulations {
        let mut headroom = units;
        for _ in 0..params.horizon {
            if rng.gen_bool(inputs.win_probability) {
                headroom += inputs.payoff;
            } else {
                headroom -= 1.0;
            }
            if headroom <= EPSILON {
                ruined += 1;
                break;
            }
        }
    }

    debug!(
        "Ruin simulation: {}/{} paths ruined at {:.1}% risk",
        ruined,
        params.simulations,
        params.risk_fraction * 100.0
    );
    ruined as f64 / params.simulations as f64
}

fn capital_units(params: &RuinParams) -> f64 {
    if params.risk_fraction.is_nan() || params.risk_fraction <= 0.0 {
        return f64::INFINITY;
    }
    let threshold = if params.threshold.is_nan() { 0.0 } else { params.threshold };
    (1.0 - threshold).max(0.0) / params.risk_fraction
}

pub fn estimate(inputs: &RuinInputs, params: &RuinParams) -> RuinEstimate {
    let units = capital_units(params);
    RuinEstimate {
        risk_fraction: params.risk_fraction,
        win_rate: Percent::new(inputs.win_probability * 100.0),
        payoff: inputs.payoff,
        edge: inputs.edge(),
        capital_units: units,
        closed_form: Percent::new(closed_form_ruin(inputs, units) * 100.0),
        monte_carlo: Percent::new(simulate_ruin(inputs, params) * 100.0),
        sample_size: inputs.sample_size,
    }
}

/// One estimate per risk fraction, all other parameters shared.
pub fn ruin_table(
    inputs: &RuinInputs,
    params: &RuinParams,
    fractions: &[f64],
) -> Vec<RuinEstimate> {
    fractions
        .iter()
        .map(|&risk_fraction| {
            estimate(
                inputs,
                &RuinParams {
                    risk_fraction,
                    ..*params
                },
            )
        })
        .collect()
}
