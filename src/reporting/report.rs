use serde::Serialize;
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::core::breakdown::{self, DirectionBreakdown, InstrumentStats, OutcomeCount};
use crate::core::equity::project_equity;
use crate::core::holding::{average_holding_time, format_holding_time};
use crate::core::risk_of_ruin::{self, RuinEstimate, RuinInputs, DEFAULT_FRACTIONS};
use crate::core::{
    by_hour, by_weekday, compute_summary, curve_drawdown, max_drawdown, risk_adjusted, streaks,
    tag_stats, Chronological, Drawdown, EquityCurve, EquityPoint, RiskAdjusted, Streaks, Summary,
    TagField, TagStats, TimeBucket,
};
use crate::models::{Percent, Trade};

/// Every derived aggregate for one statistics pass. Rebuilt from scratch on
/// each call; nothing here is cached or persisted.
#[derive(Debug, Clone, Serialize)]
pub struct JournalReport {
    // Totals
    pub initial_capital: f64,
    pub final_equity: f64,
    pub total_pnl: f64,
    pub net_return: Percent,

    // Statistics
    pub summary: Summary,
    pub risk_adjusted: RiskAdjusted,
    pub streaks: Streaks,
    pub avg_holding_minutes: Option<i64>,
    pub avg_holding: String,

    // Curves
    pub equity_curve: Vec<EquityPoint>,
    pub projection: Vec<EquityPoint>,
    pub pnl_drawdown: Drawdown,
    pub account_drawdown: Drawdown,

    // Time buckets
    pub by_weekday: Vec<TimeBucket>,
    pub by_hour: Vec<TimeBucket>,

    // Tags
    pub emotions: Vec<TagStats>,
    pub confluences_for: Vec<TagStats>,
    pub confluences_against: Vec<TagStats>,

    // Breakdowns
    pub by_instrument: Vec<InstrumentStats>,
    pub by_direction: DirectionBreakdown,
    pub by_outcome: Vec<OutcomeCount>,

    // Risk of ruin
    pub risk_of_ruin: RuinEstimate,
    pub ruin_table: Vec<RuinEstimate>,
}

impl JournalReport {
    pub fn build(trades: &[Trade], cfg: &AnalyticsConfig) -> Self {
        let selected: Vec<&Trade> = match &cfg.date_range {
            Some(range) => range.filter(trades),
            None => trades.iter().collect(),
        };
        debug!("Building report over {} of {} trades", selected.len(), trades.len());

        let ordered = Chronological::new(selected.iter().copied());
        let summary = compute_summary(ordered.iter());
        let pnl_drawdown = max_drawdown(&ordered);
        let streaks = streaks(&ordered);

        let curve = EquityCurve::new(ordered.clone(), cfg.initial_capital);
        let account_drawdown = curve_drawdown(&curve);
        let final_equity = curve.final_equity();
        let equity_curve = curve.points();

        let holding = average_holding_time(ordered.iter());
        let ruin_inputs = RuinInputs::from_trades(ordered.iter());
        let catalogs = &cfg.catalogs;

        JournalReport {
            initial_capital: cfg.initial_capital,
            final_equity,
            total_pnl: summary.total_pnl,
            net_return: Percent::of(summary.total_pnl, cfg.initial_capital),
            risk_adjusted: risk_adjusted(ordered.iter(), cfg.sortino_divisor),
            streaks,
            avg_holding_minutes: holding.map(|d| d.num_minutes()),
            avg_holding: format_holding_time(holding),
            projection: project_equity(final_equity, summary.expectancy, cfg.projection_trades),
            equity_curve,
            pnl_drawdown,
            account_drawdown,
            by_weekday: by_weekday(ordered.iter()),
            by_hour: by_hour(ordered.iter()),
            emotions: tag_stats(ordered.iter(), TagField::Emotion, &catalogs.emotions),
            confluences_for: tag_stats(
                ordered.iter(),
                TagField::ConfluencesFor,
                &catalogs.confluences_for,
            ),
            confluences_against: tag_stats(
                ordered.iter(),
                TagField::ConfluencesAgainst,
                &catalogs.confluences_against,
            ),
            by_instrument: breakdown::by_instrument(ordered.iter()),
            by_direction: breakdown::by_direction(ordered.iter()),
            by_outcome: breakdown::by_outcome(ordered.iter()),
            risk_of_ruin: risk_of_ruin::estimate(&ruin_inputs, &cfg.ruin),
            ruin_table: risk_of_ruin::ruin_table(&ruin_inputs, &cfg.ruin, &DEFAULT_FRACTIONS),
            summary,
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(70));
        println!("  TRADING JOURNAL REPORT");
        println!("{}", "=".repeat(70));
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Initial:       {:.2}", self.initial_capital);
        println!("  Final:         {:.2}", self.final_equity);
        println!("  PnL:           {:+.2}", self.total_pnl);
        println!("  Return:        {}", self.net_return);
        println!();
        println!("  TRADES");
        println!("  ───────────────────────────────────");
        println!("  Total:         {}", self.summary.total_trades);
        println!("  Targets:       {}", self.summary.targets);
        println!("  Win Rate:      {}", self.summary.win_rate);
        println!("  Avg Win:       {:+.2}", self.summary.avg_win);
        println!("  Avg Loss:      {:.2}", self.summary.avg_loss);
        println!("  Risk/Reward:   {:.2}", self.summary.risk_reward);
        println!("  Expectancy:    {:+.2}", self.summary.expectancy);
        println!("  Profit Factor: {}", self.summary.profit_factor);
        println!("  Avg Holding:   {}", self.avg_holding);
        println!(
            "  Streak:        {} {} (max W {} | max L {})",
            self.streaks.current_streak,
            self.streaks.current_streak_type,
            self.streaks.max_win_streak,
            self.streaks.max_loss_streak
        );
        println!();
        println!("  RISK");
        println!("  ───────────────────────────────────");
        println!(
            "  Max DD:        {:.2} ({})",
            self.account_drawdown.absolute, self.account_drawdown.percent
        );
        println!(
            "  PnL DD:        {:.2} ({})",
            self.pnl_drawdown.absolute, self.pnl_drawdown.percent
        );
        println!("  Sharpe:        {:.2}", self.risk_adjusted.sharpe);
        println!("  Sortino:       {}", self.risk_adjusted.sortino);
        println!(
            "  Ruin @ {:.1}%:   {} closed-form | {} simulated",
            self.risk_of_ruin.risk_fraction * 100.0,
            self.risk_of_ruin.closed_form,
            self.risk_of_ruin.monte_carlo
        );

        if !self.by_instrument.is_empty() {
            println!();
            println!("  BY INSTRUMENT");
            println!("  ───────────────────────────────────");
            let mut rows: Vec<_> = self.by_instrument.iter().collect();
            rows.sort_by(|a, b| b.pnl.total_cmp(&a.pnl));
            for s in rows {
                println!(
                    "  {:>8}: {} trades | W {} L {} | PnL {:+.2}",
                    s.instrument, s.trades, s.wins, s.losses, s.pnl
                );
            }
        }

        let active_days: Vec<_> = self.by_weekday.iter().filter(|b| b.count > 0).collect();
        if !active_days.is_empty() {
            println!();
            println!("  BY WEEKDAY");
            println!("  ───────────────────────────────────");
            for b in active_days {
                println!("  {:>5}: {} trades | WR {:.0}%", b.label, b.count, b.win_rate.value());
            }
        }

        let active_hours: Vec<_> = self.by_hour.iter().filter(|b| b.count > 0).collect();
        if !active_hours.is_empty() {
            println!();
            println!("  BY HOUR");
            println!("  ───────────────────────────────────");
            for b in active_hours {
                println!("  {:>5}: {} trades | WR {:.0}%", b.label, b.count, b.win_rate.value());
            }
        }

        for (title, table) in [
            ("EMOTIONS", &self.emotions),
            ("CONFLUENCES FOR", &self.confluences_for),
            ("CONFLUENCES AGAINST", &self.confluences_against),
        ] {
            if table.is_empty() {
                continue;
            }
            println!();
            println!("  {}", title);
            println!("  ───────────────────────────────────");
            for s in table {
                println!(
                    "  {:>20}: {} trades | W {} L {} | WR {:.0}%",
                    s.name,
                    s.count,
                    s.wins,
                    s.losses,
                    s.win_rate.value()
                );
            }
        }

        if self.risk_of_ruin.sample_size > 0 {
            println!();
            println!("  RISK OF RUIN");
            println!("  ───────────────────────────────────");
            for r in &self.ruin_table {
                println!(
                    "  {:>4.1}% risk: {} closed-form | {} simulated",
                    r.risk_fraction * 100.0,
                    r.closed_form,
                    r.monte_carlo
                );
            }
        }

        println!("{}", "=".repeat(70));
    }
}
