pub mod breakdown;
pub mod chronology;
pub mod drawdown;
pub mod equity;
pub mod holding;
pub mod risk_adjusted;
pub mod risk_of_ruin;
pub mod streaks;
pub mod summary;
pub mod tags;
pub mod time_buckets;

pub use chronology::{Chronological, DateRange};
pub use drawdown::{curve_drawdown, max_drawdown, Drawdown};
pub use equity::{build_curve, EquityCurve, EquityPoint};
pub use risk_adjusted::{risk_adjusted, sharpe, sortino, DownsideDivisor, RiskAdjusted};
pub use risk_of_ruin::{RuinEstimate, RuinInputs, RuinParams};
pub use streaks::{streaks, Streaks};
pub use summary::{compute_summary, Summary};
pub use tags::{tag_stats, TagCatalog, TagField, TagStats};
pub use time_buckets::{by_hour, by_weekday, TimeBucket};
