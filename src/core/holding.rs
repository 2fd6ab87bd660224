use chrono::Duration;

use crate::models::Trade;

/// Mean time in market over trades with a known entry time and a recorded exit.
/// Exits stamped before their entry are ignored.
pub fn average_holding_time<'a, I>(trades: I) -> Option<Duration>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut total_seconds: i64 = 0;
    let mut n: i64 = 0;
    for t in trades {
        if let (Some(entry), Some(exit)) = (t.entered_at(), t.exited_at()) {
            if exit < entry {
                continue;
            }
            total_seconds += (exit - entry).num_seconds();
            n += 1;
        }
    }
    if n == 0 {
        return None;
    }
    Some(Duration::seconds(total_seconds / n))
}

/// "5h 30m", or days with one decimal once past a full day.
pub fn format_holding_time(d: Option<Duration>) -> String {
    let Some(d) = d else {
        return "N/A".to_string();
    };
    let hours = d.num_hours();
    if hours > 24 {
        return format!("{:.1}d", hours as f64 / 24.0);
    }
    format!("{}h {}m", hours, d.num_minutes() % 60)
}
