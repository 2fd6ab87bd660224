use serde::{Deserialize, Serialize};

use crate::models::{Outcome, Percent, Trade};

/// Which labels a table aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCatalog {
    /// Exactly these labels, in this order. Labels outside the list are ignored.
    Fixed(Vec<String>),
    /// Every label seen on the trades, in first-seen order.
    #[default]
    Observed,
}

impl TagCatalog {
    /// Comma-separated list, `Observed` when blank.
    pub fn from_list(raw: &str) -> Self {
        let tags: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            TagCatalog::Observed
        } else {
            TagCatalog::Fixed(tags)
        }
    }

    fn resolve<'a, I>(&self, trades: I, field: TagField) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        match self {
            TagCatalog::Fixed(tags) => tags.clone(),
            TagCatalog::Observed => {
                let mut seen: Vec<String> = Vec::new();
                for t in trades {
                    for label in field.labels(t) {
                        if !seen.iter().any(|s| s == label) {
                            seen.push(label.to_string());
                        }
                    }
                }
                seen
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagField {
    ConfluencesFor,
    ConfluencesAgainst,
    Emotion,
}

impl TagField {
    fn labels<'t>(&self, trade: &'t Trade) -> Vec<&'t str> {
        match self {
            TagField::ConfluencesFor => trade.confluences_for.iter().map(String::as_str).collect(),
            TagField::ConfluencesAgainst => {
                trade.confluences_against.iter().map(String::as_str).collect()
            }
            TagField::Emotion => trade.emotion.as_deref().into_iter().collect(),
        }
    }

    fn matches(&self, trade: &Trade, tag: &str) -> bool {
        match self {
            TagField::ConfluencesFor => trade.has_confluence_for(tag),
            TagField::ConfluencesAgainst => trade.has_confluence_against(tag),
            TagField::Emotion => trade.emotion.as_deref() == Some(tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagStats {
    pub name: String,
    pub count: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: Percent,
}

/// Per-label counts. A trade joins every label it carries; wins are trades
/// that hit target and losses those stopped out.
pub fn tag_stats<'a, I>(trades: I, field: TagField, catalog: &TagCatalog) -> Vec<TagStats>
where
    I: IntoIterator<Item = &'a Trade> + Clone,
{
    catalog
        .resolve(trades.clone(), field)
        .into_iter()
        .map(|name| {
            let (mut count, mut wins, mut losses) = (0, 0, 0);
            for t in trades.clone() {
                if !field.matches(t, &name) {
                    continue;
                }
                count += 1;
                match t.outcome {
                    Outcome::Target => wins += 1,
                    Outcome::StopLoss => losses += 1,
                    _ => {}
                }
            }
            TagStats {
                name,
                count,
                wins,
                losses,
                win_rate: Percent::of_count(wins, count),
            }
        })
        .collect()
}
