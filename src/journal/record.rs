use serde::{Deserialize, Serialize};

/// A stored decimal: the database hands back fixed-precision decimals as
/// strings, older rows and hand-written fixtures carry plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredDecimal {
    Number(f64),
    Text(String),
}

impl StoredDecimal {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            StoredDecimal::Number(v) if v.is_finite() => Some(*v),
            StoredDecimal::Number(_) => None,
            StoredDecimal::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

/// Serial ids come back as integers, client-generated ids as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for StoredId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoredId::Int(v) => write!(f, "{}", v),
            StoredId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A trade row exactly as the journal API serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: StoredId,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub exit_date: Option<String>,
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default)]
    pub pair: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub target: Option<StoredDecimal>,
    #[serde(default)]
    pub stop_loss: Option<StoredDecimal>,
    #[serde(default)]
    pub sl_pips: Option<StoredDecimal>,
    #[serde(default)]
    pub tp_pips: Option<StoredDecimal>,
    #[serde(default)]
    pub rr: Option<StoredDecimal>,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub pnl: Option<StoredDecimal>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub confluences_pro: Option<Vec<String>>,
    #[serde(default)]
    pub confluences_contro: Option<Vec<String>>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
}
