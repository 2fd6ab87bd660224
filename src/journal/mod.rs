pub mod normalizer;
pub mod record;

pub use normalizer::{normalize, normalize_all, NormalizeError};
pub use record::TradeRecord;
