pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use anyhow::Result;
use async_trait::async_trait;

use crate::journal::TradeRecord;

/// Where stored trade rows come from. Statistics never call this; the
/// binary resolves the rows first and hands plain data to the analytics.
#[async_trait]
pub trait TradeSource: Send + Sync {
    async fn fetch_trades(&mut self) -> Result<Vec<TradeRecord>>;
    fn describe(&self) -> String;
}

/// Pick a source from a command-line location: URLs go over HTTP,
/// anything else is read as a JSON file.
pub fn from_location(location: &str, api_token: Option<String>) -> Box<dyn TradeSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location, api_token))
    } else {
        Box::new(FileSource::new(location))
    }
}
