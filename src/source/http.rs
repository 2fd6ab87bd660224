use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::journal::TradeRecord;
use crate::source::TradeSource;

const TRADES_PATH: &str = "/api/trades";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The journal's REST endpoint (`GET /api/trades`).
pub struct HttpSource {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl HttpSource {
    /// `base` may be the server root or the full trades URL.
    pub fn new(base: &str, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url: trades_url(base),
            api_token,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn trades_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.ends_with(TRADES_PATH) {
        base.to_string()
    } else {
        format!("{}{}", base, TRADES_PATH)
    }
}

#[async_trait]
impl TradeSource for HttpSource {
    async fn fetch_trades(&mut self) -> Result<Vec<TradeRecord>> {
        debug!("GET {}", self.url);
        let mut req = self.client.get(&self.url).timeout(REQUEST_TIMEOUT);
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.context("Failed to fetch trades")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Journal API error {}: {}", status, body);
        }

        let records: Vec<TradeRecord> = resp
            .json()
            .await
            .context("Failed to parse trades response")?;
        info!("Fetched {} trade records from {}", records.len(), self.url);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.url)
    }
}
