//! REST client for the invoice collection endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::LedgerConfig;
use crate::error::LedgerResult;
use crate::remote::RemoteSource;

#[derive(Clone, Debug)]
pub struct HttpRemote {
    client: Client,
    url: String,
}

impl HttpRemote {
    pub fn new(url: impl Into<String>) -> Self {
        HttpRemote {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.collection_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RemoteSource for HttpRemote {
    async fn fetch_all(&self) -> LedgerResult<Value> {
        debug!(url = %self.url, "GET invoice collection");

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }

    async fn create(&self, body: &Value) -> LedgerResult<Value> {
        debug!(url = %self.url, "POST invoice");

        let created = self
            .client
            .post(&self.url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(created)
    }
}
