use anyhow::{Context, Result};

use crate::model::{RemoteConfig, SettingsDocument, Show, ShowId, ShowListResponse};

mod http_client;
use self::http_client::with_retries;

mod settings;
mod shows;

/// Typed access to the gumshoe daemon's JSON API.
pub struct RemoteClient {
    remote: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(remote: RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("gumshoe-console")
            .timeout(remote.timeout())
            .build()
            .context("build reqwest client")?;
        Ok(Self { remote, client })
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }

    /// Plain-text health probe (`GET /status`).
    pub async fn status(&self) -> Result<String> {
        with_retries("get status", || async move {
            let resp = self
                .client
                .get(self.url("/status"))
                .send()
                .await
                .context("send")?;
            self.ensure_ok(resp, "get status")?
                .text()
                .await
                .context("read status body")
        })
        .await
    }
}
