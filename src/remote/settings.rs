//! Settings document endpoints.

use super::*;

impl RemoteClient {
    pub async fn get_settings(&self) -> Result<SettingsDocument> {
        with_retries("get settings", || async move {
            let resp = self
                .client
                .get(self.url("/settings"))
                .send()
                .await
                .context("send")?;
            self.ensure_ok(resp, "get settings")?
                .json::<SettingsDocument>()
                .await
                .context("parse settings")
        })
        .await
    }

    /// `POST /api/config/update` with either a full document or a sparse patch.
    ///
    /// The daemon answers with a plain-text acknowledgement, which is ignored.
    pub async fn update_config(&self, body: &serde_json::Value) -> Result<()> {
        log::debug!("POST /api/config/update");
        let resp = self
            .client
            .post(self.url("/api/config/update"))
            .json(body)
            .send()
            .await
            .context("update config request")?;
        self.ensure_ok(resp, "update config")?;
        Ok(())
    }
}
