//! Tracked-show endpoints.

use super::*;

impl RemoteClient {
    pub async fn list_shows(&self) -> Result<Vec<Show>> {
        with_retries("list shows", || async move {
            let resp = self
                .client
                .get(self.url("/api/shows"))
                .send()
                .await
                .context("send")?;
            let body: ShowListResponse = self
                .ensure_ok(resp, "list shows")?
                .json()
                .await
                .context("parse shows")?;
            Ok(body.into_shows())
        })
        .await
    }

    pub async fn get_show(&self, id: ShowId) -> Result<Show> {
        with_retries(&format!("get show {}", id), || async move {
            let resp = self
                .client
                .get(self.url(&format!("/api/show/{}", id)))
                .send()
                .await
                .context("send")?;
            self.ensure_ok(resp, "get show")?
                .json::<Show>()
                .await
                .context("parse show")
        })
        .await
    }

    pub async fn create_show(&self, show: &Show) -> Result<Show> {
        log::debug!("POST /api/show/new title={:?}", show.title);
        let resp = self
            .client
            .post(self.url("/api/show/new"))
            .json(show)
            .send()
            .await
            .context("create show request")?;
        let created: Show = self
            .ensure_ok(resp, "create show")?
            .json()
            .await
            .context("parse created show")?;
        Ok(created)
    }

    pub async fn update_show(&self, id: ShowId, show: &Show) -> Result<()> {
        log::debug!("POST /api/show/update/{}", id);
        let resp = self
            .client
            .post(self.url(&format!("/api/show/update/{}", id)))
            .json(show)
            .send()
            .await
            .context("update show request")?;
        self.ensure_ok(resp, "update show")?;
        Ok(())
    }

    pub async fn delete_show(&self, id: ShowId) -> Result<()> {
        log::debug!("DELETE /api/show/delete/{}", id);
        let resp = self
            .client
            .delete(self.url(&format!("/api/show/delete/{}", id)))
            .send()
            .await
            .context("delete show request")?;
        self.ensure_ok(resp, "delete show")?;
        Ok(())
    }
}
