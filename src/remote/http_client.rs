use std::future::Future;

use super::*;

/// Retries idempotent reads. Timeouts and HTTP status failures are returned
/// at once; only transport errors (refused connections, resets) are retried.
pub(super) async fn with_retries<T, F, Fut>(label: &str, mut f: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f().await {
            Ok(v) => return Ok(v),
            Err(err) => {
                let transient = is_transient(&err);
                last = Some(err);
                if !transient {
                    break;
                }
                if i + 1 < ATTEMPTS {
                    log::debug!("{}: attempt {} failed, retrying", label, i + 1);
                    tokio::time::sleep(std::time::Duration::from_millis(200 * (1 << i))).await;
                }
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

fn is_transient(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<reqwest::Error>()
            .is_some_and(|e| e.is_connect() || (e.is_request() && !e.is_timeout()))
    })
}

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::Response,
        label: &str,
    ) -> Result<reqwest::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED
            || resp.status() == reqwest::StatusCode::FORBIDDEN
        {
            anyhow::bail!(
                "{}: not logged in to gumshoed (sign in through the web UI first)",
                label
            );
        }
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!(
                "{}: endpoint not found (is gumshoed running at {}?)",
                label,
                self.remote.base_url
            );
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.remote.base_url, path)
    }
}
