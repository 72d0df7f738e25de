use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures surfaced by the settings and show stores.
///
/// Local state is never left half-applied: after any of these the caller can
/// retry the same action.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("settings have not been loaded")]
    NotLoaded,

    #[error("no show at index {0}")]
    NoSuchRow(usize),

    #[error("a request for {0} is already in flight")]
    Busy(String),

    #[error("load {what} failed")]
    LoadFailure {
        what: String,
        #[source]
        source: BoxError,
    },

    #[error("{what} failed")]
    SubmitFailure {
        what: String,
        #[source]
        source: BoxError,
    },

    #[error("{what} timed out")]
    Timeout { what: String },
}

impl SyncError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        SyncError::InvalidInput(msg.into())
    }

    /// True for failed or timed-out requests, after which repeating the same
    /// action may succeed. `Busy` is not retryable: wait for the request in
    /// flight instead.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SyncError::LoadFailure { .. } | SyncError::SubmitFailure { .. } | SyncError::Timeout { .. }
        )
    }

    pub(crate) fn load(what: &str, err: anyhow::Error) -> Self {
        if is_timeout(&err) {
            return SyncError::Timeout {
                what: format!("load {}", what),
            };
        }
        SyncError::LoadFailure {
            what: what.to_string(),
            source: err.into(),
        }
    }

    pub(crate) fn submit(what: &str, err: anyhow::Error) -> Self {
        if is_timeout(&err) {
            return SyncError::Timeout {
                what: what.to_string(),
            };
        }
        SyncError::SubmitFailure {
            what: what.to_string(),
            source: err.into(),
        }
    }
}

fn is_timeout(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<reqwest::Error>()
            .is_some_and(|e| e.is_timeout())
    })
}
