use thiserror::Error;

/// Navigation resolution error.
///
/// The source system collapses every failure — store errors and lookups for
/// an ordinal that is not in the fetched set — into one retrieval-failure
/// signal, surfaced to the client as HTTP 500. There is no distinct
/// not-found kind and no retry.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("{0}")]
    Upstream(String),
}

impl NavError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}
