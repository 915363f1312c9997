//! Error taxonomy for the report pipeline.
//!
//! Every failure is surfaced to the caller without retry; re-running the
//! pipeline is the only recovery path.

use thiserror::Error;

/// A remote tabular fetch failed: bad endpoint, transport failure,
/// non-success status, or an unparseable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url {endpoint}: {detail}")]
    Endpoint { endpoint: String, detail: String },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status {status}: {detail}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("unparseable response body from {endpoint}: {source}")]
    Body {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The object store rejected a put.
#[derive(Debug, Error)]
#[error("writing {bucket}/{key} failed: {detail}")]
pub struct WriteError {
    pub bucket: String,
    pub key: String,
    pub detail: String,
}

/// Failure of a single granularity's report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A fetch phase failed; `context` names which one.
    #[error("{context}: {source}")]
    BadRequest {
        context: &'static str,
        #[source]
        source: FetchError,
    },

    /// The count query succeeded but returned zero rows. Distinguishable
    /// from transport failures so callers can tell a dead query from a dead
    /// endpoint.
    #[error("pedestrian count query returned no rows")]
    EmptyInput,

    #[error("report serialization failed: {0}")]
    Serialize(#[from] csv::Error),

    #[error(transparent)]
    Write(#[from] WriteError),
}
