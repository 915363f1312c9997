//! Parameterized tabular fetch against a remote open-data endpoint.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::{Method, Request, Url};
use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::table::Table;

/// Issues a single GET to `endpoint` with the given query parameters and
/// parses the response as an array of row objects.
///
/// The response is assumed to be one complete page; pagination is not
/// followed. An empty array yields an empty [`Table`].
pub async fn fetch_table<C: HttpClient>(
    client: &C,
    endpoint: &str,
    params: &[(&str, String)],
) -> Result<Table, FetchError> {
    let mut url: Url = endpoint.parse().map_err(|e| FetchError::Endpoint {
        endpoint: endpoint.to_string(),
        detail: format!("{e}"),
    })?;

    for (name, value) in params {
        url.query_pairs_mut().append_pair(name, value);
    }

    let resp = client
        .execute(Request::new(Method::GET, url))
        .await
        .map_err(|source| FetchError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            endpoint: endpoint.to_string(),
            status,
            detail,
        });
    }

    let rows: Vec<Map<String, Value>> =
        resp.json().await.map_err(|source| FetchError::Body {
            endpoint: endpoint.to_string(),
            source,
        })?;

    Ok(Table::new(rows))
}
