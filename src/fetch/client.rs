use async_trait::async_trait;
use reqwest::{Request, Response};

/// Seam over request execution so tests can substitute canned responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
