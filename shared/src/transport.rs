use crate::error::AnalysisError;
use async_trait::async_trait;

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Sends JSON to the analysis service. The browser build backs this with
/// `fetch`; tests use an in-memory recorder.
#[async_trait(?Send)]
pub trait AnalysisTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AnalysisError>;
}
