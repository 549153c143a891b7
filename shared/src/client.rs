use crate::api::{ANALYZE_BASE64_PATH, AnalysisResult, AnalyzeRequest, interpret_reply};
use crate::config::ApiConfig;
use crate::error::AnalysisError;
use crate::image::ImageSource;
use crate::transport::AnalysisTransport;

/// Talks to the analysis service on behalf of the Analyze page.
#[derive(Clone, Debug)]
pub struct AnalysisClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: AnalysisTransport> AnalysisClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one image to `/api/analyze/base64` and interprets the reply.
    /// Issues at most one request; nothing is retried.
    pub async fn analyze<I: ImageSource>(&self, image: &I) -> Result<AnalysisResult, AnalysisError> {
        let bytes = image.read_bytes().await?;
        let request = AnalyzeRequest::from_bytes(&bytes);
        let body =
            serde_json::to_string(&request).map_err(|e| AnalysisError::Encode(e.to_string()))?;
        let url = self.config.endpoint(ANALYZE_BASE64_PATH);

        log::debug!("POST {} ({} bytes of {})", url, bytes.len(), image.media_type());
        let reply = self.transport.post_json(&url, body).await?;

        interpret_reply(reply.status, &reply.body).inspect_err(|e| {
            log::warn!("Analysis of {} failed: {}", image.name(), e);
        })
    }
}
