use async_trait::async_trait;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_net::http::Request;
use shared::{AnalysisError, AnalysisTransport, HttpReply, ImageSource};

/// `fetch`-backed transport for the analysis service.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl AnalysisTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AnalysisError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AnalysisError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}

/// A file picked or dropped by the user.
#[derive(Clone)]
pub struct BrowserImage(pub GlooFile);

impl BrowserImage {
    pub fn preview(&self) -> ObjectUrl {
        ObjectUrl::from(self.0.clone())
    }
}

impl From<web_sys::File> for BrowserImage {
    fn from(file: web_sys::File) -> Self {
        Self(GlooFile::from(file))
    }
}

#[async_trait(?Send)]
impl ImageSource for BrowserImage {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.raw_mime_type()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, AnalysisError> {
        gloo_file::futures::read_as_bytes(&self.0)
            .await
            .map_err(|e| AnalysisError::ReadFailed(e.to_string()))
    }
}
