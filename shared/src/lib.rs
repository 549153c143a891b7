pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod route;
pub mod transport;
pub mod workflow;

pub use api::{
    ANALYZE_BASE64_PATH, AnalysisResult, AnalyzeRequest, MetricField, MetricTier, Metrics,
    interpret_reply,
};
pub use client::AnalysisClient;
pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use error::AnalysisError;
pub use image::{ImageSource, InMemoryImage, SelectionSource, is_image_media_type};
pub use route::Route;
pub use transport::{AnalysisTransport, HttpReply};
pub use workflow::{AnalysisTicket, AnalyzeWorkflow, WorkflowStatus};
