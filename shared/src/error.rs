use thiserror::Error;

pub const NO_IMAGE_SELECTED: &str = "No image selected";
pub const GENERIC_FAILURE: &str = "Analysis failed";
pub const GENERIC_EXCEPTION: &str = "Something went wrong during analysis";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no image selected")]
    NoImageSelected,

    #[error("failed to read image: {0}")]
    ReadFailed(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("server error {status}: {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Server { status: u16, detail: Option<String> },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoImageSelected => NO_IMAGE_SELECTED.to_string(),
            AnalysisError::Server { detail: Some(detail), .. } => detail.clone(),
            AnalysisError::Server { detail: None, .. } => GENERIC_FAILURE.to_string(),
            AnalysisError::Transport(message) | AnalysisError::ReadFailed(message)
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => GENERIC_EXCEPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(AnalysisError::NoImageSelected.user_message(), NO_IMAGE_SELECTED);
        assert_eq!(
            AnalysisError::Server { status: 400, detail: Some("Invalid image format".into()) }
                .user_message(),
            "Invalid image format"
        );
        assert_eq!(
            AnalysisError::Server { status: 500, detail: None }.user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(
            AnalysisError::Transport("Failed to fetch".into()).user_message(),
            "Failed to fetch"
        );
        assert_eq!(AnalysisError::Transport("  ".into()).user_message(), GENERIC_EXCEPTION);
        assert_eq!(
            AnalysisError::MalformedResponse("expected value".into()).user_message(),
            GENERIC_EXCEPTION
        );
    }
}
