//! Upload–analyze workflow behind the Analyze page.
//!
//! The workflow owns the selected image, its preview handle, the last result and
//! the last error. Only one of result and error is ever populated. Each analysis
//! is tagged with a token; an outcome whose token is no longer the in-flight one
//! is discarded, so a slow response can never overwrite a newer selection.

use crate::api::AnalysisResult;
use crate::client::AnalysisClient;
use crate::error::AnalysisError;
use crate::image::{ImageSource, SelectionSource, is_image_media_type};
use crate::transport::AnalysisTransport;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowStatus {
    Idle,
    Selecting,
    Analyzing,
    Succeeded,
    Failed,
}

/// Handed out when an analysis starts; the outcome must be reported back
/// with the same token.
#[derive(Clone, Debug)]
pub struct AnalysisTicket<I> {
    pub token: u64,
    pub image: I,
}

/// `P` is the preview handle. Dropping it releases whatever backs it.
pub struct AnalyzeWorkflow<I, P> {
    image: Option<I>,
    preview: Option<P>,
    status: WorkflowStatus,
    result: Option<AnalysisResult>,
    error: Option<String>,
    last_token: u64,
    in_flight: Option<u64>,
}

impl<I, P> Default for AnalyzeWorkflow<I, P> {
    fn default() -> Self {
        Self {
            image: None,
            preview: None,
            status: WorkflowStatus::Idle,
            result: None,
            error: None,
            last_token: 0,
            in_flight: None,
        }
    }
}

impl<I: ImageSource, P> AnalyzeWorkflow<I, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.status == WorkflowStatus::Analyzing
    }

    /// Replaces the current selection. Dropped files that are not images are
    /// ignored without touching any state; picker selections are trusted.
    pub fn select_image<F>(&mut self, image: I, source: SelectionSource, make_preview: F) -> bool
    where
        F: FnOnce(&I) -> P,
    {
        if source == SelectionSource::Drop && !is_image_media_type(&image.media_type()) {
            log::debug!("Ignoring dropped non-image file {}", image.name());
            return false;
        }

        self.preview = None;
        self.preview = Some(make_preview(&image));
        log::info!("Selected {} ({})", image.name(), image.media_type());
        self.image = Some(image);
        self.result = None;
        self.error = None;
        self.in_flight = None;
        self.status = WorkflowStatus::Selecting;
        true
    }

    /// Moves to `analyzing` and returns the ticket for the request to send.
    /// Without a selection this records the no-selection error and returns
    /// `None`; no request must be sent then.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket<I>> {
        let Some(image) = self.image.as_ref() else {
            self.result = None;
            self.error = Some(AnalysisError::NoImageSelected.user_message());
            return None;
        };

        self.last_token += 1;
        let token = self.last_token;
        self.in_flight = Some(token);
        self.status = WorkflowStatus::Analyzing;
        self.result = None;
        self.error = None;

        Some(AnalysisTicket {
            token,
            image: image.clone(),
        })
    }

    /// Applies the outcome of the request identified by `token`. Returns
    /// `false` when the token is stale and the outcome was dropped.
    pub fn finish_analysis(
        &mut self,
        token: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> bool {
        if self.in_flight != Some(token) {
            log::debug!("Discarding stale analysis response #{}", token);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.status = WorkflowStatus::Succeeded;
            }
            Err(e) => {
                log::error!("Analysis #{} failed: {}", token, e);
                self.result = None;
                self.error = Some(e.user_message());
                self.status = WorkflowStatus::Failed;
            }
        }
        true
    }

    /// Runs one full analysis against `client`.
    pub async fn analyze<T: AnalysisTransport>(&mut self, client: &AnalysisClient<T>) -> bool {
        let Some(ticket) = self.begin_analysis() else {
            return false;
        };
        let outcome = client.analyze(&ticket.image).await;
        self.finish_analysis(ticket.token, outcome)
    }

    /// Clears everything and releases the preview. Refused while analyzing.
    pub fn reset(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }

        self.image = None;
        self.preview = None;
        self.result = None;
        self.error = None;
        self.in_flight = None;
        self.status = WorkflowStatus::Idle;
        true
    }
}
