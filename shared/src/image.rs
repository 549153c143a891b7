use crate::error::AnalysisError;
use async_trait::async_trait;

/// How the user handed us the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    Picker,
    Drop,
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

#[async_trait(?Send)]
pub trait ImageSource: Clone {
    fn name(&self) -> String;
    fn media_type(&self) -> String;
    async fn read_bytes(&self) -> Result<Vec<u8>, AnalysisError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct InMemoryImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl InMemoryImage {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

#[async_trait(?Send)]
impl ImageSource for InMemoryImage {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, AnalysisError> {
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_media_types() {
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type("image/jpeg"));
        assert!(!is_image_media_type("application/pdf"));
        assert!(!is_image_media_type(""));
        assert!(!is_image_media_type("text/image/png"));
    }
}
