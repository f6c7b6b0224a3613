/// Errors raised while talking to the photo server or rendering filters
///
/// Every variant carries a rendered message rather than the source error so
/// the whole enum stays `Clone` and can ride inside iced messages.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    /// Connection, TLS or body transfer failure
    #[error("request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status code
    #[error("server returned status {0}")]
    Status(u16),

    /// Photo list was not the expected JSON shape
    #[error("could not decode photo list: {0}")]
    Decode(String),

    /// Downloaded bytes were not a decodable image
    #[error("could not decode image: {0}")]
    Image(String),

    /// Background task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => GalleryError::Status(status.as_u16()),
            None => GalleryError::Http(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Decode(err.to_string())
    }
}

impl From<image::ImageError> for GalleryError {
    fn from(err: image::ImageError) -> Self {
        GalleryError::Image(err.to_string())
    }
}

impl From<tokio::task::JoinError> for GalleryError {
    fn from(err: tokio::task::JoinError) -> Self {
        GalleryError::Task(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_converts() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let converted = GalleryError::from(err);
        assert!(matches!(converted, GalleryError::Decode(_)));
        assert!(converted.to_string().starts_with("could not decode photo list"));
    }

    #[test]
    fn test_status_message() {
        assert_eq!(GalleryError::Status(404).to_string(), "server returned status 404");
    }
}
