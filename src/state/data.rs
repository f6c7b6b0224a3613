/// Shared data structures for the gallery
///
/// These structs represent the data model that flows between
/// the photo server, the update loop and the filter renderer.

use serde::{Deserialize, Serialize};

/// Title given to photos the server sends without one
pub const UNTITLED: &str = "(untitled)";

/// Represents a single photo offered by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Photo {
    /// Path relative to the URL prefix; also the photo's identity
    pub url: String,
    /// File size in KB
    pub size: u32,
    /// Human-readable title
    #[serde(default = "untitled")]
    pub title: String,
}

fn untitled() -> String {
    UNTITLED.to_string()
}

/// How large thumbnails are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ThumbnailSize {
    pub const ALL: [ThumbnailSize; 3] = [
        ThumbnailSize::Small,
        ThumbnailSize::Medium,
        ThumbnailSize::Large,
    ];

    /// Display class, also used as the radio label
    pub fn class(self) -> &'static str {
        match self {
            ThumbnailSize::Small => "small",
            ThumbnailSize::Medium => "med",
            ThumbnailSize::Large => "large",
        }
    }

    /// Thumbnail width in logical pixels
    pub fn width(self) -> f32 {
        match self {
            ThumbnailSize::Small => 50.0,
            ThumbnailSize::Medium => 100.0,
            ThumbnailSize::Large => 200.0,
        }
    }
}

/// One named filter slider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderInfo {
    pub name: String,
    /// Position in `0..=MAX_SLIDER_POSITION`
    pub position: u32,
}

/// A slider's position normalized for the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterInfo {
    pub name: String,
    /// Amount in `0.0..=1.0`
    pub amount: f64,
}

/// Everything the renderer needs to draw the large image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Full URL of the large image
    pub url: String,
    pub filters: Vec<FilterInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        let classes: Vec<&str> = ThumbnailSize::ALL.iter().map(|s| s.class()).collect();
        assert_eq!(classes, vec!["small", "med", "large"]);
    }

    #[test]
    fn test_filter_options_serialize_shape() {
        let options = FilterOptions {
            url: "http://elm-in-action.com/large/1.jpeg".to_string(),
            filters: vec![FilterInfo { name: "Hue".to_string(), amount: 0.5 }],
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["url"], "http://elm-in-action.com/large/1.jpeg");
        assert_eq!(json["filters"][0]["name"], "Hue");
        assert_eq!(json["filters"][0]["amount"], 0.5);
    }
}
