/// The gallery model: the one piece of state the update loop owns.

use super::data::{Photo, SliderInfo, ThumbnailSize};

/// Highest position any filter slider can take
pub const MAX_SLIDER_POSITION: u32 = 11;

/// Filter names, in the order they are shown and sent to the renderer
pub const FILTER_NAMES: [&str; 3] = ["Hue", "Ripple", "Noise"];

/// Text shown instead of the gallery when the photo list cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Error! (Try turning it off and on again?)";

/// Root state of the gallery.
///
/// Never mutated in place outside `update`; each message produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub photos: Vec<Photo>,
    pub status: String,
    pub selected_url: Option<String>,
    pub loading_error: Option<String>,
    pub chosen_size: ThumbnailSize,
    pub sliders: Vec<SliderInfo>,
}

impl Model {
    /// Initial model, before the photo list has arrived.
    ///
    /// `flag` is the renderer version, shown in the first status line.
    pub fn init(flag: f64) -> Self {
        Self {
            photos: Vec::new(),
            status: format!("Initializing Pasta v{}", flag),
            selected_url: None,
            loading_error: None,
            chosen_size: ThumbnailSize::default(),
            sliders: FILTER_NAMES
                .iter()
                .map(|name| SliderInfo {
                    name: name.to_string(),
                    position: 0,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_status() {
        assert_eq!(Model::init(0.5).status, "Initializing Pasta v0.5");
        assert_eq!(Model::init(2.0).status, "Initializing Pasta v2");
    }

    #[test]
    fn test_init_sliders() {
        let model = Model::init(1.0);
        let names: Vec<&str> = model.sliders.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, FILTER_NAMES.to_vec());
        assert!(model.sliders.iter().all(|s| s.position == 0));
        assert!(model.photos.is_empty());
        assert_eq!(model.selected_url, None);
        assert_eq!(model.loading_error, None);
        assert_eq!(model.chosen_size, ThumbnailSize::Medium);
    }
}
