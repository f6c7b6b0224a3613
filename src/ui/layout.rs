/// Pure description of what the gallery shows for a given model
///
/// `describe` is the view function proper. The iced widgets in `gallery.rs`
/// are a straight translation of the tree built here, so everything about
/// which controls exist and what they are bound to can be checked without
/// a window.

use crate::state::data::ThumbnailSize;
use crate::state::filters::large_url;
use crate::state::model::{Model, MAX_SLIDER_POSITION};
use crate::state::update::Msg;

pub const TITLE: &str = "Photo Groove";
pub const SURPRISE_LABEL: &str = "Surprise Me!";
pub const SIZE_HEADING: &str = "Thumbnail Size:";

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    /// Photo list failed to load; nothing else is shown
    Error(String),
    Gallery(GalleryLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryLayout {
    pub title: &'static str,
    pub surprise_label: &'static str,
    pub status: String,
    pub sliders: Vec<SliderRow>,
    pub size_heading: &'static str,
    pub sizes: Vec<SizeChoice>,
    pub chosen_size: ThumbnailSize,
    pub thumbnails: Vec<Thumbnail>,
    /// Full URL of the large image; `None` hides the canvas
    pub canvas: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderRow {
    pub label: String,
    pub max: u32,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizeChoice {
    pub size: ThumbnailSize,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    /// Full URL the thumbnail image is fetched from
    pub src: String,
    pub caption: String,
    pub selected: bool,
}

impl Thumbnail {
    /// Message raised when the thumbnail is clicked
    pub fn on_click(&self) -> Msg {
        Msg::SelectByUrl(self.url.clone())
    }
}

impl SliderRow {
    /// Message raised when the slider moves to `position`
    pub fn on_change(&self, position: u32) -> Msg {
        Msg::SetSlider {
            name: self.label.clone(),
            position,
        }
    }
}

/// Caption shown under and over a thumbnail
pub fn caption(title: &str, size: u32) -> String {
    format!("{} [{} KB]", title, size)
}

/// URL a thumbnail image is fetched from
pub fn thumbnail_src(url_prefix: &str, photo_url: &str) -> String {
    format!("{}{}", url_prefix, photo_url)
}

pub fn describe(model: &Model, url_prefix: &str) -> GalleryView {
    if let Some(error) = &model.loading_error {
        return GalleryView::Error(error.clone());
    }

    let selected = model.selected_url.as_deref();

    GalleryView::Gallery(GalleryLayout {
        title: TITLE,
        surprise_label: SURPRISE_LABEL,
        status: model.status.clone(),
        sliders: model
            .sliders
            .iter()
            .map(|s| SliderRow {
                label: s.name.clone(),
                max: MAX_SLIDER_POSITION,
                position: s.position,
            })
            .collect(),
        size_heading: SIZE_HEADING,
        sizes: ThumbnailSize::ALL
            .iter()
            .map(|&size| SizeChoice {
                size,
                label: size.class(),
                checked: size == model.chosen_size,
            })
            .collect(),
        chosen_size: model.chosen_size,
        thumbnails: model
            .photos
            .iter()
            .map(|photo| Thumbnail {
                url: photo.url.clone(),
                src: thumbnail_src(url_prefix, &photo.url),
                caption: caption(&photo.title, photo.size),
                selected: Some(photo.url.as_str()) == selected,
            })
            .collect(),
        canvas: selected.map(|url| large_url(url_prefix, url)),
    })
}
