/// Projection of the model onto the renderer's filter payload
///
/// Slider positions are integers in `0..=MAX_SLIDER_POSITION`; the renderer
/// takes amounts in `0.0..=1.0`. The projection is the only place that
/// conversion happens.

use super::data::{FilterInfo, FilterOptions, SliderInfo};
use super::model::{Model, MAX_SLIDER_POSITION};

/// Normalize one slider into a filter amount
pub fn slider_to_filter(slider: &SliderInfo) -> FilterInfo {
    FilterInfo {
        name: slider.name.clone(),
        amount: f64::from(slider.position) / f64::from(MAX_SLIDER_POSITION),
    }
}

/// URL of the large rendition of a photo
pub fn large_url(url_prefix: &str, photo_url: &str) -> String {
    format!("{}large/{}", url_prefix, photo_url)
}

/// Build the renderer payload for the current selection.
///
/// Returns `None` when nothing is selected.
pub fn project(model: &Model, url_prefix: &str) -> Option<FilterOptions> {
    let selected = model.selected_url.as_deref()?;
    Some(FilterOptions {
        url: large_url(url_prefix, selected),
        filters: model.sliders.iter().map(slider_to_filter).collect(),
    })
}
