/// Message handling for the gallery
///
/// `update` is the only place the model changes. It never performs I/O:
/// anything that must happen outside the model comes back as an `Effect`
/// for the application shell to carry out.

use rand::Rng;

use super::data::{FilterOptions, Photo, ThumbnailSize};
use super::filters::project;
use super::model::{Model, LOAD_ERROR_MESSAGE, MAX_SLIDER_POSITION};
use crate::error::GalleryError;

/// Gallery messages (events)
#[derive(Debug, Clone)]
pub enum Msg {
    /// Renderer reported new status text
    SetStatus(String),
    /// A filter slider moved
    SetSlider { name: String, position: u32 },
    /// Select the photo at this index in the list
    SelectByIndex(usize),
    /// A thumbnail was clicked
    SelectByUrl(String),
    /// User clicked "Surprise Me!"
    SurpriseMe,
    /// User picked a thumbnail size
    SetSize(ThumbnailSize),
    /// Photo list fetch finished
    LoadPhotos(Result<Vec<Photo>, GalleryError>),
}

/// Follow-up work requested by `update`
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Hand this payload to the filter renderer
    ApplyFilters(FilterOptions),
}

impl Effect {
    fn project(model: &Model, url_prefix: &str) -> Self {
        match project(model, url_prefix) {
            Some(options) => Effect::ApplyFilters(options),
            None => Effect::None,
        }
    }
}

/// Apply one message to the model.
///
/// Returns the new model and the effect it asks for. Messages whose
/// arguments make no sense (unknown slider, index out of range, surprise
/// with no photos) leave the model unchanged and request nothing.
pub fn update<R: Rng>(
    model: &Model,
    msg: Msg,
    url_prefix: &str,
    rng: &mut R,
) -> (Model, Effect) {
    log::debug!("update: {:?}", msg);

    match msg {
        Msg::SetStatus(status) => (Model { status, ..model.clone() }, Effect::None),

        Msg::SetSlider { name, position } => {
            let Some(index) = model.sliders.iter().position(|s| s.name == name) else {
                log::warn!("Ignoring unknown slider {:?}", name);
                return (model.clone(), Effect::None);
            };
            let mut next = model.clone();
            next.sliders[index].position = position.min(MAX_SLIDER_POSITION);
            let effect = Effect::project(&next, url_prefix);
            (next, effect)
        }

        Msg::SelectByIndex(index) => match model.photos.get(index) {
            Some(photo) => select(model, photo.url.clone(), url_prefix),
            None => {
                log::warn!(
                    "Ignoring selection of index {} ({} photos)",
                    index,
                    model.photos.len()
                );
                (model.clone(), Effect::None)
            }
        },

        Msg::SelectByUrl(url) => select(model, url, url_prefix),

        Msg::SurpriseMe => {
            if model.photos.is_empty() {
                log::warn!("Surprise Me with no photos loaded");
                return (model.clone(), Effect::None);
            }
            let index = rng.random_range(0..model.photos.len());
            select(model, model.photos[index].url.clone(), url_prefix)
        }

        Msg::SetSize(chosen_size) => (Model { chosen_size, ..model.clone() }, Effect::None),

        Msg::LoadPhotos(Ok(photos)) => {
            let selected_url = photos.first().map(|photo| photo.url.clone());
            let next = Model {
                photos,
                selected_url,
                ..model.clone()
            };
            let effect = Effect::project(&next, url_prefix);
            (next, effect)
        }

        Msg::LoadPhotos(Err(err)) => {
            log::error!("Failed to load photos: {}", err);
            let next = Model {
                loading_error: Some(LOAD_ERROR_MESSAGE.to_string()),
                ..model.clone()
            };
            (next, Effect::None)
        }
    }
}

fn select(model: &Model, url: String, url_prefix: &str) -> (Model, Effect) {
    let next = Model {
        selected_url: Some(url),
        ..model.clone()
    };
    let effect = Effect::project(&next, url_prefix);
    (next, effect)
}
