use clap::Parser;
use iced::{Element, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod config;
mod error;
mod render;
mod state;
mod ui;

use config::Config;
use error::GalleryError;
use render::Rendered;
use state::model::Model;
use state::photos::{fetch_bytes, fetch_photos};
use state::update::{update, Effect, Msg};
use ui::canvas::Canvas;
use ui::{gallery, layout};

/// Main application state
struct PhotoGroove {
    /// Everything the gallery logic knows about
    model: Model,
    /// Thumbnails and the filtered large image
    canvas: Canvas,
    config: Config,
    /// Source for "Surprise Me!"
    rng: StdRng,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Anything the gallery logic handles
    Gallery(Msg),
    /// A thumbnail download finished
    ThumbnailLoaded(String, Result<Vec<u8>, GalleryError>),
    /// The renderer finished the request with this ticket
    Rendered(u64, Result<Rendered, GalleryError>),
}

impl PhotoGroove {
    /// Create a new instance of the application and start loading photos
    fn new(config: Config) -> (Self, Task<Message>) {
        let model = Model::init(render::VERSION);
        log::info!("{}", model.status);

        let fetch = Task::perform(fetch_photos(config.photos_url.clone()), |result| {
            Message::Gallery(Msg::LoadPhotos(result))
        });

        (
            PhotoGroove {
                model,
                canvas: Canvas::default(),
                config,
                rng: StdRng::from_rng(&mut rand::rng()),
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => {
                let loaded = loads_photos(&msg);
                let (model, effect) =
                    update(&self.model, msg, &self.config.url_prefix, &mut self.rng);
                self.model = model;

                let effect = self.run_effect(effect);
                if loaded {
                    Task::batch([effect, self.fetch_thumbnails()])
                } else {
                    effect
                }
            }
            Message::ThumbnailLoaded(url, Ok(bytes)) => {
                self.canvas.set_thumbnail(url, bytes);
                Task::none()
            }
            Message::ThumbnailLoaded(url, Err(err)) => {
                log::warn!("Thumbnail {} unavailable: {}", url, err);
                Task::none()
            }
            Message::Rendered(ticket, result) => match self.canvas.finish(ticket, result) {
                Some(status) => Task::done(Message::Gallery(Msg::SetStatus(status))),
                None => Task::none(),
            },
        }
    }

    /// Carry out what the gallery logic asked for
    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::ApplyFilters(options) => {
                let (ticket, cached) = self.canvas.request(&options.url);
                log::debug!("Render {} requested for {}", ticket, options.url);
                Task::perform(
                    render::render(options, cached),
                    move |result| Message::Rendered(ticket, result),
                )
            }
        }
    }

    /// Download every thumbnail of the current photo list
    fn fetch_thumbnails(&self) -> Task<Message> {
        let requests = thumbnail_requests(&self.model, &self.config.url_prefix);
        Task::batch(requests.into_iter().map(|(url, src)| {
            Task::perform(fetch_bytes(src), move |result| {
                Message::ThumbnailLoaded(url.clone(), result)
            })
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let view = layout::describe(&self.model, &self.config.url_prefix);
        gallery::view(view, &self.canvas).map(Message::Gallery)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Only a successful photo-list load brings new thumbnails to fetch
fn loads_photos(msg: &Msg) -> bool {
    matches!(msg, Msg::LoadPhotos(Ok(_)))
}

/// `(photo url, thumbnail src)` for every loaded photo
fn thumbnail_requests(model: &Model, url_prefix: &str) -> Vec<(String, String)> {
    model
        .photos
        .iter()
        .map(|photo| (photo.url.clone(), layout::thumbnail_src(url_prefix, &photo.url)))
        .collect()
}

fn main() -> iced::Result {
    let config = Config::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    iced::application(layout::TITLE, PhotoGroove::update, PhotoGroove::view)
        .theme(PhotoGroove::theme)
        .centered()
        .run_with(move || PhotoGroove::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::Photo;

    fn photo(url: &str) -> Photo {
        Photo {
            url: url.to_string(),
            size: 1,
            title: "(untitled)".to_string(),
        }
    }

    #[test]
    fn test_thumbnails_follow_successful_load_only() {
        assert!(loads_photos(&Msg::LoadPhotos(Ok(vec![photo("1.jpeg")]))));
        assert!(loads_photos(&Msg::LoadPhotos(Ok(Vec::new()))));
        assert!(!loads_photos(&Msg::LoadPhotos(Err(GalleryError::Status(500)))));
        assert!(!loads_photos(&Msg::SurpriseMe));
        assert!(!loads_photos(&Msg::SelectByUrl("1.jpeg".to_string())));
    }

    #[test]
    fn test_thumbnail_requests() {
        let mut model = Model::init(1.0);
        assert!(thumbnail_requests(&model, "http://localhost/").is_empty());

        model.photos = vec![photo("1.jpeg"), photo("2.jpeg")];
        assert_eq!(
            thumbnail_requests(&model, "http://localhost/"),
            vec![
                ("1.jpeg".to_string(), "http://localhost/1.jpeg".to_string()),
                ("2.jpeg".to_string(), "http://localhost/2.jpeg".to_string()),
            ]
        );
    }
}
