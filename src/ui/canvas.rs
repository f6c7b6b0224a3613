use iced::widget::image::Handle;
use std::collections::HashMap;

use crate::error::GalleryError;
use crate::render::{Rendered, Source};

/// Pixels the gallery displays but does not own in its model:
/// downloaded thumbnails and the latest filtered large image.
///
/// Every render request gets a ticket. Only the result for the newest
/// ticket is shown, so a slow render never overwrites a newer one.
#[derive(Debug, Default)]
pub struct Canvas {
    thumbnails: HashMap<String, Handle>,
    /// Latest shown render and the large image URL it was drawn from
    rendered: Option<(String, Handle)>,
    source: Option<Source>,
    ticket: u64,
    /// Large image URL of the newest request
    pending_url: Option<String>,
}

impl Canvas {
    /// Register a render request for `url`.
    ///
    /// Returns its ticket and the cached large image for the renderer to reuse.
    pub fn request(&mut self, url: &str) -> (u64, Option<Source>) {
        self.ticket += 1;
        self.pending_url = Some(url.to_string());
        (self.ticket, self.source.clone())
    }

    /// Take in a finished render.
    ///
    /// Returns the status line to report back to the gallery, or `None`
    /// when a newer request is pending. Downloaded sources are kept even
    /// from stale renders.
    pub fn finish(
        &mut self,
        ticket: u64,
        result: Result<Rendered, GalleryError>,
    ) -> Option<String> {
        let current = ticket == self.ticket;
        match result {
            Ok(rendered) => {
                self.keep_source(rendered.source.clone());
                if !current {
                    log::debug!("Dropping stale render {} (latest {})", ticket, self.ticket);
                    return None;
                }
                let (width, height) = rendered.image.dimensions();
                let handle = Handle::from_rgba(width, height, rendered.image.into_raw());
                self.rendered = Some((rendered.source.url, handle));
                Some(rendered.status)
            }
            Err(err) => {
                if !current {
                    log::debug!("Ignoring failure of stale render {}: {}", ticket, err);
                    return None;
                }
                log::error!("Render failed: {}", err);
                self.rendered = None;
                Some(format!("Render failed: {}", err))
            }
        }
    }

    /// Never evict the image the newest request needs for one it doesn't
    fn keep_source(&mut self, source: Source) {
        let pending = self.pending_url.as_deref();
        let cached_wanted = self
            .source
            .as_ref()
            .is_some_and(|cached| Some(cached.url.as_str()) == pending);
        let incoming_wanted = Some(source.url.as_str()) == pending;
        if incoming_wanted || !cached_wanted {
            self.source = Some(source);
        }
    }

    /// Render to show for the large image at `url`, if one was drawn from it
    pub fn rendered_for(&self, url: &str) -> Option<&Handle> {
        match &self.rendered {
            Some((rendered_url, handle)) if rendered_url == url => Some(handle),
            _ => None,
        }
    }

    pub fn set_thumbnail(&mut self, url: String, bytes: Vec<u8>) {
        self.thumbnails.insert(url, Handle::from_bytes(bytes));
    }

    pub fn thumbnail(&self, url: &str) -> Option<&Handle> {
        self.thumbnails.get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::sync::Arc;

    const LARGE_1: &str = "http://elm-in-action.com/large/1.jpeg";
    const LARGE_2: &str = "http://elm-in-action.com/large/2.jpeg";

    fn rendered(url: &str) -> Rendered {
        let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        Rendered {
            source: Source {
                url: url.to_string(),
                image: Arc::new(image.clone()),
            },
            image,
            status: format!("Rendered {}", url),
        }
    }

    fn cached_url(canvas: &Canvas) -> Option<&str> {
        canvas.source.as_ref().map(|s| s.url.as_str())
    }

    #[test]
    fn test_newest_render_wins() {
        let mut canvas = Canvas::default();
        let (first, _) = canvas.request(LARGE_1);
        let (second, _) = canvas.request(LARGE_2);

        assert_eq!(canvas.finish(first, Ok(rendered(LARGE_1))), None);
        assert!(canvas.rendered_for(LARGE_1).is_none());

        let status = canvas.finish(second, Ok(rendered(LARGE_2)));
        assert_eq!(status.as_deref(), Some("Rendered http://elm-in-action.com/large/2.jpeg"));
        assert!(canvas.rendered_for(LARGE_2).is_some());
        assert_eq!(cached_url(&canvas), Some(LARGE_2));
    }

    #[test]
    fn test_stale_render_still_caches_source() {
        let mut canvas = Canvas::default();
        let (first, cached) = canvas.request(LARGE_1);
        assert!(cached.is_none());
        canvas.request(LARGE_1);

        assert_eq!(canvas.finish(first, Ok(rendered(LARGE_1))), None);
        assert_eq!(cached_url(&canvas), Some(LARGE_1));

        // the next slider step reuses the download
        let (_, cached) = canvas.request(LARGE_1);
        assert_eq!(cached.map(|s| s.url), Some(LARGE_1.to_string()));
    }

    #[test]
    fn test_stale_source_does_not_evict_wanted_one() {
        let mut canvas = Canvas::default();
        let (first, _) = canvas.request(LARGE_1);
        let (second, _) = canvas.request(LARGE_2);

        assert!(canvas.finish(second, Ok(rendered(LARGE_2))).is_some());
        assert_eq!(canvas.finish(first, Ok(rendered(LARGE_1))), None);
        assert_eq!(cached_url(&canvas), Some(LARGE_2));
    }

    #[test]
    fn test_render_only_shown_for_its_own_url() {
        let mut canvas = Canvas::default();
        let (ticket, _) = canvas.request(LARGE_1);
        canvas.finish(ticket, Ok(rendered(LARGE_1)));

        canvas.request(LARGE_2);
        assert!(canvas.rendered_for(LARGE_1).is_some());
        assert!(canvas.rendered_for(LARGE_2).is_none());
    }

    #[test]
    fn test_current_failure_clears_render() {
        let mut canvas = Canvas::default();
        let (ticket, _) = canvas.request(LARGE_1);
        canvas.finish(ticket, Ok(rendered(LARGE_1)));

        let (ticket, _) = canvas.request(LARGE_1);
        let status = canvas.finish(ticket, Err(GalleryError::Status(500)));
        assert_eq!(status.as_deref(), Some("Render failed: server returned status 500"));
        assert!(canvas.rendered_for(LARGE_1).is_none());
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut canvas = Canvas::default();
        let (first, _) = canvas.request(LARGE_1);
        let (second, _) = canvas.request(LARGE_1);
        canvas.finish(second, Ok(rendered(LARGE_1)));

        let status = canvas.finish(first, Err(GalleryError::Http("reset".to_string())));
        assert_eq!(status, None);
        assert!(canvas.rendered_for(LARGE_1).is_some());
    }

    #[test]
    fn test_thumbnails_by_url() {
        let mut canvas = Canvas::default();
        assert!(canvas.thumbnail("1.jpeg").is_none());
        canvas.set_thumbnail("1.jpeg".to_string(), vec![0xFF, 0xD8]);
        assert!(canvas.thumbnail("1.jpeg").is_some());
        assert!(canvas.thumbnail("2.jpeg").is_none());
    }
}
