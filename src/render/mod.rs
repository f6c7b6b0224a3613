/// "Pasta": the filter renderer behind the large image
///
/// The gallery hands this module a `FilterOptions` payload every time the
/// selection or a slider changes. The renderer downloads the large image
/// (once per URL), applies the filters on the blocking pool and reports a
/// status line that flows back into the gallery as `SetStatus`.

pub mod filters;

use image::RgbaImage;
use std::sync::Arc;

use crate::error::GalleryError;
use crate::state::data::FilterOptions;
use crate::state::photos::fetch_bytes;

/// Renderer version, shown in the initial status line
pub const VERSION: f64 = 0.5;

/// Decoded, unfiltered large image
#[derive(Debug, Clone)]
pub struct Source {
    pub url: String,
    pub image: Arc<RgbaImage>,
}

/// Result of one render request
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Source used, kept so the next render of the same photo skips the download
    pub source: Source,
    pub image: RgbaImage,
    pub status: String,
}

/// Render `options`, reusing `cached` when it holds the same image.
pub async fn render(
    options: FilterOptions,
    cached: Option<Source>,
) -> Result<Rendered, GalleryError> {
    let source = match cached {
        Some(source) if source.url == options.url => source,
        _ => load_source(options.url.clone()).await?,
    };

    let image = Arc::clone(&source.image);
    let chain = options.filters.clone();
    // Spawn blocking because filtering is CPU-intensive
    let image = tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        filters::apply_all(&image, &chain, &mut rng)
    })
    .await?;

    let status = status_line(&options);
    log::info!("{}", status);

    Ok(Rendered { source, image, status })
}

async fn load_source(url: String) -> Result<Source, GalleryError> {
    log::debug!("Downloading large image {}", url);
    let bytes = fetch_bytes(url.clone()).await?;
    let image = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes).map(|img| img.to_rgba8())
    })
    .await??;

    Ok(Source {
        url,
        image: Arc::new(image),
    })
}

/// Status reported back to the gallery once a render finishes
pub fn status_line(options: &FilterOptions) -> String {
    let file = options.url.rsplit('/').next().unwrap_or(&options.url);
    let amounts: Vec<String> = options
        .filters
        .iter()
        .map(|f| format!("{} {:.2}", f.name, f.amount))
        .collect();
    format!("Rendered {} with {}", file, amounts.join(", "))
}
