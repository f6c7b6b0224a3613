use clap::Parser;

pub const DEFAULT_PHOTOS_URL: &str = "http://elm-in-action.com/photos/list.json";
pub const DEFAULT_URL_PREFIX: &str = "http://elm-in-action.com/";

/// Command-line configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "photo-groove", version, about = "Browse photos and play with filters")]
pub struct Config {
    /// Where the JSON photo list is fetched from
    #[arg(long, default_value = DEFAULT_PHOTOS_URL)]
    pub photos_url: String,

    /// Prefix for thumbnail and large image URLs
    #[arg(long, default_value = DEFAULT_URL_PREFIX, value_parser = parse_prefix)]
    pub url_prefix: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Image paths are appended directly, so the prefix must end in a slash
fn parse_prefix(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err("URL prefix cannot be empty".to_string());
    }
    if raw.ends_with('/') {
        Ok(raw.to_string())
    } else {
        Ok(format!("{}/", raw))
    }
}
