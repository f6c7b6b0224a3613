use super::data::Photo;
use crate::error::GalleryError;

/// Decode the server's photo list.
///
/// The payload is a JSON array of `{url, size, title?}` records. A single
/// malformed record fails the whole batch; a missing `title` becomes
/// `"(untitled)"`.
pub fn decode_photos(json: &[u8]) -> Result<Vec<Photo>, GalleryError> {
    let photos: Vec<Photo> = serde_json::from_slice(json)?;
    Ok(photos)
}

/// Fetch a URL and return its body, treating non-2xx answers as errors
pub async fn fetch_bytes(url: String) -> Result<Vec<u8>, GalleryError> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Fetch and decode the photo list. Exactly one attempt is made.
pub async fn fetch_photos(url: String) -> Result<Vec<Photo>, GalleryError> {
    log::info!("Fetching photo list from {}", url);
    let body = fetch_bytes(url).await?;
    let photos = decode_photos(&body)?;
    log::info!("Decoded {} photos", photos.len());
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_defaults() {
        let photos = decode_photos(br#"[{"url":"a.jpeg","size":10}]"#).unwrap();
        assert_eq!(
            photos,
            vec![Photo {
                url: "a.jpeg".to_string(),
                size: 10,
                title: "(untitled)".to_string(),
            }]
        );
    }

    #[test]
    fn test_keeps_input_order_and_titles() {
        let json = br#"[
            {"url":"2.jpeg","size":20,"title":"Beach"},
            {"url":"1.jpeg","size":10}
        ]"#;
        let photos = decode_photos(json).unwrap();
        let urls: Vec<&str> = photos.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["2.jpeg", "1.jpeg"]);
        assert_eq!(photos[0].title, "Beach");
        assert_eq!(photos[1].title, "(untitled)");
    }

    #[test]
    fn test_missing_url_fails_whole_list() {
        let json = br#"[{"url":"ok.jpeg","size":1},{"size":10}]"#;
        assert!(matches!(decode_photos(json), Err(GalleryError::Decode(_))));
    }

    #[test]
    fn test_missing_size_fails_whole_list() {
        let json = br#"[{"url":"a.jpeg"}]"#;
        assert!(decode_photos(json).is_err());
    }

    #[test]
    fn test_wrong_type_fails() {
        assert!(decode_photos(br#"[{"url":"a.jpeg","size":"big"}]"#).is_err());
        assert!(decode_photos(br#"[{"url":7,"size":1}]"#).is_err());
    }

    #[test]
    fn test_not_an_array_fails() {
        assert!(decode_photos(br#"{"url":"a.jpeg","size":1}"#).is_err());
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(decode_photos(b"[]").unwrap(), Vec::new());
    }
}
