//! Media resolution
//!
//! CMS media arrives in several shapes depending on which upstream type
//! authored it: a plain URL string, an object with a direct `url`, or a
//! record nesting the image under `image` or `previewImage`.

use serde_json::{Map, Value};
use storefront_core::models::Media;

/// Resolve any of the upstream media shapes to a canonical record.
///
/// Priority: direct `url`, then nested `image`, then nested
/// `previewImage`. Returns `None` when no usable URL is present.
pub fn resolve_media(raw: &Value) -> Option<Media> {
    if let Some(url) = raw.as_str() {
        return (!url.is_empty()).then(|| Media::new(url));
    }

    let object = raw.as_object()?;
    if let Some(url) = string_field(object, "url") {
        return Some(Media {
            url,
            alt: string_field(object, "altText").or_else(|| string_field(object, "alt")),
            width: dimension_field(object, "width"),
            height: dimension_field(object, "height"),
        });
    }

    for key in ["image", "previewImage"] {
        if let Some(nested) = object.get(key).and_then(Value::as_object) {
            if let Some(url) = string_field(nested, "url") {
                return Some(Media {
                    url,
                    alt: string_field(nested, "altText")
                        .or_else(|| string_field(nested, "alt")),
                    width: dimension_field(nested, "width"),
                    height: dimension_field(nested, "height"),
                });
            }
        }
    }

    None
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    let raw = object.get(key)?.as_str()?;
    (!raw.is_empty()).then(|| raw.to_string())
}

fn dimension_field(object: &Map<String, Value>, key: &str) -> Option<u32> {
    let raw = object.get(key)?.as_u64()?;
    u32::try_from(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_url_string() {
        let media = resolve_media(&json!("https://cdn.example/oak.png")).unwrap();
        assert_eq!(media.url, "https://cdn.example/oak.png");
        assert!(media.alt.is_none());

        assert!(resolve_media(&json!("")).is_none());
    }

    #[test]
    fn test_direct_url_object_wins_over_nested() {
        let media = resolve_media(&json!({
            "url": "https://cdn.example/direct.png",
            "altText": "Direct",
            "width": 800,
            "height": 600,
            "image": {"url": "https://cdn.example/nested.png"}
        }))
        .unwrap();

        assert_eq!(media.url, "https://cdn.example/direct.png");
        assert_eq!(media.alt.as_deref(), Some("Direct"));
        assert_eq!(media.width, Some(800));
        assert_eq!(media.height, Some(600));
    }

    #[test]
    fn test_nested_image_then_preview_image() {
        let media = resolve_media(&json!({
            "image": {"url": "https://cdn.example/image.png", "altText": "Nested"},
            "previewImage": {"url": "https://cdn.example/preview.png"}
        }))
        .unwrap();
        assert_eq!(media.url, "https://cdn.example/image.png");
        assert_eq!(media.alt.as_deref(), Some("Nested"));

        let media = resolve_media(&json!({
            "previewImage": {"url": "https://cdn.example/preview.png"}
        }))
        .unwrap();
        assert_eq!(media.url, "https://cdn.example/preview.png");
    }

    #[test]
    fn test_no_media() {
        assert!(resolve_media(&Value::Null).is_none());
        assert!(resolve_media(&json!({"altText": "no url"})).is_none());
        assert!(resolve_media(&json!(42)).is_none());
    }
}
