//! Gallery post resolution.
//!
//! Gallery posts link to a `/gallery/` page instead of a media file; the
//! actual image URLs live in the post's `media_metadata` mapping.

use url::Url;

use crate::api::SavedPost;

/// Check whether a URL points at a gallery page.
pub fn is_gallery_url(raw_url: &str) -> bool {
    let Ok(parsed) = Url::parse(raw_url) else {
        return false;
    };

    parsed
        .path_segments()
        .map(|segments| segments.into_iter().any(|s| s == "gallery"))
        .unwrap_or(false)
}

/// Resolve a gallery post's metadata to concrete image URLs.
///
/// Each `Image` entry contributes the last URL of its candidate list (the
/// highest-resolution rendition). Entries without candidates are skipped
/// silently; a malformed entry is logged and does not affect its siblings.
/// The mapping's iteration order carries no meaning.
pub fn resolve_gallery(post: &SavedPost) -> Vec<String> {
    let Some(metadata) = &post.media_metadata else {
        tracing::debug!("Gallery URL without media metadata: {}", post.url);
        return Vec::new();
    };

    let mut urls = Vec::new();

    for (media_id, entry) in metadata {
        if entry.kind.as_deref() != Some("Image") {
            continue;
        }

        let Some(candidates) = &entry.candidates else {
            continue;
        };

        let Some(best) = candidates.last() else {
            continue;
        };

        match &best.url {
            Some(url) if !url.is_empty() => {
                // The upstream JSON HTML-escapes ampersands in these URLs.
                urls.push(url.replace("&amp;", "&"));
            }
            _ => {
                tracing::warn!(
                    "Gallery entry {} in post {} has no usable URL, skipping",
                    media_id,
                    post.id
                );
            }
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GalleryCandidate, GalleryEntry};
    use std::collections::HashMap;

    fn candidate(url: &str) -> GalleryCandidate {
        GalleryCandidate {
            url: Some(url.to_string()),
        }
    }

    fn gallery_post(entries: Vec<(&str, GalleryEntry)>) -> SavedPost {
        SavedPost {
            id: "g4ll3ry".to_string(),
            url: "https://www.reddit.com/gallery/g4ll3ry".to_string(),
            media_metadata: Some(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect::<HashMap<_, _>>(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_gallery_url_pattern() {
        assert!(is_gallery_url("https://www.reddit.com/gallery/abc"));
        assert!(!is_gallery_url("https://i.example/cat.png"));
        assert!(!is_gallery_url("not a url"));
    }

    #[test]
    fn test_selects_last_candidate() {
        let post = gallery_post(vec![(
            "m1",
            GalleryEntry {
                kind: Some("Image".to_string()),
                candidates: Some(vec![candidate("u1"), candidate("u2")]),
            },
        )]);

        assert_eq!(resolve_gallery(&post), vec!["u2".to_string()]);
    }

    #[test]
    fn test_empty_candidate_list_skipped() {
        let post = gallery_post(vec![
            (
                "m1",
                GalleryEntry {
                    kind: Some("Image".to_string()),
                    candidates: Some(vec![candidate("u1"), candidate("u2")]),
                },
            ),
            (
                "m2",
                GalleryEntry {
                    kind: Some("Image".to_string()),
                    candidates: Some(vec![]),
                },
            ),
        ]);

        assert_eq!(resolve_gallery(&post), vec!["u2".to_string()]);
    }

    #[test]
    fn test_malformed_entry_does_not_abort_siblings() {
        let post = gallery_post(vec![
            (
                "broken",
                GalleryEntry {
                    kind: Some("Image".to_string()),
                    candidates: Some(vec![GalleryCandidate { url: None }]),
                },
            ),
            (
                "ok",
                GalleryEntry {
                    kind: Some("Image".to_string()),
                    candidates: Some(vec![candidate("https://p.example/pic.jpg")]),
                },
            ),
        ]);

        assert_eq!(resolve_gallery(&post), vec!["https://p.example/pic.jpg".to_string()]);
    }

    #[test]
    fn test_non_image_entries_skipped() {
        let post = gallery_post(vec![(
            "m1",
            GalleryEntry {
                kind: Some("AnimatedImage".to_string()),
                candidates: Some(vec![candidate("u1")]),
            },
        )]);

        assert!(resolve_gallery(&post).is_empty());
    }

    #[test]
    fn test_escaped_ampersands_unescaped() {
        let post = gallery_post(vec![(
            "m1",
            GalleryEntry {
                kind: Some("Image".to_string()),
                candidates: Some(vec![candidate(
                    "https://p.example/pic.jpg?width=640&amp;s=abc",
                )]),
            },
        )]);

        assert_eq!(
            resolve_gallery(&post),
            vec!["https://p.example/pic.jpg?width=640&s=abc".to_string()]
        );
    }

    #[test]
    fn test_no_metadata_is_empty() {
        let post = SavedPost {
            url: "https://www.reddit.com/gallery/abc".to_string(),
            ..Default::default()
        };
        assert!(resolve_gallery(&post).is_empty());
    }
}
