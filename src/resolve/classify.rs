//! URL extension classification.

use url::Url;

use crate::config::FiletypeSet;

/// A concrete downloadable media location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl {
    /// Full URL to fetch, query string included.
    pub url: String,

    /// Basename of the URL path, used as the destination filename.
    pub filename: String,
}

/// Outcome of classifying a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path names an allowed media extension; download directly.
    Accepted(MediaUrl),

    /// The path carries no extension; hand off to a domain resolver.
    Deferred,

    /// The URL cannot be handled.
    Rejected(String),
}

/// Classify a URL by the file extension of its path.
///
/// The query string is not part of the path and never part of the
/// extension. Matching against the filetype set is exact and
/// case-sensitive on the stored token.
pub fn classify(raw_url: &str, filetypes: &FiletypeSet) -> Resolution {
    let parsed = match Url::parse(raw_url) {
        Ok(u) => u,
        Err(e) => return Resolution::Rejected(format!("unparseable URL: {}", e)),
    };

    let basename = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");

    let extension = match basename.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => format!(".{}", suffix),
        _ => return Resolution::Deferred,
    };

    if filetypes.contains(&extension) {
        Resolution::Accepted(MediaUrl {
            url: raw_url.to_string(),
            filename: basename.to_string(),
        })
    } else {
        Resolution::Rejected(format!("unsupported extension: {}", extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filetypes() -> FiletypeSet {
        FiletypeSet::default()
    }

    #[test]
    fn test_allowed_extension_is_accepted() {
        for url in [
            "https://i.example/cat.png",
            "https://i.example/a/b/dog.jpg",
            "https://i.example/wiggle.gif",
        ] {
            match classify(url, &filetypes()) {
                Resolution::Accepted(media) => assert_eq!(media.url, url),
                other => panic!("expected Accepted for {}, got {:?}", url, other),
            }
        }
    }

    #[test]
    fn test_filename_is_path_basename() {
        let res = classify("https://i.example/a/b/cat.png", &filetypes());
        match res {
            Resolution::Accepted(media) => assert_eq!(media.filename, "cat.png"),
            other => panic!("expected Accepted, got {:?}", other),
        }
    }

    #[test]
    fn test_query_string_is_stripped() {
        let res = classify("https://i.example/cat.png?width=640&s=abc", &filetypes());
        match res {
            Resolution::Accepted(media) => {
                assert_eq!(media.filename, "cat.png");
                // The full URL, query included, is what gets fetched.
                assert!(media.url.contains("width=640"));
            }
            other => panic!("expected Accepted, got {:?}", other),
        }
    }

    #[test]
    fn test_extensionless_is_deferred() {
        assert_eq!(
            classify("https://redgifs.example/watch/somegif", &filetypes()),
            Resolution::Deferred
        );
        assert_eq!(classify("https://example.com/", &filetypes()), Resolution::Deferred);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        assert!(matches!(
            classify("https://v.example/clip.mp4", &filetypes()),
            Resolution::Rejected(_)
        ));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(matches!(
            classify("https://i.example/CAT.PNG", &filetypes()),
            Resolution::Rejected(_)
        ));
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        assert!(matches!(
            classify("not a url", &filetypes()),
            Resolution::Rejected(_)
        ));
    }
}
