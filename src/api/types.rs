//! Reddit API response types.

use serde::Deserialize;
use std::collections::HashMap;

/// Kind tag Reddit uses for link submissions.
pub const SUBMISSION_KIND: &str = "t3";

/// Generic listing envelope: `{"kind": "Listing", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

/// Listing payload with the paging cursor and wrapped children.
#[derive(Debug, Deserialize)]
pub struct ListingData {
    /// Cursor for the next page; `null` on the last page.
    pub after: Option<String>,

    #[serde(default)]
    pub children: Vec<Thing>,
}

/// A wrapped item in a listing. Saved listings mix submissions (`t3`)
/// and comments (`t1`); only submissions carry downloadable media.
#[derive(Debug, Deserialize)]
pub struct Thing {
    pub kind: String,
    pub data: SavedPost,
}

/// A saved submission as returned by the listing endpoint.
///
/// Comments deserialize into this too (listing children share one shape
/// here), so fields not present on comments all carry defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavedPost {
    /// Short ID, e.g. `1abc2d`.
    #[serde(default)]
    pub id: String,

    /// Fullname, e.g. `t3_1abc2d`. Used by the unsave endpoint.
    #[serde(default)]
    pub name: String,

    /// Submission title.
    #[serde(default)]
    pub title: String,

    /// Subreddit the post belongs to (without the `r/` prefix).
    #[serde(default)]
    pub subreddit: String,

    /// Link target. For self posts this points back at the permalink.
    #[serde(default)]
    pub url: String,

    /// True for text-only posts with no external link.
    #[serde(default)]
    pub is_self: bool,

    /// Adult content flag.
    #[serde(default)]
    pub over_18: bool,

    /// Gallery media mapping, keyed by media ID. Iteration order is not
    /// meaningful.
    #[serde(default)]
    pub media_metadata: Option<HashMap<String, GalleryEntry>>,
}

/// One entry in a gallery's `media_metadata` mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryEntry {
    /// Declared media kind, e.g. `"Image"`.
    #[serde(rename = "e", default)]
    pub kind: Option<String>,

    /// Candidate renditions ordered by increasing resolution.
    #[serde(rename = "p", default)]
    pub candidates: Option<Vec<GalleryCandidate>>,
}

/// A single rendition of a gallery image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryCandidate {
    /// Direct URL of this rendition. May contain HTML-escaped ampersands.
    #[serde(rename = "u", default)]
    pub url: Option<String>,
}

/// OAuth token response from the access-token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved_listing() {
        let json = r#"{
            "kind": "Listing",
            "data": {
                "after": "t3_xyz",
                "children": [
                    {
                        "kind": "t3",
                        "data": {
                            "id": "1abc2d",
                            "name": "t3_1abc2d",
                            "title": "a cat",
                            "subreddit": "cats",
                            "url": "https://i.example/cat.png",
                            "is_self": false,
                            "over_18": false
                        }
                    },
                    {
                        "kind": "t1",
                        "data": {
                            "id": "c0mm3nt",
                            "name": "t1_c0mm3nt",
                            "body": "nice"
                        }
                    }
                ]
            }
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.data.after.as_deref(), Some("t3_xyz"));
        assert_eq!(listing.data.children.len(), 2);
        assert_eq!(listing.data.children[0].kind, SUBMISSION_KIND);
        assert_eq!(listing.data.children[0].data.subreddit, "cats");
        assert_eq!(listing.data.children[1].kind, "t1");
    }

    #[test]
    fn test_parse_gallery_metadata() {
        let json = r#"{
            "kind": "t3",
            "data": {
                "id": "g4ll3ry",
                "name": "t3_g4ll3ry",
                "url": "https://www.reddit.com/gallery/g4ll3ry",
                "is_gallery": true,
                "media_metadata": {
                    "m1": {"e": "Image", "p": [{"u": "https://p.example/low.jpg"}, {"u": "https://p.example/high.jpg"}]},
                    "m2": {"e": "AnimatedImage"}
                }
            }
        }"#;

        let thing: Thing = serde_json::from_str(json).unwrap();
        let meta = thing.data.media_metadata.unwrap();
        assert_eq!(meta.len(), 2);
        let entry = &meta["m1"];
        assert_eq!(entry.kind.as_deref(), Some("Image"));
        assert_eq!(entry.candidates.as_ref().unwrap().len(), 2);
        assert!(meta["m2"].candidates.is_none());
    }
}
