//! The suggestion bundle returned by the smart service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Suggested changes for one page, grouped into six collections.
///
/// Each collection defaults to empty when absent from the wire payload,
/// and entries are kept as raw JSON values so a cache round-trip is
/// lossless. The injector consumes `images`, `meta_tags`,
/// `structured_data` and `og_tags`; `links` and `accessibility_fixes`
/// are carried for other consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    /// Internal-link suggestions, passed through uninterpreted.
    #[serde(default)]
    pub links: Vec<Value>,
    /// `{src, alt}` pairs recommending alt text for images.
    #[serde(default)]
    pub images: Vec<Value>,
    /// Head metadata. The injector recognizes `title`, `description`,
    /// `canonical` and `robots`; other keys are preserved but unused.
    #[serde(default)]
    pub meta_tags: Map<String, Value>,
    /// Schema.org entities to embed as JSON-LD, one per entry.
    #[serde(default)]
    pub structured_data: Vec<Value>,
    /// Accessibility fixes, passed through uninterpreted.
    #[serde(default)]
    pub accessibility_fixes: Vec<Value>,
    /// Open Graph properties keyed without the `og:` prefix.
    #[serde(default)]
    pub og_tags: Map<String, Value>,
}

impl Suggestions {
    /// True when all six collections are empty.
    ///
    /// A bundle with only `links` populated is not empty even though
    /// the injector cannot act on it: emptiness reflects whether the
    /// service found anything at all.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
            && self.images.is_empty()
            && self.meta_tags.is_empty()
            && self.structured_data.is_empty()
            && self.accessibility_fixes.is_empty()
            && self.og_tags.is_empty()
    }
}
