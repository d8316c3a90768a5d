//! HTML rewriting for suggestion injection.
//!
//! [`SeoInjector`] merges a [`Suggestions`] bundle into an HTML document
//! using targeted pattern substitution rather than a DOM. Malformed or
//! partial documents are tolerated: a pass that finds no insertion point
//! leaves the document alone instead of erroring.
//!
//! Four passes run in a fixed order, each rescanning the document as
//! already modified by the previous one:
//!
//! 1. head metadata (`<title>`, description, canonical, robots)
//! 2. Open Graph `<meta property="og:...">` tags
//! 3. JSON-LD `<script type="application/ld+json">` blocks
//! 4. `alt` attributes on matching `<img>` tags
//!
//! Passes 1-3 insert immediately before the first closing `</head>` tag
//! (matched case-insensitively); without one they are silent no-ops.
//! Pass 4 works anywhere in the document.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde_json::{Map, Value};
use tracing::debug;

use super::suggestions::Suggestions;

static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head>").expect("hardcoded pattern"));

static EMPTY_ALT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)alt=["']["']"#).expect("hardcoded pattern"));

static HAS_ALT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)alt=").expect("hardcoded pattern"));

static TAG_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/?>$").expect("hardcoded pattern"));

/// Characters that require escaping inside attribute values and text
/// nodes.
const ESCAPE_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Merges suggested tags and attributes into HTML documents.
///
/// The injector is a pure function of its inputs and holds no state;
/// one instance can be shared freely across callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeoInjector;

impl SeoInjector {
    /// Create an injector.
    pub fn new() -> Self {
        SeoInjector
    }

    /// Produce a new document with `suggestions` merged into `html`.
    ///
    /// Returns `html` unchanged when the bundle is empty. Each pass also
    /// degrades to identity when its own collection is empty, so a
    /// bundle carrying only `links` or `accessibility_fixes` leaves the
    /// document untouched.
    pub fn inject(&self, html: &str, suggestions: &Suggestions) -> String {
        if suggestions.is_empty() {
            return html.to_string();
        }

        debug!(
            meta_tags = suggestions.meta_tags.len(),
            og_tags = suggestions.og_tags.len(),
            structured_data = suggestions.structured_data.len(),
            images = suggestions.images.len(),
            "injecting suggestions"
        );

        let html = inject_meta_tags(html.to_string(), &suggestions.meta_tags);
        let html = inject_og_tags(html, &suggestions.og_tags);
        let html = inject_structured_data(html, &suggestions.structured_data);
        apply_image_alts(html, &suggestions.images)
    }
}

fn inject_meta_tags(html: String, meta_tags: &Map<String, Value>) -> String {
    if meta_tags.is_empty() {
        return html;
    }

    let mut tags = String::new();

    if let Some(title) = non_empty_str(meta_tags.get("title")) {
        tags.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }
    if let Some(description) = non_empty_str(meta_tags.get("description")) {
        tags.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    if let Some(canonical) = non_empty_str(meta_tags.get("canonical")) {
        tags.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_html(canonical)
        ));
    }
    if let Some(robots) = non_empty_str(meta_tags.get("robots")) {
        tags.push_str(&format!(
            "<meta name=\"robots\" content=\"{}\">\n",
            escape_html(robots)
        ));
    }

    insert_before_head(html, &tags)
}

fn inject_og_tags(html: String, og_tags: &Map<String, Value>) -> String {
    if og_tags.is_empty() {
        return html;
    }

    let mut tags = String::new();

    for (property, content) in og_tags {
        let Some(content) = non_empty_str(Some(content)) else {
            continue;
        };
        tags.push_str(&format!(
            "<meta property=\"og:{}\" content=\"{}\">\n",
            escape_html(property),
            escape_html(content)
        ));
    }

    insert_before_head(html, &tags)
}

fn inject_structured_data(html: String, structured_data: &[Value]) -> String {
    if structured_data.is_empty() {
        return html;
    }

    let mut tags = String::new();

    for schema in structured_data {
        // serde_json leaves forward slashes and non-ASCII unescaped, as
        // JSON-LD consumers expect.
        let Ok(json) = serde_json::to_string(schema) else {
            continue;
        };
        tags.push_str(&format!(
            "<script type=\"application/ld+json\">{}</script>\n",
            json
        ));
    }

    insert_before_head(html, &tags)
}

fn apply_image_alts(html: String, images: &[Value]) -> String {
    if images.is_empty() {
        return html;
    }

    let mut html = html;

    for image in images {
        let src = image.get("src").and_then(Value::as_str);
        let alt = image.get("alt").and_then(Value::as_str);
        let (Some(src), Some(alt)) = (src, alt) else {
            continue;
        };
        if alt.is_empty() {
            continue;
        }

        // The suggested src is matched as a literal, never as pattern
        // syntax.
        let pattern = format!(r#"(?i)<img\b[^>]*src=["']{}["'][^>]*>"#, regex::escape(src));
        let Ok(tag_re) = Regex::new(&pattern) else {
            continue;
        };

        let escaped_alt = escape_html(alt).into_owned();
        html = tag_re
            .replace_all(&html, |caps: &regex::Captures<'_>| {
                rewrite_img_tag(&caps[0], &escaped_alt)
            })
            .into_owned();
    }

    html
}

/// Apply one alt-text suggestion to a single matched `<img>` tag.
fn rewrite_img_tag(tag: &str, escaped_alt: &str) -> String {
    if EMPTY_ALT_RE.is_match(tag) {
        let replacement = format!("alt=\"{}\"", escaped_alt);
        return EMPTY_ALT_RE
            .replacen(tag, 1, NoExpand(&replacement))
            .into_owned();
    }

    if HAS_ALT_RE.is_match(tag) {
        // An existing non-empty alt wins over the suggestion.
        return tag.to_string();
    }

    match TAG_CLOSE_RE.find(tag) {
        Some(close) => format!(
            "{} alt=\"{}\"{}",
            &tag[..close.start()],
            escaped_alt,
            &tag[close.start()..]
        ),
        None => tag.to_string(),
    }
}

/// Insert `fragment` immediately before the first closing `</head>` tag.
///
/// Matching is case-insensitive and only the first occurrence is
/// touched; without a closing head tag the document is returned
/// unchanged.
fn insert_before_head(html: String, fragment: &str) -> String {
    if fragment.is_empty() {
        return html;
    }

    let replacement = format!("{}</head>", fragment);
    HEAD_RE.replacen(&html, 1, NoExpand(&replacement)).into_owned()
}

/// A value usable for injection: a non-empty string.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Escape the HTML-sensitive characters in attribute values and text
/// nodes, borrowing when nothing needs escaping.
fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(&ESCAPE_CHARS[..]) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
