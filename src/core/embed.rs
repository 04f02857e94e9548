//! Embed URL construction
//!
//! Builds the privacy-enhanced iframe URL for a resolved video. The host is
//! the no-cookie domain and every privacy/display flag is fixed; only
//! `autoplay` and `origin` vary per call.

use url::form_urlencoded;

use crate::core::models::{EmbedOptions, VideoReference};
use crate::utils::validation::normalize_origin;

/// Privacy-enhanced embed endpoint
pub const EMBED_BASE_URL: &str = "https://www.youtube-nocookie.com/embed/";

/// Fixed player parameters placed before `origin`
const LEADING_PARAMS: [(&str, &str); 7] = [
    ("rel", "0"),
    ("modestbranding", "1"),
    ("iv_load_policy", "3"),
    ("cc_load_policy", "0"),
    ("fs", "1"),
    ("disablekb", "0"),
    ("enablejsapi", "1"),
];

/// Fixed player parameters placed after `origin`
const TRAILING_PARAMS: [(&str, &str); 3] =
    [("playsinline", "1"), ("controls", "1"), ("showinfo", "0")];

/// Build the embed URL for `reference` with the given options.
///
/// Pure string construction: identical inputs always give identical bytes.
pub fn build(reference: &VideoReference, opts: &EmbedOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("autoplay", if opts.autoplay { "1" } else { "0" });
    for (key, value) in LEADING_PARAMS {
        query.append_pair(key, value);
    }
    query.append_pair("origin", &opts.origin);
    for (key, value) in TRAILING_PARAMS {
        query.append_pair(key, value);
    }

    format!("{}{}?{}", EMBED_BASE_URL, reference.as_str(), query.finish())
}

/// Embed URL builder bound to the caller's own origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedUrlBuilder {
    origin: String,
}

impl EmbedUrlBuilder {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: normalize_origin(origin),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn options(&self, autoplay: bool) -> EmbedOptions {
        EmbedOptions::new(autoplay, self.origin.clone())
    }

    pub fn embed_url(&self, reference: &VideoReference, autoplay: bool) -> String {
        build(reference, &self.options(autoplay))
    }
}
