//! Scheme normalization for target URLs.

use crate::config::{HTTPS_SCHEME, HTTP_SCHEME};

/// Prefix `url` with `http://` unless it already starts with `http://` or
/// `https://` (ASCII case-insensitive). Nothing else is changed.
pub fn normalize_url(url: &str) -> String {
    if has_prefix_ignore_case(url, HTTP_SCHEME) || has_prefix_ignore_case(url, HTTPS_SCHEME) {
        url.to_string()
    } else {
        format!("{HTTP_SCHEME}{url}")
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
