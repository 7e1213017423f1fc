//! Appends request parameters to a URL.
//!
//! Values are inserted verbatim after rendering; nothing is percent-encoded,
//! so names and values containing `/`, `&`, `=` or spaces reach the server
//! unchanged.

use crate::config::UrlFormat;
use crate::params::Parameters;

/// Append `params` to `url` in insertion order.
///
/// `Questions` renders `?a=1&b=2`; `Slashes` renders `/a/1/b/2` after
/// dropping one trailing slash from `url`, as long as something follows the
/// scheme. With no parameters `url` is returned unchanged.
pub fn compose_query(url: &str, params: &Parameters, format: UrlFormat) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let base = match format {
        UrlFormat::Slashes => strip_trailing_slash(url),
        UrlFormat::Questions => url,
    };

    let mut out = String::from(base);
    out.push(format.lead());
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push(format.pair_separator());
        }
        out.push_str(param.name());
        out.push(format.key_value_separator());
        out.push_str(&param.rendered_value());
    }
    out
}

fn strip_trailing_slash(url: &str) -> &str {
    let authority = url.find("://").map_or(0, |i| i + 3);
    match url.strip_suffix('/') {
        Some(rest) if rest.len() > authority => rest,
        _ => url,
    }
}
