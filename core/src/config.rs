//! Request defaults and the enums that select URL and body formatting.
//!
//! # Design
//! Every literal the builder falls back to lives here, so the builder and the
//! executor never carry their own copies of a default content type or user
//! agent.

/// `Content-Type` sent when the caller does not choose one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// `User-Agent` sent when the caller does not choose one.
pub const DEFAULT_USER_AGENT: &str = concat!("fluent-request/", env!("CARGO_PKG_VERSION"));

/// Scheme prepended to URLs that carry none.
pub const HTTP_SCHEME: &str = "http://";

pub const HTTPS_SCHEME: &str = "https://";

/// How request parameters are appended to the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlFormat {
    /// `http://example.com/products/123`
    Slashes,

    /// `http://example.com/?products=123`
    #[default]
    Questions,
}

impl UrlFormat {
    /// Separator placed between the base URL and the first pair, and between
    /// a name and its value in `Slashes` mode.
    pub(crate) fn lead(self) -> char {
        match self {
            UrlFormat::Slashes => '/',
            UrlFormat::Questions => '?',
        }
    }

    /// Separator placed between two rendered pairs.
    pub(crate) fn pair_separator(self) -> char {
        match self {
            UrlFormat::Slashes => '/',
            UrlFormat::Questions => '&',
        }
    }

    /// Separator placed between a parameter name and its value.
    pub(crate) fn key_value_separator(self) -> char {
        match self {
            UrlFormat::Slashes => '/',
            UrlFormat::Questions => '=',
        }
    }
}

/// Layout of a serialized JSON body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Formatting {
    #[default]
    Compact,
    Indented,
}
