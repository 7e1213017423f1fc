//! HTTP request and response types passed across the transport seam.
//!
//! # Design
//! These types describe one outgoing request and one incoming response as
//! plain data. The executor assembles an `HttpRequest`, hands it to a
//! [`Transport`](crate::transport::Transport), and parses the returned
//! `HttpResponse`; nothing in here touches the network. Keeping both sides
//! as owned `String`/`Vec` values lets tests build and inspect them without
//! a server.

use std::borrow::Cow;
use std::fmt;

/// HTTP method of a terminal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proxy the request is routed through.
///
/// Holds a proxy URI such as `http://proxy.local:8080`; parsing and
/// traversal are left to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    uri: String,
}

impl ProxyConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Proxy reached over plain HTTP at `host:port`.
    pub fn from_host(host: &str, port: u16) -> Self {
        Self {
            uri: format!("http://{host}:{port}"),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// An outgoing HTTP request described as plain data.
///
/// Produced by the executor's assemble stage. `headers` carries
/// `Content-Type`, `Accept` (when set), `User-Agent` and then the caller's
/// headers in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub proxy: Option<ProxyConfig>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// UTF-8 byte length of the body, 0 when there is none.
    pub fn content_length(&self) -> usize {
        self.body.as_ref().map_or(0, String::len)
    }

    /// First header whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An incoming HTTP response described as plain data.
///
/// The body is kept as raw bytes; decoding is left to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn body_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// First header whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
