//! The request pipeline: normalize, compose, assemble, send, parse.
//!
//! # Design
//! `assemble` is pure and turns a [`RequestSpec`] into an [`HttpRequest`];
//! `parse` is pure and turns an [`HttpResponse`] into a typed value. Only
//! `execute` touches the [`Transport`]. Transport failures are logged with
//! whatever context is available and then returned unchanged.

use serde::de::DeserializeOwned;
use tracing::{debug, debug_span, warn};

use crate::builder::RequestSpec;
use crate::codec;
use crate::config::DEFAULT_USER_AGENT;
use crate::error::{RequestError, Result, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::compose_query;
use crate::transport::Transport;
use crate::url::normalize_url;

/// A parsed response together with what the server sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub text: String,
    pub value: T,
}

impl<T> TypedResponse<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Runs a [`RequestSpec`] through a [`Transport`].
pub struct HttpExecutor<'a> {
    transport: &'a dyn Transport,
}

impl<'a> HttpExecutor<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Send `spec` as a `method` request and parse the response into `T`.
    pub fn execute<T: DeserializeOwned>(&self, spec: RequestSpec, method: HttpMethod) -> Result<TypedResponse<T>> {
        let request = Self::assemble(spec, method);
        let span = debug_span!("http_request", method = %request.method, url = %request.url);
        let _guard = span.enter();

        log_request(&request);

        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(e) => {
                report_failure(&e);
                return Err(e.into());
            }
        };
        debug!(status = response.status, body = %response.body_lossy(), "response");

        Self::parse(response)
    }

    /// Build the outgoing request for `spec`.
    pub fn assemble(spec: RequestSpec, method: HttpMethod) -> HttpRequest {
        let url = normalize_url(&spec.url);
        let url = compose_query(&url, &spec.parameters, spec.url_format);

        let mut headers = Vec::with_capacity(spec.headers.len() + 3);
        headers.push(("Content-Type".to_string(), spec.content_type));
        if let Some(accept) = spec.accept {
            headers.push(("Accept".to_string(), accept));
        }
        headers.push((
            "User-Agent".to_string(),
            spec.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        ));
        headers.extend(spec.headers);

        HttpRequest {
            method,
            url,
            headers,
            proxy: spec.proxy,
            body: spec.body.filter(|body| !body.trim().is_empty()),
        }
    }

    /// Check the status, decode the body as UTF-8 and deserialize it.
    ///
    /// Error bodies are decoded lossily so a failing status is never masked
    /// by its payload; a 2xx body that is not UTF-8 is a deserialization
    /// error.
    pub fn parse<T: DeserializeOwned>(response: HttpResponse) -> Result<TypedResponse<T>> {
        if !response.is_success() {
            let e = TransportError::Status {
                status: response.status,
                body: response.body_lossy().into_owned(),
            };
            report_failure(&e);
            return Err(e.into());
        }

        let text = String::from_utf8(response.body).map_err(|e| RequestError::DeserializationError {
            path: ".".to_string(),
            message: e.to_string(),
        })?;
        let value = codec::deserialize(&text)?;
        Ok(TypedResponse {
            status: response.status,
            headers: response.headers,
            text,
            value,
        })
    }
}

fn log_request(request: &HttpRequest) {
    debug!(url = %request.url, "request url");
    for (name, value) in &request.headers {
        debug!(%name, %value, "request header");
    }
    if let Some(proxy) = &request.proxy {
        debug!(proxy = proxy.uri(), "request proxy");
    }
    if let Some(body) = &request.body {
        debug!(content_length = request.content_length(), %body, "request body");
    }
}

fn report_failure(e: &TransportError) {
    match e {
        TransportError::Status { status, body } => {
            warn!(status, error_body = %body, "request failed with non-success status");
        }
        TransportError::Connection { message, source } => {
            let cause = source.as_ref().map(ToString::to_string);
            warn!(%message, cause = ?cause, "request failed before a response was received");
        }
    }
}
