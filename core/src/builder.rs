//! Fluent configuration of a single HTTP request.
//!
//! # Design
//! All configuration lives in one [`RequestSpec`] owned by a
//! [`RequestBuilder`]. The phase types ([`ParameterContext`],
//! [`OptionsContext`], [`OperationContext`]) each take the builder by value
//! and hand it back when the phase ends, so the chain always has exactly one
//! owner. A terminal operation consumes the [`OperationContext`]; a builder
//! cannot be touched again after its request was sent.
//!
//! ```no_run
//! use fluent_request::{RequestBuilder, UrlFormat};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! # fn main() -> fluent_request::Result<()> {
//! let person: Person = RequestBuilder::for_url("echo.example.com", UrlFormat::Slashes)?
//!     .add_parameter("FirstName")?.with_value("Jhon")
//!     .add_parameter("LastName")?.with_value("Doe")
//!     .submit()
//!     .get()?;
//! assert_eq!(person.first_name, "Jhon");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::config::{Formatting, UrlFormat, DEFAULT_CONTENT_TYPE};
use crate::error::{RequestError, Result};
use crate::executor::{HttpExecutor, TypedResponse};
use crate::http::{HttpMethod, HttpRequest, ProxyConfig};
use crate::params::{check_name, FormatRule, Invariant, ParamValue, Parameters};
use crate::transport::{Transport, UreqTransport};

/// Everything needed to assemble one request, minus its method.
#[derive(Debug)]
pub struct RequestSpec {
    pub url: String,
    pub url_format: UrlFormat,
    pub content_type: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub proxy: Option<ProxyConfig>,
    pub headers: Vec<(String, String)>,
    pub parameters: Parameters,
    pub body: Option<String>,
}

impl RequestSpec {
    fn new(url: String, url_format: UrlFormat) -> Self {
        Self {
            url,
            url_format,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            accept: None,
            user_agent: None,
            proxy: None,
            headers: Vec::new(),
            parameters: Parameters::new(),
            body: None,
        }
    }
}

/// Entry point and main chain of the fluent API.
pub struct RequestBuilder {
    spec: RequestSpec,
    format_rule: Arc<dyn FormatRule>,
    transport: Box<dyn Transport + Send>,
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("spec", &self.spec)
            .field("format_rule", &self.format_rule)
            .finish_non_exhaustive()
    }
}

impl RequestBuilder {
    /// Start a request to `url`. Fails if `url` is empty or blank.
    pub fn for_url(url: impl Into<String>, url_format: UrlFormat) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(RequestError::ConfigurationError(
                "url must not be empty".to_string(),
            ));
        }
        Ok(Self {
            spec: RequestSpec::new(url, url_format),
            format_rule: Arc::new(Invariant),
            transport: Box::new(UreqTransport::new()),
        })
    }

    /// Register a parameter; its value is bound on the returned context.
    ///
    /// Fails if `name` is blank or already registered on this builder.
    pub fn add_parameter(self, name: impl Into<String>) -> Result<ParameterContext> {
        let name = name.into();
        check_name(&self.spec.parameters, &name)?;
        Ok(ParameterContext {
            builder: self,
            name,
        })
    }

    /// Rule used by later [`ParameterContext::with_value`] calls.
    pub fn with_format_rule(mut self, rule: impl FormatRule + 'static) -> Self {
        self.format_rule = Arc::new(rule);
        self
    }

    /// Use `json` verbatim as the request body.
    pub fn with_body(mut self, json: impl Into<String>) -> Self {
        self.spec.body = Some(json.into());
        self
    }

    /// Serialize `value` as the request body.
    ///
    /// A value that serializes to JSON `null` leaves the body unchanged.
    pub fn with_json_body<S: Serialize + ?Sized>(mut self, value: &S, formatting: Formatting) -> Result<Self> {
        if let Some(text) = codec::serialize(value, formatting)? {
            self.spec.body = Some(text);
        }
        Ok(self)
    }

    pub fn with_options(self) -> OptionsContext {
        OptionsContext { builder: self }
    }

    /// Replace the transport that will send the request.
    pub fn with_transport(mut self, transport: impl Transport + Send + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// End configuration. No side effect.
    pub fn submit(self) -> OperationContext {
        OperationContext { builder: self }
    }

    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }
}

/// A registered parameter waiting for its value.
#[derive(Debug)]
pub struct ParameterContext {
    builder: RequestBuilder,
    name: String,
}

impl ParameterContext {
    /// Bind `value` using the builder's format rule.
    pub fn with_value(self, value: impl Into<ParamValue>) -> RequestBuilder {
        let rule = Arc::clone(&self.builder.format_rule);
        self.bind(value.into(), rule)
    }

    /// Bind `value` rendered with `rule`.
    pub fn with_value_formatted(
        self,
        value: impl Into<ParamValue>,
        rule: impl FormatRule + 'static,
    ) -> RequestBuilder {
        self.bind(value.into(), Arc::new(rule))
    }

    fn bind(self, value: ParamValue, rule: Arc<dyn FormatRule>) -> RequestBuilder {
        let ParameterContext { mut builder, name } = self;
        builder.spec.parameters.push(name, value, rule);
        builder
    }
}

/// Header, content negotiation and proxy settings.
#[derive(Debug)]
pub struct OptionsContext {
    builder: RequestBuilder,
}

impl OptionsContext {
    /// Set `Content-Type`. Blank values are ignored.
    pub fn content_type(mut self, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.builder.spec.content_type = value.to_string();
        }
        self
    }

    /// Set `Accept`. Blank values are ignored.
    pub fn accept(mut self, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.builder.spec.accept = Some(value.to_string());
        }
        self
    }

    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.builder.spec.user_agent = Some(value.into());
        self
    }

    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.builder.spec.proxy = Some(proxy);
        self
    }

    /// Route through the proxy at `address`, e.g. `http://proxy.local:8080`.
    pub fn proxy_address(self, address: impl Into<String>) -> Self {
        self.proxy(ProxyConfig::new(address))
    }

    pub fn proxy_host(self, host: &str, port: u16) -> Self {
        self.proxy(ProxyConfig::from_host(host, port))
    }

    /// Append headers in iteration order. Names may repeat.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.builder
            .spec
            .headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder.spec.headers.push((name.into(), value.into()));
        self
    }

    pub fn end_options(self) -> RequestBuilder {
        self.builder
    }
}

/// The configured request, ready for a terminal operation.
#[derive(Debug)]
pub struct OperationContext {
    builder: RequestBuilder,
}

impl OperationContext {
    pub fn get<T: DeserializeOwned>(self) -> Result<T> {
        self.execute(HttpMethod::Get).map(TypedResponse::into_value)
    }

    pub fn post<T: DeserializeOwned>(self) -> Result<T> {
        self.execute(HttpMethod::Post).map(TypedResponse::into_value)
    }

    pub fn put<T: DeserializeOwned>(self) -> Result<T> {
        self.execute(HttpMethod::Put).map(TypedResponse::into_value)
    }

    pub fn delete<T: DeserializeOwned>(self) -> Result<T> {
        self.execute(HttpMethod::Delete).map(TypedResponse::into_value)
    }

    /// Send the request with `method` and keep the status, headers and raw
    /// text next to the parsed value.
    pub fn execute<T: DeserializeOwned>(self, method: HttpMethod) -> Result<TypedResponse<T>> {
        let RequestBuilder { spec, transport, .. } = self.builder;
        HttpExecutor::new(&*transport).execute(spec, method)
    }

    /// Assemble the outgoing request without sending it.
    pub fn request(self, method: HttpMethod) -> HttpRequest {
        HttpExecutor::assemble(self.builder.spec, method)
    }
}
