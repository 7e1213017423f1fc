//! Fluent, blocking HTTP requests with typed JSON responses.
//!
//! # Overview
//! A [`RequestBuilder`] collects the URL, parameters, headers, proxy and
//! body of one request. A terminal operation (`get`, `post`, `put`,
//! `delete`) sends it and deserializes the response into any
//! `serde::de::DeserializeOwned` type.
//!
//! # Design
//! - The builder is consumed phase by phase and finally by the terminal
//!   operation, so a request can be sent at most once.
//! - Request assembly and response parsing are pure functions over the
//!   plain-data `HttpRequest` / `HttpResponse` types; only the
//!   [`Transport`] touches the network. [`UreqTransport`] is the default.
//! - Parameter values keep their type until the URL is composed and are
//!   rendered through an explicit [`FormatRule`].
//! - Nothing is retried; every failure reaches the caller as a
//!   [`RequestError`] variant.

pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod params;
pub mod query;
pub mod transport;
pub mod url;

pub use builder::{OperationContext, OptionsContext, ParameterContext, RequestBuilder, RequestSpec};
pub use config::{Formatting, UrlFormat, DEFAULT_CONTENT_TYPE, DEFAULT_USER_AGENT};
pub use error::{RequestError, Result, TransportError};
pub use executor::{HttpExecutor, TypedResponse};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ProxyConfig};
pub use params::{FormatRule, Invariant, Locale, ParamValue, Parameter, Parameters};
pub use transport::{Transport, UreqTransport};
