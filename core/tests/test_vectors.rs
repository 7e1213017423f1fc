//! Verify request assembly and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each assemble vector describes builder inputs and the `HttpRequest` they
//! must produce; each parse vector describes a simulated response and the
//! value or error kind it must produce. Results are compared as parsed JSON
//! so field order never matters.

use fluent_request::{
    HttpExecutor, HttpMethod, HttpResponse, ParamValue, ProxyConfig, RequestBuilder, RequestError,
    UrlFormat, DEFAULT_USER_AGENT,
};
use serde_json::Value;

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_format(s: &str) -> UrlFormat {
    match s {
        "Questions" => UrlFormat::Questions,
        "Slashes" => UrlFormat::Slashes,
        other => panic!("unknown url format: {other}"),
    }
}

fn param_value(v: &Value) -> ParamValue {
    match v {
        Value::Null => ParamValue::Null,
        Value::Bool(b) => ParamValue::Bool(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => ParamValue::Integer(i),
            (None, Some(f)) => ParamValue::Float(f),
            _ => panic!("unsupported number: {n}"),
        },
        Value::String(s) => ParamValue::Text(s.clone()),
        other => panic!("unsupported parameter value: {other}"),
    }
}

fn pairs(v: &Value) -> Vec<(String, String)> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            let value = arr[1].as_str().unwrap().replace("${DEFAULT_USER_AGENT}", DEFAULT_USER_AGENT);
            (arr[0].as_str().unwrap().to_string(), value)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Assemble
// ---------------------------------------------------------------------------

#[test]
fn assemble_test_vectors() {
    let raw = include_str!("../../test-vectors/assemble.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let format = parse_format(case["url_format"].as_str().unwrap());
        let mut builder = RequestBuilder::for_url(case["url"].as_str().unwrap(), format).unwrap();

        if let Some(params) = case["parameters"].as_array() {
            for p in params {
                let p = p.as_array().unwrap();
                builder = builder
                    .add_parameter(p[0].as_str().unwrap())
                    .unwrap()
                    .with_value(param_value(&p[1]));
            }
        }

        let options = &case["options"];
        if options.is_object() {
            let mut ctx = builder.with_options();
            if let Some(v) = options["content_type"].as_str() {
                ctx = ctx.content_type(v);
            }
            if let Some(v) = options["accept"].as_str() {
                ctx = ctx.accept(v);
            }
            if let Some(v) = options["user_agent"].as_str() {
                ctx = ctx.user_agent(v);
            }
            if let Some(v) = options["proxy"].as_str() {
                ctx = ctx.proxy_address(v);
            }
            if !options["headers"].is_null() {
                ctx = ctx.headers(pairs(&options["headers"]));
            }
            builder = ctx.end_options();
        }

        if let Some(body) = case["body"].as_str() {
            builder = builder.with_body(body);
        }

        let req = builder
            .submit()
            .request(parse_method(case["method"].as_str().unwrap()));
        let expected = &case["expected_request"];

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.headers, pairs(&expected["headers"]), "{name}: headers");
        assert_eq!(
            req.proxy,
            expected["proxy"].as_str().map(ProxyConfig::new),
            "{name}: proxy"
        );
        assert_eq!(req.body.as_deref(), expected["body"].as_str(), "{name}: body");
        assert_eq!(
            req.content_length() as u64,
            expected["content_length"].as_u64().unwrap(),
            "{name}: content length"
        );
    }
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

#[test]
fn parse_test_vectors() {
    let raw = include_str!("../../test-vectors/parse.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
        };

        let result = HttpExecutor::parse::<Value>(response);
        match case["expected_error"].as_str() {
            None => {
                let parsed = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
                assert_eq!(parsed.value, case["expected_result"], "{name}: parsed result");
                assert_eq!(parsed.text, sim["body"].as_str().unwrap(), "{name}: raw text");
            }
            Some(kind) => {
                let err = result.expect_err(name);
                let actual = match err {
                    RequestError::ConfigurationError(_) => "ConfigurationError",
                    RequestError::SerializationError(_) => "SerializationError",
                    RequestError::TransportError(_) => "TransportError",
                    RequestError::DeserializationError { .. } => "DeserializationError",
                };
                assert_eq!(actual, kind, "{name}: error kind");
            }
        }
    }
}
