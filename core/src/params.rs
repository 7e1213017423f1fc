//! Request parameters and the rules that turn their values into text.
//!
//! # Design
//! A parameter value keeps its Rust type until the URL is composed, so a
//! [`FormatRule`] can render numbers for a given locale. The rule is always
//! passed in explicitly; when the caller gives none, [`Invariant`] is used,
//! which keeps the rendered URL independent of the host's locale settings.

use std::fmt;
use std::sync::Arc;

use crate::error::{RequestError, Result};

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Unsigned(n) => write!(f, "{n}"),
            ParamValue::Float(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Null => Ok(()),
        }
    }
}

macro_rules! param_value_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for ParamValue {
                fn from(value: $source) -> Self {
                    ParamValue::$variant(value as $target)
                }
            }
        )+
    };
}

param_value_from!(Integer as i64: i8, i16, i32, i64, isize);
param_value_from!(Unsigned as u64: u8, u16, u32, u64, usize);
param_value_from!(Float as f64: f64);

// Widening keeps the binary value (0.1f32 -> 0.10000000149011612); go
// through the shortest f32 text instead.
impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(value.to_string().parse().unwrap_or_else(|_| f64::from(value)))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<char> for ParamValue {
    fn from(value: char) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Converts a parameter value to the text placed in the URL.
pub trait FormatRule: fmt::Debug + Send + Sync {
    fn format(&self, value: &ParamValue) -> String;
}

/// Culture-independent rendering: the value's `Display` text, empty for
/// [`ParamValue::Null`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invariant;

impl FormatRule for Invariant {
    fn format(&self, value: &ParamValue) -> String {
        value.to_string()
    }
}

/// Number conventions of a locale.
///
/// Only numbers are affected: the decimal point and the leading minus sign
/// are replaced. Digit grouping is never applied, so `1234.5` renders as
/// `1234,5` under [`Locale::es_es`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    decimal_separator: char,
    negative_sign: String,
}

impl Locale {
    pub fn new(decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            negative_sign: "-".to_string(),
        }
    }

    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    pub fn en_us() -> Self {
        Self::new('.')
    }

    pub fn es_es() -> Self {
        Self::new(',')
    }

    pub fn de_de() -> Self {
        Self::new(',')
    }

    pub fn fr_fr() -> Self {
        Self::new(',')
    }

    fn format_number(&self, text: &str) -> String {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let mut out = String::with_capacity(text.len() + self.negative_sign.len());
        if negative {
            out.push_str(&self.negative_sign);
        }
        for c in digits.chars() {
            out.push(if c == '.' { self.decimal_separator } else { c });
        }
        out
    }
}

impl FormatRule for Locale {
    fn format(&self, value: &ParamValue) -> String {
        match value {
            ParamValue::Integer(_) | ParamValue::Float(_) => self.format_number(&value.to_string()),
            other => other.to_string(),
        }
    }
}

/// One named parameter bound to its value and format rule.
#[derive(Debug)]
pub struct Parameter {
    name: String,
    value: ParamValue,
    rule: Arc<dyn FormatRule>,
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// The value rendered through its format rule.
    pub fn rendered_value(&self) -> String {
        self.rule.format(&self.value)
    }
}

/// Insertion-ordered parameter store with unique names.
#[derive(Debug, Default)]
pub struct Parameters {
    entries: Vec<Parameter>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Fails if `name` is blank or already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: ParamValue,
        rule: Arc<dyn FormatRule>,
    ) -> Result<()> {
        let name = name.into();
        check_name(self, &name)?;
        self.push(name, value, rule);
        Ok(())
    }

    /// Append a parameter whose name was already checked with `check_name`.
    pub(crate) fn push(&mut self, name: String, value: ParamValue, rule: Arc<dyn FormatRule>) {
        self.entries.push(Parameter { name, value, rule });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate a parameter name against the store it is about to join.
pub(crate) fn check_name(params: &Parameters, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RequestError::ConfigurationError(
            "parameter name must not be empty".to_string(),
        ));
    }
    if params.contains(name) {
        return Err(RequestError::ConfigurationError(format!(
            "parameter '{name}' is already registered"
        )));
    }
    Ok(())
}
