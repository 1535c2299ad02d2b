//! Value types exchanged with a driver
//!
//! Locators, geometry, cookies, credentials, screenshots, script values and
//! log entries. None of them carry behaviour of their own.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::traits::WebElement;
use crate::{Error, Result};

/// Element locator strategy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "using", content = "value", rename_all = "snake_case")]
pub enum By {
    Id(String),
    Name(String),
    ClassName(String),
    TagName(String),
    Css(String),
    XPath(String),
    LinkText(String),
    PartialLinkText(String),
}

impl By {
    pub fn id<S: Into<String>>(id: S) -> Self {
        By::Id(id.into())
    }

    pub fn name<S: Into<String>>(name: S) -> Self {
        By::Name(name.into())
    }

    pub fn class_name<S: Into<String>>(class: S) -> Self {
        By::ClassName(class.into())
    }

    pub fn tag_name<S: Into<String>>(tag: S) -> Self {
        By::TagName(tag.into())
    }

    pub fn css<S: Into<String>>(selector: S) -> Self {
        By::Css(selector.into())
    }

    pub fn xpath<S: Into<String>>(xpath: S) -> Self {
        By::XPath(xpath.into())
    }

    pub fn link_text<S: Into<String>>(text: S) -> Self {
        By::LinkText(text.into())
    }

    pub fn partial_link_text<S: Into<String>>(text: S) -> Self {
        By::PartialLinkText(text.into())
    }

    /// Strategy name as used on the wire
    pub fn strategy(&self) -> &'static str {
        match self {
            By::Id(_) => "id",
            By::Name(_) => "name",
            By::ClassName(_) => "class name",
            By::TagName(_) => "tag name",
            By::Css(_) => "css selector",
            By::XPath(_) => "xpath",
            By::LinkText(_) => "link text",
            By::PartialLinkText(_) => "partial link text",
        }
    }

    /// Locator value
    pub fn value(&self) -> &str {
        match self {
            By::Id(v)
            | By::Name(v)
            | By::ClassName(v)
            | By::TagName(v)
            | By::Css(v)
            | By::XPath(v)
            | By::LinkText(v)
            | By::PartialLinkText(v) => v,
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By.{}: {}", self.strategy(), self.value())
    }
}

/// Point on the page, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Width and height, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Element rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(origin: Point, size: Dimension) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }
}

/// Where an input device should act
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coordinates {
    /// Location relative to the document
    pub on_page: Point,
    /// Location relative to the viewport
    pub in_viewport: Point,
    /// Driver specific reference, usually the element id
    pub auxiliary: Option<String>,
}

impl Coordinates {
    pub fn on_page(point: Point) -> Self {
        Self {
            on_page: point,
            in_viewport: point,
            auxiliary: None,
        }
    }
}

/// Browser cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub expiry: Option<DateTime<Utc>>,
    pub secure: bool,
    pub http_only: bool,
}

impl Cookie {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: Some("/".to_string()),
            domain: None,
            expiry: None,
            secure: false,
            http_only: false,
        }
    }

    pub fn with_domain<S: Into<String>>(mut self, domain: S) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Whether the cookie expired before `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry.map(|expiry| expiry <= now).unwrap_or(false)
    }
}

/// Username and password for basic authentication prompts
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Requested screenshot encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    Bytes,
    Base64,
}

/// Screenshot in the encoding that was asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screenshot {
    Bytes(Vec<u8>),
    Base64(String),
}

impl Screenshot {
    /// Encode raw image bytes as `output` asks
    pub fn encode(png: Vec<u8>, output: OutputType) -> Self {
        match output {
            OutputType::Bytes => Screenshot::Bytes(png),
            OutputType::Base64 => Screenshot::Base64(BASE64.encode(png)),
        }
    }

    /// Raw image bytes, decoding base64 when needed
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Screenshot::Bytes(bytes) => Ok(bytes),
            Screenshot::Base64(data) => BASE64
                .decode(data)
                .map_err(|e| Error::invalid_argument(format!("Invalid screenshot data: {}", e))),
        }
    }
}

/// Script argument or result
///
/// Elements travel by reference so a script can receive the very
/// element a caller located.
#[derive(Clone)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Element(Arc<dyn WebElement>),
    List(Vec<ScriptValue>),
    Map(BTreeMap<String, ScriptValue>),
}

impl ScriptValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Arc<dyn WebElement>> {
        match self {
            ScriptValue::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ScriptValue]> {
        match self {
            ScriptValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, ScriptValue>> {
        match self {
            ScriptValue::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Null => write!(f, "Null"),
            ScriptValue::Bool(b) => write!(f, "Bool({})", b),
            ScriptValue::Number(n) => write!(f, "Number({})", n),
            ScriptValue::String(s) => write!(f, "String({:?})", s),
            ScriptValue::Element(_) => write!(f, "Element(..)"),
            ScriptValue::List(items) => f.debug_list().entries(items).finish(),
            ScriptValue::Map(entries) => f.debug_map().entries(entries).finish(),
        }
    }
}

impl From<serde_json::Value> for ScriptValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ScriptValue::Null,
            serde_json::Value::Bool(b) => ScriptValue::Bool(b),
            serde_json::Value::Number(n) => ScriptValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => ScriptValue::String(s),
            serde_json::Value::Array(items) => {
                ScriptValue::List(items.into_iter().map(ScriptValue::from).collect())
            }
            serde_json::Value::Object(entries) => ScriptValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, ScriptValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Number(value)
    }
}

impl From<Arc<dyn WebElement>> for ScriptValue {
    fn from(value: Arc<dyn WebElement>) -> Self {
        ScriptValue::Element(value)
    }
}

/// Single browser or driver log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new<L: Into<String>, M: Into<String>>(level: L, message: M) -> Self {
        Self {
            level: level.into(),
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

/// Log entries of one log type, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntries {
    entries: Vec<LogEntry>,
}

impl LogEntries {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    pub fn all(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries at `level`
    pub fn filter<'a>(&'a self, level: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.level == level)
    }
}
