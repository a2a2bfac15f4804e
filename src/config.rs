use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Output format that forces animations off; rasterized cards are static.
pub const STATIC_FORMAT: &str = "png";

const AFFIRMATIVE_TOKENS: [&str; 4] = ["true", "1", "yes", "on"];

/// Shared truthiness predicate for flags that arrive as text.
///
/// Leading and trailing whitespace is ignored and the comparison is
/// case-insensitive against `true`, `1`, `yes` and `on`.
pub fn parse_boolean(value: &str) -> bool {
    let value = value.trim();
    AFFIRMATIVE_TOKENS
        .iter()
        .any(|token| value.eq_ignore_ascii_case(token))
}

/// A loosely-typed boolean: configuration comes from query strings and JSON
/// alike, so `true`, `1` and `"true"` must all be accepted.
///
/// Any other JSON value (floats, lists, objects, integers outside `i64`)
/// lands in `Other` and reads as false instead of failing the whole config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Text(value) => parse_boolean(value),
            Self::Other(_) => false,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Reads an optional flag; absence means false.
pub fn flag_set(flag: Option<&Flag>) -> bool {
    flag.is_some_and(Flag::is_set)
}

/// A number or a string, rendered verbatim into attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Scalar {
    /// Attribute text for the value; `Other` has none, so callers fall back
    /// to the theme.
    pub fn attr_value(&self) -> Option<String> {
        match self {
            Self::Other(_) => None,
            value => Some(value.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Background color as configured: a single token, a comma-delimited
/// string, or an explicit `[angle, color, ...]` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    List(Vec<String>),
    Single(String),
    Other(serde_json::Value),
}

impl From<&str> for BackgroundColor {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    #[serde(alias = "Locale")]
    pub locale: Option<String>,
    pub theme: Option<String>,
    pub title_color: Option<String>,
    pub text_color: Option<String>,
    pub username_color: Option<String>,
    pub icon_color: Option<String>,
    pub border_color: Option<String>,
    pub stroke_color: Option<String>,
    pub bg_color: Option<BackgroundColor>,
    pub hide_border: Option<Flag>,
    pub hide_stroke: Option<Flag>,
    pub border_radius: Option<Scalar>,
    pub border_width: Option<Scalar>,
    pub disabled_animations: Option<Flag>,
    #[serde(alias = "Format")]
    pub format: Option<String>,
    pub hidden_items: Option<String>,
    pub show_items: Option<String>,
}

impl UiConfig {
    pub fn is_static_format(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|format| format.trim().eq_ignore_ascii_case(STATIC_FORMAT))
    }

    pub fn animations_disabled(&self) -> bool {
        flag_set(self.disabled_animations.as_ref()) || self.is_static_format()
    }
}

/// Parses a configuration document, accepting strict JSON first and relaxed
/// JSON5 (comments, trailing commas, unquoted keys) second.
///
/// Only syntax errors trigger the JSON5 retry; a well-formed JSON document
/// with a bad value reports the JSON error.
pub fn parse_config(contents: &str) -> Result<UiConfig> {
    match serde_json::from_str(contents) {
        Ok(config) => Ok(config),
        Err(err) if err.is_syntax() || err.is_eof() => {
            debug!("config is not strict JSON ({err}), retrying as JSON5");
            Ok(json5::from_str(contents)?)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn load_config(path: Option<&Path>) -> Result<UiConfig> {
    let Some(path) = path else {
        return Ok(UiConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}
