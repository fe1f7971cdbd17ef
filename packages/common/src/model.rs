use serde::{Deserialize, Serialize};
use std::fmt;

/// Width used when the node carries no usable width
pub const FALLBACK_WIDTH: &str = "200px";

/// Height used when the node carries no usable height
pub const FALLBACK_HEIGHT: &str = "auto";

/// Background used when the first fill is missing or not solid
pub const FALLBACK_BACKGROUND: &str = "#f5f5f5";

/// Declared type tag of a component property.
///
/// Tags the host does not know about are kept verbatim in `Unknown` so that
/// every lookup can route them through its string-family default branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Color,
    Unknown(String),
}

impl PropType {
    pub fn as_str(&self) -> &str {
        match self {
            PropType::String => "string",
            PropType::Number => "number",
            PropType::Boolean => "boolean",
            PropType::Color => "color",
            PropType::Unknown(tag) => tag,
        }
    }
}

impl Default for PropType {
    fn default() -> Self {
        PropType::Unknown(String::new())
    }
}

impl From<String> for PropType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "string" => PropType::String,
            "number" => PropType::Number,
            "boolean" => PropType::Boolean,
            "color" => PropType::Color,
            _ => PropType::Unknown(tag),
        }
    }
}

impl From<&str> for PropType {
    fn from(tag: &str) -> Self {
        PropType::from(tag.to_string())
    }
}

impl From<PropType> for String {
    fn from(prop_type: PropType) -> Self {
        match prop_type {
            PropType::Unknown(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A default value as entered in the host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl DefaultValue {
    /// Whether the host treats this value as set. Empty strings, zero and
    /// `false` count as "no default".
    pub fn is_truthy(&self) -> bool {
        match self {
            DefaultValue::Bool(value) => *value,
            DefaultValue::Number(number) => number
                .as_f64()
                .map_or(false, |value| value != 0.0 && !value.is_nan()),
            DefaultValue::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(value) => write!(f, "{}", value),
            DefaultValue::Number(number) => write!(f, "{}", number),
            DefaultValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(text: &str) -> Self {
        DefaultValue::Text(text.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(text: String) -> Self {
        DefaultValue::Text(text)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Number(value.into())
    }
}

/// A user-declared property of the generated component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,

    #[serde(rename = "type", default)]
    pub prop_type: PropType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, prop_type: impl Into<PropType>) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The default value, if one is actually declared
    pub fn declared_default(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref().filter(|value| value.is_truthy())
    }
}

/// Input to one generation cycle, as submitted from the plugin UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub component_name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub props: Vec<PropertyDescriptor>,
}

impl GenerationRequest {
    pub fn new(component_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            category: category.into(),
            props: Vec::new(),
        }
    }

    pub fn with_prop(mut self, prop: PropertyDescriptor) -> Self {
        self.props.push(prop);
        self
    }
}

/// Structural kind of a canvas node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Component,
    ComponentSet,
    Frame,
    Group,
    Instance,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Other(kind) => kind,
        }
    }

    /// Whether a node of this kind can be exported as a component
    pub fn is_exportable(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }
}

impl From<String> for NodeKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "INSTANCE" => NodeKind::Instance,
            _ => NodeKind::Other(kind),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(kind: &str) -> Self {
        NodeKind::from(kind.to_string())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(kind) => kind,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A fill entry on a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        #[serde(default)]
        color: Option<Rgb>,
    },

    /// Gradients, images and anything else the extractor ignores
    #[serde(other)]
    Other,
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Paint::Solid { color: Some(color) }
    }
}

/// Styling-relevant snapshot of the selected node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStyleInfo {
    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default)]
    pub height: Option<f64>,

    #[serde(rename = "type", default)]
    pub kind: Option<NodeKind>,

    #[serde(default)]
    pub fills: Vec<Paint>,

    #[serde(default)]
    pub effects: Vec<serde_json::Value>,
}

/// CSS-ready values derived from a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    pub width: String,
    pub height: String,
    pub background_color: String,
}

impl Default for StyleSummary {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH.to_string(),
            height: FALLBACK_HEIGHT.to_string(),
            background_color: FALLBACK_BACKGROUND.to_string(),
        }
    }
}
