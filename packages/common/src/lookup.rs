//! Per-type tables that drive the file templates.
//!
//! Every table has an explicit arm for [`PropType::Unknown`] so an
//! unrecognized tag always lands in the string family.

use crate::model::{DefaultValue, PropType, PropertyDescriptor};

/// Story control widget used for a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Number,
    Boolean,
    Color,
}

impl ControlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Number => "number",
            ControlKind::Boolean => "boolean",
            ControlKind::Color => "color",
        }
    }
}

/// Runtime validation type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationType {
    String,
    Number,
    Boolean,
}

impl ValidationType {
    /// Token used in documentation blocks
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::String => "string",
            ValidationType::Number => "number",
            ValidationType::Boolean => "boolean",
        }
    }

    /// Member name on the `PropTypes` validator object
    pub fn prop_types_validator(&self) -> &'static str {
        match self {
            ValidationType::String => "string",
            ValidationType::Number => "number",
            ValidationType::Boolean => "bool",
        }
    }
}

pub fn control_kind(prop_type: &PropType) -> ControlKind {
    match prop_type {
        PropType::String => ControlKind::Text,
        PropType::Number => ControlKind::Number,
        PropType::Boolean => ControlKind::Boolean,
        PropType::Color => ControlKind::Color,
        PropType::Unknown(_) => ControlKind::Text,
    }
}

pub fn validation_type(prop_type: &PropType) -> ValidationType {
    match prop_type {
        PropType::String => ValidationType::String,
        PropType::Number => ValidationType::Number,
        PropType::Boolean => ValidationType::Boolean,
        PropType::Color => ValidationType::String,
        PropType::Unknown(_) => ValidationType::String,
    }
}

/// JavaScript literal for a property's default value
pub fn default_literal(prop: &PropertyDescriptor) -> String {
    let declared = prop.declared_default();

    match &prop.prop_type {
        PropType::String => declared
            .map(|value| quote(&value.to_string()))
            .unwrap_or_else(|| "\"Default text\"".to_string()),
        PropType::Number => declared
            .map(|value| value.to_string())
            .unwrap_or_else(|| "0".to_string()),
        PropType::Boolean => {
            let is_true = match declared {
                Some(DefaultValue::Bool(value)) => *value,
                Some(DefaultValue::Text(text)) => text == "true",
                _ => false,
            };
            is_true.to_string()
        }
        PropType::Color => declared
            .map(|value| quote(&value.to_string()))
            .unwrap_or_else(|| "\"#000000\"".to_string()),
        PropType::Unknown(_) => "\"\"".to_string(),
    }
}

/// JavaScript literal used in the example story
pub fn example_literal(prop: &PropertyDescriptor) -> String {
    match &prop.prop_type {
        PropType::String => quote(&format!("Example {}", prop.name)),
        PropType::Number => "42".to_string(),
        PropType::Boolean => "true".to_string(),
        PropType::Color => "\"#ff6b6b\"".to_string(),
        PropType::Unknown(_) => "\"\"".to_string(),
    }
}

/// Wrap text in double quotes, escaping backslashes and quotes
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
