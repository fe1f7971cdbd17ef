use serde::{Deserialize, Serialize};
use storygen_common::{GenerateError, GenerationRequest, NodeKind, SelectionError};
use storygen_generator::GeneratedFileSet;

/// Messages sent from the plugin UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    GenerateStorybook { data: GenerationRequest },
    GetSelection,
    Cancel,
    DebugSelection,
}

/// Messages sent to the plugin UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    FilesGenerated { data: FilesGenerated },
    Error { message: String },
    NoSelection { message: String },
    MultipleSelection { message: String },
    InvalidSelection { message: String },
    SelectionInfo { data: ComponentInfo },
    DebugInfo { data: DebugInfo },
}

impl PluginMessage {
    pub fn error(err: &GenerateError) -> Self {
        match err {
            GenerateError::UnsupportedSelection(selection) => Self::selection_error(selection),
            other => PluginMessage::Error {
                message: other.to_string(),
            },
        }
    }

    pub fn selection_error(err: &SelectionError) -> Self {
        let message = err.to_string();
        match err {
            SelectionError::Empty => PluginMessage::NoSelection { message },
            SelectionError::Multiple => PluginMessage::MultipleSelection { message },
            SelectionError::Unsupported(_) => PluginMessage::InvalidSelection { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesGenerated {
    pub files: GeneratedFileSet,
    pub component_name: String,
}

/// Summary of the selected node shown in the UI form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub width: i64,
    pub height: i64,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub selection: Vec<DebugNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: String,
}
