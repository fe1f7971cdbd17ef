use crate::messages::ComponentInfo;
use serde::{Deserialize, Serialize};
use storygen_common::{NodeKind, NodeStyleInfo, Paint, SelectionError};

/// A node on the host canvas, reduced to what the plugin reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default)]
    pub height: Option<f64>,

    #[serde(default)]
    pub fills: Vec<Paint>,

    #[serde(default)]
    pub effects: Vec<serde_json::Value>,
}

impl SceneNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<NodeKind>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            width: None,
            height: None,
            fills: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fills.push(fill);
        self
    }

    /// Styling snapshot handed to the generator
    pub fn style_info(&self) -> NodeStyleInfo {
        NodeStyleInfo {
            width: self.width.map(f64::round),
            height: self.height.map(f64::round),
            kind: Some(self.kind.clone()),
            fills: self.fills.clone(),
            effects: self.effects.clone(),
        }
    }
}

/// Check that exactly one exportable node is selected and summarize it
pub fn inspect_selection(selection: &[SceneNode]) -> Result<ComponentInfo, SelectionError> {
    let node = match selection {
        [] => return Err(SelectionError::Empty),
        [node] => node,
        _ => return Err(SelectionError::Multiple),
    };

    if !node.kind.is_exportable() {
        return Err(SelectionError::Unsupported(node.kind.to_string()));
    }

    Ok(ComponentInfo {
        name: node.name.clone(),
        kind: node.kind.clone(),
        width: node.width.map_or(0, |width| width.round() as i64),
        height: node.height.map_or(0, |height| height.round() as i64),
        id: node.id.clone(),
    })
}

/// Style context for generation: present only for a single selected node
pub fn style_context(selection: &[SceneNode]) -> Option<NodeStyleInfo> {
    match selection {
        [node] => Some(node.style_info()),
        _ => None,
    }
}
