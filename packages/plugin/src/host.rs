use crate::messages::PluginMessage;
use crate::selection::SceneNode;
use serde::{Deserialize, Serialize};

/// Size of the plugin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 650,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyOptions {
    pub error: bool,
}

/// The design tool runtime the plugin runs inside
pub trait Host {
    /// Nodes currently selected on the canvas
    fn selection(&self) -> Vec<SceneNode>;

    /// Send a message to the plugin UI
    fn post_message(&mut self, message: PluginMessage);

    /// Show a toast in the host window
    fn notify(&mut self, text: &str, options: NotifyOptions);

    fn close(&mut self);
}

/// Host that records everything it is asked to do
#[derive(Debug, Default)]
pub struct MockHost {
    pub selection: Vec<SceneNode>,
    pub messages: Vec<PluginMessage>,
    pub notifications: Vec<(String, NotifyOptions)>,
    pub closed: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: Vec<SceneNode>) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn last_message(&self) -> Option<&PluginMessage> {
        self.messages.last()
    }
}

impl Host for MockHost {
    fn selection(&self) -> Vec<SceneNode> {
        self.selection.clone()
    }

    fn post_message(&mut self, message: PluginMessage) {
        self.messages.push(message);
    }

    fn notify(&mut self, text: &str, options: NotifyOptions) {
        self.notifications.push((text.to_string(), options));
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
