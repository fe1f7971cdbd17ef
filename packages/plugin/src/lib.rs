//! Host-event layer of the plugin.
//!
//! Everything here talks to the design tool through the [`Host`] trait; the
//! file generation itself lives in `storygen-generator`.

mod host;
mod messages;
mod plugin;
mod selection;

pub use host::{Host, MockHost, NotifyOptions, UiOptions};
pub use messages::{ComponentInfo, DebugInfo, DebugNode, FilesGenerated, PluginMessage, UiMessage};
pub use plugin::Plugin;
pub use selection::{inspect_selection, style_context, SceneNode};
