use crate::host::{Host, NotifyOptions, UiOptions};
use crate::messages::{DebugInfo, DebugNode, FilesGenerated, PluginMessage, UiMessage};
use crate::selection::{inspect_selection, style_context};
use std::panic::{self, AssertUnwindSafe};
use storygen_common::{sanitize_name, CommonResult, GenerateError, GenerationRequest};
use storygen_generator::generate;
use tracing::{debug, error, info, warn};

/// Event handler that connects the host to the generator
pub struct Plugin<H: Host> {
    host: H,
}

impl<H: Host> Plugin<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn ui_options() -> UiOptions {
        UiOptions::default()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Initial selection check run once the UI is shown
    pub fn start(&mut self) {
        info!("Plugin initialized");
        self.handle_get_selection();
    }

    /// Handle a raw JSON message from the UI
    pub fn handle_raw(&mut self, raw: &str) {
        match serde_json::from_str::<UiMessage>(raw) {
            Ok(message) => self.handle_message(message),
            Err(err) => {
                error!(error = %err, "Malformed UI message");
                self.report_error(&GenerateError::from(err));
            }
        }
    }

    pub fn handle_message(&mut self, message: UiMessage) {
        debug!(?message, "Received message in plugin");

        match message {
            UiMessage::GenerateStorybook { data } => self.handle_generate(&data),
            UiMessage::GetSelection => self.handle_get_selection(),
            UiMessage::Cancel => self.host.close(),
            UiMessage::DebugSelection => self.handle_debug_selection(),
        }
    }

    fn handle_get_selection(&mut self) {
        let selection = self.host.selection();
        debug!(count = selection.len(), "Current selection");

        match inspect_selection(&selection) {
            Ok(info) => {
                debug!(node_type = %info.kind, name = %info.name, "Sending component info");
                self.host.post_message(PluginMessage::SelectionInfo { data: info });
            }
            Err(err) => {
                warn!(kind = err.kind(), "Selection cannot be exported");
                self.host.post_message(PluginMessage::selection_error(&err));
            }
        }
    }

    fn handle_generate(&mut self, request: &GenerationRequest) {
        match self.run_generation(request) {
            Ok(generated) => {
                let text = format!(
                    "Generated {} files for {}",
                    generated.files.len(),
                    generated.component_name
                );
                self.host.post_message(PluginMessage::FilesGenerated { data: generated });
                self.host.notify(&text, NotifyOptions::default());
            }
            Err(err) => {
                error!(error = %err, "Error generating storybook files");
                self.report_error(&err);
            }
        }
    }

    fn run_generation(&self, request: &GenerationRequest) -> CommonResult<FilesGenerated> {
        let node = style_context(&self.host.selection());

        // Generators are pure; a panic here is a bug, not a reason to take
        // the host down.
        let result = panic::catch_unwind(AssertUnwindSafe(|| generate(request, node.as_ref())))
            .map_err(|_| GenerateError::internal("Unexpected error while generating files"))?;

        let files = result?;
        let component_name = sanitize_name(&request.component_name)?;
        Ok(FilesGenerated {
            files,
            component_name,
        })
    }

    fn handle_debug_selection(&mut self) {
        let selection = self.host.selection();
        let nodes: Vec<(&str, &str, &str)> = selection
            .iter()
            .map(|node| (node.name.as_str(), node.kind.as_str(), node.id.as_str()))
            .collect();
        debug!(count = selection.len(), ?nodes, "Debug selection details");

        let data = DebugInfo {
            selection: selection
                .into_iter()
                .map(|node| DebugNode {
                    name: node.name,
                    kind: node.kind,
                    id: node.id,
                })
                .collect(),
        };
        self.host.post_message(PluginMessage::DebugInfo { data });
    }

    fn report_error(&mut self, err: &GenerateError) {
        self.host.post_message(PluginMessage::error(err));
        self.host
            .notify(&format!("Error: {}", err), NotifyOptions { error: true });
    }
}
