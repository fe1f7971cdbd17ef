use crate::file_set::{FileKind, GeneratedFileSet};
use storygen_common::{sanitize_name, CommonResult, GenerateError, GenerationRequest, NodeStyleInfo};
use storygen_compiler_css::{compile_stylesheet, extract_style};
use storygen_compiler_react::{compile_component, compile_index};
use storygen_compiler_story::compile_story;
use tracing::{debug, info, instrument};

/// Generate the component, story, stylesheet and index files for a request.
///
/// `node` is the style snapshot of the selected canvas node; the host passes
/// it only when exactly one node is selected. Validation runs before any
/// file is compiled, so an error never comes with partial output.
#[instrument(skip_all, fields(component_name = %request.component_name))]
pub fn generate(
    request: &GenerationRequest,
    node: Option<&NodeStyleInfo>,
) -> CommonResult<GeneratedFileSet> {
    info!("Starting file generation");

    if request.component_name.trim().is_empty() {
        return Err(GenerateError::validation("Component name is required"));
    }

    if request.category.trim().is_empty() {
        return Err(GenerateError::validation("Category is required"));
    }

    let name = sanitize_name(&request.component_name)?;
    debug!(clean_name = %name, props = request.props.len(), "Sanitized component name");

    let style = extract_style(node);
    debug!(
        width = %style.width,
        height = %style.height,
        background = %style.background_color,
        "Extracted node style"
    );

    let mut files = GeneratedFileSet::new();
    for kind in FileKind::ALL {
        let content = match kind {
            FileKind::Component => compile_component(&name, &request.props, &style),
            FileKind::Story => compile_story(&name, &request.category, &request.props),
            FileKind::Stylesheet => compile_stylesheet(&name, &style),
            FileKind::Index => compile_index(&name),
        };
        files.insert(kind.path(&name), content);
    }

    info!(files = files.len(), "File generation complete");
    Ok(files)
}
