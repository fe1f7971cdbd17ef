use storygen_common::EmitContext;

/// Compile the barrel file that re-exports the component
pub fn compile_index(component_name: &str) -> String {
    let ctx = EmitContext::new();
    ctx.add_line(&format!(
        "export {{ {} }} from './{}';",
        component_name, component_name
    ));
    ctx.add_indented(&format!("export {{ default }} from './{}';", component_name));
    ctx.get_output()
}
