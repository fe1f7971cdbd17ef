use storygen_common::{EmitContext, StyleSummary, FALLBACK_BACKGROUND};

/// Hover background paired with the fallback base background
pub const FALLBACK_HOVER_BACKGROUND: &str = "#ebebeb";

const BORDER_RADIUS: &str = "8px";

/// Compile the CSS module for a component
pub fn compile_stylesheet(component_name: &str, style: &StyleSummary) -> String {
    let class_name = component_name.to_lowercase();
    let ctx = EmitContext::new();

    compile_root_rule(&class_name, style, &ctx);
    ctx.add_line("");
    compile_state_rules(&class_name, style, &ctx);
    ctx.add_line("");
    compile_content_rules(&class_name, &ctx);
    ctx.add_line("");
    compile_media_rules(&class_name, &ctx);

    ctx.get_output()
}

/// Hover background for a base background.
///
/// The fallback base gets a fixed darker shade; anything else is mixed 10%
/// toward black.
pub fn hover_background(background: &str) -> String {
    if background == FALLBACK_BACKGROUND {
        FALLBACK_HOVER_BACKGROUND.to_string()
    } else {
        format!("color-mix(in srgb, {}, black 10%)", background)
    }
}

fn compile_root_rule(class_name: &str, style: &StyleSummary, ctx: &EmitContext) {
    ctx.add_line(&format!(".{} {{", class_name));
    ctx.indent();

    ctx.add_lines(&[
        "/* Component container */",
        "display: flex;",
        "align-items: center;",
        "justify-content: center;",
    ]);
    ctx.add_line(&format!("width: {};", style.width));
    ctx.add_line(&format!("height: {};", style.height));
    ctx.add_lines(&["min-height: 40px;", "padding: 12px 24px;", ""]);

    ctx.add_line("/* Visual styling */");
    ctx.add_line(&format!("background-color: {};", style.background_color));
    ctx.add_line("border: 1px solid #e0e0e0;");
    ctx.add_line(&format!("border-radius: {};", BORDER_RADIUS));
    ctx.add_lines(&["box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);", ""]);

    ctx.add_lines(&[
        "/* Typography */",
        "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;",
        "font-size: 14px;",
        "font-weight: 500;",
        "color: #333333;",
        "text-align: center;",
        "",
    ]);

    ctx.add_lines(&[
        "/* Interactions */",
        "cursor: pointer;",
        "user-select: none;",
        "transition: all 0.2s ease-in-out;",
    ]);

    ctx.dedent();
    ctx.add_line("}");
}

fn compile_state_rules(class_name: &str, style: &StyleSummary, ctx: &EmitContext) {
    ctx.add_line(&format!(".{}:hover {{", class_name));
    ctx.indent();
    ctx.add_line(&format!(
        "background-color: {};",
        hover_background(&style.background_color)
    ));
    ctx.add_lines(&[
        "border-color: #d0d0d0;",
        "box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15);",
        "transform: translateY(-1px);",
    ]);
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("");

    ctx.add_line(&format!(".{}:active {{", class_name));
    ctx.indent();
    ctx.add_lines(&[
        "transform: translateY(0);",
        "box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);",
    ]);
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("");

    ctx.add_line(&format!(".{}:focus {{", class_name));
    ctx.indent();
    ctx.add_lines(&["outline: 2px solid #0066cc;", "outline-offset: 2px;"]);
    ctx.dedent();
    ctx.add_line("}");
}

fn compile_content_rules(class_name: &str, ctx: &EmitContext) {
    ctx.add_line("/* Content styling */");
    ctx.add_line(&format!(".{} .text {{", class_name));
    ctx.indent();
    ctx.add_lines(&[
        "font-weight: inherit;",
        "color: inherit;",
        "white-space: nowrap;",
        "overflow: hidden;",
        "text-overflow: ellipsis;",
    ]);
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("");

    ctx.add_line(&format!(".{} .content {{", class_name));
    ctx.indent();
    ctx.add_lines(&[
        "display: flex;",
        "align-items: center;",
        "justify-content: center;",
        "gap: 8px;",
    ]);
    ctx.dedent();
    ctx.add_line("}");
}

fn compile_media_rules(class_name: &str, ctx: &EmitContext) {
    let root = format!(".{} {{", class_name);
    let hover = format!(".{}:hover {{", class_name);

    ctx.add_line("/* Responsive design */");
    ctx.add_line("@media (max-width: 768px) {");
    ctx.indent();
    ctx.add_line(&root);
    ctx.indent();
    ctx.add_lines(&["font-size: 13px;", "padding: 10px 20px;", "min-height: 36px;"]);
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("");

    ctx.add_line("/* Accessibility */");
    ctx.add_line("@media (prefers-reduced-motion: reduce) {");
    ctx.indent();
    ctx.add_line(&root);
    ctx.indent();
    ctx.add_line("transition: none;");
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("");
    ctx.add_line(&hover);
    ctx.indent();
    ctx.add_line("transform: none;");
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("");

    ctx.add_line("/* High contrast mode */");
    ctx.add_line("@media (prefers-contrast: high) {");
    ctx.indent();
    ctx.add_line(&root);
    ctx.indent();
    ctx.add_lines(&["border-width: 2px;", "border-color: #000000;"]);
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_indented("}");
}
