use storygen_common::{default_literal, validation_type, EmitContext, PropType, PropertyDescriptor, StyleSummary};

/// Name fragments that mark a string property as the component's text
const TEXT_PROP_HINTS: [&str; 3] = ["text", "label", "title"];

/// Compile the React component file.
///
/// The style summary is not used by this file; the stylesheet carries it.
pub fn compile_component(
    component_name: &str,
    props: &[PropertyDescriptor],
    _style: &StyleSummary,
) -> String {
    let ctx = EmitContext::new();

    compile_imports(component_name, props, &ctx);
    ctx.add("\n");
    compile_doc_block(component_name, props, &ctx);
    compile_function(component_name, props, &ctx);

    if !props.is_empty() {
        ctx.add("\n");
        compile_prop_types(component_name, props, &ctx);
    }

    ctx.add("\n\n");
    ctx.add(&format!("export default {};", component_name));

    ctx.get_output()
}

/// First string property whose name reads like display text
pub fn find_text_prop(props: &[PropertyDescriptor]) -> Option<&PropertyDescriptor> {
    props.iter().find(|prop| {
        let name = prop.name.to_lowercase();
        prop.prop_type == PropType::String && TEXT_PROP_HINTS.iter().any(|hint| name.contains(hint))
    })
}

fn compile_imports(component_name: &str, props: &[PropertyDescriptor], ctx: &EmitContext) {
    ctx.add_line("import React from 'react';");
    if !props.is_empty() {
        ctx.add_line("import PropTypes from 'prop-types';");
    }
    ctx.add_line(&format!(
        "import styles from './{}.module.css';",
        component_name
    ));
}

fn compile_doc_block(component_name: &str, props: &[PropertyDescriptor], ctx: &EmitContext) {
    ctx.add_line("/**");
    ctx.add_line(&format!(" * {} Component", component_name));

    if !props.is_empty() {
        ctx.add_line(" * ");
        ctx.add_line(" * @param {Object} props");
        for prop in props {
            ctx.add_line(&format!(
                " * @param {{{}}} props.{} - {} prop",
                validation_type(&prop.prop_type).as_str(),
                prop.name,
                prop.name
            ));
        }
    }

    ctx.add_line(" */");
}

fn compile_function(component_name: &str, props: &[PropertyDescriptor], ctx: &EmitContext) {
    let params = if props.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = props.iter().map(|prop| prop.name.as_str()).collect();
        format!("{{ {} }}", names.join(", "))
    };

    ctx.add_line(&format!("export const {} = ({}) => {{", component_name, params));
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    ctx.add_line(&format!(
        "<div className={{styles.{}}}>",
        component_name.to_lowercase()
    ));
    ctx.indent();
    compile_body(props, ctx);
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    ctx.add_line("};");
}

fn compile_body(props: &[PropertyDescriptor], ctx: &EmitContext) {
    match find_text_prop(props) {
        Some(prop) => ctx.add_line(&format!("<span className=\"text\">{{{}}}</span>", prop.name)),
        None => ctx.add_line("<div className=\"content\">Component content</div>"),
    }
}

fn compile_prop_types(component_name: &str, props: &[PropertyDescriptor], ctx: &EmitContext) {
    ctx.add_line(&format!("{}.propTypes = {{", component_name));
    ctx.indent();
    ctx.add_comma_lines(props.iter().map(|prop| {
        let required = if prop.declared_default().is_some() {
            ""
        } else {
            ".isRequired"
        };
        format!(
            "{}: PropTypes.{}{}",
            prop.name,
            validation_type(&prop.prop_type).prop_types_validator(),
            required
        )
    }));
    ctx.dedent();
    ctx.add_line("};");
    ctx.add_line("");

    ctx.add_line(&format!("{}.defaultProps = {{", component_name));
    let defaults: Vec<String> = props
        .iter()
        .filter(|prop| prop.declared_default().is_some())
        .map(|prop| format!("{}: {}", prop.name, default_literal(prop)))
        .collect();
    if defaults.is_empty() {
        ctx.add("\n");
    } else {
        ctx.indent();
        ctx.add_comma_lines(defaults);
        ctx.dedent();
    }
    ctx.add_indented("};");
}
