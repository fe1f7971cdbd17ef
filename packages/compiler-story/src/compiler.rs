use storygen_common::{control_kind, default_literal, example_literal, EmitContext, PropertyDescriptor};

/// Compile the Storybook CSF file for a component
pub fn compile_story(component_name: &str, category: &str, props: &[PropertyDescriptor]) -> String {
    let ctx = EmitContext::new();

    ctx.add_line(&format!(
        "import {{ {} }} from './{}';",
        component_name, component_name
    ));
    ctx.add_line("");

    compile_meta(component_name, category, props, &ctx);
    ctx.add_line("");

    let args = compile_default_args(props, &ctx);
    compile_story_export("Default story", "Default", &args, &ctx);
    ctx.add_line("");
    compile_story_export("Interactive story with all controls", "Interactive", &args, &ctx);
    ctx.add_line("");

    if !props.is_empty() {
        compile_example(props, &ctx);
    }

    ctx.get_output()
}

fn compile_meta(component_name: &str, category: &str, props: &[PropertyDescriptor], ctx: &EmitContext) {
    ctx.add_line("export default {");
    ctx.indent();
    ctx.add_line(&format!(
        "title: '{}/{}',",
        escape_single_quoted(category),
        component_name
    ));
    ctx.add_line(&format!("component: {},", component_name));
    ctx.add_line("parameters: {");
    ctx.indent();
    ctx.add_line("layout: 'centered',");
    ctx.add_line("docs: {");
    ctx.indent();
    ctx.add_line("description: {");
    ctx.indent();
    ctx.add_line(&format!(
        "component: 'A {} component generated from Figma.'",
        component_name
    ));
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();

    if props.is_empty() {
        ctx.add_line("}");
    } else {
        ctx.add_line("},");
        compile_arg_types(props, ctx);
    }

    ctx.dedent();
    ctx.add_line("};");
}

fn compile_arg_types(props: &[PropertyDescriptor], ctx: &EmitContext) {
    ctx.add_line("argTypes: {");
    ctx.indent();
    for (i, prop) in props.iter().enumerate() {
        ctx.add_line(&format!("{}: {{ ", prop.name));
        ctx.indent();
        ctx.add_line(&format!("control: '{}',", control_kind(&prop.prop_type).as_str()));
        ctx.add_line(&format!("description: '{} property'", prop.name));
        ctx.dedent();
        ctx.add_line(if i + 1 < props.len() { "}," } else { "}" });
    }
    ctx.dedent();
    ctx.add_line("}");
}

/// The `args` block shared by the Default and Interactive stories.
/// Empty when there are no props.
fn compile_default_args(props: &[PropertyDescriptor], ctx: &EmitContext) -> EmitContext {
    let args = ctx.with_new_buffer();
    if props.is_empty() {
        return args;
    }

    args.indent();
    args.add_line("args: {");
    args.indent();
    args.add_comma_lines(
        props
            .iter()
            .map(|prop| format!("{}: {}", prop.name, default_literal(prop))),
    );
    args.dedent();
    args.add_line("}");
    args.dedent();
    args
}

fn compile_story_export(comment: &str, name: &str, args: &EmitContext, ctx: &EmitContext) {
    ctx.add_line(&format!("// {}", comment));
    ctx.add_line(&format!("export const {} = {{", name));
    ctx.merge_buffer(args);
    ctx.add_line("};");
}

fn compile_example(props: &[PropertyDescriptor], ctx: &EmitContext) {
    ctx.add_line("// Example variations");
    ctx.add_line("export const Example = {");
    ctx.indent();
    ctx.add_line("args: {");
    ctx.indent();
    ctx.add_comma_lines(
        props
            .iter()
            .map(|prop| format!("{}: {}", prop.name, example_literal(prop))),
    );
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_indented("};");
}

fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
