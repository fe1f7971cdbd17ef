use crate::compile_story;
use storygen_common::PropertyDescriptor;

const NO_PROPS_STORY: &str = include_str!("../tests/fixtures/Divider.stories.js");
const MIXED_PROPS_STORY: &str = include_str!("../tests/fixtures/SaveButton.stories.js");

#[test]
fn test_story_without_props() {
    let result = compile_story("Divider", "Layout", &[]);

    println!("Generated story:\n{}", result);

    assert_eq!(result, NO_PROPS_STORY);
    assert!(!result.contains("argTypes"));
    assert!(!result.contains("args:"));
    assert!(!result.contains("Example"));
    assert!(result.ends_with("export const Interactive = {\n};\n\n"));
}

#[test]
fn test_story_with_mixed_props() {
    let props = vec![
        PropertyDescriptor::new("count", "number"),
        PropertyDescriptor::new("label", "string").with_default("Save"),
        PropertyDescriptor::new("disabled", "boolean").with_default("true"),
        PropertyDescriptor::new("accent", "color"),
    ];
    let result = compile_story("SaveButton", "Forms/Actions", &props);

    println!("Generated story:\n{}", result);

    assert_eq!(result, MIXED_PROPS_STORY);
}

#[test]
fn test_default_and_interactive_share_args() {
    let props = vec![PropertyDescriptor::new("label", "string").with_default("Click me")];
    let result = compile_story("PrimaryButton", "Buttons", &props);

    let args = "  args: {\n    label: \"Click me\"\n  }\n";
    assert!(result.contains(&format!("export const Default = {{\n{}}};", args)));
    assert!(result.contains(&format!("export const Interactive = {{\n{}}};", args)));
    assert!(result.contains("export const Example = {\n  args: {\n    label: \"Example label\"\n  }\n};"));
    assert_eq!(result.matches("control: ").count(), 1);
}

#[test]
fn test_title_combines_category_and_name() {
    let result = compile_story("Card", "Surfaces", &[]);
    assert!(result.contains("  title: 'Surfaces/Card',\n"));
    assert!(result.contains("  component: Card,\n"));
    assert!(result.starts_with("import { Card } from './Card';\n"));
}

#[test]
fn test_title_escapes_quotes() {
    let result = compile_story("Card", "Designer's Kit", &[]);
    assert!(result.contains("title: 'Designer\\'s Kit/Card',"));
}

#[test]
fn test_unknown_type_uses_text_control() {
    let props = vec![PropertyDescriptor::new("icon", "svg")];
    let result = compile_story("Icon", "Media", &props);

    assert!(result.contains("    icon: { \n      control: 'text',\n      description: 'icon property'\n    }\n"));
    assert!(result.contains("    icon: \"\"\n"));
}
