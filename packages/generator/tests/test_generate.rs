use storygen_generator::{
    generate, GenerateError, GenerationRequest, NodeKind, NodeStyleInfo, Paint, PropertyDescriptor, Rgb,
};

const COMPONENT: &str = include_str!("fixtures/PrimaryButton/PrimaryButton.jsx");
const STORY: &str = include_str!("fixtures/PrimaryButton/PrimaryButton.stories.js");
const STYLESHEET: &str = include_str!("fixtures/PrimaryButton/PrimaryButton.module.css");
const INDEX: &str = include_str!("fixtures/PrimaryButton/index.js");

fn primary_button() -> GenerationRequest {
    GenerationRequest::new("Primary Button", "Buttons")
        .with_prop(PropertyDescriptor::new("label", "string").with_default("Click me"))
}

#[test]
fn test_end_to_end_primary_button() {
    let files = generate(&primary_button(), None).expect("Generation failed");

    assert_eq!(
        files.paths().collect::<Vec<_>>(),
        vec![
            "PrimaryButton/PrimaryButton.jsx",
            "PrimaryButton/PrimaryButton.stories.js",
            "PrimaryButton/PrimaryButton.module.css",
            "PrimaryButton/index.js",
        ]
    );

    assert_eq!(files.get("PrimaryButton/PrimaryButton.jsx"), Some(COMPONENT));
    assert_eq!(files.get("PrimaryButton/PrimaryButton.stories.js"), Some(STORY));
    assert_eq!(files.get("PrimaryButton/PrimaryButton.module.css"), Some(STYLESHEET));
    assert_eq!(files.get("PrimaryButton/index.js"), Some(INDEX));
}

#[test]
fn test_end_to_end_spot_checks() {
    let files = generate(&primary_button(), None).unwrap();

    let component = files.get("PrimaryButton/PrimaryButton.jsx").unwrap();
    assert!(component.contains("<span className=\"text\">{label}</span>"));

    let story = files.get("PrimaryButton/PrimaryButton.stories.js").unwrap();
    assert_eq!(story.matches("control: ").count(), 1);
    assert!(story.contains("label: \"Click me\""));

    let css = files.get("PrimaryButton/PrimaryButton.module.css").unwrap();
    assert!(css.contains("background-color: #f5f5f5;"));

    let index = files.get("PrimaryButton/index.js").unwrap();
    assert!(index.contains("export { PrimaryButton } from './PrimaryButton';"));
}

#[test]
fn test_node_style_flows_into_stylesheet_only() {
    let node = NodeStyleInfo {
        width: Some(64.0),
        height: Some(64.0),
        kind: Some(NodeKind::Frame),
        fills: vec![Paint::solid(Rgb::new(1.0, 0.0, 0.0))],
        effects: Vec::new(),
    };

    let request = GenerationRequest::new("Swatch", "Tokens");
    let with_node = generate(&request, Some(&node)).unwrap();
    let without_node = generate(&request, None).unwrap();

    assert_eq!(
        with_node.get("Swatch/Swatch.module.css"),
        Some(include_str!("../../compiler-css/tests/fixtures/Swatch.module.css"))
    );
    assert_eq!(
        with_node.get("Swatch/Swatch.jsx"),
        without_node.get("Swatch/Swatch.jsx")
    );
}

#[test]
fn test_blank_name_is_rejected() {
    let err = generate(&GenerationRequest::new("   ", "Buttons"), None).unwrap_err();
    assert_eq!(err, GenerateError::validation("Component name is required"));
}

#[test]
fn test_missing_category_is_rejected() {
    let err = generate(&GenerationRequest::new("Button", ""), None).unwrap_err();
    assert_eq!(err, GenerateError::validation("Category is required"));
}

#[test]
fn test_name_without_alphanumerics_is_rejected() {
    let err = generate(&GenerationRequest::new("!!!", "Buttons"), None).unwrap_err();
    assert!(matches!(err, GenerateError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "Component name must contain at least one alphanumeric character"
    );
}

#[test]
fn test_name_checked_before_category() {
    let err = generate(&GenerationRequest::new("", ""), None).unwrap_err();
    assert_eq!(err, GenerateError::validation("Component name is required"));
}

#[test]
fn test_generated_names_are_consistent() {
    let request = GenerationRequest::new("nav-item (v2)", "Navigation");
    let files = generate(&request, None).unwrap();

    assert_eq!(files.len(), 4);
    for path in files.paths() {
        assert!(path.starts_with("navitemv2/"), "unexpected path {}", path);
    }
    assert!(files.get("navitemv2/navitemv2.jsx").unwrap().contains("export const navitemv2 = () => {"));
    assert!(files.get("navitemv2/navitemv2.stories.js").unwrap().contains("import { navitemv2 } from './navitemv2';"));
}

#[test]
fn test_file_set_serializes_as_object() {
    let files = generate(&primary_button(), None).unwrap();
    let json = serde_json::to_value(&files).unwrap();

    let object = json.as_object().expect("expected a JSON object");
    assert_eq!(object.len(), 4);
    assert_eq!(object["PrimaryButton/index.js"], INDEX);
}
