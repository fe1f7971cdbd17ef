use crate::{compile_component, compile_index, find_text_prop};
use storygen_common::{PropertyDescriptor, StyleSummary};

fn compile(name: &str, props: &[PropertyDescriptor]) -> String {
    compile_component(name, props, &StyleSummary::default())
}

#[test]
fn test_component_with_label_prop() {
    let props = vec![PropertyDescriptor::new("label", "string").with_default("Click me")];
    let result = compile("PrimaryButton", &props);

    println!("Generated code:\n{}", result);

    let expected = r#"import React from 'react';
import PropTypes from 'prop-types';
import styles from './PrimaryButton.module.css';

/**
 * PrimaryButton Component
 * 
 * @param {Object} props
 * @param {string} props.label - label prop
 */
export const PrimaryButton = ({ label }) => {
  return (
    <div className={styles.primarybutton}>
      <span className="text">{label}</span>
    </div>
  );
};

PrimaryButton.propTypes = {
  label: PropTypes.string
};

PrimaryButton.defaultProps = {
  label: "Click me"
};

export default PrimaryButton;"#;

    assert_eq!(result, expected);
}

#[test]
fn test_component_without_props() {
    let result = compile("Card", &[]);

    println!("Generated code:\n{}", result);

    let expected = r#"import React from 'react';
import styles from './Card.module.css';

/**
 * Card Component
 */
export const Card = () => {
  return (
    <div className={styles.card}>
      <div className="content">Component content</div>
    </div>
  );
};


export default Card;"#;

    assert_eq!(result, expected);
    assert!(!result.contains("PropTypes"));
}

#[test]
fn test_first_match_text_binding() {
    let props = vec![
        PropertyDescriptor::new("count", "number"),
        PropertyDescriptor::new("label", "string"),
        PropertyDescriptor::new("title", "string"),
    ];
    let result = compile("Badge", &props);

    assert!(result.contains("<span className=\"text\">{label}</span>"));
    assert!(!result.contains("{title}</span>"));
    assert!(!result.contains("{count}</span>"));
    assert_eq!(find_text_prop(&props).map(|p| p.name.as_str()), Some("label"));
}

#[test]
fn test_text_binding_requires_string_type() {
    let props = vec![
        PropertyDescriptor::new("labelColor", "color"),
        PropertyDescriptor::new("subtitleText", "string"),
    ];
    assert_eq!(
        find_text_prop(&props).map(|p| p.name.as_str()),
        Some("subtitleText")
    );

    let props = vec![PropertyDescriptor::new("Title", "number")];
    assert!(find_text_prop(&props).is_none());
    assert!(compile("Tag", &props).contains("<div className=\"content\">Component content</div>"));
}

#[test]
fn test_text_binding_is_case_insensitive() {
    let props = vec![PropertyDescriptor::new("HeaderTITLE", "string")];
    assert!(compile("Panel", &props).contains("{HeaderTITLE}</span>"));
}

#[test]
fn test_property_order_is_preserved() {
    let a = PropertyDescriptor::new("alpha", "number");
    let b = PropertyDescriptor::new("beta", "boolean");

    let forward = compile("Toggle", &[a.clone(), b.clone()]);
    let reverse = compile("Toggle", &[b, a]);

    assert!(forward.contains("export const Toggle = ({ alpha, beta }) => {"));
    assert!(reverse.contains("export const Toggle = ({ beta, alpha }) => {"));

    let doc_order = |code: &str| {
        let alpha = code.find("props.alpha").unwrap();
        let beta = code.find("props.beta").unwrap();
        alpha < beta
    };
    assert!(doc_order(&forward));
    assert!(!doc_order(&reverse));
}

#[test]
fn test_prop_types_and_defaults() {
    let props = vec![
        PropertyDescriptor::new("disabled", "boolean").with_default("true"),
        PropertyDescriptor::new("size", "number"),
        PropertyDescriptor::new("tint", "color").with_default("#ff0000"),
        PropertyDescriptor::new("icon", "svg"),
    ];
    let result = compile("IconButton", &props);

    println!("Generated code:\n{}", result);

    assert!(result.contains(" * @param {boolean} props.disabled - disabled prop"));
    assert!(result.contains(" * @param {string} props.tint - tint prop"));
    assert!(result.contains(" * @param {string} props.icon - icon prop"));
    assert!(result.contains(
        "IconButton.propTypes = {\n  disabled: PropTypes.bool,\n  size: PropTypes.number.isRequired,\n  tint: PropTypes.string,\n  icon: PropTypes.string.isRequired\n};"
    ));
    assert!(result.contains(
        "IconButton.defaultProps = {\n  disabled: true,\n  tint: \"#ff0000\"\n};"
    ));
}

#[test]
fn test_empty_default_props_block() {
    let props = vec![PropertyDescriptor::new("count", "number")];
    let result = compile("Counter", &props);

    assert!(result.contains("Counter.defaultProps = {\n\n};\n\nexport default Counter;"));
}

#[test]
fn test_style_class_is_lowercase() {
    let result = compile("HeroBanner2", &[]);
    assert!(result.contains("import styles from './HeroBanner2.module.css';"));
    assert!(result.contains("<div className={styles.herobanner2}>"));
}

#[test]
fn test_index_file() {
    assert_eq!(
        compile_index("PrimaryButton"),
        "export { PrimaryButton } from './PrimaryButton';\nexport { default } from './PrimaryButton';"
    );
}
