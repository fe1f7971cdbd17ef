use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The four files emitted per component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Component,
    Story,
    Stylesheet,
    Index,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        FileKind::Component,
        FileKind::Story,
        FileKind::Stylesheet,
        FileKind::Index,
    ];

    /// Path of this file relative to the output root
    pub fn path(&self, component_name: &str) -> String {
        match self {
            FileKind::Component => format!("{}/{}.jsx", component_name, component_name),
            FileKind::Story => format!("{}/{}.stories.js", component_name, component_name),
            FileKind::Stylesheet => format!("{}/{}.module.css", component_name, component_name),
            FileKind::Index => format!("{}/index.js", component_name),
        }
    }
}

/// Relative path → file content for one generated component.
///
/// Iteration follows insertion order; lookups are by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedFileSet {
    files: IndexMap<String, String>,
}

impl GeneratedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: String, content: String) {
        self.files.insert(path, content);
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(path, content)| (path.as_str(), content.as_str()))
    }
}

impl IntoIterator for GeneratedFileSet {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_paths() {
        assert_eq!(FileKind::Component.path("Chip"), "Chip/Chip.jsx");
        assert_eq!(FileKind::Story.path("Chip"), "Chip/Chip.stories.js");
        assert_eq!(FileKind::Stylesheet.path("Chip"), "Chip/Chip.module.css");
        assert_eq!(FileKind::Index.path("Chip"), "Chip/index.js");
    }

    #[test]
    fn test_file_set_keeps_insertion_order() {
        let mut files = GeneratedFileSet::new();
        files.insert("b".to_string(), "2".to_string());
        files.insert("a".to_string(), "1".to_string());

        assert_eq!(files.paths().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(files.get("a"), Some("1"));
        assert_eq!(files.len(), 2);
    }
}
