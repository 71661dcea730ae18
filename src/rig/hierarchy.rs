use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a hierarchy descriptor document.
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("failed to read hierarchy descriptor: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse hierarchy descriptor: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A node in the static bone topology: a mapping from child bone name to that
/// child's own subtree. The document root is itself a node whose "children"
/// are the top-level entries.
///
/// Loaded once, immutable afterwards; safe to share across traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HierarchyNode {
    children: BTreeMap<String, HierarchyNode>,
}

impl HierarchyNode {
    /// Reads a nested-JSON hierarchy descriptor from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HierarchyError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parses a hierarchy descriptor held in memory.
    pub fn from_json_str(text: &str) -> Result<Self, HierarchyError> {
        Ok(serde_json::from_str(text)?)
    }

    /// A leaf bone declares no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &HierarchyNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn child(&self, name: &str) -> Option<&HierarchyNode> {
        self.children.get(name)
    }

    /// Follows a chain of names down the tree, e.g. `["Armature", "mixamorig:Hips"]`.
    pub fn descend(&self, path: &[&str]) -> Option<&HierarchyNode> {
        path.iter().try_fold(self, |node, &name| node.child(name))
    }

    /// Number of bones declared in this subtree, the node itself excluded.
    pub fn bone_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.bone_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"Root": {"A": {}, "B": {"C": {}}}}"#;

    #[test]
    fn parses_nested_document() {
        let doc = HierarchyNode::from_json_str(DOC).unwrap();
        let root = doc.child("Root").unwrap();

        assert!(!root.is_leaf());
        assert!(root.child("A").unwrap().is_leaf());
        assert!(!root.child("B").unwrap().is_leaf());
        assert_eq!(doc.bone_count(), 4);
    }

    #[test]
    fn descend_follows_name_chain() {
        let doc = HierarchyNode::from_json_str(DOC).unwrap();

        assert!(doc.descend(&["Root", "B", "C"]).unwrap().is_leaf());
        assert!(doc.descend(&["Root", "missing"]).is_none());
        assert_eq!(doc.descend(&[]), Some(&doc));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = HierarchyNode::load("no/such/hierarchy.json").unwrap_err();
        assert!(matches!(err, HierarchyError::Io(_)));
    }

    #[test]
    fn malformed_document_reports_parse_error() {
        let err = HierarchyNode::from_json_str("{\"Root\": [1, 2]}").unwrap_err();
        assert!(matches!(err, HierarchyError::Parse(_)));
    }
}
