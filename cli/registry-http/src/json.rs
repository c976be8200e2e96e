//! Key-path traversal over parsed JSON trees.

use serde_json::Value;
use thiserror::Error;

/// A key named in a traversal path was absent from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key {key:?} (position {depth} of path {path:?}) is not present in the document")]
pub struct TraverseError {
    pub key: String,
    pub depth: usize,
    pub path: Vec<String>,
}

/// Walk `value` along a path of object keys.
///
/// Fails on the first key that is absent from the current nesting level,
/// which includes the case where that level is not an object at all.
pub fn traverse<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, TraverseError> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        current = current.get(key).ok_or_else(|| TraverseError {
            key: (*key).to_owned(),
            depth,
            path: path.iter().map(|k| (*k).to_owned()).collect(),
        })?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn walks_nested_objects() {
        let doc = json!({"a": {"b": {"c": 7}}});
        assert_eq!(traverse(&doc, &["a", "b", "c"]).unwrap(), &json!(7));
    }

    #[test]
    fn empty_path_yields_the_document() {
        let doc = json!({"a": 1});
        assert_eq!(traverse(&doc, &[]).unwrap(), &doc);
    }

    #[test]
    fn absent_key_reports_key_and_depth() {
        let doc = json!({"a": {"b": 1}});
        let err = traverse(&doc, &["a", "missing"]).unwrap_err();
        assert_eq!(err.key, "missing");
        assert_eq!(err.depth, 1);
        assert_eq!(err.path, vec!["a".to_string(), "missing".to_string()]);
    }

    #[test]
    fn non_object_level_fails() {
        let doc = json!({"a": [1, 2, 3]});
        let err = traverse(&doc, &["a", "b"]).unwrap_err();
        assert_eq!(err.key, "b");
        assert_eq!(err.depth, 1);
    }
}
