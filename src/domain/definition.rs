//! Tree definitions: element trees described in TOML.
//!
//! ```toml
//! name = "ul"
//!
//! [[children]]
//! name = "li"
//! text = "hello"
//! ```

use std::path::Path;

use tracing::instrument;

use crate::domain::element::Element;
use crate::domain::error::DomainError;

/// Parse a TOML tree definition.
///
/// `text` and `children` may be omitted. Every element must carry a
/// non-blank name.
///
/// # Arguments
/// * `content` - TOML source
/// * `path` - Origin of `content`, used in error messages only
#[instrument(level = "debug", skip(content))]
pub fn parse_definition(content: &str, path: &Path) -> Result<Element, DomainError> {
    let root: Element = toml::from_str(content).map_err(|e| DomainError::InvalidDefinition {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let label = if root.name().trim().is_empty() {
        ROOT_LABEL
    } else {
        root.name()
    };
    validate_names(&root, label)?;
    Ok(root)
}

/// Location label of a root element without a usable name.
const ROOT_LABEL: &str = "<root>";

/// Locations read `ul/children[0]/children[2]`: root name, then child indices.
fn validate_names(element: &Element, location: &str) -> Result<(), DomainError> {
    if element.name().trim().is_empty() {
        return Err(DomainError::EmptyName(location.to_string()));
    }
    for (i, child) in element.children().iter().enumerate() {
        let child_location = format!("{}/children[{}]", location, i);
        validate_names(child, &child_location)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_definition_when_parsing_then_builds_tree() {
        let content = r#"
name = "html"

[[children]]
name = "body"

[[children.children]]
name = "p"
text = "hi"
"#;
        let root = parse_definition(content, Path::new("page.toml")).unwrap();
        assert_eq!(root.depth(), 3);
        assert_eq!(root.children()[0].children()[0].text(), "hi");
    }

    #[test]
    fn given_blank_child_name_when_parsing_then_reports_location() {
        let content = r#"
name = "ul"

[[children]]
name = " "
"#;
        let err = parse_definition(content, Path::new("list.toml")).unwrap_err();
        assert!(matches!(err, DomainError::EmptyName(ref at) if at == "ul/children[0]"));
    }

    #[test]
    fn given_blank_grandchild_name_when_parsing_then_location_uses_indices() {
        let content = r#"
name = "ul"

[[children]]
name = "li"

[[children]]
name = "li"

[[children.children]]
name = ""
"#;
        let err = parse_definition(content, Path::new("list.toml")).unwrap_err();
        assert!(matches!(err, DomainError::EmptyName(ref at) if at == "ul/children[1]/children[0]"));
    }

    #[test]
    fn given_blank_root_name_when_parsing_then_root_label_reported() {
        let err = parse_definition("name = \"  \"", Path::new("root.toml")).unwrap_err();
        assert_eq!(err.to_string(), "element at <root> has an empty name");
    }

    #[test]
    fn given_missing_name_when_parsing_then_invalid_definition() {
        let err = parse_definition("text = \"x\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDefinition { .. }));
    }
}
