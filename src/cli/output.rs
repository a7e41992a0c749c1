//! Output-mode policy for rendered values and documents.
//!
//! Native mode prints TOML as the serializer spells it; raw mode prints
//! shell-consumable text (unquoted, shell-escaped scalars).

use crate::toml;

/// How values and documents are rendered on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Native TOML syntax (default).
    Toml,
    /// Raw shell-consumable rendering (`-r`).
    Raw,
}

impl OutputMode {
    pub fn from_flag(raw: bool) -> Self {
        if raw {
            OutputMode::Raw
        } else {
            OutputMode::Toml
        }
    }

    /// Render a single resolved node (for `read`).
    ///
    /// Raw mode is line-oriented and gets a trailing newline; native mode
    /// prints the value text as-is, like the original spelling in the file.
    pub fn render_value(self, node: toml::NodeRef<'_>) -> String {
        match self {
            OutputMode::Toml => toml::render_native(node),
            OutputMode::Raw => {
                let mut s = toml::render_raw(node);
                s.push('\n');
                s
            }
        }
    }

    /// Render the whole document (for create/update/delete output).
    pub fn render_document(self, doc: &toml::DocumentMut) -> String {
        match self {
            OutputMode::Toml => doc.to_string(),
            OutputMode::Raw => {
                let mut s = toml::render_raw_document(doc);
                s.push('\n');
                s
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(OutputMode::from_flag(false), OutputMode::Toml);
        assert_eq!(OutputMode::from_flag(true), OutputMode::Raw);
    }

    #[test]
    fn test_render_document_native_roundtrips() {
        let text = "# comment\n[a]\nb = 1\n";
        let doc: toml::DocumentMut = text.parse().unwrap();
        assert_eq!(OutputMode::Toml.render_document(&doc), text);
    }

    #[test]
    fn test_render_document_raw() {
        let doc: toml::DocumentMut = "[a]\nb = \"x y\"\n".parse().unwrap();
        assert_eq!(OutputMode::Raw.render_document(&doc), "a=b='x y'\n");
    }

    #[test]
    fn test_render_value_modes() {
        let doc: toml::DocumentMut = "name = \"crudtoml\"\n".parse().unwrap();
        let parts = vec!["name".to_string()];
        let path = toml::Path::parse(&parts).unwrap();
        let node = toml::read(doc.as_item(), &path).unwrap();
        assert_eq!(OutputMode::Toml.render_value(node), "\"crudtoml\"");
        let node = toml::read(doc.as_item(), &path).unwrap();
        assert_eq!(OutputMode::Raw.render_value(node), "crudtoml\n");
    }
}
