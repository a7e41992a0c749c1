//! Rendering of resolved nodes for output.
//!
//! Two modes, matching the CLI surface: native TOML (the node's own
//! formatting, quotes and all) and raw mode, where scalars are printed by
//! semantic value and shell-quoted, tables become `key=value` lines and
//! arrays one line per element.

use super::node::NodeRef;
use toml_edit::{DocumentMut, Item, Table, Value};

/// Render a node in its native TOML spelling.
///
/// Scalars and inline values come out exactly as written in the source
/// (original quoting and number representation), with the surrounding
/// whitespace trivia trimmed off.
pub fn render_native(node: NodeRef<'_>) -> String {
    match node {
        NodeRef::Value(v) => v.to_string().trim().to_string(),
        NodeRef::Item(Item::Value(v)) => v.to_string().trim().to_string(),
        NodeRef::Item(Item::Table(t)) => table_text(t),
        NodeRef::Table(t) => table_text(t),
        NodeRef::Item(Item::ArrayOfTables(aot)) => {
            let parts: Vec<String> = aot.iter().map(table_text).collect();
            parts.join("\n")
        }
        NodeRef::Item(Item::None) => String::new(),
    }
}

/// Render a table body as its own document.
fn table_text(t: &Table) -> String {
    let mut doc = DocumentMut::new();
    *doc.as_table_mut() = t.clone();
    doc.to_string()
}

/// Render a node in raw (shell-consumable) mode.
pub fn render_raw(node: NodeRef<'_>) -> String {
    if let Some(t) = node.as_table_like() {
        let lines: Vec<String> = t
            .iter()
            .map(|(k, v)| format!("{}={}", shell_quote(k), render_raw(NodeRef::Item(v))))
            .collect();
        return lines.join("\n");
    }
    if let Some(len) = node.array_len() {
        let lines: Vec<String> = (0..len)
            .filter_map(|i| node.get_index(i))
            .map(render_raw)
            .collect();
        return lines.join("\n");
    }
    match node {
        NodeRef::Value(v) | NodeRef::Item(Item::Value(v)) => shell_quote(&scalar_text(v)),
        _ => String::new(),
    }
}

/// Raw-render the whole document.
pub fn render_raw_document(doc: &DocumentMut) -> String {
    render_raw(NodeRef::Item(doc.as_item()))
}

fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.value().clone(),
        Value::Integer(i) => i.value().to_string(),
        Value::Float(f) => f.value().to_string(),
        Value::Boolean(b) => b.value().to_string(),
        Value::Datetime(d) => d.value().to_string(),
        // Containers are handled before this point; fall back to the
        // native spelling.
        Value::Array(_) | Value::InlineTable(_) => v.to_string().trim().to_string(),
    }
}

/// POSIX shell quoting: return the string unchanged when every character is
/// shell-safe, otherwise wrap in single quotes with `'"'"'` escaping.
fn shell_quote(s: &str) -> String {
    fn safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-' | '_')
    }
    if !s.is_empty() && s.chars().all(safe) {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\"'\"'"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
