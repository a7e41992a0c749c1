//! Uniform node views over the toml_edit tree.
//!
//! toml_edit stores children behind three different carriers: a table maps
//! keys to `Item`, a value array holds `Value`, and an array of tables holds
//! `Table`. `NodeRef`/`NodeMut` fold these into one navigable node type so
//! the resolver can walk the tree without caring which carrier it is in.

use toml_edit::{Item, Table, TableLike, Value};

/// Shared view of one document node.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    Item(&'a Item),
    Value(&'a Value),
    Table(&'a Table),
}

/// Mutable view of one document node.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Item(&'a mut Item),
    Value(&'a mut Value),
    Table(&'a mut Table),
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::InlineTable(_) => "table",
    }
}

impl<'a> NodeRef<'a> {
    /// Human-readable node kind, for error messages.
    pub fn kind(self) -> &'static str {
        match self {
            NodeRef::Item(Item::None) => "none",
            NodeRef::Item(Item::Table(_)) | NodeRef::Table(_) => "table",
            NodeRef::Item(Item::ArrayOfTables(_)) => "array",
            NodeRef::Item(Item::Value(v)) | NodeRef::Value(v) => value_kind(v),
        }
    }

    /// View as a table-like container (table or inline table).
    pub fn as_table_like(self) -> Option<&'a dyn TableLike> {
        match self {
            NodeRef::Item(item) => item.as_table_like(),
            NodeRef::Value(Value::InlineTable(t)) => Some(t),
            NodeRef::Value(_) => None,
            NodeRef::Table(t) => Some(t),
        }
    }

    /// Length of the array at this node, if it is one.
    pub fn array_len(self) -> Option<usize> {
        match self {
            NodeRef::Item(Item::Value(Value::Array(a))) | NodeRef::Value(Value::Array(a)) => {
                Some(a.len())
            }
            NodeRef::Item(Item::ArrayOfTables(a)) => Some(a.len()),
            _ => None,
        }
    }

    pub fn has_key(self, key: &str) -> bool {
        self.as_table_like().is_some_and(|t| t.contains_key(key))
    }

    pub fn get_key(self, key: &str) -> Option<NodeRef<'a>> {
        self.as_table_like().and_then(|t| t.get(key)).map(NodeRef::Item)
    }

    pub fn get_index(self, idx: usize) -> Option<NodeRef<'a>> {
        match self {
            NodeRef::Item(Item::Value(Value::Array(a))) | NodeRef::Value(Value::Array(a)) => {
                a.get(idx).map(NodeRef::Value)
            }
            NodeRef::Item(Item::ArrayOfTables(a)) => a.get(idx).map(NodeRef::Table),
            _ => None,
        }
    }
}

impl<'a> NodeMut<'a> {
    /// Reborrow as a shared view, for checks that precede mutation.
    pub fn as_ref(&self) -> NodeRef<'_> {
        match self {
            NodeMut::Item(i) => NodeRef::Item(&**i),
            NodeMut::Value(v) => NodeRef::Value(&**v),
            NodeMut::Table(t) => NodeRef::Table(&**t),
        }
    }

    /// Consume into a mutable table-like container view.
    pub fn into_table_like(self) -> Option<&'a mut dyn TableLike> {
        match self {
            NodeMut::Item(item) => item.as_table_like_mut(),
            NodeMut::Value(v) => match v {
                Value::InlineTable(t) => Some(t),
                _ => None,
            },
            NodeMut::Table(t) => Some(t),
        }
    }

    /// Descend into the child at `key`.
    pub fn into_key(self, key: &str) -> Option<NodeMut<'a>> {
        self.into_table_like()
            .and_then(|t| t.get_mut(key))
            .map(NodeMut::Item)
    }

    /// Descend into the array element at `idx`.
    pub fn into_index(self, idx: usize) -> Option<NodeMut<'a>> {
        match self {
            NodeMut::Item(item) => match item {
                Item::Value(v) => value_into_index(v, idx),
                Item::ArrayOfTables(a) => a.get_mut(idx).map(NodeMut::Table),
                _ => None,
            },
            NodeMut::Value(v) => value_into_index(v, idx),
            NodeMut::Table(_) => None,
        }
    }
}

fn value_into_index(v: &mut Value, idx: usize) -> Option<NodeMut<'_>> {
    match v {
        Value::Array(a) => a.get_mut(idx).map(NodeMut::Value),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use toml_edit::DocumentMut;

    fn doc(text: &str) -> DocumentMut {
        text.parse().expect("valid TOML")
    }

    #[test]
    fn test_kind_names() {
        let d = doc("a = 1\nb = \"x\"\nc = [1]\nd = { e = 2 }\n[t]\n");
        let root = NodeRef::Item(d.as_item());
        assert_eq!(root.kind(), "table");
        assert_eq!(root.get_key("a").unwrap().kind(), "integer");
        assert_eq!(root.get_key("b").unwrap().kind(), "string");
        assert_eq!(root.get_key("c").unwrap().kind(), "array");
        assert_eq!(root.get_key("d").unwrap().kind(), "table");
        assert_eq!(root.get_key("t").unwrap().kind(), "table");
    }

    #[test]
    fn test_array_len_spans_both_array_kinds() {
        let d = doc("a = [1, 2, 3]\n[[s]]\nx = 1\n[[s]]\nx = 2\n");
        let root = NodeRef::Item(d.as_item());
        assert_eq!(root.get_key("a").unwrap().array_len(), Some(3));
        assert_eq!(root.get_key("s").unwrap().array_len(), Some(2));
        assert_eq!(root.array_len(), None);
    }

    #[test]
    fn test_get_index_into_array_of_tables() {
        let d = doc("[[s]]\nx = 1\n[[s]]\nx = 2\n");
        let root = NodeRef::Item(d.as_item());
        let second = root.get_key("s").unwrap().get_index(1).unwrap();
        assert!(second.has_key("x"));
        assert!(root.get_key("s").unwrap().get_index(2).is_none());
    }

    #[test]
    fn test_inline_table_is_table_like() {
        let d = doc("d = { e = 2 }\n");
        let root = NodeRef::Item(d.as_item());
        let inline = root.get_key("d").unwrap();
        assert!(inline.has_key("e"));
        assert_eq!(inline.get_key("e").unwrap().kind(), "integer");
    }

    #[test]
    fn test_scalar_is_not_a_container() {
        let d = doc("a = 1\n");
        let root = NodeRef::Item(d.as_item());
        let scalar = root.get_key("a").unwrap();
        assert!(scalar.as_table_like().is_none());
        assert_eq!(scalar.array_len(), None);
        assert!(scalar.get_key("x").is_none());
        assert!(scalar.get_index(0).is_none());
    }
}
