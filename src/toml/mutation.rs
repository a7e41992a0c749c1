//! Mutation operations: create, update and delete.
//!
//! All three are all-or-nothing: the value literal (when there is one) is
//! parsed and the path fully resolved before the tree is touched, so a
//! failure never leaves a half-applied edit behind.

use super::error::Error;
use super::node::NodeMut;
use super::path::Path;
use super::resolve::{self, resolve_existing, resolve_insertion, Location};
use toml_edit::{DocumentMut, Item, Value};

/// Parse a raw TOML value literal.
pub fn parse_value(literal: &str) -> Result<Value, Error> {
    literal
        .parse::<Value>()
        .map_err(|e| Error::InvalidValueSyntax(format!("'{}': {}", literal, e.message())))
}

/// Insert a new value at a path whose terminal segment is absent.
pub fn create(doc: &mut DocumentMut, path: &Path, literal: &str) -> Result<(), Error> {
    let value = parse_value(literal)?;
    let place = resolve_insertion(NodeMut::Item(doc.as_item_mut()), path)?;
    match place.at {
        Location::Key(key) => insert_entry(place.parent, &key, value, &place.label),
        Location::Index(_) => append_element(place.parent, value, &place.label),
    }
}

/// Replace the value at an existing path, keeping its surrounding trivia.
pub fn update(doc: &mut DocumentMut, path: &Path, literal: &str) -> Result<(), Error> {
    let value = parse_value(literal)?;
    let place = resolve_existing(NodeMut::Item(doc.as_item_mut()), path)?;
    match place.at {
        Location::Key(key) => replace_entry(place.parent, &key, value, &place.label),
        Location::Index(i) => replace_element(place.parent, i, value, &place.label),
    }
}

/// Remove the entry at an existing path.
pub fn delete(doc: &mut DocumentMut, path: &Path) -> Result<(), Error> {
    let place = resolve_existing(NodeMut::Item(doc.as_item_mut()), path)?;
    match place.at {
        Location::Key(key) => remove_entry(place.parent, &key, &place.label),
        Location::Index(i) => remove_element(place.parent, i, &place.label),
    }
}

fn insert_entry(parent: NodeMut<'_>, key: &str, value: Value, label: &str) -> Result<(), Error> {
    match parent.into_table_like() {
        Some(t) => {
            t.insert(key, Item::Value(value.decorated(" ", "")));
            Ok(())
        }
        None => Err(resolve::missing_key(key, label)),
    }
}

fn append_element(parent: NodeMut<'_>, value: Value, label: &str) -> Result<(), Error> {
    match parent {
        NodeMut::Item(item) => match item {
            Item::Value(Value::Array(a)) => {
                a.push(value);
                Ok(())
            }
            Item::ArrayOfTables(aot) => match value {
                Value::InlineTable(it) => {
                    aot.push(it.into_table());
                    Ok(())
                }
                _ => Err(non_table_in_aot(label)),
            },
            _ => Err(resolve::bad_index(0, 0, label)),
        },
        NodeMut::Value(Value::Array(a)) => {
            a.push(value);
            Ok(())
        }
        _ => Err(resolve::bad_index(0, 0, label)),
    }
}

fn replace_entry(parent: NodeMut<'_>, key: &str, value: Value, label: &str) -> Result<(), Error> {
    let t = match parent.into_table_like() {
        Some(t) => t,
        None => return Err(resolve::missing_key(key, label)),
    };
    match t.get_mut(key) {
        Some(item) => {
            let replacement = match item.as_value() {
                // Keep the old entry's whitespace and trailing comment.
                Some(old) => {
                    let mut v = value;
                    *v.decor_mut() = old.decor().clone();
                    Item::Value(v)
                }
                None => Item::Value(value.decorated(" ", "")),
            };
            *item = replacement;
            Ok(())
        }
        None => Err(resolve::missing_key(key, label)),
    }
}

fn replace_element(
    parent: NodeMut<'_>,
    idx: usize,
    value: Value,
    label: &str,
) -> Result<(), Error> {
    match parent {
        NodeMut::Item(item) => match item {
            Item::Value(Value::Array(a)) => replace_array_element(a, idx, value, label),
            Item::ArrayOfTables(aot) => match value {
                Value::InlineTable(it) => {
                    let len = aot.len();
                    match aot.get_mut(idx) {
                        Some(old) => {
                            let mut t = it.into_table();
                            *t.decor_mut() = old.decor().clone();
                            *old = t;
                            Ok(())
                        }
                        None => Err(resolve::bad_index(idx, len, label)),
                    }
                }
                _ => Err(non_table_in_aot(label)),
            },
            _ => Err(resolve::bad_index(idx, 0, label)),
        },
        NodeMut::Value(Value::Array(a)) => replace_array_element(a, idx, value, label),
        _ => Err(resolve::bad_index(idx, 0, label)),
    }
}

fn replace_array_element(
    a: &mut toml_edit::Array,
    idx: usize,
    value: Value,
    label: &str,
) -> Result<(), Error> {
    let len = a.len();
    match a.get_mut(idx) {
        Some(slot) => {
            let decor = slot.decor().clone();
            *slot = value;
            *slot.decor_mut() = decor;
            Ok(())
        }
        None => Err(resolve::bad_index(idx, len, label)),
    }
}

fn remove_entry(parent: NodeMut<'_>, key: &str, label: &str) -> Result<(), Error> {
    let t = match parent.into_table_like() {
        Some(t) => t,
        None => return Err(resolve::missing_key(key, label)),
    };
    match t.remove(key) {
        Some(_) => Ok(()),
        None => Err(resolve::missing_key(key, label)),
    }
}

fn remove_element(parent: NodeMut<'_>, idx: usize, label: &str) -> Result<(), Error> {
    match parent {
        NodeMut::Item(item) => match item {
            Item::Value(Value::Array(a)) => {
                if idx < a.len() {
                    a.remove(idx);
                    Ok(())
                } else {
                    Err(resolve::bad_index(idx, a.len(), label))
                }
            }
            Item::ArrayOfTables(aot) => {
                if idx < aot.len() {
                    aot.remove(idx);
                    Ok(())
                } else {
                    Err(resolve::bad_index(idx, aot.len(), label))
                }
            }
            _ => Err(resolve::bad_index(idx, 0, label)),
        },
        NodeMut::Value(Value::Array(a)) => {
            if idx < a.len() {
                a.remove(idx);
                Ok(())
            } else {
                Err(resolve::bad_index(idx, a.len(), label))
            }
        }
        _ => Err(resolve::bad_index(idx, 0, label)),
    }
}

fn non_table_in_aot(label: &str) -> Error {
    Error::TypeMismatch(format!(
        "{} is an array of tables; only an inline table value can go there",
        label
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
