//! Path resolution over the document tree.
//!
//! Intermediate segments are walked strictly: every one must name an
//! existing node (missing intermediate tables are never created). Only the
//! terminal segment is subject to a mode flag: `Existing` for read, update
//! and delete, `Insertion` for create, where an absent key or an index equal
//! to the array length resolves to an insertion point instead of failing.

use super::error::Error;
use super::node::{NodeMut, NodeRef};
use super::path::{Path, Segment};
use log::debug;

const ROOT_LABEL: &str = "the document root";

/// How the terminal segment is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalMode {
    /// Terminal must name an existing node (read, update, delete).
    Existing,
    /// Terminal must be free to materialize (create).
    Insertion,
}

/// Concrete location of the terminal entry inside its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// A table-like member name.
    Key(String),
    /// An array position; under `Insertion` this is always the append
    /// position (index == length).
    Index(usize),
}

/// A resolved terminal: the parent container, the entry location inside it,
/// and the parent's label for error messages.
#[derive(Debug)]
pub struct Place<'a> {
    pub parent: NodeMut<'a>,
    pub at: Location,
    pub label: String,
}

/// Resolve a full path to an existing node, read-only.
pub fn resolve_ref<'a>(root: NodeRef<'a>, path: &Path) -> Result<NodeRef<'a>, Error> {
    let mut current = root;
    let mut label = ROOT_LABEL.to_string();
    for seg in path.segments() {
        current = step_ref(current, seg, &label)?;
        label = format!("'{}'", seg);
    }
    Ok(current)
}

/// Resolve the terminal of `path` for update or delete.
pub fn resolve_existing<'a>(root: NodeMut<'a>, path: &Path) -> Result<Place<'a>, Error> {
    resolve_terminal(root, path, TerminalMode::Existing)
}

/// Resolve the terminal of `path` to an insertion point for create.
pub fn resolve_insertion<'a>(root: NodeMut<'a>, path: &Path) -> Result<Place<'a>, Error> {
    resolve_terminal(root, path, TerminalMode::Insertion)
}

fn resolve_terminal<'a>(
    root: NodeMut<'a>,
    path: &Path,
    mode: TerminalMode,
) -> Result<Place<'a>, Error> {
    let mut parent = root;
    let mut label = ROOT_LABEL.to_string();
    for seg in path.parents() {
        parent = step_mut(parent, seg, &label)?;
        label = format!("'{}'", seg);
    }

    let seg = path.terminal();
    let view = parent.as_ref();
    let kind = view.kind();
    let is_table = view.as_table_like().is_some();
    let arr_len = view.array_len();

    let at = match seg {
        Segment::Key(k) => {
            if is_table {
                locate_key(&parent, k, mode, &label)?
            } else if arr_len.is_some() {
                return Err(key_on_array(k, &label));
            } else {
                return Err(not_collection(seg, kind, &label));
            }
        }
        Segment::Index(i) => {
            if let Some(len) = arr_len {
                debug!("resolving '{}' as an index", i);
                match mode {
                    TerminalMode::Existing => {
                        if *i < len {
                            Location::Index(*i)
                        } else {
                            return Err(bad_index(*i, len, &label));
                        }
                    }
                    TerminalMode::Insertion => {
                        if *i < len {
                            return Err(Error::AlreadyExists(format!(
                                "index {} already exists in {}",
                                i, label
                            )));
                        }
                        if *i == len {
                            Location::Index(*i)
                        } else {
                            return Err(bad_index(*i, len, &label));
                        }
                    }
                }
            } else if is_table {
                // Numeric table keys keep working: the decimal spelling
                // falls back to a key lookup.
                locate_key(&parent, &i.to_string(), mode, &label)?
            } else {
                return Err(not_collection(seg, kind, &label));
            }
        }
    };

    Ok(Place { parent, at, label })
}

fn locate_key(
    parent: &NodeMut<'_>,
    key: &str,
    mode: TerminalMode,
    label: &str,
) -> Result<Location, Error> {
    debug!("resolving '{}' as a key", key);
    let exists = parent.as_ref().has_key(key);
    match mode {
        TerminalMode::Existing if !exists => Err(missing_key(key, label)),
        TerminalMode::Insertion if exists => Err(Error::AlreadyExists(format!(
            "key '{}' already exists in {}",
            key, label
        ))),
        _ => Ok(Location::Key(key.to_string())),
    }
}

fn step_ref<'a>(node: NodeRef<'a>, seg: &Segment, label: &str) -> Result<NodeRef<'a>, Error> {
    match seg {
        Segment::Key(k) => {
            if let Some(t) = node.as_table_like() {
                t.get(k).map(NodeRef::Item).ok_or_else(|| missing_key(k, label))
            } else if node.array_len().is_some() {
                Err(key_on_array(k, label))
            } else {
                Err(not_collection(seg, node.kind(), label))
            }
        }
        Segment::Index(i) => {
            if let Some(len) = node.array_len() {
                debug!("resolving '{}' as an index", i);
                node.get_index(*i).ok_or_else(|| bad_index(*i, len, label))
            } else if node.as_table_like().is_some() {
                let key = i.to_string();
                debug!("resolving '{}' as a key", key);
                node.get_key(&key).ok_or_else(|| missing_key(&key, label))
            } else {
                Err(not_collection(seg, node.kind(), label))
            }
        }
    }
}

fn step_mut<'a>(node: NodeMut<'a>, seg: &Segment, label: &str) -> Result<NodeMut<'a>, Error> {
    let view = node.as_ref();
    let kind = view.kind();
    let is_table = view.as_table_like().is_some();
    let arr_len = view.array_len();
    match seg {
        Segment::Key(k) => {
            if is_table {
                node.into_key(k).ok_or_else(|| missing_key(k, label))
            } else if arr_len.is_some() {
                Err(key_on_array(k, label))
            } else {
                Err(not_collection(seg, kind, label))
            }
        }
        Segment::Index(i) => {
            if let Some(len) = arr_len {
                debug!("resolving '{}' as an index", i);
                node.into_index(*i).ok_or_else(|| bad_index(*i, len, label))
            } else if is_table {
                let key = i.to_string();
                debug!("resolving '{}' as a key", key);
                node.into_key(&key).ok_or_else(|| missing_key(&key, label))
            } else {
                Err(not_collection(seg, kind, label))
            }
        }
    }
}

pub(super) fn missing_key(key: &str, label: &str) -> Error {
    Error::PathNotFound(format!("cannot find '{}' in {}", key, label))
}

pub(super) fn bad_index(idx: usize, len: usize, label: &str) -> Error {
    Error::PathNotFound(format!(
        "'{}' is not a valid index into {} (length {})",
        idx, label, len
    ))
}

fn key_on_array(key: &str, label: &str) -> Error {
    Error::TypeMismatch(format!(
        "cannot interpret '{}' as an integer index into {}",
        key, label
    ))
}

fn not_collection(seg: &Segment, kind: &str, label: &str) -> Error {
    Error::TypeMismatch(format!(
        "cannot access '{}' in {} as it is a {}, not a collection",
        seg, label, kind
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
