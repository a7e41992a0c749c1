//! Read operation: pure lookup, no tree mutation.

use super::error::Error;
use super::node::NodeRef;
use super::path::Path;
use super::resolve::resolve_ref;
use toml_edit::Item;

/// Resolve `path` and return the addressed node.
pub fn read<'a>(root: &'a Item, path: &Path) -> Result<NodeRef<'a>, Error> {
    resolve_ref(NodeRef::Item(root), path)
}
