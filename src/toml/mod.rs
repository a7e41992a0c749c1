//! TOML processing module.
//!
//! The style-preserving document tree, tokenizer and serializer come from
//! `toml_edit`; this module layers the path addressing, CRUD policy and
//! output rendering on top of it.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for TOML operations
//! - [`path`]: Path segment classification
//! - [`node`]: Uniform node views over the toml_edit tree
//! - [`resolve`]: Path resolution (strict walk, terminal-mode handling)
//! - [`query`]: The read operation
//! - [`mutation`]: Create, update and delete
//! - [`serialize`]: Output rendering (native and raw modes)

mod error;
mod mutation;
mod node;
mod path;
mod query;
mod resolve;
mod serialize;

pub use error::Error;
pub use mutation::{create, delete, parse_value, update};
pub use node::{NodeMut, NodeRef};
pub use path::{Path, Segment};
pub use query::read;
pub use resolve::{resolve_existing, resolve_insertion, resolve_ref, Location, Place, TerminalMode};
pub use serialize::{render_native, render_raw, render_raw_document};

pub use toml_edit::DocumentMut;

/// Parse a full document, keeping all formatting trivia.
pub fn parse_document(text: &str) -> Result<DocumentMut, Error> {
    text.parse::<DocumentMut>().map_err(Error::from)
}
