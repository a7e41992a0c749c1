//! Path handling for TOML navigation.
//!
//! A path is the ordered list of segments given on the command line, each
//! classified up front as a table key or an array index.

use super::error::Error;
use std::fmt;

/// One step of a path: a table key or an array index.
///
/// Classification is purely syntactic: a segment that parses as a
/// non-negative integer becomes an `Index`, everything else a `Key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "{}", k),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// An ordered, non-empty sequence of segments addressing one node.
#[derive(Debug, Clone)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Classify raw command-line segments into a path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for an empty segment list.
    pub fn parse(parts: &[String]) -> Result<Path, Error> {
        if parts.is_empty() {
            return Err(Error::InvalidPath("empty path".to_string()));
        }
        Ok(Path(parts.iter().map(|p| classify(p)).collect()))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// All segments but the last.
    pub fn parents(&self) -> &[Segment] {
        &self.0[..self.0.len() - 1]
    }

    /// The terminal segment, the only one eligible for create's
    /// insertion semantics.
    pub fn terminal(&self) -> &Segment {
        &self.0[self.0.len() - 1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for seg in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            first = false;
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

fn classify(part: &str) -> Segment {
    // The path grammar is unsigned: "-1" stays a key.
    match part.parse::<usize>() {
        Ok(i) if !part.starts_with('+') => Segment::Index(i),
        _ => Segment::Key(part.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
