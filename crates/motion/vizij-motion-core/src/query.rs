//! Debug identity for motion-matching queries.
//!
//! The query itself (candidate search) lives outside this crate. Debuggers and
//! visualizers only need a title and a short, fixed-capacity name to label it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DebugNameError;

/// Byte capacity of a [`DebugName`]; matches the payload of a 64-byte fixed string.
pub const DEBUG_NAME_CAPACITY: usize = 61;

/// Short UTF-8 label stored inline (no allocation, `Copy`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DebugName {
    len: u8,
    bytes: [u8; DEBUG_NAME_CAPACITY],
}

impl DebugName {
    pub const EMPTY: DebugName = DebugName {
        len: 0,
        bytes: [0; DEBUG_NAME_CAPACITY],
    };

    /// Copies `s`; fails if it does not fit.
    pub fn new(s: &str) -> Result<Self, DebugNameError> {
        if s.len() > DEBUG_NAME_CAPACITY {
            return Err(DebugNameError::TooLong {
                len: s.len(),
                capacity: DEBUG_NAME_CAPACITY,
            });
        }
        Ok(Self::copy_from(s))
    }

    /// Copies as much of `s` as fits, cutting on a char boundary.
    pub fn truncated(s: &str) -> Self {
        let mut end = s.len().min(DEBUG_NAME_CAPACITY);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        Self::copy_from(&s[..end])
    }

    fn copy_from(s: &str) -> Self {
        let mut bytes = [0u8; DEBUG_NAME_CAPACITY];
        bytes[..s.len()].copy_from_slice(s.as_bytes());
        Self {
            len: s.len() as u8,
            bytes,
        }
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from &str slices cut on char boundaries.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for DebugName {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for DebugName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for DebugName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DebugName {
    type Error = DebugNameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for DebugName {
    type Error = DebugNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<DebugName> for String {
    fn from(name: DebugName) -> Self {
        name.as_str().to_owned()
    }
}

/// Labeling contract for a motion-matching query.
pub trait MotionMatchingQuery {
    /// Human-readable title, e.g. for a debugger window.
    fn debug_title(&self) -> String;

    fn debug_name(&self) -> DebugName;
}

/// `"<title> (<name>)"`, or just the title when the name is empty.
pub fn debug_label(query: &dyn MotionMatchingQuery) -> String {
    let title = query.debug_title();
    let name = query.debug_name();
    if name.is_empty() {
        title
    } else {
        format!("{title} ({name})")
    }
}

/// Plain query label for tools and tests that have no real query object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedQuery {
    pub title: String,
    pub name: DebugName,
}

impl NamedQuery {
    pub fn new(title: impl Into<String>, name: DebugName) -> Self {
        Self {
            title: title.into(),
            name,
        }
    }
}

impl MotionMatchingQuery for NamedQuery {
    fn debug_title(&self) -> String {
        self.title.clone()
    }

    fn debug_name(&self) -> DebugName {
        self.name
    }
}
