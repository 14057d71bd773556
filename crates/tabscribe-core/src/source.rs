//! Track identity and the producer contract.

use std::collections::BTreeMap;
use std::fmt;

/// Identity of one instrument string (one rendered track): a single byte
/// label such as `b'e'` or `b'B'`.
///
/// Labels are defined by the instrument model; the core only requires that
/// they are unique within one ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringId(u8);

impl StringId {
    /// Create an identity from its label byte.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        Self(label)
    }

    /// The raw label byte.
    #[must_use]
    pub const fn label(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

impl From<u8> for StringId {
    fn from(label: u8) -> Self {
        Self(label)
    }
}

/// Producer contract: the instrument/fretboard model as seen by the core.
///
/// Both views are read-only; the core never mutates producer state.
pub trait TabSource {
    /// Snapshot of the currently rendered symbol bytes for every string.
    fn snapshot(&self) -> BTreeMap<StringId, &[u8]>;

    /// Canonical top-to-bottom ordering of the strings.
    ///
    /// Only identities in this ordering are rendered, and they appear in
    /// this vertical order within every exported block.
    fn order(&self) -> &[StringId];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_label_char() {
        assert_eq!(StringId::new(b'e').to_string(), "e");
        assert_eq!(StringId::new(b'G').to_string(), "G");
    }

    #[test]
    fn ordering_follows_byte_value() {
        assert!(StringId::new(b'A') < StringId::new(b'B'));
        assert!(StringId::new(b'B') < StringId::new(b'e'));
    }

    #[test]
    fn from_byte() {
        let id: StringId = b'D'.into();
        assert_eq!(id.label(), b'D');
    }
}
