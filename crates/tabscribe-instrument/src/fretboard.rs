//! Per-string symbol rendering with lock-step column alignment.

use std::collections::BTreeMap;

use tracing::trace;

use tabscribe_core::StringId;

/// Growing per-string symbol lines, kept the same length at all times.
///
/// Every operation appends one column: the sounded strings get their fret
/// digits, everything else gets `-` padding of the same width. Equal line
/// lengths are what let the export engine slice all tracks in lock-step.
#[derive(Debug)]
pub struct Fretboard {
    strings: BTreeMap<StringId, Vec<u8>>,
    order: Vec<StringId>,
}

impl Fretboard {
    /// Create a fretboard with one empty line per identity in `order`.
    #[must_use]
    pub fn new(order: &[StringId]) -> Self {
        Self {
            strings: order.iter().map(|&id| (id, Vec::new())).collect(),
            order: order.to_vec(),
        }
    }

    /// Top-to-bottom string identities.
    #[must_use]
    pub fn order(&self) -> &[StringId] {
        &self.order
    }

    /// Current line length in bytes (equal across all strings).
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.values().next().map_or(0, Vec::len)
    }

    /// True if no columns have been rendered since creation or [`clear`].
    ///
    /// [`clear`]: Fretboard::clear
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render one fret on one string; all other strings get padding.
    pub fn pluck(&mut self, string: StringId, fret: u8) {
        self.chord(&[(string, fret)]);
    }

    /// Render several frets sounded together in one column.
    ///
    /// The column is as wide as the longest fret rendering; shorter frets
    /// and silent strings are padded with `-`, and one `-` separator
    /// column follows on every line. Notes naming a string not on this
    /// fretboard are skipped (callers validate labels via the notation
    /// parser).
    pub fn chord(&mut self, notes: &[(StringId, u8)]) {
        let mut symbols: BTreeMap<StringId, String> = BTreeMap::new();
        for &(string, fret) in notes {
            if self.strings.contains_key(&string) {
                symbols.insert(string, fret.to_string());
            }
        }
        let Some(width) = symbols.values().map(String::len).max() else {
            return;
        };
        trace!(notes = symbols.len(), width, "chord column");

        for (id, line) in &mut self.strings {
            match symbols.get(id) {
                Some(symbol) => {
                    line.extend_from_slice(symbol.as_bytes());
                    line.resize(line.len() + (width - symbol.len()), b'-');
                }
                None => line.resize(line.len() + width, b'-'),
            }
            line.push(b'-');
        }
    }

    /// Render one empty column on every string.
    pub fn rest(&mut self) {
        for line in self.strings.values_mut() {
            line.push(b'-');
        }
    }

    /// Render a bar line on every string.
    pub fn bar(&mut self) {
        for line in self.strings.values_mut() {
            line.push(b'|');
        }
    }

    /// Empty every line, keeping the string set and ordering.
    pub fn clear(&mut self) {
        for line in self.strings.values_mut() {
            line.clear();
        }
    }

    pub(crate) fn lines(&self) -> &BTreeMap<StringId, Vec<u8>> {
        &self.strings
    }
}
