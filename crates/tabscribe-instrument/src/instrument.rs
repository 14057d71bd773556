//! An instrument: a kind plus its live fretboard.

use std::collections::BTreeMap;

use tabscribe_core::{StringId, TabSource};

use crate::fretboard::Fretboard;
use crate::kind::InstrumentKind;
use crate::notation::Op;

/// A stringed instrument being composed on.
///
/// The fretboard holds the riff currently being rendered; staging copies
/// it into a writer and [`clear`](Instrument::clear) empties it for the
/// next riff.
#[derive(Debug)]
pub struct Instrument {
    kind: InstrumentKind,
    fretboard: Fretboard,
}

impl Instrument {
    /// Create an instrument of the given kind with an empty fretboard.
    #[must_use]
    pub fn new(kind: InstrumentKind) -> Self {
        Self {
            kind,
            fretboard: Fretboard::new(&kind.order()),
        }
    }

    /// The instrument kind.
    #[must_use]
    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    /// The live fretboard.
    #[must_use]
    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    /// Apply parsed notation ops in order.
    pub fn apply(&mut self, ops: &[Op]) {
        for op in ops {
            match op {
                Op::Notes(notes) => self.fretboard.chord(notes),
                Op::Rest => self.fretboard.rest(),
                Op::Bar => self.fretboard.bar(),
            }
        }
    }

    /// Empty the fretboard between staged riffs.
    pub fn clear(&mut self) {
        self.fretboard.clear();
    }
}

impl TabSource for Instrument {
    fn snapshot(&self) -> BTreeMap<StringId, &[u8]> {
        self.fretboard
            .lines()
            .iter()
            .map(|(&id, line)| (id, line.as_slice()))
            .collect()
    }

    fn order(&self) -> &[StringId] {
        self.fretboard.order()
    }
}
