//! # tabscribe-instrument
//!
//! Instrument definitions, the live fretboard producer, and the riff
//! notation parser for the tabscribe tablature composer.

pub mod fretboard;
pub mod instrument;
pub mod kind;
pub mod notation;

// Re-exports
pub use fretboard::Fretboard;
pub use instrument::Instrument;
pub use kind::{InstrumentKind, UnknownInstrument};
pub use notation::{parse_line, parse_token, NotationError, Op};
