//! Instrument definitions: string labels and tunings.

use std::fmt;
use std::str::FromStr;

use tabscribe_core::StringId;

/// A supported instrument and its string layout.
///
/// Labels are single bytes, listed top-to-bottom as they appear in the
/// rendered tablature, and must be unique per instrument. Where a standard
/// tuning repeats a letter, case carries the distinction (the seven-string
/// high B course is `b`, the banjo drone is `g`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    /// Six-string guitar, standard tuning.
    Guitar,
    /// Seven-string guitar with a low B.
    SevenString,
    /// Four-string bass guitar.
    Bass,
    /// Soprano ukulele, reentrant tuning.
    Ukulele,
    /// Mandolin in fifths.
    Mandolin,
    /// Five-string banjo, open G.
    Banjo,
}

impl InstrumentKind {
    /// Every supported instrument, in `--list` order.
    pub const ALL: [InstrumentKind; 6] = [
        InstrumentKind::Guitar,
        InstrumentKind::SevenString,
        InstrumentKind::Bass,
        InstrumentKind::Ukulele,
        InstrumentKind::Mandolin,
        InstrumentKind::Banjo,
    ];

    /// Top-to-bottom string labels as displayed in the tablature.
    #[must_use]
    pub fn labels(self) -> &'static [u8] {
        match self {
            Self::Guitar => b"eBGDAE",
            Self::SevenString => b"ebGDAEB",
            Self::Bass => b"GDAE",
            Self::Ukulele => b"AECG",
            Self::Mandolin => b"EADG",
            Self::Banjo => b"dBGDg",
        }
    }

    /// Name used in CLI flags and summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Guitar => "guitar",
            Self::SevenString => "seven-string",
            Self::Bass => "bass",
            Self::Ukulele => "ukulele",
            Self::Mandolin => "mandolin",
            Self::Banjo => "banjo",
        }
    }

    /// Tuning shown by `--list`, top string first.
    #[must_use]
    pub fn tuning(self) -> String {
        let mut tuning = String::new();
        for (i, &label) in self.labels().iter().enumerate() {
            if i > 0 {
                tuning.push(' ');
            }
            tuning.push(label as char);
        }
        tuning
    }

    /// String identities in display order.
    #[must_use]
    pub fn order(self) -> Vec<StringId> {
        self.labels().iter().copied().map(StringId::new).collect()
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an instrument name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown instrument: {0}")]
pub struct UnknownInstrument(pub String);

impl FromStr for InstrumentKind {
    type Err = UnknownInstrument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guitar" => Ok(Self::Guitar),
            "seven-string" | "seven" | "7-string" => Ok(Self::SevenString),
            "bass" => Ok(Self::Bass),
            "ukulele" | "uke" => Ok(Self::Ukulele),
            "mandolin" => Ok(Self::Mandolin),
            "banjo" => Ok(Self::Banjo),
            other => Err(UnknownInstrument(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn labels_unique_per_instrument() {
        for kind in InstrumentKind::ALL {
            let unique: HashSet<u8> = kind.labels().iter().copied().collect();
            assert_eq!(
                unique.len(),
                kind.labels().len(),
                "{} has duplicate labels",
                kind
            );
        }
    }

    #[test]
    fn names_parse_back() {
        for kind in InstrumentKind::ALL {
            assert_eq!(kind.name().parse::<InstrumentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!("uke".parse::<InstrumentKind>().unwrap(), InstrumentKind::Ukulele);
        assert_eq!("seven".parse::<InstrumentKind>().unwrap(), InstrumentKind::SevenString);
        assert_eq!("GUITAR".parse::<InstrumentKind>().unwrap(), InstrumentKind::Guitar);
    }

    #[test]
    fn unknown_instrument_error() {
        let err = "theremin".parse::<InstrumentKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown instrument: theremin");
    }

    #[test]
    fn guitar_tuning_display() {
        assert_eq!(InstrumentKind::Guitar.tuning(), "e B G D A E");
    }

    #[test]
    fn order_matches_labels() {
        let order = InstrumentKind::Bass.order();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0].label(), b'G');
        assert_eq!(order[3].label(), b'E');
    }
}
