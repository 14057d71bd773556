//! Wrapped-layout export engine.
//!
//! [`LayoutWriter`] drains its staging buffer into an injected sink as
//! fixed-width blocks: one `<label>: <chunk>` line per track in producer
//! order, then a blank line per block.

use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::buffer::TrackBuffer;
use crate::constants::DEFAULT_WRAP;
use crate::source::TabSource;

/// Error type for tablature export.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Writing to the output sink failed.
    #[error("write to tablature buffer failed")]
    Write(#[from] io::Error),
}

/// Stages tablature and exports it as wrapped, labeled text blocks.
///
/// The writer owns its staging buffer outright and composes a
/// [`BufWriter`] over the injected sink; callers only see `stage`,
/// `export`, and a few accessors.
pub struct LayoutWriter<W: Write> {
    sink: BufWriter<W>,
    wrap: usize,
    buffer: TrackBuffer,
}

impl<W: Write> LayoutWriter<W> {
    /// Create a writer over `sink` with the default wrap width.
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self::with_wrap(sink, DEFAULT_WRAP)
    }

    /// Create a writer over `sink` with the given wrap width.
    ///
    /// A width of zero falls back to [`DEFAULT_WRAP`].
    #[must_use]
    pub fn with_wrap(sink: W, wrap: usize) -> Self {
        Self {
            sink: BufWriter::new(sink),
            wrap: normalize_wrap(wrap),
            buffer: TrackBuffer::new(),
        }
    }

    /// Current wrap width.
    #[must_use]
    pub fn wrap(&self) -> usize {
        self.wrap
    }

    /// Change the wrap width for subsequent exports (zero = default).
    pub fn set_wrap(&mut self, wrap: usize) {
        self.wrap = normalize_wrap(wrap);
    }

    /// Number of symbol bytes staged per track.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.buffer.total_len()
    }

    /// Number of blocks the next export will emit.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.buffer.total_len().div_ceil(self.wrap)
    }

    /// Stage the producer's current tablature for a later export.
    ///
    /// May be called repeatedly; snapshots accumulate in call order.
    pub fn stage(&mut self, source: &dyn TabSource) {
        self.buffer.stage(source);
    }

    /// Export the staged tablature to the sink and flush it.
    ///
    /// Tracks shorter than the current window, or listed in the ordering
    /// but never staged, yield short or empty chunks rather than failing.
    /// On a sink failure the export aborts immediately; output already
    /// written stays in place.
    pub fn export(&mut self, source: &dyn TabSource) -> Result<(), LayoutError> {
        let total = self.buffer.total_len();
        debug!(
            total,
            wrap = self.wrap,
            blocks = self.block_count(),
            "exporting tablature"
        );

        let mut done = 0;
        while done < total {
            for &id in source.order() {
                let track = self.buffer.track(id);
                // Prefix slice when the whole content fits in one window;
                // the loop guard keeps `done` at zero whenever this fires.
                let chunk = if total < self.wrap {
                    window(track, 0, total)
                } else if done + self.wrap < total {
                    window(track, done, done + self.wrap)
                } else {
                    window(track, done, total)
                };
                self.sink.write_all(&[id.label(), b':', b' '])?;
                self.sink.write_all(chunk)?;
                self.sink.write_all(b"\n")?;
            }
            self.sink.write_all(b"\n")?;
            done += self.wrap;
        }

        self.sink.flush()?;
        Ok(())
    }
}

/// Slice `[start, end)` of a track, clamped to its actual length.
fn window(track: &[u8], start: usize, end: usize) -> &[u8] {
    &track[start.min(track.len())..end.min(track.len())]
}

fn normalize_wrap(wrap: usize) -> usize {
    if wrap == 0 {
        DEFAULT_WRAP
    } else {
        wrap
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::*;
    use crate::source::StringId;

    struct Stub {
        strings: Vec<(StringId, Vec<u8>)>,
        order: Vec<StringId>,
    }

    impl Stub {
        fn new(entries: &[(u8, &[u8])]) -> Self {
            let strings: Vec<(StringId, Vec<u8>)> = entries
                .iter()
                .map(|&(label, bytes)| (StringId::new(label), bytes.to_vec()))
                .collect();
            let order = strings.iter().map(|(id, _)| *id).collect();
            Self { strings, order }
        }

        fn with_order(mut self, labels: &[u8]) -> Self {
            self.order = labels.iter().copied().map(StringId::new).collect();
            self
        }
    }

    impl TabSource for Stub {
        fn snapshot(&self) -> BTreeMap<StringId, &[u8]> {
            self.strings
                .iter()
                .map(|(id, bytes)| (*id, bytes.as_slice()))
                .collect()
        }

        fn order(&self) -> &[StringId] {
            &self.order
        }
    }

    fn export_to_string(stub: &Stub, wrap: usize) -> String {
        let mut out = Vec::new();
        let mut writer = LayoutWriter::with_wrap(&mut out, wrap);
        writer.stage(stub);
        writer.export(stub).unwrap();
        drop(writer);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn two_tracks_two_blocks() {
        let stub = Stub::new(&[(b'A', b"111222"), (b'B', b"333444")]);
        assert_eq!(
            export_to_string(&stub, 3),
            "A: 111\nB: 333\n\nA: 222\nB: 444\n\n"
        );
    }

    #[test]
    fn total_below_wrap_emits_full_prefix() {
        let stub = Stub::new(&[(b'A', b"11"), (b'B', b"33")]);
        assert_eq!(export_to_string(&stub, 5), "A: 11\nB: 33\n\n");
    }

    #[test]
    fn final_partial_window() {
        let stub = Stub::new(&[(b'A', b"12345")]);
        assert_eq!(export_to_string(&stub, 2), "A: 12\n\nA: 34\n\nA: 5\n\n");
    }

    #[test]
    fn missing_identity_renders_empty_chunks() {
        let stub = Stub::new(&[(b'A', b"1234")]).with_order(b"AX");
        assert_eq!(export_to_string(&stub, 4), "A: 1234\nX: \n\n");
    }

    #[test]
    fn shorter_track_runs_out_cleanly() {
        let stub = Stub::new(&[(b'A', b"123456"), (b'B', b"12")]);
        assert_eq!(
            export_to_string(&stub, 4),
            "A: 1234\nB: 12\n\nA: 56\nB: \n\n"
        );
    }

    #[test]
    fn empty_buffer_exports_nothing() {
        let stub = Stub::new(&[]);
        assert_eq!(export_to_string(&stub, 3), "");
    }

    #[test]
    fn zero_wrap_normalizes_to_default() {
        let writer = LayoutWriter::new(Vec::new());
        assert_eq!(writer.wrap(), DEFAULT_WRAP);

        let mut writer = LayoutWriter::with_wrap(Vec::new(), 0);
        assert_eq!(writer.wrap(), DEFAULT_WRAP);
        writer.set_wrap(7);
        assert_eq!(writer.wrap(), 7);
        writer.set_wrap(0);
        assert_eq!(writer.wrap(), DEFAULT_WRAP);
    }

    #[test]
    fn block_count_tracks_total_and_wrap() {
        let mut writer = LayoutWriter::with_wrap(Vec::new(), 3);
        assert_eq!(writer.block_count(), 0);

        writer.stage(&Stub::new(&[(b'A', b"12")]));
        assert_eq!(writer.block_count(), 1);

        writer.stage(&Stub::new(&[(b'A', b"3456")]));
        assert_eq!(writer.total_len(), 6);
        assert_eq!(writer.block_count(), 2);

        writer.stage(&Stub::new(&[(b'A', b"7")]));
        assert_eq!(writer.block_count(), 3);
    }

    #[derive(Clone, Default)]
    struct Probe(Rc<RefCell<ProbeState>>);

    #[derive(Default)]
    struct ProbeState {
        bytes: Vec<u8>,
        flushed: bool,
    }

    impl Write for Probe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.0.borrow_mut().flushed = true;
            Ok(())
        }
    }

    #[test]
    fn export_flushes_the_sink() {
        let probe = Probe::default();
        let stub = Stub::new(&[(b'A', b"11")]);
        let mut writer = LayoutWriter::with_wrap(probe.clone(), 5);
        writer.stage(&stub);
        writer.export(&stub).unwrap();

        let state = probe.0.borrow();
        assert!(state.flushed);
        assert_eq!(state.bytes, b"A: 11\n\n");
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("sink gone"))
        }
    }

    #[test]
    fn sink_failure_surfaces_as_write_error() {
        let stub = Stub::new(&[(b'A', b"111222")]);
        let mut writer = LayoutWriter::with_wrap(FailingSink, 3);
        writer.stage(&stub);
        let err = writer.export(&stub).unwrap_err();
        assert!(matches!(err, LayoutError::Write(_)));
        assert_eq!(err.to_string(), "write to tablature buffer failed");
    }

    #[test]
    fn window_clamps_to_track_length() {
        assert_eq!(window(b"1234", 0, 2), b"12");
        assert_eq!(window(b"1234", 2, 8), b"34");
        assert_eq!(window(b"1234", 6, 8), b"");
        assert_eq!(window(b"", 0, 3), b"");
    }
}
