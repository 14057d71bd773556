//! Staging store: per-track accumulated symbol bytes.

use std::collections::HashMap;

use tracing::debug;

use crate::source::{StringId, TabSource};

/// Accumulates each track's rendered symbol bytes between exports.
///
/// Owned exclusively by the [`LayoutWriter`](crate::LayoutWriter) that
/// created it. Staging only appends; there is no truncation or reset — a
/// new document means a new writer.
#[derive(Debug, Default)]
pub struct TrackBuffer {
    tracks: HashMap<StringId, Vec<u8>>,
    total: usize,
}

impl TrackBuffer {
    /// Create an empty staging buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the producer's current snapshot onto the staged tracks,
    /// creating tracks on first sight.
    ///
    /// The recorded total length rises to the longest post-append track,
    /// so unequal track lengths never depend on snapshot iteration order.
    /// An empty snapshot is a no-op.
    pub fn stage(&mut self, source: &dyn TabSource) {
        for (id, bytes) in source.snapshot() {
            let track = self.tracks.entry(id).or_default();
            track.extend_from_slice(bytes);
            self.total = self.total.max(track.len());
        }
        debug!(
            tracks = self.tracks.len(),
            total = self.total,
            "staged snapshot"
        );
    }

    /// Staged bytes for one track; empty for an identity never staged.
    #[must_use]
    pub fn track(&self, id: StringId) -> &[u8] {
        self.tracks.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Number of symbol bytes to render per track.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.total
    }

    /// Number of distinct tracks staged so far.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// True if nothing has been staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
