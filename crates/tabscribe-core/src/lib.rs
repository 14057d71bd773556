//! # tabscribe-core
//!
//! Core library for the tabscribe tablature composer. Implements the
//! per-string staging buffer and the wrapped, column-aligned text export
//! engine that turns staged symbol streams into labeled tablature blocks.

pub mod buffer;
pub mod constants;
pub mod source;
pub mod writer;

// Re-exports
pub use buffer::TrackBuffer;
pub use constants::{exit_codes, DEFAULT_WRAP};
pub use source::{StringId, TabSource};
pub use writer::{LayoutError, LayoutWriter};

/// Stage a producer's current tablature and export it as a `String`.
///
/// This is a convenience function for simple use cases. For incremental
/// staging across several riffs, or streaming to a file, use
/// [`LayoutWriter`] directly.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
///
/// use tabscribe_core::{render_to_string, StringId, TabSource};
///
/// struct Duo;
///
/// impl TabSource for Duo {
///     fn snapshot(&self) -> BTreeMap<StringId, &[u8]> {
///         let mut strings = BTreeMap::new();
///         strings.insert(StringId::new(b'A'), b"111222".as_slice());
///         strings.insert(StringId::new(b'B'), b"333444".as_slice());
///         strings
///     }
///
///     fn order(&self) -> &[StringId] {
///         const ORDER: [StringId; 2] = [StringId::new(b'A'), StringId::new(b'B')];
///         &ORDER
///     }
/// }
///
/// let tab = render_to_string(&Duo, 3).unwrap();
/// assert_eq!(tab, "A: 111\nB: 333\n\nA: 222\nB: 444\n\n");
/// ```
pub fn render_to_string(source: &dyn TabSource, wrap: usize) -> Result<String, LayoutError> {
    let mut out = Vec::new();
    {
        let mut writer = LayoutWriter::with_wrap(&mut out, wrap);
        writer.stage(source);
        writer.export(source)?;
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}
