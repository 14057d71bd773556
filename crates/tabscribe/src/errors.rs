//! Error handling and exit codes.

use tabscribe_core::{exit_codes, LayoutError};
use tabscribe_instrument::{NotationError, UnknownInstrument};

/// Map a failed run to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UnknownInstrument>().is_some() {
        exit_codes::ERROR_CONFIG
    } else if err.downcast_ref::<NotationError>().is_some() {
        exit_codes::ERROR_NOTATION
    } else if err.downcast_ref::<LayoutError>().is_some()
        || err.downcast_ref::<std::io::Error>().is_some()
    {
        exit_codes::ERROR_IO
    } else {
        exit_codes::ERROR_GENERIC
    }
}
