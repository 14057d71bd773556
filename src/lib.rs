//! Workspace-level integration tests for the tabscribe crates.
//!
//! The tests live in `tests/`; this library target is intentionally empty.
