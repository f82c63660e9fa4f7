//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.

pub mod fs;

pub use fs::{is_within, normalize_path, resolve_path};
