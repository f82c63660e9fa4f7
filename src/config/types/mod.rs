//! Configuration utility types.
//!
//! | Module  | Purpose                                |
//! |---------|----------------------------------------|
//! | `error` | Configuration error types              |
//! | `path`  | Resolved public/assets/output paths    |

mod error;
mod path;

pub use error::ConfigError;
pub use path::IndexPaths;
