//! Configuration section definitions.
//!
//! Each module corresponds to a section in `dashdex.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `index` | `[index]`    | Extension filter, walk error policy  |
//! | `paths` | `[paths]`    | Public root, assets root, output     |

mod index;
mod paths;

pub use index::IndexSectionConfig;
pub use paths::PathsConfig;
