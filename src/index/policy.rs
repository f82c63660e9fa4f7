//! What happens when part of the tree cannot be read.

use serde::{Deserialize, Serialize};

use super::IndexError;
use crate::log;

/// Policy for unreadable directories and entries below the assets root.
///
/// The assets root itself is always required; this only governs what is
/// found while descending.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failure. Nothing is written.
    #[default]
    Abort,
    /// Log the failure and keep walking.
    Skip,
}

impl ErrorPolicy {
    /// Apply the policy to a walk failure.
    ///
    /// Returns the error back under `Abort`, swallows it under `Skip`.
    pub fn handle(self, err: IndexError) -> Result<(), IndexError> {
        match self {
            Self::Abort => Err(err),
            Self::Skip => {
                match &err {
                    IndexError::Walk { path, source } => {
                        log!("warning"; "skipping {}: {}", path.display(), source);
                    }
                    other => log!("warning"; "skipping: {}", other),
                }
                Ok(())
            }
        }
    }
}
