//! Content fetch error types.

use super::DocumentName;
use thiserror::Error;

/// Errors raised by the fetch layer.
///
/// `Fetch` and `Status` both mean the read did not succeed; they are kept
/// apart so callers can tell a missing document (404) from a dead host.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to fetch `{document}`: {reason}")]
    Fetch {
        document: DocumentName,
        reason: String,
    },

    #[error("failed to fetch `{document}`: status {status}")]
    Status { document: DocumentName, status: u16 },

    #[error("failed to decode `{document}`")]
    Decode {
        document: DocumentName,
        #[source]
        source: serde_json::Error,
    },

    #[error("case study `{id}` not found")]
    NotFound { id: String },
}

impl ContentError {
    /// The document a read failed for, if the error came from a read.
    pub fn document(&self) -> Option<DocumentName> {
        match self {
            Self::Fetch { document, .. }
            | Self::Status { document, .. }
            | Self::Decode { document, .. } => Some(*document),
            Self::NotFound { .. } => None,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for non-success reads (transport failure or status).
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Status { .. })
    }
}
