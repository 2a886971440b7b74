//! Error handling for DrawKit
//!
//! Alignment itself never fails: its preconditions are enforced by the
//! enablement gate. These errors cover the fallible edges around it, such as
//! resolving strategy names from user input, looking up figures by id or
//! loading a drawing whose shape ids collide.

use crate::figure::FigureId;
use thiserror::Error;

/// Main error type for DrawKit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An alignment strategy name could not be resolved
    #[error("Unknown alignment strategy: {name}")]
    UnknownStrategy {
        /// The name that was given.
        name: String,
    },

    /// A figure id does not exist in the drawing
    #[error("Unknown shape id: {id}")]
    UnknownShape {
        /// The missing figure id.
        id: FigureId,
    },

    /// Two shapes of a loaded drawing share an id
    #[error("Duplicate shape id: {id}")]
    DuplicateShape {
        /// The repeated figure id.
        id: FigureId,
    },
}

/// Result type alias for DrawKit operations
pub type Result<T> = std::result::Result<T, Error>;
