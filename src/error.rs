//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// Errors produced while parsing or expanding move notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotationError {
    /// No move token could be read at the given byte offset.
    #[error("could not extract a move token at position {position}")]
    TokenExtraction {
        /// Byte offset into the input.
        position: usize,
    },
    /// A closing delimiter had no matching opening delimiter.
    #[error("unexpected group closure at position {position}")]
    UnexpectedGroupClosure {
        /// Byte offset into the input.
        position: usize,
    },
    /// The input ended while groups were still open.
    #[error("unclosed group ({depth} still open)")]
    UnclosedGroup {
        /// How many groups were left open.
        depth: usize,
    },
    /// A whole cube rotation was given a slice count or a wide marker.
    #[error("slices or wide with x, y, z at position {position}")]
    RotationMove {
        /// Byte offset of the offending token.
        position: usize,
    },
    /// A slice count was given without a wide marker.
    #[error("slices without wide move at position {position}")]
    SlicesMove {
        /// Byte offset of the offending token.
        position: usize,
    },
    /// More than one separator appeared directly in one group.
    #[error("multiple separators in one group")]
    MultipleSeparators,
    /// A separator appeared outside of a bracket group.
    #[error("separators not in comm group")]
    SeparatorGroup,
    /// Expanding a group would produce more moves than the expansion limit.
    #[error("expansion exceeds {limit} moves")]
    ExpansionTooLarge {
        /// The largest number of moves a single group may expand to.
        limit: usize,
    },
}

/// Errors produced by the cube engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A wide move asked for more layers than the cube has.
    #[error("slice parameter {slices} is too big for a cube of dimension {dimension}")]
    SliceParam {
        /// Number of layers requested.
        slices: u8,
        /// Dimension of the cube.
        dimension: usize,
    },
}

/// Errors produced when validating a set of face buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FacesError {
    /// Not every face has the same number of stickers.
    #[error("face lengths differ")]
    FaceLengthsDiffer,
    /// The faces are not square.
    #[error("face length {len} not perfect square")]
    FaceNotPerfectSquare {
        /// Number of stickers on each face.
        len: usize,
    },
}

/// Any error the crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`NotationError`].
    #[error(transparent)]
    Notation(#[from] NotationError),
    /// See [`CubeError`].
    #[error(transparent)]
    Cube(#[from] CubeError),
    /// See [`FacesError`].
    #[error(transparent)]
    Faces(#[from] FacesError),
}
