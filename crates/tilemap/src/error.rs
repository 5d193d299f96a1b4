//! Error infrastructure for tilemap.
//!
//! Every fallible operation in the crate returns [`MapError`]. Variants are
//! grouped into a coarse [`ErrorKind`] so callers can branch on the class of
//! failure without matching every variant.
//!
//! Errors are never logged and swallowed inside the crate; they are always
//! returned to the immediate caller, and a failed operation leaves its target
//! untouched.

use crate::geometry::{MapDimensions, Position};

/// Coarse classification of a [`MapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Geometric or catalog preconditions were violated at construction time.
    ///
    /// Examples: negative box origin, zero-width grid, duplicate palette entry
    InvalidArgument,

    /// A coordinate pair lies outside `[0, width) x [0, height)`.
    OutOfBounds,

    /// Compilation was asked to size a map from an empty box list.
    EmptyInput,
}

impl ErrorKind {
    /// Returns a human-readable description of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::OutOfBounds => "out of bounds",
            Self::EmptyInput => "empty input",
        }
    }
}

/// Errors raised by grids, palettes, boxes and box compilation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// Grid width or height was not positive.
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: i64, height: i64 },

    /// The requested grid area does not fit in memory addressing.
    #[error("grid area {width}x{height} overflows")]
    AreaOverflow { width: u32, height: u32 },

    /// Box origin had a negative coordinate.
    #[error("box origin ({x}, {y}) must not be negative")]
    NegativeOrigin { x: i32, y: i32 },

    /// Box width or height was not positive.
    #[error("box size must be positive (got {width}x{height})")]
    InvalidBoxSize { width: i32, height: i32 },

    /// Coordinate lies outside the grid.
    #[error("position {position:?} is out of bounds (map size: {}x{})", .dimensions.width, .dimensions.height)]
    OutOfBounds {
        position: Position,
        dimensions: MapDimensions,
    },

    /// No boxes were supplied and the compile policy rejects empty input.
    #[error("cannot infer map extent from an empty box list")]
    EmptyBoxList,

    /// A palette must hold at least one tile value.
    #[error("palette must not be empty")]
    EmptyPalette,

    /// A palette entry repeats an earlier one.
    #[error("palette entry {index} duplicates an earlier entry")]
    DuplicatePaletteEntry { index: usize },

    /// The tile value is not part of the grid's palette.
    #[error("tile value is not in the palette")]
    TileNotInPalette,

    /// Raw palette index does not name an entry.
    #[error("palette index {index} is out of range (palette size: {len})")]
    PaletteIndexOutOfRange { index: usize, len: usize },
}

impl MapError {
    pub(crate) fn out_of_bounds(position: Position, dimensions: MapDimensions) -> Self {
        Self::OutOfBounds {
            position,
            dimensions,
        }
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        use MapError::*;
        match self {
            InvalidDimensions { .. }
            | AreaOverflow { .. }
            | NegativeOrigin { .. }
            | InvalidBoxSize { .. }
            | EmptyPalette
            | DuplicatePaletteEntry { .. }
            | TileNotInPalette
            | PaletteIndexOutOfRange { .. } => ErrorKind::InvalidArgument,

            OutOfBounds { .. } => ErrorKind::OutOfBounds,

            EmptyBoxList => ErrorKind::EmptyInput,
        }
    }

    /// Returns a stable string identifier for this error variant.
    pub fn error_code(&self) -> &'static str {
        use MapError::*;
        match self {
            InvalidDimensions { .. } => "MAP_INVALID_DIMENSIONS",
            AreaOverflow { .. } => "MAP_AREA_OVERFLOW",
            NegativeOrigin { .. } => "BOX_NEGATIVE_ORIGIN",
            InvalidBoxSize { .. } => "BOX_INVALID_SIZE",
            OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
            EmptyBoxList => "COMPILE_EMPTY_BOX_LIST",
            EmptyPalette => "PALETTE_EMPTY",
            DuplicatePaletteEntry { .. } => "PALETTE_DUPLICATE_ENTRY",
            TileNotInPalette => "PALETTE_TILE_NOT_FOUND",
            PaletteIndexOutOfRange { .. } => "PALETTE_INDEX_OUT_OF_RANGE",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MapError>;
