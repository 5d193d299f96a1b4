//! Fixed-size 2D tile maps and rectangle-based map authoring.
//!
//! `tilemap` stores a map as a dense grid of tile values ([`Grid`]) or as a
//! grid of indices into a [`Palette`] ([`PaletteGrid`]). Maps can be authored
//! directly through bounds-checked `get`/`set`, or described as an ordered list
//! of [`TileBox`]es and compiled with [`BoxManager`].
//!
//! Tile values are generic and compared by value (`PartialEq`). [`TileType`]
//! and [`TileDef`] are ready-made catalogs.
//!
//! Nothing in this crate synchronizes internally; callers sharing a grid or
//! manager across threads must wrap it in their own lock.
pub mod boxes;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod tiles;

pub use boxes::{BoxManager, TileBox};
pub use config::{CompileConfig, EmptyInputPolicy};
pub use error::{ErrorKind, MapError, Result};
pub use geometry::{MapDimensions, Position};
pub use grid::{Grid, Palette, PaletteGrid, PaletteIndex, TileStorage};
pub use tiles::{TileDef, TileType};
