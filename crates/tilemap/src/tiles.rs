//! Tile catalogs.
//!
//! Grids are generic over the tile value, so any `Clone + PartialEq` type can
//! classify terrain. Two ready-made catalogs are provided:
//!
//! - [`TileType`]: a plain enumeration of terrain kinds
//! - [`TileDef`]: an object-style descriptor carrying per-kind data
//!
//! A third representation, index into a [`Palette`](crate::Palette), is
//! handled by [`PaletteGrid`](crate::PaletteGrid) and works with either
//! catalog.
//!
//! Tiles are always compared by value. Two `TileDef`s with the same name and
//! move cost are the same tile, wherever they were constructed.

/// Terrain kinds as enumeration tags.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileType {
    #[default]
    Dirt,
    Grass,
    Water,
    Sand,
}

/// Object-style tile descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileDef {
    pub name: &'static str,
    /// Energy spent to enter a tile of this kind.
    pub move_cost: u32,
}

impl TileDef {
    pub const DEFAULT_MOVE_COST: u32 = 5;

    pub const DIRT: Self = Self::new("dirt");
    pub const SAND: Self = Self::new("sand").with_move_cost(7);
    pub const WATER: Self = Self::new("water").with_move_cost(15);

    /// Creates a descriptor with [`DEFAULT_MOVE_COST`](Self::DEFAULT_MOVE_COST).
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            move_cost: Self::DEFAULT_MOVE_COST,
        }
    }

    #[must_use]
    pub const fn with_move_cost(mut self, move_cost: u32) -> Self {
        self.move_cost = move_cost;
        self
    }
}
