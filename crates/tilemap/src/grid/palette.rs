//! Index-indirected tile storage.
//!
//! Cells hold a [`PaletteIndex`] rather than the tile itself. Reads resolve
//! the index through the palette; writes resolve the tile back to its index
//! with a linear scan, which is cheap for the handful of terrain kinds a map
//! typically uses.

use crate::error::{MapError, Result};
use crate::geometry::{MapDimensions, Position};

use super::{TileStorage, checked_extent, filled_cells, offset};

/// Position of a tile value inside a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteIndex(pub usize);

/// Ordered catalog of distinct tile values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette<T> {
    entries: Vec<T>,
}

impl<T: PartialEq> Palette<T> {
    /// Fails if `entries` is empty or contains a value twice.
    pub fn new(entries: Vec<T>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MapError::EmptyPalette);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].contains(entry) {
                return Err(MapError::DuplicatePaletteEntry { index });
            }
        }
        Ok(Self { entries })
    }

    pub fn index_of(&self, tile: &T) -> Option<PaletteIndex> {
        self.entries.iter().position(|entry| entry == tile).map(PaletteIndex)
    }
}

impl<T> Palette<T> {
    pub fn get(&self, index: PaletteIndex) -> Option<&T> {
        self.entries.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a palette holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    fn check(&self, index: PaletteIndex) -> Result<()> {
        if index.0 < self.entries.len() {
            Ok(())
        } else {
            Err(MapError::PaletteIndexOutOfRange {
                index: index.0,
                len: self.entries.len(),
            })
        }
    }
}

/// Fixed-size grid of palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteGrid<T> {
    dimensions: MapDimensions,
    palette: Palette<T>,
    /// Row-major, every entry valid for `palette`.
    cells: Vec<PaletteIndex>,
}

impl<T: PartialEq> PaletteGrid<T> {
    /// Creates a grid filled with the palette entry at `default_index`.
    pub fn new(
        width: i32,
        height: i32,
        palette: Palette<T>,
        default_index: PaletteIndex,
    ) -> Result<Self> {
        Self::filled(i64::from(width), i64::from(height), palette, default_index)
    }

    /// Creates a grid filled with `default`, which must be in the palette.
    pub fn with_default(width: i32, height: i32, palette: Palette<T>, default: &T) -> Result<Self> {
        let index = palette.index_of(default).ok_or(MapError::TileNotInPalette)?;
        Self::new(width, height, palette, index)
    }

    pub(crate) fn with_dimensions(
        dimensions: MapDimensions,
        palette: Palette<T>,
        default: &T,
    ) -> Result<Self> {
        let index = palette.index_of(default).ok_or(MapError::TileNotInPalette)?;
        Self::filled(
            i64::from(dimensions.width),
            i64::from(dimensions.height),
            palette,
            index,
        )
    }

    fn filled(
        width: i64,
        height: i64,
        palette: Palette<T>,
        default_index: PaletteIndex,
    ) -> Result<Self> {
        let (dimensions, area) = checked_extent(width, height)?;
        palette.check(default_index)?;
        let cells = filled_cells(dimensions, area, default_index)?;
        Ok(Self {
            dimensions,
            palette,
            cells,
        })
    }

    /// Stores the palette index of `tile`.
    ///
    /// Fails with [`MapError::TileNotInPalette`] if the value is not catalogued.
    pub fn set(&mut self, x: i32, y: i32, tile: &T) -> Result<()> {
        let idx = offset(self.dimensions, Position::new(x, y))?;
        let index = self.palette.index_of(tile).ok_or(MapError::TileNotInPalette)?;
        self.cells[idx] = index;
        Ok(())
    }
}

impl<T> PaletteGrid<T> {
    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn palette(&self) -> &Palette<T> {
        &self.palette
    }

    pub fn get(&self, x: i32, y: i32) -> Result<&T> {
        let index = self.index_at(x, y)?;
        Ok(&self.palette.entries[index.0])
    }

    pub fn index_at(&self, x: i32, y: i32) -> Result<PaletteIndex> {
        let idx = offset(self.dimensions, Position::new(x, y))?;
        Ok(self.cells[idx])
    }

    pub fn set_index(&mut self, x: i32, y: i32, index: PaletteIndex) -> Result<()> {
        let idx = offset(self.dimensions, Position::new(x, y))?;
        self.palette.check(index)?;
        self.cells[idx] = index;
        Ok(())
    }
}

impl<T: Clone + PartialEq> TileStorage<T> for PaletteGrid<T> {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Result<T> {
        self.get(position.x, position.y).cloned()
    }

    fn set_tile(&mut self, position: Position, tile: T) -> Result<()> {
        self.set(position.x, position.y, &tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn terrain() -> Palette<&'static str> {
        Palette::new(vec!["grass", "dirt", "sand"]).unwrap()
    }

    #[test]
    fn palette_rejects_empty_and_duplicates() {
        assert_eq!(
            Palette::<u8>::new(Vec::new()).unwrap_err(),
            MapError::EmptyPalette
        );
        assert_eq!(
            Palette::new(vec!["grass", "sand", "grass"]).unwrap_err(),
            MapError::DuplicatePaletteEntry { index: 2 }
        );
    }

    #[test]
    fn palette_keeps_entry_order() {
        let palette = terrain();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(
            palette.iter().copied().collect::<Vec<_>>(),
            vec!["grass", "dirt", "sand"]
        );
        assert_eq!(palette.index_of(&"sand"), Some(PaletteIndex(2)));
        assert_eq!(palette.get(PaletteIndex(1)), Some(&"dirt"));
        assert_eq!(palette.get(PaletteIndex(3)), None);
    }

    #[test]
    fn grid_exposes_its_palette() {
        let grid = PaletteGrid::with_default(2, 2, terrain(), &"sand").unwrap();
        assert_eq!(grid.palette(), &terrain());
    }

    #[test]
    fn new_reports_oversized_area_instead_of_panicking() {
        let err =
            PaletteGrid::new(i32::MAX, i32::MAX, terrain(), PaletteIndex(0)).unwrap_err();
        assert!(matches!(err, MapError::AreaOverflow { .. }));
    }

    #[test]
    fn new_fills_with_default_index() {
        let grid = PaletteGrid::new(20, 10, terrain(), PaletteIndex(0)).unwrap();
        assert_eq!(grid.dimensions(), MapDimensions::new(20, 10));
        assert_eq!(*grid.get(0, 0).unwrap(), "grass");

        let grid = PaletteGrid::new(20, 10, terrain(), PaletteIndex(2)).unwrap();
        assert_eq!(grid.index_at(19, 9).unwrap(), PaletteIndex(2));
        assert_eq!(*grid.get(19, 9).unwrap(), "sand");
    }

    #[test]
    fn new_rejects_unknown_default() {
        let err = PaletteGrid::new(5, 5, terrain(), PaletteIndex(3)).unwrap_err();
        assert_eq!(err, MapError::PaletteIndexOutOfRange { index: 3, len: 3 });
        let err = PaletteGrid::with_default(5, 5, terrain(), &"lava").unwrap_err();
        assert_eq!(err, MapError::TileNotInPalette);
    }

    #[test]
    fn set_resolves_value_to_index() {
        let mut grid = PaletteGrid::with_default(10, 10, terrain(), &"grass").unwrap();
        grid.set(1, 2, &"dirt").unwrap();
        assert_eq!(*grid.get(0, 0).unwrap(), "grass");
        assert_eq!(*grid.get(1, 2).unwrap(), "dirt");
        assert_eq!(grid.index_at(1, 2).unwrap(), PaletteIndex(1));

        grid.set_index(1, 1, PaletteIndex(2)).unwrap();
        assert_eq!(*grid.get(1, 1).unwrap(), "sand");
    }

    #[test]
    fn failed_set_leaves_cell_unchanged() {
        let mut grid = PaletteGrid::with_default(4, 4, terrain(), &"dirt").unwrap();
        assert_eq!(grid.set(2, 2, &"lava").unwrap_err(), MapError::TileNotInPalette);
        assert!(grid.set_index(2, 2, PaletteIndex(7)).is_err());
        assert_eq!(*grid.get(2, 2).unwrap(), "dirt");
    }

    #[test]
    fn out_of_range_access_fails_both_ways() {
        let mut grid = PaletteGrid::with_default(10, 10, terrain(), &"grass").unwrap();
        for (x, y) in [(-1, -2), (11, 11), (10, 0), (0, 10)] {
            assert_eq!(grid.get(x, y).unwrap_err().kind(), ErrorKind::OutOfBounds);
            assert_eq!(
                grid.set(x, y, &"sand").unwrap_err().kind(),
                ErrorKind::OutOfBounds
            );
        }
    }
}
