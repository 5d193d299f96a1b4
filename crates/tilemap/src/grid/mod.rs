//! Fixed-size tile storage backends.
//!
//! [`Grid`] stores tile values directly; [`PaletteGrid`] stores indices into a
//! [`Palette`] and resolves them on read. Both implement [`TileStorage`], which
//! is the seam box compilation writes through.
pub mod dense;
pub mod palette;

pub use dense::Grid;
pub use palette::{Palette, PaletteGrid, PaletteIndex};

use crate::boxes::TileBox;
use crate::error::{MapError, Result};
use crate::geometry::{MapDimensions, Position};

/// Bounds-checked read/write access to a fixed-size map of tiles.
///
/// Every coordinate in `[0, width) x [0, height)` maps to exactly one value.
/// Reads and writes outside that range fail with
/// [`MapError::OutOfBounds`](crate::MapError::OutOfBounds) and never modify
/// the storage.
pub trait TileStorage<T> {
    fn dimensions(&self) -> MapDimensions;

    /// Returns a copy of the tile at `position`.
    fn tile(&self, position: Position) -> Result<T>;

    fn set_tile(&mut self, position: Position, tile: T) -> Result<()>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Writes the box's tile into every cell it covers.
    ///
    /// The box must lie entirely inside the storage; otherwise nothing is
    /// written and the box's far corner is reported.
    fn fill_box(&mut self, tile_box: &TileBox<T>) -> Result<()>
    where
        T: Clone,
    {
        let far = tile_box.corner_ne();
        let dimensions = self.dimensions();
        if !dimensions.contains(far) {
            return Err(MapError::out_of_bounds(far, dimensions));
        }
        for position in tile_box.positions() {
            self.set_tile(position, tile_box.tile().clone())?;
        }
        Ok(())
    }
}

/// Validates caller-supplied sizes and returns the extent with its tile count.
pub(crate) fn checked_extent(width: i64, height: i64) -> Result<(MapDimensions, usize)> {
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(MapError::InvalidDimensions { width, height });
    };
    if w == 0 || h == 0 {
        return Err(MapError::InvalidDimensions { width, height });
    }
    let dimensions = MapDimensions::new(w, h);
    let area = dimensions.area().ok_or(MapError::AreaOverflow {
        width: w,
        height: h,
    })?;
    Ok((dimensions, area))
}

/// Allocates `area` copies of `value`, failing instead of aborting when the
/// buffer cannot be addressed or reserved.
pub(crate) fn filled_cells<C: Clone>(
    dimensions: MapDimensions,
    area: usize,
    value: C,
) -> Result<Vec<C>> {
    let overflow = MapError::AreaOverflow {
        width: dimensions.width,
        height: dimensions.height,
    };
    match area.checked_mul(size_of::<C>()) {
        Some(bytes) if bytes <= isize::MAX as usize => {}
        _ => return Err(overflow),
    }
    let mut cells = Vec::new();
    cells.try_reserve_exact(area).map_err(|_| overflow)?;
    cells.resize(area, value);
    Ok(cells)
}

/// Row-major offset of an in-bounds position.
pub(crate) fn offset(dimensions: MapDimensions, position: Position) -> Result<usize> {
    if !dimensions.contains(position) {
        return Err(MapError::out_of_bounds(position, dimensions));
    }
    Ok(position.y as usize * dimensions.width as usize + position.x as usize)
}
