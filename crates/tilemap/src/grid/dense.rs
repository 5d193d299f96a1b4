use crate::boxes::TileBox;
use crate::error::{MapError, Result};
use crate::geometry::{MapDimensions, Position};

use super::{TileStorage, checked_extent, filled_cells, offset};

/// A dense 2D grid owning one tile value per coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    dimensions: MapDimensions,
    /// Logically a 2D vector. Row-major ordering.
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a `width x height` grid with every cell set to `default`.
    ///
    /// Fails with [`MapError::InvalidDimensions`] unless both sides are positive,
    /// and with [`MapError::AreaOverflow`] if the cells cannot be allocated.
    pub fn new(width: i32, height: i32, default: T) -> Result<Self> {
        Self::filled(i64::from(width), i64::from(height), default)
    }

    /// Same as [`Grid::new`] for an already-unsigned extent.
    pub fn with_dimensions(dimensions: MapDimensions, default: T) -> Result<Self> {
        Self::filled(
            i64::from(dimensions.width),
            i64::from(dimensions.height),
            default,
        )
    }

    fn filled(width: i64, height: i64, default: T) -> Result<Self> {
        let (dimensions, area) = checked_extent(width, height)?;
        let cells = filled_cells(dimensions, area, default)?;
        Ok(Self { dimensions, cells })
    }

    /// Writes the box's tile into every cell it covers.
    ///
    /// The box must lie entirely inside the grid; otherwise the grid is left
    /// untouched and the offending corner is reported.
    pub fn fill_box(&mut self, tile_box: &TileBox<T>) -> Result<()> {
        let far = tile_box.corner_ne();
        if !self.dimensions.contains(far) {
            return Err(MapError::out_of_bounds(far, self.dimensions));
        }
        let width = self.dimensions.width as usize;
        let (x0, x1) = (tile_box.start_x() as usize, tile_box.end_x() as usize);
        for y in tile_box.start_y() as usize..=tile_box.end_y() as usize {
            let row = y * width;
            for cell in &mut self.cells[row + x0..=row + x1] {
                cell.clone_from(tile_box.tile());
            }
        }
        Ok(())
    }
}

impl<T> Grid<T> {
    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.dimensions.contains(Position::new(x, y))
    }

    pub fn get(&self, x: i32, y: i32) -> Result<&T> {
        let idx = offset(self.dimensions, Position::new(x, y))?;
        Ok(&self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<()> {
        let idx = offset(self.dimensions, Position::new(x, y))?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Iterates every cell in row-major order, south row first.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let width = self.dimensions.width as usize;
        self.cells.iter().enumerate().map(move |(idx, tile)| {
            let position = Position::new((idx % width) as i32, (idx / width) as i32);
            (position, tile)
        })
    }
}

impl<T: Clone> TileStorage<T> for Grid<T> {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Result<T> {
        self.get(position.x, position.y).cloned()
    }

    fn set_tile(&mut self, position: Position, tile: T) -> Result<()> {
        self.set(position.x, position.y, tile)
    }

    fn fill_box(&mut self, tile_box: &TileBox<T>) -> Result<()> {
        Grid::fill_box(self, tile_box)
    }
}
