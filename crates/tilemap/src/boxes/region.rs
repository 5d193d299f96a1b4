use crate::error::{MapError, Result};
use crate::geometry::Position;

/// An axis-aligned rectangle of tiles sharing one tile value.
///
/// Bounds are inclusive: a box of width 1 occupies the single column
/// `start_x == end_x`. Corners follow compass naming where south is smaller
/// `y` and west is smaller `x`, so the origin is the south-west corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileBox<T> {
    origin: Position,
    end: Position,
    width: i32,
    height: i32,
    tile: T,
}

impl<T> TileBox<T> {
    /// Creates a box covering `width x height` tiles from `(start_x, start_y)`.
    ///
    /// Fails with [`MapError::NegativeOrigin`] or [`MapError::InvalidBoxSize`];
    /// the far corner must also be representable as a [`Position`].
    pub fn new(start_x: i32, start_y: i32, width: i32, height: i32, tile: T) -> Result<Self> {
        if start_x < 0 || start_y < 0 {
            return Err(MapError::NegativeOrigin {
                x: start_x,
                y: start_y,
            });
        }
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidBoxSize { width, height });
        }
        let (Some(end_x), Some(end_y)) = (
            start_x.checked_add(width - 1),
            start_y.checked_add(height - 1),
        ) else {
            return Err(MapError::InvalidBoxSize { width, height });
        };

        Ok(Self {
            origin: Position::new(start_x, start_y),
            end: Position::new(end_x, end_y),
            width,
            height,
            tile,
        })
    }

    /// Creates a box whose origin is `corner`, typically another box's corner.
    pub fn at(corner: impl Into<Position>, width: i32, height: i32, tile: T) -> Result<Self> {
        let corner = corner.into();
        Self::new(corner.x, corner.y, width, height, tile)
    }

    pub fn start_x(&self) -> i32 {
        self.origin.x
    }

    pub fn start_y(&self) -> i32 {
        self.origin.y
    }

    pub fn end_x(&self) -> i32 {
        self.end.x
    }

    pub fn end_y(&self) -> i32 {
        self.end.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile(&self) -> &T {
        &self.tile
    }

    pub fn corner_sw(&self) -> Position {
        self.origin
    }

    pub fn corner_se(&self) -> Position {
        Position::new(self.end.x, self.origin.y)
    }

    pub fn corner_ne(&self) -> Position {
        self.end
    }

    pub fn corner_nw(&self) -> Position {
        Position::new(self.origin.x, self.end.y)
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.origin.x..=self.end.x).contains(&position.x)
            && (self.origin.y..=self.end.y).contains(&position.y)
    }

    /// Whether the two boxes share at least one tile.
    pub fn overlaps<U>(&self, other: &TileBox<U>) -> bool {
        self.origin.x <= other.end.x
            && other.origin.x <= self.end.x
            && self.origin.y <= other.end.y
            && other.origin.y <= self.end.y
    }

    /// Every covered position, row by row from the south-west corner.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.origin.y..=self.end.y)
            .flat_map(move |y| (self.origin.x..=self.end.x).map(move |x| Position::new(x, y)))
    }
}
