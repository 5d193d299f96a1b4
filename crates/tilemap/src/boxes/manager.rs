//! Box-to-map compilation.
//!
//! A [`BoxManager`] holds an ordered list of [`TileBox`]es and rasterizes them
//! into fresh storage in a single pass:
//!
//! 1. The extent is inferred as one past the largest `end_x` / `end_y`.
//! 2. Storage of that extent is allocated, filled with the default tile.
//! 3. Boxes are written in order, so where boxes overlap the later one wins.
//!    A box whose tile equals the default is skipped unless it overlaps an
//!    earlier non-default box; otherwise its cells already hold that value.
//!
//! The manager is never mutated by compilation and does not own the result.

use tracing::{debug, debug_span, trace};

use crate::config::{CompileConfig, EmptyInputPolicy};
use crate::error::{MapError, Result};
use crate::geometry::MapDimensions;
use crate::grid::{Grid, Palette, PaletteGrid, TileStorage};

use super::TileBox;

/// Ordered collection of boxes that compiles into a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxManager<T> {
    boxes: Vec<TileBox<T>>,
}

impl<T> BoxManager<T> {
    pub fn new(boxes: Vec<TileBox<T>>) -> Self {
        Self { boxes }
    }

    /// Boxes in authoring order.
    pub fn boxes(&self) -> &[TileBox<T>] {
        &self.boxes
    }

    /// Smallest extent covering every box, or `None` with no boxes.
    pub fn extent(&self) -> Option<MapDimensions> {
        self.boxes
            .iter()
            .map(|b| MapDimensions::new(b.end_x() as u32 + 1, b.end_y() as u32 + 1))
            .reduce(MapDimensions::union)
    }

    fn resolve_extent(&self, config: &CompileConfig) -> Result<MapDimensions> {
        match (self.extent(), config.empty_policy) {
            (Some(extent), EmptyInputPolicy::Reject) => Ok(extent),
            (Some(extent), EmptyInputPolicy::MinimumSize(floor)) => Ok(extent.union(floor)),
            (None, EmptyInputPolicy::MinimumSize(floor)) => Ok(floor),
            (None, EmptyInputPolicy::Reject) => Err(MapError::EmptyBoxList),
        }
    }
}

impl<T: Clone + PartialEq> BoxManager<T> {
    /// Compiles the boxes into a dense grid using the default configuration,
    /// which rejects an empty box list.
    pub fn to_grid(&self, default: T) -> Result<Grid<T>> {
        self.to_grid_with(default, &CompileConfig::default())
    }

    pub fn to_grid_with(&self, default: T, config: &CompileConfig) -> Result<Grid<T>> {
        self.compile(&default, config, |extent| {
            Grid::with_dimensions(extent, default.clone())
        })
    }

    /// Compiles the boxes into an index-indirected grid over `palette`, using
    /// the default configuration.
    ///
    /// Every box tile and `default` must appear in the palette.
    pub fn to_palette_grid(&self, palette: Palette<T>, default: T) -> Result<PaletteGrid<T>> {
        self.to_palette_grid_with(palette, default, &CompileConfig::default())
    }

    pub fn to_palette_grid_with(
        &self,
        palette: Palette<T>,
        default: T,
        config: &CompileConfig,
    ) -> Result<PaletteGrid<T>> {
        self.compile(&default, config, |extent| {
            if self.boxes.iter().any(|b| palette.index_of(b.tile()).is_none()) {
                return Err(MapError::TileNotInPalette);
            }
            PaletteGrid::with_dimensions(extent, palette, &default)
        })
    }

    /// Sizes the map, lets `allocate` build default-filled storage of that
    /// extent, then rasterizes every box into it.
    fn compile<S, F>(&self, default: &T, config: &CompileConfig, allocate: F) -> Result<S>
    where
        S: TileStorage<T>,
        F: FnOnce(MapDimensions) -> Result<S>,
    {
        let _span = debug_span!("compile_boxes", boxes = self.boxes.len()).entered();

        let extent = self.resolve_extent(config)?;
        debug!(width = extent.width, height = extent.height, "inferred map extent");

        let mut storage = allocate(extent)?;
        self.rasterize_into(&mut storage, default, config)?;
        Ok(storage)
    }

    /// Writes every box into caller-owned storage, in order.
    ///
    /// Default-tile skipping assumes `storage` starts out filled with
    /// `default`; disable it in `config` for storage that does not.
    /// Bounds are checked for all boxes before anything is written. Errors
    /// raised by the storage itself, such as a tile missing from a palette,
    /// surface at the failing box and leave earlier boxes written.
    pub fn rasterize_into<S>(
        &self,
        storage: &mut S,
        default: &T,
        config: &CompileConfig,
    ) -> Result<()>
    where
        S: TileStorage<T> + ?Sized,
    {
        let dimensions = storage.dimensions();
        if let Some(far) = self
            .boxes
            .iter()
            .map(TileBox::corner_ne)
            .find(|corner| !dimensions.contains(*corner))
        {
            return Err(MapError::out_of_bounds(far, dimensions));
        }

        for (index, tile_box) in self.boxes.iter().enumerate() {
            if self.skips(index, default, config) {
                trace!(index, "box matches default tile, skipped");
                continue;
            }
            storage.fill_box(tile_box)?;
            trace!(
                index,
                end_x = tile_box.end_x(),
                end_y = tile_box.end_y(),
                "box rasterized"
            );
        }
        Ok(())
    }

    /// Whether writing box `index` cannot change a default-filled target.
    fn skips(&self, index: usize, default: &T, config: &CompileConfig) -> bool {
        let tile_box = &self.boxes[index];
        config.skip_default_writes
            && tile_box.tile() == default
            && !self.boxes[..index]
                .iter()
                .any(|earlier| earlier.tile() != default && earlier.overlaps(tile_box))
    }
}

impl<T> From<Vec<TileBox<T>>> for BoxManager<T> {
    fn from(boxes: Vec<TileBox<T>>) -> Self {
        Self::new(boxes)
    }
}
