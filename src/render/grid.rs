//! Grid compositor.
//!
//! Places equally sized tiles row-major onto one canvas, at most
//! `max_columns` per row. The canvas size depends only on the tile count
//! and tile size, so identical inputs always give identical output.

use serde::Serialize;
use tracing::debug;

use super::RenderedShape;

/// Default column cap.
pub const DEFAULT_MAX_COLUMNS: u32 = 8;

/// Canvas geometry for a number of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub tile_size: u32,
    pub width: u32,
    pub height: u32,
}

impl GridLayout {
    /// Compute the layout for `tile_count` tiles.
    ///
    /// Returns `None` when there is nothing to place, or when the canvas
    /// would not fit in `u32` pixels on either axis.
    pub fn new(tile_count: usize, tile_size: u32, max_columns: u32) -> Option<Self> {
        if tile_count == 0 {
            return None;
        }

        let count = u32::try_from(tile_count).ok()?;
        let columns = count.min(max_columns.max(1));
        let rows = count.div_ceil(columns);

        Some(Self {
            columns,
            rows,
            tile_size,
            width: tile_size.checked_mul(columns)?,
            height: tile_size.checked_mul(rows)?,
        })
    }

    /// Column and row of the tile at `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (index % self.columns, index / self.columns)
    }

    /// Top-left pixel of the tile at `index`.
    pub fn origin(&self, index: usize) -> (u32, u32) {
        let (column, row) = self.cell(index);
        (column * self.tile_size, row * self.tile_size)
    }
}

/// Composites tiles into a single grid image.
#[derive(Debug, Clone, Copy)]
pub struct GridCompositor {
    pub tile_size: u32,
    pub max_columns: u32,
}

impl GridCompositor {
    pub fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }

    pub fn with_max_columns(mut self, max_columns: u32) -> Self {
        self.max_columns = max_columns;
        self
    }

    pub fn layout(&self, tile_count: usize) -> Option<GridLayout> {
        GridLayout::new(tile_count, self.tile_size, self.max_columns)
    }

    /// Draw every tile into its cell, in input order.
    ///
    /// Returns `None` for an empty tile list. Unused cells in the last row
    /// stay transparent.
    pub fn composite(&self, tiles: &[RenderedShape]) -> Option<RenderedShape> {
        let layout = self.layout(tiles.len())?;
        debug!(
            tiles = tiles.len(),
            columns = layout.columns,
            rows = layout.rows,
            "compositing grid"
        );

        let mut canvas = RenderedShape::blank("shapes", layout.width as usize, layout.height as usize);
        for (index, tile) in tiles.iter().enumerate() {
            let (x, y) = layout.origin(index);
            blit(&mut canvas, tile, x as usize, y as usize, layout.tile_size as usize);
        }

        Some(canvas)
    }
}

/// Copy a tile onto the canvas at an offset, clipped to its cell and
/// skipping transparent pixels.
fn blit(canvas: &mut RenderedShape, tile: &RenderedShape, offset_x: usize, offset_y: usize, cell: usize) {
    for sy in 0..tile.height().min(cell) {
        for sx in 0..tile.width().min(cell) {
            if let Some(pixel) = tile.get(sx, sy) {
                if !pixel.is_transparent() {
                    canvas.set(offset_x + sx, offset_y + sy, pixel);
                }
            }
        }
    }
}
