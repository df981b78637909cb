//! Tile rendering - converts descriptors to pixel grids.
//!
//! [`TileRenderer`] is the seam the viewer renders through. [`ShapeRenderer`]
//! is the built-in implementation for short-key [`ShapeDescriptor`]s: each
//! layer is drawn a little smaller than the one below it, quadrant by
//! quadrant, with a darkened outline.

use crate::error::{Result, ViewerError};
use crate::types::{Colour, ShapeDescriptor, SubShape};

/// A rendered tile - a grid of colours.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedShape {
    /// Label of the rendered content (short key, "shapes", ...).
    pub name: String,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl RenderedShape {
    /// Create a new rendered shape.
    pub fn new(name: impl Into<String>, pixels: Vec<Vec<Colour>>) -> Self {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());

        Self {
            name: name.into(),
            pixels,
            width,
            height,
        }
    }

    /// Create a fully transparent image of the given size.
    pub fn blank(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self::new(name, vec![vec![Colour::TRANSPARENT; width]; height])
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        if let Some(pixel) = self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            *pixel = colour;
        }
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

/// Renders one descriptor into a square tile.
///
/// Any `Fn(&D, u32) -> Result<RenderedShape>` is a renderer.
pub trait TileRenderer<D> {
    fn render(&self, descriptor: &D, tile_size: u32) -> Result<RenderedShape>;
}

impl<F, D> TileRenderer<D> for F
where
    F: Fn(&D, u32) -> Result<RenderedShape>,
{
    fn render(&self, descriptor: &D, tile_size: u32) -> Result<RenderedShape> {
        self(descriptor, tile_size)
    }
}

/// Share of the tile's half-width used by the bottom layer.
const BASE_RADIUS: f32 = 0.82;

/// Radius of the background disc, as a share of the half-width.
const BACKGROUND_RADIUS: f32 = 0.94;

/// Built-in renderer for short-key shapes.
#[derive(Debug, Clone)]
pub struct ShapeRenderer {
    /// How much each layer shrinks relative to the bottom one.
    layer_shrink: f32,

    /// Outline lightness reduction, in percent.
    outline_darken: f32,

    /// Disc drawn behind the shape, if any.
    background: Option<Colour>,
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self {
            layer_shrink: 0.22,
            outline_darken: 40.0,
            background: Some(Colour::new(40, 50, 65, 25)),
        }
    }
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the background disc.
    pub fn with_background(mut self, background: Option<Colour>) -> Self {
        self.background = background;
        self
    }

    /// Render a descriptor into a `tile_size` square.
    pub fn render_shape(&self, shape: &ShapeDescriptor, tile_size: u32) -> Result<RenderedShape> {
        if tile_size == 0 {
            return Err(ViewerError::Render {
                message: "Tile size must be at least 1 pixel".to_string(),
                help: None,
            });
        }

        let size = tile_size as usize;
        let half = tile_size as f32 / 2.0;
        let outline = (tile_size as f32 / 28.0).max(1.0);
        let mut tile = RenderedShape::blank(shape.to_string(), size, size);

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;

                if let Some(bg) = self.background {
                    if dx * dx + dy * dy <= (half * BACKGROUND_RADIUS).powi(2) {
                        tile.set(x, y, bg);
                    }
                }

                let quadrant = quadrant_at(dx, dy);
                let (u, v) = (dx.abs(), dy.abs());

                for (i, layer) in shape.layers().iter().enumerate() {
                    let Some(q) = layer.quadrants[quadrant] else {
                        continue;
                    };

                    let radius = half * BASE_RADIUS * (1.0 - self.layer_shrink * i as f32);
                    if !contains(q.shape, u, v, radius) {
                        continue;
                    }

                    let fill = q.colour.fill();
                    let colour = if contains(q.shape, u, v, radius - outline) {
                        fill
                    } else {
                        fill.darken(self.outline_darken)
                    };
                    tile.set(x, y, colour);
                }
            }
        }

        Ok(tile)
    }
}

impl TileRenderer<ShapeDescriptor> for ShapeRenderer {
    fn render(&self, descriptor: &ShapeDescriptor, tile_size: u32) -> Result<RenderedShape> {
        self.render_shape(descriptor, tile_size)
    }
}

/// Quadrant index (clockwise from top-right) for an offset from the centre.
/// Screen y grows downwards.
fn quadrant_at(dx: f32, dy: f32) -> usize {
    match (dx >= 0.0, dy >= 0.0) {
        (true, false) => 0,
        (true, true) => 1,
        (false, true) => 2,
        (false, false) => 3,
    }
}

/// Whether the point `(u, v)`, folded into the first quadrant, falls inside
/// a sub-shape of the given radius.
fn contains(shape: SubShape, u: f32, v: f32, radius: f32) -> bool {
    if radius <= 0.0 {
        return false;
    }

    let a = u / radius;
    let b = v / radius;
    if a > 1.0 || b > 1.0 {
        return false;
    }

    match shape {
        SubShape::Circle => a * a + b * b <= 1.0,
        SubShape::Rect => true,
        SubShape::Star => a + b <= 1.0 + 0.6 * (1.0 - (a - b).abs()),
        SubShape::Windmill => b <= 0.5 + 0.5 * a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_short_key;
    use crate::types::ShapeColour;

    fn render(key: &str, size: u32) -> RenderedShape {
        let shape = parse_short_key(key).unwrap();
        ShapeRenderer::new()
            .with_background(None)
            .render_shape(&shape, size)
            .unwrap()
    }

    #[test]
    fn test_rendered_shape_get_and_set() {
        let mut tile = RenderedShape::blank("t", 2, 2);
        tile.set(1, 0, Colour::BLACK);
        tile.set(5, 5, Colour::WHITE);

        assert_eq!(tile.get(1, 0), Some(Colour::BLACK));
        assert_eq!(tile.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(tile.get(5, 5), None);
        assert_eq!(tile.to_rgba_buffer().len(), 16);
    }

    #[test]
    fn test_tile_is_square_and_named() {
        let tile = render("CuCuCuCu", 56);
        assert_eq!(tile.width(), 56);
        assert_eq!(tile.height(), 56);
        assert_eq!(tile.name, "CuCuCuCu");
    }

    #[test]
    fn test_quadrants_land_in_the_right_corner() {
        // Only the top-right quadrant is filled
        let tile = render("Rr------", 56);
        let red = ShapeColour::Red.fill();

        // Inside the top-right quadrant, away from the outline
        assert_eq!(tile.get(38, 18), Some(red));
        // Other quadrants stay transparent
        assert_eq!(tile.get(18, 18), Some(Colour::TRANSPARENT));
        assert_eq!(tile.get(38, 38), Some(Colour::TRANSPARENT));
        assert_eq!(tile.get(18, 38), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_corners_outside_circle_are_clear() {
        let tile = render("CuCuCuCu", 56);
        assert_eq!(tile.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(tile.get(27, 27), Some(ShapeColour::Uncolored.fill()));
    }

    #[test]
    fn test_outline_is_darker() {
        let tile = render("RuRuRuRu", 56);
        // Rect edge sits at 28 +/- 28 * 0.82 ~= 5 px from the border
        let edge = tile.get(28, 5).unwrap();
        assert_ne!(edge, ShapeColour::Uncolored.fill());
        assert!(edge.r < ShapeColour::Uncolored.fill().r);
    }

    #[test]
    fn test_upper_layer_drawn_on_top() {
        let tile = render("RuRuRuRu:CbCbCbCb", 56);
        assert_eq!(tile.get(28, 28), Some(ShapeColour::Blue.fill()));
    }

    #[test]
    fn test_background_disc() {
        let shape = parse_short_key("Cu------").unwrap();
        let tile = ShapeRenderer::new().render_shape(&shape, 56).unwrap();

        // Bottom-left quadrant is empty, so the disc shows through
        assert_eq!(tile.get(20, 36), Some(Colour::new(40, 50, 65, 25)));
        assert_eq!(tile.get(0, 55), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_zero_tile_size_is_an_error() {
        let shape = parse_short_key("CuCuCuCu").unwrap();
        assert!(ShapeRenderer::new().render(&shape, 0).is_err());
    }

    #[test]
    fn test_tiny_tiles_render() {
        let tile = render("CuCuCuCu:CuCuCuCu:CuCuCuCu:CuCuCuCu", 3);
        assert_eq!(tile.width(), 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render("SgWy--Cp", 40), render("SgWy--Cp", 40));
    }
}
