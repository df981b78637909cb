//! Shape descriptors produced by the built-in short-key builder.
//!
//! A shape is a stack of up to four layers. Each layer has four quadrants,
//! ordered clockwise from the top-right: top-right, bottom-right,
//! bottom-left, top-left. A quadrant is either empty or holds a sub-shape
//! painted in one colour.
//!
//! # Short key
//!
//! ```text
//! CuCuCuCu            one layer, four uncolored circle quadrants
//! RrRr----:SbSbSbSb   red rectangle east half, blue star layer on top
//! ```

use std::fmt;

use super::Colour;

/// Number of quadrants per layer.
pub const QUADRANTS: usize = 4;

/// Most layers a shape can stack.
pub const MAX_LAYERS: usize = 4;

/// Quadrant indices making up the east half (top-right, bottom-right).
const EAST: [usize; 2] = [0, 1];

/// Quadrant indices making up the west half (bottom-left, top-left).
const WEST: [usize; 2] = [2, 3];

/// The outline drawn in one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubShape {
    Circle,
    Rect,
    Star,
    Windmill,
}

impl SubShape {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Self::Circle),
            'R' => Some(Self::Rect),
            'S' => Some(Self::Star),
            'W' => Some(Self::Windmill),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Circle => 'C',
            Self::Rect => 'R',
            Self::Star => 'S',
            Self::Windmill => 'W',
        }
    }
}

/// Paint colour of a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeColour {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
    White,
    Uncolored,
}

impl ShapeColour {
    pub const ALL: [ShapeColour; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Cyan,
        Self::White,
        Self::Uncolored,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Look up a colour by its modifier name (`red`, `uncolored`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn code(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::Purple => 'p',
            Self::Cyan => 'c',
            Self::White => 'w',
            Self::Uncolored => 'u',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Uncolored => "uncolored",
        }
    }

    /// Fill colour used when rasterizing.
    pub fn fill(self) -> Colour {
        match self {
            Self::Red => Colour::rgb(0xff, 0x66, 0x6a),
            Self::Green => Colour::rgb(0x78, 0xff, 0x66),
            Self::Blue => Colour::rgb(0x66, 0xa7, 0xff),
            Self::Yellow => Colour::rgb(0xfc, 0xf5, 0x2a),
            Self::Purple => Colour::rgb(0xdd, 0x66, 0xff),
            Self::Cyan => Colour::rgb(0x00, 0xfc, 0xff),
            Self::White => Colour::WHITE,
            Self::Uncolored => Colour::rgb(0xaa, 0xaa, 0xaa),
        }
    }
}

/// A filled quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadrant {
    pub shape: SubShape,
    pub colour: ShapeColour,
}

impl Quadrant {
    pub fn new(shape: SubShape, colour: ShapeColour) -> Self {
        Self { shape, colour }
    }
}

/// One layer: four optional quadrants, clockwise from top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer {
    pub quadrants: [Option<Quadrant>; QUADRANTS],
}

impl Layer {
    pub fn new(quadrants: [Option<Quadrant>; QUADRANTS]) -> Self {
        Self { quadrants }
    }

    pub fn is_empty(&self) -> bool {
        self.quadrants.iter().all(Option::is_none)
    }

    /// Rotate clockwise by `steps` quarter turns.
    fn rotated(&self, steps: usize) -> Self {
        let mut quadrants = [None; QUADRANTS];
        for (i, quadrant) in self.quadrants.iter().enumerate() {
            quadrants[(i + steps) % QUADRANTS] = *quadrant;
        }
        Self { quadrants }
    }

    /// Keep only the given quadrant indices.
    fn keep(&self, indices: &[usize]) -> Self {
        let mut quadrants = [None; QUADRANTS];
        for &i in indices {
            quadrants[i] = self.quadrants[i];
        }
        Self { quadrants }
    }
}

/// A renderable shape: layers listed bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeDescriptor {
    layers: Vec<Layer>,
}

impl ShapeDescriptor {
    /// Create a descriptor. Callers guarantee 1..=MAX_LAYERS non-empty layers.
    pub(crate) fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Paint every filled quadrant.
    pub fn painted(&self, colour: ShapeColour) -> Self {
        let layers = self
            .layers
            .iter()
            .map(|layer| {
                let mut layer = *layer;
                for quadrant in layer.quadrants.iter_mut().flatten() {
                    quadrant.colour = colour;
                }
                layer
            })
            .collect();
        Self { layers }
    }

    /// Rotate every layer clockwise by `steps` quarter turns.
    pub fn rotated(&self, steps: usize) -> Self {
        Self {
            layers: self.layers.iter().map(|l| l.rotated(steps)).collect(),
        }
    }

    /// Split into (west, east) halves. A half with nothing left is `None`.
    pub fn cut(&self) -> (Option<Self>, Option<Self>) {
        (self.half(&WEST), self.half(&EAST))
    }

    fn half(&self, indices: &[usize]) -> Option<Self> {
        let layers: Vec<Layer> = self
            .layers
            .iter()
            .map(|l| l.keep(indices))
            .filter(|l| !l.is_empty())
            .collect();

        if layers.is_empty() {
            None
        } else {
            Some(Self { layers })
        }
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            for quadrant in &layer.quadrants {
                match quadrant {
                    Some(q) => write!(f, "{}{}", q.shape.code(), q.colour.code())?,
                    None => write!(f, "--")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(colour: ShapeColour) -> Option<Quadrant> {
        Some(Quadrant::new(SubShape::Circle, colour))
    }

    fn sample() -> ShapeDescriptor {
        let rect = Some(Quadrant::new(SubShape::Rect, ShapeColour::Red));
        ShapeDescriptor::new(vec![Layer::new([
            rect,
            None,
            circle(ShapeColour::Blue),
            None,
        ])])
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Rr--Cb--");
    }

    #[test]
    fn test_rotated_clockwise() {
        assert_eq!(sample().rotated(1).to_string(), "--Rr--Cb");
        assert_eq!(sample().rotated(3).to_string(), "--Cb--Rr");
        assert_eq!(sample().rotated(4), sample());
    }

    #[test]
    fn test_painted() {
        assert_eq!(sample().painted(ShapeColour::Green).to_string(), "Rg--Cg--");
    }

    #[test]
    fn test_cut_halves() {
        let (west, east) = sample().cut();
        assert_eq!(west.unwrap().to_string(), "----Cb--");
        assert_eq!(east.unwrap().to_string(), "Rr------");
    }

    #[test]
    fn test_cut_drops_empty_layers_and_halves() {
        let shape = ShapeDescriptor::new(vec![
            Layer::new([circle(ShapeColour::Red), None, None, None]),
            Layer::new([None, None, circle(ShapeColour::White), None]),
        ]);
        let (west, east) = shape.cut();

        assert_eq!(west.unwrap().to_string(), "----Cw--");
        assert_eq!(east.unwrap().to_string(), "Cr------");

        let east_only = ShapeDescriptor::new(vec![Layer::new([
            circle(ShapeColour::Red),
            None,
            None,
            None,
        ])]);
        assert!(east_only.cut().0.is_none());
    }

    #[test]
    fn test_colour_lookup() {
        assert_eq!(ShapeColour::from_code('p'), Some(ShapeColour::Purple));
        assert_eq!(ShapeColour::from_name("uncolored"), Some(ShapeColour::Uncolored));
        assert_eq!(ShapeColour::from_name("magenta"), None);
        assert_eq!(SubShape::from_code('W'), Some(SubShape::Windmill));
        assert_eq!(SubShape::from_code('-'), None);
    }
}
