//! Short-key shape builder.
//!
//! Parses keys like `CuRr----:SbSbSbSb` into [`ShapeDescriptor`]s and applies
//! modifiers to them. This is the default [`ShapeBuilder`] used by the viewer.

use crate::error::{Result, ViewerError};
use crate::types::{Layer, Quadrant, ShapeColour, ShapeDescriptor, SubShape, MAX_LAYERS, QUADRANTS};

use super::instruction::ShapeBuilder;

const LAYER_SEPARATOR: char = ':';
const EMPTY: char = '-';

/// Parse a short key into a descriptor.
pub fn parse_short_key(key: &str) -> Result<ShapeDescriptor> {
    let layers = key
        .split(LAYER_SEPARATOR)
        .map(|layer| parse_layer(key, layer))
        .collect::<Result<Vec<_>>>()?;

    if layers.len() > MAX_LAYERS {
        return Err(ViewerError::Shape {
            message: format!("'{}' has {} layers", key, layers.len()),
            help: Some(format!("Shapes stack at most {} layers", MAX_LAYERS)),
        });
    }

    Ok(ShapeDescriptor::new(layers))
}

fn parse_layer(key: &str, layer: &str) -> Result<Layer> {
    let chars: Vec<char> = layer.chars().collect();
    if chars.len() != QUADRANTS * 2 {
        return Err(ViewerError::Shape {
            message: format!("Invalid shape key '{}': layer '{}' is not 8 characters", key, layer),
            help: Some("Each layer is four shape/colour pairs, e.g. CuCuCuCu".to_string()),
        });
    }

    let mut quadrants = [None; QUADRANTS];
    for (slot, pair) in quadrants.iter_mut().zip(chars.chunks(2)) {
        *slot = parse_quadrant(key, pair[0], pair[1])?;
    }

    let layer = Layer::new(quadrants);
    if layer.is_empty() {
        return Err(ViewerError::Shape {
            message: format!("Invalid shape key '{}': empty layer", key),
            help: None,
        });
    }

    Ok(layer)
}

fn parse_quadrant(key: &str, shape: char, colour: char) -> Result<Option<Quadrant>> {
    if shape == EMPTY {
        if colour != EMPTY {
            return Err(ViewerError::Shape {
                message: format!("Invalid shape key '{}': empty quadrant cannot be coloured", key),
                help: Some("Write empty quadrants as --".to_string()),
            });
        }
        return Ok(None);
    }

    let shape = SubShape::from_code(shape).ok_or_else(|| ViewerError::Shape {
        message: format!("Invalid shape key '{}': unknown sub-shape '{}'", key, shape),
        help: Some("Sub-shapes are C, R, S, W or -".to_string()),
    })?;
    let colour = ShapeColour::from_code(colour).ok_or_else(|| ViewerError::Shape {
        message: format!("Invalid shape key '{}': unknown colour '{}'", key, colour),
        help: Some("Colours are r, g, b, y, p, c, w or u".to_string()),
    })?;

    Ok(Some(Quadrant::new(shape, colour)))
}

/// Builds descriptors from short keys and modifier flags.
///
/// Modifiers apply left to right to everything produced so far:
/// colour names repaint, `cw`/`ccw`/`180` rotate, and `cut` splits each
/// shape into its west and east halves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortKeyBuilder;

impl ShapeBuilder for ShortKeyBuilder {
    type Descriptor = ShapeDescriptor;

    fn build(&self, key: &str, modifiers: &[String]) -> Result<Vec<ShapeDescriptor>> {
        let mut shapes = vec![parse_short_key(key)?];

        for modifier in modifiers {
            shapes = apply_modifier(shapes, modifier)?;
        }

        Ok(shapes)
    }
}

fn apply_modifier(shapes: Vec<ShapeDescriptor>, modifier: &str) -> Result<Vec<ShapeDescriptor>> {
    if let Some(colour) = ShapeColour::from_name(modifier) {
        return Ok(shapes.iter().map(|s| s.painted(colour)).collect());
    }

    let steps = match modifier {
        "cw" => 1,
        "180" => 2,
        "ccw" => 3,
        "cut" => {
            return Ok(shapes
                .iter()
                .flat_map(|s| {
                    let (west, east) = s.cut();
                    west.into_iter().chain(east)
                })
                .collect());
        }
        _ => {
            return Err(ViewerError::Shape {
                message: format!("Unknown modifier '{}'", modifier),
                help: Some("Use a colour name, cw, ccw, 180 or cut".to_string()),
            })
        }
    };

    Ok(shapes.iter().map(|s| s.rotated(steps)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract;
    use pretty_assertions::assert_eq;

    fn build(key: &str, modifiers: &[&str]) -> Result<Vec<String>> {
        let modifiers: Vec<String> = modifiers.iter().map(|m| m.to_string()).collect();
        let shapes = ShortKeyBuilder.build(key, &modifiers)?;
        Ok(shapes.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_parse_single_layer() {
        let shape = parse_short_key("CuRr--Sb").unwrap();

        assert_eq!(shape.layers().len(), 1);
        let quadrants = shape.layers()[0].quadrants;
        assert_eq!(quadrants[0], Some(Quadrant::new(SubShape::Circle, ShapeColour::Uncolored)));
        assert_eq!(quadrants[1], Some(Quadrant::new(SubShape::Rect, ShapeColour::Red)));
        assert_eq!(quadrants[2], None);
        assert_eq!(quadrants[3], Some(Quadrant::new(SubShape::Star, ShapeColour::Blue)));
    }

    #[test]
    fn test_parse_round_trips_display() {
        let key = "CuCuCuCu:RrRr----:--WgWg--:SySySySy";
        assert_eq!(parse_short_key(key).unwrap().to_string(), key);
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert!(parse_short_key("").is_err());
        assert!(parse_short_key("CuCu").is_err());
        assert!(parse_short_key("XuCuCuCu").is_err());
        assert!(parse_short_key("CzCuCuCu").is_err());
        assert!(parse_short_key("-rCuCuCu").is_err());
        assert!(parse_short_key("--------").is_err());
        assert!(parse_short_key("CuCuCuCu:").is_err());
        assert!(parse_short_key("CuCuCuCu:CuCuCuCu:CuCuCuCu:CuCuCuCu:CuCuCuCu").is_err());
    }

    #[test]
    fn test_paint_modifier() {
        assert_eq!(build("CuCu----", &["red"]).unwrap(), vec!["CrCr----"]);
    }

    #[test]
    fn test_rotation_modifiers() {
        assert_eq!(build("Cu------", &["cw"]).unwrap(), vec!["--Cu----"]);
        assert_eq!(build("Cu------", &["ccw"]).unwrap(), vec!["------Cu"]);
        assert_eq!(build("Cu------", &["180"]).unwrap(), vec!["----Cu--"]);
    }

    #[test]
    fn test_cut_expands_to_two_shapes() {
        assert_eq!(
            build("RuRuCuCu", &["cut"]).unwrap(),
            vec!["----CuCu", "RuRu----"]
        );
    }

    #[test]
    fn test_modifiers_apply_to_every_half() {
        assert_eq!(
            build("RuRuCuCu", &["cut", "blue"]).unwrap(),
            vec!["----CbCb", "RbRb----"]
        );
    }

    #[test]
    fn test_cut_may_produce_nothing_for_a_half() {
        assert_eq!(build("Ru------", &["cut"]).unwrap(), vec!["Ru------"]);
    }

    #[test]
    fn test_unknown_modifier() {
        let err = build("CuCuCuCu", &["sparkly"]).unwrap_err();
        assert!(err.to_string().contains("sparkly"));
    }

    #[test]
    fn test_extract_with_short_keys() {
        let shapes = extract("look {CuCuCuCu} and {RuRuRuRu+cut+red}", &ShortKeyBuilder).unwrap();
        let keys: Vec<String> = shapes.iter().map(ToString::to_string).collect();

        assert_eq!(keys, vec!["CuCuCuCu", "----RrRr", "RrRr----"]);
    }
}
