use kryon_style::{expand_shorthand, parse_color, Color, Sides, StyleError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_opaque_hex_round_trip(r: u8, g: u8, b: u8) {
        let color = Color::rgb(r, g, b);
        let text = color.to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert_eq!(parse_color(&text).unwrap(), color);
        prop_assert_eq!(parse_color(&text.to_uppercase()).unwrap(), color);
    }

    #[test]
    fn test_hex8_round_trip(r: u8, g: u8, b: u8, a: u8) {
        let text = format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a);
        let color = parse_color(&text).unwrap();
        prop_assert_eq!((color.r(), color.g(), color.b()), (r, g, b));
        prop_assert_eq!(color.to_hex8(), text);
    }

    #[test]
    fn test_canonical_text_reparses(r: u8, g: u8, b: u8, alpha in 0u8..=100) {
        let color = Color::new(r.into(), g.into(), b.into(), f32::from(alpha) / 100.0).unwrap();
        prop_assert_eq!(parse_color(&color.to_string()).unwrap(), color);
    }

    #[test]
    fn test_hsl_hue_wraps(hue in -720i32..720, s in 0u8..=100, l in 0u8..=100) {
        let (s, l) = (f32::from(s) / 100.0, f32::from(l) / 100.0);
        let wrapped = Color::from_hsl(hue.rem_euclid(360) as f32, s, l, 1.0).unwrap();
        prop_assert_eq!(Color::from_hsl(hue as f32, s, l, 1.0).unwrap(), wrapped);
        prop_assert_eq!(Color::from_hsl(hue as f32 + 360.0, s, l, 1.0).unwrap(), wrapped);
    }

    #[test]
    fn test_shorthand_expansion(values in prop::collection::vec(-1000i16..1000, 0..6)) {
        let values: Vec<f32> = values.into_iter().map(f32::from).collect();
        match values.len() {
            1 => prop_assert_eq!(Sides::from_slice(&values).unwrap(), Sides::all(values[0])),
            2 => prop_assert_eq!(
                Sides::from_slice(&values).unwrap().to_array(),
                [values[0], values[1], values[0], values[1]]
            ),
            4 => prop_assert_eq!(expand_shorthand(&values).unwrap().to_vec(), values.clone()),
            len => prop_assert_eq!(Sides::from_slice(&values), Err(StyleError::Shape { len })),
        }
    }

    #[test]
    fn test_sides_display_reexpands(top in -100i16..100, right in -100i16..100, bottom in -100i16..100, left in -100i16..100) {
        let sides = Sides::new(top.into(), right.into(), bottom.into(), left.into());
        let values: Vec<f32> = sides
            .to_string()
            .split_whitespace()
            .map(|part| part.parse().unwrap())
            .collect();
        prop_assert_eq!(Sides::from_slice(&values).unwrap(), sides);
    }
}
