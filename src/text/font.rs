use std::collections::HashMap;
use std::str::SplitWhitespace;

use tracing::warn;

use crate::error::{Result, TextError};
use crate::geometry::{Shape, ShapePath};

/// Glyph substituted for characters missing from a font.
const FALLBACK_GLYPH: char = '?';

/// A single glyph: horizontal advance and outline commands, both in font units.
///
/// The outline is a whitespace separated command stream:
///
/// - `m x y` starts a new contour
/// - `l x y` draws a line
/// - `q x y cpx cpy` draws a quadratic curve ending at `(x, y)`
/// - `b x y cp1x cp1y cp2x cp2y` draws a cubic curve ending at `(x, y)`
#[derive(Debug, Clone, Default)]
pub struct Glyph {
    pub advance: f64,
    pub outline: String,
}

/// Raw font metrics and glyph table, in font units.
#[derive(Debug, Clone, Default)]
pub struct FontData {
    pub family_name: String,
    /// Font units per em.
    pub resolution: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub underline_thickness: f64,
    pub glyphs: HashMap<char, Glyph>,
}

/// Lays out text with a [`FontData`] table and fills the glyph outlines.
#[derive(Debug, Clone)]
pub struct Font {
    data: FontData,
}

impl Font {
    #[must_use]
    pub fn new(data: FontData) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn data(&self) -> &FontData {
        &self.data
    }

    /// Generates the shapes for `text` rendered at `size` units per em.
    ///
    /// Glyphs advance along +X; a `'\n'` returns to x = 0 and moves down by
    /// one line height. Characters without a glyph use the `'?'` glyph, or
    /// are skipped when the font has none.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::MalformedOutline`] if a glyph outline has an
    /// unknown command, a missing coordinate or a non-numeric coordinate.
    pub fn generate_shapes(&self, text: &str, size: f64) -> Result<Vec<Shape>> {
        let scale = size / self.data.resolution;
        let line_height =
            (self.data.y_max - self.data.y_min + self.data.underline_thickness) * scale;

        let mut shapes = Vec::new();
        let mut offset_x = 0.0;
        let mut offset_y = 0.0;

        for ch in text.chars() {
            if ch == '\n' {
                offset_x = 0.0;
                offset_y -= line_height;
                continue;
            }

            let Some((glyph_char, glyph)) = self.glyph(ch) else {
                warn!(character = %ch, family = %self.data.family_name, "Character missing from font");
                continue;
            };

            let path = decode_outline(glyph_char, &glyph.outline, scale, offset_x, offset_y)?;
            shapes.extend(path.into_shapes(false, false));
            offset_x += glyph.advance * scale;
        }

        Ok(shapes)
    }

    fn glyph(&self, ch: char) -> Option<(char, &Glyph)> {
        if let Some(glyph) = self.data.glyphs.get(&ch) {
            return Some((ch, glyph));
        }
        let fallback = self.data.glyphs.get(&FALLBACK_GLYPH)?;
        warn!(character = %ch, "Using fallback glyph");
        Some((FALLBACK_GLYPH, fallback))
    }
}

/// Replays a glyph outline through the [`ShapePath`] drawing commands.
fn decode_outline(
    glyph: char,
    outline: &str,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
) -> Result<ShapePath> {
    let mut lexer = OutlineLexer {
        glyph,
        tokens: outline.split_whitespace(),
        scale,
        offset_x,
        offset_y,
    };
    let mut path = ShapePath::new();

    while let Some(cmd) = lexer.tokens.next() {
        match cmd {
            "m" => {
                let (x, y) = lexer.point()?;
                path.move_to(x, y);
            }
            "l" => {
                let (x, y) = lexer.point()?;
                path.line_to(x, y);
            }
            "q" => {
                let (x, y) = lexer.point()?;
                let (cpx, cpy) = lexer.point()?;
                path.quadratic_curve_to(cpx, cpy, x, y);
            }
            "b" => {
                let (x, y) = lexer.point()?;
                let (cp1x, cp1y) = lexer.point()?;
                let (cp2x, cp2y) = lexer.point()?;
                path.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
            }
            other => return Err(lexer.error(format!("unknown command {other:?}"))),
        }
    }

    Ok(path)
}

struct OutlineLexer<'a> {
    glyph: char,
    tokens: SplitWhitespace<'a>,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl OutlineLexer<'_> {
    /// Reads a coordinate pair and maps it into layout space.
    fn point(&mut self) -> Result<(f64, f64)> {
        let x = self.number()?;
        let y = self.number()?;
        Ok((x * self.scale + self.offset_x, y * self.scale + self.offset_y))
    }

    fn number(&mut self) -> Result<f64> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| self.error("unexpected end of outline".to_owned()))?;
        token
            .parse()
            .map_err(|_| self.error(format!("invalid coordinate {token:?}")))
    }

    fn error(&self, reason: String) -> crate::error::ShapelisError {
        TextError::MalformedOutline {
            glyph: self.glyph,
            reason,
        }
        .into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapelisError;
    use crate::geometry::Curve;
    use approx::assert_relative_eq;

    /// A 10x10 ring: clockwise outer square with a counter-clockwise hole.
    const RING: &str = "m 0 0 l 0 10 l 10 10 l 10 0 l 0 0 m 2 2 l 8 2 l 8 8 l 2 8 l 2 2";

    fn font() -> Font {
        let mut glyphs = HashMap::new();
        glyphs.insert(
            'o',
            Glyph {
                advance: 12.0,
                outline: RING.to_owned(),
            },
        );
        glyphs.insert(
            '?',
            Glyph {
                advance: 6.0,
                outline: "m 0 0 l 0 4 l 4 4 l 4 0 l 0 0".to_owned(),
            },
        );
        glyphs.insert(
            ' ',
            Glyph {
                advance: 5.0,
                outline: String::new(),
            },
        );
        Font::new(FontData {
            family_name: "Test".to_owned(),
            resolution: 10.0,
            y_min: -2.0,
            y_max: 10.0,
            underline_thickness: 1.0,
            glyphs,
        })
    }

    fn min_x(shape: &Shape) -> f64 {
        shape
            .points(1)
            .iter()
            .map(|p| p.x)
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn ring_glyph_has_a_hole() {
        let shapes = font().generate_shapes("o", 10.0).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].holes().len(), 1);
    }

    #[test]
    fn glyphs_advance_and_scale() {
        let shapes = font().generate_shapes("o o", 20.0).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_relative_eq!(min_x(&shapes[0]), 0.0);
        // (12 + 5) * 2
        assert_relative_eq!(min_x(&shapes[1]), 34.0);
        let max_y = shapes[0]
            .points(1)
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max_y, 20.0);
    }

    #[test]
    fn newline_moves_down_one_line() {
        let shapes = font().generate_shapes("o\no", 10.0).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_relative_eq!(min_x(&shapes[1]), 0.0);
        let min_y = shapes[1]
            .points(1)
            .iter()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(min_y, -13.0);
    }

    #[test]
    fn missing_glyph_falls_back() {
        let shapes = font().generate_shapes("x", 10.0).unwrap();
        assert_eq!(shapes.len(), 1);
        assert!(shapes[0].holes().is_empty());
    }

    #[test]
    fn curves_are_decoded() {
        let mut f = font();
        f.data.glyphs.insert(
            'd',
            Glyph {
                advance: 10.0,
                outline: "m 0 0 l 0 10 q 5 5 5 10 b 0 0 5 0 3 0".to_owned(),
            },
        );
        let shapes = f.generate_shapes("d", 10.0).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].curves().len(), 3);
    }

    #[test]
    fn malformed_outline_is_an_error() {
        let mut f = font();
        f.data.glyphs.insert(
            'z',
            Glyph {
                advance: 10.0,
                outline: "m 0 0 l 1".to_owned(),
            },
        );
        let err = f.generate_shapes("z", 10.0).unwrap_err();
        assert!(matches!(
            err,
            ShapelisError::Text(TextError::MalformedOutline { glyph: 'z', .. })
        ));

        f.data.glyphs.get_mut(&'z').unwrap().outline = "m 0 0 x 1 1".to_owned();
        assert!(f.generate_shapes("z", 10.0).is_err());

        f.data.glyphs.get_mut(&'z').unwrap().outline = "m 0 zero".to_owned();
        assert!(f.generate_shapes("z", 10.0).is_err());
    }
}
