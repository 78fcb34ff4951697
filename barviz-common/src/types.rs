use css_color_parser::Color;
use thiserror::Error;

/// Straight (non-premultiplied) RGBA with channels in [0, 1]
pub type RgbaColor = [f32; 4];

pub const BLACK: RgbaColor = [0.0, 0.0, 0.0, 1.0];
pub const TRANSPARENT: RgbaColor = [0.0, 0.0, 0.0, 0.0];

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid CSS color `{input}`")]
pub struct ColorParseError {
    pub input: String,
}

/// Parses any CSS color string (`steelblue`, `#4682b4`, `rgba(70, 130, 180, 0.5)`)
pub fn parse_css_color(input: &str) -> Result<RgbaColor, ColorParseError> {
    let color = input.parse::<Color>().map_err(|_| ColorParseError {
        input: input.to_string(),
    })?;
    Ok([
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        let named = parse_css_color("steelblue").unwrap();
        let hex = parse_css_color("#4682b4").unwrap();
        assert_eq!(named, hex);
        assert_eq!(hex[3], 1.0);
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_css_color("not-a-color").unwrap_err();
        assert_eq!(err.input, "not-a-color");
    }
}
