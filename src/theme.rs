use ratatui::style::Color;

use crate::config::PaletteConfig;
use crate::error::ConfigError;

/// Colours used to paint one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    /// Fill for empty board cells.
    pub board: Color,
    pub food: Color,
    pub snake: Color,
    pub border: Color,
    pub score: Color,
    pub win: Color,
    pub lose: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            board: Color::Rgb(0x0d, 0x11, 0x17),
            food: Color::Rgb(0x44, 0x93, 0xf8),
            snake: Color::Rgb(0x05, 0xdf, 0x72),
            border: Color::Rgb(0x4b, 0x55, 0x63),
            score: Color::Rgb(0x4a, 0xde, 0x80),
            win: Color::Rgb(0x4a, 0xde, 0x80),
            lose: Color::Rgb(0xf8, 0x71, 0x71),
            muted: Color::DarkGray,
        }
    }
}

impl Palette {
    /// Applies the configured overrides on top of the default palette.
    pub fn resolve(overrides: &PaletteConfig) -> Result<Self, ConfigError> {
        let mut palette = Self::default();

        if let Some(value) = overrides.board.as_deref() {
            palette.board = parse_color("board", value)?;
        }
        if let Some(value) = overrides.food.as_deref() {
            palette.food = parse_color("food", value)?;
        }
        if let Some(value) = overrides.snake.as_deref() {
            palette.snake = parse_color("snake", value)?;
        }

        Ok(palette)
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    parse_hex_color(value)
        .or_else(|| parse_named_ansi_color(value))
        .ok_or_else(|| ConfigError::Colour {
            field,
            value: value.to_owned(),
        })
}

fn parse_named_ansi_color(value: &str) -> Option<Color> {
    let lowered = value.to_ascii_lowercase().replace(['-', '_'], "");
    match lowered.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::{Palette, parse_hex_color, parse_named_ansi_color};
    use crate::config::PaletteConfig;

    #[test]
    fn parses_hex_color() {
        assert_eq!(parse_hex_color("#AABBCC"), Some(Color::Rgb(170, 187, 204)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#12"), None);
    }

    #[test]
    fn named_colors_ignore_case_and_separators() {
        assert_eq!(parse_named_ansi_color("Dark-Gray"), Some(Color::DarkGray));
        assert_eq!(parse_named_ansi_color("light_blue"), Some(Color::LightBlue));
        assert_eq!(parse_named_ansi_color("chartreuse"), None);
    }

    #[test]
    fn overrides_replace_only_given_entries() {
        let palette = Palette::resolve(&PaletteConfig {
            food: Some("red".to_owned()),
            ..PaletteConfig::default()
        })
        .expect("palette should resolve");

        assert_eq!(palette.food, Color::Red);
        assert_eq!(palette.snake, Palette::default().snake);
    }
}
