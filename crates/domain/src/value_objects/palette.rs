//! The 16-entry markup palette.
//!
//! Directive codes are the hexadecimal digits `0`-`9` and `a`-`f`. The color
//! values are fixed: existing content is authored against them.

use serde::{Serialize, Serializer};
use std::fmt;

/// A color selectable by a markup directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    /// Active until the first directive.
    #[default]
    White,
}

impl PaletteColor {
    /// All entries in directive-code order (`0` through `f`).
    pub const ALL: [PaletteColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Looks up the entry for a directive code. Case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_ascii_lowercase().to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    /// The lowercase directive code selecting this color.
    pub fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// Display value as `#RRGGBB`.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::DarkBlue => "#0000AA",
            Self::DarkGreen => "#00AA00",
            Self::DarkAqua => "#00AAAA",
            Self::DarkRed => "#AA0000",
            Self::DarkPurple => "#AA00AA",
            Self::Gold => "#FFAA00",
            Self::Gray => "#AAAAAA",
            Self::DarkGray => "#555555",
            Self::Blue => "#5555FF",
            Self::Green => "#55FF55",
            Self::Aqua => "#55FFFF",
            Self::Red => "#FF5555",
            Self::LightPurple => "#FF55FF",
            Self::Yellow => "#FFFF55",
            Self::White => "#FFFFFF",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for PaletteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hex_digit_maps() {
        for (index, code) in "0123456789abcdef".chars().enumerate() {
            let color = PaletteColor::from_code(code).unwrap();
            assert_eq!(color, PaletteColor::ALL[index]);
            assert_eq!(color.code(), code);
        }
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        assert_eq!(PaletteColor::from_code('A'), Some(PaletteColor::Green));
        assert_eq!(PaletteColor::from_code('F'), Some(PaletteColor::White));
    }

    #[test]
    fn test_non_hex_codes_are_rejected() {
        for code in ['g', 'z', 'k', 'r', ' ', '&', '\n', '가'] {
            assert_eq!(PaletteColor::from_code(code), None, "code {:?}", code);
        }
    }

    #[test]
    fn test_table_values() {
        let table: Vec<&str> = PaletteColor::ALL.iter().map(|c| c.hex()).collect();
        assert_eq!(
            table,
            vec![
                "#000000", "#0000AA", "#00AA00", "#00AAAA", "#AA0000", "#AA00AA", "#FFAA00",
                "#AAAAAA", "#555555", "#5555FF", "#55FF55", "#55FFFF", "#FF5555", "#FF55FF",
                "#FFFF55", "#FFFFFF",
            ]
        );
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(PaletteColor::default(), PaletteColor::White);
    }

    #[test]
    fn test_serializes_as_hex() {
        let json = serde_json::to_string(&PaletteColor::Gold).unwrap();
        assert_eq!(json, "\"#FFAA00\"");
    }
}
