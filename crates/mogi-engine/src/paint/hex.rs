use std::fmt;
use std::str::FromStr;

use super::Color;

/// Error returned when a hex color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// A character other than a hex digit, `#` or whitespace.
    InvalidChar(char),
    /// Digit count other than 3, 4, 6 or 8.
    InvalidLength(usize),
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(c) => write!(f, "invalid hex color character {c:?}"),
            Self::InvalidLength(n) => write!(f, "invalid hex color length {n} (expected 3, 4, 6 or 8)"),
        }
    }
}

impl std::error::Error for HexColorError {}

impl Color {
    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (straight alpha).
    ///
    /// The leading `#` and any whitespace are optional.
    pub fn from_hex(input: &str) -> Result<Color, HexColorError> {
        let mut digits = [0u8; 8];
        let mut n = 0usize;

        for c in input.chars() {
            if c == '#' || c.is_whitespace() {
                continue;
            }
            let v = c.to_digit(16).ok_or(HexColorError::InvalidChar(c))? as u8;
            if n == digits.len() {
                return Err(HexColorError::InvalidLength(n + 1));
            }
            digits[n] = v;
            n += 1;
        }

        let byte = |hi: u8, lo: u8| (hi << 4) | lo;
        let [r, g, b, a] = match n {
            3 => [
                byte(digits[0], digits[0]),
                byte(digits[1], digits[1]),
                byte(digits[2], digits[2]),
                0xFF,
            ],
            4 => [
                byte(digits[0], digits[0]),
                byte(digits[1], digits[1]),
                byte(digits[2], digits[2]),
                byte(digits[3], digits[3]),
            ],
            6 => [
                byte(digits[0], digits[1]),
                byte(digits[2], digits[3]),
                byte(digits[4], digits[5]),
                0xFF,
            ],
            8 => [
                byte(digits[0], digits[1]),
                byte(digits[2], digits[3]),
                byte(digits[4], digits[5]),
                byte(digits[6], digits[7]),
            ],
            other => return Err(HexColorError::InvalidLength(other)),
        };

        Ok(Color::from_rgba_u8(r, g, b, a))
    }
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_are_opaque() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::RED);
    }

    #[test]
    fn short_form_expands_each_nibble() {
        assert_eq!(Color::from_hex("#0F0").unwrap(), Color::GREEN);
    }

    #[test]
    fn alpha_digits_premultiply() {
        let c = Color::from_hex("ffffff00").unwrap();
        assert_eq!(c, Color::TRANSPARENT);
    }

    #[test]
    fn lowercase_and_whitespace_are_accepted() {
        assert_eq!(" #00 00ff ".parse::<Color>().unwrap(), Color::BLUE);
    }

    #[test]
    fn four_digit_form_carries_alpha() {
        let c = Color::from_hex("#FFF8").unwrap();
        assert_eq!(c.a, 0x88 as f32 / 255.0);
    }

    #[test]
    fn bad_character_is_reported() {
        assert_eq!(Color::from_hex("#GG0000"), Err(HexColorError::InvalidChar('G')));
    }

    #[test]
    fn bad_length_is_reported() {
        assert_eq!(Color::from_hex("#12345"), Err(HexColorError::InvalidLength(5)));
        assert_eq!(Color::from_hex("#123456789"), Err(HexColorError::InvalidLength(9)));
    }
}
