//! Palette construction errors.

use std::fmt;
use std::num::ParseIntError;

/// A palette entry that is not a hex color.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Not 3 or 6 digits after the optional `#`
    InvalidLength,
    /// A digit outside `0-9a-f`
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => f.write_str("expected 3 or 6 hex digits"),
            ParseColorError::InvalidHex(err) => write!(f, "bad hex digit ({err})"),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let ParseColorError::InvalidHex(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

/// Why a palette was rejected.
///
/// A palette must hold between 1 and [`MAX_PALETTE_SIZE`](super::MAX_PALETTE_SIZE)
/// entries so that every index fits in a `u8`.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    Empty,
    /// More colors than an indexed image can address
    TooLarge {
        /// Number of colors supplied
        len: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Empty => write!(f, "palette cannot be empty"),
            PaletteError::TooLarge { len } => write!(
                f,
                "palette has {} colors, at most {} are supported",
                len,
                super::MAX_PALETTE_SIZE
            ),
            PaletteError::ParseColor(err) => write!(f, "invalid color: {}", err),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(PaletteError::Empty.to_string(), "palette cannot be empty");
        assert_eq!(
            PaletteError::TooLarge { len: 300 }.to_string(),
            "palette has 300 colors, at most 256 are supported"
        );
        assert_eq!(
            PaletteError::ParseColor(ParseColorError::InvalidLength).to_string(),
            "invalid color: expected 3 or 6 hex digits"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = PaletteError::from(ParseColorError::InvalidLength);
        assert!(err.source().is_some());
        assert!(PaletteError::Empty.source().is_none());
    }
}
