//! Palette colors and the hex color codec
//!
//! A palette entry carries the same color twice, as a `#RRGGBB` string and
//! as an RGB triple. Constructors derive one representation from the other
//! so the two always agree; payloads deserialized from the wire can be
//! checked with [`PaletteColor::is_consistent`].

use crate::utils::error::{Result, VibeLensError};
use serde::{Deserialize, Serialize};

/// One palette entry: a color in both hex and RGB form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Hex representation, `#RRGGBB` with uppercase digits
    pub hex: String,
    /// The same color as 8-bit red/green/blue
    pub rgb: [u8; 3],
}

impl PaletteColor {
    /// Create a palette color from an RGB triple
    pub fn new(rgb: [u8; 3]) -> Self {
        Self {
            hex: encode_hex(rgb),
            rgb,
        }
    }

    /// Create a palette color from a `#RRGGBB` string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = decode_hex(hex)?;
        Ok(Self::new(rgb))
    }

    /// Check that the hex and RGB fields encode the same color
    pub fn is_consistent(&self) -> bool {
        decode_hex(&self.hex).map(|rgb| rgb == self.rgb).unwrap_or(false)
    }
}

/// Encode an RGB triple as `#RRGGBB` (uppercase, the canonical form)
pub fn encode_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Decode a `#RRGGBB` string into an RGB triple
///
/// Accepts either case; the leading `#` is required.
pub fn decode_hex(hex: &str) -> Result<[u8; 3]> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| VibeLensError::Validation(format!("Hex color missing '#': {}", hex)))?;

    // from_str_radix tolerates a leading '+', so digit-check up front
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(VibeLensError::Validation(format!(
            "Hex color must be #RRGGBB: {}",
            hex
        )));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| {
            VibeLensError::Validation(format!("Invalid hex digits in color: {}", hex))
        })?;
    }

    Ok(rgb)
}
