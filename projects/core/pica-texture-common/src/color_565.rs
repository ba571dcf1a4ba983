//! # RGB565 Color Format Support
//!
//! RGB565 is a 16-bit color format that packs red, green, and blue color components
//! into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! The PICA GPU stores these little endian. Expanding back to 8 bits replicates the top bits,
//! see [`crate::channel`].
//!
//! ## Examples
//!
//! ```rust
//! use pica_texture_common::color_565::Color565;
//!
//! let color = Color565::from_raw(0xF800); // Pure red
//! assert_eq!(color.red(), 255);
//! assert_eq!(color.green(), 0);
//! assert_eq!(color.blue(), 0);
//! ```

use crate::channel::{expand_5_to_8, expand_6_to_8};
use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from two little endian bytes, as stored in guest memory.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Creates a new [`Color565`] from separate 8-bit RGB components, truncating each.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        // Computes the whole value in one expression; equivalent to masking and shifting each
        // component into place separately.
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the raw value as little endian bytes, as stored in guest memory.
    #[inline]
    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    /// Extracts the expanded 8-bit red component (0-255)
    #[inline]
    pub const fn red(&self) -> u8 {
        expand_5_to_8((self.value >> 11) as u8)
    }

    /// Extracts the expanded 8-bit green component (0-255)
    #[inline]
    pub const fn green(&self) -> u8 {
        expand_6_to_8((self.value >> 5) as u8)
    }

    /// Extracts the expanded 8-bit blue component (0-255)
    #[inline]
    pub const fn blue(&self) -> u8 {
        expand_5_to_8(self.value as u8)
    }

    /// Converts to an opaque [`Color8888`].
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}
