//! The host-side RGBA8 pixel.

/// Represents a single RGBA8888 pixel, laid out in memory as `[r, g, b, a]`.
///
/// This is the layout every converting transform decodes into, and encodes from.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pica_texture_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads a pixel from the first 4 bytes of `bytes` (`[r, g, b, a]`).
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than 4 bytes.
    #[inline(always)]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the pixel as `[r, g, b, a]`.
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Writes the pixel into the first 4 bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than 4 bytes.
    #[inline(always)]
    pub fn write_to(self, bytes: &mut [u8]) {
        bytes[..4].copy_from_slice(&self.to_bytes());
    }
}
