//! Mip chain length.

/// Number of mip levels a `width` x `height` texture can hold, including the base level.
///
/// Levels stop once either side reaches 8 pixels, the size of one tile. The result never
/// exceeds `max_level + 1`.
pub fn mip_levels(width: u32, height: u32, max_level: u32) -> u32 {
    let (mut width, mut height) = (width, height);
    let mut levels = 1;
    while width > 8 && height > 8 {
        width /= 2;
        height /= 2;
        levels += 1;
    }
    levels.min(max_level.saturating_add(1))
}
