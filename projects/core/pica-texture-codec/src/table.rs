//! The static per-format codec tables.
//!
//! Two dense tables, indexed by [`PixelFormat::id`]: [`PLAIN_CODECS`] keeps guest pixel layouts
//! (apart from the D24S8 stencil rotation), [`CONVERTED_CODECS`] converts to and from RGBA8.
//! The sub-byte formats have no plain host layout, so both tables decode them to RGBA8.
//! Both are built by `const` evaluation and never change.
//!
//! | Formats                        | Plain linear | Plain tiled | Converted linear | Converted tiled   |
//! |--------------------------------|--------------|-------------|------------------|-------------------|
//! | RGBA8 .. IA4 (byte colour)     | `Copy`       | both        | `Map`            | both              |
//! | I4, A4, ETC1, ETC1A4           | -            | unswizzle   | -                | unswizzle only    |
//! | D16, D24                       | `Copy`       | both        | -                | -                 |
//! | D24S8                          | `Map`        | both        | -                | -                 |

use crate::pixel_format::{PixelFormat, PIXEL_FORMAT_COUNT};
use crate::transforms::etc1::unswizzle_etc1;
use crate::transforms::linear::{
    copy_bytes, linear_decode, linear_encode, reverse_pixel_bytes, stencil_to_back,
    stencil_to_front,
};
use crate::transforms::morton::{swizzle, unswizzle};
use crate::transforms::nibble::unswizzle_nibbles;
use crate::transforms::pixel::{
    self as px, ColorFormat, Converted, PixelTranscode, StencilFirst, Verbatim,
};

/// A transform over an untiled byte run: `(source, dest)`.
pub type LinearFn = fn(&[u8], &mut [u8]);

/// A transform over a tiled window:
/// `(width, height, start_offset, end_offset, source, dest)`.
///
/// Offsets are relative to the surface's base address. For swizzling the source is the linear
/// buffer and the destination the tiled window; unswizzling is the reverse.
pub type MortonFn = fn(u32, u32, u32, u32, &[u8], &mut [u8]);

/// A linear table slot.
#[derive(Clone, Copy)]
pub enum LinearTransform {
    /// The transform is a plain byte copy; callers may replace it with any equivalent copy.
    Copy(LinearFn),
    /// The transform rewrites pixels and must be called as is.
    Map(LinearFn),
}

impl LinearTransform {
    /// The scalar function behind this slot.
    #[inline(always)]
    pub fn function(self) -> LinearFn {
        match self {
            Self::Copy(function) | Self::Map(function) => function,
        }
    }

    /// Returns `true` if this slot is a plain byte copy.
    #[inline(always)]
    pub fn is_copy(self) -> bool {
        matches!(self, Self::Copy(_))
    }
}

/// The four transform slots of one pixel format. `None` marks an unsupported operation.
#[derive(Clone, Copy)]
pub struct FormatCodecs {
    /// Host to guest, untiled.
    pub linear_encode: Option<LinearTransform>,
    /// Guest to host, untiled.
    pub linear_decode: Option<LinearTransform>,
    /// Host to guest, tiled.
    pub swizzle: Option<MortonFn>,
    /// Guest to host, tiled.
    pub unswizzle: Option<MortonFn>,
}

impl FormatCodecs {
    /// Every slot empty.
    pub const UNSUPPORTED: Self = Self {
        linear_encode: None,
        linear_decode: None,
        swizzle: None,
        unswizzle: None,
    };

    /// Layout-preserving codecs: the linear slots are plain copies.
    const fn copied<P: PixelTranscode>() -> Self {
        Self {
            linear_encode: Some(LinearTransform::Copy(copy_bytes)),
            linear_decode: Some(LinearTransform::Copy(copy_bytes)),
            swizzle: Some(swizzle::<P>),
            unswizzle: Some(unswizzle::<P>),
        }
    }

    /// Codecs for a colour format converted to and from RGBA8.
    const fn converted<C: ColorFormat>() -> Self {
        Self {
            linear_encode: Some(LinearTransform::Map(linear_encode::<Converted<C>>)),
            linear_decode: Some(LinearTransform::Map(linear_decode::<Converted<C>>)),
            swizzle: Some(swizzle::<Converted<C>>),
            unswizzle: Some(unswizzle::<Converted<C>>),
        }
    }

    /// Codecs for a format that can only be decoded from tiled memory.
    const fn decode_only(unswizzle: MortonFn) -> Self {
        Self {
            unswizzle: Some(unswizzle),
            ..Self::UNSUPPORTED
        }
    }
}

/// A dense table of [`FormatCodecs`], one per hardware format id.
pub struct CodecTable {
    entries: [FormatCodecs; PIXEL_FORMAT_COUNT],
}

impl CodecTable {
    /// The codecs registered for `format`.
    #[inline(always)]
    pub const fn get(&self, format: PixelFormat) -> &FormatCodecs {
        &self.entries[format.id() as usize]
    }

    /// The codecs at a raw hardware id, if the id is in range.
    ///
    /// Ids without a format (15) yield [`FormatCodecs::UNSUPPORTED`].
    #[inline]
    pub fn get_by_id(&self, id: u8) -> Option<&FormatCodecs> {
        self.entries.get(id as usize)
    }

    const fn plain() -> Self {
        use PixelFormat as F;

        let mut entries = [FormatCodecs::UNSUPPORTED; PIXEL_FORMAT_COUNT];
        entries[F::Rgba8 as usize] = FormatCodecs::copied::<Verbatim<4>>();
        entries[F::Rgb8 as usize] = FormatCodecs::copied::<Verbatim<3>>();
        entries[F::Rgb5a1 as usize] = FormatCodecs::copied::<Verbatim<2>>();
        entries[F::Rgb565 as usize] = FormatCodecs::copied::<Verbatim<2>>();
        entries[F::Rgba4 as usize] = FormatCodecs::copied::<Verbatim<2>>();
        entries[F::Ia8 as usize] = FormatCodecs::copied::<Verbatim<2>>();
        entries[F::Rg8 as usize] = FormatCodecs::copied::<Verbatim<2>>();
        entries[F::I8 as usize] = FormatCodecs::copied::<Verbatim<1>>();
        entries[F::A8 as usize] = FormatCodecs::copied::<Verbatim<1>>();
        entries[F::Ia4 as usize] = FormatCodecs::copied::<Verbatim<1>>();
        entries[F::D16 as usize] = FormatCodecs::copied::<Verbatim<2>>();
        entries[F::D24 as usize] = FormatCodecs::copied::<Verbatim<3>>();
        entries[F::D24s8 as usize] = FormatCodecs {
            linear_encode: Some(LinearTransform::Map(stencil_to_back)),
            linear_decode: Some(LinearTransform::Map(stencil_to_front)),
            swizzle: Some(swizzle::<StencilFirst>),
            unswizzle: Some(unswizzle::<StencilFirst>),
        };
        entries[F::I4 as usize] = FormatCodecs::decode_only(unswizzle_nibbles::<false>);
        entries[F::A4 as usize] = FormatCodecs::decode_only(unswizzle_nibbles::<true>);
        entries[F::Etc1 as usize] = FormatCodecs::decode_only(unswizzle_etc1::<false>);
        entries[F::Etc1a4 as usize] = FormatCodecs::decode_only(unswizzle_etc1::<true>);
        Self { entries }
    }

    const fn converted() -> Self {
        use PixelFormat as F;

        let mut entries = [FormatCodecs::UNSUPPORTED; PIXEL_FORMAT_COUNT];
        entries[F::Rgba8 as usize] = FormatCodecs {
            linear_encode: Some(LinearTransform::Map(reverse_pixel_bytes)),
            linear_decode: Some(LinearTransform::Map(reverse_pixel_bytes)),
            ..FormatCodecs::converted::<px::Rgba8>()
        };
        entries[F::Rgb8 as usize] = FormatCodecs::converted::<px::Rgb8>();
        entries[F::Rgb5a1 as usize] = FormatCodecs::converted::<px::Rgb5a1>();
        entries[F::Rgb565 as usize] = FormatCodecs::converted::<px::Rgb565>();
        entries[F::Rgba4 as usize] = FormatCodecs::converted::<px::Rgba4>();
        entries[F::Ia8 as usize] = FormatCodecs::converted::<px::Ia8>();
        entries[F::Rg8 as usize] = FormatCodecs::converted::<px::Rg8>();
        entries[F::I8 as usize] = FormatCodecs::converted::<px::I8>();
        entries[F::A8 as usize] = FormatCodecs::converted::<px::A8>();
        entries[F::Ia4 as usize] = FormatCodecs::converted::<px::Ia4>();
        entries[F::I4 as usize] = FormatCodecs::decode_only(unswizzle_nibbles::<false>);
        entries[F::A4 as usize] = FormatCodecs::decode_only(unswizzle_nibbles::<true>);
        entries[F::Etc1 as usize] = FormatCodecs::decode_only(unswizzle_etc1::<false>);
        entries[F::Etc1a4 as usize] = FormatCodecs::decode_only(unswizzle_etc1::<true>);
        Self { entries }
    }
}

/// Codecs that keep the guest pixel layout.
pub static PLAIN_CODECS: CodecTable = CodecTable::plain();

/// Codecs that convert pixels to and from host RGBA8.
pub static CONVERTED_CODECS: CodecTable = CodecTable::converted();

/// Selects [`CONVERTED_CODECS`] when `convert` is set, [`PLAIN_CODECS`] otherwise.
#[inline(always)]
pub fn codec_table(convert: bool) -> &'static CodecTable {
    if convert {
        &CONVERTED_CODECS
    } else {
        &PLAIN_CODECS
    }
}
