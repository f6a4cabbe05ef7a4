use std::io;

//===========================================================================//

/// The ways a conversion can fail.  Every failure is terminal for the
/// conversion that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ICO header's type tag was not 1.
    #[error("Not an icon file (type={0})")]
    NotAnIconFile(u16),
    /// The directory has no entry of the requested square size.
    #[error("No {size}x{size} image found in ICO file")]
    NoMatchingImage {
        /// The requested width and height, in pixels.
        size: u32,
    },
    /// The bitmap is not 4 bits per pixel.
    #[error("Unsupported pixel depth (expected 4bpp, got {0}bpp)")]
    UnsupportedDepth(u16),
    /// The bitmap's own dimensions disagree with the requested size.
    #[error(
        "Dimension mismatch (expected {expected}x{expected}, \
         got {width}x{height})"
    )]
    DimensionMismatch {
        /// The size claimed by the directory entry.
        expected: u32,
        /// The width stored in the bitmap header.
        width: i32,
        /// The visual height (stored height halved).
        height: i32,
    },
    /// A computed byte range falls outside the input, or a field is
    /// structurally impossible.
    #[error("Truncated or malformed ICO data: {0}")]
    TruncatedOrMalformed(String),
    /// The entry holds an embedded PNG frame rather than a bitmap.
    #[error("Embedded PNG frames are not supported")]
    PngFrame,
    /// A plane value was neither a 4-bit palette index nor the transparency
    /// sentinel.
    #[error("Invalid palette index {value:#04x} at pixel {position}")]
    InvalidIndex {
        /// The offending value.
        value: u8,
        /// Its position in the flat plane.
        position: usize,
    },
    /// A scale request violated `0 < dst <= src` or the plane length did
    /// not match `src * src`.
    #[error("Cannot scale {len} pixels from {src}x{src} to {dst}x{dst}")]
    InvalidScale {
        /// The plane length that was supplied.
        len: usize,
        /// The source edge length.
        src: u32,
        /// The destination edge length.
        dst: u32,
    },
    /// A name passed to an emitter cannot be written in that format.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// A binary record could not be written or parsed.
    #[error("Invalid icon record: {0}")]
    InvalidRecord(String),
    /// The PNG encoder rejected the image.
    #[error("PNG encoding failed: {0}")]
    Png(String),
    /// Reading or writing failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//===========================================================================//

/// Returns `data[start..start + len]`, or a `TruncatedOrMalformed` error
/// naming `what` if that range does not lie within `data`.
pub(crate) fn checked_slice<'a>(
    data: &'a [u8],
    start: usize,
    len: usize,
    what: &str,
) -> Result<&'a [u8]> {
    let end = match start.checked_add(len) {
        Some(end) => end,
        None => malformed!("{} range overflows (start {})", what, start),
    };
    if end > data.len() {
        malformed!(
            "{} needs bytes {}..{}, but the input is only {} bytes long",
            what,
            start,
            end,
            data.len()
        );
    }
    Ok(&data[start..end])
}

/// Adds byte offsets, reporting overflow as malformed data.
pub(crate) fn checked_offset(
    base: usize,
    add: usize,
    what: &str,
) -> Result<usize> {
    match base.checked_add(add) {
        Some(offset) => Ok(offset),
        None => malformed!("{} offset overflows ({} + {})", what, base, add),
    }
}

//===========================================================================//


//===========================================================================//
