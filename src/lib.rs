//! A library for converting 4bpp ICO icons into CGA-ordered palette index
//! planes.
//!
//! An ICO file is parsed into an [`IconDir`]; a 16x16 or 32x32 entry is
//! decoded into an [`IconImage`] of raw Windows palette indices, re-mapped to
//! CGA order, and (for 16x16 requests served from a 32x32 entry) shrunk by
//! nearest-neighbor sampling.  Transparent pixels are
//! [`palette::TRANSPARENT`] throughout.
//!
//! ```no_run
//! let data = std::fs::read("folder.ico").unwrap();
//! let image = icocga::decode_icon(&data, icocga::IconSize::Small).unwrap();
//! assert_eq!(image.indices().len(), 256);
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod bmpdepth;
pub mod emit;
mod error;
mod icondir;
mod image;
pub mod palette;
pub mod preview;
mod scale;

pub use crate::error::{Error, Result};
pub use crate::icondir::{IconDir, IconDirEntry, IconSize};
pub use crate::image::IconImage;
pub use crate::scale::scale_nearest;

//===========================================================================//

/// Decodes the icon of the given size from an ICO file held in memory,
/// returning CGA-ordered indices.
///
/// The first entry of exactly that size wins.  A 16x16 request with no
/// 16x16 entry is served by downscaling the first 32x32 entry instead.
pub fn decode_icon(data: &[u8], size: IconSize) -> Result<IconImage> {
    let icondir = IconDir::read(data)?;
    if size == IconSize::Small && icondir.find(size.pixels()).is_none() {
        if let Some(entry) = icondir.find(IconSize::Large.pixels()) {
            log::info!(
                "no {} entry, downscaling {} entry at {}",
                size,
                IconSize::Large,
                entry.data_offset()
            );
            return entry.decode(data)?.to_cga()?.downscale(size.pixels());
        }
    }
    let entry = icondir.entry_for(size.pixels())?;
    log::debug!("decoding {} entry at {}", size, entry.data_offset());
    entry.decode(data)?.to_cga()
}

/// Decodes a 32x32 icon into 1024 CGA-ordered indices.
pub fn decode_32(data: &[u8]) -> Result<Vec<u8>> {
    Ok(decode_icon(data, IconSize::Large)?.into_indices())
}

/// Decodes (or downscales to) a 16x16 icon as 256 CGA-ordered indices.
pub fn decode_16(data: &[u8]) -> Result<Vec<u8>> {
    Ok(decode_icon(data, IconSize::Small)?.into_indices())
}

//===========================================================================//
