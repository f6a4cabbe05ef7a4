//! Palette index tables for converting between the Windows default 16-color
//! ordering and CGA ordering.

use crate::error::{Error, Result};

//===========================================================================//

/// The index value marking a fully transparent pixel.  Never a palette
/// index.
pub const TRANSPARENT: u8 = 0xff;

/// Windows palette index to CGA palette index.
///
/// Windows order: black, maroon, green, olive, navy, purple, teal, silver,
/// gray, red, lime, yellow, blue, fuchsia, aqua, white.
pub const WIN_TO_CGA: [u8; 16] =
    [0, 4, 2, 6, 1, 5, 3, 7, 8, 12, 10, 14, 9, 13, 11, 15];

/// CGA palette index to Windows palette index; the inverse of
/// [`WIN_TO_CGA`].
pub const CGA_TO_WIN: [u8; 16] =
    [0, 4, 2, 6, 1, 5, 3, 7, 8, 12, 10, 14, 9, 13, 11, 15];

/// RGB values of the CGA palette, by CGA index.
pub const CGA_RGB: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // black
    [0x00, 0x00, 0xaa], // blue
    [0x00, 0xaa, 0x00], // green
    [0x00, 0xaa, 0xaa], // cyan
    [0xaa, 0x00, 0x00], // red
    [0xaa, 0x00, 0xaa], // magenta
    [0xaa, 0x55, 0x00], // brown
    [0xaa, 0xaa, 0xaa], // light gray
    [0x55, 0x55, 0x55], // dark gray
    [0x55, 0x55, 0xff], // light blue
    [0x55, 0xff, 0x55], // light green
    [0x55, 0xff, 0xff], // light cyan
    [0xff, 0x55, 0x55], // light red
    [0xff, 0x55, 0xff], // light magenta
    [0xff, 0xff, 0x55], // yellow
    [0xff, 0xff, 0xff], // white
];

//===========================================================================//

/// Maps each Windows-ordered index to CGA order.  [`TRANSPARENT`] passes
/// through; any other value above 15 is an error.
pub fn remap_to_cga(indices: &[u8]) -> Result<Vec<u8>> {
    remap(indices, &WIN_TO_CGA)
}

/// Maps each CGA-ordered index back to Windows order.
pub fn remap_to_windows(indices: &[u8]) -> Result<Vec<u8>> {
    remap(indices, &CGA_TO_WIN)
}

/// Returns the RGB color of a CGA index, or `None` for [`TRANSPARENT`].
pub fn cga_color(index: u8, position: usize) -> Result<Option<[u8; 3]>> {
    match index {
        TRANSPARENT => Ok(None),
        0..=15 => Ok(Some(CGA_RGB[index as usize])),
        _ => Err(Error::InvalidIndex { value: index, position }),
    }
}

fn remap(indices: &[u8], table: &[u8; 16]) -> Result<Vec<u8>> {
    indices
        .iter()
        .enumerate()
        .map(|(position, &value)| match value {
            TRANSPARENT => Ok(TRANSPARENT),
            0..=15 => Ok(table[value as usize]),
            _ => Err(Error::InvalidIndex { value, position }),
        })
        .collect()
}

//===========================================================================//


//===========================================================================//
