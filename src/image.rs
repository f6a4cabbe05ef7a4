use crate::bmpdepth::BmpDepth;
use crate::error::{checked_offset, checked_slice, Error, Result};
use crate::palette::{self, TRANSPARENT};
use crate::scale;
use byteorder::{LittleEndian, ReadBytesExt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::Cursor;

//===========================================================================//

// The size of a BITMAPINFOHEADER struct, in bytes.
const BMP_HEADER_LEN: usize = 40;

//===========================================================================//

/// A square plane of palette indices, in row-major order from top to
/// bottom.  Each value is a 4-bit palette index or [`TRANSPARENT`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(try_from = "IndexPlane")
)]
pub struct IconImage {
    size: u32,
    indices: Vec<u8>,
}

// Unchecked deserialized form of an `IconImage`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct IndexPlane {
    size: u32,
    indices: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<IndexPlane> for IconImage {
    type Error = Error;

    fn try_from(plane: IndexPlane) -> Result<IconImage> {
        IconImage::try_from_indices(plane.size, plane.indices)
    }
}

impl IconImage {
    /// Creates an image from `size * size` indices.  Panics if `size` is zero
    /// or `indices` is the wrong length.
    pub fn from_indices(size: u32, indices: Vec<u8>) -> IconImage {
        match IconImage::try_from_indices(size, indices) {
            Ok(image) => image,
            Err(error) => panic!("{}", error),
        }
    }

    /// Like [`IconImage::from_indices`], but a zero `size` or a wrong
    /// `indices` length is an error instead of a panic.
    pub fn try_from_indices(
        size: u32,
        indices: Vec<u8>,
    ) -> Result<IconImage> {
        if size == 0 {
            malformed!("Invalid icon size (was 0, but must be at least 1)");
        }
        let expected_len = (size as usize) * (size as usize);
        if indices.len() != expected_len {
            malformed!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                indices.len(),
                expected_len,
                size,
                size
            );
        }
        Ok(IconImage { size, indices })
    }

    /// Decodes the 4bpp bitmap whose BITMAPINFOHEADER starts at `offset`
    /// within `data`.  The bitmap must be exactly `size` pixels square.  The
    /// result holds raw indices into the bitmap's own (Windows-ordered)
    /// palette, with masked-out pixels set to [`TRANSPARENT`].
    pub fn read_bmp(
        data: &[u8],
        offset: usize,
        size: u32,
    ) -> Result<IconImage> {
        let header = BitmapHeader::read(data, offset)?;
        let depth = match BmpDepth::from_bits_per_pixel(header.bits_per_pixel)
        {
            Some(BmpDepth::Four) => BmpDepth::Four,
            _ => return Err(Error::UnsupportedDepth(header.bits_per_pixel)),
        };
        // The height is stored doubled, counting the rows of both the color
        // data and the transparency mask.
        let height = header.height / 2;
        if size == 0 || header.width != size as i32 || height != size as i32 {
            return Err(Error::DimensionMismatch {
                expected: size,
                width: header.width,
                height,
            });
        }
        if header.compression != 0 {
            log::warn!(
                "BMP compression field is {}, reading as uncompressed",
                header.compression
            );
        }
        let size = size as usize;

        // The color table sits between the header and the color data.  Its
        // values are never needed, only its length.
        let palette_offset = checked_offset(
            offset,
            header.header_size as usize,
            "color table",
        )?;
        let num_colors = if header.colors_used == 0 {
            depth.num_colors()
        } else {
            header.colors_used as usize
        };
        let palette_len = match num_colors.checked_mul(4) {
            Some(len) => len,
            None => malformed!("Color table too large ({})", num_colors),
        };
        checked_slice(data, palette_offset, palette_len, "color table")?;

        // Both planes are stored row by row, starting from the *bottom* row,
        // with each row padded to a multiple of four bytes.
        let mask = BmpDepth::One;
        let color_stride = depth.row_stride(size);
        let mask_stride = mask.row_stride(size);
        let color_offset =
            checked_offset(palette_offset, palette_len, "color data")?;
        let color_plane = checked_slice(
            data,
            color_offset,
            color_stride * size,
            "color data",
        )?;
        let mask_offset =
            checked_offset(color_offset, color_plane.len(), "mask data")?;
        let mask_plane =
            checked_slice(data, mask_offset, mask_stride * size, "mask data")?;

        let mut indices = Vec::with_capacity(size * size);
        for row in 0..size {
            let stored_row = size - 1 - row;
            let color_row = &color_plane[stored_row * color_stride..]
                [..depth.row_data_size(size)];
            let mask_row = &mask_plane[stored_row * mask_stride..]
                [..mask.row_data_size(size)];
            for col in 0..size {
                let byte = color_row[col / 2];
                let index = if col % 2 == 0 { byte >> 4 } else { byte & 0xf };
                let masked = (mask_row[col / 8] >> (7 - (col % 8))) & 0x1;
                indices.push(if masked == 1 { TRANSPARENT } else { index });
            }
        }
        Ok(IconImage { size: size as u32, indices })
    }

    /// Returns the width (and height) of the image, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the index at column `x` of row `y` (row 0 is the top).
    /// Panics if either coordinate is out of range.
    pub fn index(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.size && y < self.size, "({}, {}) out of range", x, y);
        self.indices[(y * self.size + x) as usize]
    }

    /// Returns the indices, in row-major order from top to bottom.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consumes the image, returning its indices.
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Re-maps Windows-ordered indices into CGA order.
    pub fn to_cga(&self) -> Result<IconImage> {
        let indices = palette::remap_to_cga(&self.indices)?;
        Ok(IconImage { size: self.size, indices })
    }

    /// Shrinks the image to `size` pixels square by nearest-neighbor
    /// sampling.
    pub fn downscale(&self, size: u32) -> Result<IconImage> {
        let indices = scale::scale_nearest(&self.indices, self.size, size)?;
        Ok(IconImage { size, indices })
    }
}

//===========================================================================//

/// The fields of a BITMAPINFOHEADER that decoding depends on.
struct BitmapHeader {
    header_size: u32,
    width: i32,
    height: i32,
    bits_per_pixel: u16,
    compression: u32,
    colors_used: u32,
}

impl BitmapHeader {
    fn read(data: &[u8], offset: usize) -> Result<BitmapHeader> {
        let bytes = checked_slice(data, offset, BMP_HEADER_LEN, "BMP header")?;
        let mut reader = Cursor::new(bytes);
        let header_size = reader.read_u32::<LittleEndian>()?;
        if (header_size as usize) < BMP_HEADER_LEN {
            malformed!(
                "Invalid BMP header size (was {}, must be at least {})",
                header_size,
                BMP_HEADER_LEN
            );
        }
        let width = reader.read_i32::<LittleEndian>()?;
        let height = reader.read_i32::<LittleEndian>()?;
        let planes = reader.read_u16::<LittleEndian>()?;
        let bits_per_pixel = reader.read_u16::<LittleEndian>()?;
        let compression = reader.read_u32::<LittleEndian>()?;
        let image_size = reader.read_u32::<LittleEndian>()?;
        let _horz_ppm = reader.read_i32::<LittleEndian>()?;
        let _vert_ppm = reader.read_i32::<LittleEndian>()?;
        let colors_used = reader.read_u32::<LittleEndian>()?;
        let _colors_important = reader.read_u32::<LittleEndian>()?;
        log::trace!(
            "BMP header at {}: {}x{} (doubled), {} planes, {} bpp, \
             {} image bytes, {} colors",
            offset,
            width,
            height,
            planes,
            bits_per_pixel,
            image_size,
            colors_used
        );
        Ok(BitmapHeader {
            header_size,
            width,
            height,
            bits_per_pixel,
            compression,
            colors_used,
        })
    }
}

//===========================================================================//


//===========================================================================//
