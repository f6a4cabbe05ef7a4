use crate::error::{checked_slice, Error, Result};
use crate::image::IconImage;
use byteorder::{LittleEndian, ReadBytesExt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

//===========================================================================//

// The size of the ICONDIR header and of each ICONDIRENTRY, in bytes.
const ICONDIR_LEN: usize = 6;
const ICONDIRENTRY_LEN: usize = 16;

// The ICONDIR type tag for icons (cursors use 2).
const ICON_TYPE: u16 = 1;

// The signature that all PNG files start with.
const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];

//===========================================================================//

/// The square icon sizes that can be produced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum IconSize {
    /// 16x16 pixels (256 indices)
    Small,
    /// 32x32 pixels (1024 indices)
    Large,
}

impl IconSize {
    /// Returns the size with the given edge length, if there is one.
    pub fn from_pixels(pixels: u32) -> Option<IconSize> {
        match pixels {
            16 => Some(IconSize::Small),
            32 => Some(IconSize::Large),
            _ => None,
        }
    }

    /// Returns the edge length, in pixels.
    pub fn pixels(&self) -> u32 {
        match *self {
            IconSize::Small => 16,
            IconSize::Large => 32,
        }
    }

    /// Returns the number of pixels in a full image of this size.
    pub fn num_pixels(&self) -> usize {
        let pixels = self.pixels() as usize;
        pixels * pixels
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.pixels(), self.pixels())
    }
}

impl FromStr for IconSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<IconSize, String> {
        s.parse::<u32>()
            .ok()
            .and_then(IconSize::from_pixels)
            .ok_or_else(|| format!("icon size must be 16 or 32 (was {:?})", s))
    }
}

//===========================================================================//

/// The directory of an ICO file: one entry per stored image, in file order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconDir {
    entries: Vec<IconDirEntry>,
}

impl IconDir {
    /// Returns the entries in file order.
    pub fn entries(&self) -> &[IconDirEntry] {
        &self.entries
    }

    /// Parses the ICONDIR header and every ICONDIRENTRY of an ICO file held
    /// in memory.  Image data is not touched until an entry is decoded.
    pub fn read(data: &[u8]) -> Result<IconDir> {
        let mut reader =
            Cursor::new(checked_slice(data, 0, ICONDIR_LEN, "ICONDIR")?);
        let _reserved = reader.read_u16::<LittleEndian>()?;
        let restype = reader.read_u16::<LittleEndian>()?;
        if restype != ICON_TYPE {
            return Err(Error::NotAnIconFile(restype));
        }
        let num_entries = reader.read_u16::<LittleEndian>()? as usize;
        log::debug!("ICO directory has {} entries", num_entries);
        let mut entries = Vec::<IconDirEntry>::with_capacity(num_entries);
        for index in 0..num_entries {
            let start = ICONDIR_LEN + index * ICONDIRENTRY_LEN;
            let bytes =
                checked_slice(data, start, ICONDIRENTRY_LEN, "ICONDIRENTRY")?;
            let entry = IconDirEntry::parse(bytes)?;
            log::debug!(
                "entry {}: {}x{}, {} bpp, {} bytes at offset {}",
                index,
                entry.width,
                entry.height,
                entry.bits_per_pixel,
                entry.data_size,
                entry.data_offset
            );
            entries.push(entry);
        }
        Ok(IconDir { entries })
    }

    /// Returns the first entry, in file order, that is exactly `size` pixels
    /// wide and high.
    pub fn find(&self, size: u32) -> Option<&IconDirEntry> {
        self.entries
            .iter()
            .find(|entry| entry.width == size && entry.height == size)
    }

    /// Like [`IconDir::find`], but a missing entry is an error.
    pub fn entry_for(&self, size: u32) -> Result<&IconDirEntry> {
        self.find(size).ok_or(Error::NoMatchingImage { size })
    }
}

//===========================================================================//

/// One ICONDIRENTRY: a snapshot of the directory fields describing a single
/// image.  The image data itself stays in the file buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconDirEntry {
    width: u32,
    height: u32,
    num_colors: u8,
    color_planes: u16,
    bits_per_pixel: u16,
    data_size: u32,
    data_offset: u32,
}

impl IconDirEntry {
    fn parse(bytes: &[u8]) -> Result<IconDirEntry> {
        let mut reader = Cursor::new(bytes);
        let width_byte = reader.read_u8()?;
        let height_byte = reader.read_u8()?;
        let num_colors = reader.read_u8()?;
        let _reserved = reader.read_u8()?;
        let color_planes = reader.read_u16::<LittleEndian>()?;
        let bits_per_pixel = reader.read_u16::<LittleEndian>()?;
        let data_size = reader.read_u32::<LittleEndian>()?;
        let data_offset = reader.read_u32::<LittleEndian>()?;
        // A width/height byte of zero means 256.
        let width = if width_byte == 0 { 256 } else { width_byte as u32 };
        let height = if height_byte == 0 { 256 } else { height_byte as u32 };
        Ok(IconDirEntry {
            width,
            height,
            num_colors,
            color_planes,
            bits_per_pixel,
            data_size,
            data_offset,
        })
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the palette size claimed by the directory (0 for none/256).
    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Returns the color planes field.
    pub fn color_planes(&self) -> u16 {
        self.color_planes
    }

    /// Returns the bits-per-pixel claimed by the directory.  The bitmap
    /// header's own value is the one that is validated on decode.
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Returns the length of the encoded image data, in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Returns the byte offset of the encoded image data within the file.
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    /// Returns true if the image data in `data` (the whole ICO file) is an
    /// embedded PNG rather than a bitmap.
    pub fn is_png(&self, data: &[u8]) -> bool {
        checked_slice(
            data,
            self.data_offset as usize,
            PNG_SIGNATURE.len(),
            "image data",
        )
        .map(|bytes| bytes == PNG_SIGNATURE)
        .unwrap_or(false)
    }

    /// Decodes this entry's 4bpp bitmap out of `data` (the whole ICO file)
    /// into raw, Windows-ordered palette indices.
    pub fn decode(&self, data: &[u8]) -> Result<IconImage> {
        if self.is_png(data) {
            return Err(Error::PngFrame);
        }
        IconImage::read_bmp(data, self.data_offset as usize, self.width)
    }
}

//===========================================================================//


//===========================================================================//
