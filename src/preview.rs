//! Renders CGA-ordered icons as PNG images, for eyeballing a conversion.

use crate::error::{Error, Result};
use crate::image::IconImage;
use crate::palette;
use std::io::Write;

//===========================================================================//

/// Returns RGBA data for a CGA-ordered image, in row-major order from top
/// to bottom.  Transparent pixels get zero alpha.
pub fn rgba_data(image: &IconImage) -> Result<Vec<u8>> {
    let mut rgba = Vec::with_capacity(image.indices().len() * 4);
    for (position, &index) in image.indices().iter().enumerate() {
        match palette::cga_color(index, position)? {
            Some([red, green, blue]) => {
                rgba.extend_from_slice(&[red, green, blue, u8::MAX])
            }
            None => rgba.extend_from_slice(&[0, 0, 0, 0]),
        }
    }
    Ok(rgba)
}

/// Encodes a CGA-ordered image as an RGBA PNG file.
pub fn write_png<W: Write>(image: &IconImage, writer: W) -> Result<()> {
    let rgba = rgba_data(image)?;
    match write_png_enc(image.size(), &rgba, writer) {
        Ok(()) => Ok(()),
        Err(png::EncodingError::IoError(error)) => Err(Error::Io(error)),
        Err(png::EncodingError::Format(error)) => {
            Err(Error::Png(format!("format error: {}", error)))
        }
        Err(png::EncodingError::LimitsExceeded) => {
            Err(Error::Png("limits exceeded".to_string()))
        }
        Err(png::EncodingError::Parameter(error)) => {
            Err(Error::Png(format!("parameter error: {}", error)))
        }
    }
}

fn write_png_enc<W: Write>(
    size: u32,
    rgba: &[u8],
    writer: W,
) -> std::result::Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, size, size);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_color(png::ColorType::Rgba);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()
}

//===========================================================================//


//===========================================================================//
