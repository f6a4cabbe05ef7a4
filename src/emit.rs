//! Output formats for decoded icons: a C array literal, and the binary
//! `.inf` record (display name, newline, 256 raw indices).

use crate::error::{Error, Result};
use crate::icondir::IconSize;
use crate::image::IconImage;
use std::io::Write;

//===========================================================================//

/// Writes `image` as a C `const uint8_t` array declaration, one image row
/// per line, each value as a two-digit hexadecimal literal.
pub fn write_array_literal<W: Write>(
    mut writer: W,
    name: &str,
    image: &IconImage,
) -> Result<()> {
    validate_identifier(name)?;
    let indices = image.indices();
    writeln!(writer, "const uint8_t {}[{}] = {{", name, indices.len())?;
    for row in indices.chunks(image.size() as usize) {
        let values: Vec<String> =
            row.iter().map(|value| format!("0x{:02X}", value)).collect();
        writeln!(writer, "    {},", values.join(", "))?;
    }
    writeln!(writer, "}};")?;
    Ok(())
}

/// Writes a 16x16 `image` as a binary record: the ASCII display name, a
/// single `\n`, then exactly 256 index bytes.
pub fn write_record<W: Write>(
    mut writer: W,
    name: &str,
    image: &IconImage,
) -> Result<()> {
    validate_display_name(name)?;
    if image.size() != IconSize::Small.pixels() {
        invalid_input!(
            InvalidRecord,
            "Records hold {} images only (was {}x{})",
            IconSize::Small,
            image.size(),
            image.size()
        );
    }
    writer.write_all(name.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(image.indices())?;
    Ok(())
}

/// Parses a binary record written by [`write_record`], returning the
/// display name and the 16x16 image.
pub fn read_record(data: &[u8]) -> Result<(String, IconImage)> {
    let newline = match data.iter().position(|&byte| byte == b'\n') {
        Some(position) => position,
        None => invalid_input!(InvalidRecord, "No newline after display name"),
    };
    let (name, rest) = (&data[..newline], &data[newline + 1..]);
    if !name.is_ascii() {
        invalid_input!(InvalidRecord, "Display name is not ASCII");
    }
    let expected = IconSize::Small.num_pixels();
    if rest.len() != expected {
        invalid_input!(
            InvalidRecord,
            "Expected {} index bytes after the name (was {})",
            expected,
            rest.len()
        );
    }
    let name = String::from_utf8_lossy(name).into_owned();
    let image =
        IconImage::from_indices(IconSize::Small.pixels(), rest.to_vec());
    Ok((name, image))
}

fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        invalid_input!(InvalidName, "{:?} is not a C identifier", name);
    }
    Ok(())
}

fn validate_display_name(name: &str) -> Result<()> {
    if name.is_empty() {
        invalid_input!(InvalidName, "Display name is empty");
    }
    if !name.is_ascii() || name.contains('\n') {
        invalid_input!(
            InvalidName,
            "{:?} must be ASCII without newlines",
            name
        );
    }
    Ok(())
}

//===========================================================================//


//===========================================================================//
