#![allow(dead_code)]

//===========================================================================//

/// Builds an uncompressed 4bpp icon bitmap (BITMAPINFOHEADER, 16-entry color
/// table, color plane, mask plane) with rows stored bottom-up.
pub fn bmp_4bpp<P, M>(size: usize, pixel: P, masked: M) -> Vec<u8>
where
    P: Fn(usize, usize) -> u8,
    M: Fn(usize, usize) -> bool,
{
    let color_stride = ((size * 4 + 7) / 8 + 3) & !3;
    let mask_stride = ((size + 7) / 8 + 3) & !3;
    let mut data = Vec::new();
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&(size as i32).to_le_bytes());
    data.extend_from_slice(&(2 * size as i32).to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // planes
    data.extend_from_slice(&4u16.to_le_bytes()); // bits per pixel
    data.extend_from_slice(&[0u8; 24]);
    for index in 0..16u8 {
        data.extend_from_slice(&[index, index, index, 0]);
    }
    for y in (0..size).rev() {
        let mut row = vec![0u8; color_stride];
        for x in 0..size {
            let shift = if x % 2 == 0 { 4 } else { 0 };
            row[x / 2] |= (pixel(x, y) & 0xf) << shift;
        }
        data.extend_from_slice(&row);
    }
    for y in (0..size).rev() {
        let mut row = vec![0u8; mask_stride];
        for x in 0..size {
            if masked(x, y) {
                row[x / 8] |= 1 << (7 - x % 8);
            }
        }
        data.extend_from_slice(&row);
    }
    data
}

/// Wraps images into an ICO file.  Each image is `(size byte, bitmap)`.
pub fn ico(images: &[(u8, Vec<u8>)]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0, 0, 1, 0]);
    data.extend_from_slice(&(images.len() as u16).to_le_bytes());
    let mut offset = 6 + 16 * images.len();
    for (size, bitmap) in images.iter() {
        data.extend_from_slice(&[*size, *size, 16, 0]);
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&4u16.to_le_bytes());
        data.extend_from_slice(&(bitmap.len() as u32).to_le_bytes());
        data.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += bitmap.len();
    }
    for (_, bitmap) in images.iter() {
        data.extend_from_slice(bitmap);
    }
    data
}

pub fn checkerboard(x: usize, y: usize) -> u8 {
    if (x + y) % 2 == 0 {
        1
    } else {
        12
    }
}

pub fn opaque(_x: usize, _y: usize) -> bool {
    false
}

//===========================================================================//
