extern crate icocga;

mod common;

use common::{bmp_4bpp, checkerboard, ico, opaque};
use icocga::palette::{TRANSPARENT, WIN_TO_CGA};
use icocga::{Error, IconDir, IconImage, IconSize};

//===========================================================================//

#[test]
fn decode_solid_maroon_icon() {
    let data = ico(&[(32, bmp_4bpp(32, |_, _| 1, opaque))]);
    let pixels = icocga::decode_32(&data).unwrap();
    assert_eq!(pixels.len(), 1024);
    assert!(pixels.iter().all(|&value| value == 4));
}

#[test]
fn decode_native_small_icon() {
    let data = ico(&[
        (32, bmp_4bpp(32, |_, _| 2, opaque)),
        (16, bmp_4bpp(16, |x, _| x as u8, opaque)),
    ]);
    let pixels = icocga::decode_16(&data).unwrap();
    assert_eq!(pixels.len(), 256);
    for (position, &value) in pixels.iter().enumerate() {
        assert_eq!(value, WIN_TO_CGA[position % 16]);
    }
}

#[test]
fn first_row_is_last_stored_row() {
    // Each row stores its own (top-down) row index, so the stored data runs
    // 15, 14, ..., 0 from the start of the color plane.
    let data = ico(&[(16, bmp_4bpp(16, |_, y| y as u8, opaque))]);
    let icondir = IconDir::read(&data).unwrap();
    let raw = icondir.entries()[0].decode(&data).unwrap();
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(raw.index(x, y), y as u8);
        }
    }
    let pixels = icocga::decode_16(&data).unwrap();
    assert!(pixels[..16].iter().all(|&value| value == WIN_TO_CGA[0]));
    assert!(pixels[240..].iter().all(|&value| value == WIN_TO_CGA[15]));
}

#[test]
fn masked_pixels_are_transparent() {
    let data = ico(&[(
        32,
        bmp_4bpp(32, |x, y| ((x + y) % 16) as u8, |x, y| (x * 7 + y) % 3 == 0),
    )]);
    let pixels = icocga::decode_32(&data).unwrap();
    for y in 0..32 {
        for x in 0..32 {
            let value = pixels[y * 32 + x];
            if (x * 7 + y) % 3 == 0 {
                assert_eq!(value, TRANSPARENT, "pixel ({}, {})", x, y);
            } else {
                assert_eq!(value, WIN_TO_CGA[(x + y) % 16]);
            }
        }
    }
}

#[test]
fn every_value_is_an_index_or_transparent() {
    let data = ico(&[(
        32,
        bmp_4bpp(32, |x, y| ((x * 3 + y * 5) % 16) as u8, |x, _| x == 31),
    )]);
    let pixels = icocga::decode_32(&data).unwrap();
    assert_eq!(pixels.len(), 1024);
    assert!(pixels.iter().all(|&value| value < 16 || value == TRANSPARENT));
}

#[test]
fn small_request_downscales_large_entry() {
    let data = ico(&[(32, bmp_4bpp(32, checkerboard, opaque))]);
    let large = icocga::decode_32(&data).unwrap();
    let small = icocga::decode_16(&data).unwrap();
    assert_eq!(small.len(), 256);
    for &(x, y) in [(0usize, 0usize), (0, 1), (1, 0), (15, 15)].iter() {
        let (sx, sy) = (x * 32 / 16, y * 32 / 16);
        assert_eq!(small[y * 16 + x], large[sy * 32 + sx]);
    }
    // Every sampled source pixel has even x + y, so the checkerboard
    // collapses to a single color.
    assert!(small.iter().all(|&value| value == WIN_TO_CGA[1]));
    assert_eq!(icocga::decode_16(&data).unwrap(), small);
}

#[test]
fn broken_small_entry_does_not_fall_back() {
    let mut small = bmp_4bpp(16, |_, _| 1, opaque);
    small[14] = 8;
    let data = ico(&[(16, small), (32, bmp_4bpp(32, |_, _| 1, opaque))]);
    assert!(matches!(
        icocga::decode_16(&data),
        Err(Error::UnsupportedDepth(8))
    ));
}

#[test]
fn first_large_entry_is_downscaled() {
    let data = ico(&[
        (32, bmp_4bpp(32, |_, _| 1, opaque)),
        (32, bmp_4bpp(32, |_, _| 2, opaque)),
    ]);
    let small = icocga::decode_16(&data).unwrap();
    assert_eq!(small.len(), 256);
    assert!(small.iter().all(|&value| value == WIN_TO_CGA[1]));
}

#[test]
fn downscale_keeps_transparency() {
    let data = ico(&[(32, bmp_4bpp(32, checkerboard, |x, _| x < 2))]);
    let small = icocga::decode_16(&data).unwrap();
    for y in 0..16 {
        assert_eq!(small[y * 16], TRANSPARENT);
        assert_ne!(small[y * 16 + 1], TRANSPARENT);
    }
}

#[test]
fn downscale_matches_scaler() {
    let data = ico(&[(32, bmp_4bpp(32, |x, y| (x ^ y) as u8 & 0xf, opaque))]);
    let large = icocga::decode_icon(&data, IconSize::Large).unwrap();
    let small = icocga::decode_icon(&data, IconSize::Small).unwrap();
    let expected = icocga::scale_nearest(large.indices(), 32, 16).unwrap();
    assert_eq!(small.indices(), expected.as_slice());
    assert_eq!(small, large.downscale(16).unwrap());
}

#[test]
fn missing_sizes_fail() {
    let data = ico(&[(48, bmp_4bpp(48, |_, _| 0, opaque))]);
    assert!(matches!(
        icocga::decode_16(&data),
        Err(Error::NoMatchingImage { size: 16 })
    ));
    assert!(matches!(
        icocga::decode_32(&data),
        Err(Error::NoMatchingImage { size: 32 })
    ));
    // A 16x16 entry never stands in for a 32x32 request.
    let data = ico(&[(16, bmp_4bpp(16, |_, _| 0, opaque))]);
    assert!(matches!(
        icocga::decode_32(&data),
        Err(Error::NoMatchingImage { size: 32 })
    ));
}

#[test]
fn zero_type_tag_is_not_an_icon() {
    let mut data = ico(&[(32, bmp_4bpp(32, |_, _| 1, opaque))]);
    data[2] = 0;
    assert!(matches!(icocga::decode_32(&data), Err(Error::NotAnIconFile(0))));
}

#[test]
fn wrong_depth_is_rejected() {
    let mut bitmap = bmp_4bpp(32, |_, _| 1, opaque);
    bitmap[14] = 8;
    let data = ico(&[(32, bitmap)]);
    assert!(matches!(
        icocga::decode_32(&data),
        Err(Error::UnsupportedDepth(8))
    ));
}

#[test]
fn directory_and_bitmap_disagree() {
    // The directory claims 32x32 but the bitmap is 16x16.
    let data = ico(&[(32, bmp_4bpp(16, |_, _| 1, opaque))]);
    assert!(matches!(
        icocga::decode_32(&data),
        Err(Error::DimensionMismatch { expected: 32, width: 16, height: 16 })
    ));
}

#[test]
fn truncated_file_is_rejected() {
    let data = ico(&[(32, bmp_4bpp(32, |_, _| 1, opaque))]);
    for &len in [4, 20, 30, 60, data.len() - 1].iter() {
        assert!(
            matches!(
                icocga::decode_32(&data[..len]),
                Err(Error::TruncatedOrMalformed(_))
            ),
            "length {}",
            len
        );
    }
}

#[test]
fn offset_past_end_is_rejected() {
    let mut data = ico(&[(32, bmp_4bpp(32, |_, _| 1, opaque))]);
    data[18..22].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        icocga::decode_32(&data),
        Err(Error::TruncatedOrMalformed(_))
    ));
}

#[test]
fn colors_used_moves_pixel_data() {
    // A two-entry color table shifts the planes 56 bytes earlier.
    let mut bitmap = bmp_4bpp(16, |x, _| (x % 2) as u8, opaque);
    bitmap[32..36].copy_from_slice(&2u32.to_le_bytes());
    bitmap.drain(48..104);
    let data = ico(&[(16, bitmap)]);
    let pixels = icocga::decode_16(&data).unwrap();
    assert!(pixels.chunks(2).all(|pair| pair == [0, 4]));
}

#[test]
fn raw_bitmap_decode() {
    let bitmap = bmp_4bpp(16, |x, y| ((x + y) % 16) as u8, opaque);
    let image = IconImage::read_bmp(&bitmap, 0, 16).unwrap();
    assert_eq!(image.size(), 16);
    assert_eq!(image.index(3, 4), 7);
    assert_eq!(image.to_cga().unwrap().index(3, 4), 7);
    assert_eq!(image.to_cga().unwrap().index(1, 0), WIN_TO_CGA[1]);
}

//===========================================================================//
