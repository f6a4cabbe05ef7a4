use crate::error::{Error, Result};

//===========================================================================//

/// Resamples a `src`x`src` plane to `dst`x`dst` by nearest-neighbor
/// sampling: destination pixel (x, y) copies source pixel
/// (x * src / dst, y * src / dst), rounding down.  Values are copied
/// verbatim, so transparency survives.  Requires `0 < dst <= src` and
/// `pixels.len() == src * src`.
pub fn scale_nearest(pixels: &[u8], src: u32, dst: u32) -> Result<Vec<u8>> {
    let (src, dst) = (src as usize, dst as usize);
    if dst == 0 || dst > src || pixels.len() != src * src {
        return Err(Error::InvalidScale {
            len: pixels.len(),
            src: src as u32,
            dst: dst as u32,
        });
    }
    let mut result = Vec::with_capacity(dst * dst);
    for y in 0..dst {
        let row = &pixels[(y * src / dst) * src..][..src];
        for x in 0..dst {
            result.push(row[x * src / dst]);
        }
    }
    Ok(result)
}

//===========================================================================//


//===========================================================================//
