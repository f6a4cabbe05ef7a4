//===========================================================================//

/// The two bit depths found inside a 4bpp icon bitmap: the packed color
/// (XOR) plane and the 1-bit transparency (AND) plane.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BmpDepth {
    One,
    Four,
}

impl BmpDepth {
    pub(crate) fn from_bits_per_pixel(
        bits_per_pixel: u16,
    ) -> Option<BmpDepth> {
        match bits_per_pixel {
            1 => Some(BmpDepth::One),
            4 => Some(BmpDepth::Four),
            _ => None,
        }
    }

    pub(crate) fn bits_per_pixel(&self) -> u16 {
        match *self {
            BmpDepth::One => 1,
            BmpDepth::Four => 4,
        }
    }

    /// Palette entries assumed when the header's colors-used field is zero.
    pub(crate) fn num_colors(&self) -> usize {
        match *self {
            BmpDepth::One => 2,
            BmpDepth::Four => 16,
        }
    }

    /// Bytes of pixel data in one row, before padding.
    pub(crate) fn row_data_size(&self, width: usize) -> usize {
        (width * (self.bits_per_pixel() as usize) + 7) / 8
    }

    /// Bytes from the start of one row to the start of the next; rows are
    /// padded to a multiple of four bytes.
    pub(crate) fn row_stride(&self, width: usize) -> usize {
        (self.row_data_size(width) + 3) & !3
    }
}

//===========================================================================//


//===========================================================================//
