//! RGBA8 output of a field generation run

/// Bytes per pixel (grayscale in R, G and B, opaque alpha)
pub const CHANNELS: usize = 4;

/// Square RGBA8 pixel buffer.
///
/// Pixels are stored in generation order: the x coordinate is the outer
/// (row) index and y the inner one, so pixel `(x, y)` starts at byte
/// `(x * grid_size + y) * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    grid_size: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub(crate) fn from_raw(grid_size: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), Self::byte_len(grid_size));
        Self { grid_size, data }
    }

    /// Number of bytes needed for a `grid_size` x `grid_size` buffer
    pub fn byte_len(grid_size: u32) -> usize {
        let side = grid_size as usize;
        side * side * CHANNELS
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// RGBA of pixel `(x, y)`, or `None` outside the grid
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }
        let start = (x as usize * self.grid_size as usize + y as usize) * CHANNELS;
        let px = &self.data[start..start + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
