//! Saturating intensity raster.

/// Grayscale raster of saturating `u8` counters, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Maximum counter value.
    pub const MAX_VALUE: u8 = u8::MAX;

    /// Create a zeroed raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wrap row-major pixel data. Returns `None` if the length does not match.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (width.checked_mul(height) == Some(data.len())).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Counter at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Overwrite the counter at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Add one contribution at `(row, col)`, saturating at 255.
    ///
    /// Returns false (and changes nothing) if the pixel is out of bounds.
    #[inline]
    pub fn increment(&mut self, row: usize, col: usize) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.data[i] = self.data[i].saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Pixel data, row-major.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.data.chunks(self.width.max(1))
    }

    /// Number of pixels at the saturation limit.
    pub fn saturated_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == Self::MAX_VALUE).count()
    }

    /// Number of pixels with any contribution.
    pub fn lit_count(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0).count()
    }
}
