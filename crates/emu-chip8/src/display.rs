//! 64×32 monochrome framebuffer.
//!
//! Sprites blit by XOR, so drawing a sprite twice in place erases it.
//! The draw anchor wraps modulo the screen size; individual pixels that
//! would fall past the right or bottom edge clip instead of wrapping.
//! Each draw reports whether it turned any lit pixel off; programs use
//! that collision flag for hit detection.
//!
//! Rows are stored as one `u64` mask each, column 0 at bit 63, so a row
//! mask printed in binary reads left-to-right like the screen.

/// Screen width in pixels.
pub const WIDTH: usize = 64;

/// Screen height in pixels.
pub const HEIGHT: usize = 32;

/// 1-bit-per-pixel framebuffer.
///
/// Host renderers poll `pixel()` or `rows()` after each frame and scale
/// the result however they like; nothing here touches a real display.
pub struct FrameBuffer {
    rows: [u64; HEIGHT],
}

impl FrameBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self { rows: [0; HEIGHT] }
    }

    /// Clear the screen to all dark.
    pub fn clear(&mut self) {
        self.rows = [0; HEIGHT];
    }

    /// Whether the pixel at (x, y) is lit. Out-of-range reads are dark.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.rows[y] >> (63 - x) & 1 != 0
    }

    /// Row bitmasks, one per scanline, column 0 at bit 63.
    #[must_use]
    pub fn rows(&self) -> &[u64; HEIGHT] {
        &self.rows
    }

    /// Whether every pixel is dark.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// XOR-blit a sprite (one byte per row, MSB leftmost) at (x, y).
    ///
    /// The anchor wraps modulo 64×32; pixels past the right or bottom
    /// edge clip. Returns true if any lit pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let x = usize::from(x) % WIDTH;
        let y = usize::from(y) % HEIGHT;
        let mut collision = false;

        for (dy, &byte) in sprite.iter().enumerate() {
            let row = y + dy;
            if row >= HEIGHT {
                break; // clip at the bottom edge
            }
            // Shift the byte into column position; bits pushed past bit 0
            // fall off, which clips the right edge.
            let mask = (u64::from(byte) << 56) >> x;
            if self.rows[row] & mask != 0 {
                collision = true;
            }
            self.rows[row] ^= mask;
        }
        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
