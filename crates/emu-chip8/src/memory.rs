//! 4 KiB address space.
//!
//! All addresses are interpreted modulo 4096 (12 bits), so address
//! arithmetic wraps rather than faulting. The region below $200 belongs to
//! the interpreter by convention and holds the font table; program images
//! load at $200.
//!
//! # Layout
//!
//! | Range     | Contents                     |
//! |-----------|------------------------------|
//! | $000-$04F | unused (interpreter region)  |
//! | $050-$09F | font table (16 × 5 bytes)    |
//! | $0A0-$1FF | unused (interpreter region)  |
//! | $200-$FFF | program and data             |

use crate::error::Chip8Error;

/// Address space size in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Load address for program images.
pub const PROGRAM_BASE: u16 = 0x200;

/// Largest program image that fits between `PROGRAM_BASE` and end of RAM.
pub const MAX_PROGRAM_LEN: usize = MEMORY_SIZE - PROGRAM_BASE as usize;

/// Base address of the font table.
pub const FONT_BASE: u16 = 0x050;

/// Bytes per font glyph: 5 rows, high nibble of each byte used.
pub const FONT_GLYPH_LEN: u16 = 5;

/// Built-in hexadecimal font, glyphs 0-F in order.
const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Address of the font glyph for `digit` (low nibble used).
#[must_use]
pub fn glyph_addr(digit: u8) -> u16 {
    FONT_BASE + u16::from(digit & 0x0F) * FONT_GLYPH_LEN
}

/// 4 KiB RAM behind 12-bit masked accessors.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Create RAM with the font table installed and everything else zeroed.
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let base = FONT_BASE as usize;
        bytes[base..base + FONT.len()].copy_from_slice(&FONT);
        Self { bytes }
    }

    /// Read the byte at `addr` (masked to 12 bits).
    #[must_use]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr & 0x0FFF)]
    }

    /// Read the big-endian 16-bit word at `addr` (each byte masked).
    #[must_use]
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from(self.read(addr)) << 8 | u16::from(self.read(addr.wrapping_add(1)))
    }

    /// Write the byte at `addr` (masked to 12 bits).
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[usize::from(addr & 0x0FFF)] = value;
    }

    /// Copy a program image to `PROGRAM_BASE`.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Chip8Error> {
        if program.len() > MAX_PROGRAM_LEN {
            return Err(Chip8Error::ProgramTooLarge {
                len: program.len(),
            });
        }
        let base = PROGRAM_BASE as usize;
        self.bytes[base..base + program.len()].copy_from_slice(program);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
