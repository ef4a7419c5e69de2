//! Instruction decoding.
//!
//! Every instruction is one big-endian 16-bit word. The top nibble
//! selects a group; the remaining twelve bits carry operands, with the
//! $0/$8/$E/$F groups disambiguated by their low byte or nibble. `decode`
//! maps each assigned pattern to a variant carrying its operands already
//! extracted, so execution never re-parses the word. Anything else
//! decodes to `None` and the engine reports it as a fatal fault.
//!
//! The 0NNN machine-code escape is deliberately left unassigned: it
//! called into the host 1802 processor on the original machine, there is
//! no host processor here, and faulting on it catches wild jumps early.

/// A decoded instruction.
///
/// `x` and `y` are register indices, `n` a nibble literal, `nn` a byte
/// literal, `nnn` a 12-bit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// 00E0: clear the display.
    ClearScreen,
    /// 00EE: return from subroutine.
    Return,
    /// 1NNN: jump.
    Jump { nnn: u16 },
    /// 2NNN: call subroutine.
    Call { nnn: u16 },
    /// 3XNN: skip next instruction if vX == NN.
    SkipEqImm { x: u8, nn: u8 },
    /// 4XNN: skip next instruction if vX != NN.
    SkipNeImm { x: u8, nn: u8 },
    /// 5XY0: skip next instruction if vX == vY.
    SkipEqReg { x: u8, y: u8 },
    /// 6XNN: vX = NN.
    LoadImm { x: u8, nn: u8 },
    /// 7XNN: vX += NN, no carry flag.
    AddImm { x: u8, nn: u8 },
    /// 8XY0: vX = vY.
    Move { x: u8, y: u8 },
    /// 8XY1: vX |= vY.
    Or { x: u8, y: u8 },
    /// 8XY2: vX &= vY.
    And { x: u8, y: u8 },
    /// 8XY3: vX ^= vY.
    Xor { x: u8, y: u8 },
    /// 8XY4: vX += vY, vF = carry.
    Add { x: u8, y: u8 },
    /// 8XY5: vX -= vY, vF = no-borrow.
    Sub { x: u8, y: u8 },
    /// 8XY6: shift right one bit, vF = bit shifted out.
    ShiftRight { x: u8, y: u8 },
    /// 8XY7: vX = vY - vX, vF = no-borrow.
    SubFrom { x: u8, y: u8 },
    /// 8XYE: shift left one bit, vF = bit shifted out.
    ShiftLeft { x: u8, y: u8 },
    /// 9XY0: skip next instruction if vX != vY.
    SkipNeReg { x: u8, y: u8 },
    /// ANNN: i = NNN.
    LoadI { nnn: u16 },
    /// BNNN: jump to NNN + v0.
    JumpV0 { nnn: u16 },
    /// CXNN: vX = random byte & NN.
    Random { x: u8, nn: u8 },
    /// DXYN: draw the N-row sprite at i to (vX, vY), vF = collision.
    Draw { x: u8, y: u8, n: u8 },
    /// EX9E: skip next instruction if key vX is down.
    SkipKeyDown { x: u8 },
    /// EXA1: skip next instruction if key vX is up.
    SkipKeyUp { x: u8 },
    /// FX07: vX = delay timer.
    ReadDelay { x: u8 },
    /// FX0A: suspend until a key press, store the key index in vX.
    WaitKey { x: u8 },
    /// FX15: delay timer = vX.
    SetDelay { x: u8 },
    /// FX18: sound timer = vX.
    SetSound { x: u8 },
    /// FX1E: i += vX, no flag.
    AddI { x: u8 },
    /// FX29: i = font glyph address for digit vX.
    FontAddr { x: u8 },
    /// FX33: three BCD digits of vX to memory at i, i+1, i+2.
    StoreBcd { x: u8 },
    /// FX55: store v0..=vX to memory starting at i.
    StoreRegs { x: u8 },
    /// FX65: load v0..=vX from memory starting at i.
    LoadRegs { x: u8 },
}

impl Opcode {
    /// Decode one instruction word, or `None` for an unassigned pattern.
    #[must_use]
    pub fn decode(word: u16) -> Option<Self> {
        let x = ((word >> 8) & 0xF) as u8;
        let y = ((word >> 4) & 0xF) as u8;
        let n = (word & 0xF) as u8;
        let nn = (word & 0xFF) as u8;
        let nnn = word & 0xFFF;

        match word >> 12 {
            0x0 => match word {
                0x00E0 => Some(Self::ClearScreen),
                0x00EE => Some(Self::Return),
                _ => None,
            },
            0x1 => Some(Self::Jump { nnn }),
            0x2 => Some(Self::Call { nnn }),
            0x3 => Some(Self::SkipEqImm { x, nn }),
            0x4 => Some(Self::SkipNeImm { x, nn }),
            0x5 if n == 0 => Some(Self::SkipEqReg { x, y }),
            0x6 => Some(Self::LoadImm { x, nn }),
            0x7 => Some(Self::AddImm { x, nn }),
            0x8 => match n {
                0x0 => Some(Self::Move { x, y }),
                0x1 => Some(Self::Or { x, y }),
                0x2 => Some(Self::And { x, y }),
                0x3 => Some(Self::Xor { x, y }),
                0x4 => Some(Self::Add { x, y }),
                0x5 => Some(Self::Sub { x, y }),
                0x6 => Some(Self::ShiftRight { x, y }),
                0x7 => Some(Self::SubFrom { x, y }),
                0xE => Some(Self::ShiftLeft { x, y }),
                _ => None,
            },
            0x9 if n == 0 => Some(Self::SkipNeReg { x, y }),
            0xA => Some(Self::LoadI { nnn }),
            0xB => Some(Self::JumpV0 { nnn }),
            0xC => Some(Self::Random { x, nn }),
            0xD => Some(Self::Draw { x, y, n }),
            0xE => match nn {
                0x9E => Some(Self::SkipKeyDown { x }),
                0xA1 => Some(Self::SkipKeyUp { x }),
                _ => None,
            },
            0xF => match nn {
                0x07 => Some(Self::ReadDelay { x }),
                0x0A => Some(Self::WaitKey { x }),
                0x15 => Some(Self::SetDelay { x }),
                0x18 => Some(Self::SetSound { x }),
                0x1E => Some(Self::AddI { x }),
                0x29 => Some(Self::FontAddr { x }),
                0x33 => Some(Self::StoreBcd { x }),
                0x55 => Some(Self::StoreRegs { x }),
                0x65 => Some(Self::LoadRegs { x }),
                _ => None,
            },
            _ => None,
        }
    }
}
