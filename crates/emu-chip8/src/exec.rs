//! Instruction semantics.
//!
//! One handler per operation, dispatched from `execute()`. The fetch
//! loop has already advanced the program counter past the instruction,
//! so control flow overwrites it outright and skips advance it one more
//! step. `pc` arrives as the address the instruction was fetched from
//! and feeds fault reports only.

use log::debug;
use rand::Rng;

use crate::chip8::Chip8;
use crate::cpu::ExecState;
use crate::error::Chip8Error;
use crate::memory;
use crate::opcode::Opcode;

/// Flag register index.
const VF: u8 = 0xF;

impl Chip8 {
    /// Execute one decoded instruction.
    pub(crate) fn execute(&mut self, pc: u16, op: Opcode) -> Result<(), Chip8Error> {
        match op {
            Opcode::ClearScreen => self.display.clear(),
            Opcode::Return => self.op_return(pc)?,
            Opcode::Jump { nnn } => self.cpu.pc = nnn,
            Opcode::Call { nnn } => self.op_call(pc, nnn)?,
            Opcode::SkipEqImm { x, nn } => {
                if self.cpu.v(x) == nn {
                    self.cpu.advance_pc();
                }
            }
            Opcode::SkipNeImm { x, nn } => {
                if self.cpu.v(x) != nn {
                    self.cpu.advance_pc();
                }
            }
            Opcode::SkipEqReg { x, y } => {
                if self.cpu.v(x) == self.cpu.v(y) {
                    self.cpu.advance_pc();
                }
            }
            Opcode::SkipNeReg { x, y } => {
                if self.cpu.v(x) != self.cpu.v(y) {
                    self.cpu.advance_pc();
                }
            }
            Opcode::LoadImm { x, nn } => self.cpu.set_v(x, nn),
            Opcode::AddImm { x, nn } => {
                let value = self.cpu.v(x).wrapping_add(nn);
                self.cpu.set_v(x, value);
            }
            Opcode::Move { x, y } => self.cpu.set_v(x, self.cpu.v(y)),
            Opcode::Or { x, y } => self.cpu.set_v(x, self.cpu.v(x) | self.cpu.v(y)),
            Opcode::And { x, y } => self.cpu.set_v(x, self.cpu.v(x) & self.cpu.v(y)),
            Opcode::Xor { x, y } => self.cpu.set_v(x, self.cpu.v(x) ^ self.cpu.v(y)),
            Opcode::Add { x, y } => self.op_add(x, y),
            Opcode::Sub { x, y } => self.op_sub(x, y),
            Opcode::SubFrom { x, y } => self.op_sub_from(x, y),
            Opcode::ShiftRight { x, y } => self.op_shift_right(x, y),
            Opcode::ShiftLeft { x, y } => self.op_shift_left(x, y),
            Opcode::LoadI { nnn } => self.cpu.i = nnn,
            Opcode::JumpV0 { nnn } => {
                self.cpu.pc = nnn.wrapping_add(u16::from(self.cpu.v(0))) & 0x0FFF;
            }
            Opcode::Random { x, nn } => {
                let byte: u8 = self.rng.random();
                self.cpu.set_v(x, byte & nn);
            }
            Opcode::Draw { x, y, n } => self.op_draw(x, y, n),
            Opcode::SkipKeyDown { x } => {
                if self.keypad.is_down(self.cpu.v(x) & 0x0F) {
                    self.cpu.advance_pc();
                }
            }
            Opcode::SkipKeyUp { x } => {
                if !self.keypad.is_down(self.cpu.v(x) & 0x0F) {
                    self.cpu.advance_pc();
                }
            }
            Opcode::ReadDelay { x } => self.cpu.set_v(x, self.timers.delay()),
            Opcode::WaitKey { x } => self.op_wait_key(pc, x),
            Opcode::SetDelay { x } => self.timers.set_delay(self.cpu.v(x)),
            Opcode::SetSound { x } => self.timers.set_sound(self.cpu.v(x)),
            Opcode::AddI { x } => {
                self.cpu.i = self.cpu.i.wrapping_add(u16::from(self.cpu.v(x))) & 0x0FFF;
            }
            Opcode::FontAddr { x } => self.cpu.i = memory::glyph_addr(self.cpu.v(x)),
            Opcode::StoreBcd { x } => self.op_store_bcd(x),
            Opcode::StoreRegs { x } => self.op_store_regs(x),
            Opcode::LoadRegs { x } => self.op_load_regs(x),
        }
        Ok(())
    }

    fn op_return(&mut self, pc: u16) -> Result<(), Chip8Error> {
        self.cpu.pc = self
            .cpu
            .stack
            .pop()
            .ok_or(Chip8Error::StackUnderflow { pc })?;
        Ok(())
    }

    fn op_call(&mut self, pc: u16, nnn: u16) -> Result<(), Chip8Error> {
        // The return address is the already-advanced program counter.
        if !self.cpu.stack.push(self.cpu.pc) {
            return Err(Chip8Error::StackOverflow { pc });
        }
        self.cpu.pc = nnn;
        Ok(())
    }

    fn op_add(&mut self, x: u8, y: u8) {
        let (value, carry) = self.cpu.v(x).overflowing_add(self.cpu.v(y));
        self.cpu.set_v(x, value);
        // Flag written last: vF as destination keeps the flag, not the
        // result.
        self.cpu.set_v(VF, u8::from(carry));
    }

    fn op_sub(&mut self, x: u8, y: u8) {
        let (value, borrow) = self.cpu.v(x).overflowing_sub(self.cpu.v(y));
        self.cpu.set_v(x, value);
        self.cpu.set_v(VF, u8::from(!borrow));
    }

    fn op_sub_from(&mut self, x: u8, y: u8) {
        let (value, borrow) = self.cpu.v(y).overflowing_sub(self.cpu.v(x));
        self.cpu.set_v(x, value);
        self.cpu.set_v(VF, u8::from(!borrow));
    }

    fn op_shift_right(&mut self, x: u8, y: u8) {
        let source = if self.quirks.shift_reads_vy {
            self.cpu.v(y)
        } else {
            self.cpu.v(x)
        };
        self.cpu.set_v(x, source >> 1);
        self.cpu.set_v(VF, source & 1);
    }

    fn op_shift_left(&mut self, x: u8, y: u8) {
        let source = if self.quirks.shift_reads_vy {
            self.cpu.v(y)
        } else {
            self.cpu.v(x)
        };
        self.cpu.set_v(x, source << 1);
        self.cpu.set_v(VF, source >> 7);
    }

    fn op_draw(&mut self, x: u8, y: u8, n: u8) {
        // Tallest sprite is 15 rows; read them through the masked
        // accessors so a sprite straddling the top of RAM wraps.
        let mut sprite = [0u8; 15];
        let rows = usize::from(n);
        for (offset, row) in sprite[..rows].iter_mut().enumerate() {
            *row = self.memory.read(self.cpu.i.wrapping_add(offset as u16));
        }

        let collision = self
            .display
            .draw_sprite(self.cpu.v(x), self.cpu.v(y), &sprite[..rows]);
        self.cpu.set_v(VF, u8::from(collision));
    }

    fn op_wait_key(&mut self, pc: u16, x: u8) {
        debug!("waiting for key press into v{x:X}");
        // Hold the program counter on this instruction while suspended.
        self.cpu.pc = pc;
        self.cpu.state = ExecState::WaitingForKey {
            dest: x,
            seen: self.keypad.down_mask(),
        };
    }

    fn op_store_bcd(&mut self, x: u8) {
        let value = self.cpu.v(x);
        let i = self.cpu.i;
        self.memory.write(i, value / 100);
        self.memory.write(i.wrapping_add(1), value / 10 % 10);
        self.memory.write(i.wrapping_add(2), value % 10);
    }

    fn op_store_regs(&mut self, x: u8) {
        for offset in 0..=u16::from(x) {
            let value = self.cpu.v(offset as u8);
            self.memory.write(self.cpu.i.wrapping_add(offset), value);
        }
        self.finish_bulk_transfer(x);
    }

    fn op_load_regs(&mut self, x: u8) {
        for offset in 0..=u16::from(x) {
            let value = self.memory.read(self.cpu.i.wrapping_add(offset));
            self.cpu.set_v(offset as u8, value);
        }
        self.finish_bulk_transfer(x);
    }

    fn finish_bulk_transfer(&mut self, x: u8) {
        if self.quirks.bulk_transfer_advances_i {
            self.cpu.i = self.cpu.i.wrapping_add(u16::from(x) + 1) & 0x0FFF;
        }
    }
}
