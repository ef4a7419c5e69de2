//! Register file and execution state.

use crate::memory::PROGRAM_BASE;
use crate::stack::CallStack;

/// Execution state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    /// Fetching and executing normally.
    Running,
    /// Suspended on a key-wait instruction until a fresh key press.
    ///
    /// `dest` is the register that receives the key index; `seen` is the
    /// keypad mask at the last poll, used to detect up→down transitions.
    WaitingForKey { dest: u8, seen: u16 },
    /// Stopped after a fatal fault; only a reset restarts execution.
    Halted,
}

/// Register snapshot for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// General registers v0-vF. vF doubles as the arithmetic flag.
    pub v: [u8; 16],
    /// Address register (12 bits used).
    pub i: u16,
    /// Program counter (12 bits used).
    pub pc: u16,
}

/// CPU state: register file, call stack, and execution mode.
pub struct Cpu {
    pub(crate) v: [u8; 16],
    pub(crate) i: u16,
    pub(crate) pc: u16,
    pub(crate) stack: CallStack,
    pub(crate) state: ExecState,
}

impl Cpu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_BASE,
            stack: CallStack::new(),
            state: ExecState::Running,
        }
    }

    /// Snapshot the register file.
    #[must_use]
    pub fn registers(&self) -> Registers {
        Registers {
            v: self.v,
            i: self.i,
            pc: self.pc,
        }
    }

    /// Call-stack nesting depth.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub(crate) fn v(&self, x: u8) -> u8 {
        self.v[usize::from(x)]
    }

    pub(crate) fn set_v(&mut self, x: u8, value: u8) {
        self.v[usize::from(x)] = value;
    }

    /// Advance the program counter by one instruction (masked to 12 bits).
    pub(crate) fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(2) & 0x0FFF;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
