//! Fault taxonomy.
//!
//! Every variant is fatal: the engine halts and the caller decides whether
//! to reset or surface the report. Each fault carries the address of the
//! offending instruction so a broken ROM can be diagnosed from the report
//! alone.

use std::fmt;

use crate::memory::MAX_PROGRAM_LEN;

/// Fatal interpreter fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    /// The word at `pc` matches no assigned instruction pattern.
    UnknownOpcode { pc: u16, word: u16 },
    /// A call nested deeper than the call stack holds.
    StackOverflow { pc: u16 },
    /// A return executed with no call outstanding.
    StackUnderflow { pc: u16 },
    /// The program image does not fit between the load address and the end
    /// of RAM.
    ProgramTooLarge { len: usize },
}

impl fmt::Display for Chip8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOpcode { pc, word } => {
                write!(f, "unrecognized instruction ${word:04X} at ${pc:03X}")
            }
            Self::StackOverflow { pc } => {
                write!(f, "call stack overflow at ${pc:03X}")
            }
            Self::StackUnderflow { pc } => {
                write!(f, "return with empty call stack at ${pc:03X}")
            }
            Self::ProgramTooLarge { len } => {
                write!(
                    f,
                    "program is {len} bytes, load area holds {MAX_PROGRAM_LEN}"
                )
            }
        }
    }
}

impl std::error::Error for Chip8Error {}
