//! CHIP-8 virtual machine interpreter.
//!
//! CHIP-8 is the 1977 bytecode language of the COSMAC VIP: 4 KiB of RAM,
//! sixteen 8-bit registers, a 12-bit address register, a 64×32 XOR-drawn
//! display, a 16-key hex keypad, and two timers decaying at 60 Hz.
//! Programs load at $200; the builtin hex font occupies $050-$09F.
//!
//! This crate is the core machine only; a host owns the event loop,
//! rendering, and audio. Drive it either by calling [`Chip8::run_frame`]
//! at 60 Hz, or by calling [`Chip8::step`] per instruction with a
//! [`TimerClock`] pacing the timer ticks.

mod chip8;
mod clock;
mod config;
mod cpu;
pub mod display;
mod error;
mod exec;
pub mod input;
mod keypad;
pub mod memory;
mod opcode;
mod stack;
mod timer;

pub use chip8::{Chip8, StepOutcome};
pub use clock::{TICK_PERIOD, TIMER_HZ, TimerClock};
pub use config::{Chip8Config, DEFAULT_INSTRUCTIONS_PER_FRAME, Quirks};
pub use cpu::Registers;
pub use display::FrameBuffer;
pub use error::Chip8Error;
pub use input::{InputQueue, KeyEvent};
pub use keypad::{Keypad, NUM_KEYS};
pub use memory::{FONT_BASE, MAX_PROGRAM_LEN, MEMORY_SIZE, Memory, PROGRAM_BASE};
pub use opcode::Opcode;
pub use stack::STACK_DEPTH;
pub use timer::SOUND_AUDIBLE_MIN;
