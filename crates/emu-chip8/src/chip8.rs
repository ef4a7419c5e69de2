//! Top-level CHIP-8 system.
//!
//! Wires the register file, memory, display, keypad, and timers into the
//! fetch-decode-execute engine. Two driving styles:
//!
//! - `run_frame()` called at 60 Hz: applies queued input events, executes
//!   the configured instruction budget, ticks the timers once.
//! - `step()` per instruction: the host paces the timers itself with a
//!   `TimerClock` and `tick_timers()`.
//!
//! A fatal fault (unrecognized instruction, call-stack misuse) halts the
//! engine permanently; `reset()` returns to power-on state with the same
//! program.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{Chip8Config, Quirks};
use crate::cpu::{Cpu, ExecState, Registers};
use crate::display::FrameBuffer;
use crate::error::Chip8Error;
use crate::input::InputQueue;
use crate::keypad::Keypad;
use crate::memory::{Memory, PROGRAM_BASE};
use crate::opcode::Opcode;
use crate::timer::Timers;

/// Result of a single `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was fetched and executed.
    Executed,
    /// The engine is suspended waiting for a key press.
    WaitingForKey,
    /// The engine has halted after a fatal fault.
    Halted,
}

/// CHIP-8 system.
pub struct Chip8 {
    pub(crate) cpu: Cpu,
    pub(crate) memory: Memory,
    pub(crate) display: FrameBuffer,
    pub(crate) keypad: Keypad,
    pub(crate) timers: Timers,
    pub(crate) rng: SmallRng,
    pub(crate) quirks: Quirks,
    instructions_per_frame: u32,
    /// Completed frame counter.
    frame_count: u64,
    /// Executed instruction counter.
    instruction_count: u64,
    /// Timed input event queue for scripted key sequences.
    input_queue: InputQueue,
    /// RAM as of power-on (font plus program), kept for reset.
    boot_image: Memory,
    rng_seed: Option<u64>,
}

impl Chip8 {
    /// Create a machine from the given configuration.
    ///
    /// Fails if the program image does not fit in RAM.
    pub fn new(config: &Chip8Config) -> Result<Self, Chip8Error> {
        let mut memory = Memory::new();
        memory.load_program(&config.program)?;
        debug!(
            "loaded {} byte program at ${PROGRAM_BASE:03X}",
            config.program.len()
        );

        Ok(Self {
            cpu: Cpu::new(),
            boot_image: memory.clone(),
            memory,
            display: FrameBuffer::new(),
            keypad: Keypad::new(),
            timers: Timers::new(),
            rng: seed_rng(config.rng_seed),
            quirks: config.quirks,
            instructions_per_frame: config.instructions_per_frame,
            frame_count: 0,
            instruction_count: 0,
            input_queue: InputQueue::new(),
            rng_seed: config.rng_seed,
        })
    }

    /// Execute one fetch-decode-execute cycle.
    ///
    /// While suspended on a key-wait this polls the keypad instead of
    /// fetching. Once halted it does nothing until `reset()`. A fatal
    /// fault halts the engine and is returned to the caller.
    pub fn step(&mut self) -> Result<StepOutcome, Chip8Error> {
        match self.cpu.state {
            ExecState::Halted => return Ok(StepOutcome::Halted),
            ExecState::WaitingForKey { dest, seen } => {
                return Ok(self.poll_waiting_key(dest, seen));
            }
            ExecState::Running => {}
        }

        let pc = self.cpu.pc;
        let word = self.memory.read_word(pc);
        self.cpu.advance_pc();

        let Some(op) = Opcode::decode(word) else {
            return Err(self.halt(Chip8Error::UnknownOpcode { pc, word }));
        };
        if let Err(err) = self.execute(pc, op) {
            return Err(self.halt(err));
        }
        self.instruction_count += 1;

        if matches!(self.cpu.state, ExecState::WaitingForKey { .. }) {
            Ok(StepOutcome::WaitingForKey)
        } else {
            Ok(StepOutcome::Executed)
        }
    }

    /// Run one frame: apply due input events, execute the configured
    /// instruction budget, then tick the timers once.
    ///
    /// A host calling this at 60 Hz gets correct timer decay without a
    /// separate clock. Returns the number of instructions executed,
    /// which falls short of the budget when the engine suspends or halts.
    pub fn run_frame(&mut self) -> Result<u32, Chip8Error> {
        self.input_queue.process(self.frame_count, &mut self.keypad);
        self.frame_count += 1;

        let before = self.instruction_count;
        for _ in 0..self.instructions_per_frame {
            // A key-wait can only resolve when new input arrives, and
            // input only changes between frames; a halt is permanent.
            // Either way the rest of the budget is forfeit.
            if self.step()? != StepOutcome::Executed {
                break;
            }
        }
        self.timers.tick();
        Ok((self.instruction_count - before) as u32)
    }

    /// Advance the delay and sound timers by one 60 Hz tick.
    ///
    /// `run_frame()` does this itself; hosts driving `step()` call it
    /// for each tick a `TimerClock` reports due.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Return to power-on state, keeping the loaded program.
    ///
    /// Registers, call stack, display, timers, counters, and pending
    /// input events all clear, and a seeded random source restarts its
    /// sequence. Keypad state is left alone: it mirrors whatever the
    /// host input layer last reported.
    pub fn reset(&mut self) {
        self.cpu = Cpu::new();
        self.memory = self.boot_image.clone();
        self.display.clear();
        self.timers = Timers::new();
        self.rng = seed_rng(self.rng_seed);
        self.frame_count = 0;
        self.instruction_count = 0;
        self.input_queue = InputQueue::new();
        debug!("reset to power-on state");
    }

    /// The display framebuffer.
    #[must_use]
    pub fn display(&self) -> &FrameBuffer {
        &self.display
    }

    /// Read-only view of RAM.
    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Snapshot of the register file.
    #[must_use]
    pub fn registers(&self) -> Registers {
        self.cpu.registers()
    }

    /// Call-stack nesting depth.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.cpu.stack_depth()
    }

    /// Current delay timer value.
    #[must_use]
    pub fn delay_timer(&self) -> u8 {
        self.timers.delay()
    }

    /// Current sound timer value.
    #[must_use]
    pub fn sound_timer(&self) -> u8 {
        self.timers.sound()
    }

    /// Whether the buzzer should currently sound.
    #[must_use]
    pub fn is_sound_audible(&self) -> bool {
        self.timers.is_sound_audible()
    }

    /// Set or clear a keypad key (index 0-F).
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keypad.set_key(key, pressed);
    }

    /// Whether a keypad key is currently down.
    #[must_use]
    pub fn is_key_down(&self, key: u8) -> bool {
        self.keypad.is_down(key)
    }

    /// Release every keypad key.
    pub fn release_all_keys(&mut self) {
        self.keypad.release_all();
    }

    /// Mutable reference to the timed input queue.
    pub fn input_queue(&mut self) -> &mut InputQueue {
        &mut self.input_queue
    }

    /// Completed frame count.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Executed instruction count.
    #[must_use]
    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    /// Whether the engine halted on a fatal fault.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.cpu.state == ExecState::Halted
    }

    /// Whether the engine is suspended waiting for a key press.
    #[must_use]
    pub fn is_waiting_for_key(&self) -> bool {
        matches!(self.cpu.state, ExecState::WaitingForKey { .. })
    }

    /// Record the fault, stop the engine, and hand the fault back.
    fn halt(&mut self, err: Chip8Error) -> Chip8Error {
        warn!("halting: {err}");
        self.cpu.state = ExecState::Halted;
        err
    }

    fn poll_waiting_key(&mut self, dest: u8, seen: u16) -> StepOutcome {
        let down = self.keypad.down_mask();
        let fresh = down & !seen;
        if fresh == 0 {
            // Remember the current mask so a release-then-press counts
            // as a fresh press at the next poll.
            self.cpu.state = ExecState::WaitingForKey { dest, seen: down };
            return StepOutcome::WaitingForKey;
        }

        let key = fresh.trailing_zeros() as u8;
        debug!("key {key:X} pressed, resuming");
        self.cpu.set_v(dest, key);
        self.cpu.advance_pc();
        self.cpu.state = ExecState::Running;
        StepOutcome::Executed
    }
}

fn seed_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
