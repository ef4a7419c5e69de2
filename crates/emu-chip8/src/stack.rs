//! Bounded call stack.
//!
//! Subroutine calls push the return address; returns pop it. The stack
//! holds 16 entries, deeper than any period program nests, and overflow
//! or underflow is surfaced to the engine instead of wrapping around.

/// Call stack capacity in entries.
pub const STACK_DEPTH: usize = 16;

/// Fixed-depth stack of 12-bit return addresses.
pub struct CallStack {
    entries: [u16; STACK_DEPTH],
    depth: usize,
}

impl CallStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: [0; STACK_DEPTH],
            depth: 0,
        }
    }

    /// Push a return address (masked to 12 bits).
    ///
    /// Returns false when the stack is full; the stored entries are left
    /// untouched.
    #[must_use]
    pub fn push(&mut self, addr: u16) -> bool {
        if self.depth == STACK_DEPTH {
            return false;
        }
        self.entries[self.depth] = addr & 0x0FFF;
        self.depth += 1;
        true
    }

    /// Pop the most recent return address, or `None` when empty.
    pub fn pop(&mut self) -> Option<u16> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        Some(self.entries[self.depth])
    }

    /// Number of live entries.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}
