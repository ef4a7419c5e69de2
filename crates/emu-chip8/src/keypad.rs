//! 16-key hexadecimal keypad.
//!
//! Keys 0-F held as a down/up bitmask. The host input layer owns the
//! mapping from physical keys to indices and reports transitions here;
//! the interpreter only ever reads the state.

/// Number of keypad keys.
pub const NUM_KEYS: usize = 16;

/// Keypad state: bit N set = key N down.
pub struct Keypad {
    keys: u16,
}

impl Keypad {
    #[must_use]
    pub fn new() -> Self {
        Self { keys: 0 }
    }

    /// Set or clear a key. `key` is the keypad index 0-F; out-of-range
    /// indices are ignored.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        if usize::from(key) < NUM_KEYS {
            if pressed {
                self.keys |= 1 << key;
            } else {
                self.keys &= !(1 << key);
            }
        }
    }

    /// Whether `key` is currently down. Out-of-range indices read as up.
    #[must_use]
    pub fn is_down(&self, key: u8) -> bool {
        usize::from(key) < NUM_KEYS && self.keys & (1 << key) != 0
    }

    /// Bitmask of all currently-down keys.
    #[must_use]
    pub fn down_mask(&self) -> u16 {
        self.keys
    }

    /// Release every key.
    pub fn release_all(&mut self) {
        self.keys = 0;
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}
