//! Delay and sound timers.
//!
//! Two 8-bit counters decrement together toward zero at 60 Hz. Programs
//! read and write the delay timer for pacing; the sound timer is
//! write-only and drives the buzzer. The original hardware never sounded
//! the buzzer for a value of 1 (one tick is too short to gate the tone),
//! so audibility starts at 2.

/// Lowest sound-timer value that turns the buzzer on.
pub const SOUND_AUDIBLE_MIN: u8 = 2;

/// The two 60 Hz countdown timers.
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self { delay: 0, sound: 0 }
    }

    /// Advance both timers by one 60 Hz tick.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    #[must_use]
    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    #[must_use]
    pub fn sound(&self) -> u8 {
        self.sound
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }

    /// Whether the buzzer should currently sound.
    #[must_use]
    pub fn is_sound_audible(&self) -> bool {
        self.sound >= SOUND_AUDIBLE_MIN
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
