//! Timed keypad input for scripted sequences.
//!
//! Events carry the frame number at which they apply; `run_frame()`
//! drains the due events into the keypad before executing. Integration
//! tests script the key-wait and key-skip instructions this way, and a
//! host can use the same queue to replay recorded input.

use std::collections::VecDeque;

use crate::keypad::Keypad;

/// A timed key event.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    /// Frame number at which this event fires.
    pub frame: u64,
    /// Keypad index 0-F.
    pub key: u8,
    /// True = press, false = release.
    pub pressed: bool,
}

/// Timed event queue for scripted key sequences.
///
/// Events are kept sorted by frame and applied at the start of each frame.
pub struct InputQueue {
    events: VecDeque<KeyEvent>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Enqueue a raw key event.
    pub fn push(&mut self, event: KeyEvent) {
        let pos = self
            .events
            .iter()
            .position(|e| e.frame > event.frame)
            .unwrap_or(self.events.len());
        self.events.insert(pos, event);
    }

    /// Enqueue a key press at `at_frame` and its release `hold_frames`
    /// later.
    pub fn enqueue_press(&mut self, key: u8, at_frame: u64, hold_frames: u64) {
        self.push(KeyEvent {
            frame: at_frame,
            key,
            pressed: true,
        });
        self.push(KeyEvent {
            frame: at_frame + hold_frames,
            key,
            pressed: false,
        });
    }

    /// Apply every event due at or before `frame` to the keypad.
    pub fn process(&mut self, frame: u64, keypad: &mut Keypad) {
        while self.events.front().is_some_and(|e| e.frame <= frame) {
            if let Some(event) = self.events.pop_front() {
                keypad.set_key(event.key, event.pressed);
            }
        }
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
