//! Machine configuration.

/// Default instruction budget per 60 Hz frame.
///
/// 11 instructions per frame ≈ 660 per second, a comfortable middle of
/// the speed band period interpreters ran at. Games tuned for faster
/// hosts can raise it per instance.
pub const DEFAULT_INSTRUCTIONS_PER_FRAME: u32 = 11;

/// Behaviour switches where interpreter lineages disagree.
///
/// Defaults match the original RCA interpreter. Many later ROMs assume
/// the flipped settings, which the HP48-era interpreters popularized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY6/8XYE shift vY into vX (original behaviour). When false, vX
    /// shifts in place and vY is ignored.
    pub shift_reads_vy: bool,
    /// FX55/FX65 leave i pointing past the transferred block (original
    /// behaviour). When false, i is unchanged.
    pub bulk_transfer_advances_i: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Self {
            shift_reads_vy: true,
            bulk_transfer_advances_i: true,
        }
    }
}

/// Configuration for creating a machine instance.
#[derive(Debug, Clone)]
pub struct Chip8Config {
    /// Program image, loaded at $200. At most 3,584 bytes.
    pub program: Vec<u8>,
    /// Instructions executed per 60 Hz frame.
    pub instructions_per_frame: u32,
    /// Compatibility switches.
    pub quirks: Quirks,
    /// Fixed seed for the CXNN random source, for reproducible runs.
    /// `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for Chip8Config {
    fn default() -> Self {
        Self {
            program: Vec::new(),
            instructions_per_frame: DEFAULT_INSTRUCTIONS_PER_FRAME,
            quirks: Quirks::default(),
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_interpreter() {
        let quirks = Quirks::default();
        assert!(quirks.shift_reads_vy);
        assert!(quirks.bulk_transfer_advances_i);
    }

    #[test]
    fn default_config_runs_at_period_speed() {
        let config = Chip8Config::default();
        assert_eq!(config.instructions_per_frame, 11);
        assert!(config.rng_seed.is_none());
    }
}
