//! Program-level tests for the CHIP-8 machine.
//!
//! Each test hand-assembles a small program as a byte array and drives
//! the machine through its public API the way a host would: `run_frame()`
//! at 60 Hz, or `step()` with a `TimerClock`.

use emu_chip8::{Chip8, Chip8Config, Quirks, TICK_PERIOD, TimerClock};

fn make_chip8(program: &[u8]) -> Chip8 {
    make_chip8_with(program, Quirks::default())
}

fn make_chip8_with(program: &[u8], quirks: Quirks) -> Chip8 {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Chip8Config {
        program: program.to_vec(),
        quirks,
        rng_seed: Some(42),
        ..Chip8Config::default()
    };
    Chip8::new(&config).expect("program fits in memory")
}

#[test]
fn test_clear_screen_program() {
    // $200: 00E0  clear
    // $202: 1202  spin
    let mut chip8 = make_chip8(&[0x00, 0xE0, 0x12, 0x02]);

    chip8.run_frame().expect("frame runs");
    chip8.run_frame().expect("frame runs");

    assert!(chip8.display().is_blank());
    assert_eq!(chip8.frame_count(), 2);
    assert_eq!(chip8.instruction_count(), 22);
}

#[test]
fn test_arithmetic_accumulates() {
    // $200: 6305  v3 = 5
    // $202: 730A  v3 += 10
    // $204: 1204  spin
    let mut chip8 = make_chip8(&[0x63, 0x05, 0x73, 0x0A, 0x12, 0x04]);

    chip8.run_frame().expect("frame runs");
    assert_eq!(chip8.registers().v[3], 15);
    assert_eq!(chip8.registers().v[0xF], 0, "immediate add sets no flag");
}

#[test]
fn test_font_glyph_renders() {
    // $200: 600A  v0 = $A
    // $202: F029  i = font address of glyph v0
    // $204: 6105  v1 = 5
    // $206: 6203  v2 = 3
    // $208: D125  draw 5 rows at (v1, v2)
    // $20A: 120A  spin
    let mut chip8 = make_chip8(&[
        0x60, 0x0A, 0xF0, 0x29, 0x61, 0x05, 0x62, 0x03, 0xD1, 0x25, 0x12, 0x0A,
    ]);

    chip8.run_frame().expect("frame runs");

    // Glyph A is F0 90 F0 90 90: 14 lit pixels.
    assert_eq!(chip8.display().lit_count(), 14);
    assert!(chip8.display().pixel(5, 3), "top-left of the glyph");
    assert!(chip8.display().pixel(8, 3), "top row spans four columns");
    assert!(!chip8.display().pixel(9, 3), "dark past the glyph");
    assert_eq!(chip8.registers().v[0xF], 0, "fresh draw, no collision");
}

#[test]
fn test_sprite_collision_round_trip() {
    // $200: 6000  v0 = 0
    // $202: F029  i = font address of glyph 0
    // $204: 6104  v1 = 4
    // $206: 6202  v2 = 2
    // $208: D125  draw
    // $20A: D125  draw again, erasing everything
    // $20C: 120C  spin
    let mut chip8 = make_chip8(&[
        0x60, 0x00, 0xF0, 0x29, 0x61, 0x04, 0x62, 0x02, 0xD1, 0x25, 0xD1, 0x25,
        0x12, 0x0C,
    ]);

    chip8.run_frame().expect("frame runs");

    assert_eq!(chip8.registers().v[0xF], 1, "second draw collides");
    assert!(chip8.display().is_blank(), "XOR erased the glyph");
}

#[test]
fn test_shift_quirk_selects_source() {
    // $200: 6103  v1 = 3
    // $202: 6206  v2 = 6
    // $204: 8126  v1 = source >> 1
    // $206: 1206  spin
    let program = [0x61, 0x03, 0x62, 0x06, 0x81, 0x26, 0x12, 0x06];

    let mut original = make_chip8(&program);
    original.run_frame().expect("frame runs");
    assert_eq!(original.registers().v[1], 3, "shifted v2");
    assert_eq!(original.registers().v[0xF], 0);
    assert_eq!(original.registers().v[2], 6, "source untouched");

    let mut modern = make_chip8_with(
        &program,
        Quirks {
            shift_reads_vy: false,
            ..Quirks::default()
        },
    );
    modern.run_frame().expect("frame runs");
    assert_eq!(modern.registers().v[1], 1, "shifted v1 in place");
    assert_eq!(modern.registers().v[0xF], 1);
}

#[test]
fn test_bulk_transfer_quirk_moves_i() {
    // $200: A300  i = $300
    // $202: 6007  v0 = 7
    // $204: F055  store v0..=v0 at i
    // $206: 1206  spin
    let program = [0xA3, 0x00, 0x60, 0x07, 0xF0, 0x55, 0x12, 0x06];

    let mut original = make_chip8(&program);
    original.run_frame().expect("frame runs");
    assert_eq!(original.memory().read(0x300), 7);
    assert_eq!(original.registers().i, 0x301);

    let mut modern = make_chip8_with(
        &program,
        Quirks {
            bulk_transfer_advances_i: false,
            ..Quirks::default()
        },
    );
    modern.run_frame().expect("frame runs");
    assert_eq!(modern.memory().read(0x300), 7);
    assert_eq!(modern.registers().i, 0x300);
}

#[test]
fn test_bcd_digits_reload_into_registers() {
    // $200: 607B  v0 = 123
    // $202: A300  i = $300
    // $204: F033  write decimal digits of v0 at i
    // $206: F265  load v0..=v2 from i
    // $208: 1208  spin
    let mut chip8 = make_chip8(&[
        0x60, 0x7B, 0xA3, 0x00, 0xF0, 0x33, 0xF2, 0x65, 0x12, 0x08,
    ]);

    chip8.run_frame().expect("frame runs");

    let regs = chip8.registers();
    assert_eq!(regs.v[..3], [1, 2, 3]);
    assert_eq!(regs.i, 0x303, "load advanced i past the digits");
}

#[test]
fn test_scripted_key_wait() {
    // $200: F00A  wait for key into v0
    // $202: 1202  spin
    let mut chip8 = make_chip8(&[0xF0, 0x0A, 0x12, 0x02]);
    chip8.input_queue().enqueue_press(0x7, 2, 2);

    chip8.run_frame().expect("frame runs");
    chip8.run_frame().expect("frame runs");
    assert!(chip8.is_waiting_for_key(), "no key yet");

    // The press lands at the start of the third frame.
    chip8.run_frame().expect("frame runs");
    assert!(!chip8.is_waiting_for_key());
    assert_eq!(chip8.registers().v[0], 0x7);

    chip8.run_frame().expect("frame runs");
    chip8.run_frame().expect("frame runs");
    assert!(!chip8.is_key_down(0x7), "release event applied");
}

#[test]
fn test_unknown_instruction_halts() {
    // $200: 6001  v0 = 1
    // $202: FFFF  not a CHIP-8 instruction
    let mut chip8 = make_chip8(&[0x60, 0x01, 0xFF, 0xFF]);

    let err = chip8.run_frame().expect_err("fault surfaces");
    assert_eq!(err.to_string(), "unrecognized instruction $FFFF at $202");
    assert!(chip8.is_halted());
    assert_eq!(chip8.instruction_count(), 1);

    // A halted machine burns no further budget.
    assert_eq!(chip8.run_frame(), Ok(0));
}

#[test]
fn test_seeded_random_matches_across_machines() {
    // $200: C0FF  v0 = rand & $FF
    // $202: 1200  loop
    let program = [0xC0, 0xFF, 0x12, 0x00];
    let config = Chip8Config {
        program: program.to_vec(),
        rng_seed: Some(7),
        ..Chip8Config::default()
    };

    let mut first = Chip8::new(&config).expect("program fits");
    let mut second = Chip8::new(&config).expect("program fits");
    for _ in 0..3 {
        first.run_frame().expect("frame runs");
        second.run_frame().expect("frame runs");
        assert_eq!(first.registers().v[0], second.registers().v[0]);
    }
}

#[test]
fn test_sound_goes_quiet_at_one() {
    // $200: 6003  v0 = 3
    // $202: F018  sound = v0
    // $204: 1204  spin
    let mut chip8 = make_chip8(&[0x60, 0x03, 0xF0, 0x18, 0x12, 0x04]);

    chip8.run_frame().expect("frame runs");
    assert_eq!(chip8.sound_timer(), 2);
    assert!(chip8.is_sound_audible());

    chip8.run_frame().expect("frame runs");
    assert_eq!(chip8.sound_timer(), 1);
    assert!(!chip8.is_sound_audible(), "one tick left reads as silence");
}

#[test]
fn test_step_driven_host_paces_timers() {
    // $200: 6005  v0 = 5
    // $202: F015  delay = v0
    // $204: 1204  spin
    let mut chip8 = make_chip8(&[0x60, 0x05, 0xF0, 0x15, 0x12, 0x04]);
    let mut clock = TimerClock::new();

    for _ in 0..3 {
        chip8.step().expect("step runs");
    }
    assert_eq!(chip8.delay_timer(), 5);

    // Host ran fast: half a period elapsed, no tick due yet.
    for _ in 0..clock.advance(TICK_PERIOD / 2) {
        chip8.tick_timers();
    }
    assert_eq!(chip8.delay_timer(), 5);

    // A stall worth three and a half periods catches up in one call.
    for _ in 0..clock.advance(TICK_PERIOD * 3) {
        chip8.tick_timers();
    }
    assert_eq!(chip8.delay_timer(), 2);
}
