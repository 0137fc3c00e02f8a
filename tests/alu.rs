mod common;

use common::{boot, step_program};
use dmg_cpu::{Bus, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

#[test]
fn inc_a_crosses_the_low_nibble_boundary() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0x0F);
    cpu.set_f(0);
    cpu.set_flag(FLAG_C, true);
    let cycles = step_program(&mut cpu, &mut mem, &[0x3C]);
    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.get_flag(FLAG_Z));
    assert!(!cpu.get_flag(FLAG_N));
    assert!(cpu.get_flag(FLAG_H));
    assert!(cpu.get_flag(FLAG_C), "INC must leave carry alone");
    assert_eq!(cycles, 4);
}

#[test]
fn dec_borrows_from_the_high_nibble() {
    let (mut cpu, mut mem) = boot();
    cpu.set_b(0x10);
    cpu.set_f(0);
    let cycles = step_program(&mut cpu, &mut mem, &[0x05]);
    assert_eq!(cpu.b(), 0x0F);
    assert!(!cpu.get_flag(FLAG_Z));
    assert!(cpu.get_flag(FLAG_N));
    assert!(cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_C));
    assert_eq!(cycles, 4);
}

#[test]
fn daa_corrects_bcd_after_a_subtraction() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0x42);
    cpu.set_b(0x09);
    step_program(&mut cpu, &mut mem, &[0x90]); // SUB B
    assert_eq!(cpu.a(), 0x39);
    assert!(cpu.get_flag(FLAG_N));
    assert!(cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_C));

    step_program(&mut cpu, &mut mem, &[0x27]); // DAA
    assert_eq!(cpu.a(), 0x33);
    assert!(cpu.get_flag(FLAG_N));
    assert!(!cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_C));
    assert!(!cpu.get_flag(FLAG_Z));
}

#[test]
fn daa_corrects_bcd_after_an_addition() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0x15);
    cpu.set_b(0x27);
    step_program(&mut cpu, &mut mem, &[0x80]); // ADD A,B -> 0x3C
    assert_eq!(cpu.a(), 0x3C);
    step_program(&mut cpu, &mut mem, &[0x27]); // DAA -> 0x42
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.get_flag(FLAG_C));
    assert!(!cpu.get_flag(FLAG_H));
}

#[test]
fn add_sp_flags_follow_unsigned_low_byte_arithmetic() {
    let (mut cpu, mut mem) = boot();
    cpu.set_sp(0x000F);
    let cycles = step_program(&mut cpu, &mut mem, &[0xE8, 0x01]);
    assert_eq!(cpu.sp(), 0x0010);
    assert!(!cpu.get_flag(FLAG_Z));
    assert!(!cpu.get_flag(FLAG_N));
    assert!(cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_C));
    assert_eq!(cycles, 16);

    cpu.set_sp(0x00FF);
    step_program(&mut cpu, &mut mem, &[0xE8, 0x01]);
    assert_eq!(cpu.sp(), 0x0100);
    assert!(cpu.get_flag(FLAG_H));
    assert!(cpu.get_flag(FLAG_C));
}

#[test]
fn add_sp_most_negative_offset_subtracts_128() {
    let (mut cpu, mut mem) = boot();
    cpu.set_sp(0x0200);
    step_program(&mut cpu, &mut mem, &[0xE8, 0x80]);
    assert_eq!(cpu.sp(), 0x0180);
    // Flags come from (SP & 0xFF) + 0x80 in plain unsigned arithmetic.
    assert!(!cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_C));

    cpu.set_sp(0x0288);
    step_program(&mut cpu, &mut mem, &[0xE8, 0x80]);
    assert_eq!(cpu.sp(), 0x0208);
    assert!(!cpu.get_flag(FLAG_H));
    assert!(cpu.get_flag(FLAG_C));
}

#[test]
fn add_hl_derives_carries_at_bit_11_and_15_and_keeps_z() {
    let (mut cpu, mut mem) = boot();
    cpu.set_hl(0x0FFF);
    cpu.set_bc(0x0001);
    cpu.set_f(FLAG_Z);
    let cycles = step_program(&mut cpu, &mut mem, &[0x09]);
    assert_eq!(cpu.hl(), 0x1000);
    assert!(cpu.get_flag(FLAG_Z), "ADD HL leaves Z untouched");
    assert!(!cpu.get_flag(FLAG_N));
    assert!(cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_C));
    assert_eq!(cycles, 8);

    cpu.set_hl(0x8000);
    step_program(&mut cpu, &mut mem, &[0x29]); // ADD HL,HL
    assert_eq!(cpu.hl(), 0x0000);
    assert!(cpu.get_flag(FLAG_C));
}

#[test]
fn and_sets_half_carry_or_and_xor_clear_it() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0xF0);
    step_program(&mut cpu, &mut mem, &[0xE6, 0x0F]); // AND d8
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.get_flag(FLAG_Z));
    assert!(cpu.get_flag(FLAG_H));
    assert!(!cpu.get_flag(FLAG_N));
    assert!(!cpu.get_flag(FLAG_C));

    cpu.set_a(0xF0);
    step_program(&mut cpu, &mut mem, &[0xF6, 0x0F]); // OR d8
    assert_eq!(cpu.a(), 0xFF);
    assert_eq!(cpu.f(), 0x00);

    step_program(&mut cpu, &mut mem, &[0xEE, 0xFF]); // XOR d8
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.f(), FLAG_Z);
}

#[test]
fn cp_discards_the_result_but_sets_sub_flags() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0x3C);
    let cycles = step_program(&mut cpu, &mut mem, &[0xFE, 0x3C]);
    assert_eq!(cpu.a(), 0x3C);
    assert!(cpu.get_flag(FLAG_Z));
    assert!(cpu.get_flag(FLAG_N));
    assert_eq!(cycles, 8);

    step_program(&mut cpu, &mut mem, &[0xFE, 0x40]);
    assert_eq!(cpu.a(), 0x3C);
    assert!(!cpu.get_flag(FLAG_Z));
    assert!(cpu.get_flag(FLAG_C), "A < operand borrows");
}

#[test]
fn adc_and_sbc_chain_the_carry() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0xFF);
    cpu.set_f(0);
    step_program(&mut cpu, &mut mem, &[0xC6, 0x01]); // ADD d8 -> 0x00, C=1
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.get_flag(FLAG_C));

    step_program(&mut cpu, &mut mem, &[0xCE, 0x00]); // ADC d8 0 + carry
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.get_flag(FLAG_C));

    cpu.set_a(0x00);
    cpu.set_f(FLAG_C);
    step_program(&mut cpu, &mut mem, &[0xDE, 0x00]); // SBC d8 0 + borrow
    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.get_flag(FLAG_C));
}

#[test]
fn alu_memory_operand_goes_through_hl() {
    let (mut cpu, mut mem) = boot();
    cpu.set_hl(0xC000);
    mem.write_byte(0xC000, 0x22);
    cpu.set_a(0x11);
    let cycles = step_program(&mut cpu, &mut mem, &[0x86]); // ADD A,(HL)
    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cycles, 8);
}

#[test]
fn inc_dec_on_memory_operand_read_modify_write() {
    let (mut cpu, mut mem) = boot();
    cpu.set_hl(0xC000);
    mem.write_byte(0xC000, 0xFF);
    let cycles = step_program(&mut cpu, &mut mem, &[0x34]); // INC (HL)
    assert_eq!(mem.read_byte(0xC000), 0x00);
    assert!(cpu.get_flag(FLAG_Z));
    assert!(cpu.get_flag(FLAG_H));
    assert_eq!(cycles, 12);

    let cycles = step_program(&mut cpu, &mut mem, &[0x35]); // DEC (HL)
    assert_eq!(mem.read_byte(0xC000), 0xFF);
    assert!(cpu.get_flag(FLAG_H));
    assert_eq!(cycles, 12);
}

#[test]
fn cpl_scf_and_ccf_manage_the_flag_nibble() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0x35);
    cpu.set_f(0);
    step_program(&mut cpu, &mut mem, &[0x2F]); // CPL
    assert_eq!(cpu.a(), 0xCA);
    assert!(cpu.get_flag(FLAG_N));
    assert!(cpu.get_flag(FLAG_H));

    step_program(&mut cpu, &mut mem, &[0x37]); // SCF
    assert!(cpu.get_flag(FLAG_C));
    assert!(!cpu.get_flag(FLAG_N));
    assert!(!cpu.get_flag(FLAG_H));

    step_program(&mut cpu, &mut mem, &[0x3F]); // CCF
    assert!(!cpu.get_flag(FLAG_C));
    step_program(&mut cpu, &mut mem, &[0x3F]);
    assert!(cpu.get_flag(FLAG_C));
}

#[test]
fn inc_dec_register_pairs_touch_no_flags() {
    let (mut cpu, mut mem) = boot();
    cpu.set_bc(0xFFFF);
    cpu.set_f(0);
    let cycles = step_program(&mut cpu, &mut mem, &[0x03]); // INC BC
    assert_eq!(cpu.bc(), 0x0000);
    assert_eq!(cpu.f(), 0x00);
    assert_eq!(cycles, 8);

    cpu.set_sp(0x0000);
    step_program(&mut cpu, &mut mem, &[0x3B]); // DEC SP
    assert_eq!(cpu.sp(), 0xFFFF);
    assert_eq!(cpu.f(), 0x00);
}

#[test]
fn accumulator_rotates_always_clear_z() {
    let (mut cpu, mut mem) = boot();
    cpu.set_a(0x80);
    cpu.set_f(0);
    step_program(&mut cpu, &mut mem, &[0x17]); // RLA with C=0: A -> 0x00
    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.get_flag(FLAG_Z), "RLA forces Z=0 even for zero result");
    assert!(cpu.get_flag(FLAG_C));

    cpu.set_a(0x01);
    cpu.set_f(0);
    step_program(&mut cpu, &mut mem, &[0x0F]); // RRCA
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.get_flag(FLAG_C));
    assert!(!cpu.get_flag(FLAG_Z));

    cpu.set_a(0x80);
    cpu.set_f(0);
    step_program(&mut cpu, &mut mem, &[0x07]); // RLCA
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.get_flag(FLAG_C));

    cpu.set_a(0x01);
    cpu.set_f(FLAG_C);
    step_program(&mut cpu, &mut mem, &[0x1F]); // RRA shifts carry into bit 7
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.get_flag(FLAG_C));
}
