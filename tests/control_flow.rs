mod common;

use common::{boot, step_program};
use dmg_cpu::{Bus, CpuError, FLAG_C, FLAG_Z};

#[test]
fn nop_spends_four_cycles() {
    let (mut cpu, mut mem) = boot();
    let cycles = step_program(&mut cpu, &mut mem, &[0x00]);
    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x0101);
}

#[test]
fn jr_z_charges_for_taken_and_not_taken_paths() {
    let (mut cpu, mut mem) = boot();
    cpu.set_f(0); // Z clear: branch not taken
    let cycles = step_program(&mut cpu, &mut mem, &[0x28, 0x10]);
    assert_eq!(cpu.pc(), 0x0102, "PC stays at the post-fetch position");
    assert_eq!(cycles, 8);

    cpu.set_pc(0x0100);
    cpu.set_f(FLAG_Z); // Z set: branch taken
    let cycles = step_program(&mut cpu, &mut mem, &[0x28, 0x10]);
    assert_eq!(cpu.pc(), 0x0112);
    assert_eq!(cycles, 12);
}

#[test]
fn jr_offset_is_sign_extended() {
    let (mut cpu, mut mem) = boot();
    // JR -2 lands back on the JR opcode itself.
    let cycles = step_program(&mut cpu, &mut mem, &[0x18, 0xFE]);
    assert_eq!(cpu.pc(), 0x0100);
    assert_eq!(cycles, 12);
}

#[test]
fn jp_variants() {
    let (mut cpu, mut mem) = boot();
    let cycles = step_program(&mut cpu, &mut mem, &[0xC3, 0x00, 0xC0]); // JP a16
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cycles, 16);

    cpu.set_hl(0xD000);
    let cycles = step_program(&mut cpu, &mut mem, &[0xE9]); // JP HL
    assert_eq!(cpu.pc(), 0xD000);
    assert_eq!(cycles, 4);

    cpu.set_f(0);
    let cycles = step_program(&mut cpu, &mut mem, &[0xDA, 0x00, 0xC0]); // JP C not taken
    assert_eq!(cpu.pc(), 0xD003);
    assert_eq!(cycles, 12);

    cpu.set_f(FLAG_C);
    let cycles = step_program(&mut cpu, &mut mem, &[0xDA, 0x00, 0xC0]); // JP C taken
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cycles, 16);
}

#[test]
fn call_pushes_the_return_address_and_ret_pops_it() {
    let (mut cpu, mut mem) = boot();
    let cycles = step_program(&mut cpu, &mut mem, &[0xCD, 0x00, 0xC0]); // CALL 0xC000
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(mem.read_byte(0xFFFC), 0x03, "return address low byte");
    assert_eq!(mem.read_byte(0xFFFD), 0x01, "return address high byte");
    assert_eq!(cycles, 24);

    let cycles = step_program(&mut cpu, &mut mem, &[0xC9]); // RET
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cycles, 16);
}

#[test]
fn conditional_call_and_ret_cycle_accounting() {
    let (mut cpu, mut mem) = boot();
    cpu.set_f(FLAG_Z);
    let cycles = step_program(&mut cpu, &mut mem, &[0xC4, 0x00, 0xC0]); // CALL NZ not taken
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cycles, 12);

    let cycles = step_program(&mut cpu, &mut mem, &[0xCC, 0x00, 0xC0]); // CALL Z taken
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cycles, 24);

    let cycles = step_program(&mut cpu, &mut mem, &[0xC0]); // RET NZ not taken
    assert_eq!(cycles, 8);
    assert_eq!(cpu.pc(), 0xC001);

    let cycles = step_program(&mut cpu, &mut mem, &[0xC8]); // RET Z taken
    assert_eq!(cycles, 20);
    assert_eq!(cpu.pc(), 0x0106);
}

#[test]
fn rst_jumps_to_each_fixed_vector() {
    for slot in 0u8..8 {
        let (mut cpu, mut mem) = boot();
        let opcode = 0xC7 | (slot << 3);
        let cycles = step_program(&mut cpu, &mut mem, &[opcode]);
        assert_eq!(cpu.pc(), (slot as u16) * 8, "opcode {opcode:#04X}");
        assert_eq!(cpu.sp(), 0xFFFC);
        assert_eq!(mem.read_byte(0xFFFC), 0x01, "pushed PC low");
        assert_eq!(mem.read_byte(0xFFFD), 0x01, "pushed PC high");
        assert_eq!(cycles, 16);
    }
}

#[test]
fn di_ei_and_reti_drive_the_ime_bit() {
    let (mut cpu, mut mem) = boot();
    assert!(!cpu.ime());
    let cycles = step_program(&mut cpu, &mut mem, &[0xFB]); // EI
    assert!(cpu.ime());
    assert_eq!(cycles, 4);

    step_program(&mut cpu, &mut mem, &[0xF3]); // DI
    assert!(!cpu.ime());

    // RETI = RET + enable interrupts.
    cpu.set_sp(0xFFF0);
    mem.write_byte(0xFFF0, 0x34);
    mem.write_byte(0xFFF1, 0x12);
    let cycles = step_program(&mut cpu, &mut mem, &[0xD9]);
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFFF2);
    assert!(cpu.ime());
    assert_eq!(cycles, 16);
}

#[test]
fn halt_latches_and_leaves_the_driver_in_charge() {
    let (mut cpu, mut mem) = boot();
    let cycles = step_program(&mut cpu, &mut mem, &[0x76]);
    assert!(cpu.halted());
    assert_eq!(cpu.pc(), 0x0101);
    assert_eq!(cycles, 4);

    cpu.set_halted(false);
    assert!(!cpu.halted());
}

#[test]
fn stop_latches_and_consumes_its_padding_byte() {
    let (mut cpu, mut mem) = boot();
    let cycles = step_program(&mut cpu, &mut mem, &[0x10, 0x00]);
    assert!(cpu.stopped());
    assert_eq!(cpu.pc(), 0x0102, "the 0x00 operand byte is consumed");
    assert_eq!(cycles, 4);
}

#[test]
fn unknown_opcodes_fail_without_mutating_state() {
    for opcode in [
        0xD3u8, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ] {
        let (mut cpu, mut mem) = boot();
        cpu.set_bc(0x1122);
        cpu.set_de(0x3344);
        cpu.set_hl(0x5566);
        mem.load(cpu.pc(), &[opcode]);

        let before = (
            cpu.pc(),
            cpu.sp(),
            cpu.af(),
            cpu.bc(),
            cpu.de(),
            cpu.hl(),
            cpu.total_cycles(),
        );
        let result = cpu.step(&mut mem);
        assert_eq!(result, Err(CpuError::UnknownOpcode { opcode, cb: false }));
        let after = (
            cpu.pc(),
            cpu.sp(),
            cpu.af(),
            cpu.bc(),
            cpu.de(),
            cpu.hl(),
            cpu.total_cycles(),
        );
        assert_eq!(before, after, "opcode {opcode:#04X} must not touch state");
    }
}

#[test]
fn every_base_opcode_dispatches_or_reports_unknown() {
    for opcode in 0u16..=0xFF {
        let (mut cpu, mut mem) = boot();
        cpu.set_hl(0xC000);
        cpu.set_bc(0xC010);
        cpu.set_de(0xC020);
        cpu.set_sp(0xFFF0);
        mem.load(cpu.pc(), &[opcode as u8, 0x10, 0xC0]);
        match cpu.step(&mut mem) {
            Ok(cycles) => {
                assert!(
                    (4..=24).contains(&cycles) && cycles % 4 == 0,
                    "opcode {opcode:#04X} returned {cycles} cycles"
                );
                assert_eq!(cpu.f() & 0x0F, 0, "opcode {opcode:#04X} dirtied F");
            }
            Err(CpuError::UnknownOpcode { opcode: reported, cb: false }) => {
                assert_eq!(reported, opcode as u8);
            }
            Err(other) => panic!("opcode {opcode:#04X}: unexpected error {other}"),
        }
    }
}

#[test]
fn driver_loop_runs_a_small_program_until_halt() {
    let (mut cpu, mut mem) = boot();
    // Sum 5+4+3+2+1 into A, then halt.
    mem.load(
        0x0100,
        &[
            0x06, 0x05, // LD B,5
            0xAF, //       XOR A,A
            0x80, //       ADD A,B
            0x05, //       DEC B
            0x20, 0xFC, // JR NZ,-4
            0x76, //       HALT
        ],
    );
    let mut spent = 0u64;
    while !cpu.halted() {
        spent += u64::from(cpu.step(&mut mem).expect("program only uses valid opcodes"));
    }
    assert_eq!(cpu.a(), 0x0F);
    assert_eq!(cpu.b(), 0x00);
    assert_eq!(cpu.pc(), 0x0108);
    assert_eq!(spent, cpu.total_cycles());
}

#[test]
fn total_cycles_accumulate_across_steps() {
    let (mut cpu, mut mem) = boot();
    step_program(&mut cpu, &mut mem, &[0x00]); // NOP: 4
    step_program(&mut cpu, &mut mem, &[0x21, 0x00, 0xC0]); // LD HL,d16: 12
    step_program(&mut cpu, &mut mem, &[0xCB, 0x37]); // SWAP A: 12
    assert_eq!(cpu.total_cycles(), 28);
}
