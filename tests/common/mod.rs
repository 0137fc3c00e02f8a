#![allow(dead_code)]

use dmg_cpu::{Cpu, FlatMemory};

/// Post-boot CPU plus an empty flat bus.
pub fn boot() -> (Cpu, FlatMemory) {
    (Cpu::new(true), FlatMemory::new())
}

/// Loads `program` at the current PC and executes one instruction,
/// returning its cycle count.
pub fn step_program(cpu: &mut Cpu, mem: &mut FlatMemory, program: &[u8]) -> u16 {
    mem.load(cpu.pc(), program);
    cpu.step(mem).expect("instruction should dispatch")
}

/// Reads the register selected by the 3-bit operand encoding
/// (0=B 1=C 2=D 3=E 4=H 5=L 7=A; 6 is the (HL) slot and has no register).
pub fn get_r8(cpu: &Cpu, index: u8) -> u8 {
    match index {
        0 => cpu.b(),
        1 => cpu.c(),
        2 => cpu.d(),
        3 => cpu.e(),
        4 => cpu.h(),
        5 => cpu.l(),
        7 => cpu.a(),
        _ => panic!("operand index {index} does not name a register"),
    }
}

/// Writes the register selected by the 3-bit operand encoding.
pub fn set_r8(cpu: &mut Cpu, index: u8, value: u8) {
    match index {
        0 => cpu.set_b(value),
        1 => cpu.set_c(value),
        2 => cpu.set_d(value),
        3 => cpu.set_e(value),
        4 => cpu.set_h(value),
        5 => cpu.set_l(value),
        7 => cpu.set_a(value),
        _ => panic!("operand index {index} does not name a register"),
    }
}
