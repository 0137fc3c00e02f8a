//! Opcode metadata and the two dispatch tables.
//!
//! One entry per opcode byte, handler and cycle cost side by side.
//! `None` marks the eleven base opcodes the LR35902 never assigned; the
//! dispatcher refuses them before touching any CPU state. The CB table is
//! dense.

use crate::bus::Bus;
use crate::cpu::{Cpu, CpuResult};
use lazy_static::lazy_static;

/// Handler signature shared by both tables. Returns the extra cycles on
/// top of the entry's base cost (the taken-branch surcharge, or the
/// selected extension's cost for the CB prefix).
pub type OpcodeFn = fn(&mut Cpu, &mut dyn Bus) -> CpuResult<u16>;

/// Static description of one opcode.
#[derive(Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    /// Total encoded length in bytes, operands included.
    pub length: u8,
    /// Base cycle cost; conditional branches list their not-taken cost.
    pub cycles: u8,
    pub execute: OpcodeFn,
}

impl Instruction {
    pub const fn new(mnemonic: &'static str, length: u8, cycles: u8, execute: OpcodeFn) -> Self {
        Instruction {
            mnemonic,
            length,
            cycles,
            execute,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Some(Instruction::new($mne, $len, $cyc, $exec))
    };
}
macro_rules! unused {
    () => {
        None
    };
}

lazy_static! {
    /// Base table, indexed by the first opcode byte.
    pub static ref INSTRUCTIONS: [Option<Instruction>; 256] = [
        // 0x00
        instr!("NOP", 1, 4, Cpu::op_nop),
        instr!("LD BC,d16", 3, 12, Cpu::op_ld_bc_d16),
        instr!("LD (BC),A", 1, 8, Cpu::op_ld_bcp_a),
        instr!("INC BC", 1, 8, Cpu::op_inc_bc),
        instr!("INC B", 1, 4, Cpu::op_inc_b),
        instr!("DEC B", 1, 4, Cpu::op_dec_b),
        instr!("LD B,d8", 2, 8, Cpu::op_ld_b_d8),
        instr!("RLCA", 1, 4, Cpu::op_rlca),
        instr!("LD (a16),SP", 3, 20, Cpu::op_ld_a16_sp),
        instr!("ADD HL,BC", 1, 8, Cpu::op_add_hl_bc),
        instr!("LD A,(BC)", 1, 8, Cpu::op_ld_a_bcp),
        instr!("DEC BC", 1, 8, Cpu::op_dec_bc),
        instr!("INC C", 1, 4, Cpu::op_inc_c),
        instr!("DEC C", 1, 4, Cpu::op_dec_c),
        instr!("LD C,d8", 2, 8, Cpu::op_ld_c_d8),
        instr!("RRCA", 1, 4, Cpu::op_rrca),
        // 0x10; STOP carries an ignored operand byte
        instr!("STOP", 2, 4, Cpu::op_stop),
        instr!("LD DE,d16", 3, 12, Cpu::op_ld_de_d16),
        instr!("LD (DE),A", 1, 8, Cpu::op_ld_dep_a),
        instr!("INC DE", 1, 8, Cpu::op_inc_de),
        instr!("INC D", 1, 4, Cpu::op_inc_d),
        instr!("DEC D", 1, 4, Cpu::op_dec_d),
        instr!("LD D,d8", 2, 8, Cpu::op_ld_d_d8),
        instr!("RLA", 1, 4, Cpu::op_rla),
        instr!("JR r8", 2, 12, Cpu::op_jr_r8),
        instr!("ADD HL,DE", 1, 8, Cpu::op_add_hl_de),
        instr!("LD A,(DE)", 1, 8, Cpu::op_ld_a_dep),
        instr!("DEC DE", 1, 8, Cpu::op_dec_de),
        instr!("INC E", 1, 4, Cpu::op_inc_e),
        instr!("DEC E", 1, 4, Cpu::op_dec_e),
        instr!("LD E,d8", 2, 8, Cpu::op_ld_e_d8),
        instr!("RRA", 1, 4, Cpu::op_rra),
        // 0x20; conditional JR: 8 not taken, 12 taken
        instr!("JR NZ,r8", 2, 8, Cpu::op_jr_nz_r8),
        instr!("LD HL,d16", 3, 12, Cpu::op_ld_hl_d16),
        instr!("LD (HL+),A", 1, 8, Cpu::op_ld_hli_a),
        instr!("INC HL", 1, 8, Cpu::op_inc_hl),
        instr!("INC H", 1, 4, Cpu::op_inc_h),
        instr!("DEC H", 1, 4, Cpu::op_dec_h),
        instr!("LD H,d8", 2, 8, Cpu::op_ld_h_d8),
        instr!("DAA", 1, 4, Cpu::op_daa),
        instr!("JR Z,r8", 2, 8, Cpu::op_jr_z_r8),
        instr!("ADD HL,HL", 1, 8, Cpu::op_add_hl_hl),
        instr!("LD A,(HL+)", 1, 8, Cpu::op_ld_a_hli),
        instr!("DEC HL", 1, 8, Cpu::op_dec_hl),
        instr!("INC L", 1, 4, Cpu::op_inc_l),
        instr!("DEC L", 1, 4, Cpu::op_dec_l),
        instr!("LD L,d8", 2, 8, Cpu::op_ld_l_d8),
        instr!("CPL", 1, 4, Cpu::op_cpl),
        // 0x30
        instr!("JR NC,r8", 2, 8, Cpu::op_jr_nc_r8),
        instr!("LD SP,d16", 3, 12, Cpu::op_ld_sp_d16),
        instr!("LD (HL-),A", 1, 8, Cpu::op_ld_hld_a),
        instr!("INC SP", 1, 8, Cpu::op_inc_sp),
        instr!("INC (HL)", 1, 12, Cpu::op_inc_hlp),
        instr!("DEC (HL)", 1, 12, Cpu::op_dec_hlp),
        instr!("LD (HL),d8", 2, 12, Cpu::op_ld_hlp_d8),
        instr!("SCF", 1, 4, Cpu::op_scf),
        instr!("JR C,r8", 2, 8, Cpu::op_jr_c_r8),
        instr!("ADD HL,SP", 1, 8, Cpu::op_add_hl_sp),
        instr!("LD A,(HL-)", 1, 8, Cpu::op_ld_a_hld),
        instr!("DEC SP", 1, 8, Cpu::op_dec_sp),
        instr!("INC A", 1, 4, Cpu::op_inc_a),
        instr!("DEC A", 1, 4, Cpu::op_dec_a),
        instr!("LD A,d8", 2, 8, Cpu::op_ld_a_d8),
        instr!("CCF", 1, 4, Cpu::op_ccf),
        // 0x40: LD B,r
        instr!("LD B,B", 1, 4, Cpu::op_ld_b_b),
        instr!("LD B,C", 1, 4, Cpu::op_ld_b_c),
        instr!("LD B,D", 1, 4, Cpu::op_ld_b_d),
        instr!("LD B,E", 1, 4, Cpu::op_ld_b_e),
        instr!("LD B,H", 1, 4, Cpu::op_ld_b_h),
        instr!("LD B,L", 1, 4, Cpu::op_ld_b_l),
        instr!("LD B,(HL)", 1, 8, Cpu::op_ld_b_hlp),
        instr!("LD B,A", 1, 4, Cpu::op_ld_b_a),
        // 0x48: LD C,r
        instr!("LD C,B", 1, 4, Cpu::op_ld_c_b),
        instr!("LD C,C", 1, 4, Cpu::op_ld_c_c),
        instr!("LD C,D", 1, 4, Cpu::op_ld_c_d),
        instr!("LD C,E", 1, 4, Cpu::op_ld_c_e),
        instr!("LD C,H", 1, 4, Cpu::op_ld_c_h),
        instr!("LD C,L", 1, 4, Cpu::op_ld_c_l),
        instr!("LD C,(HL)", 1, 8, Cpu::op_ld_c_hlp),
        instr!("LD C,A", 1, 4, Cpu::op_ld_c_a),
        // 0x50: LD D,r
        instr!("LD D,B", 1, 4, Cpu::op_ld_d_b),
        instr!("LD D,C", 1, 4, Cpu::op_ld_d_c),
        instr!("LD D,D", 1, 4, Cpu::op_ld_d_d),
        instr!("LD D,E", 1, 4, Cpu::op_ld_d_e),
        instr!("LD D,H", 1, 4, Cpu::op_ld_d_h),
        instr!("LD D,L", 1, 4, Cpu::op_ld_d_l),
        instr!("LD D,(HL)", 1, 8, Cpu::op_ld_d_hlp),
        instr!("LD D,A", 1, 4, Cpu::op_ld_d_a),
        // 0x58: LD E,r
        instr!("LD E,B", 1, 4, Cpu::op_ld_e_b),
        instr!("LD E,C", 1, 4, Cpu::op_ld_e_c),
        instr!("LD E,D", 1, 4, Cpu::op_ld_e_d),
        instr!("LD E,E", 1, 4, Cpu::op_ld_e_e),
        instr!("LD E,H", 1, 4, Cpu::op_ld_e_h),
        instr!("LD E,L", 1, 4, Cpu::op_ld_e_l),
        instr!("LD E,(HL)", 1, 8, Cpu::op_ld_e_hlp),
        instr!("LD E,A", 1, 4, Cpu::op_ld_e_a),
        // 0x60: LD H,r
        instr!("LD H,B", 1, 4, Cpu::op_ld_h_b),
        instr!("LD H,C", 1, 4, Cpu::op_ld_h_c),
        instr!("LD H,D", 1, 4, Cpu::op_ld_h_d),
        instr!("LD H,E", 1, 4, Cpu::op_ld_h_e),
        instr!("LD H,H", 1, 4, Cpu::op_ld_h_h),
        instr!("LD H,L", 1, 4, Cpu::op_ld_h_l),
        instr!("LD H,(HL)", 1, 8, Cpu::op_ld_h_hlp),
        instr!("LD H,A", 1, 4, Cpu::op_ld_h_a),
        // 0x68: LD L,r
        instr!("LD L,B", 1, 4, Cpu::op_ld_l_b),
        instr!("LD L,C", 1, 4, Cpu::op_ld_l_c),
        instr!("LD L,D", 1, 4, Cpu::op_ld_l_d),
        instr!("LD L,E", 1, 4, Cpu::op_ld_l_e),
        instr!("LD L,H", 1, 4, Cpu::op_ld_l_h),
        instr!("LD L,L", 1, 4, Cpu::op_ld_l_l),
        instr!("LD L,(HL)", 1, 8, Cpu::op_ld_l_hlp),
        instr!("LD L,A", 1, 4, Cpu::op_ld_l_a),
        // 0x70: LD (HL),r; 0x76 is HALT
        instr!("LD (HL),B", 1, 8, Cpu::op_ld_hlp_b),
        instr!("LD (HL),C", 1, 8, Cpu::op_ld_hlp_c),
        instr!("LD (HL),D", 1, 8, Cpu::op_ld_hlp_d),
        instr!("LD (HL),E", 1, 8, Cpu::op_ld_hlp_e),
        instr!("LD (HL),H", 1, 8, Cpu::op_ld_hlp_h),
        instr!("LD (HL),L", 1, 8, Cpu::op_ld_hlp_l),
        instr!("HALT", 1, 4, Cpu::op_halt),
        instr!("LD (HL),A", 1, 8, Cpu::op_ld_hlp_a),
        // 0x78: LD A,r
        instr!("LD A,B", 1, 4, Cpu::op_ld_a_b),
        instr!("LD A,C", 1, 4, Cpu::op_ld_a_c),
        instr!("LD A,D", 1, 4, Cpu::op_ld_a_d),
        instr!("LD A,E", 1, 4, Cpu::op_ld_a_e),
        instr!("LD A,H", 1, 4, Cpu::op_ld_a_h),
        instr!("LD A,L", 1, 4, Cpu::op_ld_a_l),
        instr!("LD A,(HL)", 1, 8, Cpu::op_ld_a_hlp),
        instr!("LD A,A", 1, 4, Cpu::op_ld_a_a),
        // 0x80: ADD A,r
        instr!("ADD A,B", 1, 4, Cpu::op_add_a_b),
        instr!("ADD A,C", 1, 4, Cpu::op_add_a_c),
        instr!("ADD A,D", 1, 4, Cpu::op_add_a_d),
        instr!("ADD A,E", 1, 4, Cpu::op_add_a_e),
        instr!("ADD A,H", 1, 4, Cpu::op_add_a_h),
        instr!("ADD A,L", 1, 4, Cpu::op_add_a_l),
        instr!("ADD A,(HL)", 1, 8, Cpu::op_add_a_hlp),
        instr!("ADD A,A", 1, 4, Cpu::op_add_a_a),
        // 0x88: ADC A,r
        instr!("ADC A,B", 1, 4, Cpu::op_adc_a_b),
        instr!("ADC A,C", 1, 4, Cpu::op_adc_a_c),
        instr!("ADC A,D", 1, 4, Cpu::op_adc_a_d),
        instr!("ADC A,E", 1, 4, Cpu::op_adc_a_e),
        instr!("ADC A,H", 1, 4, Cpu::op_adc_a_h),
        instr!("ADC A,L", 1, 4, Cpu::op_adc_a_l),
        instr!("ADC A,(HL)", 1, 8, Cpu::op_adc_a_hlp),
        instr!("ADC A,A", 1, 4, Cpu::op_adc_a_a),
        // 0x90: SUB A,r
        instr!("SUB A,B", 1, 4, Cpu::op_sub_a_b),
        instr!("SUB A,C", 1, 4, Cpu::op_sub_a_c),
        instr!("SUB A,D", 1, 4, Cpu::op_sub_a_d),
        instr!("SUB A,E", 1, 4, Cpu::op_sub_a_e),
        instr!("SUB A,H", 1, 4, Cpu::op_sub_a_h),
        instr!("SUB A,L", 1, 4, Cpu::op_sub_a_l),
        instr!("SUB A,(HL)", 1, 8, Cpu::op_sub_a_hlp),
        instr!("SUB A,A", 1, 4, Cpu::op_sub_a_a),
        // 0x98: SBC A,r
        instr!("SBC A,B", 1, 4, Cpu::op_sbc_a_b),
        instr!("SBC A,C", 1, 4, Cpu::op_sbc_a_c),
        instr!("SBC A,D", 1, 4, Cpu::op_sbc_a_d),
        instr!("SBC A,E", 1, 4, Cpu::op_sbc_a_e),
        instr!("SBC A,H", 1, 4, Cpu::op_sbc_a_h),
        instr!("SBC A,L", 1, 4, Cpu::op_sbc_a_l),
        instr!("SBC A,(HL)", 1, 8, Cpu::op_sbc_a_hlp),
        instr!("SBC A,A", 1, 4, Cpu::op_sbc_a_a),
        // 0xA0: AND A,r
        instr!("AND A,B", 1, 4, Cpu::op_and_a_b),
        instr!("AND A,C", 1, 4, Cpu::op_and_a_c),
        instr!("AND A,D", 1, 4, Cpu::op_and_a_d),
        instr!("AND A,E", 1, 4, Cpu::op_and_a_e),
        instr!("AND A,H", 1, 4, Cpu::op_and_a_h),
        instr!("AND A,L", 1, 4, Cpu::op_and_a_l),
        instr!("AND A,(HL)", 1, 8, Cpu::op_and_a_hlp),
        instr!("AND A,A", 1, 4, Cpu::op_and_a_a),
        // 0xA8: XOR A,r
        instr!("XOR A,B", 1, 4, Cpu::op_xor_a_b),
        instr!("XOR A,C", 1, 4, Cpu::op_xor_a_c),
        instr!("XOR A,D", 1, 4, Cpu::op_xor_a_d),
        instr!("XOR A,E", 1, 4, Cpu::op_xor_a_e),
        instr!("XOR A,H", 1, 4, Cpu::op_xor_a_h),
        instr!("XOR A,L", 1, 4, Cpu::op_xor_a_l),
        instr!("XOR A,(HL)", 1, 8, Cpu::op_xor_a_hlp),
        instr!("XOR A,A", 1, 4, Cpu::op_xor_a_a),
        // 0xB0: OR A,r
        instr!("OR A,B", 1, 4, Cpu::op_or_a_b),
        instr!("OR A,C", 1, 4, Cpu::op_or_a_c),
        instr!("OR A,D", 1, 4, Cpu::op_or_a_d),
        instr!("OR A,E", 1, 4, Cpu::op_or_a_e),
        instr!("OR A,H", 1, 4, Cpu::op_or_a_h),
        instr!("OR A,L", 1, 4, Cpu::op_or_a_l),
        instr!("OR A,(HL)", 1, 8, Cpu::op_or_a_hlp),
        instr!("OR A,A", 1, 4, Cpu::op_or_a_a),
        // 0xB8: CP A,r
        instr!("CP A,B", 1, 4, Cpu::op_cp_a_b),
        instr!("CP A,C", 1, 4, Cpu::op_cp_a_c),
        instr!("CP A,D", 1, 4, Cpu::op_cp_a_d),
        instr!("CP A,E", 1, 4, Cpu::op_cp_a_e),
        instr!("CP A,H", 1, 4, Cpu::op_cp_a_h),
        instr!("CP A,L", 1, 4, Cpu::op_cp_a_l),
        instr!("CP A,(HL)", 1, 8, Cpu::op_cp_a_hlp),
        instr!("CP A,A", 1, 4, Cpu::op_cp_a_a),
        // 0xC0; conditional RET: 8 not taken, 20 taken
        instr!("RET NZ", 1, 8, Cpu::op_ret_nz),
        instr!("POP BC", 1, 12, Cpu::op_pop_bc),
        instr!("JP NZ,a16", 3, 12, Cpu::op_jp_nz_a16),
        instr!("JP a16", 3, 16, Cpu::op_jp_a16),
        instr!("CALL NZ,a16", 3, 12, Cpu::op_call_nz_a16),
        instr!("PUSH BC", 1, 16, Cpu::op_push_bc),
        instr!("ADD A,d8", 2, 8, Cpu::op_add_a_d8),
        instr!("RST 00H", 1, 16, Cpu::op_rst_00h),
        instr!("RET Z", 1, 8, Cpu::op_ret_z),
        instr!("RET", 1, 16, Cpu::op_ret),
        instr!("JP Z,a16", 3, 12, Cpu::op_jp_z_a16),
        // Prefix: 2 bytes (prefix + selector), 4 cycles before the
        // extension's own cost
        instr!("PREFIX CB", 2, 4, Cpu::op_prefix_cb),
        instr!("CALL Z,a16", 3, 12, Cpu::op_call_z_a16),
        instr!("CALL a16", 3, 24, Cpu::op_call_a16),
        instr!("ADC A,d8", 2, 8, Cpu::op_adc_a_d8),
        instr!("RST 08H", 1, 16, Cpu::op_rst_08h),
        // 0xD0
        instr!("RET NC", 1, 8, Cpu::op_ret_nc),
        instr!("POP DE", 1, 12, Cpu::op_pop_de),
        instr!("JP NC,a16", 3, 12, Cpu::op_jp_nc_a16),
        unused!(), // D3
        instr!("CALL NC,a16", 3, 12, Cpu::op_call_nc_a16),
        instr!("PUSH DE", 1, 16, Cpu::op_push_de),
        instr!("SUB A,d8", 2, 8, Cpu::op_sub_a_d8),
        instr!("RST 10H", 1, 16, Cpu::op_rst_10h),
        instr!("RET C", 1, 8, Cpu::op_ret_c),
        instr!("RETI", 1, 16, Cpu::op_reti),
        instr!("JP C,a16", 3, 12, Cpu::op_jp_c_a16),
        unused!(), // DB
        instr!("CALL C,a16", 3, 12, Cpu::op_call_c_a16),
        unused!(), // DD
        instr!("SBC A,d8", 2, 8, Cpu::op_sbc_a_d8),
        instr!("RST 18H", 1, 16, Cpu::op_rst_18h),
        // 0xE0
        instr!("LDH (a8),A", 2, 12, Cpu::op_ldh_a8_a),
        instr!("POP HL", 1, 12, Cpu::op_pop_hl),
        instr!("LD (C),A", 1, 8, Cpu::op_ld_cp_a),
        unused!(), // E3
        unused!(), // E4
        instr!("PUSH HL", 1, 16, Cpu::op_push_hl),
        instr!("AND A,d8", 2, 8, Cpu::op_and_a_d8),
        instr!("RST 20H", 1, 16, Cpu::op_rst_20h),
        instr!("ADD SP,r8", 2, 16, Cpu::op_add_sp_r8),
        instr!("JP HL", 1, 4, Cpu::op_jp_hl),
        instr!("LD (a16),A", 3, 16, Cpu::op_ld_a16_a),
        unused!(), // EB
        unused!(), // EC
        unused!(), // ED
        instr!("XOR A,d8", 2, 8, Cpu::op_xor_a_d8),
        instr!("RST 28H", 1, 16, Cpu::op_rst_28h),
        // 0xF0
        instr!("LDH A,(a8)", 2, 12, Cpu::op_ldh_a_a8),
        instr!("POP AF", 1, 12, Cpu::op_pop_af),
        instr!("LD A,(C)", 1, 8, Cpu::op_ld_a_cp),
        instr!("DI", 1, 4, Cpu::op_di),
        unused!(), // F4
        instr!("PUSH AF", 1, 16, Cpu::op_push_af),
        instr!("OR A,d8", 2, 8, Cpu::op_or_a_d8),
        instr!("RST 30H", 1, 16, Cpu::op_rst_30h),
        instr!("LD HL,SP+r8", 2, 12, Cpu::op_ld_hl_sp_r8),
        instr!("LD SP,HL", 1, 8, Cpu::op_ld_sp_hl),
        instr!("LD A,(a16)", 3, 16, Cpu::op_ld_a_a16),
        instr!("EI", 1, 4, Cpu::op_ei),
        unused!(), // FC
        unused!(), // FD
        instr!("CP A,d8", 2, 8, Cpu::op_cp_a_d8),
        instr!("RST 38H", 1, 16, Cpu::op_rst_38h),
    ];

    /// CB extension table, indexed by the byte after the 0xCB prefix.
    /// Cycle counts here exclude the prefix: 8 for registers, 16 for (HL)
    /// writes, 12 for BIT on (HL). Lengths are 0 because the prefix entry
    /// already accounts for both bytes.
    pub static ref CB_INSTRUCTIONS: [Option<Instruction>; 256] = [
        // 0x00: RLC / RRC
        instr!("RLC B", 0, 8, Cpu::cb_rlc_b), instr!("RLC C", 0, 8, Cpu::cb_rlc_c),
        instr!("RLC D", 0, 8, Cpu::cb_rlc_d), instr!("RLC E", 0, 8, Cpu::cb_rlc_e),
        instr!("RLC H", 0, 8, Cpu::cb_rlc_h), instr!("RLC L", 0, 8, Cpu::cb_rlc_l),
        instr!("RLC (HL)", 0, 16, Cpu::cb_rlc_hlp), instr!("RLC A", 0, 8, Cpu::cb_rlc_a),
        instr!("RRC B", 0, 8, Cpu::cb_rrc_b), instr!("RRC C", 0, 8, Cpu::cb_rrc_c),
        instr!("RRC D", 0, 8, Cpu::cb_rrc_d), instr!("RRC E", 0, 8, Cpu::cb_rrc_e),
        instr!("RRC H", 0, 8, Cpu::cb_rrc_h), instr!("RRC L", 0, 8, Cpu::cb_rrc_l),
        instr!("RRC (HL)", 0, 16, Cpu::cb_rrc_hlp), instr!("RRC A", 0, 8, Cpu::cb_rrc_a),
        // 0x10: RL / RR
        instr!("RL B", 0, 8, Cpu::cb_rl_b), instr!("RL C", 0, 8, Cpu::cb_rl_c),
        instr!("RL D", 0, 8, Cpu::cb_rl_d), instr!("RL E", 0, 8, Cpu::cb_rl_e),
        instr!("RL H", 0, 8, Cpu::cb_rl_h), instr!("RL L", 0, 8, Cpu::cb_rl_l),
        instr!("RL (HL)", 0, 16, Cpu::cb_rl_hlp), instr!("RL A", 0, 8, Cpu::cb_rl_a),
        instr!("RR B", 0, 8, Cpu::cb_rr_b), instr!("RR C", 0, 8, Cpu::cb_rr_c),
        instr!("RR D", 0, 8, Cpu::cb_rr_d), instr!("RR E", 0, 8, Cpu::cb_rr_e),
        instr!("RR H", 0, 8, Cpu::cb_rr_h), instr!("RR L", 0, 8, Cpu::cb_rr_l),
        instr!("RR (HL)", 0, 16, Cpu::cb_rr_hlp), instr!("RR A", 0, 8, Cpu::cb_rr_a),
        // 0x20: SLA / SRA
        instr!("SLA B", 0, 8, Cpu::cb_sla_b), instr!("SLA C", 0, 8, Cpu::cb_sla_c),
        instr!("SLA D", 0, 8, Cpu::cb_sla_d), instr!("SLA E", 0, 8, Cpu::cb_sla_e),
        instr!("SLA H", 0, 8, Cpu::cb_sla_h), instr!("SLA L", 0, 8, Cpu::cb_sla_l),
        instr!("SLA (HL)", 0, 16, Cpu::cb_sla_hlp), instr!("SLA A", 0, 8, Cpu::cb_sla_a),
        instr!("SRA B", 0, 8, Cpu::cb_sra_b), instr!("SRA C", 0, 8, Cpu::cb_sra_c),
        instr!("SRA D", 0, 8, Cpu::cb_sra_d), instr!("SRA E", 0, 8, Cpu::cb_sra_e),
        instr!("SRA H", 0, 8, Cpu::cb_sra_h), instr!("SRA L", 0, 8, Cpu::cb_sra_l),
        instr!("SRA (HL)", 0, 16, Cpu::cb_sra_hlp), instr!("SRA A", 0, 8, Cpu::cb_sra_a),
        // 0x30: SWAP / SRL
        instr!("SWAP B", 0, 8, Cpu::cb_swap_b), instr!("SWAP C", 0, 8, Cpu::cb_swap_c),
        instr!("SWAP D", 0, 8, Cpu::cb_swap_d), instr!("SWAP E", 0, 8, Cpu::cb_swap_e),
        instr!("SWAP H", 0, 8, Cpu::cb_swap_h), instr!("SWAP L", 0, 8, Cpu::cb_swap_l),
        instr!("SWAP (HL)", 0, 16, Cpu::cb_swap_hlp), instr!("SWAP A", 0, 8, Cpu::cb_swap_a),
        instr!("SRL B", 0, 8, Cpu::cb_srl_b), instr!("SRL C", 0, 8, Cpu::cb_srl_c),
        instr!("SRL D", 0, 8, Cpu::cb_srl_d), instr!("SRL E", 0, 8, Cpu::cb_srl_e),
        instr!("SRL H", 0, 8, Cpu::cb_srl_h), instr!("SRL L", 0, 8, Cpu::cb_srl_l),
        instr!("SRL (HL)", 0, 16, Cpu::cb_srl_hlp), instr!("SRL A", 0, 8, Cpu::cb_srl_a),
        // 0x40: BIT b,r ((HL) reads cost 12)
        instr!("BIT 0,B", 0, 8, Cpu::cb_bit_0_b), instr!("BIT 0,C", 0, 8, Cpu::cb_bit_0_c),
        instr!("BIT 0,D", 0, 8, Cpu::cb_bit_0_d), instr!("BIT 0,E", 0, 8, Cpu::cb_bit_0_e),
        instr!("BIT 0,H", 0, 8, Cpu::cb_bit_0_h), instr!("BIT 0,L", 0, 8, Cpu::cb_bit_0_l),
        instr!("BIT 0,(HL)", 0, 12, Cpu::cb_bit_0_hlp), instr!("BIT 0,A", 0, 8, Cpu::cb_bit_0_a),
        instr!("BIT 1,B", 0, 8, Cpu::cb_bit_1_b), instr!("BIT 1,C", 0, 8, Cpu::cb_bit_1_c),
        instr!("BIT 1,D", 0, 8, Cpu::cb_bit_1_d), instr!("BIT 1,E", 0, 8, Cpu::cb_bit_1_e),
        instr!("BIT 1,H", 0, 8, Cpu::cb_bit_1_h), instr!("BIT 1,L", 0, 8, Cpu::cb_bit_1_l),
        instr!("BIT 1,(HL)", 0, 12, Cpu::cb_bit_1_hlp), instr!("BIT 1,A", 0, 8, Cpu::cb_bit_1_a),
        instr!("BIT 2,B", 0, 8, Cpu::cb_bit_2_b), instr!("BIT 2,C", 0, 8, Cpu::cb_bit_2_c),
        instr!("BIT 2,D", 0, 8, Cpu::cb_bit_2_d), instr!("BIT 2,E", 0, 8, Cpu::cb_bit_2_e),
        instr!("BIT 2,H", 0, 8, Cpu::cb_bit_2_h), instr!("BIT 2,L", 0, 8, Cpu::cb_bit_2_l),
        instr!("BIT 2,(HL)", 0, 12, Cpu::cb_bit_2_hlp), instr!("BIT 2,A", 0, 8, Cpu::cb_bit_2_a),
        instr!("BIT 3,B", 0, 8, Cpu::cb_bit_3_b), instr!("BIT 3,C", 0, 8, Cpu::cb_bit_3_c),
        instr!("BIT 3,D", 0, 8, Cpu::cb_bit_3_d), instr!("BIT 3,E", 0, 8, Cpu::cb_bit_3_e),
        instr!("BIT 3,H", 0, 8, Cpu::cb_bit_3_h), instr!("BIT 3,L", 0, 8, Cpu::cb_bit_3_l),
        instr!("BIT 3,(HL)", 0, 12, Cpu::cb_bit_3_hlp), instr!("BIT 3,A", 0, 8, Cpu::cb_bit_3_a),
        instr!("BIT 4,B", 0, 8, Cpu::cb_bit_4_b), instr!("BIT 4,C", 0, 8, Cpu::cb_bit_4_c),
        instr!("BIT 4,D", 0, 8, Cpu::cb_bit_4_d), instr!("BIT 4,E", 0, 8, Cpu::cb_bit_4_e),
        instr!("BIT 4,H", 0, 8, Cpu::cb_bit_4_h), instr!("BIT 4,L", 0, 8, Cpu::cb_bit_4_l),
        instr!("BIT 4,(HL)", 0, 12, Cpu::cb_bit_4_hlp), instr!("BIT 4,A", 0, 8, Cpu::cb_bit_4_a),
        instr!("BIT 5,B", 0, 8, Cpu::cb_bit_5_b), instr!("BIT 5,C", 0, 8, Cpu::cb_bit_5_c),
        instr!("BIT 5,D", 0, 8, Cpu::cb_bit_5_d), instr!("BIT 5,E", 0, 8, Cpu::cb_bit_5_e),
        instr!("BIT 5,H", 0, 8, Cpu::cb_bit_5_h), instr!("BIT 5,L", 0, 8, Cpu::cb_bit_5_l),
        instr!("BIT 5,(HL)", 0, 12, Cpu::cb_bit_5_hlp), instr!("BIT 5,A", 0, 8, Cpu::cb_bit_5_a),
        instr!("BIT 6,B", 0, 8, Cpu::cb_bit_6_b), instr!("BIT 6,C", 0, 8, Cpu::cb_bit_6_c),
        instr!("BIT 6,D", 0, 8, Cpu::cb_bit_6_d), instr!("BIT 6,E", 0, 8, Cpu::cb_bit_6_e),
        instr!("BIT 6,H", 0, 8, Cpu::cb_bit_6_h), instr!("BIT 6,L", 0, 8, Cpu::cb_bit_6_l),
        instr!("BIT 6,(HL)", 0, 12, Cpu::cb_bit_6_hlp), instr!("BIT 6,A", 0, 8, Cpu::cb_bit_6_a),
        instr!("BIT 7,B", 0, 8, Cpu::cb_bit_7_b), instr!("BIT 7,C", 0, 8, Cpu::cb_bit_7_c),
        instr!("BIT 7,D", 0, 8, Cpu::cb_bit_7_d), instr!("BIT 7,E", 0, 8, Cpu::cb_bit_7_e),
        instr!("BIT 7,H", 0, 8, Cpu::cb_bit_7_h), instr!("BIT 7,L", 0, 8, Cpu::cb_bit_7_l),
        instr!("BIT 7,(HL)", 0, 12, Cpu::cb_bit_7_hlp), instr!("BIT 7,A", 0, 8, Cpu::cb_bit_7_a),
        // 0x80: RES b,r
        instr!("RES 0,B", 0, 8, Cpu::cb_res_0_b), instr!("RES 0,C", 0, 8, Cpu::cb_res_0_c),
        instr!("RES 0,D", 0, 8, Cpu::cb_res_0_d), instr!("RES 0,E", 0, 8, Cpu::cb_res_0_e),
        instr!("RES 0,H", 0, 8, Cpu::cb_res_0_h), instr!("RES 0,L", 0, 8, Cpu::cb_res_0_l),
        instr!("RES 0,(HL)", 0, 16, Cpu::cb_res_0_hlp), instr!("RES 0,A", 0, 8, Cpu::cb_res_0_a),
        instr!("RES 1,B", 0, 8, Cpu::cb_res_1_b), instr!("RES 1,C", 0, 8, Cpu::cb_res_1_c),
        instr!("RES 1,D", 0, 8, Cpu::cb_res_1_d), instr!("RES 1,E", 0, 8, Cpu::cb_res_1_e),
        instr!("RES 1,H", 0, 8, Cpu::cb_res_1_h), instr!("RES 1,L", 0, 8, Cpu::cb_res_1_l),
        instr!("RES 1,(HL)", 0, 16, Cpu::cb_res_1_hlp), instr!("RES 1,A", 0, 8, Cpu::cb_res_1_a),
        instr!("RES 2,B", 0, 8, Cpu::cb_res_2_b), instr!("RES 2,C", 0, 8, Cpu::cb_res_2_c),
        instr!("RES 2,D", 0, 8, Cpu::cb_res_2_d), instr!("RES 2,E", 0, 8, Cpu::cb_res_2_e),
        instr!("RES 2,H", 0, 8, Cpu::cb_res_2_h), instr!("RES 2,L", 0, 8, Cpu::cb_res_2_l),
        instr!("RES 2,(HL)", 0, 16, Cpu::cb_res_2_hlp), instr!("RES 2,A", 0, 8, Cpu::cb_res_2_a),
        instr!("RES 3,B", 0, 8, Cpu::cb_res_3_b), instr!("RES 3,C", 0, 8, Cpu::cb_res_3_c),
        instr!("RES 3,D", 0, 8, Cpu::cb_res_3_d), instr!("RES 3,E", 0, 8, Cpu::cb_res_3_e),
        instr!("RES 3,H", 0, 8, Cpu::cb_res_3_h), instr!("RES 3,L", 0, 8, Cpu::cb_res_3_l),
        instr!("RES 3,(HL)", 0, 16, Cpu::cb_res_3_hlp), instr!("RES 3,A", 0, 8, Cpu::cb_res_3_a),
        instr!("RES 4,B", 0, 8, Cpu::cb_res_4_b), instr!("RES 4,C", 0, 8, Cpu::cb_res_4_c),
        instr!("RES 4,D", 0, 8, Cpu::cb_res_4_d), instr!("RES 4,E", 0, 8, Cpu::cb_res_4_e),
        instr!("RES 4,H", 0, 8, Cpu::cb_res_4_h), instr!("RES 4,L", 0, 8, Cpu::cb_res_4_l),
        instr!("RES 4,(HL)", 0, 16, Cpu::cb_res_4_hlp), instr!("RES 4,A", 0, 8, Cpu::cb_res_4_a),
        instr!("RES 5,B", 0, 8, Cpu::cb_res_5_b), instr!("RES 5,C", 0, 8, Cpu::cb_res_5_c),
        instr!("RES 5,D", 0, 8, Cpu::cb_res_5_d), instr!("RES 5,E", 0, 8, Cpu::cb_res_5_e),
        instr!("RES 5,H", 0, 8, Cpu::cb_res_5_h), instr!("RES 5,L", 0, 8, Cpu::cb_res_5_l),
        instr!("RES 5,(HL)", 0, 16, Cpu::cb_res_5_hlp), instr!("RES 5,A", 0, 8, Cpu::cb_res_5_a),
        instr!("RES 6,B", 0, 8, Cpu::cb_res_6_b), instr!("RES 6,C", 0, 8, Cpu::cb_res_6_c),
        instr!("RES 6,D", 0, 8, Cpu::cb_res_6_d), instr!("RES 6,E", 0, 8, Cpu::cb_res_6_e),
        instr!("RES 6,H", 0, 8, Cpu::cb_res_6_h), instr!("RES 6,L", 0, 8, Cpu::cb_res_6_l),
        instr!("RES 6,(HL)", 0, 16, Cpu::cb_res_6_hlp), instr!("RES 6,A", 0, 8, Cpu::cb_res_6_a),
        instr!("RES 7,B", 0, 8, Cpu::cb_res_7_b), instr!("RES 7,C", 0, 8, Cpu::cb_res_7_c),
        instr!("RES 7,D", 0, 8, Cpu::cb_res_7_d), instr!("RES 7,E", 0, 8, Cpu::cb_res_7_e),
        instr!("RES 7,H", 0, 8, Cpu::cb_res_7_h), instr!("RES 7,L", 0, 8, Cpu::cb_res_7_l),
        instr!("RES 7,(HL)", 0, 16, Cpu::cb_res_7_hlp), instr!("RES 7,A", 0, 8, Cpu::cb_res_7_a),
        // 0xC0: SET b,r
        instr!("SET 0,B", 0, 8, Cpu::cb_set_0_b), instr!("SET 0,C", 0, 8, Cpu::cb_set_0_c),
        instr!("SET 0,D", 0, 8, Cpu::cb_set_0_d), instr!("SET 0,E", 0, 8, Cpu::cb_set_0_e),
        instr!("SET 0,H", 0, 8, Cpu::cb_set_0_h), instr!("SET 0,L", 0, 8, Cpu::cb_set_0_l),
        instr!("SET 0,(HL)", 0, 16, Cpu::cb_set_0_hlp), instr!("SET 0,A", 0, 8, Cpu::cb_set_0_a),
        instr!("SET 1,B", 0, 8, Cpu::cb_set_1_b), instr!("SET 1,C", 0, 8, Cpu::cb_set_1_c),
        instr!("SET 1,D", 0, 8, Cpu::cb_set_1_d), instr!("SET 1,E", 0, 8, Cpu::cb_set_1_e),
        instr!("SET 1,H", 0, 8, Cpu::cb_set_1_h), instr!("SET 1,L", 0, 8, Cpu::cb_set_1_l),
        instr!("SET 1,(HL)", 0, 16, Cpu::cb_set_1_hlp), instr!("SET 1,A", 0, 8, Cpu::cb_set_1_a),
        instr!("SET 2,B", 0, 8, Cpu::cb_set_2_b), instr!("SET 2,C", 0, 8, Cpu::cb_set_2_c),
        instr!("SET 2,D", 0, 8, Cpu::cb_set_2_d), instr!("SET 2,E", 0, 8, Cpu::cb_set_2_e),
        instr!("SET 2,H", 0, 8, Cpu::cb_set_2_h), instr!("SET 2,L", 0, 8, Cpu::cb_set_2_l),
        instr!("SET 2,(HL)", 0, 16, Cpu::cb_set_2_hlp), instr!("SET 2,A", 0, 8, Cpu::cb_set_2_a),
        instr!("SET 3,B", 0, 8, Cpu::cb_set_3_b), instr!("SET 3,C", 0, 8, Cpu::cb_set_3_c),
        instr!("SET 3,D", 0, 8, Cpu::cb_set_3_d), instr!("SET 3,E", 0, 8, Cpu::cb_set_3_e),
        instr!("SET 3,H", 0, 8, Cpu::cb_set_3_h), instr!("SET 3,L", 0, 8, Cpu::cb_set_3_l),
        instr!("SET 3,(HL)", 0, 16, Cpu::cb_set_3_hlp), instr!("SET 3,A", 0, 8, Cpu::cb_set_3_a),
        instr!("SET 4,B", 0, 8, Cpu::cb_set_4_b), instr!("SET 4,C", 0, 8, Cpu::cb_set_4_c),
        instr!("SET 4,D", 0, 8, Cpu::cb_set_4_d), instr!("SET 4,E", 0, 8, Cpu::cb_set_4_e),
        instr!("SET 4,H", 0, 8, Cpu::cb_set_4_h), instr!("SET 4,L", 0, 8, Cpu::cb_set_4_l),
        instr!("SET 4,(HL)", 0, 16, Cpu::cb_set_4_hlp), instr!("SET 4,A", 0, 8, Cpu::cb_set_4_a),
        instr!("SET 5,B", 0, 8, Cpu::cb_set_5_b), instr!("SET 5,C", 0, 8, Cpu::cb_set_5_c),
        instr!("SET 5,D", 0, 8, Cpu::cb_set_5_d), instr!("SET 5,E", 0, 8, Cpu::cb_set_5_e),
        instr!("SET 5,H", 0, 8, Cpu::cb_set_5_h), instr!("SET 5,L", 0, 8, Cpu::cb_set_5_l),
        instr!("SET 5,(HL)", 0, 16, Cpu::cb_set_5_hlp), instr!("SET 5,A", 0, 8, Cpu::cb_set_5_a),
        instr!("SET 6,B", 0, 8, Cpu::cb_set_6_b), instr!("SET 6,C", 0, 8, Cpu::cb_set_6_c),
        instr!("SET 6,D", 0, 8, Cpu::cb_set_6_d), instr!("SET 6,E", 0, 8, Cpu::cb_set_6_e),
        instr!("SET 6,H", 0, 8, Cpu::cb_set_6_h), instr!("SET 6,L", 0, 8, Cpu::cb_set_6_l),
        instr!("SET 6,(HL)", 0, 16, Cpu::cb_set_6_hlp), instr!("SET 6,A", 0, 8, Cpu::cb_set_6_a),
        instr!("SET 7,B", 0, 8, Cpu::cb_set_7_b), instr!("SET 7,C", 0, 8, Cpu::cb_set_7_c),
        instr!("SET 7,D", 0, 8, Cpu::cb_set_7_d), instr!("SET 7,E", 0, 8, Cpu::cb_set_7_e),
        instr!("SET 7,H", 0, 8, Cpu::cb_set_7_h), instr!("SET 7,L", 0, 8, Cpu::cb_set_7_l),
        instr!("SET 7,(HL)", 0, 16, Cpu::cb_set_7_hlp), instr!("SET 7,A", 0, 8, Cpu::cb_set_7_a),
    ];
}

/// Renders the instruction at `address` from the table mnemonics and
/// returns it with its byte length. Unassigned opcodes come back as raw
/// `DB` data bytes.
pub fn disassemble(address: u16, bus: &dyn Bus) -> (String, u8) {
    let opcode = bus.read_byte(address);
    if opcode == 0xCB {
        let cb_opcode = bus.read_byte(address.wrapping_add(1));
        return match &CB_INSTRUCTIONS[cb_opcode as usize] {
            Some(extension) => (extension.mnemonic.to_string(), 2),
            None => (format!("DB CB,{cb_opcode:02X}"), 2),
        };
    }
    let Some(instruction) = &INSTRUCTIONS[opcode as usize] else {
        return (format!("DB {opcode:02X}"), 1);
    };
    let operand = match instruction.length {
        2 => {
            let d8 = bus.read_byte(address.wrapping_add(1));
            if instruction.mnemonic.contains("r8") {
                format!("{:+}", d8 as i8)
            } else {
                format!("${d8:02X}")
            }
        }
        3 => {
            let lo = bus.read_byte(address.wrapping_add(1));
            let hi = bus.read_byte(address.wrapping_add(2));
            format!("${:04X}", u16::from_le_bytes([lo, hi]))
        }
        _ => String::new(),
    };
    let text = instruction
        .mnemonic
        .replace("d16", &operand)
        .replace("a16", &operand)
        .replace("d8", &operand)
        .replace("r8", &operand);
    (text, instruction.length)
}

#[cfg(test)]
mod tests {
    use super::{CB_INSTRUCTIONS, INSTRUCTIONS, disassemble};
    use crate::bus::FlatMemory;

    // The eleven opcodes the LR35902 never assigned.
    const UNUSED_OPCODES: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    #[test]
    fn base_table_has_exactly_eleven_holes() {
        let holes: Vec<u8> = (0u16..=0xFF)
            .filter(|&op| INSTRUCTIONS[op as usize].is_none())
            .map(|op| op as u8)
            .collect();
        assert_eq!(holes, UNUSED_OPCODES);
    }

    #[test]
    fn cb_table_is_dense() {
        assert!(CB_INSTRUCTIONS.iter().all(|entry| entry.is_some()));
    }

    #[test]
    fn lengths_and_cycles_are_plausible() {
        for entry in INSTRUCTIONS.iter().flatten() {
            assert!((1..=3).contains(&entry.length), "{}", entry.mnemonic);
            assert!(entry.cycles % 4 == 0, "{}", entry.mnemonic);
        }
        for entry in CB_INSTRUCTIONS.iter().flatten() {
            let hlp = entry.mnemonic.ends_with("(HL)");
            let expected = match (hlp, entry.mnemonic.starts_with("BIT")) {
                (false, _) => 8,
                (true, true) => 12,
                (true, false) => 16,
            };
            assert_eq!(entry.cycles, expected, "{}", entry.mnemonic);
        }
    }

    #[test]
    fn disassembles_operands_and_data_bytes() {
        let mut mem = FlatMemory::new();
        mem.load(0x0100, &[0x21, 0xCD, 0xAB, 0x18, 0xFE, 0xD3, 0xCB, 0x37]);
        assert_eq!(disassemble(0x0100, &mem), ("LD HL,$ABCD".to_string(), 3));
        assert_eq!(disassemble(0x0103, &mem), ("JR -2".to_string(), 2));
        assert_eq!(disassemble(0x0105, &mem), ("DB D3".to_string(), 1));
        assert_eq!(disassemble(0x0106, &mem), ("SWAP A".to_string(), 2));
    }
}
