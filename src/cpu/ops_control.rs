use super::{CpuResult, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::error::CpuError;
use crate::instruction::CB_INSTRUCTIONS;

// --- Control flow ---
impl Cpu {
    pub fn op_nop(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        Ok(0)
    }

    // JP a16 / JP HL / JP cc, a16
    fn conditional_jp_a16(&mut self, condition: bool, bus: &dyn Bus) -> CpuResult<u16> {
        let address = self.read_d16(bus);
        if condition {
            self.pc = address;
            Ok(4) // taken: 16 total
        } else {
            Ok(0) // not taken: 12 total
        }
    }
    pub fn op_jp_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.pc = self.read_d16(bus);
        Ok(0)
    }
    pub fn op_jp_hl(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.pc = self.hl();
        Ok(0)
    }
    pub fn op_jp_nz_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jp_a16(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jp_z_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jp_a16(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jp_nc_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jp_a16(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_jp_c_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jp_a16(self.get_flag(FLAG_C), bus)
    }

    // JR r8 / JR cc, r8: relative to the PC after the operand
    fn conditional_jr(&mut self, condition: bool, bus: &dyn Bus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        if condition {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4) // taken: 12 total
        } else {
            Ok(0) // not taken: 8 total
        }
    }
    pub fn op_jr_r8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        self.pc = self.pc.wrapping_add(offset as i16 as u16);
        Ok(0)
    }
    pub fn op_jr_nz_r8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jr(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jr_z_r8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jr(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jr_nc_r8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jr(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_jr_c_r8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_jr(self.get_flag(FLAG_C), bus)
    }

    // CALL a16 / CALL cc, a16: pushes the post-advance PC
    fn conditional_call_a16(&mut self, condition: bool, bus: &mut dyn Bus) -> CpuResult<u16> {
        let address = self.read_d16(bus);
        if condition {
            self.push_word(self.pc, bus);
            self.pc = address;
            Ok(12) // taken: 24 total
        } else {
            Ok(0) // not taken: 12 total
        }
    }
    pub fn op_call_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let address = self.read_d16(bus);
        self.push_word(self.pc, bus);
        self.pc = address;
        Ok(0)
    }
    pub fn op_call_nz_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_call_a16(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_call_z_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_call_a16(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_call_nc_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_call_a16(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_call_c_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_call_a16(self.get_flag(FLAG_C), bus)
    }

    // RET / RET cc / RETI
    fn conditional_ret(&mut self, condition: bool, bus: &mut dyn Bus) -> CpuResult<u16> {
        if condition {
            self.pc = self.pop_word(bus);
            Ok(12) // taken: 20 total
        } else {
            Ok(0) // not taken: 8 total
        }
    }
    pub fn op_ret(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.pc = self.pop_word(bus);
        Ok(0)
    }
    pub fn op_ret_nz(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_ret_z(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_ret_nc(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_ret_c(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_C), bus)
    }
    pub fn op_reti(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.pc = self.pop_word(bus);
        self.ime = true;
        Ok(0)
    }

    // RST n
    fn rst(&mut self, vector: u16, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.push_word(self.pc, bus);
        self.pc = vector;
        Ok(0)
    }
    pub fn op_rst_00h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0000, bus)
    }
    pub fn op_rst_08h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0008, bus)
    }
    pub fn op_rst_10h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0010, bus)
    }
    pub fn op_rst_18h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0018, bus)
    }
    pub fn op_rst_20h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0020, bus)
    }
    pub fn op_rst_28h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0028, bus)
    }
    pub fn op_rst_30h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0030, bus)
    }
    pub fn op_rst_38h(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.rst(0x0038, bus)
    }

    // Interrupt master enable: state only, servicing happens upstream.
    pub fn op_di(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.ime = false;
        Ok(0)
    }
    pub fn op_ei(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.ime = true;
        Ok(0)
    }

    // HALT and STOP latch their state bit; the driver owns the wake-up
    // policy. STOP's trailing 0x00 operand byte is consumed by the PC
    // advance and never inspected.
    pub fn op_halt(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.halted = true;
        Ok(0)
    }
    pub fn op_stop(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.stopped = true;
        log::warn!(
            "STOP at PC={:#06X}; low-power behavior is left to the driver",
            self.instruction_pc
        );
        Ok(0)
    }
}

// --- Flag and accumulator housekeeping ---
impl Cpu {
    pub fn op_scf(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, true);
        Ok(0)
    }
    pub fn op_ccf(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        let carry = self.get_flag(FLAG_C);
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, !carry);
        Ok(0)
    }
    pub fn op_cpl(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.a = !self.a;
        self.set_flag(FLAG_N | FLAG_H, true);
        Ok(0)
    }
    pub fn op_daa(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.daa();
        Ok(0)
    }
}

// --- CB prefix dispatch ---
impl Cpu {
    // The prefix's 4 base cycles sit in the base table; the selected
    // extension's full cost is reported as extra cycles. The table is
    // dense, the None arm is defensive.
    pub fn op_prefix_cb(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let cb_opcode = bus.read_byte(self.instruction_pc.wrapping_add(1));
        let Some(extension) = &CB_INSTRUCTIONS[cb_opcode as usize] else {
            log::error!(
                "unknown CB opcode {:#04X} at PC={:#06X}",
                cb_opcode,
                self.instruction_pc
            );
            return Err(CpuError::UnknownOpcode {
                opcode: cb_opcode,
                cb: true,
            });
        };
        (extension.execute)(self, bus)?;
        Ok(extension.cycles as u16)
    }
}
