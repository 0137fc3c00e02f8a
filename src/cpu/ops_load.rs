use super::CpuResult;
use crate::bus::Bus;
use crate::cpu::Cpu;

// --- 8-bit loads ---
impl Cpu {
    // LD r, r' (0x40..0x7F except 0x76)
    ld_r_r!(op_ld_b_b, b, b);
    ld_r_r!(op_ld_b_c, b, c);
    ld_r_r!(op_ld_b_d, b, d);
    ld_r_r!(op_ld_b_e, b, e);
    ld_r_r!(op_ld_b_h, b, h);
    ld_r_r!(op_ld_b_l, b, l);
    ld_r_hlp!(op_ld_b_hlp, b);
    ld_r_r!(op_ld_b_a, b, a);

    ld_r_r!(op_ld_c_b, c, b);
    ld_r_r!(op_ld_c_c, c, c);
    ld_r_r!(op_ld_c_d, c, d);
    ld_r_r!(op_ld_c_e, c, e);
    ld_r_r!(op_ld_c_h, c, h);
    ld_r_r!(op_ld_c_l, c, l);
    ld_r_hlp!(op_ld_c_hlp, c);
    ld_r_r!(op_ld_c_a, c, a);

    ld_r_r!(op_ld_d_b, d, b);
    ld_r_r!(op_ld_d_c, d, c);
    ld_r_r!(op_ld_d_d, d, d);
    ld_r_r!(op_ld_d_e, d, e);
    ld_r_r!(op_ld_d_h, d, h);
    ld_r_r!(op_ld_d_l, d, l);
    ld_r_hlp!(op_ld_d_hlp, d);
    ld_r_r!(op_ld_d_a, d, a);

    ld_r_r!(op_ld_e_b, e, b);
    ld_r_r!(op_ld_e_c, e, c);
    ld_r_r!(op_ld_e_d, e, d);
    ld_r_r!(op_ld_e_e, e, e);
    ld_r_r!(op_ld_e_h, e, h);
    ld_r_r!(op_ld_e_l, e, l);
    ld_r_hlp!(op_ld_e_hlp, e);
    ld_r_r!(op_ld_e_a, e, a);

    ld_r_r!(op_ld_h_b, h, b);
    ld_r_r!(op_ld_h_c, h, c);
    ld_r_r!(op_ld_h_d, h, d);
    ld_r_r!(op_ld_h_e, h, e);
    ld_r_r!(op_ld_h_h, h, h);
    ld_r_r!(op_ld_h_l, h, l);
    ld_r_hlp!(op_ld_h_hlp, h);
    ld_r_r!(op_ld_h_a, h, a);

    ld_r_r!(op_ld_l_b, l, b);
    ld_r_r!(op_ld_l_c, l, c);
    ld_r_r!(op_ld_l_d, l, d);
    ld_r_r!(op_ld_l_e, l, e);
    ld_r_r!(op_ld_l_h, l, h);
    ld_r_r!(op_ld_l_l, l, l);
    ld_r_hlp!(op_ld_l_hlp, l);
    ld_r_r!(op_ld_l_a, l, a);

    ld_hlp_r!(op_ld_hlp_b, b);
    ld_hlp_r!(op_ld_hlp_c, c);
    ld_hlp_r!(op_ld_hlp_d, d);
    ld_hlp_r!(op_ld_hlp_e, e);
    ld_hlp_r!(op_ld_hlp_h, h);
    ld_hlp_r!(op_ld_hlp_l, l);
    ld_hlp_r!(op_ld_hlp_a, a);

    ld_r_r!(op_ld_a_b, a, b);
    ld_r_r!(op_ld_a_c, a, c);
    ld_r_r!(op_ld_a_d, a, d);
    ld_r_r!(op_ld_a_e, a, e);
    ld_r_r!(op_ld_a_h, a, h);
    ld_r_r!(op_ld_a_l, a, l);
    ld_r_hlp!(op_ld_a_hlp, a);
    ld_r_r!(op_ld_a_a, a, a);

    // LD r, d8
    ld_r_d8!(op_ld_b_d8, b);
    ld_r_d8!(op_ld_c_d8, c);
    ld_r_d8!(op_ld_d_d8, d);
    ld_r_d8!(op_ld_e_d8, e);
    ld_r_d8!(op_ld_h_d8, h);
    ld_r_d8!(op_ld_l_d8, l);
    ld_r_d8!(op_ld_a_d8, a);
    pub fn op_ld_hlp_d8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.read_d8(bus);
        bus.write_byte(self.hl(), value);
        Ok(0)
    }

    // A traffic through (BC) and (DE)
    pub fn op_ld_bcp_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        bus.write_byte(self.bc(), self.a);
        Ok(0)
    }
    pub fn op_ld_dep_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        bus.write_byte(self.de(), self.a);
        Ok(0)
    }
    pub fn op_ld_a_bcp(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.a = bus.read_byte(self.bc());
        Ok(0)
    }
    pub fn op_ld_a_dep(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.a = bus.read_byte(self.de());
        Ok(0)
    }

    // A traffic through (HL) with post-increment/post-decrement
    pub fn op_ld_hli_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let hl = self.hl();
        bus.write_byte(hl, self.a);
        self.set_hl(hl.wrapping_add(1));
        Ok(0)
    }
    pub fn op_ld_hld_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let hl = self.hl();
        bus.write_byte(hl, self.a);
        self.set_hl(hl.wrapping_sub(1));
        Ok(0)
    }
    pub fn op_ld_a_hli(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let hl = self.hl();
        self.a = bus.read_byte(hl);
        self.set_hl(hl.wrapping_add(1));
        Ok(0)
    }
    pub fn op_ld_a_hld(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let hl = self.hl();
        self.a = bus.read_byte(hl);
        self.set_hl(hl.wrapping_sub(1));
        Ok(0)
    }

    // High-page forms: effective address is 0xFF00 | offset
    pub fn op_ldh_a8_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let offset = self.read_d8(bus);
        bus.write_byte(0xFF00 | offset as u16, self.a);
        Ok(0)
    }
    pub fn op_ldh_a_a8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let offset = self.read_d8(bus);
        self.a = bus.read_byte(0xFF00 | offset as u16);
        Ok(0)
    }
    pub fn op_ld_cp_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        bus.write_byte(0xFF00 | self.c as u16, self.a);
        Ok(0)
    }
    pub fn op_ld_a_cp(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.a = bus.read_byte(0xFF00 | self.c as u16);
        Ok(0)
    }

    // Absolute-address A traffic
    pub fn op_ld_a16_a(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let address = self.read_d16(bus);
        bus.write_byte(address, self.a);
        Ok(0)
    }
    pub fn op_ld_a_a16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let address = self.read_d16(bus);
        self.a = bus.read_byte(address);
        Ok(0)
    }
}

// --- 16-bit loads and stack traffic ---
impl Cpu {
    pub fn op_ld_bc_d16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.set_bc(value);
        Ok(0)
    }
    pub fn op_ld_de_d16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.set_de(value);
        Ok(0)
    }
    pub fn op_ld_hl_d16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.set_hl(value);
        Ok(0)
    }
    pub fn op_ld_sp_d16(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        self.sp = self.read_d16(bus);
        Ok(0)
    }

    // LD (a16), SP: low byte first at the lower address
    pub fn op_ld_a16_sp(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let address = self.read_d16(bus);
        bus.write_byte(address, self.sp as u8);
        bus.write_byte(address.wrapping_add(1), (self.sp >> 8) as u8);
        Ok(0)
    }

    pub fn op_ld_sp_hl(&mut self, _bus: &mut dyn Bus) -> CpuResult<u16> {
        self.sp = self.hl();
        Ok(0)
    }

    // LD HL, SP+e: signed address, unsigned low-byte flags
    pub fn op_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        let result = self.add_sp_signed(offset);
        self.set_hl(result);
        Ok(0)
    }

    // PUSH rr / POP rr
    pub fn op_push_bc(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.bc();
        self.push_word(value, bus);
        Ok(0)
    }
    pub fn op_push_de(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.de();
        self.push_word(value, bus);
        Ok(0)
    }
    pub fn op_push_hl(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.hl();
        self.push_word(value, bus);
        Ok(0)
    }
    pub fn op_push_af(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.af();
        self.push_word(value, bus);
        Ok(0)
    }
    pub fn op_pop_bc(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_bc(value);
        Ok(0)
    }
    pub fn op_pop_de(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_de(value);
        Ok(0)
    }
    pub fn op_pop_hl(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_hl(value);
        Ok(0)
    }
    // POP AF goes through set_af, which keeps the low nibble of F zero.
    pub fn op_pop_af(&mut self, bus: &mut dyn Bus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.set_af(value);
        Ok(0)
    }
}
