// Handler-generating macros. Each expands to one opcode handler method on
// `Cpu` with the table signature `fn(&mut Cpu, &mut dyn Bus) -> CpuResult<u16>`,
// returning the extra cycles on top of the table's base cost (0 for all of
// these unconditional forms).

// --- LD macros ---
macro_rules! ld_r_r {
    ($name:ident, $dst:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$dst = self.$src;
            Ok(0)
        }
    };
}
macro_rules! ld_r_hlp {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$dst = bus.read_byte(self.hl());
            Ok(0)
        }
    };
}
macro_rules! ld_hlp_r {
    ($name:ident, $src:ident) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            bus.write_byte(self.hl(), self.$src);
            Ok(0)
        }
    };
}
macro_rules! ld_r_d8 {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$dst = self.read_d8(bus);
            Ok(0)
        }
    };
}

// --- ALU macros ---
macro_rules! alu_a_r {
    // Plain version
    ($name:ident, $op:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$op(self.$src, false);
            Ok(0)
        }
    };
    // Carry-in version (ADC/SBC)
    ($name:ident, $op:ident, $src:ident, carry) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$op(self.$src, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_hlp {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.hl());
            self.$op(value, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.hl());
            self.$op(value, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_d8 {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            self.$op(value, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            self.$op(value, true);
            Ok(0)
        }
    };
}
macro_rules! inc_r {
    ($name:ident, $reg:ident) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$reg = self.inc_u8(self.$reg);
            Ok(0)
        }
    };
}
macro_rules! dec_r {
    ($name:ident, $reg:ident) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$reg = self.dec_u8(self.$reg);
            Ok(0)
        }
    };
}

// --- Accumulator rotate macro (non-CB) ---
// Same rotate primitives as the CB band, but these forms always clear Z.
macro_rules! acc_rot {
    ($name:ident, $op:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.a = self.$op(self.a);
            self.set_flag(super::FLAG_Z, false);
            Ok(0)
        }
    };
}

// --- CB macros ---
macro_rules! cb_reg_op {
    // Rotate/shift/swap through a shared primitive
    ($name:ident, $op:ident, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$reg = self.$op(self.$reg);
            Ok(0)
        }
    };
    ($name:ident, bit, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.bit_test($bit, self.$reg);
            Ok(0)
        }
    };
    ($name:ident, res, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$reg &= !(1 << $bit);
            Ok(0)
        }
    };
    ($name:ident, set, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            self.$reg |= 1 << $bit;
            Ok(0)
        }
    };
}
macro_rules! cb_hlp_op {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let address = self.hl();
            let value = bus.read_byte(address);
            let result = self.$op(value);
            bus.write_byte(address, result);
            Ok(0)
        }
    };
    ($name:ident, bit, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.hl());
            self.bit_test($bit, value);
            Ok(0)
        }
    };
    ($name:ident, res, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let address = self.hl();
            let value = bus.read_byte(address);
            bus.write_byte(address, value & !(1 << $bit));
            Ok(0)
        }
    };
    ($name:ident, set, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::bus::Bus) -> super::CpuResult<u16> {
            let address = self.hl();
            let value = bus.read_byte(address);
            bus.write_byte(address, value | (1 << $bit));
            Ok(0)
        }
    };
}
