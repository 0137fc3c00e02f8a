// Flag positions (bit index in the F register)
pub const FLAG_Z_POS: u8 = 7; // Zero
pub const FLAG_N_POS: u8 = 6; // Subtract
pub const FLAG_H_POS: u8 = 5; // Half carry
pub const FLAG_C_POS: u8 = 4; // Carry

// Flag masks for the F register; the low nibble is always zero.
pub const FLAG_Z: u8 = 1 << FLAG_Z_POS;
pub const FLAG_N: u8 = 1 << FLAG_N_POS;
pub const FLAG_H: u8 = 1 << FLAG_H_POS;
pub const FLAG_C: u8 = 1 << FLAG_C_POS;

// Register file contents at the moment the DMG boot ROM hands control to
// the cartridge entry point (Pandocs power-up sequence).
pub const POST_BOOT_AF: u16 = 0x01B0;
pub const POST_BOOT_BC: u16 = 0x0013;
pub const POST_BOOT_DE: u16 = 0x00D8;
pub const POST_BOOT_HL: u16 = 0x014D;
pub const POST_BOOT_SP: u16 = 0xFFFE;
pub const POST_BOOT_PC: u16 = 0x0100;
