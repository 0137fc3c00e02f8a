// Accumulator rotates (non-CB). Generated from the same primitives as the
// CB rotate band; unlike their CB twins these always clear Z.
impl crate::cpu::Cpu {
    acc_rot!(op_rlca, rlc);
    acc_rot!(op_rla, rl);
    acc_rot!(op_rrca, rrc);
    acc_rot!(op_rra, rr);
}
