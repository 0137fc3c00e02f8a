use thiserror::Error;

/// The single failure mode of the dispatch pipeline.
///
/// ALU and memory operations cannot fail at this layer; the only error is a
/// byte that selects no instruction. The dispatcher reports it without
/// mutating any CPU state, so the caller decides whether to abort, log, or
/// skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The opcode byte has no entry in the targeted dispatch table.
    #[error("unknown opcode {opcode:#04X} (cb prefix: {cb})")]
    UnknownOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// True when the byte followed a 0xCB prefix.
        cb: bool,
    },
}
