//! Interpreter errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VmError {
    #[error("Failed to read image {path}: {source}")]
    Load {
        path: String,
        source: std::io::Error,
    },

    #[error("Image is {len} bytes, beyond the 4 GiB addressable space")]
    ImageTooLarge { len: u64 },

    #[error("Unknown opcode {op:#04x} at pc={pc:#010x}")]
    UnknownOpcode { op: u8, pc: u32 },

    #[error("Unknown funct {funct:#04x} at pc={pc:#010x}")]
    UnknownFunct { funct: u8, pc: u32 },

    #[error("Memory access out of bounds: address {addr:#010x}")]
    OutOfBounds { addr: u32 },

    #[error("Register index {index} out of range")]
    RegisterIndex { index: u8 },
}
