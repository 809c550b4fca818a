//! mips1-executor: MIPS I 32-bit interpreter core.
//!
//! This crate provides:
//! - A byte-addressable, big-endian memory and a flat-image loader
//! - A pure instruction decoder for the R/I/J encodings
//! - A single-cycle CPU executor with HI/LO and a syscall handler seam

pub mod cpu;
pub mod decode;
pub mod error;
pub mod loader;
pub mod memory;
pub mod syscall;

pub use cpu::{Cpu, Step, VmState, REG_NAMES};
pub use decode::Instruction;
pub use error::VmError;
pub use loader::Image;
pub use memory::Memory;
pub use syscall::{NopSyscall, SyscallHandler};
