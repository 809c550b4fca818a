//! Syscall handler seam for embedders.
//!
//! `syscall` traps into the host: the executor hands the injected handler
//! mutable access to the whole machine — registers, HI/LO, PC, memory —
//! and resumes at the following instruction when it returns. Kernel
//! emulation lives entirely on the host side of this seam; the core ships
//! only the no-op default.

use crate::cpu::{Cpu, Step};
use crate::error::VmError;

/// Host-side handler for the `syscall` instruction.
pub trait SyscallHandler {
    /// Handle one `syscall`. Return [`Step::Halt`] to stop the run loop or
    /// [`Step::Continue`] to resume at the next instruction.
    fn syscall(&mut self, cpu: &mut Cpu) -> Result<Step, VmError>;
}

/// Default handler: ignores the call and lets execution continue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopSyscall;

impl SyscallHandler for NopSyscall {
    fn syscall(&mut self, _cpu: &mut Cpu) -> Result<Step, VmError> {
        Ok(Step::Continue)
    }
}
