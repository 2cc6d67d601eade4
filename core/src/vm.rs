//! Status codes reported by the bytecode virtual machine.
//!
//! The VM itself lives outside this crate. Its status vocabulary is kept here
//! so errors the assembler can already detect while folding (such as a
//! division by zero) are named the same way the runtime names them.

use core::fmt;

/// Outcome of executing an instruction in the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmStatus {
    Ok,
    IllegalInstructionAccess,
    StackOverflow,
    StackUnderflow,
    DivideByZero,
}

impl VmStatus {
    pub fn is_ok(self) -> bool {
        self == VmStatus::Ok
    }
}

impl fmt::Display for VmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VmStatus::Ok => "Ok",
            VmStatus::IllegalInstructionAccess => "IllegalInstructionAccess",
            VmStatus::StackOverflow => "StackOverflow",
            VmStatus::StackUnderflow => "StackUnderflow",
            VmStatus::DivideByZero => "DivideByZero",
        };
        f.write_str(name)
    }
}
