//! Runtime errors.
//!
//! Every variant is local to one instruction's execution but fatal to the
//! run: the dispatch loop halts, discards the operand stack, and surfaces the
//! error to the host unchanged.

use thiserror::Error;

use crate::bytecode::OpCode;

/// Error raised by the machine during execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("stack underflow")]
    StackUnderflow,
    #[error("call stack underflow")]
    CallStackUnderflow,
    #[error("type error: expected {expected}, got {found}")]
    TypeError {
        expected: &'static str,
        found: &'static str,
    },
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("unknown function: '{0}'")]
    UndefinedFunction(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown opcode: {0}")]
    UnknownOpcode(OpCode),
    #[error("unsupported opcode: {0}")]
    UnsupportedOpcode(OpCode),
    #[error("out of memory: heap limit of {0} objects reached")]
    OutOfMemory(usize),
}

/// Result type for machine operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
