//! Loaded instruction representation.
//!
//! This layer contains no execution semantics. A [`Program`] is produced by
//! the external compiler stage and handed to the machine as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bytecode::op_code::OpCode;

/// One bytecode instruction: a discriminant plus up to three payload slots.
///
/// `sym` carries the identifier/text payload (empty when the opcode takes
/// none), `num` the integer payload, and `real` the float-literal payload.
/// Which slots are meaningful is fixed per opcode; the unused slots stay at
/// their defaults. Instructions are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub code: OpCode,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sym: String,
    #[serde(default)]
    pub num: i64,
    #[serde(default)]
    pub real: f64,
}

impl Instruction {
    /// Creates an instruction with no payload.
    pub fn op(code: OpCode) -> Self {
        Self {
            code,
            sym: String::new(),
            num: 0,
            real: 0.0,
        }
    }

    /// Creates an instruction with an integer payload.
    pub fn with_num(code: OpCode, num: i64) -> Self {
        Self {
            num,
            ..Self::op(code)
        }
    }

    /// Creates an instruction with a float payload.
    pub fn with_real(code: OpCode, real: f64) -> Self {
        Self {
            real,
            ..Self::op(code)
        }
    }

    /// Creates an instruction with a text payload.
    pub fn with_sym(code: OpCode, sym: impl Into<String>) -> Self {
        Self {
            sym: sym.into(),
            ..Self::op(code)
        }
    }

    /// Creates an instruction with both a text and an integer payload.
    pub fn with_sym_num(code: OpCode, sym: impl Into<String>, num: i64) -> Self {
        Self {
            sym: sym.into(),
            num,
            ..Self::op(code)
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            OpCode::PushInt | OpCode::Jump | OpCode::JumpIfFalse => {
                write!(f, "{} {}", self.code, self.num)
            }
            OpCode::PushFloat => write!(f, "{} {}", self.code, self.real),
            OpCode::PushStr => write!(f, "{} {:?}", self.code, self.sym),
            OpCode::PushLookup | OpCode::Assign => write!(f, "{} {}", self.code, self.sym),
            OpCode::Call | OpCode::Register => {
                write!(f, "{} {} {}", self.code, self.sym, self.num)
            }
            _ => write!(f, "{}", self.code),
        }
    }
}

/// An immutable, fully compiled instruction sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}
