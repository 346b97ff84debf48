use std::fmt;

use serde::{Deserialize, Serialize};

/// Bytecode instruction discriminants.
///
/// The numeric values are a contract with the compiler stage and must not be
/// reordered. Two discriminants are reserved: [`OpCode::Push`] is the legacy
/// raw push the compiler no longer emits, and [`OpCode::Repeat`] was declared
/// but never given semantics. Both fail at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OpCode {
    Push = 0,
    PushInt = 1,
    PushFloat = 2,
    PushStr = 3,
    Add = 4,
    Sub = 5,
    Mul = 6,
    Div = 7,
    CmpEq = 8,
    CmpNeq = 9,
    CmpLt = 10,
    CmpLtEq = 11,
    CmpGt = 12,
    CmpGtEq = 13,
    Call = 14,
    Register = 15,
    PushLookup = 16,
    Assign = 17,
    Ret = 18,
    JumpIfFalse = 19,
    Jump = 20,
    Repeat = 21,
    Null = 22,
}

impl OpCode {
    /// Returns the assembler mnemonic for this opcode.
    ///
    /// These names are user-visible in traces and error messages and are
    /// expected to remain stable.
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Push => "PUSH",
            OpCode::PushInt => "PUSH_INT",
            OpCode::PushFloat => "PUSH_FLOAT",
            OpCode::PushStr => "PUSH_STR",
            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mul => "MUL",
            OpCode::Div => "DIV",
            OpCode::CmpEq => "CMP_EQ",
            OpCode::CmpNeq => "CMP_NEQ",
            OpCode::CmpLt => "CMP_LT",
            OpCode::CmpLtEq => "CMP_LT_EQ",
            OpCode::CmpGt => "CMP_GT",
            OpCode::CmpGtEq => "CMP_GT_EQ",
            OpCode::Call => "CALL",
            OpCode::Register => "REGISTER",
            OpCode::PushLookup => "PUSH_LOOKUP",
            OpCode::Assign => "ASSIGN",
            OpCode::Ret => "RET",
            OpCode::JumpIfFalse => "JUMP_IF_FALSE",
            OpCode::Jump => "JUMP",
            OpCode::Repeat => "REPEAT",
            OpCode::Null => "NULL",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
