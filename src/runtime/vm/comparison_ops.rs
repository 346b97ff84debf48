use crate::bytecode::OpCode;
use crate::runtime::error::{Result, RuntimeError};
use crate::runtime::value::Value;

use super::Machine;

impl Machine {
    /// Executes one comparison opcode.
    ///
    /// Same operand contract as arithmetic: right on top, integers only.
    /// Pushes a boolean result.
    pub(super) fn execute_comparison(&mut self, op: OpCode) -> Result<()> {
        let right = self.pop()?;
        let left = self.pop()?;
        let r = self.heap.get(right).as_int()?;
        let l = self.heap.get(left).as_int()?;

        let result = match op {
            OpCode::CmpEq => l == r,
            OpCode::CmpNeq => l != r,
            OpCode::CmpLt => l < r,
            OpCode::CmpLtEq => l <= r,
            OpCode::CmpGt => l > r,
            OpCode::CmpGtEq => l >= r,
            _ => return Err(RuntimeError::UnknownOpcode(op)),
        };

        self.alloc_push(Value::Boolean(result))
    }
}
