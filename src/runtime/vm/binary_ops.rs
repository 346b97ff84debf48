use crate::bytecode::OpCode;
use crate::runtime::error::{Result, RuntimeError};
use crate::runtime::value::Value;

use super::Machine;

impl Machine {
    /// Executes one arithmetic opcode.
    ///
    /// The right operand is on top of the stack. Both operands must be
    /// integers; there is no coercion. Arithmetic wraps on overflow and
    /// `DIV` truncates toward zero.
    pub(super) fn execute_arithmetic(&mut self, op: OpCode) -> Result<()> {
        let right = self.pop()?;
        let left = self.pop()?;
        let r = self.heap.get(right).as_int()?;
        let l = self.heap.get(left).as_int()?;

        if op == OpCode::Div && r == 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let result = match op {
            OpCode::Add => l.wrapping_add(r),
            OpCode::Sub => l.wrapping_sub(r),
            OpCode::Mul => l.wrapping_mul(r),
            OpCode::Div => l.wrapping_div(r),
            _ => return Err(RuntimeError::UnknownOpcode(op)),
        };

        self.alloc_push(Value::Integer(result))
    }
}
