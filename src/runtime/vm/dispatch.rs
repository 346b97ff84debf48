use crate::bytecode::{Instruction, OpCode};
use crate::runtime::error::{Result, RuntimeError};
use crate::runtime::value::Value;

use super::Machine;

impl Machine {
    /// Executes one instruction and returns the signed instruction-pointer
    /// delta. Arms that transfer control absolutely (`CALL` into a
    /// registered function, `RET`) set the pointer themselves and return 0.
    pub(super) fn dispatch_instruction(&mut self, instr: &Instruction) -> Result<isize> {
        match instr.code {
            // Reserved legacy discriminant; the compiler stage no longer
            // emits it.
            OpCode::Push => Err(RuntimeError::UnsupportedOpcode(OpCode::Push)),
            OpCode::PushInt => {
                self.alloc_push(Value::Integer(instr.num))?;
                Ok(1)
            }
            OpCode::PushFloat => {
                self.alloc_push(Value::Float(instr.real))?;
                Ok(1)
            }
            OpCode::PushStr => {
                self.alloc_push(Value::String(instr.sym.as_str().into()))?;
                Ok(1)
            }
            OpCode::Add | OpCode::Sub | OpCode::Mul | OpCode::Div => {
                self.execute_arithmetic(instr.code)?;
                Ok(1)
            }
            OpCode::CmpEq
            | OpCode::CmpNeq
            | OpCode::CmpLt
            | OpCode::CmpLtEq
            | OpCode::CmpGt
            | OpCode::CmpGtEq => {
                self.execute_comparison(instr.code)?;
                Ok(1)
            }
            OpCode::Call => self.execute_call(&instr.sym, instr.num as usize),
            OpCode::Register => {
                self.register_function(&instr.sym);
                // Skip the function body in straight-line execution.
                Ok(instr.num as isize + 1)
            }
            OpCode::PushLookup => {
                let handle = self
                    .current_frame()
                    .symbols
                    .lookup(&instr.sym)
                    .ok_or_else(|| RuntimeError::UndefinedVariable(instr.sym.clone()))?;
                self.push(handle);
                Ok(1)
            }
            OpCode::Assign => {
                let handle = self.pop()?;
                self.current_frame_mut()
                    .symbols
                    .define(instr.sym.clone(), handle);
                Ok(1)
            }
            OpCode::Ret => self.execute_ret(),
            OpCode::JumpIfFalse => {
                let handle = self.pop()?;
                if self.heap.get(handle).as_bool()? {
                    Ok(1)
                } else {
                    Ok(instr.num as isize + 1)
                }
            }
            OpCode::Jump => Ok(instr.num as isize + 1),
            OpCode::Null => Ok(1),
            // Declared but never given semantics.
            OpCode::Repeat => Err(RuntimeError::UnknownOpcode(OpCode::Repeat)),
        }
    }
}
