use crate::bytecode::Instruction;

use super::Machine;

impl Machine {
    /// Writes one pre-execution trace line to stderr.
    ///
    /// Format: instruction index, assembler text, operand-stack depth,
    /// call-stack depth.
    pub(super) fn trace_instruction(&self, ip: usize, instr: &Instruction) {
        eprintln!(
            "{:04}  {:<24}  stack={} frames={}",
            ip,
            instr.to_string(),
            self.stack.len(),
            self.call_stack.len()
        );
    }
}
