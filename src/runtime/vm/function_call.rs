use crate::runtime::error::{Result, RuntimeError};
use crate::runtime::frame::Frame;

use super::Machine;

impl Machine {
    /// Records the current position as the entry point of `name`.
    ///
    /// The body starts at the instruction after the register instruction.
    /// Re-registering a name overwrites the previous entry.
    pub(super) fn register_function(&mut self, name: &str) {
        self.functions.insert(name.to_string(), self.ip + 1);
    }

    /// Executes a call: registered functions first, then natives.
    ///
    /// A registered function gets a fresh frame whose `return_addr` is the
    /// instruction after the call; a native runs as a leaf call on the
    /// caller's frame. Unknown names leave the call stack untouched.
    pub(super) fn execute_call(&mut self, name: &str, argc: usize) -> Result<isize> {
        if let Some(&entry) = self.functions.get(name) {
            self.call_stack.push(Frame::new(self.ip + 1));
            self.ip = entry;
            return Ok(0);
        }

        if self.run_native(name, argc)? {
            return Ok(1);
        }

        Err(RuntimeError::UndefinedFunction(name.to_string()))
    }

    /// Invokes the first native registered under `name` with `argc`.
    ///
    /// Returns whether a native matched. Duplicate registrations shadow by
    /// registration order rather than erroring.
    pub fn run_native(&mut self, name: &str, argc: usize) -> Result<bool> {
        let native = self
            .natives
            .iter()
            .find(|native| native.name == name)
            .map(|native| native.func);

        match native {
            Some(func) => {
                func(self, argc)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Pops the innermost frame and resumes at its return address.
    ///
    /// The root frame is never popped; returning from it is a
    /// `CallStackUnderflow` with the call stack left intact.
    pub(super) fn execute_ret(&mut self) -> Result<isize> {
        if self.call_stack.len() <= 1 {
            return Err(RuntimeError::CallStackUnderflow);
        }
        if let Some(frame) = self.call_stack.pop() {
            // The frame's bindings are dropped with it here.
            self.ip = frame.return_addr;
        }
        Ok(0)
    }
}
