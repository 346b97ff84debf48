//! Host-provided functions invokable from bytecode by name.

use std::fmt;

use crate::runtime::error::Result;
use crate::runtime::vm::Machine;

/// Signature of a native function.
///
/// Natives are leaf calls: they consume `argc` arguments from the operand
/// stack and may push a result, but they must not re-enter [`Machine::run`].
pub type NativeFn = fn(&mut Machine, usize) -> Result<()>;

/// One named entry in the machine's native registry.
#[derive(Clone)]
pub struct Native {
    pub name: String,
    pub func: NativeFn,
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native({})", self.name)
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// The registry installed by [`Machine::new`].
pub(crate) fn default_natives() -> Vec<Native> {
    vec![
        Native {
            name: "println".to_string(),
            func: native_println,
        },
        Native {
            name: "print".to_string(),
            func: native_print,
        },
        Native {
            name: "RUNGC".to_string(),
            func: native_run_gc,
        },
    ]
}

fn render_args(machine: &mut Machine, argc: usize) -> Result<String> {
    let mut rendered = Vec::with_capacity(argc);
    for _ in 0..argc {
        let handle = machine.pop()?;
        rendered.push(machine.heap().render(handle));
    }
    // Arguments were pushed left to right, so popping reversed them.
    rendered.reverse();
    Ok(rendered.join(" "))
}

fn native_println(machine: &mut Machine, argc: usize) -> Result<()> {
    println!("{}", render_args(machine, argc)?);
    Ok(())
}

fn native_print(machine: &mut Machine, argc: usize) -> Result<()> {
    print!("{}", render_args(machine, argc)?);
    Ok(())
}

fn native_run_gc(machine: &mut Machine, _argc: usize) -> Result<()> {
    machine.collect();
    Ok(())
}
