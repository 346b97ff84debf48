use crate::runtime::symbol_table::SymbolTable;

/// One function activation record.
///
/// The frame exclusively owns its symbol table; both are dropped together on
/// return, so bindings never outlive the frame that made them.
#[derive(Debug, Default)]
pub struct Frame {
    /// Instruction index execution resumes at after `RET`.
    pub return_addr: usize,
    /// Local bindings of this activation.
    pub symbols: SymbolTable,
}

impl Frame {
    pub fn new(return_addr: usize) -> Self {
        Self {
            return_addr,
            symbols: SymbolTable::new(),
        }
    }
}
