use lyre::runtime::gc::Heap;
use lyre::runtime::symbol_table::SymbolTable;
use lyre::runtime::value::Value;

#[test]
fn missing_binding_is_none_not_a_sentinel() {
    let table = SymbolTable::new();
    assert_eq!(table.lookup("anything"), None);
    assert!(table.is_empty());
}

#[test]
fn bindings_resolve_to_the_stored_handle() {
    let mut heap = Heap::new();
    let mut table = SymbolTable::new();

    let h = heap.alloc(Value::Integer(42)).unwrap();
    table.define("answer", h);

    let found = table.lookup("answer").unwrap();
    assert_eq!(found, h);
    assert_eq!(heap.get(found), &Value::Integer(42));
}

#[test]
fn rebinding_replaces_the_handle() {
    let mut heap = Heap::new();
    let mut table = SymbolTable::new();

    let first = heap.alloc(Value::Integer(1)).unwrap();
    let second = heap.alloc(Value::Integer(2)).unwrap();
    table.define("x", first);
    table.define("x", second);

    assert_eq!(table.lookup("x"), Some(second));
    assert_eq!(table.len(), 1);
}

#[test]
fn handles_iterates_every_binding() {
    let mut heap = Heap::new();
    let mut table = SymbolTable::new();

    let a = heap.alloc(Value::Integer(1)).unwrap();
    let b = heap.alloc(Value::Boolean(true)).unwrap();
    table.define("a", a);
    table.define("b", b);

    let mut handles: Vec<_> = table.handles().collect();
    handles.sort_by_key(|h| h.index());
    assert_eq!(handles, vec![a, b]);
}
