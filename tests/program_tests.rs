use lyre::bytecode::{Instruction, OpCode, Program};

#[test]
fn constructors_fill_only_their_payload_slot() {
    let plain = Instruction::op(OpCode::Ret);
    assert_eq!(plain.code, OpCode::Ret);
    assert!(plain.sym.is_empty());
    assert_eq!(plain.num, 0);

    let jump = Instruction::with_num(OpCode::Jump, -4);
    assert_eq!(jump.num, -4);

    let lit = Instruction::with_real(OpCode::PushFloat, 1.5);
    assert_eq!(lit.real, 1.5);

    let call = Instruction::with_sym_num(OpCode::Call, "f", 2);
    assert_eq!(call.sym, "f");
    assert_eq!(call.num, 2);
}

#[test]
fn display_renders_assembler_text() {
    assert_eq!(
        Instruction::with_num(OpCode::PushInt, 7).to_string(),
        "PUSH_INT 7"
    );
    assert_eq!(
        Instruction::with_sym(OpCode::PushStr, "hi").to_string(),
        "PUSH_STR \"hi\""
    );
    assert_eq!(
        Instruction::with_sym_num(OpCode::Call, "f", 2).to_string(),
        "CALL f 2"
    );
    assert_eq!(
        Instruction::with_sym(OpCode::Assign, "x").to_string(),
        "ASSIGN x"
    );
    assert_eq!(
        Instruction::with_num(OpCode::JumpIfFalse, 3).to_string(),
        "JUMP_IF_FALSE 3"
    );
    assert_eq!(Instruction::op(OpCode::Ret).to_string(), "RET");
    assert_eq!(Instruction::op(OpCode::Null).to_string(), "NULL");
}

#[test]
fn opcode_names_are_stable() {
    assert_eq!(OpCode::CmpLtEq.name(), "CMP_LT_EQ");
    assert_eq!(OpCode::PushLookup.name(), "PUSH_LOOKUP");
    assert_eq!(OpCode::Register.to_string(), "REGISTER");
}

#[test]
fn program_indexes_its_instructions() {
    let program = Program::from(vec![
        Instruction::with_num(OpCode::PushInt, 1),
        Instruction::op(OpCode::Ret),
    ]);
    assert_eq!(program.len(), 2);
    assert!(!program.is_empty());
    assert_eq!(program.get(1), Some(&Instruction::op(OpCode::Ret)));
    assert_eq!(program.get(2), None);
    assert_eq!(program.instructions().len(), 2);

    assert!(Program::default().is_empty());
}
