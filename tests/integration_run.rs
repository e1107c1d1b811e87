//! End-to-end runs of complete card programs through the public API,
//! including the demo programs shipped with the crate.

use hanzicard::interpreter::Interpreter;
use hanzicard::vm::VmState;

fn run_program(source: &str) -> Interpreter {
    let mut interp = Interpreter::new(VmState::new());
    interp.load_program(source);
    interp.run();
    interp
}

#[test]
fn arithmetic_demo_computes_and_stores() {
    let interp = run_program(include_str!("../demos/arithmetic.hzc"));
    assert_eq!(interp.vm.accumulator, 18);
    assert_eq!(interp.vm.numeric_memory[0], 18);
    assert!(!interp.vm.running);
}

#[test]
fn hanzi_demo_builds_pinyin_and_part_of_speech() {
    let interp = run_program(include_str!("../demos/hanzi_demo.hzc"));
    assert_eq!(interp.vm.text_memory[0], "ni hao zhong guo");
    assert_eq!(interp.vm.text_accumulator, "名词");
    assert!(!interp.vm.running);
}

#[test]
fn mixed_program_with_jump_and_both_banks() {
    let source = "\
加 2
存储 槽10
拼接 水
存储文本 文槽10
跳转 6
加 100
读取 槽10
拼接 文槽10
停机
";
    let interp = run_program(source);
    // The jump skips the 加 100 card.
    assert_eq!(interp.vm.accumulator, 2);
    assert_eq!(interp.vm.text_accumulator, "水水");
    assert!(!interp.vm.running);
}

#[test]
fn load_time_diagnostics_do_not_stop_the_rest_of_the_program() {
    let source = "\
未知指令 5
加 3
减
停机
";
    let mut interp = Interpreter::new(VmState::new());
    interp.load_program(source);
    let diagnostics = interp.vm.take_output();
    assert_eq!(
        diagnostics,
        vec![
            "line 1: invalid instruction '未知指令'".to_string(),
            "line 3: instruction '减' requires an operand".to_string(),
        ]
    );
    interp.run();
    assert_eq!(interp.vm.accumulator, 3);
    assert!(!interp.vm.running);
}

#[test]
fn memory_survives_reload_but_not_reset() {
    let mut interp = Interpreter::new(VmState::new());
    interp.load_program("加 5\n存储 槽0\n停机\n");
    interp.run();
    assert_eq!(interp.vm.numeric_memory[0], 5);

    // Reload alone keeps the bank.
    interp.load_program("读取 槽0\n加 1\n停机\n");
    interp.run();
    assert_eq!(interp.vm.accumulator, 6);

    // Reset clears it.
    interp.vm.reset();
    interp.load_program("读取 槽0\n停机\n");
    interp.run();
    assert_eq!(interp.vm.accumulator, 0);
}
