use crate::interpreter::Interpreter;
use crate::vm::VmState;
use test_log::test;

fn run_program(source: &str) -> Interpreter {
    let mut interp = Interpreter::new(VmState::new());
    interp.load_program(source);
    interp.run();
    interp
}

#[test]
fn empty_program_finishes_immediately() {
    let interp = run_program("");
    assert!(!interp.vm.running);
    assert_eq!(interp.vm.output_log, vec!["program finished".to_string()]);
    assert_eq!(interp.vm.accumulator, 0);
    assert_eq!(interp.vm.text_accumulator, "");
}

#[test]
fn arithmetic_updates_accumulator() {
    let interp = run_program("加 5\n乘 3\n减 4\n停机\n");
    assert_eq!(interp.vm.accumulator, 11);
    assert!(!interp.vm.running);
}

#[test]
fn division_rounds_toward_negative_infinity() {
    let interp = run_program("加 -7\n除 2\n停机\n");
    assert_eq!(interp.vm.accumulator, -4);
}

#[test]
fn division_by_zero_literal_halts_and_preserves_accumulator() {
    let interp = run_program("加 6\n除 0\n加 1\n停机\n");
    assert_eq!(interp.vm.accumulator, 6);
    assert!(!interp.vm.running);
    assert!(interp
        .vm
        .output_log
        .iter()
        .any(|l| l == "line 2: error: division by zero"));
}

#[test]
fn division_by_zero_slot_halts() {
    // slot 0 still holds its initial zero
    let interp = run_program("加 6\n除 槽0\n停机\n");
    assert_eq!(interp.vm.accumulator, 6);
    assert!(!interp.vm.running);
}

#[test]
fn store_then_load_restores_accumulator() {
    let interp = run_program("加 41\n存储 槽7\n加 1\n读取 槽7\n停机\n");
    assert_eq!(interp.vm.numeric_memory[7], 41);
    assert_eq!(interp.vm.accumulator, 41);
}

#[test]
fn mismatched_operand_kind_is_a_silent_no_op() {
    let interp = run_program("加 你好\n存储 5\n读取 文槽0\n停机\n");
    assert_eq!(interp.vm.accumulator, 0);
    assert_eq!(
        interp.vm.output_log,
        vec!["line 4: program halted".to_string()]
    );
}

#[test]
fn jump_redirects_to_target_instruction() {
    let interp = run_program("跳转 2\n加 5\n加 1\n停机\n");
    assert_eq!(interp.vm.accumulator, 1);
    assert!(interp
        .vm
        .output_log
        .iter()
        .any(|l| l == "line 1: jump to instruction 2"));
}

#[test]
fn indirect_jump_reads_the_slot_value() {
    let mut interp = Interpreter::new(VmState::new());
    interp.vm.numeric_memory[0] = 3;
    interp.load_program("跳转 槽0\n加 5\n加 7\n停机\n");
    interp.run();
    assert_eq!(interp.vm.accumulator, 0);
    assert!(!interp.vm.running);
}

#[test]
fn jump_out_of_range_halts() {
    let interp = run_program("跳转 9\n停机\n");
    assert!(!interp.vm.running);
    assert!(interp
        .vm
        .output_log
        .iter()
        .any(|l| l == "line 1: error: invalid jump target 9"));
}

#[test]
fn negative_jump_target_halts() {
    let interp = run_program("跳转 -1\n停机\n");
    assert!(!interp.vm.running);
    assert!(interp
        .vm
        .output_log
        .iter()
        .any(|l| l == "line 1: error: invalid jump target -1"));
}

#[test]
fn runaway_loop_is_stopped_by_the_step_ceiling() {
    // A countdown whose jump card looks conditional but is not: the jump
    // always fires, so only the guard ends the run.
    let mut interp = Interpreter::new(VmState::new());
    interp.vm.numeric_memory[0] = 3;
    interp.load_program(
        "读取 槽0\n减 1\n存储 槽0\n读取 槽1\n加 槽0\n存储 槽1\n读取 槽0\n跳转 2\n读取 槽1\n停机\n",
    );
    interp.run();
    assert!(!interp.vm.running);
    assert_eq!(
        interp.vm.output_log.last().unwrap(),
        "warning: possible infinite loop, execution stopped"
    );
}

#[test]
fn terminal_state_is_idempotent() {
    let mut interp = run_program("加 2\n停机\n");
    assert!(!interp.vm.running);
    let accumulator = interp.vm.accumulator;

    assert!(!interp.step());
    assert!(!interp.step());
    assert_eq!(interp.vm.accumulator, accumulator);
    assert_eq!(
        interp
            .vm
            .output_log
            .iter()
            .filter(|l| *l == "program finished")
            .count(),
        2
    );
}

#[test]
fn malformed_operand_aborts_the_step() {
    let interp = run_program("加 1\n读取 槽abc\n加 1\n停机\n");
    assert_eq!(interp.vm.accumulator, 1);
    assert!(!interp.vm.running);
    assert!(interp
        .vm
        .output_log
        .iter()
        .any(|l| l == "error: invalid slot token '槽abc'"));
}

#[test]
fn out_of_range_slot_reference_halts() {
    let interp = run_program("存储 槽100\n停机\n");
    assert!(!interp.vm.running);
    assert!(interp
        .vm
        .output_log
        .iter()
        .any(|l| l == "error: slot 100 out of range"));
}

#[test]
fn reset_then_reload_reproduces_the_run() {
    let source = "加 3\n存储 槽1\n乘 2\n停机\n";
    let mut interp = Interpreter::new(VmState::new());
    interp.load_program(source);
    interp.run();
    let first_log = interp.vm.take_output();
    let first_accumulator = interp.vm.accumulator;

    interp.vm.reset();
    interp.load_program(source);
    interp.run();
    assert_eq!(interp.vm.take_output(), first_log);
    assert_eq!(interp.vm.accumulator, first_accumulator);
}

#[test]
fn current_instruction_describes_the_program_position() {
    let mut interp = Interpreter::new(VmState::new());
    assert_eq!(interp.current_instruction(), "no program loaded");

    interp.load_program("加 1\n停机\n");
    assert_eq!(interp.current_instruction(), "line 1: 加 1");

    interp.run();
    // Halt leaves the counter on the halt card.
    assert_eq!(interp.current_instruction(), "line 2: 停机");
}

#[test]
fn counter_past_the_program_reads_as_ended() {
    let mut interp = Interpreter::new(VmState::new());
    interp.load_program("加 1\n");
    interp.run();
    assert_eq!(interp.vm.pc, 1);
    assert_eq!(interp.current_instruction(), "program ended");
}
