use crate::hanzi::HanziProcessor;
use crate::instruction::{Instruction, Mnemonic};
use crate::operand::{resolve_operand, Operand};
use crate::vm::VmState;
use log::{debug, info};

/// Hard ceiling on steps per `run`, guarding against runaway jump loops.
pub const MAX_STEPS: u64 = 1000;

/// Outcome of one instruction's execution, before the program counter is
/// advanced.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Fall through to the next instruction.
    Continue,
    /// Program counter redirected; the target executes next.
    Jump(usize),
    /// Execution stops; the machine is no longer running.
    Halt,
}

/// Drives a `VmState` one instruction at a time.
pub struct Interpreter {
    pub vm: VmState,
    pub(crate) hanzi: HanziProcessor,
}

impl Interpreter {
    pub fn new(vm: VmState) -> Self {
        Interpreter {
            vm,
            hanzi: HanziProcessor::new(),
        }
    }

    /// Execute exactly one instruction.
    ///
    /// Returns false once the machine has stopped, and keeps returning
    /// false: the terminal state is idempotent. Failures never escape this
    /// boundary; every one becomes a log entry plus a halted machine.
    pub fn step(&mut self) -> bool {
        if !self.vm.running || self.vm.pc >= self.vm.program.len() {
            self.vm.running = false;
            self.vm.log("program finished");
            return false;
        }

        let inst = self.vm.program[self.vm.pc].clone();
        debug!("step pc={} {}", self.vm.pc, inst);

        let operand = match resolve_operand(inst.operand.as_deref()) {
            Ok(operand) => operand,
            Err(diagnostic) => {
                self.vm.log(diagnostic);
                self.vm.running = false;
                return false;
            }
        };

        match self.execute(&inst, &operand) {
            Ok(StepOutcome::Continue) => {
                self.vm.pc += 1;
                true
            }
            Ok(StepOutcome::Jump(target)) => {
                self.vm.pc = target;
                true
            }
            Ok(StepOutcome::Halt) => {
                self.vm.running = false;
                false
            }
            Err(e) => {
                self.vm
                    .log(format!("line {}: execution error: {}", inst.source_line, e));
                self.vm.running = false;
                false
            }
        }
    }

    /// Dispatch one resolved instruction to its family handler.
    fn execute(&mut self, inst: &Instruction, operand: &Operand) -> Result<StepOutcome, String> {
        match inst.mnemonic {
            Mnemonic::Add | Mnemonic::Subtract | Mnemonic::Multiply | Mnemonic::Divide => {
                self.execute_math(inst, operand)
            }
            Mnemonic::Store | Mnemonic::Load | Mnemonic::Jump | Mnemonic::Halt => {
                self.execute_memory(inst, operand)
            }
            Mnemonic::Concatenate
            | Mnemonic::Split
            | Mnemonic::Decorate
            | Mnemonic::Duplicate
            | Mnemonic::PasteText
            | Mnemonic::StoreText
            | Mnemonic::LoadText => self.execute_text(inst, operand),
            Mnemonic::FetchMeaning
            | Mnemonic::FetchPinyin
            | Mnemonic::FetchDialogue
            | Mnemonic::FetchPos
            | Mnemonic::FetchCategory
            | Mnemonic::FetchRhyme
            | Mnemonic::FetchSuccessors
            | Mnemonic::FetchStructuralFit
            | Mnemonic::FetchSemanticFit => self.execute_query(inst, operand),
        }
    }

    /// Run until the program stops or the step ceiling is reached.
    ///
    /// The ceiling is a safety valve for unconditional-jump loops, not a
    /// scheduling mechanism; hitting it logs a warning and stops the
    /// machine.
    pub fn run(&mut self) {
        info!(
            "running card program, {} instructions",
            self.vm.program.len()
        );
        self.vm.running = true;
        let mut steps: u64 = 0;
        while self.vm.running && steps < MAX_STEPS {
            if !self.step() {
                break;
            }
            steps += 1;
        }
        if steps >= MAX_STEPS {
            self.vm.log("warning: possible infinite loop, execution stopped");
            self.vm.running = false;
        }
        debug!("run ended after {} steps", steps);
    }

    /// Human-readable description of the instruction the machine would
    /// execute next, for status display.
    pub fn current_instruction(&self) -> String {
        if self.vm.program.is_empty() {
            return "no program loaded".to_string();
        }
        match self.vm.program.get(self.vm.pc) {
            Some(inst) => format!("line {}: {}", inst.source_line, inst),
            None => "program ended".to_string(),
        }
    }
}
