//! Memory and control opcodes: Store, Load, Jump, Halt.
//!
//! Store and Load move the accumulator in and out of the numeric bank.
//! Jump is unconditional; a target outside the program halts the machine
//! with a diagnostic, which together with the run loop's step ceiling is
//! what keeps looping programs terminating.

use crate::instruction::{Instruction, Mnemonic};
use crate::interpreter::{Interpreter, StepOutcome};
use crate::operand::Operand;
use log::debug;

impl Interpreter {
    /// Handle the memory and control opcodes.
    pub(crate) fn execute_memory(
        &mut self,
        inst: &Instruction,
        operand: &Operand,
    ) -> Result<StepOutcome, String> {
        let line = inst.source_line;
        match inst.mnemonic {
            Mnemonic::Store => {
                if let Operand::NumericSlot(slot) = *operand {
                    self.vm.numeric_memory[slot] = self.vm.accumulator;
                    self.vm
                        .log(format!("line {}: slot {} = {}", line, slot, self.vm.accumulator));
                }
                Ok(StepOutcome::Continue)
            }
            Mnemonic::Load => {
                if let Operand::NumericSlot(slot) = *operand {
                    self.vm.accumulator = self.vm.numeric_memory[slot];
                    self.vm.log(format!(
                        "line {}: accumulator = slot {} = {}",
                        line, slot, self.vm.accumulator
                    ));
                }
                Ok(StepOutcome::Continue)
            }
            Mnemonic::Jump => {
                let target = match *operand {
                    Operand::Number(n) => n,
                    Operand::NumericSlot(slot) => self.vm.numeric_memory[slot],
                    _ => return Ok(StepOutcome::Continue),
                };
                if target >= 0 && (target as usize) < self.vm.program.len() {
                    debug!("jump {} -> {}", self.vm.pc, target);
                    self.vm
                        .log(format!("line {}: jump to instruction {}", line, target));
                    Ok(StepOutcome::Jump(target as usize))
                } else {
                    self.vm
                        .log(format!("line {}: error: invalid jump target {}", line, target));
                    Ok(StepOutcome::Halt)
                }
            }
            Mnemonic::Halt => {
                self.vm.log(format!("line {}: program halted", line));
                Ok(StepOutcome::Halt)
            }
            other => Err(format!("{:?} is not a memory or control instruction", other)),
        }
    }
}
