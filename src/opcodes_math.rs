//! Arithmetic instruction family: Add, Subtract, Multiply, Divide.
//!
//! All four combine the numeric accumulator with an operand that must be a
//! number literal or a numeric slot reference; any other operand kind
//! leaves the machine untouched. Division is floor division and halts on a
//! zero divisor, wherever the zero came from.

use crate::instruction::{Instruction, Mnemonic};
use crate::interpreter::{Interpreter, StepOutcome};
use crate::operand::Operand;
use log::debug;

/// Floor division: the quotient is rounded toward negative infinity
/// regardless of sign.
fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let quotient = lhs.wrapping_div(rhs);
    if lhs.wrapping_rem(rhs) != 0 && (lhs < 0) != (rhs < 0) {
        quotient - 1
    } else {
        quotient
    }
}

impl Interpreter {
    /// Handle the arithmetic opcodes.
    pub(crate) fn execute_math(
        &mut self,
        inst: &Instruction,
        operand: &Operand,
    ) -> Result<StepOutcome, String> {
        let line = inst.source_line;
        let rhs = match *operand {
            Operand::Number(n) => n,
            Operand::NumericSlot(i) => self.vm.numeric_memory[i],
            // Mismatched operand kinds fall through without touching state.
            _ => return Ok(StepOutcome::Continue),
        };

        debug!("{} {}", inst.mnemonic.token(), rhs);
        match inst.mnemonic {
            Mnemonic::Add => {
                self.vm.accumulator = self.vm.accumulator.wrapping_add(rhs);
                self.vm.log(format!(
                    "line {}: accumulator = {} + {}",
                    line, self.vm.accumulator, rhs
                ));
            }
            Mnemonic::Subtract => {
                self.vm.accumulator = self.vm.accumulator.wrapping_sub(rhs);
                self.vm.log(format!(
                    "line {}: accumulator = {} - {}",
                    line, self.vm.accumulator, rhs
                ));
            }
            Mnemonic::Multiply => {
                self.vm.accumulator = self.vm.accumulator.wrapping_mul(rhs);
                self.vm.log(format!(
                    "line {}: accumulator = {} * {}",
                    line, self.vm.accumulator, rhs
                ));
            }
            Mnemonic::Divide => {
                if rhs == 0 {
                    self.vm.log(format!("line {}: error: division by zero", line));
                    return Ok(StepOutcome::Halt);
                }
                self.vm.accumulator = floor_div(self.vm.accumulator, rhs);
                self.vm.log(format!(
                    "line {}: accumulator = {} / {}",
                    line, self.vm.accumulator, rhs
                ));
            }
            other => {
                return Err(format!("{:?} is not an arithmetic instruction", other));
            }
        }
        Ok(StepOutcome::Continue)
    }
}
