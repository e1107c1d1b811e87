//! Text accumulator opcodes: Concatenate, Split, Decorate, Duplicate,
//! PasteText, StoreText, LoadText.
//!
//! These move text between the text accumulator and the text bank, using
//! the hanzi service's string operations. As with arithmetic, an operand
//! of the wrong kind is a silent no-op.

use crate::instruction::{Instruction, Mnemonic};
use crate::interpreter::{Interpreter, StepOutcome};
use crate::operand::Operand;
use crate::vm::MEMORY_SLOTS;

impl Interpreter {
    /// Handle the text manipulation opcodes.
    pub(crate) fn execute_text(
        &mut self,
        inst: &Instruction,
        operand: &Operand,
    ) -> Result<StepOutcome, String> {
        let line = inst.source_line;
        match inst.mnemonic {
            Mnemonic::Concatenate => {
                let rhs = match operand {
                    Operand::Hanzi(s) | Operand::Text(s) => s.clone(),
                    Operand::TextSlot(slot) => self.vm.text_memory[*slot].clone(),
                    _ => return Ok(StepOutcome::Continue),
                };
                self.vm.text_accumulator = self.hanzi.concat(&self.vm.text_accumulator, &rhs);
                self.vm.log(format!(
                    "line {}: text accumulator = '{}'",
                    line, self.vm.text_accumulator
                ));
            }
            Mnemonic::Split => {
                if let Operand::Number(offset) = *operand {
                    let (head, tail) = self.hanzi.split(&self.vm.text_accumulator, offset);
                    self.vm.text_accumulator = head.clone();
                    // The tail lands in the text slot named by the offset;
                    // slot 99 stays out of reach of a split.
                    if offset >= 0 && (offset as usize) < MEMORY_SLOTS - 1 {
                        self.vm.text_memory[offset as usize] = tail.clone();
                    }
                    self.vm.log(format!(
                        "line {}: text split into '{}' and '{}'",
                        line, head, tail
                    ));
                }
            }
            Mnemonic::Decorate => {
                if let Operand::Hanzi(qualifier) | Operand::Text(qualifier) = operand {
                    self.vm.text_accumulator =
                        format!("【{}】的{}", self.vm.text_accumulator, qualifier);
                    self.vm.log(format!(
                        "line {}: text decorated to '{}'",
                        line, self.vm.text_accumulator
                    ));
                }
            }
            Mnemonic::Duplicate => {
                if let Operand::Number(times) = *operand {
                    self.vm.text_accumulator =
                        self.hanzi.repeat(&self.vm.text_accumulator, times);
                    self.vm.log(format!(
                        "line {}: text repeated {} times: '{}'",
                        line, times, self.vm.text_accumulator
                    ));
                }
            }
            Mnemonic::PasteText => {
                if let Operand::TextSlot(slot) = *operand {
                    self.vm.text_memory[slot] = self.vm.text_accumulator.clone();
                    self.vm.log(format!(
                        "line {}: text pasted to text slot {}: '{}'",
                        line, slot, self.vm.text_accumulator
                    ));
                }
            }
            Mnemonic::StoreText => {
                if let Operand::TextSlot(slot) = *operand {
                    self.vm.text_memory[slot] = self.vm.text_accumulator.clone();
                    self.vm.log(format!(
                        "line {}: text stored to text slot {}: '{}'",
                        line, slot, self.vm.text_accumulator
                    ));
                }
            }
            Mnemonic::LoadText => {
                if let Operand::TextSlot(slot) = *operand {
                    self.vm.text_accumulator = self.vm.text_memory[slot].clone();
                    self.vm.log(format!(
                        "line {}: text loaded from text slot {}: '{}'",
                        line, slot, self.vm.text_accumulator
                    ));
                }
            }
            other => {
                return Err(format!("{:?} is not a text instruction", other));
            }
        }
        Ok(StepOutcome::Continue)
    }
}
