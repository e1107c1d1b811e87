//! Hanzi query opcodes: each consults the query service with the current
//! text accumulator and overwrites it with the answer.
//!
//! With an empty text accumulator there is nothing to ask about, so every
//! query is a no-op. The two positional-fit queries additionally need a
//! hanzi or plain-text operand as the second character.

use crate::instruction::{Instruction, Mnemonic};
use crate::interpreter::{Interpreter, StepOutcome};
use crate::operand::Operand;

impl Interpreter {
    /// Handle the query opcodes.
    pub(crate) fn execute_query(
        &mut self,
        inst: &Instruction,
        operand: &Operand,
    ) -> Result<StepOutcome, String> {
        if self.vm.text_accumulator.is_empty() {
            return Ok(StepOutcome::Continue);
        }

        let line = inst.source_line;
        match inst.mnemonic {
            Mnemonic::FetchMeaning => {
                let meaning = self.hanzi.meaning(&self.vm.text_accumulator);
                self.vm.log(format!("line {}: meaning: {}", line, meaning));
                self.vm.text_accumulator = meaning;
            }
            Mnemonic::FetchPinyin => {
                let pinyin = self.hanzi.pinyin(&self.vm.text_accumulator);
                self.vm.log(format!("line {}: pinyin: {}", line, pinyin));
                self.vm.text_accumulator = pinyin;
            }
            Mnemonic::FetchDialogue => {
                let response = self.hanzi.dialogue(&self.vm.text_accumulator);
                self.vm.log(format!("line {}: dialogue: {}", line, response));
                self.vm.text_accumulator = response;
            }
            Mnemonic::FetchPos => {
                let pos = self.hanzi.grammatical_category(&self.vm.text_accumulator);
                self.vm.log(format!("line {}: part of speech: {}", line, pos));
                self.vm.text_accumulator = pos;
            }
            Mnemonic::FetchCategory => {
                let category = self.hanzi.semantic_category(&self.vm.text_accumulator);
                self.vm.log(format!("line {}: category: {}", line, category));
                self.vm.text_accumulator = category;
            }
            Mnemonic::FetchRhyme => {
                let rhyme = self.hanzi.rhyme_class(&self.vm.text_accumulator);
                self.vm.log(format!("line {}: rhyme: {}", line, rhyme));
                self.vm.text_accumulator = rhyme;
            }
            Mnemonic::FetchSuccessors => {
                let successors = self.hanzi.typical_successors(&self.vm.text_accumulator);
                let shown = if successors.is_empty() {
                    "无".to_string()
                } else {
                    successors
                        .iter()
                        .take(5)
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join("、")
                };
                self.vm.log(format!("line {}: successors: {}", line, shown));
                self.vm.text_accumulator = shown;
            }
            Mnemonic::FetchStructuralFit => {
                if let Operand::Hanzi(second) | Operand::Text(second) = operand {
                    let fit = self.hanzi.structural_fit(&self.vm.text_accumulator, second);
                    self.vm.log(format!("line {}: structural fit: {}", line, fit));
                    self.vm.text_accumulator = fit;
                }
            }
            Mnemonic::FetchSemanticFit => {
                if let Operand::Hanzi(second) | Operand::Text(second) = operand {
                    let fit = self.hanzi.semantic_fit(&self.vm.text_accumulator, second);
                    self.vm.log(format!("line {}: semantic fit: {}", line, fit));
                    self.vm.text_accumulator = fit;
                }
            }
            other => {
                return Err(format!("{:?} is not a query instruction", other));
            }
        }
        Ok(StepOutcome::Continue)
    }
}
