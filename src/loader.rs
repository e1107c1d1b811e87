//! Turns card program text into the instruction sequence.
//!
//! Loading is tolerant: malformed lines are reported in the output log and
//! dropped, and the rest of the source still loads. Execution, by
//! contrast, is strict about what it finds at run time.

use crate::instruction::{Instruction, Mnemonic};
use crate::interpreter::Interpreter;
use log::debug;

/// Lines starting with this marker are comments.
const COMMENT_MARKER: char = '#';

impl Interpreter {
    /// Load a program from source text, replacing any previous program and
    /// rewinding the program counter. Accumulators and memory banks keep
    /// their values; `VmState::reset` is the separate operation that clears
    /// them.
    pub fn load_program(&mut self, source: &str) {
        self.vm.program.clear();
        self.vm.pc = 0;

        for (index, raw) in source.lines().enumerate() {
            let source_line = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let token = match tokens.next() {
                Some(t) => t,
                None => continue,
            };
            // Only the first two tokens matter; anything after them
            // (including end-of-line comments) is ignored.
            let operand = tokens.next().map(str::to_string);

            let mnemonic = match Mnemonic::from_token(token) {
                Some(m) => m,
                None => {
                    self.vm
                        .log(format!("line {}: invalid instruction '{}'", source_line, token));
                    continue;
                }
            };

            if mnemonic.requires_operand() && operand.is_none() {
                self.vm.log(format!(
                    "line {}: instruction '{}' requires an operand",
                    source_line, token
                ));
                continue;
            }

            self.vm.program.push(Instruction {
                mnemonic,
                operand,
                source_line,
            });
        }

        debug!("loaded {} instructions", self.vm.program.len());
    }
}
