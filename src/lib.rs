#[macro_use]
extern crate lazy_static;

pub mod hanzi;
pub mod instruction;
pub mod interpreter;
pub mod loader;
pub mod opcodes_math;
pub mod opcodes_memory;
pub mod opcodes_query;
pub mod opcodes_text;
pub mod operand;
pub mod vm;

#[cfg(test)]
mod interpreter_tests;
