use crate::instruction::Instruction;
use std::fmt;

/// Number of cells in each memory bank. The numeric and text banks are
/// independent address spaces of the same size.
pub const MEMORY_SLOTS: usize = 100;

/// The card machine state: one numeric and one text accumulator, two fixed
/// 100-slot memory banks, the loaded program, and the output log.
///
/// The state is owned and mutated exclusively by the interpreter; a host
/// reads it between steps. There is no internal locking, so a threaded host
/// must serialize access itself.
pub struct VmState {
    pub accumulator: i64,
    pub text_accumulator: String,
    pub numeric_memory: [i64; MEMORY_SLOTS],
    pub text_memory: [String; MEMORY_SLOTS],
    pub program: Vec<Instruction>,
    /// Index of the next instruction to execute. May equal `program.len()`
    /// only as the terminal "finished" position.
    pub pc: usize,
    pub running: bool,
    /// Append-only while a program runs; drained by the host.
    pub output_log: Vec<String>,
}

impl VmState {
    pub fn new() -> Self {
        VmState {
            accumulator: 0,
            text_accumulator: String::new(),
            numeric_memory: [0; MEMORY_SLOTS],
            text_memory: std::array::from_fn(|_| String::new()),
            program: Vec::new(),
            pc: 0,
            running: false,
            output_log: Vec::new(),
        }
    }

    /// Restore every field to its initial value, the program included.
    /// Reloading a program without reset keeps accumulated memory.
    pub fn reset(&mut self) {
        *self = VmState::new();
    }

    /// Append one line to the output log.
    pub fn log(&mut self, line: impl Into<String>) {
        self.output_log.push(line.into());
    }

    /// Hand the accumulated output to the host, leaving the log empty.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output_log)
    }
}

impl Default for VmState {
    fn default() -> Self {
        VmState::new()
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "accumulator: {}", self.accumulator)?;
        writeln!(f, "text accumulator: '{}'", self.text_accumulator)?;
        write!(
            f,
            "program counter: {} of {}, running: {}",
            self.pc,
            self.program.len(),
            self.running
        )
    }
}
