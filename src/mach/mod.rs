/*!
## Rust Machine Module

This Rust module is the Intcode virtual machine and the circuits
built by wiring several machines together.

*/

/// Memory index and program counter.
pub type Address = usize;
/// Contents of one memory cell.
pub type Word = i64;

/// Highest address a program may touch. Memory grows on demand up to here.
pub const MAX_ADDRESS: Address = (1 << 24) - 1;

pub mod circuit;
mod input;
mod memory;
mod opcode;
mod operand;
mod program;
mod runtime;

pub use circuit::Circuit;
pub use input::{Input, InputSource};
pub use memory::Memory;
pub use opcode::{Decoded, Instruction, Mode, Opcode};
pub use operand::Operands;
pub use program::Program;
pub use runtime::{Event, Runtime, State};

#[cfg(test)]
mod tests;
