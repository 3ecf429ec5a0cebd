//! # Intcode
//!
//! A small stored-program virtual machine. Programs are lists of
//! integers; the machine decodes them in place, reads input from a
//! queue and suspends every time it writes a value, so the caller
//! decides what happens between outputs.
//!
//! ```
//! use intcode::mach::{Program, Runtime};
//!
//! let program = "104,1125899906842624,99".parse::<Program>().unwrap();
//! let mut vm = Runtime::new(program);
//! assert_eq!(vm.run_to_next_output().unwrap(), Some(1125899906842624));
//! assert_eq!(vm.run_to_next_output().unwrap(), None);
//! ```
//!
//! Several machines can be wired together by moving outputs of one into
//! the input queue of another; see [`mach::circuit`].

pub mod lang;
pub mod mach;
