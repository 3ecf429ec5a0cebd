#![allow(dead_code)]
use intcode::mach::{Program, Runtime, Word};

pub const FEEDBACK: &str = "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,\
                            4,27,1001,28,-1,28,1005,28,6,99,0,0,5";

/// Reads a value, writes twice that value, and repeats until it reads zero.
pub const DOUBLER: &str = "3,20,1006,20,14,1002,20,2,21,4,21,1105,1,0,99";

pub fn program(text: &str) -> Program {
    text.parse().unwrap()
}

pub fn runtime(text: &str) -> Runtime {
    Runtime::new(program(text))
}

/// Drive a machine one output at a time, collecting up to `limit` values.
pub fn take(runtime: &mut Runtime, limit: usize) -> Vec<Word> {
    let mut outputs = vec![];
    while outputs.len() < limit {
        match runtime.run_to_next_output().unwrap() {
            Some(value) => outputs.push(value),
            None => break,
        }
    }
    outputs
}
