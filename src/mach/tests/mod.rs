use super::*;


fn run(program: &[Word], inputs: &[Word]) -> Vec<Word> {
    let mut runtime = Runtime::new(program.to_vec());
    runtime.run_to_completion(inputs.iter().copied()).unwrap()
}

fn run_memory(program: &[Word]) -> Vec<Word> {
    let mut runtime = Runtime::new(program.to_vec());
    runtime.run_to_completion(vec![]).unwrap();
    runtime.memory_snapshot().to_vec()
}

fn run_error(program: &[Word], inputs: &[Word]) -> crate::lang::Error {
    let mut runtime = Runtime::new(program.to_vec());
    runtime.run_to_completion(inputs.iter().copied()).unwrap_err()
}
