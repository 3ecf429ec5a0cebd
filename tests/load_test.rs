use intcode::lang::ErrorCode;
use intcode::mach::{Program, Runtime};
use std::path::PathBuf;

fn scratch(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("intcode-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_and_run() {
    let path = scratch("quine.txt", "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99\n");
    let program = Program::load(&path).unwrap();
    assert_eq!(program.len(), 16);
    let mut vm = Runtime::new(program.clone());
    assert_eq!(vm.run_to_completion(vec![]).unwrap(), program.image());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_missing_file() {
    let error = Program::load("/nonexistent/intcode/program.txt").unwrap_err();
    assert!(error.is(ErrorCode::FileNotFound));
}

#[test]
fn test_load_bad_text() {
    let path = scratch("bad.txt", "1,0,zero,0,99");
    let error = Program::load(&path).unwrap_err();
    assert!(error.is(ErrorCode::SyntaxError));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_noun_verb_patch() {
    let program = "1,0,0,3,2,3,11,0,99,30,40,50".parse::<Program>().unwrap();
    let mut vm = Runtime::new(program);
    vm.reset(vec![]);
    vm.poke(1, 9).unwrap();
    vm.poke(2, 10).unwrap();
    vm.run_to_halt().unwrap();
    assert_eq!(vm.peek(0), 3500);
}
