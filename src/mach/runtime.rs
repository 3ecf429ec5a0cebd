use super::{Address, Input, Instruction, Memory, Opcode, Operands, Program, Word};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Instructions executed per slice by the blocking run methods.
const SLICE_CYCLES: usize = 1 << 16;

/// Where the machine is between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Freshly reset.
    Ready,
    /// Inside an instruction slice, or a slice ran out of cycles.
    Running,
    /// Stopped just after a `WRITE`.
    Suspended,
    /// `EXIT` reached. Terminal until the next reset.
    Halted,
    /// An instruction failed. Terminal until the next reset.
    Faulted,
}

/// Result of one call to [`Runtime::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Cycle budget exhausted with no output; call again to continue.
    Running,
    Output(Word),
    Halted,
}

/// ## Intcode machine
///
/// Owns its memory, registers and input queue. Execution is driven by
/// the caller: each call runs synchronously until the machine writes
/// one value, halts, fails, or uses up the cycle budget.
///
/// ```
/// use intcode::mach::Runtime;
///
/// let mut vm = Runtime::new(vec![3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8]);
/// assert_eq!(vm.run_to_completion(vec![8]).unwrap(), [1]);
/// assert_eq!(vm.run_to_completion(vec![7]).unwrap(), [0]);
/// ```

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    memory: Memory,
    pc: Address,
    relative_base: Word,
    input: Input,
    state: State,
    fault: Option<Error>,
}

impl Runtime {
    pub fn new<P: Into<Program>>(program: P) -> Runtime {
        let mut runtime = Runtime {
            program: program.into(),
            memory: Memory::new(),
            pc: 0,
            relative_base: 0,
            input: Input::new(),
            state: State::Ready,
            fault: None,
        };
        runtime.reset(vec![]);
        runtime
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn relative_base(&self) -> Word {
        self.relative_base
    }

    /// Start over from the program image with the given inputs queued.
    pub fn reset<I: IntoIterator<Item = Word>>(&mut self, inputs: I) {
        self.memory.load(self.program.image());
        self.pc = 0;
        self.relative_base = 0;
        self.input.reset(inputs);
        self.state = State::Ready;
        self.fault = None;
        tracing::debug!(words = self.program.len(), queued = self.input.len(), "reset");
    }

    /// Queue one input value. Allowed in any state.
    pub fn append_input(&mut self, value: Word) {
        self.input.push(value)
    }

    pub fn pending_inputs(&self) -> usize {
        self.input.len()
    }

    /// Install a callback for `READ` to use when the queue is empty.
    /// It stays installed across resets. Returning `None` starves the
    /// machine just as an empty queue without a source would.
    pub fn set_input_source<F: FnMut() -> Option<Word> + 'static>(&mut self, source: F) {
        self.input.set_source(Some(Box::new(source)))
    }

    pub fn clear_input_source(&mut self) {
        self.input.set_source(None)
    }

    pub fn memory_snapshot(&self) -> &[Word] {
        self.memory.as_slice()
    }

    pub fn peek(&self, addr: Address) -> Word {
        self.memory.read(addr)
    }

    /// Patch memory, typically right after a reset.
    pub fn poke(&mut self, addr: Address, value: Word) -> Result<()> {
        self.memory.write(addr, value)
    }

    /// Run until the next output and return it, or `None` once halted.
    pub fn run_to_next_output(&mut self) -> Result<Option<Word>> {
        loop {
            match self.execute(SLICE_CYCLES)? {
                Event::Running => continue,
                Event::Output(value) => return Ok(Some(value)),
                Event::Halted => return Ok(None),
            }
        }
    }

    /// Collect every output from the current state until the machine halts.
    pub fn run_to_halt(&mut self) -> Result<Vec<Word>> {
        let mut outputs = vec![];
        while let Some(value) = self.run_to_next_output()? {
            outputs.push(value);
        }
        Ok(outputs)
    }

    /// Reset with the given inputs and collect all outputs until halted.
    pub fn run_to_completion<I: IntoIterator<Item = Word>>(&mut self, inputs: I) -> Result<Vec<Word>> {
        self.reset(inputs);
        self.run_to_halt()
    }

    /// Execute at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Result<Event> {
        match self.state {
            State::Halted => return Ok(Event::Halted),
            State::Faulted => {
                return Err(self
                    .fault
                    .clone()
                    .unwrap_or_else(|| error!(InternalError; "FAULT NOT RECORDED")))
            }
            State::Ready | State::Running | State::Suspended => {}
        }
        self.state = State::Running;
        for _ in 0..cycles {
            match self.step() {
                Ok(Event::Running) => {}
                Ok(Event::Output(value)) => {
                    self.state = State::Suspended;
                    tracing::trace!(value, pc = self.pc, "output");
                    return Ok(Event::Output(value));
                }
                Ok(Event::Halted) => {
                    self.state = State::Halted;
                    tracing::debug!(pc = self.pc, "halted");
                    return Ok(Event::Halted);
                }
                Err(error) => {
                    self.state = State::Faulted;
                    self.fault = Some(error.clone());
                    tracing::debug!(%error, "fault");
                    return Err(error);
                }
            }
        }
        Ok(Event::Running)
    }

    fn step(&mut self) -> Result<Event> {
        use Opcode::*;
        let pc = self.pc;
        let instruction = Instruction::decode(self.memory.read(pc), pc)?;
        let opcode = instruction.opcode;
        tracing::trace!(pc, %opcode, "step");
        let operands = Operands::new(&self.memory, pc, self.relative_base, &instruction.decoded);
        let mut next = pc + opcode.width();
        let mut event = Event::Running;
        match opcode {
            Add | Mul | Less | Equals => {
                let (a, b) = operands.pair()?;
                let dst = operands.target(2)?;
                let value = match opcode {
                    Add => a.checked_add(b),
                    Mul => a.checked_mul(b),
                    Less => Some((a < b) as Word),
                    _ => Some((a == b) as Word),
                };
                let value = value.ok_or_else(|| error!(Overflow, pc; &opcode.to_string()))?;
                self.store(pc, dst, value)?;
            }
            Read => {
                let dst = operands.target(0)?;
                let value = match self.input.pop() {
                    Some(value) => value,
                    None => return Err(error!(InputStarvation, pc)),
                };
                self.store(pc, dst, value)?;
            }
            Write => {
                event = Event::Output(operands.value(0)?);
            }
            JumpIfTrue | JumpIfFalse => {
                let (a, target) = operands.pair()?;
                if (a != 0) == (opcode == JumpIfTrue) {
                    next = Memory::address(target).map_err(|e| e.at_address(pc))?;
                }
            }
            AdjustBase => {
                let a = operands.value(0)?;
                self.relative_base = self
                    .relative_base
                    .checked_add(a)
                    .ok_or_else(|| error!(Overflow, pc; "RELATIVE BASE"))?;
            }
            Exit => return Ok(Event::Halted),
        }
        self.pc = next;
        Ok(event)
    }

    fn store(&mut self, pc: Address, dst: Address, value: Word) -> Result<()> {
        self.memory.write(dst, value).map_err(|e| e.at_address(pc))
    }
}
