use super::{Address, Word};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine instruction set
///
/// An instruction word holds the opcode in its two lowest decimal
/// digits. Each digit above those selects the addressing mode of one
/// operand, first operand first. `1002` is `MUL` with the first
/// operand in position mode and the second in immediate mode.
///
/// The machine has two registers: the program counter and the
/// relative base. Everything else lives in memory.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// `dst := a + b`
    Add,
    /// `dst := a * b`
    Mul,
    /// `dst :=` next input value.
    Read,
    /// Emit `a` and suspend.
    Write,
    /// Jump to `target` when `a` is not zero.
    JumpIfTrue,
    /// Jump to `target` when `a` is zero.
    JumpIfFalse,
    /// `dst := 1` when `a < b`, else `0`.
    Less,
    /// `dst := 1` when `a == b`, else `0`.
    Equals,
    /// `relative_base += a`
    AdjustBase,
    Exit,
}

impl Opcode {
    pub fn from_code(code: Word) -> Option<Opcode> {
        use Opcode::*;
        Some(match code {
            1 => Add,
            2 => Mul,
            3 => Read,
            4 => Write,
            5 => JumpIfTrue,
            6 => JumpIfFalse,
            7 => Less,
            8 => Equals,
            9 => AdjustBase,
            99 => Exit,
            _ => return None,
        })
    }

    /// Number of operands following the instruction word.
    pub fn operands(self) -> usize {
        use Opcode::*;
        match self {
            Add | Mul | Less | Equals => 3,
            JumpIfTrue | JumpIfFalse => 2,
            Read | Write | AdjustBase => 1,
            Exit => 0,
        }
    }

    /// Distance to the next instruction when execution falls through.
    pub fn width(self) -> Address {
        self.operands() + 1
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Add => write!(f, "ADD"),
            Mul => write!(f, "MUL"),
            Read => write!(f, "READ"),
            Write => write!(f, "WRITE"),
            JumpIfTrue => write!(f, "JUMP_IF_TRUE"),
            JumpIfFalse => write!(f, "JUMP_IF_FALSE"),
            Less => write!(f, "LESS"),
            Equals => write!(f, "EQUALS"),
            AdjustBase => write!(f, "ADJUST_BASE"),
            Exit => write!(f, "EXIT"),
        }
    }
}

/// ## Operand addressing modes

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Position,
    Immediate,
    Relative,
}

impl Mode {
    pub fn from_digit(digit: Word) -> Option<Mode> {
        match digit {
            0 => Some(Mode::Position),
            1 => Some(Mode::Immediate),
            2 => Some(Mode::Relative),
            _ => None,
        }
    }
}

/// Raw decoding of an instruction word. Mode digits are kept as they
/// were found; the operand resolver validates them when it uses them.
/// No instruction takes more than three operands, so higher digits are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub code: Word,
    pub modes: [Word; 3],
}

impl Decoded {
    /// Split a word into opcode and mode digits. Never fails.
    pub fn new(word: Word) -> Decoded {
        let code = word.rem_euclid(100);
        let mut modes = [0; 3];
        let mut rest = word.div_euclid(100).max(0);
        for mode in modes.iter_mut() {
            *mode = rest % 10;
            rest /= 10;
        }
        Decoded { code, modes }
    }

    /// Mode digit of operand `index`; missing digits are position mode.
    pub fn mode_digit(&self, index: usize) -> Word {
        self.modes.get(index).copied().unwrap_or(0)
    }

    pub fn mode(&self, index: usize) -> Option<Mode> {
        Mode::from_digit(self.mode_digit(index))
    }
}

/// A decoded instruction with a recognized opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub decoded: Decoded,
}

impl Instruction {
    pub fn decode(word: Word, pc: Address) -> Result<Instruction> {
        let decoded = Decoded::new(word);
        match Opcode::from_code(decoded.code) {
            Some(opcode) => Ok(Instruction { opcode, decoded }),
            None => Err(error!(InvalidOpcode, pc).with_value(word)),
        }
    }
}
