use super::{Address, Decoded, Memory, Mode, Word};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand resolver
///
/// Borrows the machine state for the duration of one instruction and
/// maps operand `k` (zero based) to a value or to a destination address.

pub struct Operands<'a> {
    memory: &'a Memory,
    pc: Address,
    relative_base: Word,
    decoded: &'a Decoded,
}

impl<'a> Operands<'a> {
    pub fn new(
        memory: &'a Memory,
        pc: Address,
        relative_base: Word,
        decoded: &'a Decoded,
    ) -> Operands<'a> {
        Operands {
            memory,
            pc,
            relative_base,
            decoded,
        }
    }

    fn raw(&self, index: usize) -> Word {
        self.memory.read(self.pc + index + 1)
    }

    fn mode(&self, index: usize) -> Result<Mode> {
        match self.decoded.mode(index) {
            Some(mode) => Ok(mode),
            None => Err(error!(InvalidMode, self.pc).with_value(self.decoded.mode_digit(index))),
        }
    }

    fn relative(&self, raw: Word) -> Result<Address> {
        match raw.checked_add(self.relative_base) {
            Some(word) => self.address(word),
            None => Err(error!(Overflow, self.pc; "RELATIVE ADDRESS")),
        }
    }

    fn address(&self, word: Word) -> Result<Address> {
        Memory::address(word).map_err(|e| e.at_address(self.pc))
    }

    /// Value of operand `index` per its addressing mode.
    pub fn value(&self, index: usize) -> Result<Word> {
        let raw = self.raw(index);
        match self.mode(index)? {
            Mode::Position => Ok(self.memory.read(self.address(raw)?)),
            Mode::Immediate => Ok(raw),
            Mode::Relative => Ok(self.memory.read(self.relative(raw)?)),
        }
    }

    /// Values of the first `count` operands.
    pub fn values(&self, count: usize) -> Result<Vec<Word>> {
        (0..count).map(|index| self.value(index)).collect()
    }

    /// Values of the first two operands, the common case.
    pub fn pair(&self) -> Result<(Word, Word)> {
        Ok((self.value(0)?, self.value(1)?))
    }

    /// Destination address of operand `index`.
    pub fn target(&self, index: usize) -> Result<Address> {
        let raw = self.raw(index);
        match self.mode(index)? {
            Mode::Position => self.address(raw),
            Mode::Immediate => Err(error!(ImmediateWrite, self.pc).with_value(raw)),
            Mode::Relative => self.relative(raw),
        }
    }
}
