use super::{Address, Word, MAX_ADDRESS};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Growable memory bank
///
/// Every address not yet written reads as zero. Writes past the end
/// extend the backing vector with zeros, so the program may use memory
/// well beyond the image it was loaded from.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    words: Vec<Word>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Replace the contents with a copy of the image.
    pub fn load(&mut self, image: &[Word]) {
        self.words.clear();
        self.words.extend_from_slice(image);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Convert a word found in memory into an address.
    pub fn address(word: Word) -> Result<Address> {
        match Address::try_from(word) {
            Ok(addr) if addr <= MAX_ADDRESS => Ok(addr),
            _ => Err(error!(InvalidAddress).with_value(word)),
        }
    }

    pub fn read(&self, addr: Address) -> Word {
        self.words.get(addr).copied().unwrap_or(0)
    }

    pub fn write(&mut self, addr: Address, value: Word) -> Result<()> {
        if addr > MAX_ADDRESS {
            return Err(error!(InvalidAddress; "BEYOND MEMORY LIMIT").with_value(addr as Word));
        }
        if addr >= self.words.len() {
            self.words.resize(addr + 1, 0);
        }
        self.words[addr] = value;
        Ok(())
    }
}
