use crate::mach::{Address, Word};

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: u16,
    address: Option<Address>,
    value: Option<Word>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            value: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Program counter of the instruction that failed, when there is one.
    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// The offending word, e.g. the undecodable instruction.
    pub fn value(&self) -> Option<Word> {
        self.value
    }

    pub fn at_address(&self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            code: self.code,
            address: Some(address),
            value: self.value,
            message: self.message.clone(),
        }
    }

    pub fn with_value(&self, value: Word) -> Error {
        Error {
            code: self.code,
            address: self.address,
            value: Some(value),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        Error {
            code: self.code,
            address: self.address,
            value: self.value,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidOpcode = 1,
    InputStarvation = 2,
    InvalidAddress = 3,
    InvalidMode = 4,
    ImmediateWrite = 5,
    Overflow = 6,
    SyntaxError = 7,
    FileNotFound = 8,
    IoError = 9,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "INVALID OPCODE",
            2 => "INPUT STARVATION",
            3 => "INVALID ADDRESS",
            4 => "INVALID ADDRESSING MODE",
            5 => "IMMEDIATE WRITE TARGET",
            6 => "OVERFLOW",
            7 => "SYNTAX ERROR",
            8 => "FILE NOT FOUND",
            9 => "I/O ERROR",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        }
        if let Some(value) = self.value {
            suffix.push_str(&format!(" ({})", value));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "MACHINE ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
