use super::Word;
use crate::error;
use crate::lang::{parse, Error};
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program image
///
/// The initial memory contents. Immutable once loaded and cheap to
/// clone; every machine built from the same program shares one image
/// and copies it into its own memory on reset.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    image: Arc<[Word]>,
}

impl Program {
    pub fn new(image: Vec<Word>) -> Program {
        Program {
            image: image.into(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Program> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                let msg = format!("{}: {}", path.display(), error);
                return Err(match error.kind() {
                    ErrorKind::NotFound => error!(FileNotFound; &msg),
                    _ => error!(IoError; &msg),
                });
            }
        };
        let program: Program = text.parse()?;
        tracing::debug!(path = %path.display(), words = program.len(), "loaded program");
        Ok(program)
    }

    pub fn len(&self) -> usize {
        self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    pub fn image(&self) -> &[Word] {
        &self.image
    }
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Program> {
        Ok(Program::new(parse(s)?))
    }
}

impl From<Vec<Word>> for Program {
    fn from(image: Vec<Word>) -> Program {
        Program::new(image)
    }
}

impl From<&[Word]> for Program {
    fn from(image: &[Word]) -> Program {
        Program {
            image: image.into(),
        }
    }
}
