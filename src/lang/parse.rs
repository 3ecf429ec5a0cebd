use super::Error;
use crate::error;
use crate::mach::Word;

type Result<T> = std::result::Result<T, Error>;

/// ## Program text parser
///
/// A program image is serialized as comma separated decimal integers.
/// Whitespace around each number is ignored, so line breaks inside the
/// list and a trailing newline are accepted. An empty record is an error
/// except for a single trailing comma.

pub fn parse(s: &str) -> Result<Vec<Word>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(vec![]);
    }
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    trimmed
        .split(',')
        .enumerate()
        .map(|(index, record)| parse_word(index, record.trim()))
        .collect()
}

fn parse_word(index: usize, record: &str) -> Result<Word> {
    if record.is_empty() {
        return Err(error!(SyntaxError; &format!("EMPTY RECORD {}", index)));
    }
    record.parse::<Word>().map_err(|_| {
        error!(SyntaxError; &format!("RECORD {} IS NOT AN INTEGER: {:?}", index, record))
    })
}
