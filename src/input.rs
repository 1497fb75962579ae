use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};
use std::num::ParseIntError;

use tracing::debug;

/// Number of integers the program expects on its input.
const OPERAND_COUNT: usize = 2;

/// The two integers could not be read from the input stream.
#[derive(Debug)]
pub enum InputParseError {
    /// The underlying reader failed, e.g. the bytes were not valid UTF-8.
    Io(io::Error),
    /// Input ended after `found` operands.
    MissingOperand { found: usize },
    /// `token` is not a base-10 integer in the `i32` range.
    InvalidOperand { token: String, source: ParseIntError },
}

impl fmt::Display for InputParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputParseError::Io(_) => write!(f, "failed to read input"),
            InputParseError::MissingOperand { found } => write!(
                f,
                "expected {} integers but input ended after {}",
                OPERAND_COUNT, found
            ),
            InputParseError::InvalidOperand { token, .. } => {
                write!(f, "`{}` is not a valid integer", token)
            }
        }
    }
}

impl Error for InputParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputParseError::Io(e) => Some(e),
            InputParseError::InvalidOperand { source, .. } => Some(source),
            InputParseError::MissingOperand { .. } => None,
        }
    }
}

impl From<io::Error> for InputParseError {
    fn from(e: io::Error) -> Self {
        InputParseError::Io(e)
    }
}

/// Reads two whitespace-separated integers from `reader`.
///
/// The operands may share a line or sit on separate lines. Reading stops as
/// soon as the second operand is found: the rest of that line is ignored and
/// later lines are left unread.
pub fn read_operands<R: BufRead>(mut reader: R) -> Result<(i32, i32), InputParseError> {
    let mut operands: Vec<i32> = Vec::with_capacity(OPERAND_COUNT);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(InputParseError::MissingOperand { found: operands.len() });
        }

        for token in line.split_whitespace() {
            operands.push(parse_token(token)?);
            if operands.len() == OPERAND_COUNT {
                debug!(a = operands[0], b = operands[1], "read operands");
                return Ok((operands[0], operands[1]));
            }
        }
    }
}

/// Same as [`read_operands`] for text already in memory.
pub fn parse_operands(text: &str) -> Result<(i32, i32), InputParseError> {
    read_operands(text.as_bytes())
}

fn parse_token(token: &str) -> Result<i32, InputParseError> {
    token.parse::<i32>().map_err(|source| InputParseError::InvalidOperand {
        token: token.to_string(),
        source,
    })
}
