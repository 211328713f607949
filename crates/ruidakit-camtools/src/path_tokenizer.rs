//! SVG path-data tokenizer
//!
//! Splits a `d` attribute into `(command, arguments)` tokens with a small
//! state machine instead of pattern matching. Only the straight-line subset
//! of the path grammar is recognised: `M L H V A Z` in either case.
//!
//! Letters outside that set start an unsupported command; the tokenizer
//! skips it together with its arguments up to the next supported letter.
//! Arguments are separated by whitespace or commas.
//!
//! Only those separators split numbers. Compact forms allowed by the SVG
//! grammar, such as `M10-5` or `0.5.5`, stay a single token that does not
//! parse: it becomes 0 under [`NumericParsePolicy::Zero`] and fails the
//! conversion under [`NumericParsePolicy::Fail`]. Export drawings with
//! separated coordinates when using the strict policy.

use crate::error::{ConversionError, ConversionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// What to do when an argument is not a valid number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericParsePolicy {
    /// Substitute 0.0 and keep going
    Zero,
    /// Abort with [`ConversionError::NumericParseError`]
    Fail,
}

impl Default for NumericParsePolicy {
    fn default() -> Self {
        Self::Zero
    }
}

impl fmt::Display for NumericParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "zero"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for NumericParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "fail" | "strict" => Ok(Self::Fail),
            _ => Err(format!("Unknown numeric parse policy: {}", s)),
        }
    }
}

/// Supported path commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    ArcTo,
    ClosePath,
}

impl PathCommand {
    /// Map a command letter to its command and relative flag.
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        let command = match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'A' => Self::ArcTo,
            'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((command, letter.is_ascii_lowercase()))
    }

    /// Upper-case command letter
    pub fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::ArcTo => 'A',
            Self::ClosePath => 'Z',
        }
    }

    /// Number of arguments consumed per repetition of the command
    pub fn group_size(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 2,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::ArcTo => 7,
            Self::ClosePath => 0,
        }
    }
}

/// One command letter and the numbers that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct PathToken {
    pub command: PathCommand,
    pub relative: bool,
    pub arguments: Vec<f64>,
}

impl PathToken {
    pub fn new(command: PathCommand, relative: bool) -> Self {
        Self {
            command,
            relative,
            arguments: Vec::new(),
        }
    }

    /// The letter as it appeared in the source
    pub fn letter(&self) -> char {
        let letter = self.command.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

enum State {
    /// Before the first command letter
    Preamble,
    /// Inside a supported command's argument run
    Arguments(PathToken),
    /// Inside an unsupported command's argument run
    Skipping,
}

/// Finite-state tokenizer for the supported path-data subset
#[derive(Debug, Clone, Copy, Default)]
pub struct PathTokenizer {
    policy: NumericParsePolicy,
}

impl PathTokenizer {
    pub fn new(policy: NumericParsePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NumericParsePolicy {
        self.policy
    }

    /// Tokenize a path-data string
    pub fn tokenize(&self, path_data: &str) -> ConversionResult<Vec<PathToken>> {
        let mut tokens = Vec::new();
        let mut state = State::Preamble;
        let mut number = String::new();

        for ch in path_data.chars() {
            if let Some((command, relative)) = PathCommand::from_letter(ch) {
                self.finish(state, &mut number, &mut tokens)?;
                state = State::Arguments(PathToken::new(command, relative));
            } else if is_command_letter(ch) {
                self.finish(state, &mut number, &mut tokens)?;
                warn!("Skipping unsupported path command '{}'", ch);
                state = State::Skipping;
            } else if ch.is_whitespace() || ch == ',' {
                if let State::Arguments(token) = &mut state {
                    self.flush_number(&mut number, token)?;
                }
            } else if let State::Arguments(_) = state {
                number.push(ch);
            }
        }

        self.finish(state, &mut number, &mut tokens)?;
        Ok(tokens)
    }

    fn finish(
        &self,
        state: State,
        number: &mut String,
        tokens: &mut Vec<PathToken>,
    ) -> ConversionResult<()> {
        match state {
            State::Arguments(mut token) => {
                self.flush_number(number, &mut token)?;
                tokens.push(token);
            }
            State::Skipping | State::Preamble => number.clear(),
        }
        Ok(())
    }

    fn flush_number(&self, number: &mut String, token: &mut PathToken) -> ConversionResult<()> {
        if number.is_empty() {
            return Ok(());
        }
        let value = self.parse_number(number)?;
        token.arguments.push(value);
        number.clear();
        Ok(())
    }

    fn parse_number(&self, text: &str) -> ConversionResult<f64> {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => match self.policy {
                NumericParsePolicy::Zero => {
                    warn!("Malformed number '{}' in path data, using 0", text);
                    Ok(0.0)
                }
                NumericParsePolicy::Fail => Err(ConversionError::NumericParseError {
                    token: text.to_string(),
                }),
            },
        }
    }
}

/// Letters that start a command; `e`/`E` belong to exponents.
fn is_command_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() && !matches!(ch, 'e' | 'E')
}
