use std::{fmt, str::FromStr};

use thiserror::Error;

/// A single list operation, as written on one line of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<V> {
    /// `append <value>`
    Append(V),
    /// `insert <value>`
    Insert(V),
    /// `remove-first`
    RemoveFirst,
    /// `head`
    Head,
    /// `tail`
    Tail,
    /// `len`
    Len,
    /// `get <index>`
    Get(isize),
    /// `to-list`
    ToList,
    /// `clear`
    Clear,
}

/// Errors that can occur when parsing a single operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first token is not a known operation.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// The operation needs an argument but none was given.
    #[error("'{0}' requires an argument")]
    MissingArgument(&'static str),

    /// The operation takes no argument but one was given.
    #[error("'{operation}' takes no argument, got '{argument}'")]
    UnexpectedArgument {
        /// Name of the operation.
        operation: &'static str,
        /// The text following the operation name.
        argument: String,
    },

    /// The argument could not be parsed as a list value.
    #[error("invalid value '{value}': {reason}")]
    InvalidValue {
        /// The argument as written.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The argument to `get` is not an integer.
    #[error("invalid index '{0}': expected an integer")]
    InvalidIndex(String),
}

impl<V> Operation<V> {
    /// Returns the script keyword for this operation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Append(_) => "append",
            Self::Insert(_) => "insert",
            Self::RemoveFirst => "remove-first",
            Self::Head => "head",
            Self::Tail => "tail",
            Self::Len => "len",
            Self::Get(_) => "get",
            Self::ToList => "to-list",
            Self::Clear => "clear",
        }
    }
}

impl<V> Operation<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    /// Parses one script line.
    ///
    /// Returns `Ok(None)` for blank lines and comments. Everything after a `#`
    /// is a comment. The argument of `append` and `insert` is the rest of the
    /// line, trimmed, so text values may contain spaces.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the line is not a well-formed operation.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));

        let operation = match keyword.to_ascii_lowercase().as_str() {
            "append" => Self::Append(parse_value("append", argument)?),
            "insert" => Self::Insert(parse_value("insert", argument)?),
            "get" => Self::Get(parse_index(argument)?),
            "remove-first" => no_argument(Self::RemoveFirst, argument)?,
            "head" => no_argument(Self::Head, argument)?,
            "tail" => no_argument(Self::Tail, argument)?,
            "len" => no_argument(Self::Len, argument)?,
            "to-list" => no_argument(Self::ToList, argument)?,
            "clear" => no_argument(Self::Clear, argument)?,
            _ => return Err(ParseError::UnknownOperation(keyword.to_string())),
        };

        Ok(Some(operation))
    }
}

fn parse_value<V>(operation: &'static str, argument: &str) -> Result<V, ParseError>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    if argument.is_empty() {
        return Err(ParseError::MissingArgument(operation));
    }
    argument.parse().map_err(|e: V::Err| ParseError::InvalidValue {
        value: argument.to_string(),
        reason: e.to_string(),
    })
}

fn parse_index(argument: &str) -> Result<isize, ParseError> {
    if argument.is_empty() {
        return Err(ParseError::MissingArgument("get"));
    }
    argument
        .parse()
        .map_err(|_| ParseError::InvalidIndex(argument.to_string()))
}

fn no_argument<V>(operation: Operation<V>, argument: &str) -> Result<Operation<V>, ParseError> {
    if argument.is_empty() {
        Ok(operation)
    } else {
        Err(ParseError::UnexpectedArgument {
            operation: operation.name(),
            argument: argument.to_string(),
        })
    }
}

impl<V: fmt::Display> fmt::Display for Operation<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Append(value) | Self::Insert(value) => write!(f, "{} {value}", self.name()),
            Self::Get(index) => write!(f, "{} {index}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
