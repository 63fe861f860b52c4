use std::result;
use std::fmt::{self, Display};

pub type Result<T> = result::Result<T, Error>;

/// Lexical problems the scanner recovers from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexicalError {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated comment.")]
    UnterminatedComment,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { line: usize, cause: LexicalError },
    Io(std::io::Error),
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical(line: usize, cause: LexicalError) -> Error {
        let message = cause.to_string();
        let kind = ErrorKind::Lexical { line, cause };
        Error { kind, message }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source line the error was reported at, if it came from source text.
    pub fn line(&self) -> Option<usize> {
        match self.kind() {
            ErrorKind::Lexical { line, .. } => Some(*line),
            ErrorKind::Io(_) => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind(), ErrorKind::Lexical { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Lexical { cause, .. } => Some(cause),
            ErrorKind::Io(e) => Some(e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line() {
            Some(line) => write!(f, "[line {}] Error: {}", line, self.message),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        let message = e.to_string();
        Error { kind: ErrorKind::Io(e), message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_error_is_line_tagged() {
        let e = Error::lexical(7, LexicalError::UnterminatedString);
        assert_eq!("[line 7] Error: Unterminated string.", e.to_string());
        assert_eq!(Some(7), e.line());
        assert!(e.is_lexical());
    }

    #[test]
    fn unexpected_character_names_the_character() {
        let e = Error::lexical(1, LexicalError::UnexpectedCharacter('@'));
        assert_eq!("Unexpected character '@'.", e.message());
    }

    #[test]
    fn io_errors_have_no_line() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e = Error::from(io);
        assert_eq!(None, e.line());
        assert_eq!("Error: no such file", e.to_string());
    }
}
