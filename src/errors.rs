//! Error management module

use std::fmt;
use std::io;

/// An error returned from [`XmlParser::parse`].
///
/// [`XmlParser::parse`]: crate::XmlParser::parse
#[derive(Debug)]
pub enum Error {
    /// A read from the input source failed.
    Io(io::Error),
    /// No bytes could be read from the input source before parsing began.
    EmptyInput,
    /// The document violates one of the XML grammar productions.
    Syntax(SyntaxError),
}

/// A grammar production failed while scanning the document.
///
/// Where a name was available when the error was detected, the variant
/// carries it (lossily converted) for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The dispatcher could not match any production at the current position.
    InvalidDocument,
    /// An element or attribute name was empty or began with `:`.
    InvalidName(String),
    /// A pseudo-attribute in the XML declaration was missing, misplaced,
    /// unknown, or empty.
    InvalidDecl(String),
    /// An attribute name was not followed by `=`.
    MissingEquals(String),
    /// An attribute-style value did not start with `"` or `'`.
    UnquotedValue(String),
    /// An attribute-style value was missing its closing delimiter.
    UnclosedValue(String),
    /// A comment terminator `-->` was not found, even after a refill.
    UnclosedComment,
    /// A CDATA terminator `]]>` was not found, even after a refill.
    UnclosedCData,
    /// The matching `>` of a `<!DOCTYPE` was not found, even after a refill.
    UnclosedDoctype,
    /// A processing instruction terminator `?>` was not found, even after
    /// a refill.
    UnclosedPI,
    /// A tag name ran to the end of the input, or a start tag was not closed
    /// by `>` or `/>`.
    UnclosedTag(String),
    /// An end tag appeared with no matching open start tag.
    UnmatchedEndTag(String),
    /// The input ended while an element was still open.
    UnexpectedEof,
    /// Bytes other than whitespace or comments followed the document element.
    TrailingContent,
}

/// A specialized `Result` type where the error is hard-wired to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "file input error: {}", e),
            Error::EmptyInput => write!(f, "empty input"),
            Error::Syntax(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxError::InvalidDocument => write!(f, "invalid XML document"),
            SyntaxError::InvalidName(name) => write!(f, "invalid element name '{}'", name),
            SyntaxError::InvalidDecl(msg) => write!(f, "invalid XML declaration: {}", msg),
            SyntaxError::MissingEquals(name) => write!(f, "attribute '{}' missing '='", name),
            SyntaxError::UnquotedValue(name) => {
                write!(f, "value of '{}' must start with '\"' or '\''", name)
            }
            SyntaxError::UnclosedValue(name) => {
                write!(f, "value of '{}' missing closing delimiter", name)
            }
            SyntaxError::UnclosedComment => write!(f, "unterminated XML comment"),
            SyntaxError::UnclosedCData => write!(f, "unterminated CDATA section"),
            SyntaxError::UnclosedDoctype => write!(f, "unterminated DOCTYPE"),
            SyntaxError::UnclosedPI => write!(f, "unterminated processing instruction"),
            SyntaxError::UnclosedTag(name) => write!(f, "unterminated tag '{}'", name),
            SyntaxError::UnmatchedEndTag(name) => {
                write!(f, "end tag '{}' does not match any start tag", name)
            }
            SyntaxError::UnexpectedEof => write!(f, "document ended inside an element"),
            SyntaxError::TrailingContent => write!(f, "extra content at end of document"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for SyntaxError {}

impl From<io::Error> for Error {
    /// Creates a new `Error::Io` from the given error
    #[inline]
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}

impl From<SyntaxError> for Error {
    /// Creates a new `Error::Syntax` from the given error
    #[inline]
    fn from(error: SyntaxError) -> Error {
        Error::Syntax(error)
    }
}
