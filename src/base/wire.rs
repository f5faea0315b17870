//! Errors happening while consuming data in wire format.

use super::name::NameError;
use core::fmt;
use octseq::parse::ShortInput;

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
///
/// All errors are final for the message they occurred in. Once the offset
/// arithmetic of a message has gone wrong, nothing after the point of
/// failure can be trusted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the message.
    ShortInput,

    /// A domain name was malformed.
    Name(NameError),

    /// Record data didn’t fit the fields requested from it.
    Rdata(FormError),
}

impl ParseError {
    /// Creates a new parse error as a record data error with the given
    /// message.
    pub fn rdata_error(msg: &'static str) -> Self {
        ParseError::Rdata(FormError::new(msg))
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<NameError> for ParseError {
    fn from(err: NameError) -> Self {
        ParseError::Name(err)
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Rdata(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Name(ref err) => err.fmt(f),
            ParseError::Rdata(ref err) => {
                write!(f, "malformed record data: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormError {}

//============ Testing =======================================================
