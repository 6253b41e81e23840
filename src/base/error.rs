//! The crate-level error type and numeric error codes.
//!
//! Operations on a whole [`Message`][super::message::Message] fail with
//! [`Error`]. Each error has a stable numeric code via [`Error::code`] so
//! that callers across a language boundary can carry it as an integer and
//! turn it back into a text with [`error_to_text`]. Library specific codes
//! are negative, DNS response codes are used as is.

use core::fmt;

use super::iana::rcode_text;
use super::wire::{ComposeError, ParseError};

//------------ Error ---------------------------------------------------------

/// An error happened while working with a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Parsing a message or some part of it failed.
    Parse(ParseError),

    /// Composing a message or some part of it failed.
    Compose(ComposeError),

    /// The message has no COOKIE option with a client cookie.
    ClientCookieNotFound,

    /// The message has no NSID option or the option is empty.
    NsidNotFound,

    /// The message has no OPT record.
    NoOpt,

    /// A value handed to a function was not acceptable.
    WrongInput(&'static str),
}

impl Error {
    /// Returns the numeric code of the error.
    ///
    /// The values are the ones listed as constants in the [`code`] module.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Error::Parse(err) => match err {
                ParseError::ShortInput => code::BUFFER_TOO_SHORT,
                ParseError::EmptyBuffer => code::BUFFER_IS_NULL,
                ParseError::ShortHeader => code::INVALID_DNS_PACKET,
                ParseError::MultipleQuestions => {
                    code::MORE_THAN_ONE_QUESTION
                }
                ParseError::LongName => code::HOSTNAME_TOO_LONG,
                ParseError::IllegalCompression => code::ILLEGAL_COMPRESSION,
                ParseError::Malformed(_) => code::RR_SECTION_MALFORMED,
                ParseError::Form(_) => code::FORMERR,
            },
            Error::Compose(err) => match err {
                ComposeError::ShortBuf => code::BUFFER_IS_SMALL,
                ComposeError::LongData => code::LONG_DATA,
                ComposeError::LongLabel => code::LABEL_MAX_63,
                ComposeError::LongName => code::HOSTNAME_TOO_LONG,
                ComposeError::BadLabel => code::WRONG_LABEL,
                ComposeError::LongCharStr => code::CHARSTR_TOO_LONG,
                ComposeError::NotImplemented(_) => code::NOTIMP,
            },
            Error::ClientCookieNotFound => code::CLIENT_COOKIE_NOT_FOUND,
            Error::NsidNotFound => code::NSID_NOT_FOUND,
            Error::NoOpt => code::NO_OPT,
            Error::WrongInput(_) => code::WRONG_INPUT,
        }
    }
}

//--- From

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ComposeError> for Error {
    fn from(err: ComposeError) -> Self {
        Error::Compose(err)
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref err) => fmt::Display::fmt(err, f),
            Error::Compose(ref err) => fmt::Display::fmt(err, f),
            Error::ClientCookieNotFound => {
                f.write_str("no client cookie in message")
            }
            Error::NsidNotFound => f.write_str("no NSID in message"),
            Error::NoOpt => f.write_str("no OPT record in message"),
            Error::WrongInput(msg) => write!(f, "wrong input: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

//------------ code ----------------------------------------------------------

/// The numeric error codes.
pub mod code {
    pub const MEMORY_ALLOC_FAILED: i32 = -1;
    pub const BUFFER_TOO_SHORT: i32 = -2;
    pub const QNAME_IS_NULL: i32 = -3;
    pub const HOSTNAME_TOO_LONG: i32 = -4;
    pub const WRONG_LABEL: i32 = -5;
    pub const BUFFER_IS_NULL: i32 = -6;
    pub const BUFFER_IS_SMALL: i32 = -7;
    pub const INVALID_DNS_PACKET: i32 = -8;
    pub const MORE_THAN_ONE_QUESTION: i32 = -9;
    pub const RR_NULL: i32 = -10;
    pub const LABEL_MAX_63: i32 = -13;
    pub const ILLEGAL_COMPRESSION: i32 = -14;
    pub const RR_SECTION_MALFORMED: i32 = -15;
    pub const CHARSTR_TOO_LONG: i32 = -16;
    pub const CLIENT_COOKIE_NOT_FOUND: i32 = -17;
    pub const NSID_NOT_FOUND: i32 = -18;
    pub const INVALID_HEX: i32 = -19;
    pub const WRONG_INPUT: i32 = -20;
    pub const LONG_DATA: i32 = -21;
    pub const NO_OPT: i32 = -22;

    /// The FormErr response code.
    pub const FORMERR: i32 = 1;

    /// The NotImp response code.
    pub const NOTIMP: i32 = 4;
}

//------------ error_to_text -------------------------------------------------

/// Returns a human readable text for a numeric error code.
///
/// Negative values are the library’s own codes, non-negative values are
/// treated as DNS response codes.
#[must_use]
pub fn error_to_text(err: i32) -> &'static str {
    match err {
        code::MEMORY_ALLOC_FAILED => {
            "Failed to allocate memory using malloc()"
        }
        code::BUFFER_TOO_SHORT => "DNS packet is shorter than expected",
        code::QNAME_IS_NULL => "qname of a query can not be empty",
        code::HOSTNAME_TOO_LONG => {
            "Maximum length of a host name is 255 (RFC1034 section 3.1)"
        }
        code::WRONG_LABEL => {
            "Each part of the label can not be more than 63 characters \
             (RFC1034 section 3.1)"
        }
        code::BUFFER_IS_NULL => "buffer provided to function can not be NULL",
        code::BUFFER_IS_SMALL => "The buffer is too small for the data",
        code::INVALID_DNS_PACKET => {
            "The received packet is not a valid DNS packet"
        }
        code::MORE_THAN_ONE_QUESTION => {
            "The question section has more than one part"
        }
        code::RR_NULL => "Resource record parameter is NULL",
        code::LABEL_MAX_63 => {
            "The maximum possible length of the label is 63 \
             (RFC1034 section 3.1)"
        }
        code::ILLEGAL_COMPRESSION => {
            "Compressed label detected while is not allowed"
        }
        code::RR_SECTION_MALFORMED => "A resource record is malformed",
        code::CHARSTR_TOO_LONG => {
            "A character string can not be longer than 255 characters"
        }
        code::CLIENT_COOKIE_NOT_FOUND => {
            "There is no client cookie in the EDNS0 options"
        }
        code::NSID_NOT_FOUND => "There is no NSID in the EDNS0 options",
        code::INVALID_HEX => "The hex string is not valid",
        code::WRONG_INPUT => "The input provided to the function is wrong",
        code::LONG_DATA => "The data can not be longer than 65535 bytes",
        code::NO_OPT => "There is no OPT record in the packet",
        0..=65535 => rcode_text(err as u16),
        _ => "Non-standard error code",
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::wire::FormError;

    #[test]
    fn codes() {
        assert_eq!(Error::from(ParseError::ShortInput).code(), -2);
        assert_eq!(Error::from(ParseError::EmptyBuffer).code(), -6);
        assert_eq!(Error::from(ParseError::ShortHeader).code(), -8);
        assert_eq!(Error::from(ParseError::MultipleQuestions).code(), -9);
        assert_eq!(Error::from(ParseError::IllegalCompression).code(), -14);
        assert_eq!(
            Error::from(ParseError::Malformed(FormError::new("x"))).code(),
            -15
        );
        assert_eq!(Error::from(ParseError::form_error("x")).code(), 1);
        assert_eq!(Error::from(ComposeError::LongLabel).code(), -13);
        assert_eq!(
            Error::from(ComposeError::NotImplemented(Rtype::NULL)).code(),
            4
        );
        assert_eq!(Error::WrongInput("cookie").code(), -20);
        assert_eq!(Error::NoOpt.code(), -22);
    }

    #[test]
    fn texts() {
        assert_eq!(error_to_text(-2), "DNS packet is shorter than expected");
        assert_eq!(
            error_to_text(-14),
            "Compressed label detected while is not allowed"
        );
        assert_eq!(error_to_text(0), "NoError");
        assert_eq!(error_to_text(1), "FormErr");
        assert_eq!(error_to_text(16), "BADVERS");
        assert_eq!(error_to_text(23), "BADCOOKIE");
        assert_eq!(error_to_text(100), "Unassigned");
        assert_eq!(error_to_text(4000), "Reserved for Private Use");
        assert_eq!(error_to_text(65535), "Reserved");
        assert_eq!(error_to_text(-100), "Non-standard error code");
        assert_eq!(error_to_text(65536), "Non-standard error code");
        assert_eq!(error_to_text(-11), "Non-standard error code");
    }
}
