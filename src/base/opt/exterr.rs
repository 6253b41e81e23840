//! EDNS option for extended DNS errors.
//!
//! The option in this module – [`ExtendedError`] – allows a server to
//! provide more detailed information why a query has failed.
//!
//! The option is defined in [RFC 8914](https://tools.ietf.org/html/rfc8914).

use alloc::string::String;
use alloc::vec::Vec;
use core::str;

use super::super::iana::exterr::ExtendedErrorCode;
use super::super::iana::OptionCode;
use super::super::wire::ParseError;
use super::OptOption;

//------------ ExtendedError -------------------------------------------------

/// Option data for an extended DNS error.
///
/// The Extended DNS Error option allows a server to include more detailed
/// information in a response to a failed query why it did. It contains a
/// standardized [`ExtendedErrorCode`] for machines and an optional UTF-8
/// error text for humans.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExtendedError {
    /// The extended error code.
    code: ExtendedErrorCode,

    /// Human-readable error information. Empty if there is none.
    text: String,
}

impl ExtendedError {
    /// The option code for this option.
    pub const CODE: OptionCode = OptionCode::EXTENDED_ERROR;

    /// Creates a new value from a code and text.
    pub fn new(code: ExtendedErrorCode, text: impl Into<String>) -> Self {
        ExtendedError {
            code,
            text: text.into(),
        }
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> ExtendedErrorCode {
        self.code
    }

    /// Returns the text. It is empty if the option carried none.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the code is in the private range.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.code.is_private()
    }

    /// Parses the value from the data of a raw option.
    ///
    /// Text that is not valid UTF-8 is a form error.
    pub fn parse_option(option: &OptOption) -> Result<Self, ParseError> {
        let data = option.data();
        if data.len() < 2 {
            return Err(ParseError::form_error("short extended error"));
        }
        let code = ExtendedErrorCode::from_int(u16::from_be_bytes([
            data[0], data[1],
        ]));
        let text = str::from_utf8(&data[2..]).map_err(|_| {
            ParseError::form_error("extended error text is not UTF-8")
        })?;
        Ok(Self::new(code, text))
    }
}

//--- From

impl From<ExtendedError> for OptOption {
    fn from(err: ExtendedError) -> Self {
        let mut data = Vec::with_capacity(2 + err.text.len());
        data.extend_from_slice(&err.code.to_int().to_be_bytes());
        data.extend_from_slice(err.text.as_bytes());
        OptOption::new(ExtendedError::CODE, data)
    }
}

impl From<ExtendedErrorCode> for ExtendedError {
    fn from(code: ExtendedErrorCode) -> Self {
        Self::new(code, String::new())
    }
}

//============ Testing =======================================================
