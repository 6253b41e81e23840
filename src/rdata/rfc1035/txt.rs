//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{Compose, ComposeError, Composer, Parse, ParseError};
use alloc::vec::Vec;
use octseq::parse::Parser;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. While it may appear as a single text,
/// it internally consists of a sequence of one or more
/// [character strings][CharStr], each at most 255 octets long.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Txt {
    strings: Vec<CharStr>,
}

impl Txt {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::TXT;

    /// Creates new TXT record data from a sequence of character strings.
    ///
    /// An empty sequence is replaced by a single empty string since the
    /// record data must not be empty.
    #[must_use]
    pub fn new(mut strings: Vec<CharStr>) -> Self {
        if strings.is_empty() {
            strings.push(CharStr::empty());
        }
        Txt { strings }
    }

    /// Creates new TXT record data from arbitrary long text.
    ///
    /// The text is split into as many character strings as necessary.
    #[must_use]
    pub fn build_from_slice(text: &[u8]) -> Self {
        Txt {
            strings: CharStr::split(text),
        }
    }

    /// Returns the character strings of the record data.
    #[must_use]
    pub fn strings(&self) -> &[CharStr] {
        &self.strings
    }

    /// Returns the text content.
    ///
    /// The character strings are concatenated without any separator.
    #[must_use]
    pub fn text(&self) -> Vec<u8> {
        let mut res = Vec::new();
        for item in &self.strings {
            res.extend_from_slice(item.as_slice());
        }
        res
    }

    /// Returns the length of the wire format.
    #[must_use]
    pub fn rdlen(&self) -> usize {
        self.strings
            .iter()
            .map(|item| usize::from(item.compose_len()))
            .sum()
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        if parser.remaining() == 0 {
            return Err(ParseError::malformed("empty TXT record"));
        }
        let mut strings = Vec::new();
        while parser.remaining() > 0 {
            strings.push(CharStr::parse(parser)?);
        }
        Ok(Txt { strings })
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

rtype_record_data!(Txt);

impl ComposeRecordData for Txt {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        for item in &self.strings {
            item.compose(target)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================
