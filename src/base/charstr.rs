//! Character strings.
//!
//! The somewhat ill-named `<character-string>` is defined in [RFC 1035] as
//! binary information of up to 255 octets. As such, it doesn’t necessarily
//! contain (ASCII-) characters nor is it a string in a Rust-sense.
//!
//! In wire-format, character strings are encoded as one octet giving the
//! length followed by the actual data in that many octets. The length octet
//! is not part of the content wrapped by [`CharStr`], it contains the data
//! only.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use alloc::vec::Vec;
use core::{fmt, ops};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

use super::wire::{parse_slice, Compose, Parse, ParseError};

//------------ CharStr -------------------------------------------------------

/// The content of a DNS character string.
///
/// A character string consists of up to 255 octets of binary data. The
/// type is guaranteed to never hold more than that. It derefs into a slice
/// for working with the content in a familiar way.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CharStr(Vec<u8>);

impl CharStr {
    /// The maximum length of the content in octets.
    pub const MAX_LEN: usize = 255;

    /// Creates a new empty character string.
    #[must_use]
    pub fn empty() -> Self {
        CharStr(Vec::new())
    }

    /// Creates a new character string from an octets vector.
    ///
    /// Returns succesfully if `octets` can indeed be used as a
    /// character string, i.e., it is not longer than 255 bytes.
    pub fn from_octets(octets: Vec<u8>) -> Result<Self, CharStrError> {
        if octets.len() > Self::MAX_LEN {
            Err(CharStrError)
        } else {
            Ok(CharStr(octets))
        }
    }

    /// Creates a new character string from a copy of a slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, CharStrError> {
        if slice.len() > Self::MAX_LEN {
            Err(CharStrError)
        } else {
            Ok(CharStr(slice.into()))
        }
    }

    /// Splits arbitrary long data into a sequence of character strings.
    ///
    /// All strings but the last one will be exactly 255 octets long. Empty
    /// data results in a single empty string.
    #[must_use]
    pub fn split(data: &[u8]) -> Vec<Self> {
        if data.is_empty() {
            let mut res = Vec::new();
            res.push(CharStr::empty());
            return res;
        }
        data.chunks(Self::MAX_LEN)
            .map(|chunk| CharStr(chunk.into()))
            .collect()
    }

    /// Converts the character string into its underlying octets.
    #[must_use]
    pub fn into_octets(self) -> Vec<u8> {
        self.0
    }

    /// Returns a slice of the content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the length of the wire format including the length octet.
    #[must_use]
    pub fn compose_len(&self) -> u16 {
        // The length is at most 255.
        self.0.len() as u16 + 1
    }
}

//--- Deref and AsRef

impl ops::Deref for CharStr {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl AsRef<[u8]> for CharStr {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

//--- Parse and Compose

impl<'a> Parse<'a> for CharStr {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let len = usize::from(parser.parse_u8()?);
        parse_slice(parser, len).map(|slice| CharStr(slice.into()))
    }
}

impl Compose for CharStr {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        // The length is at most 255.
        (self.0.len() as u8).compose(target)?;
        target.append_slice(self.0.as_ref())
    }
}

//------------ CharStrError --------------------------------------------------

/// A byte sequence does not represent a valid character string.
///
/// This can only mean that the sequence is longer than 255 bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharStrError;

impl fmt::Display for CharStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("character string longer than 255 octets")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CharStrError {}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;

    #[test]
    fn from_octets() {
        assert!(CharStr::from_slice(&[b'x'; 255]).is_ok());
        assert_eq!(CharStr::from_slice(&[b'x'; 256]), Err(CharStrError));
        assert_eq!(CharStr::from_octets(vec![0; 256]), Err(CharStrError));
    }

    #[test]
    fn split() {
        let data = vec![b'a'; 600];
        let strs = CharStr::split(&data);
        assert_eq!(strs.len(), 3);
        assert_eq!(strs[0].len(), 255);
        assert_eq!(strs[1].len(), 255);
        assert_eq!(strs[2].len(), 90);
        assert_eq!(CharStr::split(b""), vec![CharStr::empty()]);
    }

    #[test]
    fn parse_and_compose() {
        let mut parser = Parser::from_ref(&b"\x03foo\x00\x05ab"[..]);
        let foo = CharStr::parse(&mut parser).unwrap();
        assert_eq!(foo.as_slice(), b"foo");
        assert_eq!(foo.compose_len(), 4);
        assert_eq!(CharStr::parse(&mut parser).unwrap(), CharStr::empty());
        assert_eq!(CharStr::parse(&mut parser), Err(ParseError::ShortInput));

        let mut target = Vec::new();
        foo.compose(&mut target).unwrap();
        assert_eq!(target, b"\x03foo");
    }
}
