//! Creating and consuming data in wire format.
//!
//! Parsing happens atop [`octseq::parse::Parser`] over the octets of a
//! complete message so that compression pointers can be followed.
//! Composing happens into any type implementing [`Composer`], an octets
//! builder that can be read back for name compression and written to in
//! place for back-filling length fields.

use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::net::{Ipv4Addr, Ipv6Addr};
use octseq::builder::{OctetsBuilder, ShortBuf, Truncate};
use octseq::parse::{Parser, ShortInput};

use super::iana::Rtype;

//------------ compose functions ---------------------------------------------

/// Composes some data prefixed by its length as a 16 bit integer.
///
/// The length is written as a placeholder first and filled in once `op`
/// has finished. If `op` fails or the data turns out to be longer than
/// 65,535 octets, the target is truncated back to where it was before the
/// call.
pub fn compose_len_prefixed<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), ComposeError>
where
    Target: Composer + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), ComposeError>,
{
    let start = target.as_ref().len();
    target.append_slice(&[0; 2])?;
    let pos = start + 2;
    if let Err(err) = op(target) {
        target.truncate(start);
        return Err(err);
    }
    let len = match u16::try_from(target.as_ref().len() - pos) {
        Ok(len) => len,
        Err(_) => {
            target.truncate(start);
            return Err(ComposeError::LongData);
        }
    };
    target.as_mut()[start..pos].copy_from_slice(&len.to_be_bytes());
    Ok(())
}

//------------ Composer ------------------------------------------------------

/// An octets builder usable as the target of message composition.
///
/// Name compression needs to search the data composed so far, so the
/// builder must be readable. Length fields are filled in after the fact, so
/// it must be writable in place. And a failed record must not leave half
/// its data behind, so it must be truncatable.
pub trait Composer:
    OctetsBuilder + AsRef<[u8]> + AsMut<[u8]> + Truncate
{
}

#[cfg(feature = "std")]
impl Composer for std::vec::Vec<u8> {}

impl<const N: usize> Composer for octseq::array::Array<N> {}

impl Composer for VecTarget {}

//------------ VecTarget -----------------------------------------------------

/// A growable composition target on top of `alloc`.
///
/// octseq only implements its builder traits for `Vec<u8>` when its `std`
/// feature is enabled. This type wraps a vector so that messages can be
/// composed into growing memory without it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VecTarget(Vec<u8>);

impl VecTarget {
    /// Creates a new, empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the composed octets.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl OctetsBuilder for VecTarget {
    type AppendError = Infallible;

    fn append_slice(&mut self, slice: &[u8]) -> Result<(), Self::AppendError> {
        self.0.extend_from_slice(slice);
        Ok(())
    }
}

impl Truncate for VecTarget {
    fn truncate(&mut self, len: usize) {
        self.0.truncate(len)
    }
}

impl AsRef<[u8]> for VecTarget {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl AsMut<[u8]> for VecTarget {
    fn as_mut(&mut self) -> &mut [u8] {
        self.0.as_mut()
    }
}

impl From<VecTarget> for Vec<u8> {
    fn from(target: VecTarget) -> Self {
        target.0
    }
}

//------------ Compose -------------------------------------------------------

/// A type that knows how to append its wire format to an octets builder.
pub trait Compose {
    /// The length in octets of the wire format if it is fixed.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

impl Compose for Ipv4Addr {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

impl Compose for Ipv6Addr {
    const COMPOSE_LEN: u16 = 16;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a parser.
///
/// The parser always covers the octets of an entire message, possibly
/// limited at the end to the data of a single record. Types containing
/// domain names rely on this to resolve compression pointers.
pub trait Parse<'a>: Sized {
    /// Extracts a value from the beginning of `parser`.
    ///
    /// If parsing fails, the position of the parser is undefined.
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError>;
}

impl<'a> Parse<'a> for u8 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u16 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u32 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }
}

impl<'a> Parse<'a> for Ipv4Addr {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 4];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

impl<'a> Parse<'a> for Ipv6Addr {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 16];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

/// Takes the next `len` octets of the parser as a slice of the message.
pub fn parse_slice<'a>(
    parser: &mut Parser<'a, [u8]>,
    len: usize,
) -> Result<&'a [u8], ParseError> {
    let start = parser.pos();
    parser.advance(len)?;
    Ok(&parser.octets_ref()[start..start + len])
}

/// Takes all remaining octets of the parser as a slice of the message.
pub fn parse_remaining<'a>(
    parser: &mut Parser<'a, [u8]>,
) -> Result<&'a [u8], ParseError> {
    let len = parser.remaining();
    parse_slice(parser, len)
}

//============ Error Types ===================================================

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The target ran out of space.
    ShortBuf,

    /// Data behind a 16 bit length field exceeded 65,535 octets.
    LongData,

    /// A label of a domain name was longer than 63 octets.
    LongLabel,

    /// A domain name was longer than 255 octets in wire format.
    LongName,

    /// A domain name contained an empty label, a zero octet, or a broken
    /// escape sequence.
    BadLabel,

    /// A character string was longer than 255 octets.
    LongCharStr,

    /// There is no encoder for records of this type.
    NotImplemented(Rtype),
}

impl<T: Into<ShortBuf>> From<T> for ComposeError {
    fn from(_: T) -> Self {
        ComposeError::ShortBuf
    }
}

//--- Display and Error

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::ShortBuf => f.write_str("buffer is too small"),
            ComposeError::LongData => f.write_str("data too long"),
            ComposeError::LongLabel => {
                f.write_str("label longer than 63 octets")
            }
            ComposeError::LongName => {
                f.write_str("domain name longer than 255 octets")
            }
            ComposeError::BadLabel => f.write_str("malformed label"),
            ComposeError::LongCharStr => {
                f.write_str("character string longer than 255 octets")
            }
            ComposeError::NotImplemented(rtype) => {
                write!(f, "cannot encode record type {}", rtype)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ComposeError {}

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the parser.
    ShortInput,

    /// There was nothing to parse at all.
    EmptyBuffer,

    /// The message is shorter than its twelve octet header.
    ShortHeader,

    /// The message has more than one question.
    MultipleQuestions,

    /// A domain name is longer than 255 octets.
    LongName,

    /// A compression pointer points forward, to itself, or appears where
    /// compression is not allowed.
    IllegalCompression,

    /// The length of some record data disagrees with its content.
    Malformed(FormError),

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }

    /// Creates a new parse error for malformed record data.
    pub fn malformed(msg: &'static str) -> Self {
        ParseError::Malformed(FormError::new(msg))
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::EmptyBuffer => f.write_str("empty input"),
            ParseError::ShortHeader => {
                f.write_str("message shorter than its header")
            }
            ParseError::MultipleQuestions => {
                f.write_str("more than one question")
            }
            ParseError::LongName => {
                f.write_str("domain name longer than 255 octets")
            }
            ParseError::IllegalCompression => {
                f.write_str("illegal compression pointer")
            }
            ParseError::Malformed(ref err) => {
                write!(f, "malformed record: {}", err)
            }
            ParseError::Form(ref err) => fmt::Display::fmt(err, f),
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

    /// Returns the diagnostics string.
    pub fn as_str(self) -> &'static str {
        self.0
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
