//! Record data for OPT records.
//!
//! Since DNS message headers are relatively short, the amount of information
//! that can be conveyed through them is very limited. In order to provide an
//! extensible means to transmit additional information, [RFC 6891] introduces
//! a resource record called OPT that can be added to the additional section
//! of a message. The record data in turn consists of a sequence of options.
//!
//! This module contains the types for working with both the OPT record and
//! its record data. Options are kept generically as [`OptOption`] values,
//! a code plus its raw data. Typed access is available for the options
//! this crate knows about in the sub-modules:
//!
//! * [`Cookie`] for DNS cookies, [RFC 7873],
//! * [`Nsid`] for the name server identifier, [RFC 5001], and
//! * [`ExtendedError`] for extended DNS errors, [RFC 8914].
//!
//! Since some of the information of the OPT record is transmitted in the
//! record header, the [`OptTtl`] type provides access to what is packed
//! into the TTL field.
//!
//! [RFC 5001]: https://tools.ietf.org/html/rfc5001
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891
//! [RFC 7873]: https://tools.ietf.org/html/rfc7873
//! [RFC 8914]: https://tools.ietf.org/html/rfc8914

pub use self::cookie::Cookie;
pub use self::exterr::ExtendedError;
pub use self::nsid::Nsid;

pub mod cookie;
pub mod exterr;
pub mod nsid;

use alloc::vec::Vec;
use octseq::parse::Parser;

use super::iana::{OptionCode, Rtype};
use super::rdata::{ComposeRecordData, RecordData};
use super::wire::{
    compose_len_prefixed, parse_slice, ComposeError, Composer, Parse,
    ParseError,
};

//------------ Opt -----------------------------------------------------------

/// OPT record data.
///
/// This is the record data type for OPT records. It holds the sequence of
/// options in the order they appeared in the message or were added.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Opt {
    options: Vec<OptOption>,
}

impl Opt {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::OPT;

    /// Creates OPT record data without any options.
    #[must_use]
    pub fn empty() -> Self {
        Opt {
            options: Vec::new(),
        }
    }

    /// Creates OPT record data from a vector of options.
    #[must_use]
    pub fn from_options(options: Vec<OptOption>) -> Self {
        Opt { options }
    }

    /// Returns whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns a slice of all options.
    #[must_use]
    pub fn options(&self) -> &[OptOption] {
        &self.options
    }

    /// Appends an option.
    pub fn push(&mut self, option: OptOption) {
        self.options.push(option)
    }

    /// Returns the first option with the given code.
    #[must_use]
    pub fn first(&self, code: OptionCode) -> Option<&OptOption> {
        self.options.iter().find(|option| option.code() == code)
    }

    /// Returns the first cookie option if there is a well-formed one.
    #[must_use]
    pub fn cookie(&self) -> Option<Cookie> {
        self.first(OptionCode::COOKIE)
            .and_then(|option| Cookie::parse_option(option).ok())
    }

    /// Returns the first NSID option.
    #[must_use]
    pub fn nsid(&self) -> Option<Nsid> {
        self.first(OptionCode::NSID).map(Nsid::from_option)
    }

    /// Returns the first extended error option if there is a well-formed
    /// one.
    #[must_use]
    pub fn extended_error(&self) -> Option<ExtendedError> {
        self.first(OptionCode::EXTENDED_ERROR)
            .and_then(|option| ExtendedError::parse_option(option).ok())
    }

    /// Returns the length of the record data in wire format.
    #[must_use]
    pub fn rdlen(&self) -> usize {
        self.options.iter().map(|opt| 4 + opt.data().len()).sum()
    }

    /// Parses the options from the record data.
    ///
    /// The parser must be limited to the record data. Options have to fill
    /// it exactly.
    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let mut options = Vec::new();
        while parser.remaining() > 0 {
            if parser.remaining() < 4 {
                tracing::debug!(
                    remaining = parser.remaining(),
                    "short EDNS option header"
                );
                return Err(ParseError::malformed("short option header"));
            }
            let code = OptionCode::parse(parser)?;
            let len = usize::from(u16::parse(parser)?);
            if len > parser.remaining() {
                tracing::debug!(%code, len, "EDNS option data overrun");
                return Err(ParseError::malformed("option data overrun"));
            }
            options.push(OptOption::new(code, parse_slice(parser, len)?));
        }
        Ok(Opt { options })
    }
}

//--- From

impl From<OptOption> for Opt {
    fn from(option: OptOption) -> Self {
        let mut res = Opt::empty();
        res.push(option);
        res
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Opt {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }
}

impl ComposeRecordData for Opt {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        for option in &self.options {
            option.compose(target)?;
        }
        Ok(())
    }
}

//------------ OptOption -----------------------------------------------------

/// A single option of an OPT record.
///
/// The option is kept in its raw form, as its code and its data octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OptOption {
    code: OptionCode,
    data: Vec<u8>,
}

impl OptOption {
    /// Creates a new option from the code and a copy of the data.
    pub fn new(code: OptionCode, data: impl Into<Vec<u8>>) -> Self {
        OptOption {
            code,
            data: data.into(),
        }
    }

    /// Returns the option code.
    #[must_use]
    pub fn code(&self) -> OptionCode {
        self.code
    }

    /// Returns the option data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Appends the option, i.e., code, length, and data, to the target.
    ///
    /// Fails with [`ComposeError::LongData`] if the data is longer than
    /// 65,535 octets.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.code.compose(target)?;
        compose_len_prefixed(target, |target| {
            target.append_slice(&self.data)?;
            Ok(())
        })
    }
}

//------------ OptTtl --------------------------------------------------------

/// The content of the TTL field of an OPT record.
///
/// OPT records repurpose the TTL field to carry the upper eight bits of
/// the extended response code, the EDNS version, and a set of flags of
/// which only the DNSSEC OK bit is currently defined. The remaining 15
/// bits are called Z and should be zero.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct OptTtl {
    ext_rcode: u8,
    version: u8,
    dnssec_ok: bool,
    z: u16,
}

impl OptTtl {
    /// Creates a value from the individual fields.
    ///
    /// Only the lower 15 bits of `z` are used.
    #[must_use]
    pub fn new(ext_rcode: u8, version: u8, dnssec_ok: bool, z: u16) -> Self {
        OptTtl {
            ext_rcode,
            version,
            dnssec_ok,
            z: z & 0x7FFF,
        }
    }

    /// Unpacks the fields from the raw TTL value.
    #[must_use]
    pub fn from_u32(ttl: u32) -> Self {
        let [ext_rcode, version, hi, lo] = ttl.to_be_bytes();
        let flags = u16::from_be_bytes([hi, lo]);
        OptTtl {
            ext_rcode,
            version,
            dnssec_ok: flags & 0x8000 != 0,
            z: flags & 0x7FFF,
        }
    }

    /// Packs the fields into a raw TTL value.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        let flags = if self.dnssec_ok { 0x8000 } else { 0 } | self.z;
        let [hi, lo] = flags.to_be_bytes();
        u32::from_be_bytes([self.ext_rcode, self.version, hi, lo])
    }

    /// Returns the upper eight bits of the extended response code.
    #[must_use]
    pub fn ext_rcode(self) -> u8 {
        self.ext_rcode
    }

    pub fn set_ext_rcode(&mut self, ext_rcode: u8) {
        self.ext_rcode = ext_rcode
    }

    /// Returns the EDNS version.
    ///
    /// Only EDNS version 0 is currently defined.
    #[must_use]
    pub fn version(self) -> u8 {
        self.version
    }

    pub fn set_version(&mut self, version: u8) {
        self.version = version
    }

    /// Returns the value of the DNSSEC OK (DO) bit.
    ///
    /// By setting this bit, a resolver indicates that it is interested in
    /// also receiving the DNSSEC-related resource records necessary to
    /// validate an answer. The bit and the related procedures are defined in
    /// [RFC 3225].
    ///
    /// [RFC 3225]: https://tools.ietf.org/html/rfc3225
    #[must_use]
    pub fn dnssec_ok(self) -> bool {
        self.dnssec_ok
    }

    /// Sets the DNSSEC OK (DO) bit to the given value.
    pub fn set_dnssec_ok(&mut self, value: bool) {
        self.dnssec_ok = value
    }

    /// Returns the 15 bits of the Z field.
    #[must_use]
    pub fn z(self) -> u16 {
        self.z
    }
}

//------------ OptRecord -----------------------------------------------------

/// An entire OPT record.
///
/// Combines the fields of the record header that the OPT record repurposes
/// with the parsed record data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptRecord {
    /// The UDP payload size field from the record header.
    udp_payload_size: u16,

    /// The TTL field from the record header.
    ttl: OptTtl,

    /// The record data.
    data: Opt,
}

impl OptRecord {
    #[must_use]
    pub fn new(udp_payload_size: u16, ttl: OptTtl, data: Opt) -> Self {
        OptRecord {
            udp_payload_size,
            ttl,
            data,
        }
    }

    /// Returns the UDP payload size.
    ///
    /// Through this field a sender of a message can signal the maximum size
    /// of UDP payload the sender is able to handle when receiving messages.
    #[must_use]
    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// Returns the content of the TTL field.
    #[must_use]
    pub fn ttl(&self) -> OptTtl {
        self.ttl
    }

    /// Returns a reference to the options.
    #[must_use]
    pub fn opt(&self) -> &Opt {
        &self.data
    }

    /// Converts the record into its options.
    #[must_use]
    pub fn into_opt(self) -> Opt {
        self.data
    }
}

//------------ EdnsConfig ----------------------------------------------------

/// Configuration used when an OPT record is created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdnsConfig {
    /// The UDP payload size announced in a new OPT record.
    pub udp_payload_size: u16,
}

impl EdnsConfig {
    /// The UDP payload size used by default.
    ///
    /// This is the value recommended by DNS Flag Day 2020.
    pub const DEFAULT_UDP_PAYLOAD_SIZE: u16 = 1232;
}

impl Default for EdnsConfig {
    fn default() -> Self {
        EdnsConfig {
            udp_payload_size: Self::DEFAULT_UDP_PAYLOAD_SIZE,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::rdata::test::test_compose_parse;

    #[test]
    fn opt_compose_parse() {
        let mut opt = Opt::empty();
        opt.push(OptOption::new(OptionCode::NSID, &b""[..]));
        opt.push(OptOption::new(OptionCode::PADDING, &b"\0\0\0"[..]));
        test_compose_parse(&opt, |parser| Opt::parse(parser));
        assert_eq!(opt.rdlen(), 11);
        assert_eq!(opt.options()[1].data(), b"\0\0\0");
    }

    #[test]
    fn parse_empty() {
        let mut parser = Parser::from_ref(&b""[..]);
        assert_eq!(Opt::parse(&mut parser), Ok(Opt::empty()));
    }

    #[test]
    fn parse_short_header() {
        let mut parser = Parser::from_ref(&b"\x00\x03\x00"[..]);
        assert!(matches!(
            Opt::parse(&mut parser),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn parse_overrun() {
        let mut parser = Parser::from_ref(&b"\x00\x03\x00\x04ab"[..]);
        assert!(matches!(
            Opt::parse(&mut parser),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn first_option() {
        let opt = Opt::from_options(vec![
            OptOption::new(OptionCode::PADDING, &b""[..]),
            OptOption::new(OptionCode::NSID, &b"a"[..]),
            OptOption::new(OptionCode::NSID, &b"b"[..]),
        ]);
        assert_eq!(opt.first(OptionCode::NSID).unwrap().data(), b"a");
        assert!(opt.first(OptionCode::COOKIE).is_none());
    }

    #[test]
    fn opt_ttl() {
        let ttl = OptTtl::from_u32(0x0100_8001);
        assert_eq!(ttl.ext_rcode(), 1);
        assert_eq!(ttl.version(), 0);
        assert!(ttl.dnssec_ok());
        assert_eq!(ttl.z(), 1);
        assert_eq!(ttl.to_u32(), 0x0100_8001);

        let mut ttl = OptTtl::default();
        ttl.set_dnssec_ok(true);
        ttl.set_version(1);
        assert_eq!(ttl.to_u32(), 0x0001_8000);
        assert_eq!(OptTtl::new(0, 0, false, 0xFFFF).z(), 0x7FFF);
    }

    #[test]
    fn edns_config_default() {
        assert_eq!(EdnsConfig::default().udp_payload_size, 1232);
    }
}
