//! Record data from [RFC 6742]: ILNP records.
//!
//! This RFC defines the NID, L32, L64, and LP record types for the
//! Identifier-Locator Network Protocol.
//!
//! [RFC 6742]: https://tools.ietf.org/html/rfc6742

use crate::base::iana::Rtype;
use crate::base::name::{compose_name, parse_name};
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{Compose, ComposeError, Composer, Parse, ParseError};
use alloc::string::String;
use core::net::Ipv4Addr;
use octseq::parse::Parser;

//------------ Nid -----------------------------------------------------------

/// Nid record data.
///
/// Holds a 64 bit node identifier with a preference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Nid {
    preference: u16,
    node_id: [u8; 8],
}

impl Nid {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::NID;

    #[must_use]
    pub fn new(preference: u16, node_id: [u8; 8]) -> Self {
        Nid {
            preference,
            node_id,
        }
    }

    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    #[must_use]
    pub fn node_id(&self) -> [u8; 8] {
        self.node_id
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let preference = u16::parse(parser)?;
        let mut node_id = [0u8; 8];
        parser.parse_buf(&mut node_id)?;
        Ok(Self::new(preference, node_id))
    }
}

rtype_record_data!(Nid);

impl ComposeRecordData for Nid {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.preference.compose(target)?;
        target.append_slice(&self.node_id)?;
        Ok(())
    }
}

//------------ L32 -----------------------------------------------------------

/// L32 record data.
///
/// Holds a 32 bit locator, which looks just like an IPv4 address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct L32 {
    preference: u16,
    locator: Ipv4Addr,
}

impl L32 {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::L32;

    #[must_use]
    pub fn new(preference: u16, locator: Ipv4Addr) -> Self {
        L32 {
            preference,
            locator,
        }
    }

    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    #[must_use]
    pub fn locator(&self) -> Ipv4Addr {
        self.locator
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        Ok(Self::new(u16::parse(parser)?, Ipv4Addr::parse(parser)?))
    }
}

rtype_record_data!(L32);

impl ComposeRecordData for L32 {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.preference.compose(target)?;
        self.locator.compose(target)?;
        Ok(())
    }
}

//------------ L64 -----------------------------------------------------------

/// L64 record data.
///
/// Holds a 64 bit locator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct L64 {
    preference: u16,
    locator: [u8; 8],
}

impl L64 {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::L64;

    #[must_use]
    pub fn new(preference: u16, locator: [u8; 8]) -> Self {
        L64 {
            preference,
            locator,
        }
    }

    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    #[must_use]
    pub fn locator(&self) -> [u8; 8] {
        self.locator
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let preference = u16::parse(parser)?;
        let mut locator = [0u8; 8];
        parser.parse_buf(&mut locator)?;
        Ok(Self::new(preference, locator))
    }
}

rtype_record_data!(L64);

impl ComposeRecordData for L64 {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.preference.compose(target)?;
        target.append_slice(&self.locator)?;
        Ok(())
    }
}

//------------ Lp ------------------------------------------------------------

/// Lp record data.
///
/// Points to the name of a subnetwork that holds L32 or L64 records. The
/// name is never compressed when composing but compressed names are
/// accepted when parsing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Lp {
    preference: u16,
    fqdn: String,
}

impl Lp {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::LP;

    pub fn new(preference: u16, fqdn: impl Into<String>) -> Self {
        Lp {
            preference,
            fqdn: fqdn.into(),
        }
    }

    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    #[must_use]
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        Ok(Self::new(u16::parse(parser)?, parse_name(parser)?))
    }
}

rtype_record_data!(Lp);

impl ComposeRecordData for Lp {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.preference.compose(target)?;
        compose_name(&self.fqdn, target)
    }
}

//============ Testing =======================================================
