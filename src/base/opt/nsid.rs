//! EDNS option for the name server identifier.
//!
//! The option in this module – [`Nsid`] – allows a resolver to query for
//! and a server to provide an identifier for the particular server that
//! answered the query. This can be helpful when debugging a scenario where
//! multiple servers serve a common address.
//!
//! The option is defined in [RFC 5001](https://tools.ietf.org/html/rfc5001).

use alloc::vec::Vec;

use super::super::iana::OptionCode;
use super::OptOption;

//------------ Nsid ----------------------------------------------------------

/// Option data for the Name Server Identifier (NSID) Option.
///
/// A client signals interest in the identifier by including an empty
/// option in its query. The server answers with an option containing the
/// identifier, an arbitrary sequence of octets.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Nsid {
    octets: Vec<u8>,
}

impl Nsid {
    /// The option code for this option.
    pub const CODE: OptionCode = OptionCode::NSID;

    /// Creates the empty NSID option used in requests.
    #[must_use]
    pub fn empty() -> Self {
        Nsid { octets: Vec::new() }
    }

    /// Creates a value from the identifier.
    #[must_use]
    pub fn from_octets(octets: Vec<u8>) -> Self {
        Nsid { octets }
    }

    /// Creates a value from a copy of the identifier.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Self {
        Nsid {
            octets: slice.into(),
        }
    }

    /// Takes the identifier from a raw option.
    ///
    /// Any data is a valid identifier, so this cannot fail.
    #[must_use]
    pub fn from_option(option: &OptOption) -> Self {
        Self::from_slice(option.data())
    }

    /// Returns a slice of the identifier.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Converts the value into the identifier.
    #[must_use]
    pub fn into_octets(self) -> Vec<u8> {
        self.octets
    }

    /// Returns whether the option is the empty request variant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }
}

//--- From and AsRef

impl From<Nsid> for OptOption {
    fn from(nsid: Nsid) -> Self {
        OptOption::new(Nsid::CODE, nsid.octets)
    }
}

impl AsRef<[u8]> for Nsid {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//============ Testing =======================================================
