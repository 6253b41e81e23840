//! EDNS Option for DNS cookies.
//!
//! The option in this module – [`Cookie`] –  is part of a simple mechanism
//! that helps DNS servers to mitigate denial-of-service and amplification
//! attacks called DNS cookies.
//!
//! In this mechanism, the client creates a client cookie and includes it in
//! its request to a server. When answering, the server generates a server
//! cookie from the client cookie and a secret and includes it in the
//! response. When the client sends subsequent queries to the same server,
//! it includes both the same client cookie as before and the server cookie
//! it received, thus identifying itself as having sent a query before.
//!
//! The DNS Cookie mechanism is defined in [RFC 7873].
//!
//! [RFC 7873]: https://tools.ietf.org/html/rfc7873

use alloc::vec::Vec;

use super::super::error::Error;
use super::super::iana::OptionCode;
use super::super::wire::ParseError;
use super::OptOption;

//------------ Cookie --------------------------------------------------------

/// Option data for a DNS cookie.
///
/// A value of this type carries two parts: a mandatory client cookie of
/// exactly eight octets and an optional server cookie of between eight and
/// 32 octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cookie {
    /// The client cookie.
    client: [u8; 8],

    /// The optional server cookie.
    server: Option<Vec<u8>>,
}

impl Cookie {
    /// The option code for this option.
    pub const CODE: OptionCode = OptionCode::COOKIE;

    /// The length of a client cookie.
    pub const CLIENT_LEN: usize = 8;

    /// The minimum length of a server cookie.
    pub const SERVER_MIN_LEN: usize = 8;

    /// The maximum length of a server cookie.
    pub const SERVER_MAX_LEN: usize = 32;

    /// Creates a new cookie from client and optional server cookie.
    #[must_use]
    pub fn new(client: [u8; 8], server: Option<ServerCookie>) -> Self {
        Cookie {
            client,
            server: server.map(ServerCookie::into_octets),
        }
    }

    /// Creates a new cookie from slices.
    ///
    /// Fails with [`Error::WrongInput`] if the client cookie is not exactly
    /// eight octets long or the server cookie is present but not between
    /// eight and 32 octets long.
    pub fn from_slices(
        client: &[u8],
        server: Option<&[u8]>,
    ) -> Result<Self, Error> {
        let client = <[u8; 8]>::try_from(client)
            .map_err(|_| Error::WrongInput("client cookie length"))?;
        let server = match server {
            Some(server) => Some(ServerCookie::from_slice(server)?),
            None => None,
        };
        Ok(Self::new(client, server))
    }

    /// Creates a random client cookie for including in an initial request.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn create_initial() -> Self {
        Self::new(rand::random(), None)
    }

    /// Returns the client cookie.
    #[must_use]
    pub fn client(&self) -> [u8; 8] {
        self.client
    }

    /// Returns the server cookie if present.
    #[must_use]
    pub fn server(&self) -> Option<&[u8]> {
        self.server.as_deref()
    }

    /// Parses the cookie from the data of a raw option.
    ///
    /// The client cookie is required. If there is more data, it has to be
    /// a server cookie of valid length.
    pub fn parse_option(option: &OptOption) -> Result<Self, ParseError> {
        let data = option.data();
        if data.len() < Self::CLIENT_LEN {
            return Err(ParseError::form_error("short client cookie"));
        }
        let (client, server) = data.split_at(Self::CLIENT_LEN);
        let mut res = [0u8; 8];
        res.copy_from_slice(client);
        let server = match server.len() {
            0 => None,
            Self::SERVER_MIN_LEN..=Self::SERVER_MAX_LEN => Some(server.into()),
            _ => {
                return Err(ParseError::form_error("invalid server cookie"))
            }
        };
        Ok(Cookie {
            client: res,
            server,
        })
    }
}

//--- From

impl From<Cookie> for OptOption {
    fn from(cookie: Cookie) -> Self {
        let mut data = Vec::with_capacity(
            Cookie::CLIENT_LEN + cookie.server.as_ref().map_or(0, Vec::len),
        );
        data.extend_from_slice(&cookie.client);
        if let Some(server) = cookie.server {
            data.extend_from_slice(&server);
        }
        OptOption::new(Cookie::CODE, data)
    }
}

//------------ ServerCookie --------------------------------------------------

/// A server cookie.
///
/// The cookie is between eight and 32 octets long.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ServerCookie(Vec<u8>);

impl ServerCookie {
    /// Creates a server cookie from a copy of a slice.
    ///
    /// Fails with [`Error::WrongInput`] if the length is out of range.
    pub fn from_slice(slice: &[u8]) -> Result<Self, Error> {
        if !(Cookie::SERVER_MIN_LEN..=Cookie::SERVER_MAX_LEN)
            .contains(&slice.len())
        {
            return Err(Error::WrongInput("server cookie length"));
        }
        Ok(ServerCookie(slice.into()))
    }

    /// Returns a slice of the cookie.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Converts the cookie into its octets.
    #[must_use]
    pub fn into_octets(self) -> Vec<u8> {
        self.0
    }
}

//============ Testing =======================================================
