//! Extended DNS Error

//------------ Extended Error Code -------------------------------------------

int_enum! {
    /// Extended DNS error codes.
    ///
    /// An extended error can be put into the OPT record of a response,
    /// providing additional information about the cause of a DNS error.
    /// Defined in [RFC 8914]. Current registered values can be found in
    /// the [IANA registry].
    ///
    /// [RFC 8914]: https://tools.ietf.org/html/rfc8914
    /// [IANA registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#extended-dns-error-codes
    =>
    ExtendedErrorCode, u16;

    /// The error does not match any other code.
    (OTHER => 0, "Other Error")

    /// A DNSKEY RRset only used unsupported DNSSEC algorithms.
    (UNSUPPORTED_DNSKEY_ALGORITHM => 1, "Unsupported DNSKEY Algorithm")

    /// A DS RRset only used unsupported digest types.
    (UNSUPPORTED_DS_DIGEST_TYPE => 2, "Unsupported DS Digest Type")

    /// The resolver answered with stale data.
    (STALE_ANSWER => 3, "Stale Answer")

    /// The answer was forged, usually by a policy.
    (FORGED_ANSWER => 4, "Forged Answer")

    /// DNSSEC validation ended in the indeterminate state.
    (DNSSEC_INDETERMINATE => 5, "DNSSEC Indeterminate")

    /// DNSSEC validation ended in the bogus state.
    (DNSSEC_BOGUS => 6, "DNSSEC Bogus")

    /// All usable signatures have expired.
    (SIGNATURE_EXPIRED => 7, "Signature Expired")

    /// No usable signature is valid yet.
    (SIGNATURE_NOT_YET_VALID => 8, "Signature Not Yet Valid")

    /// No DNSKEY matches a DS record of the parent zone.
    (DNSKEY_MISSING => 9, "DNSKEY Missing")

    /// A secure zone had no RRSIGs where they were expected.
    (RRSIGS_MISSING => 10, "RRSIGs Missing")

    /// No DNSKEY had the zone key bit set.
    (NO_ZONE_KEY_BIT_SET => 11, "No Zone Key Bit Set")

    /// A denial of existence lacked NSEC or NSEC3 records.
    (NSEC_MISSING => 12, "NSEC Missing")

    /// The resolver returns a cached SERVFAIL.
    (CACHED_ERROR => 13, "Cached Error")

    /// The server is not ready to serve queries.
    (NOT_READY => 14, "Not Ready")

    /// The domain is on a blocklist of the operator.
    (BLOCKED => 15, "Blocked")

    /// The domain is blocked due to an external requirement.
    (CENSORED => 16, "Censored")

    /// The domain is blocked on request of the client.
    (FILTERED => 17, "Filtered")

    /// The client is not allowed to query the server.
    (PROHIBITED => 18, "Prohibited")

    /// The resolver answered with a stale NXDOMAIN.
    (STALE_NXDOMAIN_ANSWER => 19, "Stale NXDomain Answer")

    /// The server is not authoritative and recursion was not desired.
    (NOT_AUTHORITATIVE => 20, "Not Authoritative")

    /// The requested operation or query is not supported.
    (NOT_SUPPORTED => 21, "Not Supported")

    /// No authoritative server could be reached.
    (NO_REACHABLE_AUTHORITY => 22, "No Reachable Authority")

    /// An unrecoverable network error happened.
    (NETWORK_ERROR => 23, "Network Error")

    /// The data for the zone is invalid.
    (INVALID_DATA => 24, "Invalid Data")

    /// A signature expired before it became valid.
    (SIGNATURE_EXPIRED_BEFORE_VALID => 25, "Signature Expired before Valid")

    /// The query arrived too early to be processed.
    (TOO_EARLY => 26, "Too Early")

    /// The NSEC3 iteration count is higher than supported.
    (UNSUPPORTED_NSEC3_ITERATIONS => 27, "Unsupported NSEC3 Iterations Value")

    /// The server can’t follow the policy of the client.
    (UNABLE_TO_CONFORM_TO_POLICY => 28, "Unable to conform to policy")

    /// The answer was synthesized from cached records.
    (SYNTHESIZED => 29, "Synthesized")
}

/// Start of the private range for EDE codes.
pub const EDE_PRIVATE_RANGE_BEGIN: u16 = 49152;

impl ExtendedErrorCode {
    /// Returns whether the code is in the private use range.
    #[must_use]
    pub const fn is_private(self) -> bool {
        self.to_int() >= EDE_PRIVATE_RANGE_BEGIN
    }
}

int_enum_str_with_prefix!(ExtendedErrorCode, "EDE", u16, "unknown error code");

//============ Tests =========================================================
