//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for different
    /// network types. That is, each class has its own separate record tree
    /// starting at the root. However, in practice, only the IN class is really
    /// relevant.
    ///
    /// In addition, there are query classes or QCLASSes that are used in
    /// questions or UPDATE queries, namely NONE and ANY (or *).
    ///
    /// Classes are represented by a 16 bit value. The enum wraps these values.
    ///
    /// See [RFC 1034] for the introduction of classes, section 3.2 of
    /// [RFC 6895] for a discussion of the current state of afairs, and
    /// the [DNS CLASSes IANA registry] for an overview of assigned values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [RFC 6895]: https://tools.ietf.org/html/rfc6895
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// CSNET (CS).
    ///
    /// Obsolete since before RFC 1035 was published, but still listed
    /// there.
    (CS => 2, "CS")

    /// Chaosnet (CH).
    ///
    /// A network protocol developed at MIT in the 1970s. Reused by BIND for
    /// built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information protocol part of MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class None.
    ///
    /// Defined in RFC 2136, this class is used in UPDATE queries to
    /// require that an RRset does not exist prior to the update.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "*")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

impl Class {
    /// Returns whether the class may appear in a resource record.
    ///
    /// These are the four data classes of RFC 1035.
    #[must_use]
    pub const fn is_record_class(self) -> bool {
        matches!(self.0, 1..=4)
    }

    /// Returns whether the class may appear in a question.
    ///
    /// In addition to the data classes, this allows ANY.
    #[must_use]
    pub const fn is_question_class(self) -> bool {
        self.is_record_class() || self.0 == Class::ANY.0
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Class;
    use core::str::FromStr;

    #[cfg(feature = "std")]
    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class::from_int(69)), "Class(69)");
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(format!("{}", Class::CH), "CH");
        assert_eq!(format!("{}", Class::from_int(5)), "CLASS5");
    }

    #[test]
    fn from_str() {
        assert_eq!(Class::from_str("in").unwrap(), Class::IN);
        assert_eq!(Class::from_str("*").unwrap(), Class::ANY);
        assert_eq!(Class::from_str("CLASS12").unwrap(), Class::from_int(12));
        assert!(Class::from_str("CLASSX").is_err());
        assert!(Class::from_str("FOO").is_err());
    }

    #[test]
    fn validity() {
        assert!(Class::IN.is_record_class());
        assert!(Class::CS.is_record_class());
        assert!(!Class::ANY.is_record_class());
        assert!(Class::ANY.is_question_class());
        assert!(!Class::NONE.is_question_class());
        assert!(!Class::from_int(0).is_question_class());
    }
}
