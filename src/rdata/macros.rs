//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the super module only. They
//! are here so that `mod.rs` doesn’t become too unwieldly.

macro_rules! rdata_types {
    ( $(
        $module:ident::{
            $( $rtype:ident, )*
        }
    )* ) => {
        $(
            pub use self::$module::{ $( $rtype, )* };
        )*

        //------------- AllRecordData ----------------------------------------

        /// Record data for all record types.
        ///
        /// This enum collects the record data types for all currently
        /// implemented record types plus the OPT pseudo record. Data for
        /// any other record type ends up in the `Unknown` variant which
        /// can be parsed but not composed.
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub enum AllRecordData {
            $( $(
                $rtype($rtype),
            )* )*
            Opt($crate::base::opt::Opt),
            Unknown($crate::base::rdata::UnknownRecordData),
        }

        //--- From

        $( $(
            impl From<$rtype> for AllRecordData {
                fn from(value: $rtype) -> Self {
                    AllRecordData::$rtype(value)
                }
            }
        )* )*

        impl From<$crate::base::opt::Opt> for AllRecordData {
            fn from(value: $crate::base::opt::Opt) -> Self {
                AllRecordData::Opt(value)
            }
        }

        impl From<$crate::base::rdata::UnknownRecordData> for AllRecordData {
            fn from(value: $crate::base::rdata::UnknownRecordData) -> Self {
                AllRecordData::Unknown(value)
            }
        }

        //--- RecordData, ParseRecordData, and ComposeRecordData

        impl $crate::base::rdata::RecordData for AllRecordData {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                match *self {
                    $( $(
                        AllRecordData::$rtype(_) => $rtype::RTYPE,
                    )* )*
                    AllRecordData::Opt(_) => $crate::base::opt::Opt::RTYPE,
                    AllRecordData::Unknown(ref inner) => inner.rtype(),
                }
            }
        }

        impl<'a> $crate::base::rdata::ParseRecordData<'a> for AllRecordData {
            fn parse_rdata(
                rtype: $crate::base::iana::Rtype,
                parser: &mut octseq::parse::Parser<'a, [u8]>,
            ) -> Result<Option<Self>, $crate::base::wire::ParseError> {
                let res = match rtype {
                    $( $(
                        $rtype::RTYPE => {
                            AllRecordData::$rtype($rtype::parse(parser)?)
                        }
                    )* )*
                    $crate::base::opt::Opt::RTYPE => {
                        AllRecordData::Opt(
                            $crate::base::opt::Opt::parse(parser)?
                        )
                    }
                    _ => return Ok(None),
                };
                $crate::base::rdata::check_exhausted(parser)?;
                Ok(Some(res))
            }
        }

        impl $crate::base::rdata::ComposeRecordData for AllRecordData {
            fn compose_rdata<Target: $crate::base::wire::Composer + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), $crate::base::wire::ComposeError> {
                match *self {
                    $( $(
                        AllRecordData::$rtype(ref inner) => {
                            $crate::base::rdata::ComposeRecordData::
                                compose_rdata(inner, target)
                        }
                    )* )*
                    AllRecordData::Opt(ref inner) => {
                        $crate::base::rdata::ComposeRecordData::
                            compose_rdata(inner, target)
                    }
                    AllRecordData::Unknown(ref inner) => {
                        Err($crate::base::wire::ComposeError::NotImplemented(
                            inner.rtype()
                        ))
                    }
                }
            }
        }
    }
}

/// Creates the record data type for a record that is just a domain name.
macro_rules! name_type {
    ( $(#[$attr:meta])* ( $target:ident, $rtype:ident, $field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            $field: alloc::string::String,
        }

        impl $target {
            /// The rtype of this record data type.
            pub const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;

            pub fn new($field: impl Into<alloc::string::String>) -> Self {
                $target { $field: $field.into() }
            }

            #[must_use]
            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn parse(
                parser: &mut octseq::parse::Parser<[u8]>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $crate::base::name::parse_name(parser).map(Self::new)
            }
        }

        //--- RecordData, ParseRecordData, ComposeRecordData

        impl $crate::base::rdata::RecordData for $target {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                Self::RTYPE
            }
        }

        impl<'a> $crate::base::rdata::ParseRecordData<'a> for $target {
            fn parse_rdata(
                rtype: $crate::base::iana::Rtype,
                parser: &mut octseq::parse::Parser<'a, [u8]>,
            ) -> Result<Option<Self>, $crate::base::wire::ParseError> {
                if rtype == Self::RTYPE {
                    let res = Self::parse(parser)?;
                    $crate::base::rdata::check_exhausted(parser)?;
                    Ok(Some(res))
                } else {
                    Ok(None)
                }
            }
        }

        impl $crate::base::rdata::ComposeRecordData for $target {
            fn compose_rdata<Target: $crate::base::wire::Composer + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), $crate::base::wire::ComposeError> {
                $crate::base::name::compose_compressed_name(
                    &self.$field, target
                )
            }
        }
    }
}

/// Implements `RecordData` and `ParseRecordData` for a single-type record.
///
/// The type needs an associated constant `RTYPE` and a `parse` function.
macro_rules! rtype_record_data {
    ( $target:ident ) => {
        impl $crate::base::rdata::RecordData for $target {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                Self::RTYPE
            }
        }

        impl<'a> $crate::base::rdata::ParseRecordData<'a> for $target {
            fn parse_rdata(
                rtype: $crate::base::iana::Rtype,
                parser: &mut octseq::parse::Parser<'a, [u8]>,
            ) -> Result<Option<Self>, $crate::base::wire::ParseError> {
                if rtype == Self::RTYPE {
                    let res = Self::parse(parser)?;
                    $crate::base::rdata::check_exhausted(parser)?;
                    Ok(Some(res))
                } else {
                    Ok(None)
                }
            }
        }
    };
}
