//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use alloc::string::String;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

use super::iana::{Class, Rtype};
use super::name::{compose_name, parse_name};
use super::wire::{ComposeError, ParseError};

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. Only
/// one question per message is supported.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    qname: String,
    qtype: Rtype,
    qclass: Class,
}

impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: impl Into<String>, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: impl Into<String>, qtype: Rtype) -> Self {
        Self::new(qname, qtype, Class::IN)
    }

    /// Returns a reference to the domain nmae in the question,
    #[must_use]
    pub fn qname(&self) -> &str {
        &self.qname
    }

    /// Returns the record type of the question.
    #[must_use]
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    #[must_use]
    pub fn qclass(&self) -> Class {
        self.qclass
    }

    /// Parses a question.
    ///
    /// Types and classes that have no business in a question are rejected
    /// as a format error.
    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let qname = parse_name(parser)?;
        let qtype = Rtype::parse(parser)?;
        let qclass = Class::parse(parser)?;
        if !qtype.is_question_type() {
            tracing::debug!(%qtype, "unknown question type");
            return Err(ParseError::form_error("unknown question type"));
        }
        if !qclass.is_question_class() {
            tracing::debug!(%qclass, "unknown question class");
            return Err(ParseError::form_error("unknown question class"));
        }
        Ok(Question {
            qname,
            qtype,
            qclass,
        })
    }

    /// Appends the wire format of the question.
    ///
    /// The name in a question is never compressed.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        compose_name(&self.qname, target)?;
        self.qtype.compose(target)?;
        self.qclass.compose(target)?;
        Ok(())
    }
}

//============ Testing =======================================================
