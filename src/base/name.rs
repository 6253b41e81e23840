//! Domain names.
//!
//! Names are kept in presentation format as owned strings throughout the
//! crate: dot-separated labels with a trailing dot for the root and
//! RFC 1035 escapes (`\DDD` and `\X`) for octets that cannot appear
//! literally. This module converts between that form and the wire format,
//! resolving compression pointers when parsing and optionally producing
//! them when composing.

use alloc::string::String;
use alloc::vec::Vec;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

use super::wire::{parse_slice, ComposeError, Composer, ParseError};

//------------ Constants -----------------------------------------------------

/// The maximum length of a label in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// The maximum length of a domain name in wire format in octets.
pub const MAX_NAME_LEN: usize = 255;

/// The largest offset a compression pointer can express.
pub const MAX_COMPRESSION_OFFSET: usize = 0x3FFF;

//------------ LabelType -----------------------------------------------------

/// The type of a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelType {
    /// A normal label with its size in octets.
    Normal(usize),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Parses a label type.
    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype.into())),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(ParseError::form_error("invalid label type")),
        }
    }
}

//------------ Parsing -------------------------------------------------------

/// Parses a possibly compressed domain name.
///
/// The parser is left behind the octets the name occupies at its original
/// position, i.e., after the first compression pointer if there is one.
pub fn parse_name(parser: &mut Parser<[u8]>) -> Result<String, ParseError> {
    parse_labels(parser, true)
}

/// Parses a domain name that must not be compressed.
///
/// Any compression pointer results in
/// [`ParseError::IllegalCompression`].
pub fn parse_name_uncompressed(
    parser: &mut Parser<[u8]>,
) -> Result<String, ParseError> {
    parse_labels(parser, false)
}

fn parse_labels(
    parser: &mut Parser<[u8]>,
    allow_compression: bool,
) -> Result<String, ParseError> {
    let mut res = String::new();
    let mut name_len = 0;

    // Where the caller's parser continues once we have followed the first
    // pointer.
    let mut resume = None;

    // We walk a copy so we can jump around freely.
    let mut walker = *parser;
    loop {
        let label_pos = walker.pos();
        match LabelType::parse(&mut walker)? {
            LabelType::Normal(0) => break,
            LabelType::Normal(label_len) => {
                name_len += label_len + 1;
                if name_len >= MAX_NAME_LEN {
                    return Err(ParseError::LongName);
                }
                let label = parse_slice(&mut walker, label_len)?;
                if label.contains(&0) {
                    return Err(ParseError::form_error("zero octet in label"));
                }
                push_label(&mut res, label);
            }
            LabelType::Compressed(ptr) => {
                // A pointer has to point strictly backwards. Together with
                // the length check this guarantees termination.
                if !allow_compression || ptr >= label_pos {
                    tracing::debug!(
                        ptr,
                        pos = label_pos,
                        "illegal compression pointer"
                    );
                    return Err(ParseError::IllegalCompression);
                }
                if resume.is_none() {
                    resume = Some(walker.pos());
                }
                walker.seek(ptr)?;
            }
        }
    }

    match resume {
        Some(pos) => parser.seek(pos)?,
        None => *parser = walker,
    }
    if res.is_empty() {
        res.push('.');
    }
    Ok(res)
}

/// Appends a label in presentation format followed by a dot.
fn push_label(target: &mut String, label: &[u8]) {
    for &ch in label {
        match ch {
            b'.' | b'\\' => {
                target.push('\\');
                target.push(char::from(ch));
            }
            0x21..=0x7E => target.push(char::from(ch)),
            _ => {
                target.push('\\');
                target.push(char::from(b'0' + ch / 100));
                target.push(char::from(b'0' + (ch / 10) % 10));
                target.push(char::from(b'0' + ch % 10));
            }
        }
    }
    target.push('.');
}

//------------ Composing -----------------------------------------------------

/// Converts a name in presentation format into uncompressed wire format.
///
/// The trailing dot is optional. Both the empty string and `"."` are the
/// root name.
pub fn name_to_wire(name: &str) -> Result<Vec<u8>, ComposeError> {
    let mut res = Vec::new();
    if name.is_empty() || name == "." {
        res.push(0);
        return Ok(res);
    }

    let mut label_start = 0;
    res.push(0);
    let mut chars = name.as_bytes().iter().copied().peekable();
    while let Some(ch) = chars.next() {
        let ch = match ch {
            b'.' => {
                let label_len = res.len() - label_start - 1;
                if label_len == 0 {
                    return Err(ComposeError::BadLabel);
                }
                // `label_len` is at most 63 here.
                res[label_start] = label_len as u8;
                if chars.peek().is_none() {
                    break;
                }
                label_start = res.len();
                res.push(0);
                continue;
            }
            b'\\' => parse_escape(&mut chars)?,
            ch => ch,
        };
        if ch == 0 {
            return Err(ComposeError::BadLabel);
        }
        if res.len() - label_start > MAX_LABEL_LEN {
            return Err(ComposeError::LongLabel);
        }
        res.push(ch);
    }

    // Without a trailing dot the last label is still open.
    let label_len = res.len() - label_start - 1;
    if label_len > 0 {
        res[label_start] = label_len as u8;
    }
    res.push(0);

    if res.len() > MAX_NAME_LEN {
        return Err(ComposeError::LongName);
    }
    Ok(res)
}

/// Resolves the escape sequence following a backslash.
fn parse_escape(
    chars: &mut impl Iterator<Item = u8>,
) -> Result<u8, ComposeError> {
    let ch = chars.next().ok_or(ComposeError::BadLabel)?;
    if !ch.is_ascii_digit() {
        return Ok(ch);
    }
    let mut res = u16::from(ch - b'0');
    for _ in 0..2 {
        match chars.next() {
            Some(ch) if ch.is_ascii_digit() => {
                res = res * 10 + u16::from(ch - b'0');
            }
            _ => return Err(ComposeError::BadLabel),
        }
    }
    u8::try_from(res).map_err(|_| ComposeError::BadLabel)
}

/// Appends a name in uncompressed wire format.
pub fn compose_name<Target: OctetsBuilder + ?Sized>(
    name: &str,
    target: &mut Target,
) -> Result<(), ComposeError> {
    let wire = name_to_wire(name)?;
    target.append_slice(&wire)?;
    Ok(())
}

/// Appends a name, compressing it against what the target already holds.
///
/// This is a greedy compressor. Starting with the full name it looks for
/// the remaining labels anywhere in the first 16383 octets of the target
/// and replaces them with a pointer to the leftmost occurrence. If there is
/// none, it writes the first label and tries again with the rest.
pub fn compose_compressed_name<Target: Composer + ?Sized>(
    name: &str,
    target: &mut Target,
) -> Result<(), ComposeError> {
    let wire = name_to_wire(name)?;
    let mut start = 0;
    while wire.len() - start >= 3 {
        let suffix = &wire[start..];
        if let Some(offset) = find_suffix(target.as_ref(), suffix) {
            tracing::trace!(name, offset, "compressing name");
            target.append_slice(&wire[..start])?;
            // `find_suffix` only returns offsets below 0x3FFF.
            target.append_slice(&(0xC000 | offset as u16).to_be_bytes())?;
            return Ok(());
        }
        start += usize::from(wire[start]) + 1;
    }
    target.append_slice(&wire)?;
    Ok(())
}

/// Returns the leftmost position of `needle` in the pointer window.
fn find_suffix(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let window = &haystack[..haystack.len().min(MAX_COMPRESSION_OFFSET)];
    window.windows(needle.len()).position(|item| item == needle)
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use std::string::ToString;
    use std::vec::Vec;

    fn parse(data: &[u8], pos: usize) -> Result<(String, usize), ParseError> {
        let mut parser = Parser::from_ref(data);
        parser.advance(pos).unwrap();
        let name = parse_name(&mut parser)?;
        Ok((name, parser.pos()))
    }

    fn long_name(last: usize) -> Vec<u8> {
        let mut res = Vec::new();
        for (len, ch) in [(63, b'a'), (63, b'b'), (63, b'c'), (last, b'd')] {
            res.push(len as u8);
            res.extend(std::iter::repeat(ch).take(len));
        }
        res.push(0);
        res
    }

    #[test]
    fn parse_plain() {
        assert_eq!(
            parse(b"\x03www\x07example\x03com\x00rest", 0).unwrap(),
            ("www.example.com.".to_string(), 17)
        );
        assert_eq!(parse(b"\x00", 0).unwrap(), (".".to_string(), 1));
    }

    #[test]
    fn parse_compressed() {
        let data = b"\x07example\x03com\x00\x03www\xc0\x00\x04mail\xc0\x0d";
        assert_eq!(
            parse(data, 13).unwrap(),
            ("www.example.com.".to_string(), 19)
        );
        // Pointer to a pointer.
        assert_eq!(
            parse(data, 19).unwrap(),
            ("mail.www.example.com.".to_string(), 26)
        );
    }

    #[test]
    fn parse_escapes() {
        assert_eq!(
            parse(b"\x04a.b\\\x03\x01 z\x00", 0).unwrap().0,
            "a\\.b\\\\.\\001\\032z."
        );
    }

    #[test]
    fn parse_border_length() {
        let data = long_name(61);
        assert_eq!(data.len(), 255);
        let (name, pos) = parse(&data, 0).unwrap();
        assert_eq!(pos, 255);
        assert_eq!(name_to_wire(&name).unwrap(), data);

        let data = long_name(62);
        assert_eq!(parse(&data, 0), Err(ParseError::LongName));
    }

    #[test]
    fn parse_expanding_pointers() {
        // Every pointer points backwards but the name grows each time.
        assert_eq!(parse(b"\x01a\xc0\x00", 0), Err(ParseError::LongName));
        assert_eq!(
            parse(b"xx\x03abc\x02de\xc0\x02", 2),
            Err(ParseError::LongName)
        );
    }

    #[test]
    fn parse_bad_pointers() {
        // Self pointer.
        assert_eq!(
            parse(b"\x01a\x00\xc0\x03", 3),
            Err(ParseError::IllegalCompression)
        );
        // Forward pointer.
        assert_eq!(
            parse(b"\xc0\x02\x01a\x00", 0),
            Err(ParseError::IllegalCompression)
        );
        // Pointers are not allowed here at all.
        let mut parser = Parser::from_ref(&b"\x01a\x00\x01b\xc0\x00"[..]);
        parser.advance(3).unwrap();
        assert_eq!(
            parse_name_uncompressed(&mut parser),
            Err(ParseError::IllegalCompression)
        );
    }

    #[test]
    fn parse_bad_labels() {
        assert!(matches!(parse(b"\x41abc\x00", 0), Err(ParseError::Form(_))));
        assert!(matches!(parse(b"\x80\x00", 0), Err(ParseError::Form(_))));
        assert!(matches!(parse(b"\x02a\x00\x00", 0), Err(ParseError::Form(_))));
        assert_eq!(parse(b"\x03ab", 0), Err(ParseError::ShortInput));
        assert_eq!(parse(b"\x02ab", 0), Err(ParseError::ShortInput));
    }

    #[test]
    fn to_wire() {
        assert_eq!(name_to_wire(".").unwrap(), b"\x00");
        assert_eq!(name_to_wire("").unwrap(), b"\x00");
        assert_eq!(name_to_wire("example.com").unwrap(), b"\x07example\x03com\x00");
        assert_eq!(
            name_to_wire("example.com.").unwrap(),
            b"\x07example\x03com\x00"
        );
        assert_eq!(name_to_wire("a\\.b\\\\.\\001.").unwrap(), b"\x04a.b\\\x01\x01\x00");
    }

    #[test]
    fn to_wire_errors() {
        assert_eq!(name_to_wire("a..b"), Err(ComposeError::BadLabel));
        assert_eq!(name_to_wire(".a"), Err(ComposeError::BadLabel));
        assert_eq!(name_to_wire("a\\000b"), Err(ComposeError::BadLabel));
        assert_eq!(name_to_wire("a\\999"), Err(ComposeError::BadLabel));
        assert_eq!(name_to_wire("a\\"), Err(ComposeError::BadLabel));
        let label = "x".repeat(64);
        assert_eq!(name_to_wire(&label), Err(ComposeError::LongLabel));
        let name = vec!["y".repeat(63); 4].join(".");
        assert_eq!(name_to_wire(&name), Err(ComposeError::LongName));
    }

    #[test]
    fn compose_compressed() {
        let mut target = Vec::from(&b"\x00\x00\x07example\x03com\x00"[..]);
        compose_compressed_name("www.example.com", &mut target).unwrap();
        assert_eq!(&target[15..], b"\x03www\xc0\x02");

        // Only uncompressed occurrences are found.
        compose_compressed_name("www.example.com.", &mut target).unwrap();
        assert_eq!(&target[21..], b"\x03www\xc0\x02");

        compose_compressed_name(".", &mut target).unwrap();
        assert_eq!(&target[27..], b"\x00");

        compose_compressed_name("other.org", &mut target).unwrap();
        assert_eq!(&target[28..], b"\x05other\x03org\x00");
    }

    #[test]
    fn compression_window() {
        let mut target = vec![0u8; MAX_COMPRESSION_OFFSET - 4];
        target.extend_from_slice(b"\x03com\x00");
        compose_compressed_name("com", &mut target).unwrap();
        assert_eq!(&target[MAX_COMPRESSION_OFFSET + 1..], b"\x03com\x00");
    }
}
