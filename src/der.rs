//! Minimal DER primitives: tag classification and an incremental
//! tag/length header reader which can suspend and resume at any byte
//! boundary.

use crate::{Error, Result};

/// Universal tag number for `INTEGER`.
pub(crate) const TAG_INTEGER: u8 = 0x02;
/// Universal tag number for `BIT STRING`.
pub(crate) const TAG_BIT_STRING: u8 = 0x03;
/// Universal tag number for `OCTET STRING`.
pub(crate) const TAG_OCTET_STRING: u8 = 0x04;
/// Universal tag number for `NULL`.
pub(crate) const TAG_NULL: u8 = 0x05;
/// Universal tag number for `OBJECT IDENTIFIER`.
pub(crate) const TAG_OID: u8 = 0x06;
/// Identifier octet for a constructed universal `SEQUENCE`.
pub(crate) const TAG_SEQUENCE: u8 = 0x30;
/// Identifier octet for the constructed context-specific tag `[0]`.
pub(crate) const TAG_CTX_0: u8 = 0xa0;
/// Identifier octet for the constructed context-specific tag `[1]`.
pub(crate) const TAG_CTX_1: u8 = 0xa1;

/// Decoded tag/length header of a DER element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Header {
    /// Constructed (vs. primitive) flag from the identifier octet.
    pub constructed: bool,

    /// Tag number, including high tag numbers spanning several octets.
    pub number: u32,

    /// Content length in bytes.
    pub len: usize,
}

/// Incremental reader for a DER tag/length header.
///
/// Fed one byte at a time; keeps its own micro-state so a header split
/// across input chunks is picked up exactly where it left off.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeaderReader {
    state: State,
    constructed: bool,
    number: u32,
}

#[derive(Clone, Copy, Debug)]
enum State {
    /// Expecting the identifier octet.
    Tag,
    /// Expecting further octets of a high tag number.
    TagLong { first: bool },
    /// Expecting the initial length octet.
    Len,
    /// Expecting `remaining` further octets of a long-form length.
    LenLong { remaining: u8, acc: usize, first: bool },
}

impl HeaderReader {
    pub(crate) const fn new() -> Self {
        Self {
            state: State::Tag,
            constructed: false,
            number: 0,
        }
    }

    /// Feeds a single byte, returning the completed header once the final
    /// length octet has been consumed.
    pub(crate) fn step(&mut self, byte: u8) -> Result<Option<Header>> {
        match self.state {
            State::Tag => {
                self.constructed = byte & 0x20 != 0;
                if byte & 0x1f == 0x1f {
                    self.number = 0;
                    self.state = State::TagLong { first: true };
                } else {
                    self.number = u32::from(byte & 0x1f);
                    self.state = State::Len;
                }
                Ok(None)
            }
            State::TagLong { first } => {
                // DER requires minimally encoded tag numbers
                if first && byte == 0x80 {
                    return Err(Error::Malformed);
                }
                if self.number >> 25 != 0 {
                    return Err(Error::Malformed);
                }
                self.number = (self.number << 7) | u32::from(byte & 0x7f);
                if byte & 0x80 != 0 {
                    self.state = State::TagLong { first: false };
                } else if self.number < 0x1f {
                    return Err(Error::Malformed);
                } else {
                    self.state = State::Len;
                }
                Ok(None)
            }
            State::Len => {
                if byte < 0x80 {
                    return Ok(Some(self.finish(usize::from(byte))));
                }
                let count = byte & 0x7f;
                if count == 0 {
                    // indefinite lengths are BER, not DER
                    return Err(Error::Malformed);
                }
                if count > 4 {
                    return Err(Error::Oversize);
                }
                self.state = State::LenLong {
                    remaining: count,
                    acc: 0,
                    first: true,
                };
                Ok(None)
            }
            State::LenLong {
                remaining,
                acc,
                first,
            } => {
                if first && byte == 0 {
                    return Err(Error::Malformed);
                }
                let acc = (acc << 8) | usize::from(byte);
                if remaining > 1 {
                    self.state = State::LenLong {
                        remaining: remaining - 1,
                        acc,
                        first: false,
                    };
                    Ok(None)
                } else if acc < 0x80 {
                    // would fit the short form
                    Err(Error::Malformed)
                } else {
                    Ok(Some(self.finish(acc)))
                }
            }
        }
    }

    fn finish(&mut self, len: usize) -> Header {
        let header = Header {
            constructed: self.constructed,
            number: self.number,
            len,
        };
        *self = Self::new();
        header
    }
}

#[cfg(test)]
mod tests {
    use super::{Header, HeaderReader};
    use crate::Error;

    fn read_all(bytes: &[u8]) -> crate::Result<Option<Header>> {
        let mut reader = HeaderReader::new();
        let mut out = None;
        for &byte in bytes {
            assert!(out.is_none(), "trailing bytes after completed header");
            out = reader.step(byte)?;
        }
        Ok(out)
    }

    #[test]
    fn short_form() {
        let header = read_all(&[0x30, 0x1d]).unwrap().unwrap();
        assert!(header.constructed);
        assert_eq!(header.number, 16);
        assert_eq!(header.len, 0x1d);
    }

    #[test]
    fn long_form() {
        let header = read_all(&[0x02, 0x82, 0x01, 0x00]).unwrap().unwrap();
        assert!(!header.constructed);
        assert_eq!(header.number, 2);
        assert_eq!(header.len, 256);
    }

    #[test]
    fn incomplete_header_yields_nothing() {
        assert_eq!(read_all(&[0x30]).unwrap(), None);
        assert_eq!(read_all(&[0x30, 0x82, 0x01]).unwrap(), None);
    }

    #[test]
    fn indefinite_length_rejected() {
        assert_eq!(read_all(&[0x30, 0x80]), Err(Error::Malformed));
    }

    #[test]
    fn non_minimal_length_rejected() {
        // 0x7f encoded in long form
        assert_eq!(read_all(&[0x02, 0x81, 0x7f]), Err(Error::Malformed));
        // leading zero length octet
        assert_eq!(read_all(&[0x02, 0x82, 0x00, 0xff]), Err(Error::Malformed));
    }

    #[test]
    fn length_of_length_capped() {
        assert_eq!(read_all(&[0x30, 0x85]), Err(Error::Oversize));
    }

    #[test]
    fn high_tag_number() {
        // context-specific primitive tag 0x21
        let header = read_all(&[0x9f, 0x21, 0x00]).unwrap().unwrap();
        assert_eq!(header.number, 0x21);
        assert_eq!(header.len, 0);
    }

    #[test]
    fn non_minimal_high_tag_rejected() {
        assert_eq!(read_all(&[0x9f, 0x80, 0x21, 0x00]), Err(Error::Malformed));
        // tag number that fits the identifier octet
        assert_eq!(read_all(&[0x9f, 0x05, 0x00]), Err(Error::Malformed));
    }

    #[test]
    fn resumes_across_arbitrary_boundaries() {
        let bytes = [0x02u8, 0x82, 0x02, 0x00];
        let mut reader = HeaderReader::new();
        assert_eq!(reader.step(bytes[0]).unwrap(), None);
        assert_eq!(reader.step(bytes[1]).unwrap(), None);
        assert_eq!(reader.step(bytes[2]).unwrap(), None);
        let header = reader.step(bytes[3]).unwrap().unwrap();
        assert_eq!(header.len, 512);
    }
}
