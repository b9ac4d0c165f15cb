//! Streaming private key decoder.
//!
//! The decoder walks the DER structure with an explicit, bounded stack of
//! "what to parse next" frames instead of recursing, so it can suspend at
//! any byte boundary and resume on the next [`KeyDecoder::push`] call. A
//! parallel stack of end offsets tracks where each constructed element under
//! decode must finish, which is what catches lying length fields.

use crate::der::{
    Header, HeaderReader, TAG_BIT_STRING, TAG_CTX_0, TAG_CTX_1, TAG_INTEGER, TAG_NULL,
    TAG_OCTET_STRING, TAG_OID, TAG_SEQUENCE,
};
use crate::key::{EcPublicKey, KeyType, NamedCurve, RsaPublicKey};
use crate::{oid, Error, Result};
use core::ops::Range;

/// Capacity of the key-element buffer: room for the public elements of an
/// RSA-4096 key with slack to spare.
const KEY_BUF_LEN: usize = 3 * 512;

/// Capacity of the general-purpose pad holding intermediate values (OIDs
/// under comparison).
const PAD_LEN: usize = 256;

/// Maximum depth of the frame and end-offset stacks. The fixed grammar
/// needs at most eight frames; anything deeper is hostile input.
const MAX_DEPTH: usize = 16;

/// Key algorithm selected by the grammar before decoding completes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum KeyAlg {
    Rsa,
    Ec,
}

/// Which version field is being read, deciding how its value dispatches.
#[derive(Clone, Copy, Debug)]
enum VersionAt {
    /// First INTEGER of the outermost SEQUENCE: selects RSA/PKCS#8 vs EC.
    Top,
    /// Version of an `RSAPrivateKey` nested in PKCS#8: must be 0.
    Rsa,
    /// Version of an `ECPrivateKey` nested in PKCS#8: must be 1.
    Ec,
}

/// RSA public element the INTEGER under decode lands in.
#[derive(Clone, Copy, Debug)]
enum RsaSlot {
    Modulus,
    Exponent,
}

/// What the OID under decode identifies.
#[derive(Clone, Copy, Debug)]
enum OidAt {
    /// PKCS#8 `AlgorithmIdentifier.algorithm`.
    Algorithm,
    /// A named curve, from PKCS#8 parameters or the `[0]` field of
    /// `ECPrivateKey`.
    Curve,
}

/// Grammar position expecting a tag/length header next.
#[derive(Clone, Copy, Debug)]
enum Want {
    /// Outermost SEQUENCE of any supported key encoding.
    OuterSeq,
    /// A version INTEGER.
    Version(VersionAt),
    /// After a version of 0: INTEGER starts a raw `RSAPrivateKey` body,
    /// SEQUENCE starts a PKCS#8 `AlgorithmIdentifier`.
    RsaOrPkcs8,
    /// An RSA public element INTEGER.
    RsaInt(RsaSlot),
    /// `AlgorithmIdentifier.algorithm` OID.
    AlgOid,
    /// `AlgorithmIdentifier.parameters` of an EC key: a curve OID or NULL.
    EcParam,
    /// PKCS#8 `privateKey` OCTET STRING wrapping the inner key document.
    Pkcs8Key,
    /// SEQUENCE of the key structure nested inside the OCTET STRING.
    InnerSeq,
    /// `ECPrivateKey.privateKey` OCTET STRING (the scalar; skipped).
    EcScalar,
    /// Tagged optional field of `ECPrivateKey`: `[0]` parameters or `[1]`
    /// public key.
    EcTagged,
    /// Curve OID inside the `[0]` field.
    CurveOid,
    /// BIT STRING holding the public point inside the `[1]` field.
    EcPoint,
    /// Any element, skipped wholesale.
    Any,
}

/// Destination of the value bytes of the element under decode.
#[derive(Clone, Copy, Debug)]
enum Sink {
    /// Discard.
    Skip,
    /// Accumulate a small version INTEGER.
    Version { at: VersionAt, acc: u32 },
    /// Copy an RSA INTEGER into the key buffer, stripping leading zeros.
    KeyInt {
        slot: RsaSlot,
        start: usize,
        started: bool,
    },
    /// Copy OID value bytes into the pad for comparison.
    Oid { at: OidAt },
    /// Copy the public point out of a BIT STRING; the leading unused-bits
    /// octet must be zero and is not stored.
    Point { start: usize, lead: bool },
}

/// One pending parse step.
#[derive(Clone, Copy, Debug)]
enum Frame {
    /// Read a tag/length header and dispatch on it.
    Header {
        want: Want,
        reader: HeaderReader,
        /// No identifier byte consumed yet; mismatches are detected on the
        /// very first byte.
        fresh: bool,
    },
    /// Consume `remaining` value bytes into `sink`.
    Value { sink: Sink, remaining: usize },
    /// Close the innermost constructed element; the input position must
    /// be exactly at its recorded end.
    End,
    /// Skip elements until the innermost end offset is reached.
    SkipToEnd,
    /// Loop over the optional tagged fields of `ECPrivateKey`.
    EcTail,
    /// Loop over the `AlgorithmIdentifier.parameters` of an EC key.
    EcParams,
}

impl Frame {
    const fn header(want: Want) -> Self {
        Frame::Header {
            want,
            reader: HeaderReader::new(),
            fresh: true,
        }
    }
}

/// Outcome of a single engine step.
enum Step {
    /// Consumed this many input bytes.
    Consumed(usize),
    /// Made progress without consuming input.
    Progress,
    /// Cannot proceed until more input arrives.
    NeedInput,
    /// Terminal frame executed; decoding is complete.
    Finished,
}

/// Streaming decoder context for DER-encoded RSA and EC private keys.
///
/// Recognizes PKCS#1 `RSAPrivateKey`, SEC1 `ECPrivateKey` and unencrypted
/// PKCS#8 `PrivateKeyInfo` wrapping either, and extracts the public key
/// elements. Input is pushed in chunks of arbitrary size; all working
/// memory is owned by the context and statically bounded.
#[derive(Clone, Debug)]
pub struct KeyDecoder {
    /// Pending parse steps, innermost last.
    frames: [Frame; MAX_DEPTH],
    depth: usize,

    /// End offsets of the constructed elements currently open.
    limits: [usize; MAX_DEPTH],
    nlimits: usize,

    /// Absolute offset of the next input byte.
    pos: usize,

    /// Decoded key elements (RSA integers, EC point).
    key_buf: [u8; KEY_BUF_LEN],
    key_len: usize,

    /// Scratch destination for intermediate values.
    pad: [u8; PAD_LEN],
    pad_len: usize,

    alg: Option<KeyAlg>,
    curve: Option<NamedCurve>,
    modulus: Option<Range<usize>>,
    exponent: Option<Range<usize>>,
    point: Option<Range<usize>>,

    /// `[0]` / `[1]` fields of `ECPrivateKey` seen so far.
    ec_params_seen: bool,
    ec_pub_seen: bool,

    /// First error recorded; sticky for the context lifetime.
    err: Option<Error>,
    /// Terminal frame reached with a complete key.
    done: bool,
    key_type: KeyType,
}

impl KeyDecoder {
    /// Creates a decoder ready to receive the first byte of a key encoding.
    pub const fn new() -> Self {
        let mut frames = [Frame::End; MAX_DEPTH];
        frames[0] = Frame::header(Want::OuterSeq);

        Self {
            frames,
            depth: 1,
            limits: [0; MAX_DEPTH],
            nlimits: 0,
            pos: 0,
            key_buf: [0; KEY_BUF_LEN],
            key_len: 0,
            pad: [0; PAD_LEN],
            pad_len: 0,
            alg: None,
            curve: None,
            modulus: None,
            exponent: None,
            point: None,
            ec_params_seen: false,
            ec_pub_seen: false,
            err: None,
            done: false,
            key_type: KeyType::Unknown,
        }
    }

    /// Resets the context to its initial state, invalidating any previously
    /// returned key references.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Pushes a chunk of the key encoding into the decoder.
    ///
    /// Chunks may be of any size, including empty; their concatenation
    /// across calls must equal the full encoding. Once decoding has
    /// completed or failed, further pushes are ignored.
    pub fn push(&mut self, data: &[u8]) {
        if self.err.is_some() || self.done {
            return;
        }

        let mut offset = 0;

        loop {
            match self.step(&data[offset..]) {
                Ok(Step::Consumed(n)) => offset += n,
                Ok(Step::Progress) => (),
                Ok(Step::NeedInput) | Ok(Step::Finished) => break,
                Err(err) => {
                    self.err = Some(err);
                    break;
                }
            }
        }
    }

    /// Reports the decoding status.
    ///
    /// Returns `Ok(())` once a key has been fully decoded,
    /// [`Error::Truncated`] while the input so far is an incomplete prefix,
    /// and the recorded error after a decode failure. Idempotent and free
    /// of side effects.
    pub fn status(&self) -> Result<()> {
        if let Some(err) = self.err {
            return Err(err);
        }
        if !self.done {
            return Err(Error::Truncated);
        }
        Ok(())
    }

    /// Type of the decoded key, or [`KeyType::Unknown`] while decoding is
    /// unfinished or after any failure.
    pub fn key_type(&self) -> KeyType {
        if self.err.is_none() && self.done {
            self.key_type
        } else {
            KeyType::Unknown
        }
    }

    /// Decoded RSA public elements, if decoding completed with an RSA key.
    pub fn rsa_key(&self) -> Option<RsaPublicKey<'_>> {
        if self.key_type() != KeyType::Rsa {
            return None;
        }
        let modulus = self.modulus.as_ref()?;
        let exponent = self.exponent.as_ref()?;
        Some(RsaPublicKey {
            modulus: &self.key_buf[modulus.start..modulus.end],
            exponent: &self.key_buf[exponent.start..exponent.end],
        })
    }

    /// Decoded EC public elements, if decoding completed with an EC key.
    pub fn ec_key(&self) -> Option<EcPublicKey<'_>> {
        if self.key_type() != KeyType::Ec {
            return None;
        }
        let point = self.point.as_ref()?;
        Some(EcPublicKey {
            curve: self.curve?,
            point: &self.key_buf[point.start..point.end],
        })
    }

    //
    // Engine
    //

    fn step(&mut self, input: &[u8]) -> Result<Step> {
        let Some(top) = self.depth.checked_sub(1) else {
            self.finish()?;
            return Ok(Step::Finished);
        };

        match self.frames[top] {
            Frame::End => {
                if self.nlimits == 0 || self.pos != self.limits[self.nlimits - 1] {
                    return Err(Error::Malformed);
                }
                self.nlimits -= 1;
                self.depth -= 1;
                Ok(Step::Progress)
            }
            Frame::SkipToEnd => {
                if self.at_limit() {
                    self.depth -= 1;
                } else {
                    self.push_frame(Frame::header(Want::Any))?;
                }
                Ok(Step::Progress)
            }
            Frame::EcTail => {
                if self.at_limit() {
                    self.depth -= 1;
                } else {
                    self.push_frame(Frame::header(Want::EcTagged))?;
                }
                Ok(Step::Progress)
            }
            Frame::EcParams => {
                if self.at_limit() {
                    self.depth -= 1;
                } else {
                    self.push_frame(Frame::header(Want::EcParam))?;
                }
                Ok(Step::Progress)
            }
            Frame::Header { .. } => self.step_header(top, input),
            Frame::Value { .. } => self.step_value(top, input),
        }
    }

    fn step_header(&mut self, top: usize, input: &[u8]) -> Result<Step> {
        let Frame::Header {
            want,
            mut reader,
            mut fresh,
        } = self.frames[top]
        else {
            return Err(Error::Malformed);
        };

        // a header frame parked at the end of its enclosing element can
        // never complete, so fail now rather than wait for further input
        if self.nlimits > 0 && self.pos == self.limits[self.nlimits - 1] {
            return Err(header_at_limit(fresh));
        }

        if input.is_empty() {
            return Ok(Step::NeedInput);
        }

        let mut consumed = 0;

        for &byte in input {
            // a header may not extend past the enclosing element
            if self.nlimits > 0 && self.pos == self.limits[self.nlimits - 1] {
                return Err(header_at_limit(fresh));
            }

            if fresh {
                check_first_byte(want, byte)?;
                fresh = false;
            }

            let complete = reader.step(byte)?;
            self.pos += 1;
            consumed += 1;

            if let Some(header) = complete {
                self.depth -= 1;
                self.dispatch(want, header)?;
                return Ok(Step::Consumed(consumed));
            }
        }

        // input exhausted mid-header; keep the partial state for resumption
        self.frames[top] = Frame::Header {
            want,
            reader,
            fresh,
        };
        Ok(Step::Consumed(consumed))
    }

    fn step_value(&mut self, top: usize, input: &[u8]) -> Result<Step> {
        let Frame::Value {
            mut sink,
            remaining,
        } = self.frames[top]
        else {
            return Err(Error::Malformed);
        };

        if remaining == 0 {
            self.depth -= 1;
            self.complete(sink)?;
            return Ok(Step::Progress);
        }
        if input.is_empty() {
            return Ok(Step::NeedInput);
        }

        let n = remaining.min(input.len());
        self.absorb(&mut sink, &input[..n], remaining)?;
        self.pos += n;

        if n == remaining {
            self.depth -= 1;
            self.complete(sink)?;
        } else {
            self.frames[top] = Frame::Value {
                sink,
                remaining: remaining - n,
            };
        }
        Ok(Step::Consumed(n))
    }

    /// Feeds value bytes into a sink. `remaining` counts `chunk` itself.
    fn absorb(&mut self, sink: &mut Sink, chunk: &[u8], remaining: usize) -> Result<()> {
        match sink {
            Sink::Skip => (),
            Sink::Version { acc, .. } => {
                for &byte in chunk {
                    *acc = (*acc << 8) | u32::from(byte);
                }
            }
            Sink::KeyInt { started, .. } => {
                let mut left = remaining;
                for &byte in chunk {
                    left -= 1;
                    // leading zeros are dropped, but a zero value keeps its
                    // final byte
                    if !*started && byte == 0 && left > 0 {
                        continue;
                    }
                    *started = true;
                    self.put_key_byte(byte)?;
                }
            }
            Sink::Oid { .. } => {
                // length was checked against the pad size at dispatch
                self.pad[self.pad_len..self.pad_len + chunk.len()].copy_from_slice(chunk);
                self.pad_len += chunk.len();
            }
            Sink::Point { lead, .. } => {
                for &byte in chunk {
                    if *lead {
                        if byte != 0 {
                            return Err(Error::StructuralMismatch);
                        }
                        *lead = false;
                        continue;
                    }
                    self.put_key_byte(byte)?;
                }
            }
        }
        Ok(())
    }

    /// Runs the continuation of a fully consumed value.
    fn complete(&mut self, sink: Sink) -> Result<()> {
        match sink {
            Sink::Skip => Ok(()),
            Sink::Version { at, acc } => self.version_done(at, acc),
            Sink::KeyInt { slot, start, .. } => {
                let range = start..self.key_len;
                match slot {
                    RsaSlot::Modulus => {
                        self.modulus = Some(range);
                        self.push_frame(Frame::header(Want::RsaInt(RsaSlot::Exponent)))
                    }
                    RsaSlot::Exponent => {
                        self.exponent = Some(range);
                        Ok(())
                    }
                }
            }
            Sink::Oid { at } => self.oid_done(at),
            Sink::Point { start, .. } => {
                self.point = Some(start..self.key_len);
                Ok(())
            }
        }
    }

    /// Handles a completed tag/length header for the grammar position that
    /// expected it.
    fn dispatch(&mut self, want: Want, header: Header) -> Result<()> {
        // the element's contents must lie within the enclosing element
        let end = self.pos.checked_add(header.len).ok_or(Error::Malformed)?;
        if self.nlimits > 0 && end > self.limits[self.nlimits - 1] {
            return Err(Error::Malformed);
        }

        match want {
            Want::OuterSeq => {
                self.enter(header.len)?;
                self.push_frame(Frame::End)?;
                self.push_frame(Frame::header(Want::Version(VersionAt::Top)))
            }
            Want::Version(at) => match header.len {
                0 => Err(Error::Malformed),
                1..=4 => self.push_frame(Frame::Value {
                    sink: Sink::Version { at, acc: 0 },
                    remaining: header.len,
                }),
                _ => Err(Error::StructuralMismatch),
            },
            Want::RsaOrPkcs8 => {
                if header.constructed {
                    // PKCS#8: AlgorithmIdentifier, then the wrapped key,
                    // then ignored trailing fields (attributes)
                    self.push_frame(Frame::SkipToEnd)?;
                    self.push_frame(Frame::header(Want::Pkcs8Key))?;
                    self.enter(header.len)?;
                    self.push_frame(Frame::End)?;
                    self.push_frame(Frame::header(Want::AlgOid))
                } else {
                    // raw RSAPrivateKey: this INTEGER is the modulus
                    self.alg = Some(KeyAlg::Rsa);
                    self.push_frame(Frame::SkipToEnd)?;
                    self.begin_rsa_int(RsaSlot::Modulus, header.len)
                }
            }
            Want::RsaInt(slot) => self.begin_rsa_int(slot, header.len),
            Want::AlgOid => self.begin_oid(OidAt::Algorithm, header.len),
            Want::EcParam => {
                if header.number == u32::from(TAG_OID) {
                    self.begin_oid(OidAt::Curve, header.len)
                } else if header.len == 0 {
                    // NULL parameters; the curve must then come from the
                    // inner ECPrivateKey
                    Ok(())
                } else {
                    Err(Error::Malformed)
                }
            }
            Want::Pkcs8Key => {
                // the OCTET STRING contents are a complete nested DER
                // document
                self.enter(header.len)?;
                self.push_frame(Frame::End)?;
                self.push_frame(Frame::header(Want::InnerSeq))
            }
            Want::InnerSeq => {
                let at = match self.alg {
                    Some(KeyAlg::Rsa) => VersionAt::Rsa,
                    Some(KeyAlg::Ec) => VersionAt::Ec,
                    None => return Err(Error::StructuralMismatch),
                };
                self.enter(header.len)?;
                self.push_frame(Frame::End)?;
                self.push_frame(Frame::header(Want::Version(at)))
            }
            Want::EcScalar => self.push_frame(Frame::Value {
                sink: Sink::Skip,
                remaining: header.len,
            }),
            Want::EcTagged => match header.number {
                0 => {
                    // [0] parameters: must precede [1] and appear once
                    if self.ec_params_seen || self.ec_pub_seen {
                        return Err(Error::StructuralMismatch);
                    }
                    self.ec_params_seen = true;
                    self.enter(header.len)?;
                    self.push_frame(Frame::End)?;
                    self.push_frame(Frame::header(Want::CurveOid))
                }
                1 => {
                    if self.ec_pub_seen {
                        return Err(Error::StructuralMismatch);
                    }
                    self.ec_pub_seen = true;
                    self.enter(header.len)?;
                    self.push_frame(Frame::End)?;
                    self.push_frame(Frame::header(Want::EcPoint))
                }
                _ => Err(Error::StructuralMismatch),
            },
            Want::CurveOid => self.begin_oid(OidAt::Curve, header.len),
            Want::EcPoint => {
                // unused-bits octet plus at least one point byte
                if header.len < 2 {
                    return Err(Error::StructuralMismatch);
                }
                self.push_frame(Frame::Value {
                    sink: Sink::Point {
                        start: self.key_len,
                        lead: true,
                    },
                    remaining: header.len,
                })
            }
            Want::Any => self.push_frame(Frame::Value {
                sink: Sink::Skip,
                remaining: header.len,
            }),
        }
    }

    fn begin_rsa_int(&mut self, slot: RsaSlot, len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::Malformed);
        }
        self.push_frame(Frame::Value {
            sink: Sink::KeyInt {
                slot,
                start: self.key_len,
                started: false,
            },
            remaining: len,
        })
    }

    fn begin_oid(&mut self, at: OidAt, len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::Malformed);
        }
        if len > PAD_LEN {
            return Err(Error::Oversize);
        }
        self.pad_len = 0;
        self.push_frame(Frame::Value {
            sink: Sink::Oid { at },
            remaining: len,
        })
    }

    fn version_done(&mut self, at: VersionAt, version: u32) -> Result<()> {
        match (at, version) {
            (VersionAt::Top, 0) => self.push_frame(Frame::header(Want::RsaOrPkcs8)),
            (VersionAt::Top, 1) => {
                self.alg = Some(KeyAlg::Ec);
                self.begin_ec_body()
            }
            (VersionAt::Rsa, 0) => {
                self.push_frame(Frame::SkipToEnd)?;
                self.push_frame(Frame::header(Want::RsaInt(RsaSlot::Modulus)))
            }
            (VersionAt::Ec, 1) => self.begin_ec_body(),
            _ => Err(Error::StructuralMismatch),
        }
    }

    fn begin_ec_body(&mut self) -> Result<()> {
        self.push_frame(Frame::EcTail)?;
        self.push_frame(Frame::header(Want::EcScalar))
    }

    fn oid_done(&mut self, at: OidAt) -> Result<()> {
        let value = &self.pad[..self.pad_len];
        match at {
            OidAt::Algorithm => {
                if value == oid::RSA_ENCRYPTION.as_bytes() {
                    self.alg = Some(KeyAlg::Rsa);
                    // RSA parameters (NULL, if present) carry nothing useful
                    self.push_frame(Frame::SkipToEnd)
                } else if value == oid::EC_PUBLIC_KEY.as_bytes() {
                    self.alg = Some(KeyAlg::Ec);
                    self.push_frame(Frame::EcParams)
                } else {
                    Err(Error::UnsupportedAlgorithm)
                }
            }
            OidAt::Curve => {
                let curve =
                    NamedCurve::from_oid_bytes(value).ok_or(Error::UnsupportedAlgorithm)?;
                match self.curve {
                    None => self.curve = Some(curve),
                    Some(existing) if existing == curve => (),
                    Some(_) => return Err(Error::StructuralMismatch),
                }
                Ok(())
            }
        }
    }

    /// Terminal step: all frames retired, the whole structure consumed.
    fn finish(&mut self) -> Result<()> {
        self.key_type = match self.alg {
            Some(KeyAlg::Rsa) if self.modulus.is_some() && self.exponent.is_some() => KeyType::Rsa,
            Some(KeyAlg::Ec) if self.curve.is_some() && self.point.is_some() => KeyType::Ec,
            _ => return Err(Error::StructuralMismatch),
        };
        self.done = true;
        Ok(())
    }

    fn at_limit(&self) -> bool {
        self.nlimits == 0 || self.pos == self.limits[self.nlimits - 1]
    }

    /// Opens a constructed element ending `len` bytes from the current
    /// position.
    fn enter(&mut self, len: usize) -> Result<()> {
        let end = self.pos.checked_add(len).ok_or(Error::Malformed)?;
        if self.nlimits == MAX_DEPTH {
            return Err(Error::Oversize);
        }
        self.limits[self.nlimits] = end;
        self.nlimits += 1;
        Ok(())
    }

    fn push_frame(&mut self, frame: Frame) -> Result<()> {
        if self.depth == MAX_DEPTH {
            return Err(Error::Oversize);
        }
        self.frames[self.depth] = frame;
        self.depth += 1;
        Ok(())
    }

    fn put_key_byte(&mut self, byte: u8) -> Result<()> {
        if self.key_len == KEY_BUF_LEN {
            return Err(Error::Oversize);
        }
        self.key_buf[self.key_len] = byte;
        self.key_len += 1;
        Ok(())
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Error for a header that begins at, or runs into, the end of its
/// enclosing element: a missing mandated field when no header byte has been
/// read yet, invalid length bookkeeping when one has.
fn header_at_limit(fresh: bool) -> Error {
    if fresh {
        Error::StructuralMismatch
    } else {
        Error::Malformed
    }
}

/// Checks the identifier octet against the tags acceptable at a grammar
/// position, so mismatches surface on the first byte of an element.
fn check_first_byte(want: Want, byte: u8) -> Result<()> {
    let ok = match want {
        // not even the outer shell of a key structure
        Want::OuterSeq => {
            return (byte == TAG_SEQUENCE)
                .then_some(())
                .ok_or(Error::Malformed);
        }
        Want::Version(_) | Want::RsaInt(_) => byte == TAG_INTEGER,
        Want::RsaOrPkcs8 => byte == TAG_INTEGER || byte == TAG_SEQUENCE,
        Want::AlgOid | Want::CurveOid => byte == TAG_OID,
        Want::EcParam => byte == TAG_OID || byte == TAG_NULL,
        Want::InnerSeq => byte == TAG_SEQUENCE,
        Want::Pkcs8Key | Want::EcScalar => byte == TAG_OCTET_STRING,
        Want::EcTagged => byte == TAG_CTX_0 || byte == TAG_CTX_1,
        Want::EcPoint => byte == TAG_BIT_STRING,
        Want::Any => true,
    };
    ok.then_some(()).ok_or(Error::StructuralMismatch)
}
