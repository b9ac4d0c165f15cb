//! Decoded key types returned by the decoder.

use crate::oid;
use const_oid::ObjectIdentifier;

/// Type of the decoded key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum KeyType {
    /// Decoding is unfinished or has failed.
    #[default]
    Unknown,

    /// RSA key.
    Rsa,

    /// Elliptic curve key.
    Ec,
}

/// Named elliptic curves recognized by the key grammar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NamedCurve {
    /// secp256r1, a.k.a. NIST P-256 or `prime256v1`.
    Secp256r1,

    /// secp384r1, a.k.a. NIST P-384.
    Secp384r1,

    /// secp521r1, a.k.a. NIST P-521.
    Secp521r1,
}

impl NamedCurve {
    /// Object identifier naming this curve.
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            NamedCurve::Secp256r1 => oid::SECP256R1,
            NamedCurve::Secp384r1 => oid::SECP384R1,
            NamedCurve::Secp521r1 => oid::SECP521R1,
        }
    }

    /// Curve identifier from the IANA TLS "Supported Groups" registry.
    pub const fn tls_id(self) -> u16 {
        match self {
            NamedCurve::Secp256r1 => 23,
            NamedCurve::Secp384r1 => 24,
            NamedCurve::Secp521r1 => 25,
        }
    }

    /// Looks up a curve by the raw value bytes of its DER-encoded OID.
    pub(crate) fn from_oid_bytes(bytes: &[u8]) -> Option<Self> {
        [
            NamedCurve::Secp256r1,
            NamedCurve::Secp384r1,
            NamedCurve::Secp521r1,
        ]
        .into_iter()
        .find(|curve| curve.oid().as_bytes() == bytes)
    }
}

impl core::fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            NamedCurve::Secp256r1 => "secp256r1",
            NamedCurve::Secp384r1 => "secp384r1",
            NamedCurve::Secp521r1 => "secp521r1",
        })
    }
}

/// Public elements of a decoded RSA key.
///
/// Borrows buffers owned by the decoder context; dropped or reset contexts
/// invalidate it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RsaPublicKey<'a> {
    pub(crate) modulus: &'a [u8],
    pub(crate) exponent: &'a [u8],
}

impl<'a> RsaPublicKey<'a> {
    /// Modulus, big-endian, with leading zero bytes stripped (a zero value
    /// is a single `0x00` byte).
    pub fn modulus(&self) -> &'a [u8] {
        self.modulus
    }

    /// Public exponent, big-endian, with leading zero bytes stripped.
    pub fn exponent(&self) -> &'a [u8] {
        self.exponent
    }
}

/// Public elements of a decoded EC key.
///
/// Borrows buffers owned by the decoder context; dropped or reset contexts
/// invalidate it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EcPublicKey<'a> {
    pub(crate) curve: NamedCurve,
    pub(crate) point: &'a [u8],
}

impl<'a> EcPublicKey<'a> {
    /// Curve on which the key is defined.
    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    /// Public point exactly as encoded in the key structure, typically the
    /// SEC1 uncompressed form `04 || x || y`.
    pub fn point(&self) -> &'a [u8] {
        self.point
    }
}
