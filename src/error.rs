//! Error types.

/// Result type with the `pkey-decoder` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Private key decoding errors.
///
/// Apart from [`Error::Truncated`], every variant is terminal for the
/// decoder context that reported it: the context keeps returning the same
/// error and never exposes partially decoded key material.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Input consumed so far is a valid prefix, but the key encoding is not
    /// complete yet. More data may be pushed.
    Truncated,

    /// Invalid DER: bad tag or length syntax, an indefinite or non-minimal
    /// length, a zero-length `INTEGER`, or an element which overruns the
    /// element enclosing it.
    Malformed,

    /// The encoding is well-formed but names an algorithm or curve OID this
    /// decoder does not recognize.
    UnsupportedAlgorithm,

    /// Well-formed DER that does not match the expected private key
    /// structure: wrong tag for a mandated field, missing or duplicated
    /// fields, or inconsistent curve identifiers.
    StructuralMismatch,

    /// A decoded element exceeds one of the decoder's fixed-capacity
    /// buffers, e.g. an oversized key or pathologically deep nesting.
    Oversize,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Error::Truncated => "private key encoding is incomplete",
            Error::Malformed => "malformed DER encoding",
            Error::UnsupportedAlgorithm => "unrecognized algorithm or named curve",
            Error::StructuralMismatch => "DER structure is not a supported private key",
            Error::Oversize => "decoded element exceeds internal buffer capacity",
        })
    }
}

impl core::error::Error for Error {}
