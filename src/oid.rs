//! Object identifiers recognized by the key grammar.

use const_oid::ObjectIdentifier;

/// `rsaEncryption` algorithm identifier as defined in [RFC 8017 Appendix C].
///
/// [RFC 8017 Appendix C]: https://www.rfc-editor.org/rfc/rfc8017#appendix-C
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// `id-ecPublicKey` algorithm identifier as defined in [RFC 5480 Section 2.1.1].
///
/// [RFC 5480 Section 2.1.1]: https://www.rfc-editor.org/rfc/rfc5480#section-2.1.1
pub const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Named curve secp256r1 (NIST P-256), a.k.a. `prime256v1`.
pub const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// Named curve secp384r1 (NIST P-384).
pub const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// Named curve secp521r1 (NIST P-521).
pub const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");
