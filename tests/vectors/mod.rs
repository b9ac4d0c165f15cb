//! Hand-built DER test vectors shared by the integration tests.
//!
//! All multi-byte values are annotated with the structure they encode;
//! scalars and point coordinates are synthetic byte patterns, since the
//! decoder performs no curve or number-theoretic validation.

#![allow(dead_code)]

use hex_literal::hex;

/// Minimal PKCS#1 `RSAPrivateKey`: version 0, n = 0, e = 65537, all the
/// private CRT fields zero.
pub const RSA_MINIMAL: [u8; 31] = hex!(
    "301d"
    "020100"                      // version
    "020100"                      // n = 0
    "0203010001"                  // e = 65537
    "020100020100020100"          // d, p, q
    "020100020100020100"          // d mod (p-1), d mod (q-1), q^-1 mod p
);

/// Small `RSAPrivateKey` whose modulus carries the conventional leading
/// zero byte (high bit of the value set).
pub const RSA_SMALL: [u8; 63] = hex!(
    "303d"
    "020100"                      // version
    "020900e1c9a192376b4215"      // n (leading 00 stripped by the decoder)
    "0203010001"                  // e
    "02080b5e8d1122334455"        // d
    "020500f3218765"              // p
    "020500ed44aa9b"              // q
    "020411223341"                // d mod (p-1)
    "020405060709"                // d mod (q-1)
    "020400010203"                // q^-1 mod p
);

/// Modulus bytes expected from [`RSA_SMALL`].
pub const RSA_SMALL_N: [u8; 8] = hex!("e1c9a192376b4215");

/// 32-byte private scalar used by the EC vectors.
pub const EC_SCALAR: [u8; 32] =
    hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");

/// Uncompressed P-256 point (synthetic coordinates).
pub const EC_POINT: [u8; 65] = hex!(
    "04"
    "4142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f60"
    "6162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f80"
);

/// SEC1 `ECPrivateKey` on secp256r1 with `[0]` curve parameters and `[1]`
/// public key.
pub const EC_RAW_P256: [u8; 121] = hex!(
    "3077"
    "020101"                                                           // version
    "04200102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "a00a06082a8648ce3d030107"                                         // [0] secp256r1
    "a14403420004"                                                     // [1] BIT STRING
    "4142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f60"
    "6162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f80"
);

/// PKCS#8 `PrivateKeyInfo` wrapping [`RSA_MINIMAL`].
pub const PKCS8_RSA: [u8; 53] = hex!(
    "3033"
    "020100"                                  // version
    "300d06092a864886f70d0101010500"          // rsaEncryption, NULL params
    "041f"                                    // privateKey
    "301d0201000201000203010001020100020100020100020100020100020100"
);

/// [`PKCS8_RSA`] with a trailing `[0]` attributes field, which the decoder
/// skips.
pub const PKCS8_RSA_ATTRS: [u8; 57] = hex!(
    "3037"
    "020100"
    "300d06092a864886f70d0101010500"
    "041f"
    "301d0201000201000203010001020100020100020100020100020100020100"
    "a0020500"                                // attributes (ignored)
);

/// PKCS#8-wrapped EC key: the curve comes from the `AlgorithmIdentifier`
/// parameters, the inner `ECPrivateKey` carries no `[0]` field.
pub const PKCS8_EC: [u8; 138] = hex!(
    "308187"
    "020100"                                  // version
    "3013"                                    // AlgorithmIdentifier
    "06072a8648ce3d0201"                      //   id-ecPublicKey
    "06082a8648ce3d030107"                    //   secp256r1
    "046d"                                    // privateKey
    "306b"
    "020101"
    "04200102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "a14403420004"
    "4142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f60"
    "6162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f80"
);

/// PKCS#8-wrapped EC key carrying the (matching) curve id both in the
/// algorithm parameters and in the inner `[0]` field.
pub const PKCS8_EC_BOTH: [u8; 150] = hex!(
    "308193"
    "020100"
    "3013"
    "06072a8648ce3d0201"
    "06082a8648ce3d030107"
    "0479"
    "3077"
    "020101"
    "04200102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "a00a06082a8648ce3d030107"
    "a14403420004"
    "4142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f60"
    "6162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f80"
);

/// PKCS#8-wrapped EC key whose algorithm parameters claim secp384r1 while
/// the inner `[0]` field claims secp256r1.
pub const PKCS8_EC_CONFLICT: [u8; 147] = hex!(
    "308190"
    "020100"
    "3010"
    "06072a8648ce3d0201"
    "06052b81040022"                          // secp384r1
    "0479"
    "3077"
    "020101"
    "04200102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "a00a06082a8648ce3d030107"                // [0] secp256r1
    "a14403420004"
    "4142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f60"
    "6162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f80"
);

/// `RSAPrivateKey` cut down to version and modulus: the outer SEQUENCE
/// length is fully accounted for, but the public exponent is missing.
pub const RSA_MISSING_EXPONENT: [u8; 8] = hex!(
    "3006"
    "020100"                                  // version
    "020100"                                  // n, and nothing after it
);

/// PKCS#8 container whose `privateKey` OCTET STRING holds a bare INTEGER
/// instead of a key SEQUENCE.
pub const PKCS8_INNER_NOT_SEQUENCE: [u8; 25] = hex!(
    "3017"
    "020100"                                  // version
    "300d06092a864886f70d0101010500"          // rsaEncryption, NULL params
    "0403020100"                              // privateKey = INTEGER 0
);

/// `EncryptedPrivateKeyInfo` (PBES2): starts with an AlgorithmIdentifier
/// where `PrivateKeyInfo` has its version INTEGER.
pub const ENCRYPTED_PKCS8: [u8; 24] =
    hex!("3016300d06092a864886f70d01050d050004050102030405");

/// PKCS#8 container naming the DSA algorithm, which the grammar does not
/// recognize.
pub const PKCS8_DSA: [u8; 20] = hex!("3012020100300906072a8648ce38040104023000");

/// SEC1 `ECPrivateKey` on secp256k1, a curve outside the supported set.
pub const EC_UNKNOWN_CURVE: [u8; 118] = hex!(
    "3074"
    "020101"
    "04200102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "a00706052b8104000a"                      // [0] secp256k1
    "a14403420004"
    "4142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f60"
    "6162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f80"
);

/// SEC1 `ECPrivateKey` with curve parameters but no `[1]` public key; the
/// decoder cannot derive the point and must reject it.
pub const EC_NO_PUBLIC_POINT: [u8; 51] = hex!(
    "3031"
    "020101"
    "04200102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
    "a00a06082a8648ce3d030107"
);

/// Every well-formed vector above, for sweep-style properties.
pub const VALID: &[&[u8]] = &[
    &RSA_MINIMAL,
    &RSA_SMALL,
    &EC_RAW_P256,
    &PKCS8_RSA,
    &PKCS8_RSA_ATTRS,
    &PKCS8_EC,
    &PKCS8_EC_BOTH,
];
