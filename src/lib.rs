#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub use const_oid::ObjectIdentifier;

pub use crate::{
    decoder::KeyDecoder,
    error::{Error, Result},
    key::{EcPublicKey, KeyType, NamedCurve, RsaPublicKey},
};

mod decoder;
mod der;
mod error;
mod key;
pub mod oid;
