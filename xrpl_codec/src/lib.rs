//! # Serialization format
//!
//! Canonical binary, JSON, and display forms of ledger values. Every value has
//! exactly one byte encoding, and re-encoding a decoded value reproduces the
//! input bytes.
//!
//! A serialized object is a sequence of framed fields. The header identifies
//! the field; a length prefix follows only for variable-length types, whose
//! values are not self-delimiting. The prefix is what the blob codec receives
//! as its decode hint.
//!
//! ```text
//! struct Field::PublicKey, Field::Domain, ... {
//!     header:     [u8; 1..=3],    // (type = 7, nth)
//!     len:        [u8; 1..=3],    // 0..=918744
//!     body:       [u8; len],      // Blob
//! }
//!
//! struct Field::Paths {
//!     header:     [u8; 2],        // (type = 18, nth = 1)
//!     body:       PathSet,        // terminated in-band by 0x00
//! }
//! ```
//!
//! See [`PathSet`] for the path set layout.

pub mod binary;
pub mod fields;
mod translator;
pub mod types;
mod value;

pub use binary::{BinaryReader, BytesTree};
pub use fields::{read_field, write_field, FieldIter};
pub use translator::*;
pub use types::*;
pub use value::*;

pub use xrpl_types::{AccountId, CodecError, Currency, Field, FieldType, Result};
