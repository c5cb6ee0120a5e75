//! Value types the codecs consume but do not define the wire layout of:
//! account identifiers, currency codes, and the field registry.
//!
//! Also home to [`CodecError`], shared by every codec in the workspace.

mod account_id;
mod currency;
mod error;
mod field;

pub use account_id::*;
pub use currency::*;
pub use error::*;
pub use field::*;
