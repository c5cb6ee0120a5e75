use crate::error::{CodecError, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;

/// Wire type codes. Only the types with a translator in this workspace are listed.
///
/// Discriminants are fixed by the ledger protocol and must never be reordered.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum FieldType {
    /// Variable length, opaque.
    Blob = 7,
    PathSet = 18,
}
impl FieldType {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the field framing layer prefixes values of this type with a length.
    pub fn is_length_prefixed(self) -> bool {
        matches!(self, FieldType::Blob)
    }
}
impl TryFrom<u8> for FieldType {
    type Error = CodecError;
    fn try_from(int: u8) -> Result<Self> {
        FieldType::from_u8(int)
            .ok_or_else(|| CodecError::MalformedEncoding(format!("Unknown field type {int}")))
    }
}

/// A semantic field name bound to its wire type and ordinal.
///
/// The codec only ever uses a field as a key: its type picks the translator,
/// its code identifies it on the wire.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub field_type: FieldType,
    pub nth: u8,
}

impl Field {
    pub const PUBLIC_KEY: Field = Field::new("PublicKey", FieldType::Blob, 1);
    pub const MESSAGE_KEY: Field = Field::new("MessageKey", FieldType::Blob, 2);
    pub const SIGNING_PUB_KEY: Field = Field::new("SigningPubKey", FieldType::Blob, 3);
    pub const TXN_SIGNATURE: Field = Field::new("TxnSignature", FieldType::Blob, 4);
    pub const GENERATOR: Field = Field::new("Generator", FieldType::Blob, 5);
    pub const SIGNATURE: Field = Field::new("Signature", FieldType::Blob, 6);
    pub const DOMAIN: Field = Field::new("Domain", FieldType::Blob, 7);
    pub const FUND_CODE: Field = Field::new("FundCode", FieldType::Blob, 8);
    pub const REMOVE_CODE: Field = Field::new("RemoveCode", FieldType::Blob, 9);
    pub const EXPIRE_CODE: Field = Field::new("ExpireCode", FieldType::Blob, 10);
    pub const CREATE_CODE: Field = Field::new("CreateCode", FieldType::Blob, 11);
    pub const PATHS: Field = Field::new("Paths", FieldType::PathSet, 1);

    pub const ALL: &'static [Field] = &[
        Self::PUBLIC_KEY,
        Self::MESSAGE_KEY,
        Self::SIGNING_PUB_KEY,
        Self::TXN_SIGNATURE,
        Self::GENERATOR,
        Self::SIGNATURE,
        Self::DOMAIN,
        Self::FUND_CODE,
        Self::REMOVE_CODE,
        Self::EXPIRE_CODE,
        Self::CREATE_CODE,
        Self::PATHS,
    ];

    pub const fn new(name: &'static str, field_type: FieldType, nth: u8) -> Self {
        Self {
            name,
            field_type,
            nth,
        }
    }

    /// `(type << 16) | nth`
    pub fn code(&self) -> u32 {
        (u32::from(self.field_type.code()) << 16) | u32::from(self.nth)
    }

    pub fn from_code(code: u32) -> Option<Field> {
        Self::ALL.iter().find(|f| f.code() == code).copied()
    }

    pub fn from_type_and_nth(type_code: u8, nth: u8) -> Option<Field> {
        let code = (u32::from(type_code) << 16) | u32::from(nth);
        Self::from_code(code)
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Self::ALL.iter().find(|f| f.name == name).copied()
    }

    pub fn is_present(code: u32) -> bool {
        Self::from_code(code).is_some()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, {})", self.name, self.field_type, self.nth)
    }
}
