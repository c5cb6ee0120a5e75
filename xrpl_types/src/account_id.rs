use crate::error::{CodecError, Result};
use derive_more::{Deref, From, Into};
use std::fmt;
use std::str::FromStr;

/// Version byte prefixed to an account id before base58check encoding.
const ACCOUNT_ID_VERSION: u8 = 0x00;

/// A 160-bit account identifier.
///
/// The wire form is the raw 20 bytes. The human form is the base58check
/// "address" (`r...`) over the ledger's own alphabet.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct AccountId([u8; AccountId::LEN]);

impl AccountId {
    pub const LEN: usize = 20;

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr = <[u8; Self::LEN]>::try_from(bytes).map_err(|_| {
            CodecError::InvalidRepresentation(format!(
                "account id must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    pub fn from_address(address: &str) -> Result<Self> {
        let decoded = bs58::decode(address)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check(Some(ACCOUNT_ID_VERSION))
            .into_vec()?;
        /* The version byte is kept in the decoded payload. */
        match decoded.split_first() {
            Some((&ACCOUNT_ID_VERSION, payload)) => Self::from_bytes(payload),
            _ => Err(CodecError::InvalidRepresentation(format!(
                "address {address} has no account id payload"
            ))),
        }
    }

    pub fn to_address(&self) -> String {
        bs58::encode(&self.0)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check_version(ACCOUNT_ID_VERSION)
            .into_string()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_address())
    }
}
impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_address())
    }
}

impl FromStr for AccountId {
    type Err = CodecError;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_address(s)
    }
}
