use crate::error::{CodecError, Result};
use derive_more::{Deref, From, Into};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Human code of the native asset.
pub const NATIVE_CODE: &str = "XRP";

/// Characters permitted in a three-character ISO-style code.
const ISO_SYMBOLS: &[u8] = b"?!@#$%^&*<>(){}[]|";

/// A 160-bit currency code.
///
/// ```text
/// struct StandardCurrency {
///     type:       u8,         // zero
///     reserved:   [u8; 11],   // zero
///     iso_code:   [u8; 3],    // ASCII
///     reserved:   [u8; 5],    // zero
/// }
/// ```
///
/// All-zero bytes are the native asset. Any other pattern is an issued
/// currency, including the standard layout whose ISO code reads "XRP".
/// That code is never the native asset: it encodes to its literal bytes.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Currency([u8; Currency::LEN]);

impl Currency {
    pub const LEN: usize = 20;
    pub const NATIVE: Self = Self([0u8; Self::LEN]);

    const ISO_RANGE: Range<usize> = 12..15;

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr = <[u8; Self::LEN]>::try_from(bytes).map_err(|_| {
            CodecError::InvalidRepresentation(format!(
                "currency must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        self.0
    }

    /// Accepts "XRP", a three-character ISO-style code, or 40 hex characters.
    pub fn normalize(code: &str) -> Result<Self> {
        if code == NATIVE_CODE {
            return Ok(Self::NATIVE);
        }
        if code.len() == 3 {
            let iso = code.as_bytes();
            if !iso.iter().all(|b| Self::is_iso_char(*b)) {
                return Err(CodecError::InvalidRepresentation(format!(
                    "bad currency code {code:?}"
                )));
            }
            let mut bytes = [0u8; Self::LEN];
            bytes[Self::ISO_RANGE].copy_from_slice(iso);
            return Ok(Self(bytes));
        }
        if code.len() == Self::LEN * 2 {
            let bytes = hex::decode(code)?;
            return Self::from_bytes(&bytes);
        }
        Err(CodecError::InvalidRepresentation(format!(
            "bad currency code {code:?}"
        )))
    }

    pub fn is_native(&self) -> bool {
        self.0 == [0u8; Self::LEN]
    }

    /// A non-native code whose human form nevertheless reads "XRP".
    pub fn is_iou_native_code(&self) -> bool {
        self.iso_code() == Some(NATIVE_CODE)
    }

    /// The ISO code, if these bytes use the standard layout.
    pub fn iso_code(&self) -> Option<&str> {
        if self.is_native() {
            return None;
        }
        let standard = self
            .0
            .iter()
            .enumerate()
            .all(|(i, b)| Self::ISO_RANGE.contains(&i) || *b == 0);
        let iso = &self.0[Self::ISO_RANGE];
        if standard && iso.iter().all(|b| Self::is_iso_char(*b)) {
            std::str::from_utf8(iso).ok()
        } else {
            None
        }
    }

    /// "XRP" for the native asset, the ISO code for standard layouts, 40 hex
    /// characters otherwise.
    pub fn human_code(&self) -> String {
        if self.is_native() {
            return NATIVE_CODE.to_owned();
        }
        match self.iso_code() {
            Some(iso) => iso.to_owned(),
            None => hex::encode_upper(self.0),
        }
    }

    /// Like [`Self::human_code`], except an issued "XRP" code is rendered as
    /// hex so that reading it back does not yield the native asset.
    pub fn json_code(&self) -> String {
        if self.is_iou_native_code() {
            hex::encode_upper(self.0)
        } else {
            self.human_code()
        }
    }

    fn is_iso_char(b: u8) -> bool {
        b.is_ascii_alphanumeric() || ISO_SYMBOLS.contains(&b)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human_code())
    }
}
impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_iou_native_code() {
            write!(f, "Currency({}, issued)", self.human_code())
        } else {
            write!(f, "Currency({})", self.human_code())
        }
    }
}

impl FromStr for Currency {
    type Err = CodecError;
    fn from_str(s: &str) -> Result<Self> {
        Self::normalize(s)
    }
}
