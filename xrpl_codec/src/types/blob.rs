use crate::binary::{BinaryReader, BytesTree};
use crate::translator::{SerializedType, TypeTranslator};
use derive_more::{Deref, From, Into};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use xrpl_types::{CodecError, FieldType, Result};

/// An opaque variable-length value: keys, signatures, domains.
///
/// The length is never part of the value's own encoding. The field framing
/// that precedes it supplies the length as the decode hint.
#[derive(From, Into, Deref, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Blob {
    fn from(buf: &[u8]) -> Self {
        Self(buf.to_vec())
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BlobTranslator.to_display_string(self))
    }
}
impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({self})")
    }
}

impl FromStr for Blob {
    type Err = CodecError;
    fn from_str(s: &str) -> Result<Self> {
        BlobTranslator.from_display_string(s)
    }
}

pub struct BlobTranslator;

impl TypeTranslator for BlobTranslator {
    type Value = Blob;

    fn decode(&self, r: &mut BinaryReader<'_>, hint: Option<usize>) -> Result<Blob> {
        let len = hint.ok_or_else(|| {
            CodecError::MalformedEncoding(String::from("Blob decode requires a length hint"))
        })?;
        let buf = r.read(len)?;
        Ok(Blob::from(buf))
    }

    fn encode(&self, value: &Blob, w: &mut BytesTree) -> Result<()> {
        w.append(&value.0);
        Ok(())
    }

    fn to_json(&self, value: &Blob) -> Value {
        Value::String(self.to_display_string(value))
    }

    fn from_json(&self, json: &Value) -> Result<Blob> {
        match json.as_str() {
            Some(s) => self.from_display_string(s),
            None => Err(CodecError::InvalidRepresentation(format!(
                "Blob must be a hex string, got {json}"
            ))),
        }
    }

    fn to_display_string(&self, value: &Blob) -> String {
        hex::encode(&value.0)
    }

    fn from_display_string(&self, s: &str) -> Result<Blob> {
        let buf = hex::decode(s)?;
        Ok(Blob(buf))
    }
}

impl SerializedType for Blob {
    type Translator = BlobTranslator;
    const TRANSLATOR: &'static BlobTranslator = &BlobTranslator;
    const FIELD_TYPE: FieldType = FieldType::Blob;
}
