use crate::binary::{BinaryReader, BytesTree};
use serde_json::Value;
use xrpl_types::{CodecError, FieldType, Result};

/// The contract every wire type implements.
///
/// A translator is a stateless singleton. It converts one value type between
/// its canonical bytes, its JSON form, and its display string.
///
/// `hint` is supplied by whatever frames the value. Its meaning belongs to
/// the type: the blob codec needs it as a byte count, the path set codec
/// ignores it.
pub trait TypeTranslator {
    type Value;

    fn decode(&self, r: &mut BinaryReader<'_>, hint: Option<usize>) -> Result<Self::Value>;

    /// Must be the exact inverse of [`Self::decode`].
    ///
    /// A value the wire cannot represent is [`CodecError::InvalidRepresentation`],
    /// and nothing is appended to `w`.
    fn encode(&self, value: &Self::Value, w: &mut BytesTree) -> Result<()>;

    fn to_json(&self, value: &Self::Value) -> Value;

    fn from_json(&self, json: &Value) -> Result<Self::Value>;

    /// Compact JSON text unless the type has a flatter form.
    fn to_display_string(&self, value: &Self::Value) -> String {
        self.to_json(value).to_string()
    }

    fn from_display_string(&self, s: &str) -> Result<Self::Value> {
        let json: Value = serde_json::from_str(s)?;
        self.from_json(&json)
    }

    fn to_bytes(&self, value: &Self::Value) -> Result<Vec<u8>> {
        let mut w = BytesTree::new();
        self.encode(value, &mut w)?;
        Ok(w.flatten())
    }

    /// Decodes a buffer that holds exactly one value.
    fn from_bytes(&self, buf: &[u8], hint: Option<usize>) -> Result<Self::Value> {
        let mut r = BinaryReader::new(buf);
        let value = self.decode(&mut r, hint)?;
        if !r.at_end() {
            return Err(CodecError::MalformedEncoding(format!(
                "{} trailing byte(s) after value",
                r.remaining()
            )));
        }
        Ok(value)
    }

    fn to_hex(&self, value: &Self::Value) -> Result<String> {
        let buf = self.to_bytes(value)?;
        Ok(hex::encode(buf))
    }

    fn from_hex(&self, s: &str, hint: Option<usize>) -> Result<Self::Value> {
        let buf = hex::decode(s)?;
        self.from_bytes(&buf, hint)
    }
}

/// A value type bound to its translator and wire type.
pub trait SerializedType: Sized + 'static {
    type Translator: TypeTranslator<Value = Self> + 'static;

    const TRANSLATOR: &'static Self::Translator;
    const FIELD_TYPE: FieldType;

    fn encode_solo(&self) -> Result<Vec<u8>> {
        Self::TRANSLATOR.to_bytes(self)
    }

    fn decode_solo(buf: &[u8], hint: Option<usize>) -> Result<Self> {
        Self::TRANSLATOR.from_bytes(buf, hint)
    }

    fn to_json(&self) -> Value {
        Self::TRANSLATOR.to_json(self)
    }

    fn from_json(json: &Value) -> Result<Self> {
        Self::TRANSLATOR.from_json(json)
    }
}
