use crate::binary::{BinaryReader, BytesTree};
use crate::translator::{SerializedType, TypeTranslator};
use crate::types::{Blob, PathSet};
use derive_more::From;
use serde_json::Value;
use xrpl_types::{FieldType, Result};

/// A decoded value of any wire type this crate can translate.
///
/// Dispatch is by [`FieldType`]. Each arm delegates to its type's default translator.
#[derive(From, PartialEq, Eq, Clone, Debug)]
pub enum SerializedValue {
    Blob(Blob),
    PathSet(PathSet),
}

impl SerializedValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Blob(_) => Blob::FIELD_TYPE,
            Self::PathSet(_) => PathSet::FIELD_TYPE,
        }
    }

    pub fn decode(
        field_type: FieldType,
        r: &mut BinaryReader<'_>,
        hint: Option<usize>,
    ) -> Result<Self> {
        let val = match field_type {
            FieldType::Blob => Self::Blob(Blob::TRANSLATOR.decode(r, hint)?),
            FieldType::PathSet => Self::PathSet(PathSet::TRANSLATOR.decode(r, hint)?),
        };
        Ok(val)
    }

    pub fn encode(&self, w: &mut BytesTree) -> Result<()> {
        match self {
            Self::Blob(v) => Blob::TRANSLATOR.encode(v, w),
            Self::PathSet(v) => PathSet::TRANSLATOR.encode(v, w),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Blob(v) => v.to_json(),
            Self::PathSet(v) => v.to_json(),
        }
    }

    pub fn from_json(field_type: FieldType, json: &Value) -> Result<Self> {
        let val = match field_type {
            FieldType::Blob => Self::Blob(Blob::from_json(json)?),
            FieldType::PathSet => Self::PathSet(PathSet::from_json(json)?),
        };
        Ok(val)
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Self::Blob(v) => Blob::TRANSLATOR.to_display_string(v),
            Self::PathSet(v) => PathSet::TRANSLATOR.to_display_string(v),
        }
    }

    pub fn from_display_string(field_type: FieldType, s: &str) -> Result<Self> {
        let val = match field_type {
            FieldType::Blob => Self::Blob(Blob::TRANSLATOR.from_display_string(s)?),
            FieldType::PathSet => Self::PathSet(PathSet::TRANSLATOR.from_display_string(s)?),
        };
        Ok(val)
    }
}
