//! Field framing: the header and length prefix that precede each value in a
//! serialized object, and that supply the decode hint.

mod framing;
mod iter_fields;

pub use framing::*;
pub use iter_fields::*;

use crate::binary::{BinaryReader, BytesTree};
use crate::value::SerializedValue;
use tracing::trace;
use xrpl_types::{CodecError, Field, FieldType, Result};

/// Appends `field`'s header, then the length prefix if its type has one, then the value.
pub fn write_field(field: Field, value: &SerializedValue, w: &mut BytesTree) -> Result<()> {
    if value.field_type() != field.field_type {
        return Err(CodecError::InvalidRepresentation(format!(
            "{field} holds {:?}, got {:?}",
            field.field_type,
            value.field_type()
        )));
    }

    let mut value_w = BytesTree::new();
    value.encode(&mut value_w)?;

    let mut header_w = BytesTree::new();
    write_field_header(field.field_type.code(), field.nth, &mut header_w);
    if field.field_type.is_length_prefixed() {
        write_vl_length(value_w.len(), &mut header_w)?;
    }

    w.append_tree(header_w);
    w.append_tree(value_w);
    Ok(())
}

pub fn read_field(r: &mut BinaryReader<'_>) -> Result<(Field, SerializedValue)> {
    let start = r.position();

    let (type_code, nth) = read_field_header(r)?;
    let field_type = FieldType::try_from(type_code)?;
    let field = Field::from_type_and_nth(type_code, nth).ok_or_else(|| {
        CodecError::MalformedEncoding(format!("unknown field ({field_type:?}, {nth})"))
    })?;

    let value = if field_type.is_length_prefixed() {
        let len = read_vl_length(r)?;
        let mut value_r = BinaryReader::new(r.read(len)?);
        let value = SerializedValue::decode(field_type, &mut value_r, Some(len))?;
        if !value_r.at_end() {
            return Err(CodecError::MalformedEncoding(format!(
                "{field} left {} byte(s) of its length prefix unread",
                value_r.remaining()
            )));
        }
        value
    } else {
        SerializedValue::decode(field_type, r, None)?
    };

    trace!(%field, bytes = r.position() - start, "read field");
    Ok((field, value))
}
