use crate::binary::{BinaryReader, BytesTree};
use xrpl_types::{CodecError, Result};

/// Longest value a one-byte length prefix can carry.
pub const VL_MAX_ONE_BYTE: usize = 192;
/// Longest value a two-byte length prefix can carry.
pub const VL_MAX_TWO_BYTES: usize = 12_480;
/// Longest value any length prefix can carry.
pub const VL_MAX: usize = 918_744;

const VL_TWO_BYTE_LEAD: u8 = 193;
const VL_THREE_BYTE_LEAD: u8 = 241;
const VL_LAST_LEAD: u8 = 254;

/// Smallest type code or ordinal that needs its own byte.
const HEADER_WIDE: u8 = 16;

/* field header */

/// Writes the shortest header for `(type_code, nth)`.
///
/// ```text
/// type < 16,  nth < 16:   [type << 4 | nth]
/// type < 16,  nth >= 16:  [type << 4, nth]
/// type >= 16, nth < 16:   [nth, type]
/// type >= 16, nth >= 16:  [0, type, nth]
/// ```
pub fn write_field_header(type_code: u8, nth: u8, w: &mut BytesTree) {
    match (type_code < HEADER_WIDE, nth < HEADER_WIDE) {
        (true, true) => w.append_byte((type_code << 4) | nth),
        (true, false) => {
            w.append_byte(type_code << 4);
            w.append_byte(nth);
        }
        (false, true) => {
            w.append_byte(nth);
            w.append_byte(type_code);
        }
        (false, false) => {
            w.append_byte(0);
            w.append_byte(type_code);
            w.append_byte(nth);
        }
    }
}

/// Reads a header and returns `(type_code, nth)`.
///
/// A value that fits in the nibble but was written to its own byte is rejected,
/// as is a zero type or ordinal.
pub fn read_field_header(r: &mut BinaryReader<'_>) -> Result<(u8, u8)> {
    let b = r.read_one()?;

    let mut type_code = b >> 4;
    if type_code == 0 {
        type_code = r.read_one()?;
        if type_code < HEADER_WIDE {
            return Err(CodecError::MalformedEncoding(format!(
                "non-canonical field header: type {type_code} in its own byte"
            )));
        }
    }

    let mut nth = b & 0x0F;
    if nth == 0 {
        nth = r.read_one()?;
        if nth < HEADER_WIDE {
            return Err(CodecError::MalformedEncoding(format!(
                "non-canonical field header: ordinal {nth} in its own byte"
            )));
        }
    }

    Ok((type_code, nth))
}

/* variable length prefix */

pub fn write_vl_length(len: usize, w: &mut BytesTree) -> Result<()> {
    if len <= VL_MAX_ONE_BYTE {
        w.append_byte(len as u8);
    } else if len <= VL_MAX_TWO_BYTES {
        let len = len - (VL_MAX_ONE_BYTE + 1);
        w.append_byte(VL_TWO_BYTE_LEAD + (len >> 8) as u8);
        w.append_byte((len & 0xFF) as u8);
    } else if len <= VL_MAX {
        let len = len - (VL_MAX_TWO_BYTES + 1);
        w.append_byte(VL_THREE_BYTE_LEAD + (len >> 16) as u8);
        w.append_byte(((len >> 8) & 0xFF) as u8);
        w.append_byte((len & 0xFF) as u8);
    } else {
        return Err(CodecError::InvalidRepresentation(format!(
            "length {len} exceeds the maximum of {VL_MAX}"
        )));
    }
    Ok(())
}

pub fn read_vl_length(r: &mut BinaryReader<'_>) -> Result<usize> {
    let b0 = r.read_one()?;
    let len = match b0 {
        0..=192 => usize::from(b0),
        193..=240 => {
            let b1 = r.read_one()?;
            VL_MAX_ONE_BYTE + 1 + usize::from(b0 - VL_TWO_BYTE_LEAD) * 256 + usize::from(b1)
        }
        241..=VL_LAST_LEAD => {
            let [b1, b2] = r.read_array::<2>()?;
            VL_MAX_TWO_BYTES
                + 1
                + usize::from(b0 - VL_THREE_BYTE_LEAD) * 65_536
                + usize::from(b1) * 256
                + usize::from(b2)
        }
        _ => {
            return Err(CodecError::MalformedEncoding(format!(
                "invalid length prefix byte {b0:#04x}"
            )))
        }
    };
    if len > VL_MAX {
        return Err(CodecError::MalformedEncoding(format!(
            "length {len} exceeds the maximum of {VL_MAX}"
        )));
    }
    Ok(len)
}
