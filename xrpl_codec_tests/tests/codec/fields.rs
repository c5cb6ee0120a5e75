use super::helpers::account;
use anyhow::Result;
use itertools::Itertools;
use rand::seq::SliceRandom;
use xrpl_codec::{
    fields::VL_MAX, write_field, Blob, BytesTree, CodecError, Currency, Field, FieldIter,
    FieldType, Hop, Path, PathSet, SerializedValue,
};

fn sample_value(field: Field) -> Result<SerializedValue> {
    let value = match field.field_type {
        FieldType::Blob => SerializedValue::from(Blob::from(vec![field.nth; 200])),
        FieldType::PathSet => SerializedValue::from(PathSet::from(vec![
            Path::from(vec![Hop::new().with_account(account(3))]),
            Path::from(vec![Hop::new()
                .with_currency(Currency::normalize("USD")?)
                .with_issuer(account(4))]),
        ])),
    };
    Ok(value)
}

#[test]
fn every_registered_field_frames_and_unframes() -> Result<()> {
    let mut rand_rng = rand::thread_rng();

    let mut fields = Field::ALL
        .iter()
        .map(|field| Ok((*field, sample_value(*field)?)))
        .collect::<Result<Vec<_>>>()?;
    fields.shuffle(&mut rand_rng);

    let mut w = BytesTree::new();
    for (field, value) in fields.iter() {
        write_field(*field, value, &mut w)?;
    }
    let buf = w.flatten();

    let read = FieldIter::from(&buf[..]).collect::<xrpl_codec::Result<Vec<_>>>()?;
    assert_eq!(read, fields);
    Ok(())
}

#[test]
fn blob_length_prefix_widths() -> Result<()> {
    for (len, prefix_len) in [(0, 1), (192, 1), (193, 2), (12_480, 2), (12_481, 3)] {
        let value = SerializedValue::from(Blob::from(vec![0u8; len]));
        let mut w = BytesTree::new();
        write_field(Field::DOMAIN, &value, &mut w)?;
        let buf = w.flatten();
        assert_eq!(buf.len(), 1 + prefix_len + len, "{len}");

        let read = FieldIter::from(&buf[..]).exactly_one().ok();
        assert_eq!(read, Some(Ok((Field::DOMAIN, value))));
    }
    Ok(())
}

#[test]
fn oversized_blob_is_rejected() {
    let value = SerializedValue::from(Blob::from(vec![0u8; VL_MAX + 1]));
    let mut w = BytesTree::new();
    assert!(matches!(
        write_field(Field::SIGNATURE, &value, &mut w),
        Err(CodecError::InvalidRepresentation(_))
    ));
}

#[test]
fn json_per_field() -> Result<()> {
    for field in Field::ALL.iter() {
        let value = sample_value(*field)?;
        let json = value.to_json();
        assert_eq!(SerializedValue::from_json(field.field_type, &json)?, value);

        let s = value.to_display_string();
        assert_eq!(
            SerializedValue::from_display_string(field.field_type, &s)?,
            value
        );
    }
    Ok(())
}

#[test]
fn unencodable_hop_writes_nothing() {
    let value = SerializedValue::from(PathSet::from(vec![
        Path::from(vec![Hop::new().with_account(account(5))]),
        Path::from(vec![Hop::new()]),
    ]));
    let mut w = BytesTree::new();
    assert!(matches!(
        write_field(Field::PATHS, &value, &mut w),
        Err(CodecError::InvalidRepresentation(_))
    ));
    assert!(w.is_empty());
}
