use anyhow::Result;
use itertools::Itertools;
use rand::Rng;
use serde_json::json;
use xrpl_codec::{Blob, BlobTranslator, CodecError, SerializedType, TypeTranslator};

#[test]
fn hint_selects_the_bytes() -> Result<()> {
    let buf = (0u8..16).collect_vec();

    for hint in 0..=buf.len() {
        let mut r = xrpl_codec::BinaryReader::new(&buf);
        let blob = BlobTranslator.decode(&mut r, Some(hint))?;
        assert_eq!(blob.as_bytes(), &buf[..hint]);
        assert_eq!(r.position(), hint);
    }

    let mut r = xrpl_codec::BinaryReader::new(&buf);
    assert_eq!(
        BlobTranslator.decode(&mut r, Some(17)),
        Err(CodecError::EndOfInput {
            wanted: 17,
            remaining: 16
        })
    );
    Ok(())
}

#[test]
fn display_and_json_forms() -> Result<()> {
    let mut rng = rand::thread_rng();
    let bytes = (0..65).map(|_| rng.gen::<u8>()).collect_vec();
    let blob = Blob::from(bytes.clone());

    let s = blob.to_string();
    assert_eq!(s, hex::encode(&bytes));
    assert_eq!(BlobTranslator.from_display_string(&s.to_uppercase())?, blob);
    assert_eq!(blob.to_json(), json!(s));

    let decoded = Blob::decode_solo(&blob.encode_solo()?, Some(bytes.len()))?;
    assert_eq!(decoded, blob);
    Ok(())
}

#[test]
fn odd_or_non_hex_strings_are_rejected() {
    for s in ["a", "0g", "xyz0"] {
        assert!(
            matches!(
                s.parse::<Blob>(),
                Err(CodecError::InvalidRepresentation(_))
            ),
            "{s}"
        );
    }
    assert!(matches!(
        Blob::from_json(&json!(null)),
        Err(CodecError::InvalidRepresentation(_))
    ));
}
