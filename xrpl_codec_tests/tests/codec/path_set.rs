use super::helpers::{account, arb_path_set};
use anyhow::Result;
use proptest::prelude::*;
use serde_json::json;
use xrpl_codec::{
    CodecError, Currency, Hop, Path, PathSet, PathSetTranslator, SerializedType, TypeTranslator,
};

proptest! {
    #[test]
    fn binary_round_trip(path_set in arb_path_set()) {
        let buf = path_set.encode_solo()?;
        prop_assert_eq!(buf.last(), Some(&0x00));
        prop_assert_eq!(PathSet::decode_solo(&buf, None)?, path_set);
    }

    #[test]
    fn json_round_trip(path_set in arb_path_set()) {
        let json = path_set.to_json();
        prop_assert_eq!(PathSet::from_json(&json)?, path_set.clone());

        let tr = PathSetTranslator::DEFAULT;
        let s = tr.to_display_string(&path_set);
        prop_assert_eq!(tr.from_display_string(&s)?, path_set);
    }

    #[test]
    fn hex_round_trip(path_set in arb_path_set()) {
        let tr = PathSetTranslator::STRICT;
        let s = tr.to_hex(&path_set)?;
        prop_assert_eq!(tr.from_hex(&s.to_uppercase(), None)?, path_set);
    }
}

#[test]
fn empty_path_set_is_one_byte() -> Result<()> {
    assert_eq!(PathSet::default().encode_solo()?, vec![0x00]);
    assert_eq!(PathSet::decode_solo(&[0x00], None)?, PathSet::default());
    Ok(())
}

#[test]
fn two_account_paths() -> Result<()> {
    let path_set = PathSet::from(vec![
        Path::from(vec![Hop::new().with_account(account(0xAA))]),
        Path::from(vec![Hop::new().with_account(account(0xBB))]),
    ]);

    let expected = format!("01{}ff01{}00", "aa".repeat(20), "bb".repeat(20));
    assert_eq!(PathSetTranslator::DEFAULT.to_hex(&path_set)?, expected);
    Ok(())
}

#[test]
fn native_and_issued_xrp_stay_distinct() -> Result<()> {
    let native = Hop::new().with_currency(Currency::normalize("XRP")?);
    let issued =
        Hop::new().with_currency(Currency::normalize("0000000000000000000000005852500000000000")?);
    assert_ne!(native, issued);

    let path_set = PathSet::from(vec![Path::from(vec![native, issued])]);
    let buf = path_set.encode_solo()?;
    assert_eq!(&buf[1..21], &[0u8; 20]);
    assert_eq!(&buf[22 + 12..22 + 15], b"XRP");

    let decoded = PathSet::decode_solo(&buf, None)?;
    assert!(!decoded[0][0].is_iou_xrp());
    assert!(decoded[0][1].is_iou_xrp());

    let json = path_set.to_json();
    assert_eq!(json[0][0]["currency"], json!("XRP"));
    assert_eq!(
        json[0][1]["currency"],
        json!("0000000000000000000000005852500000000000")
    );
    assert_eq!(PathSet::from_json(&json)?, decoded);
    Ok(())
}

#[test]
fn decode_leaves_following_bytes() -> Result<()> {
    let mut buf = PathSet::from(vec![Path::from(vec![
        Hop::new().with_currency(Currency::normalize("USD")?)
    ])])
    .encode_solo()?;
    buf.extend_from_slice(&[0xDE, 0xAD]);

    let mut r = xrpl_codec::BinaryReader::new(&buf);
    PathSetTranslator::DEFAULT.decode(&mut r, Some(999))?;
    assert_eq!(r.remaining(), 2);

    assert!(matches!(
        PathSet::decode_solo(&buf, None),
        Err(CodecError::MalformedEncoding(_))
    ));
    Ok(())
}

#[test]
fn truncation_anywhere_is_end_of_input() -> Result<()> {
    let path_set = PathSet::from(vec![
        Path::from(vec![Hop::new().with_account(account(1))]),
        Path::from(vec![Hop::new()
            .with_currency(Currency::normalize("EUR")?)
            .with_issuer(account(2))]),
    ]);
    let buf = path_set.encode_solo()?;

    for cut in 0..buf.len() {
        assert!(
            matches!(
                PathSet::decode_solo(&buf[..cut], None),
                Err(CodecError::EndOfInput { .. })
            ),
            "cut at {cut}"
        );
    }
    Ok(())
}
