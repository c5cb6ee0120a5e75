use proptest::prelude::*;
use xrpl_codec::{AccountId, Currency, Hop, Path, PathSet};

pub fn account(b: u8) -> AccountId {
    AccountId::from([b; 20])
}

pub fn arb_account() -> impl Strategy<Value = AccountId> {
    any::<[u8; 20]>().prop_map(AccountId::from)
}

pub fn arb_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::NATIVE),
        "[A-Z]{3}".prop_map(|code| Currency::normalize(&code).unwrap()),
        any::<[u8; 20]>().prop_map(Currency::from),
    ]
}

/// A hop with at least one field. A hop with none has no wire form.
pub fn arb_hop() -> impl Strategy<Value = Hop> {
    (
        proptest::option::of(arb_account()),
        proptest::option::of(arb_currency()),
        proptest::option::of(arb_account()),
    )
        .prop_filter("hop needs a field", |(a, c, i)| {
            a.is_some() || c.is_some() || i.is_some()
        })
        .prop_map(|(account, currency, issuer)| {
            let mut hop = Hop::new();
            if let Some(account) = account {
                hop = hop.with_account(account);
            }
            if let Some(currency) = currency {
                hop = hop.with_currency(currency);
            }
            if let Some(issuer) = issuer {
                hop = hop.with_issuer(issuer);
            }
            hop
        })
}

/// Paths are non-empty. Empty paths do not survive the wire.
pub fn arb_path_set() -> impl Strategy<Value = PathSet> {
    let path = prop::collection::vec(arb_hop(), 1..5).prop_map(Path::from);
    prop::collection::vec(path, 0..5).prop_map(PathSet::from)
}
