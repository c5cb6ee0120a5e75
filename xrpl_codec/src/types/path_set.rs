use crate::binary::{BinaryReader, BytesTree};
use crate::translator::{SerializedType, TypeTranslator};
use derive_more::{Deref, DerefMut, From, Into};
use serde_json::{Map, Value};
use tracing::{debug, trace};
use xrpl_types::{AccountId, CodecError, Currency, FieldType, Result};

mod hop;

pub use hop::*;

/// Closes the current path; the next hop opens a new one.
pub const PATH_BOUNDARY: u8 = 0xFF;
/// Ends the path set.
pub const PATH_SET_END: u8 = 0x00;

/// An ordered route of hops.
#[derive(From, Into, Deref, DerefMut, PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct Path(Vec<Hop>);

impl FromIterator<Hop> for Path {
    fn from_iter<I: IntoIterator<Item = Hop>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Alternative routes, in the order the router should consider them.
///
/// # Serialization format
///
/// Hops are tagged by a type byte whose bits announce the 20-byte fields that
/// follow, always in the order account, currency, issuer. Paths are separated
/// by [`PATH_BOUNDARY`], and the whole set ends with [`PATH_SET_END`].
/// Nothing is length-prefixed.
///
/// ```text
/// struct PathSet {
///     path_0: Path,
///     boundary: u8,           // 0xFF, only between paths
///     path_1: Path,
///     ...
///     end: u8,                // 0x00
/// }
///
/// struct Path {
///     hop_0: Hop,
///     hop_1: Hop,
///     ...
/// }
///
/// struct Hop {
///     hop_type: u8,           // bits of {0x01, 0x10, 0x20}
///     account: [u8; 20],      // if hop_type & 0x01
///     currency: [u8; 20],     // if hop_type & 0x10; all zero is the native asset
///     issuer: [u8; 20],       // if hop_type & 0x20
/// }
/// ```
///
/// Empty paths have no wire form: they vanish on a binary round trip. A hop
/// with no fields has none either; see [`Hop::check_encodable`].
#[derive(From, Into, Deref, DerefMut, PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct PathSet(Vec<Path>);

impl FromIterator<Path> for PathSet {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl PathSet {
    pub fn hop_count(&self) -> usize {
        self.0.iter().map(|path| path.len()).sum()
    }
}

/// Translator for [`PathSet`].
///
/// By default a type byte with bits outside [`HopType::all`] is accepted and
/// kept on the hop as an explicit type. [`PathSetTranslator::STRICT`] rejects
/// it instead.
#[derive(Clone, Copy, Debug)]
pub struct PathSetTranslator {
    pub strict_hop_types: bool,
}

impl PathSetTranslator {
    pub const DEFAULT: Self = Self {
        strict_hop_types: false,
    };
    pub const STRICT: Self = Self {
        strict_hop_types: true,
    };

    fn decode_hop(&self, type_byte: u8, r: &mut BinaryReader<'_>) -> Result<Hop> {
        let ty = HopType::from_bits_retain(type_byte);
        let unknown = ty.difference(HopType::all());
        if self.strict_hop_types && !unknown.is_empty() {
            debug!(type_byte, "rejecting hop type with unknown bits");
            return Err(CodecError::MalformedEncoding(format!(
                "hop type {type_byte:#04x} has unknown bits {:#04x}",
                unknown.bits()
            )));
        }

        let mut hop = Hop::new();
        if ty.contains(HopType::ACCOUNT) {
            hop = hop.with_account(AccountId::from(r.read_array::<{ AccountId::LEN }>()?));
        }
        if ty.contains(HopType::CURRENCY) {
            let raw: [u8; Currency::LEN] = r.read_array()?;
            hop = hop.with_currency(Currency::from(raw));
        }
        if ty.contains(HopType::ISSUER) {
            hop = hop.with_issuer(AccountId::from(r.read_array::<{ AccountId::LEN }>()?));
        }
        if !unknown.is_empty() {
            hop = hop.with_type_bits(type_byte)?;
        }
        Ok(hop)
    }

    fn encode_hop(&self, hop: &Hop, w: &mut BytesTree) -> Result<()> {
        hop.check_encodable()?;
        let ty = hop.hop_type();
        w.append_byte(ty.bits());
        if let (true, Some(account)) = (ty.contains(HopType::ACCOUNT), hop.account()) {
            w.append(account.as_bytes());
        }
        if let (true, Some(currency)) = (ty.contains(HopType::CURRENCY), hop.currency()) {
            w.append(&currency.to_bytes());
        }
        if let (true, Some(issuer)) = (ty.contains(HopType::ISSUER), hop.issuer()) {
            w.append(issuer.as_bytes());
        }
        Ok(())
    }

    fn hop_to_json(hop: &Hop) -> Value {
        let mut obj = Map::new();
        obj.insert(String::from("type"), Value::from(hop.hop_type().bits()));
        if let Some(account) = hop.account() {
            obj.insert(String::from("account"), Value::String(account.to_address()));
        }
        if let Some(issuer) = hop.issuer() {
            obj.insert(String::from("issuer"), Value::String(issuer.to_address()));
        }
        if let Some(currency) = hop.currency() {
            obj.insert(String::from("currency"), Value::String(currency.json_code()));
        }
        Value::Object(obj)
    }

    fn hop_from_json(json: &Value) -> Result<Hop> {
        let obj = json.as_object().ok_or_else(|| {
            CodecError::InvalidRepresentation(format!("hop must be an object, got {json}"))
        })?;

        let mut hop = Hop::new();
        if let Some(v) = obj.get("account") {
            hop = hop.with_account(AccountId::from_address(Self::json_str(v, "account")?)?);
        }
        if let Some(v) = obj.get("issuer") {
            hop = hop.with_issuer(AccountId::from_address(Self::json_str(v, "issuer")?)?);
        }
        if let Some(v) = obj.get("currency") {
            hop = hop.with_currency(Currency::normalize(Self::json_str(v, "currency")?)?);
        }
        if let Some(v) = obj.get("type") {
            let bits = v
                .as_u64()
                .and_then(|int| u8::try_from(int).ok())
                .ok_or_else(|| {
                    CodecError::InvalidRepresentation(format!("hop type must be a byte, got {v}"))
                })?;
            hop = hop.with_type_bits(bits)?;
        }
        hop.check_encodable()?;
        Ok(hop)
    }

    fn json_str<'v>(v: &'v Value, key: &str) -> Result<&'v str> {
        v.as_str().ok_or_else(|| {
            CodecError::InvalidRepresentation(format!("hop {key} must be a string, got {v}"))
        })
    }
}

impl Default for PathSetTranslator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TypeTranslator for PathSetTranslator {
    type Value = PathSet;

    fn decode(&self, r: &mut BinaryReader<'_>, _hint: Option<usize>) -> Result<PathSet> {
        let start = r.position();
        let mut paths: Vec<Path> = vec![];
        let mut path_open = false;
        loop {
            match r.read_one()? {
                PATH_SET_END => break,
                PATH_BOUNDARY => path_open = false,
                type_byte => {
                    let hop = self.decode_hop(type_byte, r)?;
                    match paths.last_mut() {
                        Some(path) if path_open => path.push(hop),
                        _ => {
                            paths.push(Path(vec![hop]));
                            path_open = true;
                        }
                    }
                }
            }
        }
        let path_set = PathSet(paths);
        trace!(
            paths = path_set.len(),
            hops = path_set.hop_count(),
            bytes = r.position() - start,
            "decoded path set"
        );
        Ok(path_set)
    }

    fn encode(&self, value: &PathSet, w: &mut BytesTree) -> Result<()> {
        let mut set_w = BytesTree::new();
        for (path_i, path) in value.iter().enumerate() {
            if path_i != 0 {
                set_w.append_byte(PATH_BOUNDARY);
            }
            let mut path_w = BytesTree::new();
            for hop in path.iter() {
                self.encode_hop(hop, &mut path_w)?;
            }
            set_w.append_tree(path_w);
        }
        set_w.append_byte(PATH_SET_END);
        trace!(
            paths = value.len(),
            hops = value.hop_count(),
            bytes = set_w.len(),
            "encoded path set"
        );
        w.append_tree(set_w);
        Ok(())
    }

    fn to_json(&self, value: &PathSet) -> Value {
        let paths = value
            .iter()
            .map(|path| Value::Array(path.iter().map(Self::hop_to_json).collect()))
            .collect();
        Value::Array(paths)
    }

    fn from_json(&self, json: &Value) -> Result<PathSet> {
        let paths = json.as_array().ok_or_else(|| {
            CodecError::InvalidRepresentation(format!("path set must be an array, got {json}"))
        })?;
        paths
            .iter()
            .map(|path| {
                let hops = path.as_array().ok_or_else(|| {
                    CodecError::InvalidRepresentation(format!("path must be an array, got {path}"))
                })?;
                hops.iter().map(Self::hop_from_json).collect::<Result<Path>>()
            })
            .collect()
    }
}

impl SerializedType for PathSet {
    type Translator = PathSetTranslator;
    const TRANSLATOR: &'static PathSetTranslator = &PathSetTranslator::DEFAULT;
    const FIELD_TYPE: FieldType = FieldType::PathSet;
}
