use super::{PATH_BOUNDARY, PATH_SET_END};
use bitflags::bitflags;
use xrpl_types::{AccountId, CodecError, Currency, Result};

bitflags! {
    /// The type byte that precedes every hop on the wire.
    /// Each set bit announces one 20-byte payload field.
    #[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
    pub struct HopType: u8 {
        const ACCOUNT = 0x01;
        const CURRENCY = 0x10;
        const ISSUER = 0x20;
    }
}

/// One link of a payment path.
///
/// The type bitmask is derived from which fields are present. An explicit
/// type is kept only when the wire byte carried bits outside [`HopType::all`],
/// so that those bits survive a re-encode. Its known bits always agree with
/// the fields present.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct Hop {
    account: Option<AccountId>,
    currency: Option<Currency>,
    issuer: Option<AccountId>,
    explicit_type: Option<HopType>,
}

impl Hop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: AccountId) -> Self {
        self.account = Some(account);
        self.refresh_explicit_type();
        self
    }
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self.refresh_explicit_type();
        self
    }
    pub fn with_issuer(mut self, issuer: AccountId) -> Self {
        self.issuer = Some(issuer);
        self.refresh_explicit_type();
        self
    }

    /// Applies a type byte to a hop whose fields are already set.
    ///
    /// Zero means "derive". Otherwise the known bits must match the fields
    /// present; unknown bits are retained verbatim. `0xFF` is the path
    /// boundary and is never a type.
    pub fn with_type_bits(mut self, bits: u8) -> Result<Self> {
        if bits == 0 {
            self.explicit_type = None;
            return Ok(self);
        }
        if bits == PATH_BOUNDARY {
            return Err(CodecError::InvalidRepresentation(format!(
                "hop type {bits:#04x} is the path boundary"
            )));
        }
        let ty = HopType::from_bits_retain(bits);
        let known = ty.intersection(HopType::all());
        if known != self.synthesized_type() {
            return Err(CodecError::InvalidRepresentation(format!(
                "hop type {bits:#04x} disagrees with the fields present ({:#04x})",
                self.synthesized_type().bits()
            )));
        }
        self.explicit_type = if ty == known { None } else { Some(ty) };
        Ok(self)
    }

    pub fn account(&self) -> Option<AccountId> {
        self.account
    }
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }
    pub fn issuer(&self) -> Option<AccountId> {
        self.issuer
    }

    pub fn hop_type(&self) -> HopType {
        self.explicit_type.unwrap_or_else(|| self.synthesized_type())
    }

    pub fn has_explicit_type(&self) -> bool {
        self.explicit_type.is_some()
    }

    pub fn synthesized_type(&self) -> HopType {
        let mut ty = HopType::empty();
        ty.set(HopType::ACCOUNT, self.account.is_some());
        ty.set(HopType::CURRENCY, self.currency.is_some());
        ty.set(HopType::ISSUER, self.issuer.is_some());
        ty
    }

    /// A hop whose type byte would collide with the terminator or the
    /// boundary has no wire form. That is a hop with no fields and no
    /// unknown type bits.
    pub fn check_encodable(&self) -> Result<()> {
        match self.hop_type().bits() {
            PATH_SET_END | PATH_BOUNDARY => Err(CodecError::InvalidRepresentation(format!(
                "hop type {:#04x} has no wire form",
                self.hop_type().bits()
            ))),
            _ => Ok(()),
        }
    }

    /// The currency reads "XRP" but is an issued code, not the native asset.
    pub fn is_iou_xrp(&self) -> bool {
        self.currency.is_some_and(|c| c.is_iou_native_code())
    }

    fn refresh_explicit_type(&mut self) {
        if let Some(ty) = self.explicit_type {
            let unknown = ty.difference(HopType::all());
            self.explicit_type = Some(unknown | self.synthesized_type());
        }
    }
}
