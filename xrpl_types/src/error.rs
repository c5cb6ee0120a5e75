use thiserror::Error;

/// Every failure a codec can report.
///
/// Errors are fatal to the value being decoded or parsed. There is no partial
/// result; callers reject the whole input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The cursor ran out of bytes before a structurally required read completed.
    #[error("end of input: wanted {wanted} byte(s), {remaining} remaining")]
    EndOfInput { wanted: usize, remaining: usize },

    /// The bytes were readable but violate a structural invariant.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A JSON or string form that cannot be mapped to the target type.
    #[error("invalid representation: {0}")]
    InvalidRepresentation(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidRepresentation(format!("bad hex: {e}"))
    }
}

impl From<bs58::decode::Error> for CodecError {
    fn from(e: bs58::decode::Error) -> Self {
        Self::InvalidRepresentation(format!("bad address: {e}"))
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRepresentation(format!("bad json: {e}"))
    }
}
