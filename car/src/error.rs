//! CAR error types.
use ipld_canon_cbor::CborError;
use ipld_canon_core::error::InvalidVarint;
use thiserror::Error;

/// Errors returned by the CAR reader.
#[derive(Debug, Error)]
pub enum CarError {
    /// A frame length points past the end of the archive.
    #[error("Unexpected end of CAR data")]
    UnexpectedEof,
    /// The header declares a version other than 1.
    #[error("Unsupported CAR version {0}, version must be 1")]
    UnsupportedCarVersion(i128),
    /// A required header key is absent.
    #[error("Missing CAR header key {0:?}")]
    MissingHeaderKey(&'static str),
    /// The header roots list is empty.
    #[error("Roots is empty")]
    EmptyRoots,
    /// The header is not a map of the expected shape.
    #[error("Invalid CAR header: {0}")]
    InvalidCarHeader(String),
    /// A block frame does not start with a parseable binary CID.
    #[error("Failed to read CID of block: {0}")]
    InvalidBlockCid(cid::Error),
    /// A frame length varint is malformed.
    #[error(transparent)]
    Varint(#[from] InvalidVarint),
    /// A header or block payload is not valid dag-cbor.
    #[error(transparent)]
    Cbor(#[from] CborError),
}
