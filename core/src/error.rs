//! Error definitions for the core primitives.
use thiserror::Error;

/// The varint was empty, longer than ten bytes, or overflowed `u64`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("Invalid uvarint")]
pub struct InvalidVarint;

/// Errors returned by the multibase operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MultibaseError {
    /// The leading character does not name a known base.
    #[error("Unknown base: {0}")]
    UnknownBaseCode(char),
    /// The body contains characters outside the base alphabet, carries
    /// wrong padding, or the input is empty.
    #[error("Invalid base string")]
    InvalidBaseString,
}

/// Errors returned by the CID operations.
#[derive(Debug, Error)]
pub enum CidError {
    /// The input is not a well formed CID (too short, unknown version,
    /// or a multihash length mismatch).
    #[error("Invalid CID: {0}")]
    InvalidCid(#[from] cid::Error),
    /// The text form could not be multibase decoded.
    #[error(transparent)]
    Multibase(#[from] MultibaseError),
}
