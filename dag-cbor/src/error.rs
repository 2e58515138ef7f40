//! dag-cbor error types.
use thiserror::Error;

/// Errors returned by the dag-cbor codec.
#[derive(Debug, Error)]
pub enum CborError {
    /// The input ended before the current item was complete.
    #[error("Unexpected end of DAG-CBOR data")]
    UnexpectedEof,
    /// The initial byte of an item is outside the dag-cbor profile:
    /// reserved or indefinite additional info, half or single precision
    /// floats, or a simple value other than false, true and null.
    #[error("Invalid DAG-CBOR: unexpected cbor code {0:#04x}")]
    UnexpectedCode(u8),
    /// A tag other than 42.
    #[error("Invalid DAG-CBOR: unknown cbor tag {0}, only tag 42 is allowed")]
    UnknownTag(u64),
    /// An integer or length head wider than the value requires.
    #[error("Invalid DAG-CBOR: number not minimally encoded")]
    NumberNotMinimal,
    /// The byte before the binary CID of a link was not the multibase
    /// identity prefix.
    #[error("Invalid DAG-CBOR: invalid CID prefix {0:#04x}")]
    InvalidCidPrefix(u8),
    /// The binary CID inside a link could not be parsed.
    #[error("Invalid DAG-CBOR: invalid CID in link: {0}")]
    Cid(#[from] cid::Error),
    /// A length does not fit the platform, or a link byte string has the
    /// wrong length for the CID it carries.
    #[error("Length out of range")]
    LengthOutOfRange,
    /// A map key was not a text string.
    #[error("Map keys must be strings")]
    NonStringMapKey,
    /// Map keys were equal or not in canonical order.
    #[error("Map keys must be sorted in canonical order")]
    MapKeyOrder,
    /// An integer outside `[-2^64, 2^64 - 1]` was passed to the encoder.
    #[error("Integer out of range for u64/i65")]
    IntegerOutOfRange,
    /// A float was NaN or infinite.
    #[error("Float must be finite, NaN and infinity are not allowed")]
    NonFiniteFloat,
    /// Text bytes were not valid UTF-8.
    #[error("Invalid UTF-8 string")]
    InvalidUtf8,
    /// Arrays and maps were nested deeper than the hard cap.
    #[error("Recursion limit exceeded while decoding DAG-CBOR")]
    RecursionLimit,
    /// The buffer continues after the first decoded object.
    #[error("Multiple objects found, expected a single DAG-CBOR object")]
    MultipleObjects,
}
