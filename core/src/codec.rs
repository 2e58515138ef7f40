//! Codec trait and multicodec code constants.
use crate::ipld::Ipld;

/// Multicodec code for raw binary data.
pub const RAW: u64 = 0x55;
/// Multicodec code for the dag-pb codec.
pub const DAG_PB: u64 = 0x70;
/// Multicodec code for the dag-cbor codec.
pub const DAG_CBOR: u64 = 0x71;
/// Multihash code for sha2-256.
pub const SHA2_256: u64 = 0x12;

/// A block codec: a bidirectional mapping between bytes and [`Ipld`].
pub trait Codec {
    /// Multicodec code of the codec.
    const CODE: u64;
    /// Error type returned by the codec.
    type Error;

    /// Encodes a value into bytes.
    fn encode(&self, ipld: &Ipld) -> Result<Vec<u8>, Self::Error>;

    /// Decodes a single value, consuming the whole input.
    fn decode(&self, bytes: &[u8]) -> Result<Ipld, Self::Error>;
}
