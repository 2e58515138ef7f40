//! Strict dag-cbor codec: the canonical CBOR profile used as the wire
//! form for content addressed data. The decoder rejects everything the
//! profile forbids (indefinite lengths, non-minimal heads, unordered map
//! keys, non-finite and narrow floats, tags other than 42); the encoder
//! only ever emits the canonical form.
#![deny(missing_docs)]
#![deny(warnings)]

mod decode;
mod encode;
pub mod error;

use std::cmp::Ordering;
use std::io::Cursor;

pub use error::CborError;
use ipld_canon_core::codec::{Codec, DAG_CBOR};
use ipld_canon_core::ipld::Ipld;

/// Canonical dag-cbor map key order: ascending byte length first, ties
/// broken by the lexicographic order of the UTF-8 bytes.
pub fn key_order(a: &str, b: &str) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

/// Decodes a single value, consuming the whole buffer.
pub fn decode_dag_cbor(buf: &[u8]) -> Result<Ipld, CborError> {
    let mut r = Cursor::new(buf);
    let ipld = decode::read_ipld(&mut r, 0)?;
    if (r.position() as usize) < buf.len() {
        return Err(CborError::MultipleObjects);
    }
    Ok(ipld)
}

/// Decodes values back to back until the buffer is exhausted. An empty
/// buffer yields an empty list.
pub fn decode_dag_cbor_multi(buf: &[u8]) -> Result<Vec<Ipld>, CborError> {
    let mut r = Cursor::new(buf);
    let mut values = Vec::new();
    while (r.position() as usize) < buf.len() {
        values.push(decode::read_ipld(&mut r, 0)?);
    }
    Ok(values)
}

/// Encodes a value into canonical dag-cbor bytes.
pub fn encode_dag_cbor(ipld: &Ipld) -> Result<Vec<u8>, CborError> {
    let mut buf = Vec::new();
    encode::write_ipld(&mut buf, ipld)?;
    Ok(buf)
}

/// The dag-cbor codec.
#[derive(Clone, Copy, Debug, Default)]
pub struct DagCborCodec;

impl Codec for DagCborCodec {
    const CODE: u64 = DAG_CBOR;
    type Error = CborError;

    fn encode(&self, ipld: &Ipld) -> Result<Vec<u8>, CborError> {
        encode_dag_cbor(ipld)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Ipld, CborError> {
        decode_dag_cbor(bytes)
    }
}
