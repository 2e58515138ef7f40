//! Reader for CAR v1 archives: a dag-cbor header frame followed by
//! length-prefixed frames of `binary CID || block bytes`. The reader
//! makes a single forward pass over a contiguous buffer and decodes
//! every block as dag-cbor.
#![deny(missing_docs)]
#![deny(warnings)]

pub mod error;

use std::collections::BTreeMap;
use std::io::Cursor;

pub use error::CarError;
use ipld_canon_cbor::decode_dag_cbor;
use ipld_canon_core::ipld::Ipld;
use ipld_canon_core::varint::read_uvarint;
use ipld_canon_core::Cid;

/// Decoded CAR v1 header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarHeader {
    /// Archive format version, always 1.
    pub version: u64,
    /// Roots of the DAG contained in the archive.
    pub roots: Vec<Cid>,
}

/// Decodes an archive into its header and blocks, keyed by the binary
/// CID bytes. A CID appearing more than once keeps its last block.
pub fn decode_car(buf: &[u8]) -> Result<(CarHeader, BTreeMap<Vec<u8>, Ipld>), CarError> {
    let (header, blocks) = decode_car_tuple(buf)?;
    Ok((header, blocks.into_iter().collect()))
}

/// Decodes an archive into its header and blocks, preserving every block
/// in source order.
pub fn decode_car_tuple(buf: &[u8]) -> Result<(CarHeader, Vec<(Vec<u8>, Ipld)>), CarError> {
    let (payload, mut pos) = read_frame(buf, 0)?;
    let header = decode_header(payload)?;
    let mut blocks = Vec::new();
    while pos < buf.len() {
        let (payload, next) = read_frame(buf, pos)?;
        blocks.push(read_block(payload)?);
        pos = next;
    }
    Ok((header, blocks))
}

/// Reads one `uvarint length || payload` frame starting at `pos`.
fn read_frame(buf: &[u8], pos: usize) -> Result<(&[u8], usize), CarError> {
    let (len, pos) = read_uvarint(buf, pos)?;
    let len = usize::try_from(len).map_err(|_| CarError::UnexpectedEof)?;
    let end = pos.checked_add(len).ok_or(CarError::UnexpectedEof)?;
    if end > buf.len() {
        return Err(CarError::UnexpectedEof);
    }
    Ok((&buf[pos..end], end))
}

fn decode_header(payload: &[u8]) -> Result<CarHeader, CarError> {
    let map = match decode_dag_cbor(payload)? {
        Ipld::Map(map) => map,
        other => {
            return Err(CarError::InvalidCarHeader(format!(
                "expected a map, got {}",
                other.kind()
            )))
        }
    };
    let version = match map.get("version") {
        Some(Ipld::Integer(1)) => 1,
        Some(Ipld::Integer(version)) => return Err(CarError::UnsupportedCarVersion(*version)),
        Some(other) => {
            return Err(CarError::InvalidCarHeader(format!(
                "version must be an integer, got {}",
                other.kind()
            )))
        }
        None => return Err(CarError::MissingHeaderKey("version")),
    };
    let roots = match map.get("roots") {
        Some(Ipld::List(roots)) => {
            let mut cids = Vec::with_capacity(roots.len());
            for root in roots {
                match root {
                    Ipld::Link(cid) => cids.push(*cid),
                    other => {
                        return Err(CarError::InvalidCarHeader(format!(
                            "roots must be links, got {}",
                            other.kind()
                        )))
                    }
                }
            }
            cids
        }
        Some(other) => {
            return Err(CarError::InvalidCarHeader(format!(
                "roots must be a list, got {}",
                other.kind()
            )))
        }
        None => return Err(CarError::MissingHeaderKey("roots")),
    };
    if roots.is_empty() {
        return Err(CarError::EmptyRoots);
    }
    Ok(CarHeader { version, roots })
}

/// Splits a block frame into its leading binary CID and the dag-cbor
/// payload that fills the rest of the frame.
fn read_block(payload: &[u8]) -> Result<(Vec<u8>, Ipld), CarError> {
    let mut r = Cursor::new(payload);
    let cid = Cid::read_bytes(&mut r).map_err(CarError::InvalidBlockCid)?;
    let value = decode_dag_cbor(&payload[r.position() as usize..])?;
    Ok((cid.to_bytes(), value))
}
