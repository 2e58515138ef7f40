//! Strict codecs for the content addressed data family: dag-cbor, CID,
//! multibase and CAR v1. This crate re-exports the public surface of the
//! workspace members.
#![deny(missing_docs)]
#![deny(warnings)]

pub use ipld_canon_car::{decode_car, decode_car_tuple, CarError, CarHeader};
pub use ipld_canon_cbor::{
    decode_dag_cbor, decode_dag_cbor_multi, encode_dag_cbor, key_order, CborError, DagCborCodec,
};
pub use ipld_canon_core::cid::{decode_cid, encode_cid};
pub use ipld_canon_core::codec::{Codec, DAG_CBOR, DAG_PB, RAW, SHA2_256};
pub use ipld_canon_core::convert::Input;
pub use ipld_canon_core::error::{CidError, InvalidVarint, MultibaseError};
pub use ipld_canon_core::ipld::Ipld;
pub use ipld_canon_core::multibase::{decode_multibase, encode_multibase};
pub use ipld_canon_core::varint::{read_uvarint, write_uvarint};
pub use ipld_canon_core::{Cid, Version};
