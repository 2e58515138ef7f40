//! Core types shared by the ipld-canon codecs: the [`Ipld`](ipld::Ipld)
//! value, the [`Codec`](codec::Codec) trait, and the varint, multibase and
//! CID primitives.
#![deny(missing_docs)]
#![deny(warnings)]

pub mod cid;
pub mod codec;
pub mod convert;
pub mod error;
pub mod ipld;
pub mod multibase;
pub mod varint;

pub use ::cid::{Cid, Version};
pub use multihash;
