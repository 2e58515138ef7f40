//! Conversions into ipld values and the text-or-bytes operation input.
use crate::ipld::Ipld;
use crate::Cid;
use std::collections::BTreeMap;

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Ipld {
                fn from(n: $t) -> Self {
                    Ipld::Integer(n as i128)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<bool> for Ipld {
    fn from(b: bool) -> Self {
        Ipld::Bool(b)
    }
}

impl From<f64> for Ipld {
    fn from(f: f64) -> Self {
        Ipld::Float(f)
    }
}

impl From<&str> for Ipld {
    fn from(s: &str) -> Self {
        Ipld::String(s.to_string())
    }
}

impl From<String> for Ipld {
    fn from(s: String) -> Self {
        Ipld::String(s)
    }
}

impl From<&[u8]> for Ipld {
    fn from(b: &[u8]) -> Self {
        Ipld::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Ipld {
    fn from(b: Vec<u8>) -> Self {
        Ipld::Bytes(b)
    }
}

impl From<Vec<Ipld>> for Ipld {
    fn from(l: Vec<Ipld>) -> Self {
        Ipld::List(l)
    }
}

impl From<BTreeMap<String, Ipld>> for Ipld {
    fn from(m: BTreeMap<String, Ipld>) -> Self {
        Ipld::Map(m)
    }
}

impl From<Cid> for Ipld {
    fn from(cid: Cid) -> Self {
        Ipld::Link(cid)
    }
}

/// Input accepted by the multibase and CID operations: either text or a
/// raw byte sequence. The distinction matters because text may already be
/// a multibase encoding.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    /// A text input.
    Text(&'a str),
    /// A binary input.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(b: &'a [u8]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Input::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Input::Bytes(b)
    }
}
